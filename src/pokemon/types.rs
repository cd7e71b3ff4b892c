// Pokemon属性标签
// 属性顺序有意义：第一个属性为主属性，决定配色

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::PokedexError;

// 属性未知时使用的颜色
pub const FALLBACK_TYPE_COLOR: &str = "#68A090";

// Pokemon属性类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Normal,     // 一般
    Fighting,   // 格斗
    Flying,     // 飞行
    Poison,     // 毒
    Ground,     // 地面
    Rock,       // 岩石
    Bug,        // 虫
    Ghost,      // 幽灵
    Steel,      // 钢
    Fire,       // 火
    Water,      // 水
    Grass,      // 草
    Electric,   // 电
    Psychic,    // 超能力
    Ice,        // 冰
    Dragon,     // 龙
    Dark,       // 恶
    Fairy,      // 妖精
    Stellar,    // 星晶
    Unknown,    // ???
    Shadow,     // 暗
}

impl PokemonType {
    pub const ALL: [PokemonType; 21] = [
        PokemonType::Normal,
        PokemonType::Fighting,
        PokemonType::Flying,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Rock,
        PokemonType::Bug,
        PokemonType::Ghost,
        PokemonType::Steel,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Grass,
        PokemonType::Electric,
        PokemonType::Psychic,
        PokemonType::Ice,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Fairy,
        PokemonType::Stellar,
        PokemonType::Unknown,
        PokemonType::Shadow,
    ];

    // 接口使用的属性名
    pub fn name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fighting => "fighting",
            PokemonType::Flying => "flying",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Rock => "rock",
            PokemonType::Bug => "bug",
            PokemonType::Ghost => "ghost",
            PokemonType::Steel => "steel",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Grass => "grass",
            PokemonType::Electric => "electric",
            PokemonType::Psychic => "psychic",
            PokemonType::Ice => "ice",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Fairy => "fairy",
            PokemonType::Stellar => "stellar",
            PokemonType::Unknown => "unknown",
            PokemonType::Shadow => "shadow",
        }
    }

    pub fn from_name(name: &str) -> Option<PokemonType> {
        let name = name.trim().to_ascii_lowercase();
        PokemonType::ALL.iter().copied().find(|t| t.name() == name)
    }

    // 属性主题色
    pub fn color(&self) -> &'static str {
        match self {
            PokemonType::Normal => "#A8A77A",
            PokemonType::Fire => "#EE8130",
            PokemonType::Water => "#6390F0",
            PokemonType::Electric => "#F7D02C",
            PokemonType::Grass => "#7AC74C",
            PokemonType::Ice => "#96D9D6",
            PokemonType::Fighting => "#C22E28",
            PokemonType::Poison => "#A33EA1",
            PokemonType::Ground => "#E2BF65",
            PokemonType::Flying => "#A98FF3",
            PokemonType::Psychic => "#F95587",
            PokemonType::Bug => "#A6B91A",
            PokemonType::Rock => "#B6A136",
            PokemonType::Ghost => "#735797",
            PokemonType::Dragon => "#6F35FC",
            PokemonType::Dark => "#705746",
            PokemonType::Steel => "#B7B7CE",
            PokemonType::Fairy => "#D685AD",
            PokemonType::Stellar => "#FFD700",
            PokemonType::Unknown => FALLBACK_TYPE_COLOR,
            PokemonType::Shadow => "#604E82",
        }
    }
}

// 按属性名取颜色，未知属性使用默认色
pub fn type_color(name: &str) -> &'static str {
    PokemonType::from_name(name)
        .map(|t| t.color())
        .unwrap_or(FALLBACK_TYPE_COLOR)
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PokemonType {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PokemonType::from_name(s)
            .ok_or_else(|| PokedexError::ParseError(format!("未知属性: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip_covers_every_type() {
        for t in PokemonType::ALL {
            assert_eq!(PokemonType::from_name(t.name()), Some(t));
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("FIRE".parse::<PokemonType>().unwrap(), PokemonType::Fire);
        assert!("plasma".parse::<PokemonType>().is_err());
    }

    #[test]
    fn test_type_color_fallback() {
        assert_eq!(type_color("fire"), "#EE8130");
        assert_eq!(type_color("plasma"), FALLBACK_TYPE_COLOR);
    }

    #[test]
    fn test_serde_uses_api_names() {
        let json = serde_json::to_string(&PokemonType::Psychic).unwrap();
        assert_eq!(json, "\"psychic\"");
    }
}
