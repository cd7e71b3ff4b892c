// 宝可梦图鉴数据模型
// 与外部接口结构无关的内部规范形态，由 data::mapper 负责转换

use serde::{Deserialize, Serialize};

use super::evolution::EvolutionNode;
use super::stats::StatBlock;
use super::types::PokemonType;
use crate::utils::text::format_display_name;

pub type PokemonId = u32;

// 世代标签，例如 "generation-i"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(pub String);

impl Generation {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // "generation-iv" -> "Gen IV"
    pub fn label(&self) -> String {
        match self.0.strip_prefix("generation-") {
            Some(numeral) if !numeral.is_empty() && numeral.chars().all(|c| "ivx".contains(c)) => {
                format!("Gen {}", numeral.to_ascii_uppercase())
            }
            _ => format_display_name(&self.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

// 种族附加信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    pub generation: Option<Generation>,
    pub capture_rate: u8,
    pub base_happiness: Option<u8>,
    // -1 = 无性别，0-8 = 雌性占八分之几
    pub gender_rate: i8,
    pub growth_rate_id: Option<u32>,
    pub hatch_counter: Option<u32>,
    pub localized_name: Option<String>,
    pub genus: Option<String>,
    pub flavor_text: Option<String>,
    pub evolution_chain_id: Option<u32>,
    pub evolution_chain: Vec<EvolutionNode>,
}

// 列表项：浏览页卡片所需的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: PokemonId,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub stats: StatBlock,
    pub generation: Option<Generation>,
}

// 完整的Pokemon记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub stats: StatBlock,
    pub abilities: Vec<Ability>,
    // 分米
    pub height: u32,
    // 百克
    pub weight: u32,
    pub species: SpeciesInfo,
}

impl PokemonSummary {
    // 只有编号的占位摘要，详情加载前用于确定选择
    pub fn placeholder(id: PokemonId) -> Self {
        Self {
            id,
            name: String::new(),
            types: Vec::new(),
            stats: StatBlock::default(),
            generation: None,
        }
    }

    pub fn display_name(&self) -> String {
        format_display_name(&self.name)
    }

    pub fn primary_type(&self) -> PokemonType {
        self.types.first().copied().unwrap_or(PokemonType::Normal)
    }

    pub fn stat_total(&self) -> u32 {
        self.stats.total()
    }
}

impl Pokemon {
    pub fn display_name(&self) -> String {
        format_display_name(&self.name)
    }

    // 优先使用本地化种族名
    pub fn species_display_name(&self) -> String {
        self.species
            .localized_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.display_name())
    }

    pub fn primary_type(&self) -> PokemonType {
        self.types.first().copied().unwrap_or(PokemonType::Normal)
    }

    pub fn stat_total(&self) -> u32 {
        self.stats.total()
    }

    pub fn summary(&self) -> PokemonSummary {
        PokemonSummary {
            id: self.id,
            name: self.name.clone(),
            types: self.types.clone(),
            stats: self.stats.clone(),
            generation: self.species.generation.clone(),
        }
    }
}

// 成长速度标签
pub fn growth_rate_label(growth_rate_id: Option<u32>) -> &'static str {
    match growth_rate_id {
        Some(1) => "Slow",
        Some(2) => "Medium",
        Some(3) => "Fast",
        Some(4) => "Medium Slow",
        Some(5) => "Slow",
        Some(6) => "Fast",
        _ => "Unknown",
    }
}
