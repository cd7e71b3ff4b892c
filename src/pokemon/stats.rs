// Pokemon种族值
// 六项固定能力值，种族值范围 1-255

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::PokedexError;

// 种族值上限，用于能力条比例
pub const MAX_BASE_STAT: u16 = 255;

// 基础能力值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatType {
    HP,         // 体力
    Attack,     // 攻击
    Defense,    // 防御
    SpAttack,   // 特攻
    SpDefense,  // 特防
    Speed,      // 速度
}

impl StatType {
    pub const ALL: [StatType; 6] = [
        StatType::HP,
        StatType::Attack,
        StatType::Defense,
        StatType::SpAttack,
        StatType::SpDefense,
        StatType::Speed,
    ];

    // 接口使用的能力名
    pub fn api_name(&self) -> &'static str {
        match self {
            StatType::HP => "hp",
            StatType::Attack => "attack",
            StatType::Defense => "defense",
            StatType::SpAttack => "special-attack",
            StatType::SpDefense => "special-defense",
            StatType::Speed => "speed",
        }
    }

    pub fn from_api_name(name: &str) -> Option<StatType> {
        StatType::ALL.iter().copied().find(|s| s.api_name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatType::HP => "HP",
            StatType::Attack => "Attack",
            StatType::Defense => "Defense",
            StatType::SpAttack => "Sp. Atk",
            StatType::SpDefense => "Sp. Def",
            StatType::Speed => "Speed",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StatType::HP => "#ef4444",
            StatType::Attack => "#f97316",
            StatType::Defense => "#eab308",
            StatType::SpAttack => "#3b82f6",
            StatType::SpDefense => "#22c55e",
            StatType::Speed => "#ec4899",
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatType {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatType::from_api_name(s)
            .ok_or_else(|| PokedexError::ParseError(format!("未知能力项: {}", s)))
    }
}

// 单项种族值与努力值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStat {
    pub stat: StatType,
    pub base_value: u16,
    pub effort: u8,
}

impl BaseStat {
    pub fn new(stat: StatType, base_value: u16, effort: u8) -> Self {
        Self { stat, base_value, effort }
    }

    // 能力条填充比例 0.0-1.0
    pub fn fill_ratio(&self) -> f32 {
        fill_ratio(self.base_value)
    }
}

pub fn fill_ratio(value: u16) -> f32 {
    (value.min(MAX_BASE_STAT) as f32) / (MAX_BASE_STAT as f32)
}

// 一只Pokemon的全部种族值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    stats: Vec<BaseStat>,
}

impl StatBlock {
    pub fn new(stats: Vec<BaseStat>) -> Self {
        Self { stats }
    }

    pub fn from_values(values: [u16; 6]) -> Self {
        let stats = StatType::ALL
            .iter()
            .zip(values)
            .map(|(&stat, value)| BaseStat::new(stat, value, 0))
            .collect();
        Self { stats }
    }

    // 缺失的能力项按0计
    pub fn get(&self, stat: StatType) -> u16 {
        self.stats
            .iter()
            .find(|s| s.stat == stat)
            .map(|s| s.base_value)
            .unwrap_or(0)
    }

    pub fn effort(&self, stat: StatType) -> u8 {
        self.stats
            .iter()
            .find(|s| s.stat == stat)
            .map(|s| s.effort)
            .unwrap_or(0)
    }

    // 种族值总和
    pub fn total(&self) -> u32 {
        self.stats.iter().map(|s| s.base_value as u32).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BaseStat> {
        self.stats.iter()
    }

    // 按固定顺序输出六项，缺项补0
    pub fn ordered(&self) -> Vec<BaseStat> {
        StatType::ALL
            .iter()
            .map(|&stat| {
                self.stats
                    .iter()
                    .find(|s| s.stat == stat)
                    .copied()
                    .unwrap_or(BaseStat::new(stat, 0, 0))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
