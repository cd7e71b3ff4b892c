// 浏览页筛选条件
// 把筛选条件转换为合取谓词：只包含已设置的条件，全部条件需同时满足

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::core::error::PokedexError;
use crate::pokemon::{Generation, PokemonId, PokemonSummary, PokemonType};

// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    Id,
    Name,
    StatTotal,
}

// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::StatTotal => "total",
        };
        f.write_str(name)
    }
}

impl FromStr for SortField {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "number" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "total" | "stat-total" | "base_stat_total" => Ok(SortField::StatTotal),
            other => Err(PokedexError::InvalidInput(format!("未知排序字段: {}", other))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(PokedexError::InvalidInput(format!("未知排序方向: {}", other))),
        }
    }
}

/// 浏览页的完整筛选与排序条件，整体替换
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub type_filter: Option<PokemonType>,
    pub generation_filter: Option<Generation>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_type(mut self, pokemon_type: PokemonType) -> Self {
        self.type_filter = Some(pokemon_type);
        self
    }

    pub fn with_generation(mut self, generation: Generation) -> Self {
        self.generation_filter = Some(generation);
        self
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }

    // 搜索文本变化时延迟请求，其他变化立即请求
    pub fn debounce_delay(&self, next: &FilterCriteria, search_debounce: Duration) -> Duration {
        if self.search_text != next.search_text {
            search_debounce
        } else {
            Duration::ZERO
        }
    }
}

/// 单个谓词条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    // 编号上限（含）
    MaxId(PokemonId),
    // 名称包含（不区分大小写），保存小写形式
    NameContains(String),
    HasType(PokemonType),
    InGeneration(Generation),
}

impl Condition {
    pub fn matches(&self, pokemon: &PokemonSummary) -> bool {
        match self {
            Condition::MaxId(max) => pokemon.id <= *max,
            Condition::NameContains(text) => pokemon.name.to_lowercase().contains(text.as_str()),
            Condition::HasType(t) => pokemon.types.contains(t),
            Condition::InGeneration(g) => pokemon.generation.as_ref() == Some(g),
        }
    }
}

/// 构建合取条件，编号上限始终存在
pub fn build_conditions(criteria: &FilterCriteria, max_id: PokemonId) -> Vec<Condition> {
    let mut conditions = vec![Condition::MaxId(max_id)];

    let search = criteria.search_text.trim();
    if !search.is_empty() {
        conditions.push(Condition::NameContains(search.to_lowercase()));
    }

    if let Some(pokemon_type) = criteria.type_filter {
        conditions.push(Condition::HasType(pokemon_type));
    }

    if let Some(ref generation) = criteria.generation_filter {
        conditions.push(Condition::InGeneration(generation.clone()));
    }

    conditions
}

pub fn matches_all(conditions: &[Condition], pokemon: &PokemonSummary) -> bool {
    conditions.iter().all(|c| c.matches(pokemon))
}

// 本地筛选，与服务端谓词语义一致
pub fn filter_local<'a>(
    conditions: &[Condition],
    pokemon: &'a [PokemonSummary],
) -> Vec<&'a PokemonSummary> {
    pokemon.iter().filter(|p| matches_all(conditions, p)).collect()
}

/// 筛选控件的可选项
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    pub types: Vec<PokemonType>,
    pub generations: Vec<Generation>,
}
