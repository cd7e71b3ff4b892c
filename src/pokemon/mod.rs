// 宝可梦数据模块 - 图鉴的规范数据模型
// 属性、种族值、种族信息、进化链

pub mod evolution;
pub mod species;
pub mod stats;
pub mod types;

// 重新导出主要类型
pub use evolution::{build_stages, EvolutionNode, EvolutionStages};
pub use species::{
    growth_rate_label, Ability, Generation, Pokemon, PokemonId, PokemonSummary, SpeciesInfo,
};
pub use stats::{BaseStat, StatBlock, StatType, MAX_BASE_STAT};
pub use types::{type_color, PokemonType};
