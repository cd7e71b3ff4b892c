// 详情页状态
// 加载单只宝可梦并构建详情页视图；查询结果为空时进入“未找到”状态而不是错误状态

use serde::Serialize;
use std::sync::Arc;
use log::{debug, error, info};

use super::request::RequestGuard;
use crate::constants::MAX_POKEMON_ID;
use crate::data::PokedexApi;
use crate::pokemon::{
    growth_rate_label, EvolutionStages, Pokemon, PokemonId, PokemonType, StatType,
};
use crate::utils::{
    clean_display_text, convert_height, convert_weight, format_display_name, gender_ratio,
    zero_pad_id, artwork_url, GenderRatio, Height, Weight,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatBar {
    pub stat: StatType,
    pub label: &'static str,
    pub value: u16,
    pub fill: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityEntry {
    pub name: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionEntry {
    pub id: PokemonId,
    pub name: String,
    pub padded_id: String,
    pub current: bool,
}

/// 详情页视图
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub id: PokemonId,
    pub padded_id: String,
    pub name: String,
    pub genus: Option<String>,
    pub flavor_text: Option<String>,
    pub artwork: String,
    pub types: Vec<PokemonType>,
    pub primary_color: &'static str,
    pub stat_bars: Vec<StatBar>,
    pub stat_total: u32,
    pub height: Height,
    pub weight: Weight,
    pub gender: GenderRatio,
    pub capture_rate: u8,
    pub base_happiness: Option<u8>,
    pub hatch_counter: Option<u32>,
    pub growth_rate: &'static str,
    pub generation: Option<String>,
    pub abilities: Vec<AbilityEntry>,
    // 只有一个形态时为 None
    pub evolution: Option<Vec<Vec<EvolutionEntry>>>,
    pub prev_id: Option<PokemonId>,
    pub next_id: Option<PokemonId>,
}

/// 相邻编号：大于1才有上一只，小于 max_id 才有下一只
pub fn neighbours(id: PokemonId, max_id: PokemonId) -> (Option<PokemonId>, Option<PokemonId>) {
    let prev = (id > 1).then(|| id - 1);
    let next = (id < max_id).then(|| id + 1);
    (prev, next)
}

impl ProfileView {
    pub fn build(pokemon: &Pokemon) -> Self {
        Self::build_within(pokemon, MAX_POKEMON_ID)
    }

    pub fn build_within(pokemon: &Pokemon, max_id: PokemonId) -> Self {
        let species = &pokemon.species;

        let stat_bars = pokemon
            .stats
            .ordered()
            .into_iter()
            .map(|s| StatBar {
                stat: s.stat,
                label: s.stat.label(),
                value: s.base_value,
                fill: s.fill_ratio(),
                color: s.stat.color(),
            })
            .collect();

        let stages = EvolutionStages::build(&species.evolution_chain);
        let evolution = stages.is_displayable().then(|| {
            stages
                .stages()
                .iter()
                .map(|stage| {
                    stage
                        .iter()
                        .map(|node| EvolutionEntry {
                            id: node.id,
                            name: format_display_name(&node.name),
                            padded_id: zero_pad_id(node.id),
                            current: node.id == pokemon.id,
                        })
                        .collect()
                })
                .collect()
        });

        let (prev_id, next_id) = neighbours(pokemon.id, max_id);

        Self {
            id: pokemon.id,
            padded_id: zero_pad_id(pokemon.id),
            name: pokemon.species_display_name(),
            genus: species.genus.clone(),
            flavor_text: species
                .flavor_text
                .as_deref()
                .map(clean_display_text)
                .filter(|t| !t.is_empty()),
            artwork: artwork_url(pokemon.id),
            types: pokemon.types.clone(),
            primary_color: pokemon.primary_type().color(),
            stat_bars,
            stat_total: pokemon.stat_total(),
            height: convert_height(pokemon.height),
            weight: convert_weight(pokemon.weight),
            gender: gender_ratio(species.gender_rate),
            capture_rate: species.capture_rate,
            base_happiness: species.base_happiness,
            hatch_counter: species.hatch_counter,
            growth_rate: growth_rate_label(species.growth_rate_id),
            generation: species.generation.as_ref().map(|g| g.label()),
            abilities: pokemon
                .abilities
                .iter()
                .map(|a| AbilityEntry {
                    name: format_display_name(&a.name),
                    hidden: a.is_hidden,
                })
                .collect(),
            evolution,
            prev_id,
            next_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    NotFound,
    Loaded(Box<ProfileView>),
    Failed(String),
}

impl DetailState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, DetailState::Loaded(_))
    }
}

/// 详情加载器，快速切换编号时只保留最后一次的结果
pub struct DetailLoader<A: PokedexApi + ?Sized> {
    api: Arc<A>,
    guard: RequestGuard,
    max_id: PokemonId,
}

impl<A: PokedexApi + ?Sized> DetailLoader<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            guard: RequestGuard::new(),
            max_id: MAX_POKEMON_ID,
        }
    }

    // 导航上界，对应 BrowseConfig::max_pokemon_id
    pub fn with_max_id(mut self, max_id: PokemonId) -> Self {
        self.max_id = max_id;
        self
    }

    /// 结果已被更新的请求取代时返回 None
    pub async fn load(&self, id: PokemonId) -> Option<DetailState> {
        let token = self.guard.issue();
        let result = self.api.pokemon_detail(id).await;

        if !self.guard.is_current(token) {
            debug!("丢弃过期的详情结果 #{}", id);
            return None;
        }

        Some(match result {
            Ok(Some(pokemon)) => {
                info!("已加载详情 #{} {}", pokemon.id, pokemon.name);
                DetailState::Loaded(Box::new(ProfileView::build_within(&pokemon, self.max_id)))
            }
            Ok(None) => DetailState::NotFound,
            Err(e) => {
                error!("详情加载失败 #{}: {}", id, e);
                DetailState::Failed(e.to_string())
            }
        })
    }
}
