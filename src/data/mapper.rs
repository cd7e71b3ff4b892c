// 外部接口结构 -> 内部规范模型
// 以及内部谓词/排序 -> 外部 where / order_by 参数

use serde_json::{json, Map, Value};
use log::warn;

use super::schema::{
    PokemonAbilitySlot, PokemonStatRow, PokemonTypeSlot, RawLookupData, RawPokemonDetail,
    RawPokemonListItem, RawSpecies,
};
use crate::browse::{Condition, FilterOptions, ServerOrder, ServerOrderField};
use crate::pokemon::{
    Ability, BaseStat, EvolutionNode, Generation, Pokemon, PokemonSummary, PokemonType,
    SpeciesInfo, StatBlock, StatType,
};

fn map_types(slots: &[PokemonTypeSlot]) -> Vec<PokemonType> {
    slots
        .iter()
        .map(|slot| {
            let name = &slot.pokemon_v2_type.name;
            PokemonType::from_name(name).unwrap_or_else(|| {
                warn!("未知属性 {}，按 unknown 处理", name);
                PokemonType::Unknown
            })
        })
        .collect()
}

fn map_stats(rows: &[PokemonStatRow]) -> StatBlock {
    let stats = rows
        .iter()
        .filter_map(|row| match StatType::from_api_name(&row.pokemon_v2_stat.name) {
            Some(stat) => Some(BaseStat::new(stat, row.base_stat, row.effort.unwrap_or(0))),
            None => {
                warn!("忽略未知能力项: {}", row.pokemon_v2_stat.name);
                None
            }
        })
        .collect();
    StatBlock::new(stats)
}

fn map_abilities(slots: &[PokemonAbilitySlot]) -> Vec<Ability> {
    slots
        .iter()
        .map(|slot| Ability {
            name: slot.pokemon_v2_ability.name.clone(),
            is_hidden: slot.is_hidden,
        })
        .collect()
}

fn map_species(raw: Option<&RawSpecies>) -> SpeciesInfo {
    let Some(raw) = raw else {
        return SpeciesInfo {
            generation: None,
            capture_rate: 0,
            base_happiness: None,
            gender_rate: -1,
            growth_rate_id: None,
            hatch_counter: None,
            localized_name: None,
            genus: None,
            flavor_text: None,
            evolution_chain_id: None,
            evolution_chain: Vec::new(),
        };
    };

    let names = raw.pokemon_v2_pokemonspeciesnames.first();

    SpeciesInfo {
        generation: raw
            .pokemon_v2_generation
            .as_ref()
            .map(|g| Generation::new(g.name.clone())),
        capture_rate: raw.capture_rate.unwrap_or(0),
        base_happiness: raw.base_happiness,
        gender_rate: raw.gender_rate.unwrap_or(-1),
        growth_rate_id: raw.growth_rate_id,
        hatch_counter: raw.hatch_counter,
        localized_name: names.and_then(|n| n.name.clone()),
        genus: names.and_then(|n| n.genus.clone()).filter(|g| !g.is_empty()),
        flavor_text: raw
            .pokemon_v2_pokemonspeciesflavortexts
            .first()
            .map(|f| f.flavor_text.clone()),
        evolution_chain_id: raw.evolution_chain_id,
        evolution_chain: raw
            .pokemon_v2_evolutionchain
            .as_ref()
            .map(|chain| {
                chain
                    .pokemon_v2_pokemonspecies
                    .iter()
                    .map(|s| EvolutionNode::new(s.id, s.name.clone(), s.evolves_from_species_id))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

pub fn summary_from_raw(raw: &RawPokemonListItem) -> PokemonSummary {
    PokemonSummary {
        id: raw.id,
        name: raw.name.clone(),
        types: map_types(&raw.pokemon_v2_pokemontypes),
        stats: map_stats(&raw.pokemon_v2_pokemonstats),
        generation: raw
            .pokemon_v2_pokemonspecy
            .as_ref()
            .and_then(|s| s.pokemon_v2_generation.as_ref())
            .map(|g| Generation::new(g.name.clone())),
    }
}

pub fn pokemon_from_raw(raw: &RawPokemonDetail) -> Pokemon {
    Pokemon {
        id: raw.id,
        name: raw.name.clone(),
        types: map_types(&raw.pokemon_v2_pokemontypes),
        stats: map_stats(&raw.pokemon_v2_pokemonstats),
        abilities: map_abilities(&raw.pokemon_v2_pokemonabilities),
        height: raw.height.unwrap_or(0),
        weight: raw.weight.unwrap_or(0),
        species: map_species(raw.pokemon_v2_pokemonspecy.as_ref()),
    }
}

pub fn filter_options_from_raw(raw: &RawLookupData) -> FilterOptions {
    FilterOptions {
        types: raw
            .pokemon_v2_type
            .iter()
            .filter_map(|t| PokemonType::from_name(&t.name))
            .collect(),
        generations: raw
            .pokemon_v2_generation
            .iter()
            .map(|g| Generation::new(g.name.clone()))
            .collect(),
    }
}

// LIKE 模式中的通配符需要转义
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn condition_to_json(condition: &Condition) -> Value {
    match condition {
        Condition::MaxId(max) => json!({ "id": { "_lte": max } }),
        Condition::NameContains(text) => {
            json!({ "name": { "_ilike": format!("%{}%", escape_like(text)) } })
        }
        Condition::HasType(t) => json!({
            "pokemon_v2_pokemontypes": {
                "pokemon_v2_type": { "name": { "_eq": t.name() } }
            }
        }),
        Condition::InGeneration(g) => json!({
            "pokemon_v2_pokemonspecy": {
                "pokemon_v2_generation": { "name": { "_eq": g.as_str() } }
            }
        }),
    }
}

pub fn where_clause(conditions: &[Condition]) -> Value {
    let parts: Vec<Value> = conditions.iter().map(condition_to_json).collect();
    json!({ "_and": parts })
}

pub fn order_by_clause(order: ServerOrder) -> Value {
    let field = match order.field {
        ServerOrderField::Id => "id",
        ServerOrderField::Name => "name",
    };
    let mut entry = Map::new();
    entry.insert(field.to_string(), Value::from(order.order.as_str()));
    Value::Array(vec![Value::Object(entry)])
}
