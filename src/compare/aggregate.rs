// 对比汇总
// 每项能力的最大值（用于高亮领先者）、种族值总和、对比表格的行投影

use indexmap::IndexMap;
use serde::Serialize;

use crate::pokemon::{Pokemon, PokemonId, PokemonType, StatType};
use crate::pokemon::stats::fill_ratio;
use crate::utils::text::{format_display_name, zero_pad_id};
use crate::utils::units::{convert_height, convert_weight};

pub fn stat_total(pokemon: &Pokemon) -> u32 {
    pokemon.stats.total()
}

/// 某项能力在所有对比对象中的最大种族值，空列表为0
pub fn max_by_stat(pokemon: &[Pokemon], stat: StatType) -> u16 {
    pokemon.iter().map(|p| p.stats.get(stat)).max().unwrap_or(0)
}

/// 是否领先：等于最大值即领先（并列时全部领先），单只时没有领先者
pub fn is_leading(candidate: &Pokemon, stat: StatType, pokemon: &[Pokemon]) -> bool {
    pokemon.len() > 1 && candidate.stats.get(stat) == max_by_stat(pokemon, stat)
}

// 六项能力的最大值，按固定顺序
pub fn stat_maxima(pokemon: &[Pokemon]) -> IndexMap<StatType, u16> {
    StatType::ALL
        .iter()
        .map(|&stat| (stat, max_by_stat(pokemon, stat)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonColumn {
    pub id: PokemonId,
    pub padded_id: String,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub primary_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCell {
    pub pokemon_id: PokemonId,
    pub name: String,
    pub value: u16,
    pub leading: bool,
    pub fill: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub stat: StatType,
    pub label: &'static str,
    pub max: u16,
    pub cells: Vec<StatCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalCell {
    pub pokemon_id: PokemonId,
    pub name: String,
    pub total: u32,
}

// 身高、体重、特性、捕获率
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub columns: Vec<ComparisonColumn>,
    pub stat_rows: Vec<StatRow>,
    pub totals: Vec<TotalCell>,
    pub attribute_rows: Vec<AttributeRow>,
}

impl ComparisonView {
    pub fn build(pokemon: &[Pokemon]) -> Self {
        let maxima = stat_maxima(pokemon);

        let columns = pokemon
            .iter()
            .map(|p| ComparisonColumn {
                id: p.id,
                padded_id: zero_pad_id(p.id),
                name: p.display_name(),
                types: p.types.clone(),
                primary_color: p.primary_type().color(),
            })
            .collect();

        let stat_rows = maxima
            .iter()
            .map(|(&stat, &max)| StatRow {
                stat,
                label: stat.label(),
                max,
                cells: pokemon
                    .iter()
                    .map(|p| {
                        let value = p.stats.get(stat);
                        StatCell {
                            pokemon_id: p.id,
                            name: p.display_name(),
                            value,
                            leading: pokemon.len() > 1 && value == max,
                            fill: fill_ratio(value),
                        }
                    })
                    .collect(),
            })
            .collect();

        let totals = pokemon
            .iter()
            .map(|p| TotalCell {
                pokemon_id: p.id,
                name: p.display_name(),
                total: stat_total(p),
            })
            .collect();

        Self {
            columns,
            stat_rows,
            totals,
            attribute_rows: attribute_rows(pokemon),
        }
    }

    pub fn row(&self, stat: StatType) -> Option<&StatRow> {
        self.stat_rows.iter().find(|r| r.stat == stat)
    }

    pub fn leaders(&self, stat: StatType) -> Vec<PokemonId> {
        self.row(stat)
            .map(|r| r.cells.iter().filter(|c| c.leading).map(|c| c.pokemon_id).collect())
            .unwrap_or_default()
    }
}

fn attribute_rows(pokemon: &[Pokemon]) -> Vec<AttributeRow> {
    vec![
        AttributeRow {
            label: "Height",
            values: pokemon
                .iter()
                .map(|p| format!("{} m", convert_height(p.height).meters))
                .collect(),
        },
        AttributeRow {
            label: "Weight",
            values: pokemon
                .iter()
                .map(|p| format!("{} kg", convert_weight(p.weight).kg))
                .collect(),
        },
        AttributeRow {
            label: "Abilities",
            values: pokemon
                .iter()
                .map(|p| {
                    p.abilities
                        .iter()
                        .map(|a| format_display_name(&a.name))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect(),
        },
        AttributeRow {
            label: "Catch Rate",
            values: pokemon
                .iter()
                .map(|p| p.species.capture_rate.to_string())
                .collect(),
        },
    ]
}

/// 对比页状态：选择不足两只时提示继续选择
#[derive(Debug, Clone, PartialEq)]
pub enum CompareStatus {
    NeedMore { selected: usize },
    Ready(ComparisonView),
}

impl CompareStatus {
    pub fn evaluate(selected: usize, details: &[Pokemon]) -> Self {
        if selected < 2 {
            CompareStatus::NeedMore { selected }
        } else {
            CompareStatus::Ready(ComparisonView::build(details))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::{Ability, SpeciesInfo, StatBlock};

    fn pokemon(id: PokemonId, name: &str, stats: [u16; 6]) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            types: vec![PokemonType::Fire],
            stats: StatBlock::from_values(stats),
            abilities: vec![
                Ability { name: "blaze".to_string(), is_hidden: false },
                Ability { name: "solar-power".to_string(), is_hidden: true },
            ],
            height: 17,
            weight: 905,
            species: SpeciesInfo {
                generation: None,
                capture_rate: 45,
                base_happiness: Some(50),
                gender_rate: 1,
                growth_rate_id: Some(4),
                hatch_counter: Some(20),
                localized_name: None,
                genus: None,
                flavor_text: None,
                evolution_chain_id: None,
                evolution_chain: Vec::new(),
            },
        }
    }

    fn trio() -> Vec<Pokemon> {
        vec![
            pokemon(1, "first", [50, 50, 50, 50, 50, 90]),
            pokemon(2, "second", [60, 50, 50, 50, 50, 100]),
            pokemon(3, "third", [40, 50, 50, 50, 50, 100]),
        ]
    }

    #[test]
    fn test_stat_total() {
        let charizard = pokemon(6, "charizard", [78, 84, 78, 109, 85, 100]);
        assert_eq!(stat_total(&charizard), 534);
    }

    #[test]
    fn test_is_leading_with_tie() {
        let entries = trio();
        assert!(!is_leading(&entries[0], StatType::Speed, &entries));
        assert!(is_leading(&entries[1], StatType::Speed, &entries));
        assert!(is_leading(&entries[2], StatType::Speed, &entries));
    }

    #[test]
    fn test_all_tied_are_all_leading() {
        let entries = trio();
        assert!(entries.iter().all(|p| is_leading(p, StatType::Attack, &entries)));
    }

    #[test]
    fn test_single_entry_has_no_leader() {
        let single = vec![pokemon(1, "solo", [50, 50, 50, 50, 50, 50])];
        assert!(!is_leading(&single[0], StatType::HP, &single));
        assert_eq!(max_by_stat(&single, StatType::HP), 50);
        assert_eq!(max_by_stat(&[], StatType::HP), 0);
    }

    #[test]
    fn test_stat_maxima_order() {
        let maxima = stat_maxima(&trio());
        let stats: Vec<StatType> = maxima.keys().copied().collect();
        assert_eq!(stats, StatType::ALL.to_vec());
        assert_eq!(maxima[&StatType::HP], 60);
    }

    #[test]
    fn test_comparison_view() {
        let view = ComparisonView::build(&trio());
        assert_eq!(view.columns.len(), 3);
        assert_eq!(view.columns[0].padded_id, "001");
        assert_eq!(view.stat_rows.len(), 6);
        assert_eq!(view.leaders(StatType::Speed), vec![2, 3]);
        assert_eq!(view.leaders(StatType::HP), vec![2]);
        assert_eq!(view.totals[1].total, 360);

        let height = &view.attribute_rows[0];
        assert_eq!(height.label, "Height");
        assert_eq!(height.values[0], "1.7 m");
        assert_eq!(view.attribute_rows[1].values[0], "90.5 kg");
        assert_eq!(view.attribute_rows[2].values[0], "Blaze, Solar Power");
        assert_eq!(view.attribute_rows[3].values[0], "45");
    }

    #[test]
    fn test_compare_status() {
        let entries = trio();
        assert_eq!(
            CompareStatus::evaluate(1, &entries[..1]),
            CompareStatus::NeedMore { selected: 1 }
        );
        assert!(matches!(CompareStatus::evaluate(3, &entries), CompareStatus::Ready(_)));
    }
}
