// 浏览页渲染

use super::type_badges;
use crate::browse::FilterOptions;
use crate::states::BrowseSnapshot;
use crate::utils::{format_display_name, zero_pad_id};

pub fn render_browse(snapshot: &BrowseSnapshot) -> String {
    if snapshot.loading {
        return "Loading...".to_string();
    }
    if let Some(ref error) = snapshot.error {
        return format!("Failed to load Pokémon: {}", error);
    }
    if snapshot.items.is_empty() {
        return "No Pokémon found.".to_string();
    }

    let mut lines = vec![format!(
        "{} Pokémon (page {} of {})",
        snapshot.total_count,
        snapshot.page + 1,
        snapshot.total_pages
    )];

    for pokemon in &snapshot.items {
        lines.push(format!(
            "#{:<5} {:<24} {:<20} total {}",
            zero_pad_id(pokemon.id),
            format_display_name(&pokemon.name),
            type_badges(&pokemon.types),
            pokemon.stat_total()
        ));
    }

    let buttons: Vec<String> = snapshot
        .page_buttons
        .iter()
        .map(|&p| {
            if p == snapshot.page {
                format!("[{}]", p + 1)
            } else {
                (p + 1).to_string()
            }
        })
        .collect();
    let prev = if snapshot.has_prev { "<" } else { " " };
    let next = if snapshot.has_next { ">" } else { " " };
    lines.push(format!("{} {} {}", prev, buttons.join(" "), next));

    lines.join("\n")
}

pub fn render_filter_options(options: &FilterOptions) -> String {
    let types: Vec<&str> = options.types.iter().map(|t| t.name()).collect();
    let generations: Vec<String> = options
        .generations
        .iter()
        .map(|g| format!("{} ({})", g.label(), g.as_str()))
        .collect();

    format!(
        "Types: {}\nGenerations: {}",
        types.join(", "),
        generations.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::FilterCriteria;
    use crate::pokemon::{Generation, PokemonSummary, PokemonType, StatBlock};

    fn snapshot() -> BrowseSnapshot {
        BrowseSnapshot {
            criteria: FilterCriteria::new(),
            page: 1,
            loading: false,
            items: vec![PokemonSummary {
                id: 25,
                name: "pikachu".to_string(),
                types: vec![PokemonType::Electric],
                stats: StatBlock::from_values([35, 55, 40, 50, 50, 90]),
                generation: None,
            }],
            total_count: 30,
            total_pages: 2,
            page_buttons: vec![0, 1],
            has_prev: true,
            has_next: false,
            error: None,
        }
    }

    #[test]
    fn test_render_page() {
        let text = render_browse(&snapshot());
        assert!(text.starts_with("30 Pokémon (page 2 of 2)"));
        assert!(text.contains("#025"));
        assert!(text.contains("Pikachu"));
        assert!(text.contains("[electric]"));
        assert!(text.contains("total 320"));
        assert!(text.ends_with("< 1 [2]  "));
    }

    #[test]
    fn test_render_empty_and_error() {
        let mut empty = snapshot();
        empty.items.clear();
        assert_eq!(render_browse(&empty), "No Pokémon found.");

        empty.error = Some("HTTP 500".to_string());
        assert!(render_browse(&empty).contains("HTTP 500"));
    }

    #[test]
    fn test_render_filter_options() {
        let options = FilterOptions {
            types: vec![PokemonType::Bug, PokemonType::Dark],
            generations: vec![Generation::new("generation-i")],
        };
        assert_eq!(
            render_filter_options(&options),
            "Types: bug, dark\nGenerations: Gen I (generation-i)"
        );
    }
}
