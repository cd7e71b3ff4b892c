// 详情页渲染

use super::{stat_bar, type_badges, BAR_WIDTH};
use crate::states::{DetailState, ProfileView};
use crate::utils::zero_pad_id;

// 导航行宽度
const NAV_WIDTH: usize = 40;

pub fn render_detail(state: &DetailState) -> String {
    match state {
        DetailState::Loading => "Loading...".to_string(),
        DetailState::NotFound => "Pokémon not found.".to_string(),
        DetailState::Failed(message) => format!("Failed to load Pokémon: {}", message),
        DetailState::Loaded(view) => render_profile(view),
    }
}

fn render_profile(view: &ProfileView) -> String {
    let mut lines = vec![format!("#{} {}  {}", view.padded_id, view.name, type_badges(&view.types))];
    if let Some(ref genus) = view.genus {
        lines.push(genus.clone());
    }
    if let Some(ref text) = view.flavor_text {
        lines.push(String::new());
        lines.push(text.clone());
    }

    lines.push(String::new());
    lines.push("Base Stats".to_string());
    for bar in &view.stat_bars {
        lines.push(format!(
            "  {:<8} {:>3} {}",
            bar.label,
            bar.value,
            stat_bar(bar.fill, BAR_WIDTH)
        ));
    }
    lines.push(format!("  {:<8} {:>3}", "Total", view.stat_total));

    lines.push(String::new());
    lines.push("Profile".to_string());
    lines.push(format!("  Height       {} m ({} ft)", view.height.meters, view.height.feet));
    lines.push(format!("  Weight       {} kg ({} lbs)", view.weight.kg, view.weight.lbs));
    lines.push(format!("  Gender       {}", view.gender.describe()));
    lines.push(format!("  Catch Rate   {}", view.capture_rate));
    if let Some(happiness) = view.base_happiness {
        lines.push(format!("  Happiness    {}", happiness));
    }
    if let Some(cycles) = view.hatch_counter {
        lines.push(format!("  Egg Cycles   {}", cycles));
    }
    lines.push(format!("  Growth Rate  {}", view.growth_rate));
    if let Some(ref generation) = view.generation {
        lines.push(format!("  Generation   {}", generation));
    }

    lines.push(String::new());
    lines.push("Abilities".to_string());
    for ability in &view.abilities {
        let hidden = if ability.hidden { " (hidden)" } else { "" };
        lines.push(format!("  {}{}", ability.name, hidden));
    }

    if let Some(ref stages) = view.evolution {
        lines.push(String::new());
        lines.push("Evolution".to_string());
        let rendered: Vec<String> = stages
            .iter()
            .map(|stage| {
                stage
                    .iter()
                    .map(|entry| {
                        if entry.current {
                            format!("*{}*", entry.name)
                        } else {
                            entry.name.clone()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" / ")
            })
            .collect();
        lines.push(format!("  {}", rendered.join(" -> ")));
    }

    if let Some(nav) = render_navigation(view) {
        lines.push(String::new());
        lines.push(nav);
    }

    lines.join("\n")
}

// 上一只在左，下一只在右
fn render_navigation(view: &ProfileView) -> Option<String> {
    let prev = view.prev_id.map(|id| format!("< #{}", zero_pad_id(id)));
    let next = view.next_id.map(|id| format!("#{} >", zero_pad_id(id)));
    match (prev, next) {
        (None, None) => None,
        (Some(prev), None) => Some(prev),
        (None, Some(next)) => Some(format!("{:>width$}", next, width = NAV_WIDTH)),
        (Some(prev), Some(next)) => Some(format!("{}{:>width$}", prev, next, width = NAV_WIDTH - prev.len())),
    }
}
