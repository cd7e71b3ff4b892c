// 终端界面
// 把浏览、详情、对比三个视图渲染为纯文本

pub mod browse;
pub mod compare;
pub mod detail;

pub use browse::{render_browse, render_filter_options};
pub use compare::render_comparison;
pub use detail::render_detail;

use crate::pokemon::PokemonType;

pub const BAR_WIDTH: usize = 30;

/// 固定宽度的能力条，fill 取值 0.0..=1.0
pub fn stat_bar(fill: f32, width: usize) -> String {
    let filled = ((fill.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn type_badges(types: &[PokemonType]) -> String {
    types
        .iter()
        .map(|t| format!("[{}]", t.name()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_bar() {
        assert_eq!(stat_bar(0.0, 4), "....");
        assert_eq!(stat_bar(0.5, 4), "##..");
        assert_eq!(stat_bar(1.0, 4), "####");
        assert_eq!(stat_bar(1.5, 4), "####");
    }

    #[test]
    fn test_type_badges() {
        assert_eq!(type_badges(&[PokemonType::Fire, PokemonType::Flying]), "[fire] [flying]");
        assert_eq!(type_badges(&[]), "");
    }
}
