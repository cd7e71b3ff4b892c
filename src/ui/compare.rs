// 对比页渲染，领先值以 * 标记

use super::{stat_bar, type_badges};
use crate::compare::{CompareStatus, ComparisonView};

const CELL_WIDTH: usize = 22;
const COMPARE_BAR_WIDTH: usize = 10;

pub fn render_comparison(status: &CompareStatus) -> String {
    match status {
        CompareStatus::NeedMore { selected } => format!(
            "Select at least 2 Pokémon to compare ({} selected).",
            selected
        ),
        CompareStatus::Ready(view) => render_view(view),
    }
}

fn row(label: &str, cells: impl IntoIterator<Item = String>) -> String {
    let mut line = format!("{:<12}", label);
    for cell in cells {
        line.push_str(&format!("{:<width$}", cell, width = CELL_WIDTH));
    }
    line.trim_end().to_string()
}

fn render_view(view: &ComparisonView) -> String {
    let mut lines = vec![
        row("", view.columns.iter().map(|c| format!("#{} {}", c.padded_id, c.name))),
        row("", view.columns.iter().map(|c| type_badges(&c.types))),
    ];

    for stat_row in &view.stat_rows {
        lines.push(row(
            stat_row.label,
            stat_row.cells.iter().map(|cell| {
                let mark = if cell.leading { "*" } else { " " };
                format!("{:>3}{} {}", cell.value, mark, stat_bar(cell.fill, COMPARE_BAR_WIDTH))
            }),
        ));
    }
    lines.push(row("Total", view.totals.iter().map(|t| t.total.to_string())));

    for attribute in &view.attribute_rows {
        lines.push(row(attribute.label, attribute.values.iter().cloned()));
    }

    lines.join("\n")
}
