use std::fmt::Write;

use crate::device::schema::{DeviceTable, cell_to_string};

const MAX_CELL_WIDTH: usize = 50;

fn clip(text: String) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text;
    }
    let mut clipped: String = text.chars().take(MAX_CELL_WIDTH - 3).collect();
    clipped.push_str("...");
    clipped
}

/// Render the last `count` rows as a right-aligned text table, each row
/// prefixed with its position in the full table.
pub fn render_tail(table: &DeviceTable, count: usize) -> String {
    if table.is_empty() {
        return format!("Empty device table\nColumns: [{}]\n", table.columns().join(", "));
    }

    let start = table.len().saturating_sub(count);
    let body: Vec<(String, Vec<String>)> = table.rows()[start..]
        .iter()
        .enumerate()
        .map(|(offset, row)| {
            let cells = row
                .cells()
                .iter()
                .map(|c| clip(cell_to_string(c).replace('\n', " ")))
                .collect();
            ((start + offset).to_string(), cells)
        })
        .collect();

    let index_width = body.iter().map(|(i, _)| i.len()).max().unwrap_or(0);
    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(col, name)| {
            body.iter()
                .map(|(_, cells)| cells[col].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let _ = write!(out, "{:index_width$}", "");
    for (name, width) in table.columns().iter().zip(widths.iter().copied()) {
        let _ = write!(out, "  {name:>width$}");
    }
    out.push('\n');

    for (index, cells) in &body {
        let _ = write!(out, "{index:<index_width$}");
        for (cell, width) in cells.iter().zip(widths.iter().copied()) {
            let _ = write!(out, "  {cell:>width$}");
        }
        out.push('\n');
    }
    out
}
