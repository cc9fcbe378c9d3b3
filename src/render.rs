// File: ./src/render.rs
//! Plain-text rendering of the month grid.
//!
//! One line per grid row: a right-aligned label column, then one glyph
//! per month with an extra gap at every year boundary.

use crate::color_utils;
use crate::model::{Grid, GridCell, RowLabel, StageModel};
use crate::months::MONTHS_IN_YEAR;
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "A life remaining time in months";
pub const EMPTY_GLYPH: char = '·';
pub const LABEL_ARROW: &str = "→";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Emit 24-bit ANSI colors around classified cells.
    pub color: bool,
    pub target_years: u32,
}

pub fn subtitle(target_years: u32) -> String {
    format!("(Average life expectancy of {} years)", target_years)
}

pub fn caption(grid: &Grid) -> String {
    let years = grid.layout.years_per_row;
    format!(
        "1 row = {} months = {} year{}",
        grid.layout.months_per_row(),
        years,
        if years == 1 { "" } else { "s" }
    )
}

/// `"Name (duration) →"`, the text shown left of a row where a stage begins.
pub fn label_text(label: &RowLabel) -> String {
    format!("{} ({}) {}", label.name, label.duration, LABEL_ARROW)
}

fn cell_glyph(cell: &GridCell, color: bool) -> String {
    match (cell.stage, cell.color) {
        (Some(kind), Some(c)) if color => color_utils::ansi_fg(c, &kind.glyph().to_string()),
        (Some(kind), _) => kind.glyph().to_string(),
        _ => EMPTY_GLYPH.to_string(),
    }
}

/// Width of the label column: the widest label, or zero without labels.
pub fn label_width(grid: &Grid) -> usize {
    grid.labels()
        .map(|(_, label)| label_text(label).width())
        .max()
        .unwrap_or(0)
}

pub fn render_grid_lines(grid: &Grid, opts: &TextOptions) -> Vec<String> {
    let width = label_width(grid);

    grid.rows
        .iter()
        .map(|row| {
            let label = row.label.as_ref().map(label_text).unwrap_or_default();
            let pad = width.saturating_sub(label.width());

            let mut line = String::with_capacity(width + row.cells.len() * 2);
            line.push_str(&" ".repeat(pad));
            line.push_str(&label);
            if width > 0 {
                line.push(' ');
            }
            for cell in &row.cells {
                line.push_str(&cell_glyph(cell, opts.color));
                if cell.year_break_after {
                    line.push(' ');
                }
            }
            line
        })
        .collect()
}

/// Legend for the primary stages: glyph, name and length.
pub fn render_legend(model: &StageModel, opts: &TextOptions) -> String {
    model
        .primary()
        .map(|stage| {
            let glyph = stage.kind.glyph().to_string();
            let glyph = if opts.color {
                color_utils::ansi_fg(stage.color, &glyph)
            } else {
                glyph
            };
            let (years, months) = crate::months::split_years(stage.duration().max(0));
            format!("{} {} {}y{}m", glyph, stage.name, years, months)
        })
        .collect::<Vec<_>>()
        .join("   ")
}

pub fn render_text(model: &StageModel, grid: &Grid, opts: &TextOptions) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&subtitle(opts.target_years));
    out.push('\n');
    out.push_str(&caption(grid));
    out.push_str("\n\n");
    for line in render_grid_lines(grid, opts) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&render_legend(model, opts));
    out.push('\n');
    out
}

/// One line per stage with its interval and length, then the dependent spans.
pub fn render_stage_table(model: &StageModel) -> String {
    let mut out = String::new();
    for stage in model.stages() {
        if stage.kind.is_overlay() {
            out.push_str(&format!("{:<16} overlay\n", stage.name));
            for span in &stage.dependents {
                out.push_str(&format!(
                    "  {:<14} {:>5} ..= {:<5} ({} months)\n",
                    span.name,
                    span.start,
                    span.end,
                    span.end - span.start
                ));
            }
            continue;
        }
        let note = if stage.is_empty() { "  [empty]" } else { "" };
        out.push_str(&format!(
            "{:<16} {:>5} ..= {:<5} ({} months, {:.1} years){}\n",
            stage.name,
            stage.start,
            stage.end,
            stage.duration(),
            stage.duration() as f64 / MONTHS_IN_YEAR as f64,
            note
        ));
    }
    out
}
