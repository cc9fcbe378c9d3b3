// File: src/tui/view.rs
use crate::color_utils;
use crate::model::{GridCell, GridRow, StageColor};
use crate::months::split_years;
use crate::render::{self, LABEL_ARROW};
use crate::tui::state::AppState;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

const FILLED: &str = "■";
const EMPTY: &str = "□";
const ACCENT: Color = Color::Rgb(129, 140, 248);

fn stage_color(color: StageColor) -> Color {
    let (r, g, b) = color_utils::stage_rgb(color);
    Color::Rgb(r, g, b)
}

/// Text color that stays readable on a stage-colored background.
fn text_on(color: StageColor) -> Color {
    let (r, g, b) = color_utils::text_rgb_on(color_utils::stage_rgb(color));
    Color::Rgb(r, g, b)
}

/// Grid rows that fit under the top border.
pub fn visible_grid_rows(area_height: u16) -> usize {
    area_height.saturating_sub(1) as usize
}

fn cell_span(cell: &GridCell, is_cursor: bool) -> Span<'static> {
    let (symbol, mut style) = match cell.color {
        Some(c) => (FILLED, Style::default().fg(stage_color(c))),
        None => (EMPTY, Style::default().fg(ACCENT)),
    };
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    Span::styled(symbol, style)
}

fn row_line(row: &GridRow, label_width: usize, cursor: i64) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.cells.len() * 2 + 3);

    match &row.label {
        Some(label) => {
            let text = format!(" {} ({}) ", label.name, label.duration);
            let pad = label_width.saturating_sub(text.width() + LABEL_ARROW.width() + 1);
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(
                text,
                Style::default()
                    .bg(stage_color(label.color))
                    .fg(text_on(label.color))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!("{} ", LABEL_ARROW),
                Style::default().fg(ACCENT),
            ));
        }
        None => spans.push(Span::raw(" ".repeat(label_width))),
    }

    for cell in &row.cells {
        spans.push(cell_span(cell, cell.month == cursor));
        spans.push(Span::raw(if cell.year_break_after { "   " } else { " " }));
    }

    Line::from(spans)
}

fn footer_lines(state: &AppState) -> Vec<Line<'static>> {
    let month = state.cursor;
    let (years, months) = split_years(month - 1);

    let stage = match state.cursor_stage() {
        Some(stage) => Span::styled(
            format!(" {} ", stage.name),
            Style::default()
                .bg(stage_color(stage.color))
                .fg(text_on(stage.color))
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(" No stage ", Style::default().fg(Color::DarkGray)),
    };

    let mut info = vec![
        Span::styled(
            format!(" Month {} ", month),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" age {}y {}m  ", years, months)),
        stage,
    ];

    let dependents = state.model.dependents_at(month);
    if !dependents.is_empty() {
        info.push(Span::raw(format!("  with {}", dependents.join(", "))));
    }
    if month == state.today_month() {
        info.push(Span::styled(
            "  (now)",
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut lines = vec![Line::from(info)];

    if state.show_full_help {
        lines.push(Line::from(vec![
            Span::styled(
                " NAVIGATION ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" h/l:Month  j/k:Row  PgUp/PgDn:5 Rows  g/G:First/Last  n:Now"),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ?:Toggle Help  q/Esc:Quit"),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            " ?:Help  q:Quit",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let footer = footer_lines(state);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(footer.len() as u16 + 2),
        ])
        .split(f.area());

    // --- Header ---
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            render::TITLE,
            Style::default()
                .fg(Color::Rgb(55, 48, 163))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            render::subtitle(state.config.target_years),
            Style::default().fg(Color::Rgb(3, 105, 161)),
        )),
        Line::from(Span::styled(
            render::caption(&state.grid),
            Style::default().fg(ACCENT),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, v_chunks[0]);

    // --- Grid ---
    let grid_area = v_chunks[1];
    let visible_rows = visible_grid_rows(grid_area.height);
    state.ensure_cursor_visible(visible_rows);

    let label_width = state
        .grid
        .labels()
        .map(|(_, label)| {
            format!(" {} ({}) ", label.name, label.duration).width() + LABEL_ARROW.width() + 1
        })
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = state
        .grid
        .rows
        .iter()
        .skip(state.scroll_row)
        .take(visible_rows)
        .map(|row| row_line(row, label_width, state.cursor))
        .collect();

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(ACCENT)),
    );
    f.render_widget(grid, grid_area);

    // --- Footer ---
    let footer = Paragraph::new(footer).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    f.render_widget(footer, v_chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_the_top_border_is_reserved() {
        assert_eq!(visible_grid_rows(24), 23);
        assert_eq!(visible_grid_rows(1), 0);
        assert_eq!(visible_grid_rows(0), 0);
    }

    #[test]
    fn test_label_text_follows_background() {
        for color in [StageColor::Teal, StageColor::Violet] {
            let (r, g, b) = color_utils::DARK_TEXT;
            assert_eq!(text_on(color), Color::Rgb(r, g, b));
        }
    }
}
