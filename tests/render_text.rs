// Tests for the plain-text grid and stage table output.
use chrono::NaiveDate;
use lifegrid::config::Config;
use lifegrid::render::{self, TextOptions};

fn config() -> Config {
    Config {
        now: NaiveDate::from_ymd_opt(2024, 1, 1),
        ..Config::default()
    }
}

fn plain() -> TextOptions {
    TextOptions {
        color: false,
        target_years: 70,
    }
}

#[test]
fn test_one_line_per_row() {
    let (_, grid) = lifegrid::build(&config());
    let lines = render::render_grid_lines(&grid, &plain());
    assert_eq!(lines.len(), 23);
}

#[test]
fn test_labels_are_right_aligned() {
    let (_, grid) = lifegrid::build(&config());
    let lines = render::render_grid_lines(&grid, &plain());

    // "Childhood (83) →" is the widest label.
    assert_eq!(render::label_width(&grid), 16);
    assert!(lines[0].starts_with("Childhood (83) → cccccccccccc cccccccccccc"));
    assert!(lines[3].starts_with("  School (121) → ssssssssssss"));
    assert!(lines[8].starts_with("    Work (105) → wwwwwwwwwwww"));
    assert!(lines[1].starts_with("                 cccccccccccc"));
}

#[test]
fn test_gap_cells_use_empty_glyph() {
    let (_, grid) = lifegrid::build(&config());
    let lines = render::render_grid_lines(&grid, &plain());

    let row_10: String = lines[10].chars().skip(17).collect();
    assert_eq!(row_10, "wwwwwwwwwwww wwwwwwwww··· ············");

    let row_11: String = lines[11].chars().skip(17).collect();
    assert_eq!(row_11, "············ ············ ············");
}

#[test]
fn test_header_and_legend() {
    let (model, grid) = lifegrid::build(&config());
    let text = render::render_text(&model, &grid, &plain());
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("A life remaining time in months"));
    assert_eq!(lines.next(), Some("(Average life expectancy of 70 years)"));
    assert_eq!(lines.next(), Some("1 row = 36 months = 3 years"));
    assert!(text.contains("c Childhood 6y11m"));
    assert!(text.contains("w Work 8y9m"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_color_output_uses_ansi() {
    let (model, grid) = lifegrid::build(&config());
    let opts = TextOptions {
        color: true,
        target_years: 70,
    };
    let text = render::render_text(&model, &grid, &opts);
    assert!(text.contains("\x1b[38;2;94;234;212mc\x1b[0m"));
}

#[test]
fn test_stage_table_lists_dependents() {
    let (model, _) = lifegrid::build(&config());
    let table = render::render_stage_table(&model);
    assert!(table.contains("Childhood"));
    assert!(table.contains("overlay"));
    assert!(table.contains("Emily"));
    assert!(table.contains("Melania"));
    assert!(!table.contains("[empty]"));
}
