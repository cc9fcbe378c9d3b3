// Tests for grid layout, cell classification and row labels.
use chrono::NaiveDate;
use lifegrid::config::Config;
use lifegrid::model::{Grid, GridLayout, StageColor, StageKind, StagePalette};

fn config() -> Config {
    Config {
        now: NaiveDate::from_ymd_opt(2024, 1, 1),
        ..Config::default()
    }
}

#[test]
fn test_default_dimensions() {
    let (_, grid) = lifegrid::build(&config());
    assert_eq!(grid.layout, GridLayout::new(70, 3));
    assert_eq!(grid.layout.rows, 23);
    assert_eq!(grid.layout.columns, 36);
    assert_eq!(grid.rows.len(), 23);
    assert!(grid.rows.iter().all(|r| r.cells.len() == 36));
    assert_eq!(grid.total_months(), 828);
}

#[test]
fn test_dimensions_are_stable_across_rebuilds() {
    let cfg = config();
    let (_, a) = lifegrid::build(&cfg);
    let (_, b) = lifegrid::build(&cfg);
    assert_eq!(a, b);
}

#[test]
fn test_months_are_consecutive_from_one() {
    let (_, grid) = lifegrid::build(&config());
    let months: Vec<i64> = grid
        .rows
        .iter()
        .flat_map(|r| r.cells.iter().map(|c| c.month))
        .collect();
    assert_eq!(months, (1..=828).collect::<Vec<_>>());
}

#[test]
fn test_cells_match_classifier() {
    let (model, grid) = lifegrid::build(&config());
    for row in &grid.rows {
        for cell in &row.cells {
            let stage = model.classify(cell.month);
            assert_eq!(cell.stage, stage.map(|s| s.kind));
            assert_eq!(cell.color, stage.map(|s| s.color));
        }
    }
    assert_eq!(grid.cell(380).and_then(|c| c.stage), Some(StageKind::Work));
    assert_eq!(grid.cell(382).and_then(|c| c.stage), None);
    assert!(grid.cell(0).is_none());
    assert!(grid.cell(829).is_none());
}

#[test]
fn test_year_breaks_after_12th_and_24th_column() {
    let (_, grid) = lifegrid::build(&config());
    for row in &grid.rows {
        let breaks: Vec<usize> = row
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.year_break_after)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(breaks, vec![11, 23]);
    }
}

#[test]
fn test_labels_fire_on_color_change_at_row_start() {
    let (_, grid) = lifegrid::build(&config());
    let labels: Vec<(usize, &str, i64)> = grid
        .labels()
        .map(|(row, l)| (row, l.name.as_str(), l.duration))
        .collect();

    assert_eq!(
        labels,
        vec![
            (0, "Childhood", 83),
            (3, "School", 121),
            (6, "Studies", 68),
            (8, "Work", 105),
        ]
    );
}

#[test]
fn test_same_color_stages_share_one_label() {
    let mut cfg = config();
    cfg.colors = StagePalette {
        work: Some(StageColor::Amber),
        ..Default::default()
    };
    let (_, grid) = lifegrid::build(&cfg);
    let names: Vec<&str> = grid.labels().map(|(_, l)| l.name.as_str()).collect();
    assert_eq!(names, vec!["Childhood", "School", "Studies"]);
}

#[test]
fn test_each_label_is_a_distinct_color_change() {
    let (_, grid) = lifegrid::build(&config());
    let colors: Vec<StageColor> = grid.labels().map(|(_, l)| l.color).collect();
    for pair in colors.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn test_one_year_rows_have_no_breaks() {
    let mut cfg = config();
    cfg.years_per_row = 1;
    let (model, grid) = lifegrid::build(&cfg);
    assert_eq!(grid.layout.rows, 70);
    assert!(grid.rows.iter().flat_map(|r| &r.cells).all(|c| !c.year_break_after));

    let first = &grid.rows[0];
    assert_eq!(first.label.as_ref().map(|l| l.kind), Some(StageKind::Childhood));
    assert!(model.classify(grid.total_months() as i64).is_none());
}

#[test]
fn test_empty_layout_builds_no_rows() {
    let (model, _) = lifegrid::build(&config());
    let grid = Grid::build(&model, GridLayout::new(70, 0));
    assert!(grid.rows.is_empty());
    assert!(grid.cell(1).is_none());
}
