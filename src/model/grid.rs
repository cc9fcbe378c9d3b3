// File: ./src/model/grid.rs
// Lays the classified months out as rows of cells with transition labels.
use crate::model::stage::{StageColor, StageKind, StageModel};
use crate::months::MONTHS_IN_YEAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub columns: usize,
    pub years_per_row: u32,
}

impl GridLayout {
    /// `rows = round(target_years / years_per_row)`, `columns = years_per_row * 12`.
    ///
    /// Callers validate `years_per_row > 0`; a zero yields an empty layout.
    pub fn new(target_years: u32, years_per_row: u32) -> Self {
        if years_per_row == 0 {
            return Self {
                rows: 0,
                columns: 0,
                years_per_row,
            };
        }
        let rows = (target_years as f64 / years_per_row as f64).round() as usize;
        Self {
            rows,
            columns: years_per_row as usize * MONTHS_IN_YEAR as usize,
            years_per_row,
        }
    }

    pub fn months_per_row(&self) -> usize {
        self.columns
    }

    pub fn total_months(&self) -> usize {
        self.rows * self.columns
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub month: i64,
    pub stage: Option<StageKind>,
    pub color: Option<StageColor>,
    /// A year boundary follows this cell within the row.
    pub year_break_after: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLabel {
    pub kind: StageKind,
    pub name: String,
    pub color: StageColor,
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub index: usize,
    pub label: Option<RowLabel>,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub layout: GridLayout,
    pub rows: Vec<GridRow>,
}

/// Running state threaded through the row fold.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    next_month: i64,
    last_color: Option<StageColor>,
}

impl Grid {
    pub fn build(model: &StageModel, layout: GridLayout) -> Self {
        let start = Cursor {
            next_month: 1,
            last_color: None,
        };

        let (_, rows) = (0..layout.rows).fold(
            (start, Vec::with_capacity(layout.rows)),
            |(cursor, mut rows), index| {
                let (row, cursor) = build_row(model, layout, index, cursor);
                rows.push(row);
                (cursor, rows)
            },
        );

        log::debug!(
            "Built grid: {} rows x {} columns, {} labels",
            layout.rows,
            layout.columns,
            rows.iter().filter(|r| r.label.is_some()).count()
        );

        Self { layout, rows }
    }

    pub fn total_months(&self) -> usize {
        self.layout.total_months()
    }

    pub fn cell(&self, month: i64) -> Option<&GridCell> {
        if month < 1 || self.layout.columns == 0 {
            return None;
        }
        let offset = (month - 1) as usize;
        self.rows
            .get(offset / self.layout.columns)
            .and_then(|row| row.cells.get(offset % self.layout.columns))
    }

    /// Row index holding `month`, if it is on the grid.
    pub fn row_of(&self, month: i64) -> Option<usize> {
        self.cell(month)
            .map(|_| ((month - 1) as usize) / self.layout.columns)
    }

    pub fn labels(&self) -> impl Iterator<Item = (usize, &RowLabel)> {
        self.rows
            .iter()
            .filter_map(|row| row.label.as_ref().map(|label| (row.index, label)))
    }
}

fn build_row(
    model: &StageModel,
    layout: GridLayout,
    index: usize,
    cursor: Cursor,
) -> (GridRow, Cursor) {
    let mut last_color = cursor.last_color;

    // Look ahead at the first month of the row.
    let label = match model.classify(cursor.next_month) {
        Some(stage) if Some(stage.color) != last_color => {
            last_color = Some(stage.color);
            Some(RowLabel {
                kind: stage.kind,
                name: stage.name.clone(),
                color: stage.color,
                duration: stage.duration(),
            })
        }
        _ => None,
    };

    let year = MONTHS_IN_YEAR as usize;
    let cells = (0..layout.columns)
        .map(|column| {
            let month = cursor.next_month + column as i64;
            let stage = model.classify(month);
            GridCell {
                month,
                stage: stage.map(|s| s.kind),
                color: stage.map(|s| s.color),
                year_break_after: (column + 1) % year == 0 && column + 1 < layout.columns,
            }
        })
        .collect();

    let next = Cursor {
        next_month: cursor.next_month + layout.columns as i64,
        last_color,
    };

    (
        GridRow {
            index,
            label,
            cells,
        },
        next,
    )
}
