// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::config::Config;
use crate::model::{Grid, GridCell, LifeStage, StageModel};
use crate::months::months_between;
use crate::tui::action::Action;

pub struct AppState {
    // Data
    pub config: Config,
    pub model: StageModel,
    pub grid: Grid,

    // UI State
    /// Month index under the cursor, always on the grid.
    pub cursor: i64,
    /// First grid row shown when the grid is taller than the screen.
    pub scroll_row: usize,
    pub show_full_help: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model = StageModel::build(&config.milestones(), &config.colors);
        let grid = Grid::build(&model, config.layout());
        let mut state = Self {
            config,
            model,
            grid,
            cursor: 1,
            scroll_row: 0,
            show_full_help: false,
        };
        state.cursor = state.clamp(state.today_month());
        state
    }

    /// Month index of "now" relative to birth (1-based).
    pub fn today_month(&self) -> i64 {
        months_between(self.config.today(), self.config.birth_date) + 1
    }

    pub fn last_month(&self) -> i64 {
        self.grid.total_months() as i64
    }

    fn clamp(&self, month: i64) -> i64 {
        month.clamp(1, self.last_month().max(1))
    }

    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::MoveBy(delta) => self.cursor = self.clamp(self.cursor + delta),
            Action::First => self.cursor = 1,
            Action::Last => self.cursor = self.clamp(self.last_month()),
            Action::Today => self.cursor = self.clamp(self.today_month()),
            Action::ToggleHelp => self.show_full_help = !self.show_full_help,
            Action::Quit => return false,
        }
        true
    }

    /// Keeps the cursor row inside a window of `visible_rows`.
    pub fn ensure_cursor_visible(&mut self, visible_rows: usize) {
        let Some(row) = self.grid.row_of(self.cursor) else {
            return;
        };
        if visible_rows == 0 {
            self.scroll_row = row;
        } else if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
    }

    pub fn cursor_cell(&self) -> Option<&GridCell> {
        self.grid.cell(self.cursor)
    }

    pub fn cursor_stage(&self) -> Option<&LifeStage> {
        self.model.classify(self.cursor)
    }
}
