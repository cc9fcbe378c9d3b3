// Crate root library declaration and module exports.
pub mod cli;
pub mod color_utils;
pub mod config;
pub mod context;
pub mod logging;
pub mod model;
pub mod months;
pub mod render;

#[cfg(feature = "tui")]
pub mod tui;

use crate::model::{Grid, StageModel};

/// Builds the stage model and the grid for a config in one go.
pub fn build(config: &config::Config) -> (StageModel, Grid) {
    let model = StageModel::build(&config.milestones(), &config.colors);
    let grid = Grid::build(&model, config.layout());
    (model, grid)
}
