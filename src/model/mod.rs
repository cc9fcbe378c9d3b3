// File: ./src/model/mod.rs
pub mod grid;
pub mod stage;

pub use grid::{Grid, GridCell, GridLayout, GridRow, RowLabel};
pub use stage::{
    Dependent, DependentSpan, LifeStage, Milestones, StageColor, StageKind, StageModel,
    StagePalette,
};
