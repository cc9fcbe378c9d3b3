// File: ./src/logging.rs
// File logging setup. The terminal belongs to the grid, so logs go to disk.
use crate::context::AppContext;
use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::OpenOptions;

/// Environment variable that raises the log level (`debug`, `trace`, ...).
pub const LOG_LEVEL_ENV: &str = "LIFEGRID_LOG";

pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Appends to `lifegrid.log` in the data directory.
pub fn init(ctx: &dyn AppContext, level: LevelFilter) -> Result<()> {
    let path = ctx
        .get_log_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine log file path"))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_time_format_rfc3339()
        .build();

    WriteLogger::init(level, config, file).context("Logger already initialized")?;
    log::debug!("Logging to {:?}", path);
    Ok(())
}
