// File: ./src/config.rs
// Handles configuration loading, saving, validation and defaults.
use crate::context::AppContext;
use crate::model::{Dependent, GridLayout, Milestones, StagePalette};
use anyhow::{Context, Error, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;

/// Upper bound for any year count in the config.
pub const MAX_YEARS: u32 = 150;

fn default_school_start_age() -> u32 {
    7
}
fn default_target_years() -> u32 {
    70
}
fn default_years_per_row() -> u32 {
    3
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DependentConfig {
    pub name: String,
    pub birth_date: NaiveDate,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub birth_date: NaiveDate,
    #[serde(default = "default_school_start_age")]
    pub school_start_age: u32,
    pub school_end: NaiveDate,
    pub studies_end: NaiveDate,
    /// Pins "today"; when absent the local date is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now: Option<NaiveDate>,
    #[serde(default = "default_target_years")]
    pub target_years: u32,
    #[serde(default = "default_years_per_row")]
    pub years_per_row: u32,

    // Tables last so TOML output stays valid.
    #[serde(default)]
    pub dependents: Vec<DependentConfig>,

    #[serde(default)]
    pub colors: StagePalette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            birth_date: date(1991, 3, 21),
            school_start_age: 7,
            school_end: date(2008, 6, 1),
            studies_end: date(2015, 3, 1),
            now: None,
            dependents: vec![
                DependentConfig {
                    name: "Emily".to_string(),
                    birth_date: date(2020, 7, 1),
                },
                DependentConfig {
                    name: "Melania".to_string(),
                    birth_date: date(2022, 5, 20),
                },
            ],
            target_years: 70,
            years_per_row: 3,
            colors: StagePalette::default(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Like `load`, but a missing file yields the built-in defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(cfg) => Ok(cfg),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::info!("No config file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.years_per_row == 0 {
            anyhow::bail!("years_per_row must be at least 1");
        }
        if self.target_years == 0 {
            anyhow::bail!("target_years must be at least 1");
        }
        for (key, years) in [
            ("school_start_age", self.school_start_age),
            ("target_years", self.target_years),
            ("years_per_row", self.years_per_row),
        ] {
            if years > MAX_YEARS {
                anyhow::bail!(
                    "{} of {} years is not plausible (max {})",
                    key,
                    years,
                    MAX_YEARS
                );
            }
        }
        Ok(())
    }

    /// Detects whether an error means the config file was missing, either by
    /// our explicit message or an IO NotFound anywhere in the chain.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str)
            .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
        Ok(())
    }

    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }

    /// The date the work stage runs up to.
    pub fn today(&self) -> NaiveDate {
        self.now.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn milestones(&self) -> Milestones {
        Milestones {
            birth: self.birth_date,
            school_start_age: self.school_start_age,
            school_end: self.school_end,
            studies_end: self.studies_end,
            now: self.today(),
            dependents: self
                .dependents
                .iter()
                .map(|d| Dependent {
                    name: d.name.clone(),
                    birth: d.birth_date,
                })
                .collect(),
        }
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.target_years, self.years_per_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml_applies_defaults() {
        let cfg = Config::from_toml(
            r#"
            birth_date = "1980-01-15"
            school_end = "1998-06-30"
            studies_end = "2003-09-01"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.school_start_age, 7);
        assert_eq!(cfg.target_years, 70);
        assert_eq!(cfg.years_per_row, 3);
        assert!(cfg.dependents.is_empty());
        assert_eq!(cfg.now, None);
    }

    #[test]
    fn test_zero_years_per_row_rejected() {
        let err = Config::from_toml(
            r#"
            birth_date = "1980-01-15"
            school_end = "1998-06-30"
            studies_end = "2003-09-01"
            years_per_row = 0
            "#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("years_per_row"));
    }

    #[test]
    fn test_huge_year_counts_rejected() {
        let base = r#"
            birth_date = "1980-01-15"
            school_end = "1998-06-30"
            studies_end = "2003-09-01"
            "#;

        let err = Config::from_toml(&format!("{}target_years = 4000000000\n", base)).unwrap_err();
        assert!(format!("{:#}", err).contains("target_years"));

        let err = Config::from_toml(&format!("{}years_per_row = 151\n", base)).unwrap_err();
        assert!(format!("{:#}", err).contains("years_per_row"));

        let cfg = Config::from_toml(&format!("{}target_years = 150\n", base)).unwrap();
        assert_eq!(cfg.layout().rows, 50);
    }

    #[test]
    fn test_missing_error_detection() {
        let missing = anyhow::anyhow!("Config file not found");
        assert!(Config::is_missing_config_error(&missing));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let wrapped = Error::new(io).context("while loading");
        assert!(Config::is_missing_config_error(&wrapped));

        let other = anyhow::anyhow!("bad syntax");
        assert!(!Config::is_missing_config_error(&other));
    }
}
