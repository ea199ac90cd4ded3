/// Analysis configuration loader - parses runup.toml
///
/// Keeps beach-type breakpoints, table format and empirical model constants
/// out of the code so they can be tuned per study site without recompiling.
/// Every section is optional; a missing file at the default location means
/// default configuration.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::iribarren::BeachThresholds;
use crate::error::{Result, RunupError};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "runup.toml";

/// Environment variable that overrides the configuration path.
pub const CONFIG_PATH_ENV: &str = "RUNUP_CONFIG";

/// Root configuration structure for TOML parsing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub table: TableConfig,
    pub thresholds: ThresholdConfig,
    pub empirical: EmpiricalConfig,
}

/// Delimited text layout shared by input and output tables
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub delimiter: char,
    /// Lines starting with this character are skipped ahead of the header.
    pub comment_prefix: Option<char>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            comment_prefix: Some('#'),
        }
    }
}

/// Iribarren breakpoints between beach types
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub dissipative_below: f64,
    pub reflective_from: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        let defaults = BeachThresholds::default();
        Self {
            dissipative_below: defaults.dissipative_below,
            reflective_from: defaults.reflective_from,
        }
    }
}

/// Constants for the empirical run-up formulas
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmpiricalConfig {
    /// C in Hunt's R2 = C·ε·Hs.
    pub hunt_coefficient: f64,
}

impl Default for EmpiricalConfig {
    fn default() -> Self {
        Self {
            hunt_coefficient: 1.0,
        }
    }
}

impl From<&ThresholdConfig> for BeachThresholds {
    fn from(config: &ThresholdConfig) -> Self {
        BeachThresholds {
            dissipative_below: config.dissipative_below,
            reflective_from: config.reflective_from,
        }
    }
}

impl AnalysisConfig {
    /// Beach-type breakpoints as the analysis type.
    pub fn beach_thresholds(&self) -> BeachThresholds {
        (&self.thresholds).into()
    }

    /// Checks values serde cannot: ordering and sign constraints.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if !t.dissipative_below.is_finite() || !t.reflective_from.is_finite() {
            return Err(RunupError::InvalidConfig(
                "thresholds must be finite".to_string(),
            ));
        }
        if t.dissipative_below < 0.0 {
            return Err(RunupError::InvalidConfig(format!(
                "dissipative_below must be non-negative, got {}",
                t.dissipative_below
            )));
        }
        if t.dissipative_below >= t.reflective_from {
            return Err(RunupError::InvalidConfig(format!(
                "dissipative_below ({}) must be < reflective_from ({})",
                t.dissipative_below, t.reflective_from
            )));
        }
        let c = self.empirical.hunt_coefficient;
        if !(c.is_finite() && c > 0.0) {
            return Err(RunupError::InvalidConfig(format!(
                "hunt_coefficient must be positive, got {}",
                c
            )));
        }
        if self.table.delimiter == '\n' || self.table.delimiter == '\r' {
            return Err(RunupError::InvalidConfig(
                "delimiter cannot be a line break".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses and validates configuration from TOML text.
pub fn parse_config(contents: &str, path: &Path) -> Result<AnalysisConfig> {
    let config: AnalysisConfig = toml::from_str(contents).map_err(|source| RunupError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Loads configuration from an explicit path. The file must exist.
pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    let contents = fs::read_to_string(path).map_err(|e| RunupError::io(path, e))?;
    parse_config(&contents, path)
}

/// Resolves which configuration file to use.
///
/// Order: explicit path, then `RUNUP_CONFIG` (a `.env` file is honoured),
/// then `runup.toml`. Returns the path and whether it was asked for
/// explicitly.
pub fn resolve_config_path(explicit: Option<&Path>) -> (PathBuf, bool) {
    if let Some(path) = explicit {
        return (path.to_path_buf(), true);
    }
    dotenv::dotenv().ok();
    match env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => (PathBuf::from(path), true),
        _ => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    }
}

/// Loads configuration for a binary run.
///
/// A file that was asked for explicitly must exist; the default file is
/// optional and its absence yields `AnalysisConfig::default()`.
pub fn load_or_default(explicit: Option<&Path>) -> Result<AnalysisConfig> {
    let (path, required) = resolve_config_path(explicit);
    if !required && !path.exists() {
        tracing::debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(AnalysisConfig::default());
    }
    tracing::debug!(path = %path.display(), "loading configuration");
    load_config(&path)
}
