/// Shared data types for the run-up analysis pipeline.
///
/// `RunupRecord` is one observation as imported from the input table.
/// `AnalyzedRecord` wraps an untouched `RunupRecord` together with the
/// three derived quantities computed from it; once built, neither part is
/// mutated.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RunupError;

/// Gravitational acceleration used for deep-water wavelength (m/s²).
pub const GRAVITY: f64 = 9.81;

// ---------------------------------------------------------------------------
// Table column names
// ---------------------------------------------------------------------------

pub const COL_DATASET: &str = "dataset";
pub const COL_BEACH: &str = "beach";
pub const COL_CASE: &str = "case";
pub const COL_LAB_FIELD: &str = "lab_field";
pub const COL_HS: &str = "hs";
pub const COL_TP: &str = "tp";
pub const COL_BETA: &str = "beta";
pub const COL_D50: &str = "d50";
pub const COL_ROUGHNESS: &str = "roughness";
pub const COL_R2: &str = "r2";

pub const COL_IRIBARREN: &str = "iribarren";
pub const COL_BEACH_TYPE: &str = "beach_type";
pub const COL_NORMALIZED_RUNUP: &str = "normalized_runup";

/// Input columns in canonical output order.
pub const INPUT_COLUMNS: [&str; 10] = [
    COL_DATASET,
    COL_BEACH,
    COL_CASE,
    COL_LAB_FIELD,
    COL_HS,
    COL_TP,
    COL_BETA,
    COL_D50,
    COL_ROUGHNESS,
    COL_R2,
];

/// Columns appended by the analysis.
pub const DERIVED_COLUMNS: [&str; 3] = [COL_IRIBARREN, COL_BEACH_TYPE, COL_NORMALIZED_RUNUP];

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Whether an observation comes from a flume experiment or a natural beach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabField {
    Lab,
    Field,
}

impl LabField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabField::Lab => "lab",
            LabField::Field => "field",
        }
    }
}

impl FromStr for LabField {
    type Err = RunupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lab" | "laboratory" => Ok(LabField::Lab),
            "field" => Ok(LabField::Field),
            other => Err(RunupError::invalid(format!(
                "unrecognised lab_field label '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for LabField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One run-up observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunupRecord {
    pub dataset: String,
    pub beach: String,
    pub case: String,
    pub lab_field: LabField,
    /// Significant wave height (m).
    pub hs: f64,
    /// Peak wave period (s).
    pub tp: f64,
    /// Beach slope, tan(angle).
    pub beta: f64,
    /// Median grain size (m).
    pub d50: f64,
    pub roughness: f64,
    /// Observed 2%-exceedance run-up elevation (m).
    pub r2: f64,
}

impl RunupRecord {
    /// Short label used in log lines and rejection reports.
    pub fn label(&self) -> String {
        format!("{}/{}/{}", self.dataset, self.beach, self.case)
    }
}

/// Morphodynamic beach state inferred from the Iribarren number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BeachType {
    Dissipative,
    Intermediate,
    Reflective,
}

impl BeachType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BeachType::Dissipative => "dissipative",
            BeachType::Intermediate => "intermediate",
            BeachType::Reflective => "reflective",
        }
    }
}

impl fmt::Display for BeachType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record together with its derived quantities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedRecord {
    pub record: RunupRecord,
    pub iribarren: f64,
    pub beach_type: BeachType,
    /// r2 / hs
    pub normalized_runup: f64,
}

/// A record excluded from a batch, with the reason.
#[derive(Debug)]
pub struct RejectedRecord {
    /// 1-based row number in the input the record came from. For tables
    /// read from text this is the physical line number.
    pub row: usize,
    pub error: RunupError,
}
