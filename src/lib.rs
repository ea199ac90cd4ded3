/// runup_analysis: wave run-up and surf similarity analysis.
///
/// # Module structure
///
/// ```text
/// runup_analysis
/// ├── model       — shared data types (RunupRecord, AnalyzedRecord, BeachType, …)
/// ├── error       — RunupError and the crate Result alias
/// ├── config      — analysis configuration loader (runup.toml)
/// ├── ingest
/// │   ├── runup_table    — run-up observation table parser
/// │   ├── climate_series — dated series parser
/// │   └── fixtures (test only) — representative input payloads
/// ├── analysis
/// │   ├── iribarren  — wavelength, Iribarren number, beach-type thresholds
/// │   ├── runup      — batch analysis, table pipeline
/// │   ├── groupings  — per-dataset / per-beach organization
/// │   ├── statistics — summary statistics
/// │   ├── empirical  — R2/Hs fit, Hunt and Stockdon formulas
/// │   └── climate    — date alignment, anomalies, correlation
/// └── export      — augmented table and JSON report writers
/// ```

/// Public modules
pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod model;

pub use error::{Result, RunupError};
