/// Run-up analysis.
///
/// Submodules:
/// - `iribarren`  — deep-water wavelength, surf similarity, beach-type classification
/// - `runup`      — per-record and batch analysis with a partial-failure policy
/// - `groupings`  — organizes analyzed records per dataset or per beach
/// - `statistics` — summary statistics over a set of records
/// - `empirical`  — least-squares fit of R2/Hs vs ε and published run-up formulas
/// - `climate`    — date-aligned correlation of climate indices with wave anomalies

pub mod climate;
pub mod empirical;
pub mod groupings;
pub mod iribarren;
pub mod runup;
pub mod statistics;
