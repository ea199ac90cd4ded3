/// Input parsers.
///
/// - `runup_table`    — delimited run-up observation table
/// - `climate_series` — dated two-column series (climate indices, wave statistics)
/// - `fixtures` (test only) — representative input payloads

pub mod climate_series;
pub mod runup_table;

#[cfg(test)]
pub(crate) mod fixtures;
