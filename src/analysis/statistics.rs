/// Summary statistics over analyzed records, per group or overall.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Result, RunupError};
use crate::model::{AnalyzedRecord, BeachType};

/// Min / mean / max of one derived quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl Range {
    fn of(values: &[f64]) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Range { min, mean, max }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunupSummary {
    pub count: usize,
    pub iribarren: Range,
    pub normalized_runup: Range,
    /// Sample standard deviation of r2/hs; None below two records.
    pub normalized_runup_std: Option<f64>,
    pub beach_types: BTreeMap<BeachType, usize>,
}

/// Summarizes a non-empty set of records.
pub fn summarize<'a, I>(records: I) -> Result<RunupSummary>
where
    I: IntoIterator<Item = &'a AnalyzedRecord>,
{
    let mut iribarren = Vec::new();
    let mut normalized = Vec::new();
    let mut beach_types: BTreeMap<BeachType, usize> = BTreeMap::new();

    for r in records {
        iribarren.push(r.iribarren);
        normalized.push(r.normalized_runup);
        *beach_types.entry(r.beach_type).or_insert(0) += 1;
    }

    if iribarren.is_empty() {
        return Err(RunupError::InsufficientData(
            "cannot summarize an empty set of records".to_string(),
        ));
    }

    let normalized_range = Range::of(&normalized);
    let normalized_runup_std = (normalized.len() >= 2).then(|| {
        let ss: f64 = normalized
            .iter()
            .map(|v| (v - normalized_range.mean).powi(2))
            .sum();
        (ss / (normalized.len() - 1) as f64).sqrt()
    });

    Ok(RunupSummary {
        count: iribarren.len(),
        iribarren: Range::of(&iribarren),
        normalized_runup: normalized_range,
        normalized_runup_std,
        beach_types,
    })
}

/// Summarizes each group; groups are non-empty by construction.
pub fn summarize_groups(
    groups: &BTreeMap<String, Vec<&AnalyzedRecord>>,
) -> Result<BTreeMap<String, RunupSummary>> {
    groups
        .iter()
        .map(|(key, records)| -> Result<(String, RunupSummary)> {
            Ok((key.clone(), summarize(records.iter().copied())?))
        })
        .collect()
}
