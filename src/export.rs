/// Output writers: the augmented table and the JSON analysis report.
///
/// The table keeps the ten input columns in canonical order and appends
/// `iribarren`, `beach_type` and `normalized_runup`. Rejected rows are left
/// out of the table and listed in the report instead.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::empirical::{evaluate_model, fit_normalized_runup, LinearFit, ModelSkill, RunupModel};
use crate::analysis::groupings::group_by_dataset;
use crate::analysis::runup::BatchOutcome;
use crate::analysis::statistics::{summarize, summarize_groups, RunupSummary};
use crate::config::AnalysisConfig;
use crate::error::{Result, RunupError};
use crate::model::{AnalyzedRecord, DERIVED_COLUMNS, INPUT_COLUMNS};

/// Decimal places for derived numeric columns.
const DERIVED_PRECISION: usize = 6;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Renders analyzed records as delimited text with a header row.
pub fn render_table(records: &[AnalyzedRecord], delimiter: char) -> String {
    let sep = delimiter.to_string();
    let mut out = String::new();

    let header: Vec<&str> = INPUT_COLUMNS.iter().chain(DERIVED_COLUMNS.iter()).copied().collect();
    out.push_str(&header.join(&sep));
    out.push('\n');

    for a in records {
        let r = &a.record;
        let fields = [
            r.dataset.clone(),
            r.beach.clone(),
            r.case.clone(),
            r.lab_field.to_string(),
            r.hs.to_string(),
            r.tp.to_string(),
            r.beta.to_string(),
            r.d50.to_string(),
            r.roughness.to_string(),
            r.r2.to_string(),
            format!("{:.*}", DERIVED_PRECISION, a.iribarren),
            a.beach_type.to_string(),
            format!("{:.*}", DERIVED_PRECISION, a.normalized_runup),
        ];
        out.push_str(&fields.join(&sep));
        out.push('\n');
    }

    out
}

/// Writes the augmented table to `path`.
pub fn write_table(path: &Path, records: &[AnalyzedRecord], delimiter: char) -> Result<()> {
    fs::write(path, render_table(records, delimiter)).map_err(|e| RunupError::io(path, e))?;
    tracing::info!(path = %path.display(), rows = records.len(), "wrote analyzed table");
    Ok(())
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RejectedRow {
    pub line: usize,
    pub reason: String,
}

/// Everything a downstream plotting step needs, in one document.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub input: String,
    pub total_rows: usize,
    pub analyzed_rows: usize,
    pub rejected: Vec<RejectedRow>,
    pub overall: Option<RunupSummary>,
    pub by_dataset: BTreeMap<String, RunupSummary>,
    /// Least-squares R2/Hs vs ε; absent when the data cannot support a fit.
    pub normalized_runup_fit: Option<LinearFit>,
    pub model_skill: Vec<ModelSkill>,
}

impl AnalysisReport {
    /// Builds the report. Statistics that cannot be computed for this data
    /// (e.g. a fit over a single record) are omitted, not errors.
    pub fn build(input: &str, outcome: &BatchOutcome, config: &AnalysisConfig) -> Result<Self> {
        let records = &outcome.analyzed;

        let overall = optional(summarize(records))?;
        let by_dataset = summarize_groups(&group_by_dataset(records))?;
        let normalized_runup_fit = optional(fit_normalized_runup(records))?;

        let models = [
            RunupModel::Hunt {
                coefficient: config.empirical.hunt_coefficient,
            },
            RunupModel::Stockdon,
        ];
        let mut model_skill = Vec::new();
        for model in &models {
            if let Some(skill) = optional(evaluate_model(model, records))? {
                model_skill.push(skill);
            }
        }

        Ok(AnalysisReport {
            generated_at: Utc::now(),
            input: input.to_string(),
            total_rows: outcome.total(),
            analyzed_rows: records.len(),
            rejected: outcome
                .rejected
                .iter()
                .map(|r| RejectedRow {
                    line: r.row,
                    reason: r.error.to_string(),
                })
                .collect(),
            overall,
            by_dataset,
            normalized_runup_fit,
            model_skill,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Maps `InsufficientData` to `None`, passing other errors through.
fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(RunupError::InsufficientData(reason)) => {
            tracing::debug!(%reason, "statistic skipped");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Writes the report as pretty-printed JSON.
pub fn write_report(path: &Path, report: &AnalysisReport) -> Result<()> {
    fs::write(path, report.to_json()?).map_err(|e| RunupError::io(path, e))?;
    tracing::info!(path = %path.display(), "wrote analysis report");
    Ok(())
}
