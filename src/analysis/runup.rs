/// Batch run-up analysis with a partial-failure policy.
///
/// Each record is validated and analyzed independently. Records that fail
/// are excluded from the output and reported individually; one bad row
/// never aborts the batch. Surviving records keep their input order so
/// they stay aligned with any metadata kept by index.

use crate::analysis::iribarren::{iribarren, normalized_runup, validate_record, BeachThresholds};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::ingest::runup_table::parse_runup_table;
use crate::model::{AnalyzedRecord, RejectedRecord, RunupRecord};

/// Outcome of analyzing a batch: valid results plus per-record failures.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub analyzed: Vec<AnalyzedRecord>,
    pub rejected: Vec<RejectedRecord>,
}

impl BatchOutcome {
    /// Number of records that went in.
    pub fn total(&self) -> usize {
        self.analyzed.len() + self.rejected.len()
    }
}

/// Computes ε, beach type and normalized run-up for one record.
pub fn analyze_record(record: &RunupRecord, thresholds: &BeachThresholds) -> Result<AnalyzedRecord> {
    validate_record(record)?;
    let eps = iribarren(record.tp, record.hs, record.beta)?;
    let normalized = normalized_runup(record)?;
    Ok(AnalyzedRecord {
        record: record.clone(),
        iribarren: eps,
        beach_type: thresholds.classify(eps),
        normalized_runup: normalized,
    })
}

/// Analyzes every record, collecting failures instead of stopping.
///
/// `RejectedRecord::row` is the 1-based position in `records`.
pub fn batch_analyze(records: &[RunupRecord], thresholds: &BeachThresholds) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for (idx, record) in records.iter().enumerate() {
        match analyze_record(record, thresholds) {
            Ok(analyzed) => outcome.analyzed.push(analyzed),
            Err(error) => {
                tracing::warn!(row = idx + 1, record = %record.label(), %error, "record rejected");
                outcome.rejected.push(RejectedRecord { row: idx + 1, error });
            }
        }
    }

    tracing::debug!(
        analyzed = outcome.analyzed.len(),
        rejected = outcome.rejected.len(),
        "batch analysis complete"
    );
    outcome
}

/// Parses a delimited table and analyzes its rows.
///
/// Fails only when the table as a whole is unusable (no header, missing
/// required column). Rows rejected during parsing or analysis are reported
/// by their file line number, in line order.
pub fn analyze_table(text: &str, config: &AnalysisConfig) -> Result<BatchOutcome> {
    let table = parse_runup_table(text, &config.table)?;

    let records: Vec<RunupRecord> = table.rows.iter().map(|r| r.record.clone()).collect();
    let mut outcome = batch_analyze(&records, &config.beach_thresholds());

    // Map batch positions back to file lines
    for rejected in &mut outcome.rejected {
        rejected.row = table.rows[rejected.row - 1].line;
    }
    outcome.rejected.extend(table.rejected);
    outcome.rejected.sort_by_key(|r| r.row);

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunupError;
    use crate::ingest::fixtures::*;
    use crate::model::{BeachType, LabField};

    fn record(case: &str, hs: f64, tp: f64, beta: f64, r2: f64) -> RunupRecord {
        RunupRecord {
            dataset: "A".to_string(),
            beach: "B1".to_string(),
            case: case.to_string(),
            lab_field: LabField::Field,
            hs,
            tp,
            beta,
            d50: 0.0003,
            roughness: 1.0,
            r2,
        }
    }

    // --- Single record ------------------------------------------------------

    #[test]
    fn test_analyze_record_end_to_end_dissipative() {
        let analyzed = analyze_record(&record("1", 2.0, 8.0, 0.05, 1.2), &BeachThresholds::default())
            .expect("valid record should analyze");

        assert!((analyzed.iribarren - 0.3536).abs() < 1e-3);
        assert_eq!(analyzed.beach_type, BeachType::Dissipative);
        assert!((analyzed.normalized_runup - 0.6).abs() < 1e-12);
        assert_eq!(analyzed.record.case, "1", "input record should be carried unchanged");
    }

    #[test]
    fn test_analyze_record_end_to_end_intermediate() {
        let analyzed = analyze_record(&record("2", 2.0, 8.0, 0.2, 1.2), &BeachThresholds::default())
            .expect("valid record should analyze");
        assert!((analyzed.iribarren - 1.414).abs() < 1e-2);
        assert_eq!(analyzed.beach_type, BeachType::Intermediate);
    }

    // --- Batch --------------------------------------------------------------

    #[test]
    fn test_batch_excludes_invalid_records_and_keeps_order() {
        let records = vec![
            record("1", 2.0, 8.0, 0.05, 1.2),
            record("2", 0.0, 8.0, 0.05, 1.2),
            record("3", 1.0, 10.0, 0.1, 0.9),
            record("4", 1.0, -2.0, 0.1, 0.9),
            record("5", 1.5, 12.0, 0.15, 2.0),
        ];

        let outcome = batch_analyze(&records, &BeachThresholds::default());

        assert_eq!(outcome.total(), 5);
        let cases: Vec<&str> = outcome.analyzed.iter().map(|a| a.record.case.as_str()).collect();
        assert_eq!(cases, vec!["1", "3", "5"]);

        let rows: Vec<usize> = outcome.rejected.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![2, 4]);
        assert!(outcome
            .rejected
            .iter()
            .all(|r| matches!(r.error, RunupError::InvalidArgument(_))));
    }

    #[test]
    fn test_batch_empty_input_returns_empty_outcome() {
        let outcome = batch_analyze(&[], &BeachThresholds::default());
        assert!(outcome.analyzed.is_empty());
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn test_batch_all_invalid_does_not_fail_wholesale() {
        let records = vec![record("1", 0.0, 8.0, 0.1, 1.0), record("2", 1.0, 0.0, 0.1, 1.0)];
        let outcome = batch_analyze(&records, &BeachThresholds::default());
        assert!(outcome.analyzed.is_empty());
        assert_eq!(outcome.rejected.len(), 2);
    }

    #[test]
    fn test_batch_rejects_record_with_overflowing_period() {
        let records = vec![record("1", 1.0, 1e200, 0.0, 1.0), record("2", 2.0, 8.0, 0.05, 1.2)];
        let outcome = batch_analyze(&records, &BeachThresholds::default());

        assert_eq!(outcome.analyzed.len(), 1);
        assert_eq!(outcome.analyzed[0].record.case, "2");
        assert!(outcome.analyzed.iter().all(|a| a.iribarren.is_finite()));
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].row, 1);
        assert!(matches!(outcome.rejected[0].error, RunupError::InvalidArgument(_)));
    }

    // --- Table pipeline: parse → analyze ------------------------------------

    #[test]
    fn test_analyze_table_reports_rejections_by_file_line() {
        let outcome = analyze_table(fixture_mixed_quality_table(), &AnalysisConfig::default())
            .expect("table with valid header should analyze");

        assert_eq!(outcome.analyzed.len(), 3);

        let lines: Vec<usize> = outcome.rejected.iter().map(|r| r.row).collect();
        assert_eq!(lines, vec![4, 5, 7], "rejections should be sorted by file line");
        assert!(matches!(outcome.rejected[0].error, RunupError::MalformedRecord { .. }));
        assert!(matches!(outcome.rejected[1].error, RunupError::InvalidArgument(_)));
        assert!(matches!(outcome.rejected[2].error, RunupError::MalformedRecord { .. }));
    }

    #[test]
    fn test_analyze_table_missing_column_is_fatal() {
        let err = analyze_table(fixture_missing_r2_table(), &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, RunupError::InvalidArgument(_)));
        assert!(err.to_string().contains("r2"));
    }

    #[test]
    fn test_analyze_table_uses_configured_thresholds() {
        let mut config = AnalysisConfig::default();
        config.thresholds.dissipative_below = 0.2;

        let outcome = analyze_table(fixture_two_beach_table(), &config).unwrap();
        let first = &outcome.analyzed[0];
        assert!(first.iribarren > 0.2 && first.iribarren < 0.5);
        assert_eq!(first.beach_type, BeachType::Intermediate);
    }
}
