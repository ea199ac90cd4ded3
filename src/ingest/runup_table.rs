/// Run-up observation table parser
///
/// Parses the delimited text table of run-up observations compiled from
/// laboratory and field campaigns.
///
/// Format:
/// - Optional preamble: blank lines and lines starting with the comment
///   prefix (default '#') before the header
/// - Header: delimited column names, with or without a UTF-8 BOM
/// - Every non-blank line after the header is an observation, even if it
///   starts with the comment prefix
///
/// Columns are located by name, so their order does not matter and extra
/// columns are ignored. Required columns:
/// - dataset, beach, case: identifiers
/// - lab_field: "lab"/"laboratory" or "field"
/// - hs (m), tp (s), beta, d50 (m), roughness, r2 (m): numeric
///
/// A missing required column makes the whole table unusable. A row that
/// fails conversion is rejected on its own and parsing continues.

use std::collections::HashMap;

use crate::config::TableConfig;
use crate::error::{Result, RunupError};
use crate::model::*;

/// A successfully converted row and the file line it came from.
#[derive(Debug, Clone)]
pub struct ParsedRow {
    /// 1-based line number in the source text.
    pub line: usize,
    pub record: RunupRecord,
}

/// Parsed table: converted rows in file order plus per-row failures.
#[derive(Debug, Default)]
pub struct ParsedTable {
    pub rows: Vec<ParsedRow>,
    pub rejected: Vec<RejectedRecord>,
}

/// Column index map for the required columns.
struct ColumnIndex {
    map: HashMap<&'static str, usize>,
}

impl ColumnIndex {
    fn from_header(header: &str, delimiter: char) -> Result<Self> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for (idx, name) in header.split(delimiter).enumerate() {
            positions.entry(name.trim()).or_insert(idx);
        }

        let mut map = HashMap::new();
        for column in INPUT_COLUMNS {
            let idx = positions.get(column).ok_or_else(|| {
                RunupError::invalid(format!("missing required column '{}'", column))
            })?;
            map.insert(column, *idx);
        }
        Ok(Self { map })
    }

    fn field<'a>(&self, fields: &[&'a str], column: &str, line: usize) -> Result<&'a str> {
        let idx = self.map[column];
        fields
            .get(idx)
            .copied()
            .map(str::trim)
            .ok_or_else(|| RunupError::malformed(line, format!("missing value for column '{}'", column)))
    }

    fn number(&self, fields: &[&str], column: &str, line: usize) -> Result<f64> {
        let raw = self.field(fields, column, line)?;
        let value = raw.parse::<f64>().map_err(|_| {
            RunupError::malformed(
                line,
                format!("column '{}' has non-numeric value '{}'", column, raw),
            )
        })?;
        if !value.is_finite() {
            return Err(RunupError::malformed(
                line,
                format!("column '{}' has non-finite value '{}'", column, raw),
            ));
        }
        Ok(value)
    }
}

/// Parse a run-up observation table.
///
/// # Arguments
/// * `text` - Raw delimited text, header first
/// * `format` - Delimiter and comment prefix
///
/// # Returns
/// Converted rows and row-level rejections, or a fatal error when the
/// header is absent or lacks a required column.
pub fn parse_runup_table(text: &str, format: &TableConfig) -> Result<ParsedTable> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line));

    let (_, header_line) = lines
        .find(|(_, line)| !is_preamble(line, format.comment_prefix))
        .ok_or_else(|| RunupError::invalid("no header line found in run-up table"))?;
    let columns = ColumnIndex::from_header(header_line, format.delimiter)?;

    let mut table = ParsedTable::default();
    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(format.delimiter).collect();
        match parse_row(&columns, &fields, line_no) {
            Ok(record) => table.rows.push(ParsedRow { line: line_no, record }),
            Err(error) => {
                tracing::warn!(line = line_no, %error, "row rejected during parsing");
                table.rejected.push(RejectedRecord { row: line_no, error });
            }
        }
    }

    tracing::debug!(
        rows = table.rows.len(),
        rejected = table.rejected.len(),
        "parsed run-up table"
    );
    Ok(table)
}

/// Blank or comment line ahead of the header.
fn is_preamble(line: &str, comment_prefix: Option<char>) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return true;
    }
    match comment_prefix {
        Some(prefix) => trimmed.starts_with(prefix),
        None => false,
    }
}

fn parse_row(columns: &ColumnIndex, fields: &[&str], line: usize) -> Result<RunupRecord> {
    let lab_field_raw = columns.field(fields, COL_LAB_FIELD, line)?;
    let lab_field = lab_field_raw.parse::<LabField>().map_err(|_| {
        RunupError::malformed(
            line,
            format!("column '{}' has unrecognised value '{}'", COL_LAB_FIELD, lab_field_raw),
        )
    })?;

    Ok(RunupRecord {
        dataset: columns.field(fields, COL_DATASET, line)?.to_string(),
        beach: columns.field(fields, COL_BEACH, line)?.to_string(),
        case: columns.field(fields, COL_CASE, line)?.to_string(),
        lab_field,
        hs: columns.number(fields, COL_HS, line)?,
        tp: columns.number(fields, COL_TP, line)?,
        beta: columns.number(fields, COL_BETA, line)?,
        d50: columns.number(fields, COL_D50, line)?,
        roughness: columns.number(fields, COL_ROUGHNESS, line)?,
        r2: columns.number(fields, COL_R2, line)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;

    fn csv() -> TableConfig {
        TableConfig::default()
    }

    #[test]
    fn test_parse_basic_table() {
        let table = parse_runup_table(fixture_two_beach_table(), &csv()).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert!(table.rejected.is_empty());

        let first = &table.rows[0];
        assert_eq!(first.line, 2);
        assert_eq!(first.record.dataset, "A");
        assert_eq!(first.record.beach, "B1");
        assert_eq!(first.record.case, "1");
        assert_eq!(first.record.lab_field, LabField::Field);
        assert_eq!(first.record.hs, 2.0);
        assert_eq!(first.record.tp, 8.0);
        assert_eq!(first.record.beta, 0.05);
        assert_eq!(first.record.d50, 0.0003);
        assert_eq!(first.record.roughness, 1.0);
        assert_eq!(first.record.r2, 1.2);
    }

    #[test]
    fn test_parse_columns_in_any_order_with_extras() {
        let text = "r2,hs,tp,notes,beta,d50,roughness,case,beach,dataset,lab_field\n\
                    1.2,2.0,8.0,calm day,0.05,0.0003,1.0,1,B1,A,lab\n";
        let table = parse_runup_table(text, &csv()).unwrap();
        assert_eq!(table.rows.len(), 1);
        let record = &table.rows[0].record;
        assert_eq!(record.r2, 1.2);
        assert_eq!(record.dataset, "A");
        assert_eq!(record.lab_field, LabField::Lab);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let table = parse_runup_table(fixture_commented_table(), &csv()).unwrap();
        assert_eq!(table.rows.len(), 2);
        // Header is on line 3 after two comment lines; data follows a blank line.
        assert_eq!(table.rows[0].line, 5);
        assert_eq!(table.rows[1].line, 6);
    }

    #[test]
    fn test_comment_prefix_after_header_is_data() {
        let text = "dataset,beach,case,lab_field,hs,tp,beta,d50,roughness,r2\n\
                    #7,B1,1,field,2.0,8.0,0.05,0.0003,1.0,1.2\n\
                    # stray note\n\
                    A,B1,2,field,2.0,8.0,0.2,0.0003,1.0,1.2\n";
        let table = parse_runup_table(text, &csv()).unwrap();

        let datasets: Vec<&str> = table.rows.iter().map(|r| r.record.dataset.as_str()).collect();
        assert_eq!(datasets, vec!["#7", "A"]);
        assert_eq!(table.rows[1].line, 4);
        // A comment-looking line inside the body is reported, not dropped.
        assert_eq!(table.rejected.len(), 1);
        assert!(matches!(table.rejected[0].error, RunupError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_byte_order_mark_before_header_is_ignored() {
        let text = "\u{feff}dataset,beach,case,lab_field,hs,tp,beta,d50,roughness,r2\n\
                    A,B1,1,field,2.0,8.0,0.05,0.0003,1.0,1.2\n";
        let table = parse_runup_table(text, &csv()).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].record.dataset, "A");
        assert_eq!(table.rows[0].line, 2);
    }

    #[test]
    fn test_non_finite_value_is_malformed() {
        let text = "dataset,beach,case,lab_field,hs,tp,beta,d50,roughness,r2\n\
                    A,B1,1,field,NaN,8.0,0.05,0.0003,1.0,1.2\n\
                    A,B1,2,field,2.0,inf,0.05,0.0003,1.0,1.2\n";
        let table = parse_runup_table(text, &csv()).unwrap();
        assert!(table.rows.is_empty());
        match &table.rejected[0].error {
            RunupError::MalformedRecord { line, message } => {
                assert_eq!(*line, 2);
                assert!(message.contains("'hs'"), "got: {}", message);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
        assert!(matches!(table.rejected[1].error, RunupError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_parse_tab_delimited() {
        let format = TableConfig {
            delimiter: '\t',
            comment_prefix: Some('#'),
        };
        let text = "dataset\tbeach\tcase\tlab_field\ths\ttp\tbeta\td50\troughness\tr2\n\
                    A\tB1\t1\tfield\t2.0\t8.0\t0.05\t0.0003\t1.0\t1.2\n";
        let table = parse_runup_table(text, &format).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].record.beta, 0.05);
    }

    #[test]
    fn test_non_numeric_value_is_malformed_and_parsing_continues() {
        let table = parse_runup_table(fixture_mixed_quality_table(), &csv()).unwrap();

        let malformed: Vec<usize> = table.rejected.iter().map(|r| r.row).collect();
        assert_eq!(malformed, vec![4, 7]);
        match &table.rejected[0].error {
            RunupError::MalformedRecord { line, message } => {
                assert_eq!(*line, 4);
                assert!(message.contains("'hs'"), "got: {}", message);
                assert!(message.contains("abc"), "got: {}", message);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
        // Line 5 (hs = 0) converts fine; it is rejected later by analysis.
        assert_eq!(table.rows.len(), 4);
    }

    #[test]
    fn test_short_row_is_malformed() {
        let text = "dataset,beach,case,lab_field,hs,tp,beta,d50,roughness,r2\nA,B1,1,field,2.0\n";
        let table = parse_runup_table(text, &csv()).unwrap();
        assert!(table.rows.is_empty());
        assert!(matches!(table.rejected[0].error, RunupError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let err = parse_runup_table(fixture_missing_r2_table(), &csv()).unwrap_err();
        assert!(matches!(err, RunupError::InvalidArgument(_)));
        assert!(err.to_string().contains("'r2'"));
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let err = parse_runup_table("# only a comment\n\n", &csv()).unwrap_err();
        assert!(matches!(err, RunupError::InvalidArgument(_)));
    }

    #[test]
    fn test_header_only_yields_empty_table() {
        let text = "dataset,beach,case,lab_field,hs,tp,beta,d50,roughness,r2\n";
        let table = parse_runup_table(text, &csv()).unwrap();
        assert!(table.rows.is_empty());
        assert!(table.rejected.is_empty());
    }
}
