/// Dated series parser for climate indices and wave statistics.
///
/// Two-column delimited text with a header: a date and a value. Dates are
/// `YYYY-MM-DD`, or `YYYY-MM` for monthly products (stored as the first of
/// the month). Empty cells and `NaN` are gaps in the record and are
/// skipped. Any other unreadable row fails the whole series, since a
/// half-read index would silently bias a correlation.

use chrono::NaiveDate;

use crate::error::{Result, RunupError};

/// One dated observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

/// Parse a dated series, skipping the header row and gaps.
pub fn parse_date_series(text: &str, delimiter: char) -> Result<Vec<DatedValue>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        });

    lines
        .next()
        .ok_or_else(|| RunupError::invalid("no header line found in dated series"))?;

    let mut series = Vec::new();
    for (line_no, line) in lines {
        let mut fields = line.split(delimiter).map(str::trim);
        let date_str = fields.next().unwrap_or_default();
        let value_str = fields.next().unwrap_or_default();

        let date = parse_date(date_str)
            .ok_or_else(|| RunupError::malformed(line_no, format!("invalid date '{}'", date_str)))?;

        if value_str.is_empty() || value_str.eq_ignore_ascii_case("nan") {
            tracing::trace!(line = line_no, %date, "gap in series");
            continue;
        }

        let value = value_str.parse::<f64>().map_err(|_| {
            RunupError::malformed(line_no, format!("non-numeric value '{}'", value_str))
        })?;

        series.push(DatedValue { date, value });
    }

    Ok(series)
}

/// Parses `YYYY-MM-DD`, or `YYYY-MM` as the first day of that month.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok())
}
