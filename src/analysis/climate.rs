/// Climate index / wave anomaly correlation.
///
/// Series are joined on their dates before anything is compared. Two
/// records of different length are never paired up by position: a month
/// missing from one series simply drops out of the join and is counted.
///
/// Typical use: daily Hs → `monthly_means` → `monthly_anomalies`, then
/// `align_by_date` against a monthly index and `pearson_correlation`.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, RunupError};
use crate::ingest::climate_series::DatedValue;

/// A date present in both series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedPair {
    pub date: NaiveDate,
    pub left: f64,
    pub right: f64,
}

/// Result of joining two series on date.
#[derive(Debug, Clone, Default)]
pub struct Alignment {
    /// Matched dates, ascending.
    pub pairs: Vec<AlignedPair>,
    pub unmatched_left: usize,
    pub unmatched_right: usize,
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Keyed by date; a repeated date keeps the last value seen.
fn index_by_date(series: &[DatedValue]) -> BTreeMap<NaiveDate, f64> {
    series.iter().map(|v| (v.date, v.value)).collect()
}

/// Averages values within each calendar month. Output dates are the first
/// of the month, ascending.
pub fn monthly_means(series: &[DatedValue]) -> Vec<DatedValue> {
    let mut sums: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for v in series {
        let entry = sums.entry(month_start(v.date)).or_insert((0.0, 0));
        entry.0 += v.value;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(date, (sum, n))| DatedValue {
            date,
            value: sum / n as f64,
        })
        .collect()
}

/// Subtracts the calendar-month climatology (mean over all years of the
/// values falling in that month) from every value. Order is preserved.
pub fn monthly_anomalies(series: &[DatedValue]) -> Vec<DatedValue> {
    let mut climatology: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for v in series {
        let entry = climatology.entry(v.date.month()).or_insert((0.0, 0));
        entry.0 += v.value;
        entry.1 += 1;
    }

    series
        .iter()
        .map(|v| {
            let (sum, n) = climatology[&v.date.month()];
            DatedValue {
                date: v.date,
                value: v.value - sum / n as f64,
            }
        })
        .collect()
}

/// Inner join of two series on exact date.
pub fn align_by_date(left: &[DatedValue], right: &[DatedValue]) -> Alignment {
    let left = index_by_date(left);
    let right = index_by_date(right);

    let pairs: Vec<AlignedPair> = left
        .iter()
        .filter_map(|(date, l)| {
            right.get(date).map(|r| AlignedPair {
                date: *date,
                left: *l,
                right: *r,
            })
        })
        .collect();

    let alignment = Alignment {
        unmatched_left: left.len() - pairs.len(),
        unmatched_right: right.len() - pairs.len(),
        pairs,
    };
    if alignment.unmatched_left > 0 || alignment.unmatched_right > 0 {
        tracing::info!(
            matched = alignment.pairs.len(),
            unmatched_left = alignment.unmatched_left,
            unmatched_right = alignment.unmatched_right,
            "series do not cover the same dates"
        );
    }
    alignment
}

/// Pearson correlation coefficient between the two sides of the pairs.
pub fn pearson_correlation(pairs: &[AlignedPair]) -> Result<f64> {
    if pairs.len() < 2 {
        return Err(RunupError::InsufficientData(format!(
            "correlation needs at least 2 aligned dates, got {}",
            pairs.len()
        )));
    }

    let n = pairs.len() as f64;
    let mean_l = pairs.iter().map(|p| p.left).sum::<f64>() / n;
    let mean_r = pairs.iter().map(|p| p.right).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_l = 0.0;
    let mut var_r = 0.0;
    for p in pairs {
        let dl = p.left - mean_l;
        let dr = p.right - mean_r;
        cov += dl * dr;
        var_l += dl * dl;
        var_r += dr * dr;
    }

    if var_l == 0.0 || var_r == 0.0 {
        return Err(RunupError::InsufficientData(
            "correlation undefined for a constant series".to_string(),
        ));
    }
    Ok(cov / (var_l * var_r).sqrt())
}
