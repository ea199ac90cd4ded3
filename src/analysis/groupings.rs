/// Dataset and beach grouping utilities.
///
/// `group_by_dataset` and `group_by_beach` take the flat list of analyzed
/// records produced by the batch layer and organize them for presentation,
/// making it convenient to ask "how does run-up scale on beach X?" without
/// filtering a flat list every time.
///
/// Keys are sorted (BTreeMap) so reports are stable between runs; within a
/// group, records keep their input order.

use std::collections::BTreeMap;

use crate::model::AnalyzedRecord;

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Groups records by their `dataset` identifier.
pub fn group_by_dataset(records: &[AnalyzedRecord]) -> BTreeMap<String, Vec<&AnalyzedRecord>> {
    group_by(records, |r| r.record.dataset.clone())
}

/// Groups records by beach. Beach names are only unique within a dataset,
/// so keys are `dataset/beach`.
pub fn group_by_beach(records: &[AnalyzedRecord]) -> BTreeMap<String, Vec<&AnalyzedRecord>> {
    group_by(records, |r| format!("{}/{}", r.record.dataset, r.record.beach))
}

fn group_by<F>(records: &[AnalyzedRecord], key: F) -> BTreeMap<String, Vec<&AnalyzedRecord>>
where
    F: Fn(&AnalyzedRecord) -> String,
{
    let mut grouped: BTreeMap<String, Vec<&AnalyzedRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(key(record)).or_default().push(record);
    }
    grouped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
