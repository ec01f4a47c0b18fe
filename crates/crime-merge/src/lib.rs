//! Merge engine: overlap exclusion, ordering, and duplicate resolution.
//!
//! Supplementary rows inside the authoritative interval are excluded up
//! front, the remainder is concatenated with the authoritative table
//! (authoritative last), stably sorted, and deduplicated keep-last. An
//! authoritative record therefore always wins a key collision with a
//! supplementary one, and ties within one source resolve to whichever
//! sorts last.

use std::collections::HashMap;

use chrono::NaiveDate;
use crime_model::CrimeRecord;

/// Result of the merge: the final dataset plus row accounting.
#[derive(Debug)]
pub struct MergeOutcome {
    pub records: Vec<CrimeRecord>,
    /// Supplementary rows dropped by the interval cutoff.
    pub supplementary_excluded: usize,
    /// Rows dropped by key deduplication.
    pub duplicates_dropped: usize,
}

/// Combine the cleaned authoritative table with the cleaned
/// supplementary tables.
///
/// `cutoff` is the authoritative interval's start bound: supplementary
/// rows are kept only when `month_year < cutoff`. The inequality is
/// strict, so a supplementary row dated exactly on the boundary is
/// excluded in favor of the authoritative source.
pub fn merge(
    authoritative: Vec<CrimeRecord>,
    supplementary: Vec<Vec<CrimeRecord>>,
    cutoff: NaiveDate,
) -> MergeOutcome {
    let supplementary_total: usize = supplementary.iter().map(Vec::len).sum();

    // Supplementary first, authoritative last: keep-last dedupe below
    // turns concatenation order into precedence.
    let mut combined: Vec<CrimeRecord> = supplementary
        .into_iter()
        .flatten()
        .filter(|record| record.month_year < cutoff)
        .collect();
    let supplementary_excluded = supplementary_total - combined.len();
    combined.extend(authoritative);

    // Stable: ties keep concatenation order.
    combined.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let before = combined.len();
    let records = dedupe_keep_last(combined);
    let duplicates_dropped = before - records.len();

    MergeOutcome {
        records,
        supplementary_excluded,
        duplicates_dropped,
    }
}

/// Keep the last occurrence of each composite key, preserving the
/// sorted order of the survivors.
fn dedupe_keep_last(records: Vec<CrimeRecord>) -> Vec<CrimeRecord> {
    let mut last_index: HashMap<String, usize> = HashMap::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        last_index.insert(record.dedupe_key(), idx);
    }
    records
        .into_iter()
        .enumerate()
        .filter(|(idx, record)| last_index.get(&record.dedupe_key()) == Some(idx))
        .map(|(_, record)| record)
        .collect()
}
