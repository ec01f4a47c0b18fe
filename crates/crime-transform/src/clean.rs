//! The per-table cleaning pass.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crime_ingest::RawTable;
use crime_model::{CanonicalField, CrimeRecord};

use crate::normalize::{
    canonical_geo_name, canonical_measure, clean_text, is_expected_measure, parse_count,
    parse_month_year,
};
use crate::reconcile::{SchemaMapping, reconcile};

/// Outcome of cleaning one source table.
#[derive(Debug)]
pub struct CleanedTable {
    pub records: Vec<CrimeRecord>,
    pub report: CleanReport,
}

/// Row accounting and advisory findings for one cleaned table.
///
/// Dropped rows are counted, not itemized; unexpected measure values are
/// collected as a distinct set for one aggregate warning.
#[derive(Debug)]
pub struct CleanReport {
    pub source: PathBuf,
    pub rows_in: usize,
    pub rows_dropped: usize,
    pub unresolved_fields: Vec<CanonicalField>,
    pub dropped_columns: Vec<String>,
    pub unexpected_measures: BTreeSet<String>,
}

/// Clean one raw table into canonical records.
///
/// Per row: reconcile columns, parse the required `month_year` and
/// `count`, lowercase/trim the categorical fields, remap the legacy
/// measure spelling, standardize geographic names, then drop the row if
/// either required field failed to parse. A table yielding zero usable
/// rows is not an error; it simply contributes nothing to the merge.
pub fn clean_table(table: &RawTable) -> CleanedTable {
    let mapping = reconcile(&table.headers);

    let mut records = Vec::with_capacity(table.rows.len());
    let mut rows_dropped = 0usize;
    let mut unexpected_measures = BTreeSet::new();

    for row in &table.rows {
        match clean_row(row, &mapping, &mut unexpected_measures) {
            Some(record) => records.push(record),
            None => rows_dropped += 1,
        }
    }

    CleanedTable {
        records,
        report: CleanReport {
            source: table.source.clone(),
            rows_in: table.rows.len(),
            rows_dropped,
            unresolved_fields: mapping.unresolved.clone(),
            dropped_columns: mapping.dropped.clone(),
            unexpected_measures,
        },
    }
}

fn clean_row(
    row: &[String],
    mapping: &SchemaMapping,
    unexpected_measures: &mut BTreeSet<String>,
) -> Option<CrimeRecord> {
    let cell = |field: CanonicalField| -> &str {
        mapping
            .column(field)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    };

    let month_year = parse_month_year(cell(CanonicalField::MonthYear))?;
    let count = parse_count(cell(CanonicalField::Count))?;

    let measure = clean_text(cell(CanonicalField::Measure)).map(|m| canonical_measure(&m));
    if let Some(value) = &measure {
        if !is_expected_measure(value) {
            unexpected_measures.insert(value.clone());
        }
    }

    let geo = |field: CanonicalField| {
        clean_text(cell(field)).map(|name| canonical_geo_name(&name))
    };

    let financial_year = {
        let raw = cell(CanonicalField::FinancialYear).trim();
        if raw.is_empty() {
            None
        } else {
            // Financial-year labels keep their source casing.
            Some(raw.to_string())
        }
    };

    Some(CrimeRecord {
        month_year,
        area_type: clean_text(cell(CanonicalField::AreaType)),
        borough_snt: geo(CanonicalField::BoroughSnt),
        area_name: geo(CanonicalField::AreaName),
        offence_group: clean_text(cell(CanonicalField::OffenceGroup)),
        offence_subgroup: clean_text(cell(CanonicalField::OffenceSubgroup)),
        measure,
        financial_year,
        count,
    })
}
