//! Canonical column set and the fixed column-name synonym table.

use serde::{Deserialize, Serialize};

/// A field of the canonical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalField {
    MonthYear,
    AreaType,
    BoroughSnt,
    AreaName,
    OffenceGroup,
    OffenceSubgroup,
    Measure,
    FinancialYear,
    Count,
}

impl CanonicalField {
    /// All canonical fields in output column order.
    pub const ALL: [CanonicalField; 9] = [
        CanonicalField::MonthYear,
        CanonicalField::AreaType,
        CanonicalField::BoroughSnt,
        CanonicalField::AreaName,
        CanonicalField::OffenceGroup,
        CanonicalField::OffenceSubgroup,
        CanonicalField::Measure,
        CanonicalField::FinancialYear,
        CanonicalField::Count,
    ];

    /// Canonical (output) column name.
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalField::MonthYear => "month_year",
            CanonicalField::AreaType => "area_type",
            CanonicalField::BoroughSnt => "borough_snt",
            CanonicalField::AreaName => "area_name",
            CanonicalField::OffenceGroup => "offence_group",
            CanonicalField::OffenceSubgroup => "offence_subgroup",
            CanonicalField::Measure => "measure",
            CanonicalField::FinancialYear => "financial_year",
            CanonicalField::Count => "count",
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every known raw spelling of a source column, mapped to its canonical
/// field. Lookup is case-insensitive, so entries differing only in case
/// ("Area name" vs "Area Name") are kept for documentation of the shapes
/// actually seen in the extracts.
const COLUMN_SYNONYMS: &[(&str, CanonicalField)] = &[
    ("Month_Year", CanonicalField::MonthYear),
    ("Area Type", CanonicalField::AreaType),
    ("Borough_SNT", CanonicalField::BoroughSnt),
    ("Area name", CanonicalField::AreaName),
    ("Area Name", CanonicalField::AreaName),
    ("Offence Group", CanonicalField::OffenceGroup),
    ("Offence Subgroup", CanonicalField::OffenceSubgroup),
    ("Measure", CanonicalField::Measure),
    ("Financial Year", CanonicalField::FinancialYear),
    ("Count", CanonicalField::Count),
    // Canonical names resolve to themselves so a cleaned table can be
    // re-reconciled without loss.
    ("month_year", CanonicalField::MonthYear),
    ("area_type", CanonicalField::AreaType),
    ("borough_snt", CanonicalField::BoroughSnt),
    ("area_name", CanonicalField::AreaName),
    ("offence_group", CanonicalField::OffenceGroup),
    ("offence_subgroup", CanonicalField::OffenceSubgroup),
    ("financial_year", CanonicalField::FinancialYear),
];

/// Resolve a raw header against the synonym table, case-insensitively.
///
/// Unrecognized headers return `None`; callers drop those columns, which
/// is documented policy rather than an error (sources legitimately carry
/// columns the canonical schema does not).
pub fn resolve_column(header: &str) -> Option<CanonicalField> {
    let trimmed = header.trim();
    COLUMN_SYNONYMS
        .iter()
        .find(|(raw, _)| raw.eq_ignore_ascii_case(trimmed))
        .map(|(_, field)| *field)
}
