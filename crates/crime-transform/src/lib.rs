//! Cleaning layer: value normalization, schema reconciliation, and the
//! per-table cleaning pass that composes them.
//!
//! Everything here is pure: no I/O, no shared state. Malformed cells
//! never abort a table: rows missing a required field after
//! normalization are dropped and counted, everything else is advisory.

pub mod clean;
pub mod normalize;
pub mod reconcile;

pub use clean::{CleanReport, CleanedTable, clean_table};
pub use normalize::{
    EXPECTED_MEASURES, canonical_geo_name, canonical_measure, clean_text, is_expected_measure,
    parse_count, parse_month_year,
};
pub use reconcile::{SchemaMapping, reconcile};
