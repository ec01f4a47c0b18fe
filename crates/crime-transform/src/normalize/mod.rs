//! Pure value normalizers.
//!
//! - **datetime**: ordered-format date parsing for `month_year`
//! - **numeric**: count parsing
//! - **text**: string, measure, and geographic-name canonicalization

pub mod datetime;
pub mod numeric;
pub mod text;

pub use datetime::parse_month_year;
pub use numeric::parse_count;
pub use text::{
    EXPECTED_MEASURES, canonical_geo_name, canonical_measure, clean_text, is_expected_measure,
};
