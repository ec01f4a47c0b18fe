//! String, measure, and geographic-name canonicalization.

use crime_model::geo_synonym;

/// The values `measure` is expected to hold. Anything else is an
/// advisory condition: logged, never rejected.
pub const EXPECTED_MEASURES: [&str; 2] = ["offences", "positive outcomes"];

/// Lowercase and trim a categorical cell; blank passes through as `None`.
pub fn clean_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Remap the one known legacy measure spelling. All other values pass
/// through unchanged; the caller flags anything outside
/// [`EXPECTED_MEASURES`] as a warning.
pub fn canonical_measure(measure: &str) -> String {
    if measure == "outcomes" {
        "positive outcomes".to_string()
    } else {
        measure.to_string()
    }
}

pub fn is_expected_measure(measure: &str) -> bool {
    EXPECTED_MEASURES.contains(&measure)
}

/// Standardize a geographic name: `" & "` becomes `" and "`, then the
/// fixed synonym table corrects known-inconsistent spellings. Unmatched
/// names pass through unchanged.
pub fn canonical_geo_name(name: &str) -> String {
    let normalized = name.replace(" & ", " and ");
    match geo_synonym(&normalized) {
        Some(standard) => standard.to_string(),
        None => normalized,
    }
}
