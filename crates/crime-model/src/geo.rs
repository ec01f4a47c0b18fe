//! Fixed geographic name standardization table.

/// Known inconsistent or incorrect geographic names and their
/// standardized forms. Applied after ampersand normalization, so the
/// keys are already in `" and "` form where relevant.
///
/// Unmatched values pass through unchanged. The table only corrects
/// spellings known to vary between extracts.
const GEO_SYNONYMS: &[(&str, &str)] = &[
    ("aviation security(so18)", "aviation security"),
    ("other / nk", "aviation security"),
    ("heathrow", "aviation security"),
    ("city of westminster", "westminster"),
    // Covered by ampersand normalization for callers that apply it first;
    // kept so a bare table lookup still corrects the raw spelling.
    ("hammersmith & fulham", "hammersmith and fulham"),
];

/// Exact-match lookup against the geographic synonym table.
pub fn geo_synonym(name: &str) -> Option<&'static str> {
    GEO_SYNONYMS
        .iter()
        .find(|(raw, _)| *raw == name)
        .map(|(_, standard)| *standard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_standard_form() {
        assert_eq!(geo_synonym("aviation security(so18)"), Some("aviation security"));
        assert_eq!(geo_synonym("heathrow"), Some("aviation security"));
        assert_eq!(geo_synonym("city of westminster"), Some("westminster"));
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(geo_synonym("camden"), None);
    }
}
