//! In-memory raw table, the unit the cleaner consumes.

use std::path::PathBuf;

/// A source table read into memory: one header row plus body rows, all
/// cells as strings. Schema varies per source; reconciliation happens
/// downstream.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Where this table was read from, for reporting.
    pub source: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Strip a UTF-8 BOM and collapse internal whitespace runs in a header.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_strips_bom_and_collapses_spaces() {
        assert_eq!(normalize_header("\u{feff}Area  Name "), "Area Name");
        assert_eq!(normalize_header("Month_Year"), "Month_Year");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn cell_normalization_trims() {
        assert_eq!(normalize_cell("  42 "), "42");
    }
}
