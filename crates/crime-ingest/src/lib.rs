//! Source discovery and table readers.
//!
//! Two source shapes exist: one authoritative XLSX workbook located by
//! exact filename, and any number of supplementary CSV extracts located
//! by filename prefix. Both read into the same [`RawTable`] shape; all
//! value-level policy lives downstream in the cleaner.

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod table;
pub mod workbook;

use std::path::Path;

pub use csv_table::read_csv_table;
pub use discovery::{find_extracts, find_workbook};
pub use error::{IngestError, Result};
pub use table::RawTable;
pub use workbook::read_workbook_table;

/// Read any supported source by extension: `.xlsx`/`.xls` via the
/// workbook reader, everything else as delimited text.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let is_spreadsheet = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xls"))
        .unwrap_or(false);
    if is_spreadsheet {
        read_workbook_table(path)
    } else {
        read_csv_table(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn dispatches_csv_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "Count\n1\n").unwrap();
        let table = read_table(&path).unwrap();
        assert_eq!(table.headers, vec!["Count"]);
    }

    #[test]
    fn xlsx_extension_goes_to_the_workbook_reader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not-really.xlsx");
        std::fs::write(&path, "plain text").unwrap();
        // A bogus workbook surfaces as a workbook error, proving dispatch.
        assert!(matches!(
            read_table(&path),
            Err(IngestError::WorkbookRead { .. })
        ));
    }
}
