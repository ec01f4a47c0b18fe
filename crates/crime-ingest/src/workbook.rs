//! Authoritative workbook reader.

use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto};

use crate::error::{IngestError, Result};
use crate::table::{RawTable, normalize_cell, normalize_header};

/// Read the first worksheet of a spreadsheet into a [`RawTable`].
///
/// The first row is taken as the header row. Typed date cells are
/// rendered as ISO dates so the downstream date parser sees one format
/// regardless of the workbook's display formatting; numbers holding
/// whole values are rendered without a decimal point.
pub fn read_workbook_table(path: &Path) -> Result<RawTable> {
    let mut workbook: Sheets<_> =
        open_workbook_auto(path).map_err(|e| IngestError::WorkbookRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| IngestError::WorkbookRead {
            path: path.to_path_buf(),
            message: "workbook contains no sheets".to_string(),
        })?;

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| IngestError::WorkbookRead {
            path: path.to_path_buf(),
            message: format!("failed to read sheet '{first_sheet}': {e}"),
        })?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row
            .iter()
            .map(|cell| normalize_header(&cell_to_string(cell)))
            .collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let mut values = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let cell = row.get(idx).unwrap_or(&Data::Empty);
            values.push(normalize_cell(&cell_to_string(cell)));
        }
        if values.iter().all(String::is_empty) {
            continue;
        }
        rows.push(values);
    }

    Ok(RawTable {
        source: path.to_path_buf(),
        headers,
        rows,
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => datetime.format("%Y-%m-%d").to_string(),
            None => format!("{}", dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
