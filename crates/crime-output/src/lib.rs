//! CSV sink for the final dataset.

use std::path::{Path, PathBuf};

use crime_model::{CanonicalField, CrimeRecord};
use thiserror::Error;

/// Errors writing the output artifact. Always fatal to the run.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Write the final dataset as one delimited artifact: header row in
/// canonical column order, dates as `YYYY-MM-DD`, counts without
/// trailing zeros, no index column.
pub fn write_dataset(path: &Path, records: &[CrimeRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    let wrap = |e: csv::Error| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    let headers: Vec<&str> = CanonicalField::ALL.iter().map(|f| f.as_str()).collect();
    writer.write_record(&headers).map_err(wrap)?;

    for record in records {
        writer
            .write_record([
                record.month_year.format("%Y-%m-%d").to_string(),
                record.area_type.clone().unwrap_or_default(),
                record.borough_snt.clone().unwrap_or_default(),
                record.area_name.clone().unwrap_or_default(),
                record.offence_group.clone().unwrap_or_default(),
                record.offence_subgroup.clone().unwrap_or_default(),
                record.measure.clone().unwrap_or_default(),
                record.financial_year.clone().unwrap_or_default(),
                format_count(record.count),
            ])
            .map_err(wrap)?;
    }

    writer.flush().map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    Ok(())
}

/// Render a count without spurious trailing zeros ("5", not "5.0";
/// "12.5" stays "12.5").
fn format_count(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}
