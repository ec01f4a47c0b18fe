//! Run configuration.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable configuration for one pipeline run.
///
/// Built once at startup from the defaults below plus CLI overrides;
/// nothing mutates it afterwards. The authoritative interval is supplied
/// here, not derived from the data: the start date is the operative
/// cutoff for excluding overlapping supplementary rows, the end date is
/// informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding the workbook and the CSV extracts.
    pub data_dir: PathBuf,
    /// Exact filename of the authoritative workbook.
    pub workbook_name: String,
    /// Filename prefix matching the supplementary CSV extracts.
    pub extract_prefix: String,
    /// Filename of the combined output artifact.
    pub output_name: String,
    /// First month covered by the authoritative workbook.
    pub authoritative_start: NaiveDate,
    /// Last month covered by the authoritative workbook.
    pub authoritative_end: NaiveDate,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            workbook_name: "M1045_MonthlyCrimeDashboard_TNOCrimeData.xlsx".to_string(),
            extract_prefix: "MPS_BoroughSNT_TNOCrimeDatafy".to_string(),
            output_name: "london_crime_combined_clean.csv".to_string(),
            authoritative_start: ymd(2021, 2, 1),
            authoritative_end: ymd(2025, 1, 31),
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_well_formed() {
        let config = PipelineConfig::default();
        assert!(config.authoritative_start < config.authoritative_end);
        assert_eq!(config.authoritative_start, ymd(2021, 2, 1));
    }
}
