//! The canonical crime record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the combined dataset after cleaning.
///
/// `month_year` and `count` are required: rows that fail to produce both
/// are dropped during cleaning and never reach this type. Every other
/// field is optional because the two source shapes carry different
/// column subsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimeRecord {
    pub month_year: NaiveDate,
    pub area_type: Option<String>,
    pub borough_snt: Option<String>,
    pub area_name: Option<String>,
    pub offence_group: Option<String>,
    pub offence_subgroup: Option<String>,
    pub measure: Option<String>,
    pub financial_year: Option<String>,
    pub count: f64,
}

impl CrimeRecord {
    /// Ordering key for the final dataset: month, area, offence group,
    /// measure, ascending. Ties beyond these keys keep insertion order
    /// (the merge sort is stable).
    pub fn sort_key(&self) -> (NaiveDate, Option<&str>, Option<&str>, Option<&str>) {
        (
            self.month_year,
            self.area_name.as_deref(),
            self.offence_group.as_deref(),
            self.measure.as_deref(),
        )
    }

    /// Composite uniqueness key. Fields are joined with `'|'`, with
    /// absent values rendered empty, so two records collide exactly when
    /// all six key fields agree.
    pub fn dedupe_key(&self) -> String {
        let parts = [
            self.month_year.format("%Y-%m-%d").to_string(),
            self.area_name.clone().unwrap_or_default(),
            self.borough_snt.clone().unwrap_or_default(),
            self.offence_group.clone().unwrap_or_default(),
            self.offence_subgroup.clone().unwrap_or_default(),
            self.measure.clone().unwrap_or_default(),
        ];
        parts.join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, area: &str) -> CrimeRecord {
        CrimeRecord {
            month_year: NaiveDate::from_ymd_opt(2021, 1, day).unwrap(),
            area_type: None,
            borough_snt: Some("camden".to_string()),
            area_name: Some(area.to_string()),
            offence_group: Some("burglary".to_string()),
            offence_subgroup: None,
            measure: Some("offences".to_string()),
            financial_year: None,
            count: 4.0,
        }
    }

    #[test]
    fn dedupe_key_ignores_count() {
        let mut a = record(15, "camden");
        let mut b = record(15, "camden");
        a.count = 1.0;
        b.count = 99.0;
        assert_eq!(a.dedupe_key(), b.dedupe_key());
    }

    #[test]
    fn dedupe_key_distinguishes_areas() {
        assert_ne!(record(15, "camden").dedupe_key(), record(15, "brent").dedupe_key());
    }

    #[test]
    fn sort_key_orders_by_date_first() {
        assert!(record(1, "westminster").sort_key() < record(2, "brent").sort_key());
    }
}
