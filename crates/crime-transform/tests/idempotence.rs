//! Cleaning an already-clean table must yield the same table: canonical
//! column names resolve back to themselves and canonical values survive
//! a second normalization pass unchanged.

use std::path::PathBuf;

use crime_ingest::RawTable;
use crime_model::CanonicalField;
use crime_transform::clean_table;

fn render_clean_output(records: &[crime_model::CrimeRecord]) -> RawTable {
    let headers: Vec<String> = CanonicalField::ALL
        .iter()
        .map(|field| field.as_str().to_string())
        .collect();
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.month_year.format("%Y-%m-%d").to_string(),
                r.area_type.clone().unwrap_or_default(),
                r.borough_snt.clone().unwrap_or_default(),
                r.area_name.clone().unwrap_or_default(),
                r.offence_group.clone().unwrap_or_default(),
                r.offence_subgroup.clone().unwrap_or_default(),
                r.measure.clone().unwrap_or_default(),
                r.financial_year.clone().unwrap_or_default(),
                format!("{}", r.count),
            ]
        })
        .collect();
    RawTable {
        source: PathBuf::from("recleaned.csv"),
        headers,
        rows,
    }
}

#[test]
fn cleaning_is_idempotent() {
    let raw = RawTable {
        source: PathBuf::from("source.csv"),
        headers: vec![
            "Month_Year".to_string(),
            "Area Type".to_string(),
            "Borough_SNT".to_string(),
            "Area name".to_string(),
            "Offence Group".to_string(),
            "Offence Subgroup".to_string(),
            "Measure".to_string(),
            "Financial Year".to_string(),
            "Count".to_string(),
        ],
        rows: vec![
            vec![
                "01/04/2017".to_string(),
                "Borough".to_string(),
                "Hammersmith & Fulham".to_string(),
                "Heathrow".to_string(),
                "Burglary".to_string(),
                "Residential".to_string(),
                "Outcomes".to_string(),
                "2017/18".to_string(),
                "12".to_string(),
            ],
            vec![
                "01/05/2017".to_string(),
                "Borough".to_string(),
                "Camden".to_string(),
                "Camden".to_string(),
                "Robbery".to_string(),
                "Personal".to_string(),
                "Offences".to_string(),
                "2017/18".to_string(),
                "3".to_string(),
            ],
        ],
    };

    let first = clean_table(&raw);
    assert_eq!(first.records.len(), 2);
    assert_eq!(first.report.rows_dropped, 0);

    let second = clean_table(&render_clean_output(&first.records));
    assert_eq!(second.report.rows_dropped, 0);
    assert!(second.report.unresolved_fields.is_empty());
    assert_eq!(first.records, second.records);
}
