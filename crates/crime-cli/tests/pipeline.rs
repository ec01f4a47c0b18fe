//! End-to-end pipeline runs against temp-dir fixtures.
//!
//! The authoritative source is exercised through the delimited reader
//! (the reader dispatches on extension), which keeps fixtures plain
//! text while covering the full clean → merge → write path.

use std::path::Path;

use crime_cli::pipeline::run;
use crime_model::PipelineConfig;
use tempfile::TempDir;

const AUTH_HEADERS: &str = "Month_Year,Area Type,Area name,Offence Group,Offence Subgroup,Measure,Count";
const EXTRACT_HEADERS: &str =
    "Month_Year,Area Type,Borough_SNT,Area Name,Offence Group,Offence Subgroup,Measure,Financial Year,Count";

fn write_fixture(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

fn config_for(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        data_dir: dir.to_path_buf(),
        workbook_name: "dashboard.csv".to_string(),
        ..PipelineConfig::default()
    }
}

fn standard_fixtures(dir: &Path) {
    write_fixture(
        dir,
        "dashboard.csv",
        &format!(
            "{AUTH_HEADERS}\n\
             2021-02-01,Borough,Camden,Burglary,Residential,Offences,10\n\
             2023-06-01,Borough,Westminster,Robbery,Personal,Offences,7\n\
             2025-01-01,Borough,Camden,Burglary,Residential,Outcomes,4\n"
        ),
    );
    write_fixture(
        dir,
        "MPS_BoroughSNT_TNOCrimeDatafy17-18.csv",
        &format!(
            "{EXTRACT_HEADERS}\n\
             01/04/2017,Borough,Camden,Camden,Burglary,Residential,Offences,2017/18,5\n\
             01/03/2018,Borough,Hammersmith & Fulham,Hammersmith & Fulham,Robbery,Personal,Offences,2017/18,3\n"
        ),
    );
    write_fixture(
        dir,
        "MPS_BoroughSNT_TNOCrimeDatafy18-19.csv",
        &format!(
            "{EXTRACT_HEADERS}\n\
             01/04/2018,Borough,Brent,Brent,Burglary,Residential,Outcomes,2018/19,6\n\
             bad date,Borough,Brent,Brent,Burglary,Residential,Offences,2018/19,1\n"
        ),
    );
    write_fixture(
        dir,
        "MPS_BoroughSNT_TNOCrimeDatafy20-21.csv",
        &format!(
            "{EXTRACT_HEADERS}\n\
             01/01/2021,Borough,Camden,Camden,Burglary,Residential,Offences,2020/21,8\n\
             01/02/2021,Borough,Camden,Camden,Burglary,Residential,Offences,2020/21,99\n\
             01/03/2021,Borough,Camden,Camden,Burglary,Residential,Offences,2020/21,98\n"
        ),
    );
}

#[test]
fn combines_sources_into_one_sorted_deduplicated_file() {
    let dir = TempDir::new().unwrap();
    standard_fixtures(dir.path());

    let summary = run(&config_for(dir.path())).unwrap();

    // 2 + 1 + 1 supplementary rows survive (one bad date, two rows on or
    // after the 2021-02-01 cutoff) plus 3 authoritative rows.
    assert_eq!(summary.final_rows, 7);
    assert_eq!(summary.supplementary_excluded, 2);
    assert_eq!(summary.duplicates_dropped, 0);
    assert_eq!(summary.extracts_found, 3);
    assert_eq!(summary.extracts_skipped, 0);

    let (earliest, latest) = summary.date_range.unwrap();
    assert_eq!(earliest.to_string(), "2017-04-01");
    assert_eq!(latest.to_string(), "2025-01-01");

    let contents = std::fs::read_to_string(&summary.output_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "month_year,area_type,borough_snt,area_name,offence_group,offence_subgroup,measure,financial_year,count"
    );
    // Sorted ascending by month, so the oldest extract row leads and the
    // last workbook month closes the file.
    assert!(lines[1].starts_with("2017-04-01"));
    assert!(lines.last().unwrap().starts_with("2025-01-01"));
    // Ampersand standardization flowed through to the artifact.
    assert!(contents.contains("hammersmith and fulham"));
    // The legacy measure spelling was remapped.
    assert!(contents.contains("positive outcomes"));
    assert!(!contents.contains(",outcomes,"));
}

#[test]
fn authoritative_row_wins_a_key_collision() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        dir.path(),
        "dashboard.csv",
        &format!("{AUTH_HEADERS}\n2021-01-15,Borough,Camden,Burglary,Residential,Offences,11\n"),
    );
    // Blank borough_snt so the key matches the workbook row, which has
    // no borough_snt column at all. The date predates the cutoff, so
    // the row survives the interval filter and must lose at dedupe.
    write_fixture(
        dir.path(),
        "MPS_BoroughSNT_TNOCrimeDatafy20-21.csv",
        &format!(
            "{EXTRACT_HEADERS}\n\
             15/01/2021,Borough,,Camden,Burglary,Residential,Offences,2020/21,7\n"
        ),
    );

    let summary = run(&config_for(dir.path())).unwrap();
    assert_eq!(summary.final_rows, 1);
    assert_eq!(summary.duplicates_dropped, 1);

    let contents = std::fs::read_to_string(&summary.output_path).unwrap();
    assert!(contents.contains(",11"));
    assert!(!contents.contains(",7"));
}

#[test]
fn missing_workbook_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        dir.path(),
        "MPS_BoroughSNT_TNOCrimeDatafy17-18.csv",
        &format!("{EXTRACT_HEADERS}\n01/04/2017,Borough,Camden,Camden,Burglary,Residential,Offences,2017/18,5\n"),
    );

    let config = config_for(dir.path());
    assert!(run(&config).is_err());
    assert!(!dir.path().join(config.output_name).exists());
}

#[test]
fn zero_extracts_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        dir.path(),
        "dashboard.csv",
        &format!("{AUTH_HEADERS}\n2021-02-01,Borough,Camden,Burglary,Residential,Offences,10\n"),
    );

    let config = config_for(dir.path());
    let error = run(&config).unwrap_err();
    assert!(error.to_string().contains("no supplementary extracts"));
    assert!(!dir.path().join(config.output_name).exists());
}
