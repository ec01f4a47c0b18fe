//! The run itself, staged: ingest → clean → merge → write.
//!
//! Failure semantics per stage:
//! - missing/unreadable workbook, zero extracts found, zero extracts
//!   loaded, unwritable sink: fatal, the error propagates to `main`
//! - one extract failing to load: logged at `warn`, skipped
//! - malformed rows and unexpected categorical values: handled inside
//!   the cleaner, surfaced here as aggregate log lines only

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{debug, info, info_span, warn};

use crime_ingest::{find_extracts, find_workbook, read_table};
use crime_merge::merge;
use crime_model::{CrimeRecord, PipelineConfig};
use crime_output::write_dataset;
use crime_transform::{CleanReport, CleanedTable, clean_table};

/// Which of the two source shapes a table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Authoritative,
    Supplementary,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Authoritative => "workbook",
            SourceKind::Supplementary => "extract",
        }
    }
}

/// Row accounting for one cleaned source, for the console summary.
#[derive(Debug)]
pub struct SourceSummary {
    pub source: PathBuf,
    pub kind: SourceKind,
    pub rows_in: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
}

/// Everything the console summary needs about a finished run.
#[derive(Debug)]
pub struct RunSummary {
    pub sources: Vec<SourceSummary>,
    pub extracts_found: usize,
    pub extracts_skipped: usize,
    pub supplementary_excluded: usize,
    pub duplicates_dropped: usize,
    pub final_rows: usize,
    /// Earliest and latest `month_year` in the output, when non-empty.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub output_path: PathBuf,
}

/// Execute one full pipeline run.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let mut sources = Vec::new();

    // ---- ingest: locate and read the inputs --------------------------
    let (workbook_table, extract_paths) = info_span!("ingest").in_scope(|| -> Result<_> {
        let workbook_path = find_workbook(&config.data_dir, &config.workbook_name)?;
        let workbook_table = read_table(&workbook_path)
            .with_context(|| format!("read workbook {}", workbook_path.display()))?;
        let extract_paths = find_extracts(&config.data_dir, &config.extract_prefix)?;
        if extract_paths.is_empty() {
            bail!(
                "no supplementary extracts matching '{}*.csv' in {}",
                config.extract_prefix,
                config.data_dir.display()
            );
        }
        info!(
            workbook = %workbook_path.display(),
            extracts = extract_paths.len(),
            "inputs located"
        );
        Ok((workbook_table, extract_paths))
    })?;

    // ---- clean: per-table normalization ------------------------------
    let clean_span = info_span!("clean");
    let clean_guard = clean_span.enter();

    let authoritative = clean_table(&workbook_table);
    log_clean_report(&authoritative.report);
    sources.push(source_summary(&authoritative, SourceKind::Authoritative));

    let extracts_found = extract_paths.len();
    let mut supplementary: Vec<Vec<CrimeRecord>> = Vec::new();
    let mut extracts_skipped = 0usize;
    for (idx, path) in extract_paths.iter().enumerate() {
        let table = match read_table(path) {
            Ok(table) => table,
            Err(error) => {
                warn!(source = %path.display(), %error, "skipping unreadable extract");
                extracts_skipped += 1;
                continue;
            }
        };
        let cleaned = clean_table(&table);
        log_clean_report(&cleaned.report);
        info!(
            source = %path.display(),
            rows = cleaned.records.len(),
            "processed extract {}/{}",
            idx + 1,
            extracts_found
        );
        sources.push(source_summary(&cleaned, SourceKind::Supplementary));
        supplementary.push(cleaned.records);
    }
    if supplementary.is_empty() {
        bail!("none of the {extracts_found} supplementary extracts loaded successfully");
    }
    drop(clean_guard);

    // ---- merge: overlap exclusion, sort, dedupe ----------------------
    let outcome = info_span!("merge").in_scope(|| {
        let outcome = merge(
            authoritative.records,
            supplementary,
            config.authoritative_start,
        );
        info!(
            cutoff = %config.authoritative_start,
            excluded = outcome.supplementary_excluded,
            "supplementary rows inside the authoritative interval excluded"
        );
        if outcome.duplicates_dropped > 0 {
            warn!(
                dropped = outcome.duplicates_dropped,
                "duplicate rows remained after the interval filter"
            );
        }
        outcome
    });

    // ---- write: the single output artifact ---------------------------
    let output_path = config.data_dir.join(&config.output_name);
    info_span!("write").in_scope(|| -> Result<()> {
        write_dataset(&output_path, &outcome.records)
            .with_context(|| format!("write output {}", output_path.display()))?;
        info!(output = %output_path.display(), rows = outcome.records.len(), "dataset written");
        Ok(())
    })?;

    let date_range = match (outcome.records.first(), outcome.records.last()) {
        (Some(first), Some(last)) => Some((first.month_year, last.month_year)),
        _ => None,
    };

    Ok(RunSummary {
        sources,
        extracts_found,
        extracts_skipped,
        supplementary_excluded: outcome.supplementary_excluded,
        duplicates_dropped: outcome.duplicates_dropped,
        final_rows: outcome.records.len(),
        date_range,
        output_path,
    })
}

fn source_summary(cleaned: &CleanedTable, kind: SourceKind) -> SourceSummary {
    SourceSummary {
        source: cleaned.report.source.clone(),
        kind,
        rows_in: cleaned.report.rows_in,
        rows_kept: cleaned.records.len(),
        rows_dropped: cleaned.report.rows_dropped,
    }
}

fn log_clean_report(report: &CleanReport) {
    if !report.unresolved_fields.is_empty() {
        warn!(
            source = %report.source.display(),
            fields = ?report.unresolved_fields,
            "canonical columns not present in this source"
        );
    }
    if !report.unexpected_measures.is_empty() {
        warn!(
            source = %report.source.display(),
            values = ?report.unexpected_measures,
            "unexpected values in 'measure' (retained)"
        );
    }
    if !report.dropped_columns.is_empty() {
        debug!(
            source = %report.source.display(),
            columns = ?report.dropped_columns,
            "unrecognized columns dropped"
        );
    }
    debug!(
        source = %report.source.display(),
        rows_in = report.rows_in,
        rows_dropped = report.rows_dropped,
        "table cleaned"
    );
}
