//! Locating the input files on disk.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Locate the authoritative workbook by exact filename.
pub fn find_workbook(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(IngestError::WorkbookNotFound { path })
    }
}

/// List the supplementary CSV extracts: files whose name starts with
/// `prefix` (case-insensitively) and carries a `.csv` extension.
///
/// Returns paths sorted by filename so runs are deterministic regardless
/// of directory iteration order. An empty result is not an error here;
/// the pipeline treats it as fatal.
pub fn find_extracts(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            continue;
        }
        let matches_prefix = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| starts_with_ignore_case(name, prefix))
            .unwrap_or(false);
        if matches_prefix {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
