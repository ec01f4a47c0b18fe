//! Error types for source discovery and table reading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating or reading input tables.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Data directory not found or not a directory.
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The authoritative workbook is missing.
    #[error("workbook not found: {path}")]
    WorkbookNotFound { path: PathBuf },

    /// The workbook could not be opened or contains no sheets.
    #[error("failed to read workbook {path}: {message}")]
    WorkbookRead { path: PathBuf, message: String },

    /// A CSV extract could not be parsed.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
