//! Error types for ingest operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading a division dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Underlying file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited input (unbalanced quoting, bad encoding).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The source yielded no usable records.
    #[error("no division records in {path}")]
    Empty { path: PathBuf },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
