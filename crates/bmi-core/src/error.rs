//! Error types for classifier construction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a classifier from a source.
///
/// Data-quality problems never surface here: dirty rows are filtered
/// during sanitization. Only failures that prevent the source from
/// being read at all are fatal.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Failed to read the source file.
    #[error("failed to read source {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is not a well-formed JSON array of records.
    #[error("failed to parse source {path}: {source}")]
    SourceParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for classifier construction.
pub type Result<T> = std::result::Result<T, ClassifierError>;
