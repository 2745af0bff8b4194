//! Source ingestion.
//!
//! The data source is a record-oriented JSON file: an array of objects
//! with at least the `Gender`, `HeightCm`, and `WeightKg` fields.
//! Ingestion is deliberately tolerant of field contents (every field
//! comes back as an untyped value for the sanitizer to judge) but
//! strict about the container: an unreadable file or a malformed array
//! fails construction outright.

use std::fs;
use std::path::Path;

use bmi_model::RawRecord;

use crate::error::{ClassifierError, Result};

/// Read all raw records from a JSON source file.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let text = fs::read_to_string(path).map_err(|source| ClassifierError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<RawRecord> =
        serde_json::from_str(&text).map_err(|source| ClassifierError::SourceParse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        count = records.len(),
        path = %path.display(),
        "Read raw records from source"
    );
    Ok(records)
}
