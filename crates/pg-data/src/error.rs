//! Error types for loading reference data.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationIssue;

/// Result type for dataset operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading or checking a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// A data file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A data file is not valid JSON for its schema.
    #[error("{file}: {source}")]
    Json {
        /// Name of the offending file.
        file: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// The dataset parsed but failed validation.
    #[error("dataset has {} error(s); first: {}", .0.len(), first_issue(.0))]
    Invalid(Vec<ValidationIssue>),
}

fn first_issue(issues: &[ValidationIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}
