use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool loads its inputs, assembles the documents, or writes them out.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Raised when an input file is missing or cannot be opened.
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a row does not match the expected column shape or content.
    #[error("malformed record in {source_name} at row {row}: {reason}")]
    MalformedRecord {
        source_name: String,
        row: u64,
        reason: String,
    },

    /// Raised when the semester configuration cannot be parsed or validated.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Raised when a rendered document cannot be written to its destination.
    #[error("cannot write {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl ToolError {
    pub(crate) fn malformed(source_name: &str, row: u64, reason: impl Into<String>) -> Self {
        ToolError::MalformedRecord {
            source_name: source_name.to_string(),
            row,
            reason: reason.into(),
        }
    }
}
