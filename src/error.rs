/// Error types for run-up analysis.
///
/// Per-record failures (`InvalidArgument`, `MalformedRecord`) are collected
/// alongside valid results by the batch layer; the remaining variants are
/// whole-operation failures surfaced to the binaries.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, RunupError>;

#[derive(Error, Debug)]
pub enum RunupError {
    /// A numeric precondition was violated, or a required column is missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A row failed type conversion.
    #[error("malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    /// Not enough usable values to compute a statistic, fit or correlation.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration parsed but holds values the analysis cannot use.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl RunupError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        RunupError::InvalidArgument(message.into())
    }

    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        RunupError::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RunupError::Io {
            path: path.into(),
            source,
        }
    }
}
