//! Error types for quiz-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while loading a question file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no questions found in the file; check the file format and prefixes")]
    EmptyResult,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parser configuration: {0}")]
    InvalidConfig(String),
}
