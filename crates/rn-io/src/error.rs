//! Error types for rn-io.

use thiserror::Error;

/// Errors that can occur when writing or reading roadnet files.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("adjacency file is empty (expected a `V E` header)")]
    MissingHeader,

    #[error("line {line}: {reason}: {content:?}")]
    Syntax {
        /// 1-based line number.
        line:    usize,
        reason:  &'static str,
        content: String,
    },
}

/// Alias for `Result<T, FormatError>`.
pub type FormatResult<T> = Result<T, FormatError>;
