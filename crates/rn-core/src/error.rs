//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they parse user input through `rn-core` types.

use thiserror::Error;

/// Errors produced by `rn-core` parsing and validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown network type {0:?} (expected drive, drive_service, walk, bike or all)")]
    UnknownNetworkType(String),

    #[error("invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
