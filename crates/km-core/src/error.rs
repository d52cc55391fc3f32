//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enum via a
//! `#[from]` conversion.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `km-core`.
pub type CoreResult<T> = Result<T, CoreError>;
