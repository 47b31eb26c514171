//! # Error Types
//!
//! This module defines error types used throughout the cebra library.
//!
//! The [`Label`](crate::label::Label) builder itself is infallible: every
//! operation accepts its inputs as-is and appends command text. Errors only
//! arise at the edges, when parsing JSON label scripts or writing rendered
//! output to a file.

use thiserror::Error;

/// Main error type for cebra operations
#[derive(Debug, Error)]
pub enum CebraError {
    /// Label script parsing error
    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
