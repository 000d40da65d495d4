//! Error types for Paceline operations.
//!
//! This module provides the main error type [`PacelineError`] which wraps
//! the error conditions that can occur while processing a workout.

use std::io;

use thiserror::Error;

use paceline_core::timeline::TimelineError;
use paceline_parser::error::ParseError;

/// The main error type for Paceline operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries structured diagnostics with source code
/// spans, which callers can use for rich error reporting.
#[derive(Debug, Error)]
pub enum PacelineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("timeline error: {0}")]
    Timeline(#[from] TimelineError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for PacelineError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl PacelineError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
