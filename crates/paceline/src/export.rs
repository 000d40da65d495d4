//! Export adapters for computed timelines.
//!
//! The adapter consumes only segment offsets/widths and interval
//! attributes; all drawing decisions live here, swappable without
//! touching the core computation.

pub mod svg;

use thiserror::Error;

/// Errors raised while exporting a chart.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured color string could not be parsed.
    #[error("invalid color for {what}: {reason}")]
    InvalidColor { what: String, reason: String },
}
