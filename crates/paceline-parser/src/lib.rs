//! # Paceline Parser
//!
//! Parser for the PaceML workout markup language. This crate provides the
//! parsing pipeline from source text to the workout model.
//!
//! PaceML is line-oriented: each statement is a `@` directive or a free
//! text note, and `#` starts a comment.
//!
//! ```text
//! # Tuesday session
//! @title{Hill Repeats}
//! @athlete{Jane Doe}
//! @define_zone[TZ]{4:10}{4:30}{Threshold}
//! @interval[Warmup]{15min}{AR}
//! @reps[Hills]{6}
//! @interval[Climb]{90s}{TZ}
//! @interval[Jog down]{2min}{AR}
//! @total_time
//! ```
//!
//! ## Usage
//!
//! ```
//! # use paceline_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "@title{Easy Run}\n@interval[Easy]{40min}{AR}\n";
//!     let workout = parse(source)?;
//!     assert_eq!(workout.elements().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod lexer;
mod parser;
mod span;
mod tokens;

pub use span::Span;

use paceline_core::workout::Workout;

use error::ParseError;

/// Parse PaceML source text into a [`Workout`].
///
/// This is the main entry point for parsing workout markup. It
/// orchestrates the two parsing stages:
///
/// 1. **Tokenize** - Convert source text to spanned statement tokens
/// 2. **Build** - Assemble the workout tree, grouping repetition bodies
///
/// Both stages are error-recovering: all diagnostics from a pass are
/// collected and reported together.
///
/// # Errors
///
/// Returns a [`ParseError`] wrapping one or more [`error::Diagnostic`]s
/// with source spans on failure. Warnings alone never fail the parse.
pub fn parse(source: &str) -> Result<Workout, ParseError> {
    // Stage 1: Tokenize
    let tokens = lexer::tokenize(source)?;

    // Stage 2: Build the workout tree
    parser::build_workout(&tokens)
}
