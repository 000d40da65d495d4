//! Statement tokens for PaceML source.
//!
//! PaceML is line-oriented, so the lexer emits one token per statement
//! rather than per character. Argument text is borrowed from the source;
//! interpretation (count parsing, repetition grouping) happens in the
//! parser.

use crate::span::Span;

/// A single PaceML statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// `@title{...}`
    Title(&'src str),
    /// `@date{...}`
    Date(&'src str),
    /// `@athlete{...}`
    Athlete(&'src str),
    /// `@define_zone[NAME]{start}{end}{description}`
    ZoneDef {
        name: &'src str,
        start: &'src str,
        end: &'src str,
        description: Option<&'src str>,
    },
    /// `@interval[title]{amount}{zone}`
    Interval {
        title: Option<&'src str>,
        amount: &'src str,
        zone: &'src str,
    },
    /// `@reps[title]{count}`
    ///
    /// The count is kept as source text; the parser reports a diagnostic
    /// for non-integer values.
    Reps {
        title: Option<&'src str>,
        count: &'src str,
    },
    /// `@total_distance`
    TotalDistance,
    /// `@total_time`
    TotalTime,
    /// A free text line.
    Note(&'src str),
    /// A `#` comment line.
    Comment(&'src str),
}

/// A token with its source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedToken<'src> {
    /// The statement.
    pub token: Token<'src>,
    /// Byte span of the statement in the source.
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    /// Create a positioned token.
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}
