//! Lexical analyzer for PaceML source text.
//!
//! The lexer converts source text into a stream of statement-level
//! [`Token`]s: `@` directives, comments, and free text notes. Argument
//! groups (`{...}`) and labels (`[...]`) must close on the same line.
//!
//! The public entry point is [`tokenize`], which performs error-recovering
//! lexical analysis: on a malformed statement it records a diagnostic,
//! resynchronizes at the next line, and continues, so a single pass
//! collects every error in the document.
//!
//! An unknown `@` directive is not an error; the whole line lexes as a
//! note, matching the markup's permissive fall-through. A *known*
//! directive with malformed arguments is an error.

use winnow::{
    Parser as _,
    ascii::multispace1,
    combinator::{alt, cut_err, opt, not, peek, preceded, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, one_of, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Rich diagnostic information for lexer errors.
///
/// Attached to winnow errors via `.context()` to provide detailed error
/// messages with codes, help text, and precise span information.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    pub code: ErrorCode,
    pub message: &'static str,
    pub help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    pub start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<'a, O> = ModalResult<O, ContextError<LexerDiagnostic>>;

/// Parse a `{...}` argument group.
///
/// Backtracks when no `{` is present; commits once the group is open, so
/// a missing `}` on the line is an E001 diagnostic.
fn brace_group<'a>(input: &mut Input<'a>, directive_start: usize) -> IResult<'a, &'a str> {
    '{'.parse_next(input)?;

    cut_err(terminated(
        take_while(0.., |c: char| c != '}' && c != '\n'),
        '}',
    ))
    .context(LexerDiagnostic {
        code: ErrorCode::E001,
        message: "unterminated `{...}` argument",
        help: Some("add closing `}` before the end of the line"),
        start: directive_start,
    })
    .parse_next(input)
}

/// Parse a `[...]` label group, committing once `[` is seen.
fn bracket_group<'a>(input: &mut Input<'a>, directive_start: usize) -> IResult<'a, &'a str> {
    '['.parse_next(input)?;

    cut_err(terminated(
        take_while(0.., |c: char| c != ']' && c != '\n'),
        ']',
    ))
    .context(LexerDiagnostic {
        code: ErrorCode::E003,
        message: "unterminated `[...]` label",
        help: Some("add closing `]` before the end of the line"),
        start: directive_start,
    })
    .parse_next(input)
}

/// Parse a required `{...}` argument; its absence is an E002 diagnostic.
fn required_brace<'a>(input: &mut Input<'a>, directive_start: usize) -> IResult<'a, &'a str> {
    cut_err(|input: &mut Input<'a>| brace_group(input, directive_start))
        .context(LexerDiagnostic {
            code: ErrorCode::E002,
            message: "missing `{...}` argument",
            help: Some("directive arguments are written `{...}`, immediately after the directive"),
            start: directive_start,
        })
        .parse_next(input)
}

/// Parse a required `[...]` name; its absence is an E002 diagnostic.
fn required_bracket<'a>(input: &mut Input<'a>, directive_start: usize) -> IResult<'a, &'a str> {
    cut_err(|input: &mut Input<'a>| bracket_group(input, directive_start))
        .context(LexerDiagnostic {
            code: ErrorCode::E002,
            message: "missing `[...]` name",
            help: Some("zone definitions are written `@define_zone[NAME]{start}{end}{description}`"),
            start: directive_start,
        })
        .parse_next(input)
}

/// Parse an optional `{...}` argument group.
fn opt_brace<'a>(input: &mut Input<'a>, directive_start: usize) -> IResult<'a, Option<&'a str>> {
    opt(|input: &mut Input<'a>| brace_group(input, directive_start)).parse_next(input)
}

/// Parse an optional `[...]` label group.
fn opt_bracket<'a>(input: &mut Input<'a>, directive_start: usize) -> IResult<'a, Option<&'a str>> {
    opt(|input: &mut Input<'a>| bracket_group(input, directive_start)).parse_next(input)
}

/// Parse a `@` directive statement.
///
/// An unrecognized directive name backtracks, so the line falls through
/// to [`note_line`]. After a recognized name the parser is committed:
/// malformed arguments surface as diagnostics instead of notes.
fn directive<'a>(input: &mut Input<'a>) -> IResult<'a, Token<'a>> {
    let start = input.current_token_start();

    '@'.parse_next(input)?;

    let keyword = terminated(
        alt((
            literal("title"),
            literal("date"),
            literal("athlete"),
            literal("define_zone"),
            literal("interval"),
            literal("reps"),
            literal("total_distance"),
            literal("total_time"),
        )),
        // Word boundary: `@titles` is not `@title`
        peek(not(one_of(|c: char| c.is_ascii_alphanumeric() || c == '_'))),
    )
    .parse_next(input)?;

    match keyword {
        "title" => Ok(Token::Title(required_brace(input, start)?)),
        "date" => Ok(Token::Date(required_brace(input, start)?)),
        "athlete" => Ok(Token::Athlete(required_brace(input, start)?)),
        "define_zone" => {
            let name = required_bracket(input, start)?;
            let zone_start = required_brace(input, start)?;
            let zone_end = required_brace(input, start)?;
            let description = opt_brace(input, start)?;
            Ok(Token::ZoneDef {
                name,
                start: zone_start,
                end: zone_end,
                description,
            })
        }
        "interval" => {
            let title = opt_bracket(input, start)?;
            let amount = required_brace(input, start)?;
            let zone = required_brace(input, start)?;
            // A trailing `{key=value,...}` parameter group is accepted
            // and discarded; nothing downstream reads it.
            let _params = opt_brace(input, start)?;
            Ok(Token::Interval {
                title,
                amount,
                zone,
            })
        }
        "reps" => {
            let title = opt_bracket(input, start)?;
            let count = required_brace(input, start)?;
            Ok(Token::Reps { title, count })
        }
        "total_distance" => Ok(Token::TotalDistance),
        "total_time" => Ok(Token::TotalTime),
        _ => unreachable!("keyword alternation is exhaustive"),
    }
}

/// Parse a line comment starting with `#`.
fn line_comment<'a>(input: &mut Input<'a>) -> IResult<'a, Token<'a>> {
    preceded('#', take_while(0.., |c: char| c != '\n'))
        .map(Token::Comment)
        .parse_next(input)
}

/// Parse a free text note: the rest of the line.
fn note_line<'a>(input: &mut Input<'a>) -> IResult<'a, Token<'a>> {
    take_while(1.., |c: char| c != '\n')
        .map(|line: &str| Token::Note(line.trim_end()))
        .parse_next(input)
}

/// Parse one statement with position tracking.
///
/// Returns `None` for inter-statement whitespace.
fn statement<'a>(input: &mut Input<'a>) -> IResult<'a, Option<PositionedToken<'a>>> {
    let start = input.current_token_start();

    let token = alt((
        multispace1.map(|_: &str| None),
        line_comment.map(Some),
        directive.map(Some),
        note_line.map(Some),
    ))
    .parse_next(input)?;

    let end = input.current_token_start();
    Ok(token.map(|token| PositionedToken::new(token, Span::new(start..end))))
}

/// Lexer that accumulates tokens and diagnostics during tokenization.
struct Lexer<'a> {
    tokens: Vec<PositionedToken<'a>>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Tokenize the input, collecting tokens and errors.
    fn tokenize(&mut self, mut input: Input<'a>) {
        while !input.is_empty() {
            match statement(&mut input) {
                Ok(Some(token)) => self.tokens.push(token),
                Ok(None) => {}
                Err(e) => {
                    // Get position before recovery
                    let error_pos = input.current_token_start();

                    let diagnostic = Self::convert_err_mode(e, error_pos);
                    self.diagnostics.emit(diagnostic);

                    // Resynchronize at the start of the next line so one
                    // malformed statement reports exactly one diagnostic
                    while let Some(c) = input.next_token() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Finish lexing and return tokens or collected errors.
    fn finish(self) -> Result<Vec<PositionedToken<'a>>, ParseError> {
        self.diagnostics.finish().map(|()| self.tokens)
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Extracts `LexerDiagnostic` from the error context for rich error
    /// info with code, message, and help. Falls back to a generic
    /// diagnostic if no context is found.
    fn convert_err_mode(
        err: ErrMode<ContextError<LexerDiagnostic>>,
        error_pos: usize,
    ) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        // Use the first diagnostic context if available
        if let Some(LexerDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let span = Span::new(*start..error_pos);

            let mut diag = Diagnostic::error(*message)
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        // Fallback when no context is present
        let span = Span::new(error_pos..error_pos.saturating_add(1));
        Diagnostic::error("unexpected input").with_label(span, "unexpected input")
    }
}

/// Parse tokens from a string input, collecting multiple errors.
///
/// Attempts to recover from errors and continue tokenizing, collecting
/// all errors encountered. This provides better user experience by
/// reporting multiple issues in a single pass.
///
/// # Returns
///
/// - `Ok(tokens)` - All tokens successfully parsed
/// - `Err(ParseError)` - One or more errors occurred; contains all diagnostics
pub(crate) fn tokenize(input: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let located_input = LocatingSlice::new(input);
    let mut lexer = Lexer::new();
    lexer.tokenize(located_input);
    lexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_token(input: &str) -> PositionedToken<'_> {
        let tokens = tokenize(input).expect("input should tokenize");
        assert_eq!(tokens.len(), 1, "expected one token for {input:?}");
        tokens[0]
    }

    #[test]
    fn test_metadata_directives() {
        assert_eq!(single_token("@title{Hill Repeats}").token, Token::Title("Hill Repeats"));
        assert_eq!(single_token("@date{2024-05-12}").token, Token::Date("2024-05-12"));
        assert_eq!(single_token("@athlete{Jane Doe}").token, Token::Athlete("Jane Doe"));
    }

    #[test]
    fn test_zone_definition() {
        let token = single_token("@define_zone[AR]{5:30}{6:00}{Aerobic running}").token;
        assert_eq!(
            token,
            Token::ZoneDef {
                name: "AR",
                start: "5:30",
                end: "6:00",
                description: Some("Aerobic running"),
            }
        );
    }

    #[test]
    fn test_zone_definition_description_optional() {
        let token = single_token("@define_zone[TZ]{4:10}{4:30}").token;
        assert_eq!(
            token,
            Token::ZoneDef {
                name: "TZ",
                start: "4:10",
                end: "4:30",
                description: None,
            }
        );
    }

    #[test]
    fn test_interval_with_title() {
        let token = single_token("@interval[Warmup]{15min}{AR}").token;
        assert_eq!(
            token,
            Token::Interval {
                title: Some("Warmup"),
                amount: "15min",
                zone: "AR",
            }
        );
    }

    #[test]
    fn test_interval_without_title() {
        let token = single_token("@interval{5km}{TZ}").token;
        assert_eq!(
            token,
            Token::Interval {
                title: None,
                amount: "5km",
                zone: "TZ",
            }
        );
    }

    #[test]
    fn test_interval_parameter_group_is_discarded() {
        let token = single_token("@interval[Climb]{90s}{TZ}{pace=4:30,grade=6%}").token;
        assert_eq!(
            token,
            Token::Interval {
                title: Some("Climb"),
                amount: "90s",
                zone: "TZ",
            }
        );
    }

    #[test]
    fn test_reps() {
        let token = single_token("@reps[Hills]{6}").token;
        assert_eq!(
            token,
            Token::Reps {
                title: Some("Hills"),
                count: "6",
            }
        );
    }

    #[test]
    fn test_calculations() {
        assert_eq!(single_token("@total_distance").token, Token::TotalDistance);
        assert_eq!(single_token("@total_time").token, Token::TotalTime);
    }

    #[test]
    fn test_comment() {
        let token = single_token("# Tuesday session").token;
        assert_eq!(token, Token::Comment(" Tuesday session"));
    }

    #[test]
    fn test_note_line() {
        let token = single_token("Stay relaxed on the descents.  ").token;
        assert_eq!(token, Token::Note("Stay relaxed on the descents."));
    }

    #[test]
    fn test_unknown_directive_is_a_note() {
        let token = single_token("@stretch{10min}").token;
        assert_eq!(token, Token::Note("@stretch{10min}"));
    }

    #[test]
    fn test_keyword_boundary() {
        // `@titles` is not `@title`
        let token = single_token("@titles{x}").token;
        assert_eq!(token, Token::Note("@titles{x}"));
    }

    #[test]
    fn test_spans() {
        let source = "@title{Run}\n@interval{5km}{AR}\n";
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].span, Span::new(0..11));
        assert_eq!(tokens[1].span, Span::new(12..30));
    }

    #[test]
    fn test_unterminated_argument_is_e001() {
        let err = tokenize("@title{Run").unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
    }

    #[test]
    fn test_missing_argument_is_e002() {
        let err = tokenize("@interval[Warmup]").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E002));
    }

    #[test]
    fn test_unterminated_label_is_e003() {
        let err = tokenize("@reps[Hills{6}").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E003));
    }

    #[test]
    fn test_recovery_collects_every_error() {
        let source = "@title{Run\n@interval[Warmup]\n@athlete{Jane}\n";
        let err = tokenize(source).unwrap_err();

        let codes: Vec<_> = err.diagnostics().iter().filter_map(|d| d.code()).collect();
        assert_eq!(codes, [ErrorCode::E001, ErrorCode::E002]);
    }

    #[test]
    fn test_statement_after_directive_on_same_line() {
        let tokens = tokenize("@interval{5km}{AR} push hard\n").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].token, Token::Note("push hard"));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("\n  \n").unwrap().is_empty());
    }
}
