//! Workout builder for PaceML statement tokens.
//!
//! This module assembles the token stream from the
//! [`lexer`](super::lexer) into a [`Workout`]. Metadata statements fill
//! the metadata record (last one wins), zone definitions are checked for
//! duplicates, and a `@reps` statement captures the run of `@interval`
//! statements that immediately follows it as its body.

use log::warn;

use paceline_core::workout::{
    Calculation, Element, Interval, Metadata, Repetition, Workout, ZoneDefinition,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Build a workout from tokens.
///
/// Collects every diagnostic before failing; warnings alone do not fail
/// the build.
pub(crate) fn build_workout(tokens: &[PositionedToken<'_>]) -> Result<Workout, ParseError> {
    let mut collector = DiagnosticCollector::new();

    let mut metadata = Metadata::default();
    let mut zones: Vec<(ZoneDefinition, Span)> = Vec::new();
    let mut elements: Vec<Element> = Vec::new();
    let mut calculations: Vec<Calculation> = Vec::new();
    let mut notes: Vec<String> = Vec::new();

    let mut index = 0;
    while index < tokens.len() {
        let positioned = tokens[index];
        index += 1;

        match positioned.token {
            Token::Title(value) => metadata.title = Some(value.to_string()),
            Token::Date(value) => metadata.date = Some(value.to_string()),
            Token::Athlete(value) => metadata.athlete = Some(value.to_string()),
            Token::ZoneDef {
                name,
                start,
                end,
                description,
            } => {
                if let Some((_, first_span)) =
                    zones.iter().find(|(zone, _)| zone.name() == name)
                {
                    collector.emit(
                        Diagnostic::error(format!("zone `{name}` is defined multiple times"))
                            .with_code(ErrorCode::E200)
                            .with_label(positioned.span, "duplicate definition")
                            .with_secondary_label(*first_span, "first defined here")
                            .with_help("remove the duplicate or use a different zone name"),
                    );
                } else {
                    let mut zone = ZoneDefinition::new(name, start, end);
                    if let Some(description) = description {
                        zone = zone.with_description(description);
                    }
                    zones.push((zone, positioned.span));
                }
            }
            Token::Interval { .. } => {
                elements.push(Element::Interval(make_interval(&positioned.token)));
            }
            Token::Reps { title, count } => {
                let count = parse_count(count, positioned.span, &mut collector);

                // The body is the run of interval statements that follows.
                // Comments do not break the run; anything else ends it.
                let mut body = Vec::new();
                while index < tokens.len() {
                    match &tokens[index].token {
                        Token::Comment(_) => index += 1,
                        Token::Interval { .. } => {
                            body.push(make_interval(&tokens[index].token));
                            index += 1;
                        }
                        _ => break,
                    }
                }

                if body.is_empty() {
                    collector.emit(
                        Diagnostic::warning("repetition has no intervals")
                            .with_code(ErrorCode::E101)
                            .with_label(positioned.span, "this block repeats nothing")
                            .with_help("add `@interval` statements after the `@reps` line"),
                    );
                }

                let mut repetition = Repetition::new(count, body);
                if let Some(title) = title {
                    repetition = repetition.with_title(title);
                }
                elements.push(Element::Repetition(repetition));
            }
            Token::TotalDistance => calculations.push(Calculation::TotalDistance),
            Token::TotalTime => calculations.push(Calculation::TotalTime),
            Token::Note(text) => {
                if text.starts_with('@') {
                    warn!(line = text; "Unrecognized directive kept as a note");
                }
                notes.push(text.to_string());
            }
            Token::Comment(_) => {}
        }
    }

    collector.finish()?;

    Ok(Workout::new(metadata, elements)
        .with_zones(zones.into_iter().map(|(zone, _)| zone).collect())
        .with_calculations(calculations)
        .with_notes(notes))
}

fn make_interval(token: &Token<'_>) -> Interval {
    let Token::Interval {
        title,
        amount,
        zone,
    } = token
    else {
        unreachable!("caller matched an interval token");
    };

    let mut interval = Interval::new(*amount, *zone);
    if let Some(title) = title {
        interval = interval.with_title(*title);
    }
    interval
}

fn parse_count(count: &str, span: Span, collector: &mut DiagnosticCollector) -> u32 {
    match count.trim().parse::<u32>() {
        Ok(count) => count,
        Err(_) => {
            collector.emit(
                Diagnostic::error(format!("invalid repetition count `{count}`"))
                    .with_code(ErrorCode::E100)
                    .with_label(span, ErrorCode::E100.description())
                    .with_help("the count must be a non-negative integer, e.g. `@reps{6}`"),
            );
            0
        }
    }
}
