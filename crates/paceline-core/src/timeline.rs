//! Timeline flattening and layout.
//!
//! [`flatten`] expands a workout's element tree into the linear, ordered
//! sequence of leaf intervals the timeline draws. [`layout`] then assigns
//! each interval a cumulative start offset and a width in canonical hours,
//! in a single prefix-sum pass.
//!
//! Both functions are pure and borrow the workout tree; calling them twice
//! with the same input yields identical results.

use thiserror::Error;

use crate::{
    duration,
    workout::{Calculation, Element, Interval},
};

/// Failure while computing a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    /// An interval's amount has no usable numeric magnitude.
    ///
    /// Layout refuses to produce partial results: one bad value would
    /// corrupt every later start offset in the prefix sum.
    #[error("interval {}{} has unparsable amount `{}`", .index, title_note(.title), .amount)]
    UnparsableAmount {
        /// Position in the flattened sequence.
        index: usize,
        /// Title of the offending interval, if it has one.
        title: Option<String>,
        /// The amount expression that failed to parse.
        amount: String,
    },
}

fn title_note(title: &Option<String>) -> String {
    match title {
        Some(title) => format!(" (`{title}`)"),
        None => String::new(),
    }
}

/// One positioned, sized interval on the timeline axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    interval: &'a Interval,
    start_offset: f64,
    width: f64,
}

impl<'a> Segment<'a> {
    /// The interval this segment draws.
    pub fn interval(&self) -> &'a Interval {
        self.interval
    }

    /// Cumulative offset from the timeline origin, in canonical hours.
    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    /// Extent along the axis, in canonical hours.
    pub fn width(&self) -> f64 {
        self.width
    }
}

/// The computed timeline: contiguous, non-overlapping segments and the
/// total axis extent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline<'a> {
    segments: Vec<Segment<'a>>,
    total_extent: f64,
}

impl<'a> Timeline<'a> {
    /// The ordered segments.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// The axis domain upper bound: the sum of all segment widths.
    pub fn total_extent(&self) -> f64 {
        self.total_extent
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Summary totals for `@total_distance` / `@total_time` calculations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// Sum of distance amounts, in kilometers.
    pub distance: f64,
    /// Sum of time amounts, in canonical hours.
    pub time: f64,
}

impl Totals {
    /// The total requested by a calculation.
    pub fn get(&self, calculation: Calculation) -> f64 {
        match calculation {
            Calculation::TotalDistance => self.distance,
            Calculation::TotalTime => self.time,
        }
    }
}

/// Expands a workout's elements into the flat ordered interval sequence.
///
/// Intervals are emitted as-is; a repetition emits its body `count` times
/// back-to-back, preserving the body's internal order on every pass. A
/// repetition with `count == 0` contributes nothing. Output intervals are
/// borrowed, never copied, so flattening cannot alter their attributes.
///
/// # Examples
///
/// ```
/// use paceline_core::timeline;
/// use paceline_core::workout::{Element, Interval, Repetition};
///
/// let elements = vec![Element::Repetition(Repetition::new(
///     3,
///     vec![Interval::new("2min", "TZ"), Interval::new("1min", "RZ")],
/// ))];
///
/// let flat = timeline::flatten(&elements);
/// assert_eq!(flat.len(), 6);
/// ```
pub fn flatten(elements: &[Element]) -> Vec<&Interval> {
    let mut flat = Vec::new();
    for element in elements {
        match element {
            Element::Interval(interval) => flat.push(interval),
            Element::Repetition(repetition) => {
                for _ in 0..repetition.count() {
                    flat.extend(repetition.intervals());
                }
            }
        }
    }
    flat
}

/// Computes cumulative offsets and widths for a flattened sequence.
///
/// A single linear pass: each segment's start offset is the running sum of
/// the widths before it, and the total extent is the final cursor value.
///
/// # Errors
///
/// Returns [`TimelineError::UnparsableAmount`] identifying the first
/// interval whose amount cannot be parsed; no partial timeline is
/// produced.
pub fn layout<'a>(intervals: &[&'a Interval]) -> Result<Timeline<'a>, TimelineError> {
    let mut segments = Vec::with_capacity(intervals.len());
    let mut cursor = 0.0;

    for (index, interval) in intervals.iter().enumerate() {
        let width = duration::parse(interval.amount()).map_err(|_| {
            TimelineError::UnparsableAmount {
                index,
                title: interval.title().map(str::to_string),
                amount: interval.amount().to_string(),
            }
        })?;

        segments.push(Segment {
            interval,
            start_offset: cursor,
            width,
        });
        cursor += width;
    }

    Ok(Timeline {
        segments,
        total_extent: cursor,
    })
}

/// Sums distance and time amounts over a flattened sequence.
///
/// Distance amounts (kilometers marker) accumulate into
/// [`Totals::distance`]; everything else accumulates into [`Totals::time`]
/// as canonical hours.
///
/// # Errors
///
/// Returns [`TimelineError::UnparsableAmount`] for the first unusable
/// amount, as [`layout`] does.
pub fn totals(intervals: &[&Interval]) -> Result<Totals, TimelineError> {
    let mut totals = Totals::default();

    for (index, interval) in intervals.iter().enumerate() {
        let value = duration::parse(interval.amount()).map_err(|_| {
            TimelineError::UnparsableAmount {
                index,
                title: interval.title().map(str::to_string),
                amount: interval.amount().to_string(),
            }
        })?;

        if duration::is_distance(interval.amount()) {
            totals.distance += value;
        } else {
            totals.time += value;
        }
    }

    Ok(totals)
}
