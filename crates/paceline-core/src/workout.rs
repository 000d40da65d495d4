//! The workout model.
//!
//! A [`Workout`] is the root aggregate produced by the parser (or
//! deserialized from a workout JSON document): metadata, zone definitions,
//! an ordered sequence of [`Element`]s, requested calculations, and free
//! text notes.
//!
//! [`Interval`] and [`Repetition`] are immutable once constructed. The
//! timeline computation in [`timeline`](crate::timeline) only ever borrows
//! them; expanding a repetition never clones or mutates its body.

use serde::{Deserialize, Serialize};

/// Workout metadata, opaque to the timeline computation.
///
/// Carried through to the rendering layer for the chart header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Workout title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Date of the session, as written in the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Athlete name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete: Option<String>,
}

/// A named training zone declared with `@define_zone`.
///
/// The pace bounds and description are opaque strings; zones only matter
/// to the renderer's color selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDefinition {
    name: String,
    start: String,
    end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl ZoneDefinition {
    /// Creates a zone definition with the given name and pace bounds.
    pub fn new(
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
            description: None,
        }
    }

    /// Attaches a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The zone code, e.g. `AR` or `TZ`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower pace bound, as written in the source.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Upper pace bound, as written in the source.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Optional human-readable description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A leaf workout step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    amount: String,
    #[serde(default)]
    zone: String,
}

impl Interval {
    /// Creates an interval from a duration expression and a zone code.
    ///
    /// # Examples
    ///
    /// ```
    /// use paceline_core::workout::Interval;
    ///
    /// let warmup = Interval::new("10min", "AR").with_title("Warmup");
    /// assert_eq!(warmup.amount(), "10min");
    /// assert_eq!(warmup.zone(), "AR");
    /// ```
    pub fn new(amount: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            title: None,
            amount: amount.into(),
            zone: zone.into(),
        }
    }

    /// Attaches a title label.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The title label, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The duration expression, e.g. `5km`, `30min`, `45s`.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// The training zone code. May be empty or unknown; that is a
    /// rendering concern, never a layout failure.
    pub fn zone(&self) -> &str {
        &self.zone
    }
}

/// A repeated group of intervals.
///
/// The body is a sequence of leaf intervals only. Nesting a repetition
/// inside a repetition is unrepresentable by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repetition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    count: u32,
    intervals: Vec<Interval>,
}

impl Repetition {
    /// Creates a repetition of `intervals`, repeated `count` times.
    ///
    /// A count of zero is allowed and flattens to nothing.
    pub fn new(count: u32, intervals: Vec<Interval>) -> Self {
        Self {
            title: None,
            count,
            intervals,
        }
    }

    /// Attaches a title label.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The title label, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// How many times the body repeats.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The repeated body, in order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
}

/// A workout element: either a single interval or a repeated group.
///
/// Serialized with an internal `type` tag, matching the workout JSON
/// document shape:
///
/// ```json
/// { "type": "interval", "title": "Warmup", "amount": "10min", "zone": "AR" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// A leaf interval.
    Interval(Interval),
    /// A repeated group of intervals.
    Repetition(Repetition),
}

/// A summary requested in the source with `@total_distance` or
/// `@total_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calculation {
    /// Sum of all distance amounts, in kilometers.
    TotalDistance,
    /// Sum of all time amounts, in hours.
    TotalTime,
}

/// The root workout aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default)]
    metadata: Metadata,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    zones: Vec<ZoneDefinition>,
    #[serde(default)]
    elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    calculations: Vec<Calculation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
}

impl Workout {
    /// Creates a workout from metadata and elements, with no zones,
    /// calculations, or notes.
    pub fn new(metadata: Metadata, elements: Vec<Element>) -> Self {
        Self {
            metadata,
            elements,
            ..Self::default()
        }
    }

    /// Replaces the zone definitions.
    pub fn with_zones(mut self, zones: Vec<ZoneDefinition>) -> Self {
        self.zones = zones;
        self
    }

    /// Replaces the requested calculations.
    pub fn with_calculations(mut self, calculations: Vec<Calculation>) -> Self {
        self.calculations = calculations;
        self
    }

    /// Replaces the notes.
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Workout metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Declared training zones, in declaration order.
    pub fn zones(&self) -> &[ZoneDefinition] {
        &self.zones
    }

    /// The ordered element sequence.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Requested summary calculations.
    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }

    /// Free-text notes, in source order.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_accessors() {
        let interval = Interval::new("2min", "TZ").with_title("Push");

        assert_eq!(interval.title(), Some("Push"));
        assert_eq!(interval.amount(), "2min");
        assert_eq!(interval.zone(), "TZ");
    }

    #[test]
    fn test_interval_title_optional() {
        let interval = Interval::new("45s", "MZ");
        assert_eq!(interval.title(), None);
    }

    #[test]
    fn test_element_json_round_trip() {
        let element = Element::Interval(Interval::new("10min", "AR").with_title("Warmup"));

        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"type\":\"interval\""));

        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn test_element_json_tagged_repetition() {
        let json = r#"{
            "type": "repetition",
            "count": 2,
            "intervals": [
                { "title": "Push", "amount": "2min", "zone": "TZ" },
                { "title": "Rest", "amount": "1min", "zone": "RZ" }
            ]
        }"#;

        let element: Element = serde_json::from_str(json).unwrap();
        match element {
            Element::Repetition(repetition) => {
                assert_eq!(repetition.count(), 2);
                assert_eq!(repetition.intervals().len(), 2);
                assert_eq!(repetition.intervals()[0].title(), Some("Push"));
            }
            Element::Interval(_) => panic!("expected repetition"),
        }
    }

    #[test]
    fn test_interval_missing_zone_defaults_to_empty() {
        let json = r#"{ "type": "interval", "amount": "5km" }"#;
        let element: Element = serde_json::from_str(json).unwrap();

        match element {
            Element::Interval(interval) => assert_eq!(interval.zone(), ""),
            Element::Repetition(_) => panic!("expected interval"),
        }
    }

    #[test]
    fn test_negative_count_is_a_shape_error() {
        let json = r#"{ "type": "repetition", "count": -1, "intervals": [] }"#;
        let result: Result<Element, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_workout_builders() {
        let workout = Workout::new(
            Metadata {
                title: Some("Hill Repeats".to_string()),
                ..Metadata::default()
            },
            vec![Element::Interval(Interval::new("15min", "AR"))],
        )
        .with_zones(vec![ZoneDefinition::new("AR", "5:30", "6:00")])
        .with_calculations(vec![Calculation::TotalTime])
        .with_notes(vec!["Stay relaxed.".to_string()]);

        assert_eq!(workout.metadata().title.as_deref(), Some("Hill Repeats"));
        assert_eq!(workout.zones().len(), 1);
        assert_eq!(workout.elements().len(), 1);
        assert_eq!(workout.calculations(), [Calculation::TotalTime]);
        assert_eq!(workout.notes(), ["Stay relaxed.".to_string()]);
    }
}
