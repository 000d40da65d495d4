//! Paceline - workout timeline parsing, layout, and SVG rendering.
//!
//! Parsing, timeline computation, and chart rendering for PaceML workout
//! documents. A workout is parsed (from markup or JSON), flattened into
//! its ordered interval sequence, laid out along a proportional axis in
//! canonical hours, and rendered as an SVG bar timeline.

pub mod config;

mod error;
mod export;

pub use paceline_core::{color, duration, timeline, workout};

pub use error::PacelineError;

use log::{debug, info, trace};

use paceline_core::timeline::Timeline;
use paceline_core::workout::Workout;

use config::AppConfig;
use export::svg::SvgBuilder;

/// Builder for parsing and rendering workout timelines.
///
/// This provides an API for processing workouts through parsing, timeline
/// layout, and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use paceline::{WorkoutBuilder, config::AppConfig};
///
/// let source = "@title{Easy Run}\n@interval[Easy]{40min}{AR}\n";
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = WorkoutBuilder::new(config);
///
/// // Parse source to the workout model
/// let workout = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render the workout to SVG
/// let svg = builder.render_svg(&workout)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = WorkoutBuilder::default();
/// ```
#[derive(Default)]
pub struct WorkoutBuilder {
    config: AppConfig,
}

impl WorkoutBuilder {
    /// Create a new workout builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse PaceML source text into a workout.
    ///
    /// # Errors
    ///
    /// Returns [`PacelineError::Parse`] carrying every diagnostic the
    /// parser collected, together with the source for error reporting.
    pub fn parse(&self, source: &str) -> Result<Workout, PacelineError> {
        info!("Parsing workout");

        let workout = paceline_parser::parse(source)
            .map_err(|err| PacelineError::new_parse_error(err, source))?;

        debug!("Workout parsed successfully");
        trace!(workout:?; "Parsed workout");

        Ok(workout)
    }

    /// Deserialize a workout JSON document.
    ///
    /// The document must match the workout model shape: elements are
    /// tagged with `"type": "interval"` or `"type": "repetition"`.
    ///
    /// # Errors
    ///
    /// Returns [`PacelineError::Json`] when the document does not match
    /// the workout shape.
    pub fn parse_json(&self, source: &str) -> Result<Workout, PacelineError> {
        info!("Reading workout JSON document");

        let workout: Workout = serde_json::from_str(source)?;
        trace!(workout:?; "Deserialized workout");

        Ok(workout)
    }

    /// Compute the timeline for a workout: flatten the element tree and
    /// lay the intervals out along the canonical-hours axis.
    ///
    /// # Errors
    ///
    /// Returns [`PacelineError::Timeline`] when an interval's amount has
    /// no usable numeric magnitude; no partial timeline is produced.
    pub fn timeline<'a>(&self, workout: &'a Workout) -> Result<Timeline<'a>, PacelineError> {
        let flat = timeline::flatten(workout.elements());
        debug!(intervals = flat.len(); "Flattened workout elements");

        let computed = timeline::layout(&flat)?;
        info!(
            segments = computed.segments().len(),
            total_extent = computed.total_extent();
            "Timeline computed"
        );

        Ok(computed)
    }

    /// Render a workout to an SVG string.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use paceline::{WorkoutBuilder, config::AppConfig};
    ///
    /// let source = "@interval[Easy]{40min}{AR}\n";
    /// let builder = WorkoutBuilder::new(AppConfig::default());
    ///
    /// let workout = builder.parse(source)
    ///     .expect("Failed to parse");
    ///
    /// let svg = builder.render_svg(&workout)
    ///     .expect("Failed to render workout");
    ///
    /// println!("{}", svg);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `PacelineError` for timeline or rendering errors.
    pub fn render_svg(&self, workout: &Workout) -> Result<String, PacelineError> {
        let computed = self.timeline(workout)?;

        let exporter = SvgBuilder::new(&self.config);
        let document = exporter.render(workout, &computed)?;

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }

    /// Serialize a workout to its canonical JSON document form.
    ///
    /// # Errors
    ///
    /// Returns [`PacelineError::Json`] on serialization failure.
    pub fn to_json(&self, workout: &Workout) -> Result<String, PacelineError> {
        Ok(serde_json::to_string_pretty(workout)?)
    }
}
