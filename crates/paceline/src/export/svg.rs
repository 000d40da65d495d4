//! SVG rendering for workout timelines.
//!
//! One rect per flattened interval: x and width come from the computed
//! segment offsets, each interval gets its own horizontal band, and the
//! bottom axis shows the canonical-hours domain.

mod palette;
mod scale;

use log::debug;
use svg::{Document, node::element as svg_element};

use paceline_core::{
    timeline::Timeline,
    workout::{Interval, Metadata, Workout},
};

use crate::{config::AppConfig, export::Error};

use palette::Palette;
use scale::{BandScale, LinearScale, format_tick, tick_step, ticks};

const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;
const MARGIN_LEFT: f64 = 50.0;

const BAND_PADDING: f64 = 0.1;
const LABEL_OFFSET: f64 = 5.0;
const AXIS_TICK_COUNT: usize = 6;
const AXIS_TICK_SIZE: f64 = 6.0;
const FONT_FAMILY: &str = "sans-serif";

/// Renders a computed [`Timeline`] to an SVG [`Document`].
pub struct SvgBuilder<'a> {
    config: &'a AppConfig,
}

impl<'a> SvgBuilder<'a> {
    /// Creates a builder over the given configuration.
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Renders the workout chart.
    ///
    /// An empty timeline (or one with zero total extent) renders the
    /// chart frame with nothing to draw; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] when a configured color cannot be
    /// parsed.
    pub fn render(
        &self,
        workout: &Workout,
        timeline: &Timeline<'_>,
    ) -> Result<Document, Error> {
        let width = self.config.chart().width();
        let height = self.config.chart().height();

        let mut document = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(background) =
            self.config
                .style()
                .background_color()
                .map_err(|reason| Error::InvalidColor {
                    what: "background".to_string(),
                    reason,
                })?
        {
            document = document.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", &background),
            );
        }

        document = add_header(document, workout.metadata(), width);

        if !timeline.is_empty() && timeline.total_extent() > 0.0 {
            let palette = Palette::from_overrides(self.config.style().zone_colors())?;
            document = add_bars(document, timeline, &palette, width, height);
        } else {
            debug!("Empty timeline, nothing to draw");
        }

        Ok(add_axis(document, timeline.total_extent(), width, height))
    }
}

/// Builds the `Title (amount - zone)` label shown beside each bar.
fn label_text(interval: &Interval) -> String {
    match interval.title() {
        Some(title) => format!("{title} ({} - {})", interval.amount(), interval.zone()),
        None => format!("{} - {}", interval.amount(), interval.zone()),
    }
}

fn add_header(mut document: Document, metadata: &Metadata, width: f64) -> Document {
    if let Some(title) = metadata.title.as_deref() {
        document = document.add(
            svg_element::Text::new(title)
                .set("x", MARGIN_LEFT)
                .set("y", 14)
                .set("font-family", FONT_FAMILY)
                .set("font-size", 12)
                .set("font-weight", "bold")
                .set("class", "workout-title"),
        );
    }

    let info = match (metadata.date.as_deref(), metadata.athlete.as_deref()) {
        (Some(date), Some(athlete)) => Some(format!("{date} - {athlete}")),
        (Some(date), None) => Some(date.to_string()),
        (None, Some(athlete)) => Some(athlete.to_string()),
        (None, None) => None,
    };
    if let Some(info) = info {
        document = document.add(
            svg_element::Text::new(info)
                .set("x", width - MARGIN_RIGHT)
                .set("y", 14)
                .set("text-anchor", "end")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 11)
                .set("fill", "#555555")
                .set("class", "workout-info"),
        );
    }

    document
}

fn add_bars(
    mut document: Document,
    timeline: &Timeline<'_>,
    palette: &Palette,
    width: f64,
    height: f64,
) -> Document {
    let band = BandScale::new(
        MARGIN_TOP,
        height - MARGIN_BOTTOM,
        timeline.segments().len(),
        BAND_PADDING,
    );
    let x = LinearScale::new(
        timeline.total_extent(),
        MARGIN_LEFT,
        width - MARGIN_RIGHT,
    );

    debug!(segments = timeline.segments().len(); "Rendering timeline bars");

    for (index, segment) in timeline.segments().iter().enumerate() {
        let y = band.position(index);
        let bar_x = x.position(segment.start_offset());

        document = document.add(
            svg_element::Rectangle::new()
                .set("x", bar_x)
                .set("y", y)
                .set("width", x.length(segment.width()))
                .set("height", band.bandwidth())
                .set("fill", palette.color_for(segment.interval().zone()))
                .set("class", "interval"),
        );

        document = document.add(
            svg_element::Text::new(label_text(segment.interval()))
                .set("x", bar_x + LABEL_OFFSET)
                .set("y", y + band.bandwidth() / 2.0)
                .set("dominant-baseline", "central")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 12)
                .set("class", "interval-label"),
        );
    }

    document
}

fn add_axis(mut document: Document, total_extent: f64, width: f64, height: f64) -> Document {
    let baseline = height - MARGIN_BOTTOM;

    document = document.add(
        svg_element::Line::new()
            .set("x1", MARGIN_LEFT)
            .set("y1", baseline)
            .set("x2", width - MARGIN_RIGHT)
            .set("y2", baseline)
            .set("stroke", "black")
            .set("stroke-width", 1),
    );

    if total_extent <= 0.0 {
        return document;
    }

    let x = LinearScale::new(total_extent, MARGIN_LEFT, width - MARGIN_RIGHT);
    let step = tick_step(total_extent, AXIS_TICK_COUNT);

    for value in ticks(total_extent, AXIS_TICK_COUNT) {
        let tick_x = x.position(value);

        document = document.add(
            svg_element::Line::new()
                .set("x1", tick_x)
                .set("y1", baseline)
                .set("x2", tick_x)
                .set("y2", baseline + AXIS_TICK_SIZE)
                .set("stroke", "black")
                .set("stroke-width", 1),
        );
        document = document.add(
            svg_element::Text::new(format_tick(value, step))
                .set("x", tick_x)
                .set("y", baseline + AXIS_TICK_SIZE + 12.0)
                .set("text-anchor", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 10)
                .set("class", "axis-tick"),
        );
    }

    document
}

#[cfg(test)]
mod tests {
    use paceline_core::{
        color::Color,
        timeline,
        workout::{Element, Interval, Metadata, Workout},
    };

    use super::*;

    fn render_to_string(workout: &Workout, config: &AppConfig) -> String {
        let flat = timeline::flatten(workout.elements());
        let computed = timeline::layout(&flat).unwrap();
        SvgBuilder::new(config)
            .render(workout, &computed)
            .unwrap()
            .to_string()
    }

    fn simple_workout() -> Workout {
        Workout::new(
            Metadata {
                title: Some("Tempo Run".to_string()),
                date: Some("2024-05-12".to_string()),
                athlete: Some("Jane Doe".to_string()),
            },
            vec![
                Element::Interval(Interval::new("2km", "AR").with_title("Warmup")),
                Element::Interval(Interval::new("8km", "TZ").with_title("Tempo")),
                Element::Interval(Interval::new("2km", "AR").with_title("Cooldown")),
            ],
        )
    }

    #[test]
    fn test_one_rect_per_segment() {
        let rendered = render_to_string(&simple_workout(), &AppConfig::default());

        assert_eq!(rendered.matches("class=\"interval\"").count(), 3);
        assert_eq!(rendered.matches("class=\"interval-label\"").count(), 3);
    }

    #[test]
    fn test_header_and_labels() {
        let rendered = render_to_string(&simple_workout(), &AppConfig::default());

        assert!(rendered.contains("Tempo Run"));
        assert!(rendered.contains("2024-05-12 - Jane Doe"));
        assert!(rendered.contains("Warmup (2km - AR)"));
    }

    #[test]
    fn test_empty_workout_draws_nothing() {
        let workout = Workout::new(Metadata::default(), Vec::new());
        let rendered = render_to_string(&workout, &AppConfig::default());

        assert!(rendered.contains("<svg"));
        assert!(!rendered.contains("class=\"interval\""));
        // the axis baseline is still drawn
        assert!(rendered.contains("<line"));
    }

    #[test]
    fn test_unknown_zone_uses_fallback_color() {
        let workout = Workout::new(
            Metadata::default(),
            vec![Element::Interval(Interval::new("10min", "??"))],
        );
        let rendered = render_to_string(&workout, &AppConfig::default());

        let fallback = Color::new("#cccccc").unwrap().to_string();
        assert!(rendered.contains(&fallback));
    }

    #[test]
    fn test_label_without_title() {
        let interval = Interval::new("45s", "MZ");
        assert_eq!(label_text(&interval), "45s - MZ");
    }

    #[test]
    fn test_background_color_rect() {
        let toml = "[style]\nbackground_color = \"white\"\n";
        let config: AppConfig = toml::from_str(toml).unwrap();
        let rendered = render_to_string(&simple_workout(), &config);

        let white = Color::new("white").unwrap().to_string();
        assert!(rendered.contains(&white));
    }
}
