//! Zone color palette.
//!
//! Colors are keyed by zone code. The built-in palette covers the four
//! standard zones (aerobic, race, mixed, threshold); configuration can
//! override entries or add new zones. An unknown zone renders in the
//! fallback gray and logs a warning, never blocking the chart.

use indexmap::IndexMap;
use log::warn;

use paceline_core::color::Color;

use crate::export::Error;

const DEFAULT_ZONE_COLORS: [(&str, &str); 4] = [
    ("AR", "#91cf60"),
    ("RZ", "#1a9850"),
    ("MZ", "#fee08b"),
    ("TZ", "#fc8d59"),
];

const FALLBACK_COLOR: &str = "#cccccc";

/// Resolved zone colors for one render.
#[derive(Debug)]
pub(crate) struct Palette {
    colors: IndexMap<String, Color>,
    fallback: Color,
}

impl Palette {
    /// Builds the palette: defaults first, then configured overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for an override that is not a
    /// valid CSS color.
    pub fn from_overrides(overrides: &IndexMap<String, String>) -> Result<Self, Error> {
        let mut colors = IndexMap::new();

        for (zone, css) in DEFAULT_ZONE_COLORS {
            let color = Color::new(css).expect("built-in palette entries are valid CSS colors");
            colors.insert(zone.to_string(), color);
        }

        for (zone, css) in overrides {
            let color = Color::new(css).map_err(|reason| Error::InvalidColor {
                what: format!("zone `{zone}`"),
                reason,
            })?;
            colors.insert(zone.clone(), color);
        }

        Ok(Self {
            colors,
            fallback: Color::new(FALLBACK_COLOR)
                .expect("fallback color is a valid CSS color"),
        })
    }

    /// The color for a zone code, or the fallback for unknown zones.
    pub fn color_for(&self, zone: &str) -> &Color {
        match self.colors.get(zone) {
            Some(color) => color,
            None => {
                warn!(zone = zone; "No color defined for zone, using fallback");
                &self.fallback
            }
        }
    }
}
