//! Configuration types for workout chart rendering.
//!
//! This module provides configuration structures that control chart
//! dimensions and styling. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources (the CLI loads them from TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining chart and style settings.
//! - [`ChartConfig`] - Chart dimensions.
//! - [`StyleConfig`] - Visual styling: background color and zone color overrides.
//!
//! # Example
//!
//! ```
//! # use paceline::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.chart().width(), 800.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use paceline_core::color::Color;

/// Top-level configuration combining chart and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Chart dimension section.
    #[serde(default)]
    chart: ChartConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified chart and style
    /// configurations.
    pub fn new(chart: ChartConfig, style: StyleConfig) -> Self {
        Self { chart, style }
    }

    /// Returns the chart configuration.
    pub fn chart(&self) -> &ChartConfig {
        &self.chart
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Chart dimensions in pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    width: f64,
    height: f64,
}

impl ChartConfig {
    /// Creates a new [`ChartConfig`] with the specified dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Chart width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Chart height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}

/// Visual styling configuration for rendered charts.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background [`Color`] for the chart, as a CSS color string.
    background_color: Option<String>,

    /// Zone color overrides, zone code to CSS color string.
    zone_colors: IndexMap<String, String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the configured zone color overrides, unparsed.
    pub fn zone_colors(&self) -> &IndexMap<String, String> {
        &self.zone_colors
    }
}
