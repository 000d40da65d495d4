//! Scale math for the timeline chart.
//!
//! A [`LinearScale`] maps canonical hours onto the horizontal pixel range
//! and a [`BandScale`] assigns each flattened interval its own padded
//! horizontal band, one row per interval.

/// Linear mapping from `[0, domain_max]` onto a pixel range.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinearScale {
    domain_max: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Creates a scale over a positive domain.
    pub fn new(domain_max: f64, range_start: f64, range_end: f64) -> Self {
        Self {
            domain_max,
            range_start,
            range_end,
        }
    }

    /// Pixel position of a domain value.
    pub fn position(&self, value: f64) -> f64 {
        self.range_start + value / self.domain_max * (self.range_end - self.range_start)
    }

    /// Pixel length of a domain extent.
    pub fn length(&self, extent: f64) -> f64 {
        extent / self.domain_max * (self.range_end - self.range_start)
    }
}

/// Evenly spaced bands with inner and outer padding, one per index.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BandScale {
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Creates a band scale for `count` bands over the pixel range, with
    /// `padding` as a fraction of the step (applied inner and outer).
    pub fn new(range_start: f64, range_end: f64, count: usize, padding: f64) -> Self {
        let n = count.max(1) as f64;
        let step = (range_end - range_start) / (n + padding);
        Self {
            start: range_start + step * padding,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Pixel position of the band at `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Height of each band.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

/// Picks a tick step from the 1-2-5 progression so that roughly `target`
/// ticks cover `[0, max]`.
pub(crate) fn tick_step(max: f64, target: usize) -> f64 {
    let raw = max / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;

    let factor = if residual >= 50f64.sqrt() {
        10.0
    } else if residual >= 10f64.sqrt() {
        5.0
    } else if residual >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    magnitude * factor
}

/// Tick values from zero to `max` inclusive of the last step below it.
pub(crate) fn ticks(max: f64, target: usize) -> Vec<f64> {
    if max <= 0.0 {
        return Vec::new();
    }
    let step = tick_step(max, target);
    let count = (max / step).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Formats a tick value with just enough decimals for the step size.
pub(crate) fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{value:.0}")
    } else {
        let decimals = (-step.log10().floor()) as usize;
        format!("{value:.decimals$}")
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new(2.0, 50.0, 780.0);

        assert!(approx_eq!(f64, scale.position(0.0), 50.0));
        assert!(approx_eq!(f64, scale.position(2.0), 780.0));
        assert!(approx_eq!(f64, scale.position(1.0), 415.0));
        assert!(approx_eq!(f64, scale.length(1.0), 365.0));
    }

    #[test]
    fn test_band_scale_positions() {
        let scale = BandScale::new(20.0, 370.0, 5, 0.1);

        let step = 350.0 / 5.1;
        assert!(approx_eq!(f64, scale.bandwidth(), step * 0.9, epsilon = 1e-9));
        assert!(approx_eq!(
            f64,
            scale.position(0),
            20.0 + step * 0.1,
            epsilon = 1e-9
        ));
        assert!(approx_eq!(
            f64,
            scale.position(4),
            20.0 + step * 4.1,
            epsilon = 1e-9
        ));
        // last band ends at the bottom of the plot area
        assert!(scale.position(4) + scale.bandwidth() <= 370.0 + 1e-9);
    }

    #[test]
    fn test_band_scale_single_band() {
        let scale = BandScale::new(0.0, 110.0, 1, 0.1);
        assert!(approx_eq!(f64, scale.bandwidth(), 90.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, scale.position(0), 10.0, epsilon = 1e-9));
    }

    #[test]
    fn test_tick_step_progression() {
        assert!(approx_eq!(f64, tick_step(10.0, 5), 2.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, tick_step(1.0, 5), 0.2, epsilon = 1e-12));
        assert!(approx_eq!(f64, tick_step(0.2667, 6), 0.05, epsilon = 1e-12));
    }

    #[test]
    fn test_ticks_cover_domain() {
        let values = ticks(0.2667, 6);
        assert_eq!(values.len(), 6);
        assert_eq!(values[0], 0.0);
        assert!(approx_eq!(f64, values[5], 0.25, epsilon = 1e-9));
        assert!(values.iter().all(|v| *v <= 0.2667));
    }

    #[test]
    fn test_ticks_empty_domain() {
        assert!(ticks(0.0, 6).is_empty());
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(5.0, 1.0), "5");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
        assert_eq!(format_tick(0.1, 0.05), "0.10");
    }
}
