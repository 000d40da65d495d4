//! Duration expression parsing.
//!
//! Every interval carries an `amount` string such as `5km`, `30min`, or
//! `45s`. The timeline plots distance and time on one shared proportional
//! axis, so all three forms are projected onto a single canonical scale:
//! hours, with kilometers passing through numerically unchanged. That is a
//! deliberate simplification, not a unit conversion.
//!
//! Unit detection is substring containment with a fixed precedence
//! (`km`, then `min`, then `s`), so `30mins` resolves as minutes and
//! `5kms` as kilometers. An amount with no recognized unit marker is used
//! as a bare magnitude.

use thiserror::Error;

/// Distance unit marker. Distance shares the axis unconverted.
pub const KILOMETERS: &str = "km";
/// Minutes unit marker.
pub const MINUTES: &str = "min";
/// Seconds unit marker.
pub const SECONDS: &str = "s";

const MINUTES_PER_HOUR: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// An amount without a usable numeric magnitude.
///
/// Surfacing this as an error instead of a quiet NaN matters: one NaN
/// would poison every later cumulative offset in the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("amount `{amount}` has no numeric magnitude")]
pub struct AmountError {
    amount: String,
}

impl AmountError {
    /// The offending amount expression.
    pub fn amount(&self) -> &str {
        &self.amount
    }
}

/// Parses a duration expression into canonical hours.
///
/// # Examples
///
/// ```
/// use paceline_core::duration;
///
/// assert_eq!(duration::parse("5km").unwrap(), 5.0);
/// assert_eq!(duration::parse("30min").unwrap(), 0.5);
/// assert_eq!(duration::parse("45s").unwrap(), 0.0125);
/// assert!(duration::parse("abc").is_err());
/// ```
///
/// # Errors
///
/// Returns [`AmountError`] when the expression has no leading numeric
/// run, or when the run does not fit a finite value.
pub fn parse(amount: &str) -> Result<f64, AmountError> {
    let magnitude = leading_magnitude(amount).ok_or_else(|| AmountError {
        amount: amount.to_string(),
    })?;

    if amount.contains(KILOMETERS) {
        Ok(magnitude)
    } else if amount.contains(MINUTES) {
        Ok(magnitude / MINUTES_PER_HOUR)
    } else if amount.contains(SECONDS) {
        Ok(magnitude / SECONDS_PER_HOUR)
    } else {
        Ok(magnitude)
    }
}

/// Whether an amount is a distance (carries the kilometers marker).
pub fn is_distance(amount: &str) -> bool {
    amount.contains(KILOMETERS)
}

/// Extracts the leading numeric run: digits with an optional fractional
/// part, after leading whitespace. No sign is accepted, so magnitudes are
/// non-negative by construction.
fn leading_magnitude(amount: &str) -> Option<f64> {
    let trimmed = amount.trim_start();

    let integer_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    let end = match trimmed[integer_end..].strip_prefix('.') {
        Some(rest) => {
            let fraction_len = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            integer_end + 1 + fraction_len
        }
        None => integer_end,
    };

    trimmed[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
