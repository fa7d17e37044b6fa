//! Number formatting for path data and attributes.

use serde::{Deserialize, Serialize};

/// How coordinates and lengths are written into path data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Shortest representation that round-trips to the same `f64`.
    #[default]
    Shortest,
    /// Fixed number of decimal places.
    Fixed(usize),
}

impl NumberFormat {
    /// Format a number. Negative zero is always written as `0`.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Shortest => {
                if value == 0.0 {
                    "0".to_string()
                } else {
                    format!("{value}")
                }
            }
            Self::Fixed(places) => {
                let text = format!("{value:.places$}");
                match text.strip_prefix('-') {
                    Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
                    _ => text,
                }
            }
        }
    }
}

/// Text for a displayed value.
///
/// Magnitudes in `[1e-6, 1e21)` are written as plain decimals, others in
/// exponent form with an explicit sign (`1e-7`, `1.5e+21`).
pub(crate) fn value_label(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return NumberFormat::Shortest.format(value);
    }
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
