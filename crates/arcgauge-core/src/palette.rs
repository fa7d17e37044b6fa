//! Gauge colors and threshold banding.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tailwind red-500 (`#ef4444`).
pub const RED_500: Color = Color {
    r: 239.0 / 255.0,
    g: 68.0 / 255.0,
    b: 68.0 / 255.0,
    a: 1.0,
};
/// Tailwind yellow-500 (`#eab308`).
pub const YELLOW_500: Color = Color {
    r: 234.0 / 255.0,
    g: 179.0 / 255.0,
    b: 8.0 / 255.0,
    a: 1.0,
};
/// Tailwind green-500 (`#22c55e`).
pub const GREEN_500: Color = Color {
    r: 34.0 / 255.0,
    g: 197.0 / 255.0,
    b: 94.0 / 255.0,
    a: 1.0,
};

/// Which threshold band a percentage falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBand {
    /// At or below the low threshold.
    Low,
    /// Above low, at or below the medium threshold.
    Medium,
    /// Above the medium threshold.
    High,
}

/// Invalid threshold configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    /// A threshold is NaN, infinite, or outside `[0, 1]`.
    #[error("{name} threshold must be within [0, 1], got {value}")]
    OutOfRange {
        /// Threshold name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Low threshold above medium.
    #[error("low threshold ({low}) must not exceed medium threshold ({medium})")]
    Unordered {
        /// Low threshold
        low: f64,
        /// Medium threshold
        medium: f64,
    },
}

/// Upper bounds (inclusive) of the low and medium bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorThresholds {
    low: f64,
    medium: f64,
}

impl Default for ColorThresholds {
    fn default() -> Self {
        Self {
            low: 1.0 / 3.0,
            medium: 2.0 / 3.0,
        }
    }
}

impl ColorThresholds {
    /// Create thresholds, requiring `0 <= low <= medium <= 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError`] when a bound is outside `[0, 1]` or the
    /// bounds are out of order.
    pub fn new(low: f64, medium: f64) -> Result<Self, ThresholdError> {
        unit("low", low)?;
        unit("medium", medium)?;
        if low > medium {
            return Err(ThresholdError::Unordered { low, medium });
        }
        Ok(Self { low, medium })
    }

    /// Upper bound of the low band.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound of the medium band.
    #[must_use]
    pub fn medium(&self) -> f64 {
        self.medium
    }

    /// Classify a percentage.
    #[must_use]
    pub fn band(&self, percentage: f64) -> ColorBand {
        if percentage <= self.low {
            ColorBand::Low
        } else if percentage <= self.medium {
            ColorBand::Medium
        } else {
            ColorBand::High
        }
    }
}

fn unit(name: &'static str, value: f64) -> Result<(), ThresholdError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ThresholdError::OutOfRange { name, value })
    }
}

/// Resolved colors a gauge is drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugePalette {
    /// Fill color of the low band
    pub low: Color,
    /// Fill color of the medium band
    pub medium: Color,
    /// Fill color of the high band
    pub high: Color,
    /// Track (background arc) color
    pub track: Color,
    /// Center text color
    pub text: Color,
}

impl Default for GaugePalette {
    fn default() -> Self {
        Self::light()
    }
}

impl GaugePalette {
    /// Palette for light backgrounds.
    #[must_use]
    pub fn light() -> Self {
        Self {
            low: RED_500,
            medium: YELLOW_500,
            high: GREEN_500,
            track: Color::from_rgb8(0xf4, 0xf4, 0xf5),
            text: Color::from_rgb8(0x09, 0x09, 0x0b),
        }
    }

    /// Palette for dark backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            low: RED_500,
            medium: YELLOW_500,
            high: GREEN_500,
            track: Color::from_rgb8(0x27, 0x27, 0x2a),
            text: Color::from_rgb8(0xfa, 0xfa, 0xfa),
        }
    }

    /// Fill color for a band.
    #[must_use]
    pub fn band_color(&self, band: ColorBand) -> Color {
        match band {
            ColorBand::Low => self.low,
            ColorBand::Medium => self.medium,
            ColorBand::High => self.high,
        }
    }
}
