//! Gauge input parameters and their validation.
//!
//! A [`GaugeSpec`] can only be obtained through [`GaugeSpecBuilder::build`],
//! so every spec handed to the renderer already satisfies the numeric
//! contract: a finite, non-empty range and a stroke narrower than the
//! drawing.

use crate::color::Color;
use crate::geometry::Point;
use serde::Serialize;
use thiserror::Error;

/// Default range minimum.
pub const DEFAULT_MIN: f64 = 0.0;
/// Default range maximum.
pub const DEFAULT_MAX: f64 = 100.0;
/// Default drawing diameter.
pub const DEFAULT_SIZE: f64 = 160.0;
/// Default stroke width.
pub const DEFAULT_STROKE_WIDTH: f64 = 14.0;

/// Errors rejected when building a [`GaugeSpec`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// The value is NaN.
    #[error("value must be a number, got NaN")]
    NotANumber,

    /// A range or drawing parameter is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Parameter name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Minimum is not strictly below maximum.
    #[error("minimum ({min}) must be less than maximum ({max})")]
    InvalidRange {
        /// Range minimum
        min: f64,
        /// Range maximum
        max: f64,
    },

    /// The range width overflows `f64`.
    #[error("range [{min}, {max}] is too wide to represent")]
    RangeOverflow {
        /// Range minimum
        min: f64,
        /// Range maximum
        max: f64,
    },

    /// A drawing parameter is zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Parameter name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// The stroke would leave no room for the arc.
    #[error("stroke width ({stroke_width}) must be less than size ({size})")]
    StrokeTooWide {
        /// Stroke width
        stroke_width: f64,
        /// Drawing diameter
        size: f64,
    },
}

/// Validated gauge parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    value: f64,
    min: f64,
    max: f64,
    size: f64,
    stroke_width: f64,
    primary_color: Option<Color>,
    secondary_color: Option<Color>,
    label: Option<String>,
    show_value: bool,
}

impl GaugeSpec {
    /// Start building a spec for `value` with default range and drawing size.
    #[must_use]
    pub fn builder(value: f64) -> GaugeSpecBuilder {
        GaugeSpecBuilder::new(value)
    }

    /// Spec for `value` with all defaults (range 0-100, size 160, stroke 14).
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::NotANumber`] if `value` is NaN.
    pub fn new(value: f64) -> Result<Self, SpecError> {
        Self::builder(value).build()
    }

    /// Current raw (unclamped) value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Range minimum.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Range maximum.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Drawing diameter.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Stroke width of both arcs.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Fixed fill color, overriding threshold banding.
    #[must_use]
    pub fn primary_color(&self) -> Option<Color> {
        self.primary_color
    }

    /// Fixed track color, overriding the palette.
    #[must_use]
    pub fn secondary_color(&self) -> Option<Color> {
        self.secondary_color
    }

    /// Secondary label text.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the clamped value is drawn at the center.
    #[must_use]
    pub fn show_value(&self) -> bool {
        self.show_value
    }

    /// Arc radius, measured to the middle of the stroke.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.size - self.stroke_width) / 2.0
    }

    /// Center of the drawing area.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Update the value, keeping every other parameter.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::NotANumber`] if `value` is NaN; the spec is
    /// left unchanged.
    pub fn set_value(&mut self, value: f64) -> Result<(), SpecError> {
        if value.is_nan() {
            return Err(SpecError::NotANumber);
        }
        self.value = value;
        Ok(())
    }

    /// Rebuild from this spec's parameters.
    #[must_use]
    pub fn to_builder(&self) -> GaugeSpecBuilder {
        GaugeSpecBuilder {
            value: self.value,
            min: self.min,
            max: self.max,
            size: self.size,
            stroke_width: self.stroke_width,
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            label: self.label.clone(),
            show_value: self.show_value,
        }
    }
}

/// Builder for [`GaugeSpec`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpecBuilder {
    value: f64,
    min: f64,
    max: f64,
    size: f64,
    stroke_width: f64,
    primary_color: Option<Color>,
    secondary_color: Option<Color>,
    label: Option<String>,
    show_value: bool,
}

impl GaugeSpecBuilder {
    /// Create a builder with default range and drawing parameters.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            size: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            primary_color: None,
            secondary_color: None,
            label: None,
            show_value: true,
        }
    }

    /// Set the value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set the range.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the drawing diameter.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Use a fixed fill color instead of threshold banding.
    #[must_use]
    pub fn with_primary_color(mut self, color: Color) -> Self {
        self.primary_color = Some(color);
        self
    }

    /// Use a fixed track color instead of the palette's.
    #[must_use]
    pub fn with_secondary_color(mut self, color: Color) -> Self {
        self.secondary_color = Some(color);
        self
    }

    /// Set the secondary label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set whether to show the value text.
    #[must_use]
    pub fn with_value_display(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    /// Validate and produce the spec.
    ///
    /// # Errors
    ///
    /// See [`SpecError`] for the rejected inputs. Infinite values are
    /// accepted and clamp to the range ends.
    pub fn build(self) -> Result<GaugeSpec, SpecError> {
        if self.value.is_nan() {
            return Err(SpecError::NotANumber);
        }
        finite("min", self.min)?;
        finite("max", self.max)?;
        finite("size", self.size)?;
        finite("stroke_width", self.stroke_width)?;

        if self.min >= self.max {
            return Err(SpecError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.max - self.min).is_finite() {
            return Err(SpecError::RangeOverflow {
                min: self.min,
                max: self.max,
            });
        }

        positive("size", self.size)?;
        positive("stroke_width", self.stroke_width)?;
        if self.stroke_width >= self.size {
            return Err(SpecError::StrokeTooWide {
                stroke_width: self.stroke_width,
                size: self.size,
            });
        }

        Ok(GaugeSpec {
            value: self.value,
            min: self.min,
            max: self.max,
            size: self.size,
            stroke_width: self.stroke_width,
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            label: self.label,
            show_value: self.show_value,
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), SpecError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpecError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SpecError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SpecError::NonPositive { field, value })
    }
}
