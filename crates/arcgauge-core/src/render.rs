//! The arc gauge renderer.
//!
//! [`GaugeRenderer`] turns a validated [`GaugeSpec`] into a
//! [`GaugeRender`]: track and fill arcs, the resolved fill color, and
//! the center text lines. The renderer holds only its palette,
//! thresholds, and number format; rendering never mutates it.

use crate::arc::{fill_end_angle, ArcPath};
use crate::color::Color;
use crate::format::{value_label, NumberFormat};
use crate::geometry::Point;
use crate::normalize::NormalizedState;
use crate::palette::{ColorBand, ColorThresholds, GaugePalette};
use crate::spec::GaugeSpec;
use serde::Serialize;
use tracing::debug;

/// Value font size relative to the drawing size.
pub(crate) const VALUE_FONT_SCALE: f64 = 0.18;
/// Label font size relative to the drawing size.
pub(crate) const LABEL_FONT_SCALE: f64 = 0.1;
/// Label offset below center, relative to the drawing size.
pub(crate) const LABEL_OFFSET_SCALE: f64 = 0.18;
/// Label opacity.
pub(crate) const LABEL_OPACITY: f64 = 0.6;
/// Value font weight.
pub(crate) const VALUE_FONT_WEIGHT: u16 = 700;

/// A line of centered text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    /// Text content
    pub content: String,
    /// Anchor point; text is centered on it both ways
    pub position: Point,
    /// Font size in drawing units
    pub font_size: f64,
    /// Font weight, if not the default
    pub font_weight: Option<u16>,
    /// Opacity [0.0, 1.0]
    pub opacity: f64,
}

/// Everything needed to draw one gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeRender {
    /// Drawing diameter
    pub size: f64,
    /// Stroke width of both arcs
    pub stroke_width: f64,
    /// Range minimum
    pub min: f64,
    /// Range maximum
    pub max: f64,
    /// Clamped value and percentage
    pub state: NormalizedState,
    /// Threshold band of the percentage
    pub band: ColorBand,
    /// Background arc
    pub track: ArcPath,
    /// Value arc; absent when the percentage is zero
    pub fill: Option<ArcPath>,
    /// End angle of the fill arc
    pub fill_end_angle: Option<f64>,
    /// Fill color
    pub color: Color,
    /// Track color
    pub track_color: Color,
    /// Text color
    pub text_color: Color,
    /// Clamped value at the center
    pub value_text: Option<TextLine>,
    /// Secondary label below the value
    pub label_text: Option<TextLine>,
    /// Number format for path data
    pub number_format: NumberFormat,
}

impl GaugeRender {
    /// Track `d` attribute.
    #[must_use]
    pub fn track_path_data(&self) -> String {
        self.track.to_path_data(self.number_format)
    }

    /// Fill `d` attribute, if there is a fill.
    #[must_use]
    pub fn fill_path_data(&self) -> Option<String> {
        self.fill.map(|arc| arc.to_path_data(self.number_format))
    }

    /// Center of the drawing.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }
}

/// Renders gauge specs with an explicit palette and thresholds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GaugeRenderer {
    palette: GaugePalette,
    thresholds: ColorThresholds,
    number_format: NumberFormat,
}

impl GaugeRenderer {
    /// Create a renderer with the given palette and default thresholds.
    #[must_use]
    pub fn new(palette: GaugePalette) -> Self {
        Self {
            palette,
            thresholds: ColorThresholds::default(),
            number_format: NumberFormat::default(),
        }
    }

    /// Set the band thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: ColorThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the number format for path data.
    #[must_use]
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Palette in use.
    #[must_use]
    pub fn palette(&self) -> &GaugePalette {
        &self.palette
    }

    /// Thresholds in use.
    #[must_use]
    pub fn thresholds(&self) -> ColorThresholds {
        self.thresholds
    }

    /// Number format in use.
    #[must_use]
    pub fn number_format(&self) -> NumberFormat {
        self.number_format
    }

    /// Fill color and band for a percentage; a fixed primary color wins.
    #[must_use]
    pub fn select_color(&self, spec: &GaugeSpec, percentage: f64) -> (Color, ColorBand) {
        let band = self.thresholds.band(percentage);
        let color = spec
            .primary_color()
            .unwrap_or_else(|| self.palette.band_color(band));
        (color, band)
    }

    /// Render a spec.
    #[must_use]
    pub fn render(&self, spec: &GaugeSpec) -> GaugeRender {
        let state = NormalizedState::from_spec(spec);
        let center = spec.center();
        let radius = spec.radius();
        let size = spec.size();

        let track = ArcPath::track(center, radius);
        let fill = ArcPath::fill(center, radius, state.percentage);
        let (color, band) = self.select_color(spec, state.percentage);

        let value_text = spec.show_value().then(|| TextLine {
            content: value_label(state.clamped),
            position: center,
            font_size: size * VALUE_FONT_SCALE,
            font_weight: Some(VALUE_FONT_WEIGHT),
            opacity: 1.0,
        });
        let label_text = spec.label().map(|label| TextLine {
            content: label.to_string(),
            position: Point::new(center.x, center.y + size * LABEL_OFFSET_SCALE),
            font_size: size * LABEL_FONT_SCALE,
            font_weight: None,
            opacity: LABEL_OPACITY,
        });

        let fill_end_angle = fill_end_angle(state.percentage);
        debug!(
            value = spec.value(),
            clamped = state.clamped,
            percentage = state.percentage,
            band = ?band,
            fill_end_angle = ?fill_end_angle,
            "rendered gauge"
        );

        GaugeRender {
            size,
            stroke_width: spec.stroke_width(),
            min: spec.min(),
            max: spec.max(),
            state,
            band,
            track,
            fill,
            fill_end_angle,
            color,
            track_color: spec.secondary_color().unwrap_or(self.palette.track),
            text_color: self.palette.text,
            value_text,
            label_text,
            number_format: self.number_format,
        }
    }
}
