//! YAML manifest types for gauge sets.

use crate::error::ParseError;
use arcgauge_core::{
    Color, ColorThresholds, GaugePalette, GaugeRenderer, GaugeSpec, NumberFormat, DEFAULT_MAX,
    DEFAULT_MIN, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Gauge manifest loaded from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GaugeManifest {
    /// Base palette
    #[serde(default)]
    pub theme: Theme,
    /// Decimal places for path coordinates (shortest form when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
    /// Band thresholds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdConfig>,
    /// Per-color overrides on top of the theme
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Gauges to render
    #[serde(default)]
    pub gauges: Vec<GaugeConfig>,
}

/// Named base palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// [`GaugePalette::light`]
    #[default]
    Light,
    /// [`GaugePalette::dark`]
    Dark,
}

impl Theme {
    /// Base palette for this theme.
    #[must_use]
    pub fn palette(self) -> GaugePalette {
        match self {
            Self::Light => GaugePalette::light(),
            Self::Dark => GaugePalette::dark(),
        }
    }
}

/// Threshold section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Upper bound of the low band
    #[serde(default = "default_low")]
    pub low: f64,
    /// Upper bound of the medium band
    #[serde(default = "default_medium")]
    pub medium: f64,
}

fn default_low() -> f64 {
    ColorThresholds::default().low()
}

fn default_medium() -> f64 {
    ColorThresholds::default().medium()
}

/// Hex color overrides; unset fields keep the theme's color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Low band color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,
    /// Medium band color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    /// High band color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<String>,
    /// Track color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    /// Text color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One gauge entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    /// Unique name, used for output file names
    pub name: String,
    /// Current value
    pub value: f64,
    /// Range minimum
    #[serde(default = "default_min")]
    pub min: f64,
    /// Range maximum
    #[serde(default = "default_max")]
    pub max: f64,
    /// Drawing diameter
    #[serde(default = "default_size")]
    pub size: f64,
    /// Stroke width
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Secondary label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Draw the clamped value at the center
    #[serde(default = "default_show_value")]
    pub show_value: bool,
    /// Fixed fill color (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Fixed track color (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

fn default_min() -> f64 {
    DEFAULT_MIN
}

fn default_max() -> f64 {
    DEFAULT_MAX
}

fn default_size() -> f64 {
    DEFAULT_SIZE
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_show_value() -> bool {
    true
}

fn parse_color(field: impl Into<String>, hex: &str) -> Result<Color, ParseError> {
    hex.parse().map_err(|source| ParseError::Color {
        field: field.into(),
        source,
    })
}

impl GaugeConfig {
    /// Entry for `value` with every optional field at its default.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            size: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            label: None,
            show_value: true,
            primary_color: None,
            secondary_color: None,
        }
    }

    /// Validate into a [`GaugeSpec`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Color`] for malformed colors and
    /// [`ParseError::Spec`] when the numbers violate the spec contract.
    pub fn to_spec(&self) -> Result<GaugeSpec, ParseError> {
        let mut builder = GaugeSpec::builder(self.value)
            .with_range(self.min, self.max)
            .with_size(self.size)
            .with_stroke_width(self.stroke_width)
            .with_value_display(self.show_value);
        if let Some(label) = &self.label {
            builder = builder.with_label(label.clone());
        }
        if let Some(hex) = &self.primary_color {
            builder = builder
                .with_primary_color(parse_color(format!("gauges.{}.primary_color", self.name), hex)?);
        }
        if let Some(hex) = &self.secondary_color {
            builder = builder.with_secondary_color(parse_color(
                format!("gauges.{}.secondary_color", self.name),
                hex,
            )?);
        }
        builder.build().map_err(|source| ParseError::Spec {
            gauge: self.name.clone(),
            source,
        })
    }
}

impl GaugeManifest {
    /// Parse a manifest from YAML.
    ///
    /// Only the document structure is checked here; call
    /// [`validate`](Self::validate) or [`specs`](Self::specs) to check values.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        debug!(
            gauges = manifest.gauges.len(),
            theme = ?manifest.theme,
            "parsed gauge manifest"
        );
        Ok(manifest)
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Theme palette with the manifest's overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Color`] for a malformed override.
    pub fn palette(&self) -> Result<GaugePalette, ParseError> {
        let mut palette = self.theme.palette();
        let overrides = [
            ("palette.low", &self.palette.low, &mut palette.low),
            ("palette.medium", &self.palette.medium, &mut palette.medium),
            ("palette.high", &self.palette.high, &mut palette.high),
            ("palette.track", &self.palette.track, &mut palette.track),
            ("palette.text", &self.palette.text, &mut palette.text),
        ];
        for (field, hex, slot) in overrides {
            if let Some(hex) = hex {
                *slot = parse_color(field, hex)?;
            }
        }
        Ok(palette)
    }

    /// Configured thresholds, or the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Threshold`] for out-of-range or unordered bounds.
    pub fn thresholds(&self) -> Result<ColorThresholds, ParseError> {
        match self.thresholds {
            Some(t) => Ok(ColorThresholds::new(t.low, t.medium)?),
            None => Ok(ColorThresholds::default()),
        }
    }

    /// Number format implied by `precision`.
    #[must_use]
    pub fn number_format(&self) -> NumberFormat {
        self.precision
            .map_or(NumberFormat::Shortest, NumberFormat::Fixed)
    }

    /// Renderer configured from the theme, overrides, thresholds, and precision.
    ///
    /// # Errors
    ///
    /// Propagates palette and threshold errors.
    pub fn renderer(&self) -> Result<GaugeRenderer, ParseError> {
        Ok(GaugeRenderer::new(self.palette()?)
            .with_thresholds(self.thresholds()?)
            .with_number_format(self.number_format()))
    }

    /// Validated specs in manifest order, paired with their names.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Validation`] for empty or duplicate names, or
    /// the first gauge's conversion error.
    pub fn specs(&self) -> Result<Vec<(String, GaugeSpec)>, ParseError> {
        let mut seen = HashSet::new();
        let mut specs = Vec::with_capacity(self.gauges.len());
        for gauge in &self.gauges {
            if gauge.name.trim().is_empty() {
                return Err(ParseError::Validation(
                    "gauge name must not be empty".to_string(),
                ));
            }
            if !seen.insert(gauge.name.as_str()) {
                return Err(ParseError::Validation(format!(
                    "duplicate gauge name '{}'",
                    gauge.name
                )));
            }
            specs.push((gauge.name.clone(), gauge.to_spec()?));
        }
        Ok(specs)
    }

    /// Validate every section without rendering.
    ///
    /// # Errors
    ///
    /// Returns the first error found.
    pub fn validate(&self) -> Result<(), ParseError> {
        self.renderer()?;
        self.specs()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcgauge_core::{ColorBand, SpecError, ThresholdError};

    const EXAMPLE_YAML: &str = r##"
theme: dark
precision: 2
thresholds:
  low: 0.25
  medium: 0.75
palette:
  high: "#3b82f6"
gauges:
  - name: cpu
    value: 42
    label: CPU
  - name: temp
    value: 71.5
    min: 20
    max: 90
    size: 200
    stroke_width: 20
    show_value: false
    primary_color: "#f97316"
    secondary_color: "#1f2937"
"##;

    #[test]
    fn test_parse_example() {
        let manifest = GaugeManifest::from_yaml(EXAMPLE_YAML).unwrap();
        assert_eq!(manifest.theme, Theme::Dark);
        assert_eq!(manifest.precision, Some(2));
        assert_eq!(manifest.gauges.len(), 2);

        let cpu = &manifest.gauges[0];
        assert_eq!(cpu.name, "cpu");
        assert_eq!(cpu.value, 42.0);
        assert_eq!(cpu.min, 0.0);
        assert_eq!(cpu.max, 100.0);
        assert_eq!(cpu.size, 160.0);
        assert_eq!(cpu.stroke_width, 14.0);
        assert!(cpu.show_value);
        assert_eq!(cpu.label.as_deref(), Some("CPU"));

        let temp = &manifest.gauges[1];
        assert!(!temp.show_value);
        assert_eq!(temp.primary_color.as_deref(), Some("#f97316"));
    }

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = GaugeManifest::from_yaml("{}").unwrap();
        assert_eq!(manifest, GaugeManifest::default());
        assert_eq!(manifest.palette().unwrap(), GaugePalette::light());
        assert_eq!(manifest.thresholds().unwrap(), ColorThresholds::default());
        assert_eq!(manifest.number_format(), NumberFormat::Shortest);
        assert!(manifest.specs().unwrap().is_empty());
    }

    #[test]
    fn test_palette_overrides() {
        let manifest = GaugeManifest::from_yaml(EXAMPLE_YAML).unwrap();
        let palette = manifest.palette().unwrap();
        assert_eq!(palette.high.to_hex(), "#3b82f6");
        assert_eq!(palette.track, GaugePalette::dark().track);
    }

    #[test]
    fn test_renderer_uses_thresholds_and_precision() {
        let manifest = GaugeManifest::from_yaml(EXAMPLE_YAML).unwrap();
        let renderer = manifest.renderer().unwrap();
        assert_eq!(renderer.number_format(), NumberFormat::Fixed(2));
        assert_eq!(renderer.thresholds().low(), 0.25);

        let specs = manifest.specs().unwrap();
        let render = renderer.render(&specs[0].1);
        assert_eq!(render.band, ColorBand::Medium);
    }

    #[test]
    fn test_gauge_to_spec_colors() {
        let manifest = GaugeManifest::from_yaml(EXAMPLE_YAML).unwrap();
        let specs = manifest.specs().unwrap();
        let (name, temp) = &specs[1];
        assert_eq!(name, "temp");
        assert_eq!(temp.primary_color().unwrap().to_hex(), "#f97316");
        assert_eq!(temp.secondary_color().unwrap().to_hex(), "#1f2937");
        assert_eq!(temp.radius(), 90.0);
    }

    #[test]
    fn test_partial_thresholds_fill_defaults() {
        let manifest = GaugeManifest::from_yaml("thresholds:\n  low: 0.1\n").unwrap();
        let t = manifest.thresholds().unwrap();
        assert_eq!(t.low(), 0.1);
        assert_eq!(t.medium(), 2.0 / 3.0);
    }

    #[test]
    fn test_invalid_thresholds() {
        let manifest =
            GaugeManifest::from_yaml("thresholds:\n  low: 0.9\n  medium: 0.1\n").unwrap();
        assert!(matches!(
            manifest.validate(),
            Err(ParseError::Threshold(ThresholdError::Unordered { .. }))
        ));
    }

    #[test]
    fn test_invalid_range_reports_gauge() {
        let yaml = "gauges:\n  - name: broken\n    value: 1\n    min: 10\n    max: 5\n";
        let manifest = GaugeManifest::from_yaml(yaml).unwrap();
        match manifest.specs() {
            Err(ParseError::Spec { gauge, source }) => {
                assert_eq!(gauge, "broken");
                assert_eq!(source, SpecError::InvalidRange { min: 10.0, max: 5.0 });
            }
            other => panic!("expected spec error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_color_reports_field() {
        let yaml = "gauges:\n  - name: cpu\n    value: 1\n    primary_color: nope\n";
        let manifest = GaugeManifest::from_yaml(yaml).unwrap();
        match manifest.specs() {
            Err(ParseError::Color { field, .. }) => {
                assert_eq!(field, "gauges.cpu.primary_color");
            }
            other => panic!("expected color error, got {other:?}"),
        }

        let manifest = GaugeManifest::from_yaml("palette:\n  track: \"#12\"\n").unwrap();
        assert!(matches!(
            manifest.palette(),
            Err(ParseError::Color { field, .. }) if field == "palette.track"
        ));
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let yaml = "gauges:\n  - {name: a, value: 1}\n  - {name: a, value: 2}\n";
        assert!(matches!(
            GaugeManifest::from_yaml(yaml).unwrap().specs(),
            Err(ParseError::Validation(msg)) if msg.contains("duplicate")
        ));

        let yaml = "gauges:\n  - {name: \"  \", value: 1}\n";
        assert!(matches!(
            GaugeManifest::from_yaml(yaml).unwrap().specs(),
            Err(ParseError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_value_is_yaml_error() {
        let err = GaugeManifest::from_yaml("gauges:\n  - name: cpu\n").unwrap_err();
        assert!(matches!(err, ParseError::Yaml(_)));
    }

    #[test]
    fn test_unknown_theme_is_yaml_error() {
        assert!(matches!(
            GaugeManifest::from_yaml("theme: neon\n"),
            Err(ParseError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let manifest = GaugeManifest::from_yaml(EXAMPLE_YAML).unwrap();
        let yaml = manifest.to_yaml().unwrap();
        assert_eq!(GaugeManifest::from_yaml(&yaml).unwrap(), manifest);
    }

    #[test]
    fn test_gauge_config_new_matches_yaml_defaults() {
        let parsed = GaugeManifest::from_yaml("gauges:\n  - {name: x, value: 3}\n").unwrap();
        assert_eq!(parsed.gauges[0], GaugeConfig::new("x", 3.0));
    }
}
