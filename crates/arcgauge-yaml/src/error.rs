//! Error types for gauge manifest parsing.

use arcgauge_core::{ColorParseError, SpecError, ThresholdError};
use std::fmt;

/// Error type for manifest parsing.
#[derive(Debug)]
pub enum ParseError {
    /// YAML parsing error
    Yaml(serde_yaml_ng::Error),
    /// A gauge entry failed spec validation
    Spec {
        /// Gauge name
        gauge: String,
        /// Underlying validation error
        source: SpecError,
    },
    /// The threshold section is invalid
    Threshold(ThresholdError),
    /// A color field is not a valid hex color
    Color {
        /// Dotted path of the field, e.g. `gauges.cpu.primary_color`
        field: String,
        /// Underlying parse error
        source: ColorParseError,
    },
    /// Manifest-level validation error
    Validation(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "YAML error: {e}"),
            Self::Spec { gauge, source } => write!(f, "Invalid gauge '{gauge}': {source}"),
            Self::Threshold(e) => write!(f, "Invalid thresholds: {e}"),
            Self::Color { field, source } => write!(f, "Invalid color for '{field}': {source}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(e) => Some(e),
            Self::Spec { source, .. } => Some(source),
            Self::Threshold(e) => Some(e),
            Self::Color { source, .. } => Some(source),
            Self::Validation(_) => None,
        }
    }
}

impl From<serde_yaml_ng::Error> for ParseError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<ThresholdError> for ParseError {
    fn from(e: ThresholdError) -> Self {
        Self::Threshold(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::Spec {
            gauge: "cpu".to_string(),
            source: SpecError::InvalidRange { min: 5.0, max: 1.0 },
        };
        assert_eq!(
            err.to_string(),
            "Invalid gauge 'cpu': minimum (5) must be less than maximum (1)"
        );

        let err = ParseError::Color {
            field: "palette.low".to_string(),
            source: ColorParseError::InvalidLength,
        };
        assert_eq!(
            err.to_string(),
            "Invalid color for 'palette.low': invalid hex string length (expected 6 or 8)"
        );

        let err = ParseError::Validation("duplicate gauge name 'cpu'".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: duplicate gauge name 'cpu'"
        );
    }

    #[test]
    fn test_parse_error_source() {
        let err = ParseError::from(ThresholdError::Unordered {
            low: 0.9,
            medium: 0.1,
        });
        assert!(err.source().is_some());
        assert!(ParseError::Validation(String::new()).source().is_none());
    }
}
