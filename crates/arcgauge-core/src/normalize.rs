//! Value clamping and normalization.

use crate::spec::GaugeSpec;
use serde::Serialize;

/// Value position within the gauge range, recomputed per render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedState {
    /// Value bounded to `[min, max]`.
    pub clamped: f64,
    /// `(clamped - min) / (max - min)`, always in `[0, 1]`.
    pub percentage: f64,
}

impl NormalizedState {
    /// Normalize the spec's value against its range.
    #[must_use]
    pub fn from_spec(spec: &GaugeSpec) -> Self {
        Self::compute(spec.value(), spec.min(), spec.max())
    }

    /// Normalize `value` against `[min, max]`; requires `min < max`.
    #[must_use]
    pub fn compute(value: f64, min: f64, max: f64) -> Self {
        let clamped = value.max(min).min(max);
        let percentage = ((clamped - min) / (max - min)).clamp(0.0, 1.0);
        Self {
            clamped,
            percentage,
        }
    }

    /// True when the value sits at (or below) the range minimum.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.percentage <= 0.0
    }
}
