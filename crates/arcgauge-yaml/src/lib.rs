//! YAML gauge manifests for arcgauge.
//!
//! A manifest names a theme, optional palette overrides, thresholds, and
//! coordinate precision, plus a list of gauges. [`GaugeManifest::renderer`]
//! and [`GaugeManifest::specs`] turn it into validated core types.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::{GaugeConfig, GaugeManifest, PaletteConfig, Theme, ThresholdConfig};
