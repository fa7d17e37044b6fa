//! Core types for the arcgauge renderer.
//!
//! This crate turns a value and a range into a drawable 270° arc gauge:
//! - Input contract: [`GaugeSpec`], validated by [`GaugeSpecBuilder`]
//! - Geometry: [`Point`], [`ArcPath`], [`NormalizedState`]
//! - Coloring: [`GaugePalette`], [`ColorThresholds`], [`ColorBand`]
//! - Output: [`GaugeRenderer`] producing [`GaugeRender`], and SVG via [`svg::to_svg`]
//!
//! ```
//! use arcgauge_core::{GaugeRenderer, GaugeSpec};
//!
//! let spec = GaugeSpec::builder(50.0).with_label("CPU").build()?;
//! let render = GaugeRenderer::default().render(&spec);
//! assert_eq!(render.fill_end_angle, Some(270.0));
//! let document = arcgauge_core::svg::to_svg(&render);
//! assert!(document.contains("role=\"meter\""));
//! # Ok::<(), arcgauge_core::SpecError>(())
//! ```

mod arc;
mod color;
mod format;
mod geometry;
mod normalize;
mod palette;
mod render;
mod spec;
pub mod svg;

pub use arc::{fill_end_angle, ArcPath, END_ANGLE, FILL_EPSILON, START_ANGLE, TOTAL_ANGLE};
pub use color::{Color, ColorParseError};
pub use format::NumberFormat;
pub use geometry::{clockwise_from_top, Point};
pub use normalize::NormalizedState;
pub use palette::{
    ColorBand, ColorThresholds, GaugePalette, ThresholdError, GREEN_500, RED_500, YELLOW_500,
};
pub use render::{GaugeRender, GaugeRenderer, TextLine};
pub use spec::{
    GaugeSpec, GaugeSpecBuilder, SpecError, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_SIZE,
    DEFAULT_STROKE_WIDTH,
};
