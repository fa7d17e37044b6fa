//! Arc geometry and SVG path data.
//!
//! Angles are degrees measured clockwise from straight up. The gauge
//! sweep runs from [`START_ANGLE`] (lower right) clockwise through the
//! bottom, left, and top to [`END_ANGLE`] (upper right).

use crate::format::NumberFormat;
use crate::geometry::Point;
use serde::Serialize;
use std::fmt;
use tracing::trace;

/// Angle where both arcs begin.
pub const START_ANGLE: f64 = 135.0;
/// Angle where the track ends.
pub const END_ANGLE: f64 = 405.0;
/// Full sweep of the track.
pub const TOTAL_ANGLE: f64 = END_ANGLE - START_ANGLE;
/// Gap kept between a full fill's endpoint and the track's endpoint.
pub const FILL_EPSILON: f64 = 0.01;

/// A circular arc between two angles, drawn clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcPath {
    /// First point of the arc
    pub start: Point,
    /// Last point of the arc
    pub end: Point,
    /// Arc radius
    pub radius: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
    /// SVG large-arc flag: set when the span exceeds 180°
    pub large_arc: bool,
    /// SVG sweep flag: set for clockwise (positive-angle) drawing
    pub sweep: bool,
}

impl ArcPath {
    /// Describe the clockwise arc from `start_angle` to `end_angle`.
    #[must_use]
    pub fn describe(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        let start = Point::on_circle(center, radius, start_angle);
        let end = Point::on_circle(center, radius, end_angle);
        let large_arc = end_angle - start_angle > 180.0;
        trace!(start_angle, end_angle, radius, large_arc, "describe arc");
        Self {
            start,
            end,
            radius,
            start_angle,
            end_angle,
            large_arc,
            sweep: true,
        }
    }

    /// The full 270° track arc.
    #[must_use]
    pub fn track(center: Point, radius: f64) -> Self {
        Self::describe(center, radius, START_ANGLE, END_ANGLE)
    }

    /// The fill arc for `percentage`, or `None` when nothing is filled.
    #[must_use]
    pub fn fill(center: Point, radius: f64, percentage: f64) -> Option<Self> {
        fill_end_angle(percentage).map(|end| Self::describe(center, radius, START_ANGLE, end))
    }

    /// Angular span in degrees.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Path data (`d` attribute) using `format` for every number.
    #[must_use]
    pub fn to_path_data(&self, format: NumberFormat) -> String {
        let n = |v: f64| format.format(v);
        format!(
            "M {} {} A {} {} 0 {} {} {} {}",
            n(self.start.x),
            n(self.start.y),
            n(self.radius),
            n(self.radius),
            u8::from(self.large_arc),
            u8::from(self.sweep),
            n(self.end.x),
            n(self.end.y),
        )
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_data(NumberFormat::Shortest))
    }
}

/// End angle of the fill for `percentage`, capped just short of
/// [`END_ANGLE`]; `None` when `percentage` is zero.
#[must_use]
pub fn fill_end_angle(percentage: f64) -> Option<f64> {
    if percentage > 0.0 {
        Some((START_ANGLE + TOTAL_ANGLE * percentage).min(END_ANGLE - FILL_EPSILON))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;
    const CENTER: Point = Point::new(80.0, 80.0);

    #[test]
    fn test_track_spans_270_with_large_arc() {
        let track = ArcPath::track(CENTER, 73.0);
        assert_eq!(track.span(), 270.0);
        assert!(track.large_arc);
        assert!(track.sweep);
    }

    #[test]
    fn test_track_endpoints_mirror_across_horizontal_axis() {
        let track = ArcPath::track(CENTER, 73.0);
        assert!((track.start.x - track.end.x).abs() < EPS);
        assert!((track.start.y - 80.0 + track.end.y - 80.0).abs() < EPS);
        // y grows downward: 135° is lower right, 405° upper right
        assert!(track.start.x > 80.0 && track.start.y > 80.0);
        assert!(track.end.x > 80.0 && track.end.y < 80.0);
    }

    #[test]
    fn test_fill_end_angle_midpoint() {
        assert_eq!(fill_end_angle(0.5), Some(270.0));
    }

    #[test]
    fn test_fill_end_angle_capped() {
        assert_eq!(fill_end_angle(1.0), Some(END_ANGLE - FILL_EPSILON));
    }

    #[test]
    fn test_fill_end_angle_none_when_empty() {
        assert_eq!(fill_end_angle(0.0), None);
    }

    #[test]
    fn test_fill_large_arc_follows_own_span() {
        let small = ArcPath::fill(CENTER, 73.0, 0.5).unwrap();
        assert_eq!(small.span(), 135.0);
        assert!(!small.large_arc);

        let large = ArcPath::fill(CENTER, 73.0, 0.9).unwrap();
        assert!(large.span() > 180.0);
        assert!(large.large_arc);
    }

    #[test]
    fn test_fill_at_midpoint_points_left() {
        let fill = ArcPath::fill(CENTER, 73.0, 0.5).unwrap();
        assert!((fill.end.x - 7.0).abs() < EPS);
        assert!((fill.end.y - 80.0).abs() < EPS);
    }

    #[test]
    fn test_path_data_layout() {
        let track = ArcPath::track(CENTER, 73.0);
        let d = track.to_path_data(NumberFormat::Fixed(2));
        assert_eq!(d, "M 131.62 131.62 A 73.00 73.00 0 1 1 131.62 28.38");
    }

    #[test]
    fn test_display_uses_shortest() {
        let track = ArcPath::track(CENTER, 73.0);
        let d = track.to_string();
        assert!(d.starts_with("M "));
        assert!(d.contains(" A 73 73 0 1 1 "));
        assert_eq!(d, track.to_path_data(NumberFormat::Shortest));
    }

    #[test]
    fn test_zero_radius_degenerates_to_center() {
        let arc = ArcPath::track(CENTER, 0.0);
        assert_eq!(arc.start, CENTER);
        assert_eq!(arc.end, CENTER);
    }
}
