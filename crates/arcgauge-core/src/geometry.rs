//! Geometric primitives for gauge drawing.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub};

/// A 2D point in drawing coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Point on the circle around `center` at a clockwise-from-top angle.
    ///
    /// `angle` is in degrees with 0 pointing straight up; 90 points right.
    #[must_use]
    pub fn on_circle(center: Self, radius: f64, angle: f64) -> Self {
        let rad = clockwise_from_top(angle);
        center + Self::new(radius * rad.cos(), radius * rad.sin())
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Convert a clockwise-from-top angle in degrees to standard radians.
#[must_use]
pub fn clockwise_from_top(angle: f64) -> f64 {
    ((angle - 90.0) * PI) / 180.0
}
