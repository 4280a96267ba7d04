//! Line segments spanning maximal collinear runs.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::point::Point;
use crate::slope::Slope;

/// Segment spanning a maximal collinear run, endpoints held in point order
/// (`min` is the smallest point on the run, `max` the largest).
///
/// The canonical text form is `"(x1, y1) -> (x2, y2)"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    min: Point,
    max: Point,
}

impl LineSegment {
    /// Build a segment from two endpoints, swapping into point order if needed.
    pub fn new(a: Point, b: Point) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    /// Slope of the supporting line.
    pub fn slope(&self) -> Slope {
        self.min.slope_to(&self.max)
    }

    /// Supporting line in normal form `ax + by + c = 0` with `sqrt(a² + b²) = 1`.
    pub fn line(&self) -> Vector3<f64> {
        let a = (self.max.y() - self.min.y()) as f64;
        let b = (self.min.x() - self.max.x()) as f64;
        let c = (self.max.x() as i64 * self.min.y() as i64
            - self.min.x() as i64 * self.max.y() as i64) as f64;
        let norm = (a * a + b * b).sqrt();
        Vector3::new(a / norm, b / norm, c / norm)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.min, self.max)
    }
}
