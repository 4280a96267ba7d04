//! Integer lattice points and their ordering/slope primitives.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::slope::Slope;

/// Exclusive upper bound for point coordinates.
pub const COORD_BOUND: i32 = 32768;

/// Immutable 2D integer point on the lattice `[0, COORD_BOUND)²`.
///
/// Points are totally ordered by `y` ascending, ties broken by `x` ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Point {
    x: i32,
    y: i32,
}

/// Reasons why constructing a [`Point`] may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointError {
    OutOfRange { x: i32, y: i32, bound: i32 },
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::OutOfRange { x, y, bound } => {
                write!(f, "coordinates ({x}, {y}) outside [0, {bound})")
            }
        }
    }
}

impl std::error::Error for PointError {}

impl Point {
    /// Construct a point, rejecting coordinates outside `[0, COORD_BOUND)`.
    pub fn new(x: i32, y: i32) -> Result<Self, PointError> {
        if x < 0 || y < 0 || x >= COORD_BOUND || y >= COORD_BOUND {
            return Err(PointError::OutOfRange {
                x,
                y,
                bound: COORD_BOUND,
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Slope of the line from `self` to `other`.
    ///
    /// Vertical pairs yield [`Slope::Vertical`]; an identical pair yields the
    /// [`Slope::Degenerate`] sentinel. Horizontal pairs always yield exactly
    /// `Finite(0.0)` so a signed negative zero can never break slope grouping.
    pub fn slope_to(&self, other: &Point) -> Slope {
        if self == other {
            return Slope::Degenerate;
        }
        if self.x == other.x {
            return Slope::Vertical;
        }
        if self.y == other.y {
            return Slope::Finite(0.0);
        }
        Slope::Finite((other.y - self.y) as f64 / (other.x - self.x) as f64)
    }

    /// Comparator ordering other points by their slope to `self`, ascending.
    ///
    /// Used to bring collinear candidates adjacent to each other before the
    /// run scan in [`crate::finder`].
    pub fn slope_order(&self) -> impl Fn(&Point, &Point) -> Ordering {
        let origin = *self;
        move |a, b| origin.slope_to(a).cmp(&origin.slope_to(b))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl TryFrom<(i32, i32)> for Point {
    type Error = PointError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Point::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(Point::new(-1, 0).is_err());
        assert!(Point::new(0, -5).is_err());
        assert!(Point::new(COORD_BOUND, 0).is_err());
        assert!(Point::new(0, COORD_BOUND).is_err());
        assert!(Point::new(COORD_BOUND - 1, COORD_BOUND - 1).is_ok());
    }

    #[test]
    fn order_is_by_y_then_x() {
        assert!(pt(5, 1) < pt(0, 2));
        assert!(pt(1, 3) < pt(2, 3));
        assert_eq!(pt(4, 4).cmp(&pt(4, 4)), Ordering::Equal);
    }

    #[test]
    fn slope_to_handles_special_cases() {
        let origin = pt(2, 3);
        assert_eq!(origin.slope_to(&origin), Slope::Degenerate);
        assert_eq!(origin.slope_to(&pt(2, 9)), Slope::Vertical);
        match origin.slope_to(&pt(7, 3)) {
            Slope::Finite(v) => {
                assert_eq!(v, 0.0);
                assert!(v.is_sign_positive(), "horizontal slope must not be -0.0");
            }
            other => panic!("expected finite slope, got {other:?}"),
        }
        // Horizontal in the decreasing-x direction must match as well.
        assert_eq!(origin.slope_to(&pt(0, 3)), Slope::Finite(0.0));
        assert_eq!(origin.slope_to(&pt(4, 7)), Slope::Finite(2.0));
        assert_eq!(origin.slope_to(&pt(0, 4)), Slope::Finite(-0.5));
    }

    #[test]
    fn slope_order_sorts_ascending() {
        let origin = pt(0, 0);
        let mut others = vec![pt(1, 3), pt(2, 2), pt(3, 1), pt(0, 5)];
        others.sort_by(origin.slope_order());
        assert_eq!(others, vec![pt(3, 1), pt(2, 2), pt(1, 3), pt(0, 5)]);
    }

    #[test]
    fn display_matches_canonical_form() {
        assert_eq!(pt(17, 42).to_string(), "(17, 42)");
    }
}
