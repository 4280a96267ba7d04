#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod finder;
pub mod point;
pub mod segment;
pub mod slope;

// Collaborators around the core scan.
pub mod brute;
pub mod config;
pub mod diagnostics;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points: finder + results.
pub use crate::finder::{CollinearFinder, DetectionStats, FinderOptions, InputError};
pub use crate::point::{Point, PointError, COORD_BOUND};
pub use crate::segment::LineSegment;
pub use crate::slope::{Slope, DEFAULT_SLOPE_TOLERANCE};

// High-level report returned alongside the segment list.
pub use crate::diagnostics::DetectionReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use collinear_points::prelude::*;
///
/// # fn main() {
/// let points: Vec<Point> = [(0, 0), (1, 2), (2, 4), (3, 6)]
///     .into_iter()
///     .map(|(x, y)| Point::new(x, y).unwrap())
///     .collect();
///
/// let finder = CollinearFinder::build(&points).unwrap();
/// println!("found {} segments", finder.segment_count());
/// # assert_eq!(finder.segment_count(), 1);
/// # }
/// ```
pub mod prelude {
    pub use crate::{CollinearFinder, FinderOptions, LineSegment, Point};
}
