//! Exhaustive quadruple scan.
//!
//! Checks every i < j < k < l quadruple of the point-order-sorted input for
//! equal slope to the first point and emits the outermost pair, O(n⁴) time.
//! Correct only when no five input points are collinear (a longer run would
//! be reported through more than one quadruple); the fast scan in
//! [`crate::finder`] is the production path, this one serves as a
//! small-input oracle.

use crate::finder::{sorted_distinct, validate_tolerance, InputError};
use crate::point::Point;
use crate::segment::LineSegment;

/// Find every segment of exactly four collinear points by brute force.
///
/// Shares the finder's validation: duplicate points and unusable tolerances
/// are rejected before any work is done.
pub fn brute_segments(
    points: &[Point],
    slope_tolerance: f64,
) -> Result<Vec<LineSegment>, InputError> {
    validate_tolerance(slope_tolerance)?;
    let sorted = sorted_distinct(points)?;

    let n = sorted.len();
    let mut segments = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let slope = sorted[i].slope_to(&sorted[j]);
            for k in (j + 1)..n {
                if !slope.approx_eq(&sorted[i].slope_to(&sorted[k]), slope_tolerance) {
                    continue;
                }
                for l in (k + 1)..n {
                    if slope.approx_eq(&sorted[i].slope_to(&sorted[l]), slope_tolerance) {
                        segments.push(LineSegment::new(sorted[i], sorted[l]));
                        break;
                    }
                }
            }
        }
    }
    Ok(segments)
}
