//! Fast maximal-collinear-run scan.
//!
//! The finder sorts its input by point order, then treats each point in turn
//! as an anchor: the points after it are sorted by slope to the anchor, which
//! brings every collinear candidate adjacent, and the sorted tail is scanned
//! for maximal runs of tolerance-equal slope. A run of k tail points plus the
//! anchor describes k+1 collinear points; runs spanning at least
//! `min_points` become candidate segments.
//!
//! Because only the tail after the anchor is sorted, a run discovered at a
//! later anchor can be a sub-run of a maximal segment found earlier. To
//! report each infinite line exactly once, the minimum endpoint of every
//! emitted segment is recorded under a quantized slope key; a candidate whose
//! minimum endpoint is collinear (under the tolerance rule) with a recorded
//! origin of the same key is a sub-run and is dropped. Lookups probe the
//! adjacent quantization buckets as well, so tolerance-equal slopes that
//! round apart still collide.
//!
//! Complexity: one O(n log n) tail sort plus a linear scan per anchor, for
//! O(n² log n) time and O(n) working space overall. The scan is synchronous
//! and pure; validation runs before any algorithmic work, so a rejected input
//! never leaves a partial result behind.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::point::Point;
use crate::segment::LineSegment;
use crate::slope::{Slope, SlopeKey, DEFAULT_SLOPE_TOLERANCE};

/// Options controlling run acceptance and slope grouping.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FinderOptions {
    /// Tolerance under which two finite slopes count as the same direction.
    pub slope_tolerance: f64,
    /// Minimum number of collinear points (anchor included) a run must span.
    pub min_points: usize,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            slope_tolerance: DEFAULT_SLOPE_TOLERANCE,
            min_points: 4,
        }
    }
}

/// Reasons why the finder may reject its input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputError {
    /// Two input points compare equal under point order.
    DuplicatePoint { point: Point },
    /// `min_points` below 2 cannot describe a segment.
    MinPointsTooSmall { min_points: usize },
    /// The slope tolerance must be a positive finite value.
    BadTolerance { tolerance: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::DuplicatePoint { point } => {
                write!(f, "duplicate point {point} in input")
            }
            InputError::MinPointsTooSmall { min_points } => {
                write!(f, "min_points must be at least 2 (got {min_points})")
            }
            InputError::BadTolerance { tolerance } => {
                write!(f, "slope tolerance must be positive and finite (got {tolerance})")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Counters gathered during one scan.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionStats {
    /// Anchors with a non-empty tail.
    pub anchors: usize,
    /// Runs long enough to form a candidate segment.
    pub candidate_runs: usize,
    /// Candidates dropped as sub-runs of an earlier maximal segment.
    pub duplicates_suppressed: usize,
}

/// Finds every maximal run of `min_points` or more collinear points.
///
/// The segment list is built once at construction and immutable afterward.
#[derive(Clone, Debug)]
pub struct CollinearFinder {
    segments: Vec<LineSegment>,
    stats: DetectionStats,
    options: FinderOptions,
}

impl CollinearFinder {
    /// Scan `points` with default options (four-point runs, 1e-9 tolerance).
    pub fn build(points: &[Point]) -> Result<Self, InputError> {
        Self::build_with_options(points, FinderOptions::default())
    }

    /// Scan `points` for maximal collinear runs.
    ///
    /// Fails eagerly if the options are unusable or two input points compare
    /// equal under point order.
    pub fn build_with_options(
        points: &[Point],
        options: FinderOptions,
    ) -> Result<Self, InputError> {
        validate_options(&options)?;
        let sorted = sorted_distinct(points)?;

        let mut scan = Scan::new(options);
        scan.run(&sorted);
        debug!(
            "collinear scan: {} points, {} anchors, {} candidate runs, {} suppressed, {} segments",
            sorted.len(),
            scan.stats.anchors,
            scan.stats.candidate_runs,
            scan.stats.duplicates_suppressed,
            scan.segments.len()
        );

        Ok(Self {
            segments: scan.segments,
            stats: scan.stats,
            options,
        })
    }

    /// Number of maximal segments found.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Segments in discovery order.
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn stats(&self) -> &DetectionStats {
        &self.stats
    }

    pub fn options(&self) -> &FinderOptions {
        &self.options
    }
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<(), InputError> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(InputError::BadTolerance { tolerance });
    }
    Ok(())
}

fn validate_options(options: &FinderOptions) -> Result<(), InputError> {
    validate_tolerance(options.slope_tolerance)?;
    if options.min_points < 2 {
        return Err(InputError::MinPointsTooSmall {
            min_points: options.min_points,
        });
    }
    Ok(())
}

/// Copy the input sorted by point order, rejecting duplicates.
pub(crate) fn sorted_distinct(points: &[Point]) -> Result<Vec<Point>, InputError> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    for pair in sorted.windows(2) {
        if pair[0] == pair[1] {
            return Err(InputError::DuplicatePoint { point: pair[0] });
        }
    }
    Ok(sorted)
}

struct Scan {
    options: FinderOptions,
    segments: Vec<LineSegment>,
    stats: DetectionStats,
    /// Minimum endpoints of emitted segments, bucketed by quantized slope.
    recorded: HashMap<SlopeKey, Vec<Point>>,
    tail: Vec<Point>,
}

impl Scan {
    fn new(options: FinderOptions) -> Self {
        Self {
            options,
            segments: Vec::new(),
            stats: DetectionStats::default(),
            recorded: HashMap::new(),
            tail: Vec::new(),
        }
    }

    fn run(&mut self, sorted: &[Point]) {
        for (i, anchor) in sorted.iter().enumerate() {
            if i + 1 >= sorted.len() {
                break;
            }
            self.stats.anchors += 1;
            self.tail.clear();
            self.tail.extend_from_slice(&sorted[i + 1..]);
            self.tail.sort_unstable_by(anchor.slope_order());
            self.scan_anchor(*anchor);
        }
    }

    /// Walk the slope-sorted tail, splitting it into maximal runs of
    /// tolerance-equal slope to the anchor.
    fn scan_anchor(&mut self, anchor: Point) {
        let mut start = 0;
        while start < self.tail.len() {
            let slope = anchor.slope_to(&self.tail[start]);
            let mut end = start + 1;
            while end < self.tail.len()
                && slope.approx_eq(
                    &anchor.slope_to(&self.tail[end]),
                    self.options.slope_tolerance,
                )
            {
                end += 1;
            }
            if end - start + 1 >= self.options.min_points {
                self.stats.candidate_runs += 1;
                self.accept_candidate(anchor, start, end, slope);
            }
            start = end;
        }
    }

    fn accept_candidate(&mut self, anchor: Point, start: usize, end: usize, slope: Slope) {
        let mut lo = anchor;
        let mut hi = anchor;
        for p in &self.tail[start..end] {
            if *p < lo {
                lo = *p;
            }
            if *p > hi {
                hi = *p;
            }
        }

        if self.is_recorded(lo, slope) {
            self.stats.duplicates_suppressed += 1;
            return;
        }
        // Distinct points never produce a degenerate slope.
        let Some(key) = slope.key(self.options.slope_tolerance) else {
            return;
        };
        self.recorded.entry(key).or_default().push(lo);
        self.segments.push(LineSegment::new(lo, hi));
    }

    /// A candidate whose minimum endpoint lies on a line already recorded
    /// under the same slope key is a sub-run of an earlier maximal segment.
    ///
    /// The minimum of a candidate is always its own anchor, and every anchor
    /// is visited once, so a genuine sub-run has a minimum distinct from the
    /// recorded origin; the collinearity test alone decides.
    fn is_recorded(&self, candidate_min: Point, slope: Slope) -> bool {
        let Some(key) = slope.key(self.options.slope_tolerance) else {
            return false;
        };
        for bucket in key.neighborhood() {
            let Some(origins) = self.recorded.get(&bucket) else {
                continue;
            };
            for origin in origins {
                if candidate_min
                    .slope_to(origin)
                    .approx_eq(&slope, self.options.slope_tolerance)
                {
                    return true;
                }
            }
        }
        false
    }
}
