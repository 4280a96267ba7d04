//! Serializable summary of a completed scan.

use serde::Serialize;

use crate::finder::{CollinearFinder, DetectionStats};
use crate::segment::LineSegment;

/// Report describing one finder run, suitable for JSON output.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub segment_count: usize,
    pub stats: DetectionStats,
    pub latency_ms: f64,
    pub segments: Vec<LineSegment>,
}

impl DetectionReport {
    pub fn from_finder(finder: &CollinearFinder, latency_ms: f64) -> Self {
        Self {
            segment_count: finder.segment_count(),
            stats: *finder.stats(),
            latency_ms,
            segments: finder.segments().to_vec(),
        }
    }
}
