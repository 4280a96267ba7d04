//! I/O helpers for point files and JSON.
//!
//! - `parse_points` / `load_points`: read the text point format (first
//!   integer is the count n, followed by n whitespace-separated `x y` pairs).
//! - `write_json_file`: pretty-print a serializable value to disk.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::point::Point;

/// Upper bound on the capacity reserved from a file's claimed point count.
const PREALLOC_CAP: usize = 1 << 16;

/// Parse a point set from text: the count first, then `x y` pairs.
pub fn parse_points(text: &str) -> Result<Vec<Point>, String> {
    let mut tokens = text.split_whitespace();
    let count = next_int(&mut tokens, "point count")?;
    if count < 0 {
        return Err(format!("negative point count {count}"));
    }
    // The header count is unvalidated input; cap the pre-allocation so a
    // bogus count surfaces as a truncation error instead of an abort.
    let mut points = Vec::with_capacity((count as usize).min(PREALLOC_CAP));
    for i in 0..count {
        let x = next_int(&mut tokens, "x coordinate")?;
        let y = next_int(&mut tokens, "y coordinate")?;
        let point = Point::new(x, y).map_err(|e| format!("point {i}: {e}"))?;
        points.push(point);
    }
    Ok(points)
}

/// Load a point set from a file in the text format.
pub fn load_points(path: &Path) -> Result<Vec<Point>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    parse_points(&contents).map_err(|e| format!("{}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

fn next_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<i32, String> {
    let token = tokens
        .next()
        .ok_or_else(|| format!("unexpected end of input reading {what}"))?;
    token
        .parse::<i32>()
        .map_err(|e| format!("invalid {what} {token:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_count_prefixed_pairs() {
        let text = "4\n1 1\n2 2\n3 3\n4 4\n";
        let points = parse_points(text).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], Point::new(4, 4).unwrap());
    }

    #[test]
    fn huge_claimed_count_fails_instead_of_allocating() {
        let err = parse_points("2000000000\n1 1\n").unwrap_err();
        assert!(err.contains("unexpected end of input"), "{err}");
    }

    #[test]
    fn reports_truncated_input() {
        let err = parse_points("3\n1 1\n2 2\n").unwrap_err();
        assert!(err.contains("unexpected end of input"), "{err}");
    }

    #[test]
    fn reports_out_of_range_points_with_index() {
        let err = parse_points("1\n40000 3\n").unwrap_err();
        assert!(err.contains("point 0"), "{err}");
    }

    #[test]
    fn reports_malformed_tokens() {
        let err = parse_points("two\n").unwrap_err();
        assert!(err.contains("invalid point count"), "{err}");
    }
}
