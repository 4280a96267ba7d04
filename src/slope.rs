//! Tagged slope values and the tolerance rule used to group them.
//!
//! A slope is represented explicitly as finite / vertical / degenerate rather
//! than through IEEE infinity sentinels, so tolerance comparison never has to
//! reason about infinity arithmetic or slope signs.

use std::cmp::Ordering;

/// Default tolerance under which two finite slopes count as the same
/// line direction.
pub const DEFAULT_SLOPE_TOLERANCE: f64 = 1e-9;

/// Slope between two lattice points.
///
/// `Degenerate` marks an identical point pair and only occurs as an internal
/// sentinel; any two distinct points yield `Finite` or `Vertical`. The total
/// order is `Degenerate < Finite (ascending) < Vertical`.
#[derive(Clone, Copy, Debug)]
pub enum Slope {
    Degenerate,
    Finite(f64),
    Vertical,
}

impl Slope {
    /// Tolerance equality: both vertical, or both finite within `tol` of
    /// each other. Degenerate slopes never compare equal to anything.
    pub fn approx_eq(&self, other: &Slope, tol: f64) -> bool {
        match (self, other) {
            (Slope::Vertical, Slope::Vertical) => true,
            (Slope::Finite(a), Slope::Finite(b)) => (a - b).abs() <= tol,
            _ => false,
        }
    }

    /// Quantized identity of this slope at tolerance `tol`, or `None` for the
    /// degenerate sentinel.
    pub fn key(&self, tol: f64) -> Option<SlopeKey> {
        match self {
            Slope::Degenerate => None,
            Slope::Vertical => Some(SlopeKey::Vertical),
            Slope::Finite(v) => Some(SlopeKey::Finite((v / tol).round() as i64)),
        }
    }
}

impl PartialEq for Slope {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slope {}

impl Ord for Slope {
    fn cmp(&self, other: &Self) -> Ordering {
        use Slope::*;
        match (self, other) {
            (Degenerate, Degenerate) | (Vertical, Vertical) => Ordering::Equal,
            (Degenerate, _) => Ordering::Less,
            (_, Degenerate) => Ordering::Greater,
            (Vertical, _) => Ordering::Greater,
            (_, Vertical) => Ordering::Less,
            (Finite(a), Finite(b)) => a.total_cmp(b),
        }
    }
}

impl PartialOrd for Slope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Quantized slope bucket used as the duplicate-suppression map key.
///
/// Two tolerance-equal slopes can still round into adjacent buckets, so
/// lookups must probe [`SlopeKey::neighborhood`] and confirm hits with
/// [`Slope::approx_eq`] rather than trust the bucket alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlopeKey {
    Finite(i64),
    Vertical,
}

impl SlopeKey {
    /// The bucket itself plus both adjacent finite buckets. Vertical repeats
    /// its own key: it has no neighbors.
    pub fn neighborhood(&self) -> [SlopeKey; 3] {
        match *self {
            SlopeKey::Vertical => [SlopeKey::Vertical; 3],
            SlopeKey::Finite(k) => [
                SlopeKey::Finite(k.saturating_sub(1)),
                SlopeKey::Finite(k),
                SlopeKey::Finite(k.saturating_add(1)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_puts_degenerate_first_and_vertical_last() {
        let mut slopes = vec![
            Slope::Vertical,
            Slope::Finite(2.5),
            Slope::Degenerate,
            Slope::Finite(-3.0),
            Slope::Finite(0.0),
        ];
        slopes.sort();
        assert_eq!(
            slopes,
            vec![
                Slope::Degenerate,
                Slope::Finite(-3.0),
                Slope::Finite(0.0),
                Slope::Finite(2.5),
                Slope::Vertical,
            ]
        );
    }

    #[test]
    fn approx_eq_follows_the_tolerance_rule() {
        let tol = 1e-9;
        assert!(Slope::Vertical.approx_eq(&Slope::Vertical, tol));
        assert!(Slope::Finite(1.0).approx_eq(&Slope::Finite(1.0 + 1e-10), tol));
        assert!(!Slope::Finite(1.0).approx_eq(&Slope::Finite(1.0 + 1e-6), tol));
        assert!(!Slope::Vertical.approx_eq(&Slope::Finite(1e12), tol));
        assert!(!Slope::Degenerate.approx_eq(&Slope::Degenerate, tol));
    }

    #[test]
    fn keys_of_tolerance_equal_slopes_land_in_one_neighborhood() {
        let tol = 1e-9;
        // Straddles a bucket boundary on purpose.
        let a = Slope::Finite(1.0 + 0.49e-9);
        let b = Slope::Finite(1.0 + 0.51e-9);
        assert!(a.approx_eq(&b, tol));
        let ka = a.key(tol).unwrap();
        let kb = b.key(tol).unwrap();
        assert!(ka.neighborhood().contains(&kb));
    }

    #[test]
    fn degenerate_has_no_key() {
        assert_eq!(Slope::Degenerate.key(1e-9), None);
        assert_eq!(Slope::Vertical.key(1e-9), Some(SlopeKey::Vertical));
    }

    #[test]
    fn vertical_neighborhood_is_only_itself() {
        assert_eq!(SlopeKey::Vertical.neighborhood(), [SlopeKey::Vertical; 3]);
    }
}
