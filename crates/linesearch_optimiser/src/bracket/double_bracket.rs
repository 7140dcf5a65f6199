//! Three strictly increasing points.

use std::fmt;

use linesearch_core::domain::Interval;
use linesearch_core::types::SolverError;

/// Immutable triple `x0 < x1 < x2`.
///
/// # Examples
/// ```
/// use linesearch_optimiser::bracket::DoubleBracket;
///
/// let b = DoubleBracket::make(3.0, 1.0, 2.0).unwrap();
/// assert_eq!((b.x0(), b.x1(), b.x2()), (1.0, 2.0, 3.0));
/// assert!(DoubleBracket::make(1.0, 2.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoubleBracket {
    x0: f64,
    x1: f64,
    x2: f64,
}

impl DoubleBracket {
    /// Sort three distinct numbers into a bracket.
    ///
    /// # Errors
    ///
    /// `SolverError::NotDistinct` if two arguments are equal or any is NaN.
    pub fn make(a: f64, b: f64, c: f64) -> Result<Self, SolverError> {
        // NaN compares unequal to itself, so test orderability explicitly.
        let distinct = (a < b || b < a) && (b < c || c < b) && (a < c || c < a);
        if !distinct {
            return Err(SolverError::NotDistinct { a, b, c });
        }
        let (x0, x1, x2) = if a < b {
            if b < c {
                (a, b, c)
            } else if a < c {
                (a, c, b)
            } else {
                (c, a, b)
            }
        } else if a < c {
            (b, a, c)
        } else if b < c {
            (b, c, a)
        } else {
            (c, b, a)
        };
        Ok(Self { x0, x1, x2 })
    }

    /// Smallest point.
    #[inline]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Middle point.
    #[inline]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Largest point.
    #[inline]
    pub fn x2(&self) -> f64 {
        self.x2
    }

    /// The points in increasing order.
    pub fn points(&self) -> [f64; 3] {
        [self.x0, self.x1, self.x2]
    }

    /// Closed interval `[x0, x2]`.
    pub fn interval(&self) -> Interval {
        Interval::closed(self.x0, self.x2)
    }
}

impl fmt::Display for DoubleBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DoubleBracket({:E},{:E},{:E})", self.x0, self.x1, self.x2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_every_permutation_sorted() {
        let (a, b, c) = (-1.5, 0.25, 4.0);
        let perms = [
            (a, b, c),
            (a, c, b),
            (b, a, c),
            (b, c, a),
            (c, a, b),
            (c, b, a),
        ];
        for (p, q, r) in perms {
            let bracket = DoubleBracket::make(p, q, r).unwrap();
            assert_eq!(
                bracket.points(),
                [a, b, c],
                "Expected sorted points for ({}, {}, {})",
                p,
                q,
                r
            );
        }
    }

    #[test]
    fn test_ties_rejected() {
        for (a, b, c) in [(1.0, 1.0, 2.0), (1.0, 2.0, 2.0), (2.0, 1.0, 2.0), (0.0, -0.0, 1.0)] {
            assert_eq!(
                DoubleBracket::make(a, b, c),
                Err(SolverError::NotDistinct { a, b, c })
            );
        }
    }

    #[test]
    fn test_nan_rejected() {
        assert!(DoubleBracket::make(f64::NAN, 1.0, 2.0).is_err());
        assert!(DoubleBracket::make(0.0, f64::NAN, 2.0).is_err());
        assert!(DoubleBracket::make(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_infinite_endpoints_allowed() {
        let b = DoubleBracket::make(f64::INFINITY, 0.0, f64::NEG_INFINITY).unwrap();
        assert_eq!(b.x0(), f64::NEG_INFINITY);
        assert_eq!(b.x2(), f64::INFINITY);
        assert_eq!(b.interval(), Interval::ALL);
    }

    // ========================================
    // Accessors and display
    // ========================================

    #[test]
    fn test_interval_is_closed_hull() {
        let b = DoubleBracket::make(2.0, -1.0, 0.5).unwrap();
        let i = b.interval();
        assert!(i.is_closed());
        assert_eq!((i.lower(), i.upper()), (-1.0, 2.0));
        assert!(i.contains(b.x1()));
    }

    #[test]
    fn test_display() {
        let b = DoubleBracket::make(0.0, 1.0, 2.5).unwrap();
        assert_eq!(format!("{}", b), "DoubleBracket(0E0,1E0,2.5E0)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let b = DoubleBracket::make(0.0, 1.0, 2.5).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: DoubleBracket = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
