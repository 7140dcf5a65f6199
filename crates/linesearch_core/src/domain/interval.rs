//! Closed and half-open real intervals.

use std::fmt;

/// Whether the upper endpoint belongs to the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntervalKind {
    /// `[lower, upper]`
    Closed,
    /// `[lower, upper)`
    HalfOpen,
}

/// Immutable interval `[lower, upper]` or `[lower, upper)` with `lower <= upper`.
///
/// Constructors accept their endpoints in either order. An endpoint that is
/// NaN yields an interval that contains nothing.
///
/// # Examples
/// ```
/// use linesearch_core::domain::Interval;
///
/// let i = Interval::closed(3.0, 1.0);
/// assert_eq!(i.lower(), 1.0);
/// assert_eq!(i.upper(), 3.0);
/// assert_eq!(i.width(), 2.0);
///
/// let wider = i.expand(1.0);
/// assert_eq!((wider.lower(), wider.upper()), (0.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    lower: f64,
    upper: f64,
    kind: IntervalKind,
}

impl Interval {
    /// The whole extended real line, `[-inf, +inf]`.
    pub const ALL: Interval = Interval {
        lower: f64::NEG_INFINITY,
        upper: f64::INFINITY,
        kind: IntervalKind::Closed,
    };

    fn sorted(x0: f64, x1: f64, kind: IntervalKind) -> Self {
        let (lower, upper) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        Self { lower, upper, kind }
    }

    /// Closed interval spanning `x0` and `x1`.
    pub fn closed(x0: f64, x1: f64) -> Self {
        Self::sorted(x0, x1, IntervalKind::Closed)
    }

    /// Half-open interval `[min(x0, x1), max(x0, x1))`.
    pub fn half_open(x0: f64, x1: f64) -> Self {
        Self::sorted(x0, x1, IntervalKind::HalfOpen)
    }

    /// Smallest closed interval containing every point, ignoring NaNs.
    ///
    /// Returns `None` when `points` holds no comparable value.
    pub fn closed_hull(points: &[f64]) -> Option<Self> {
        hull(points).map(|(lo, hi)| Self::closed(lo, hi))
    }

    /// Half-open interval from the minimum to the maximum of `points`.
    pub fn half_open_hull(points: &[f64]) -> Option<Self> {
        hull(points).map(|(lo, hi)| Self::half_open(lo, hi))
    }

    /// Lower endpoint.
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper endpoint.
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Interval kind.
    #[inline]
    pub fn kind(&self) -> IntervalKind {
        self.kind
    }

    /// Returns true for `[lower, upper]`.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.kind == IntervalKind::Closed
    }

    /// `upper - lower`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Membership test. NaN is never contained.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        match self.kind {
            IntervalKind::Closed => self.lower <= x && x <= self.upper,
            IntervalKind::HalfOpen => self.lower <= x && x < self.upper,
        }
    }

    /// Smallest interval of the same family that also contains `x`.
    ///
    /// A half-open interval covering a point at or above its open end
    /// becomes the closed interval `[lower, x]`.
    ///
    /// # Panics
    /// Panics if `x` is NaN.
    pub fn cover(&self, x: f64) -> Self {
        assert!(!x.is_nan(), "cannot cover NaN");
        if self.contains(x) {
            return *self;
        }
        if x < self.lower {
            return Self::sorted(x, self.upper, self.kind);
        }
        Self::closed(self.lower, x)
    }

    /// Symmetric widening: the width is multiplied by `1 + r`.
    ///
    /// # Panics
    /// Panics if `r` is not positive.
    pub fn expand(&self, r: f64) -> Self {
        assert!(r > 0.0, "expansion ratio must be positive");
        let dx = 0.5 * r * self.width();
        Self::sorted(self.lower - dx, self.upper + dx, self.kind)
    }
}

fn hull(points: &[f64]) -> Option<(f64, f64)> {
    points
        .iter()
        .filter(|x| !x.is_nan())
        .fold(None, |acc, &x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IntervalKind::Closed => write!(f, "[{},{}]", self.lower, self.upper),
            IntervalKind::HalfOpen => write!(f, "[{},{})", self.lower, self.upper),
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn test_cover_contains_point(
            a in -1e6_f64..1e6,
            b in -1e6_f64..1e6,
            x in -1e7_f64..1e7,
            closed in any::<bool>(),
        ) {
            prop_assume!(a != b);
            let i = if closed { Interval::closed(a, b) } else { Interval::half_open(a, b) };
            let c = i.cover(x);
            prop_assert!(c.contains(x));
            prop_assert!(c.lower() <= i.lower());
            prop_assert!(c.upper() >= i.upper());
        }

        #[test]
        fn test_expand_keeps_center(a in -1e3_f64..1e3, w in 1e-3_f64..1e3, r in 1e-3_f64..10.0) {
            let i = Interval::closed(a, a + w);
            let e = i.expand(r);
            let c0 = 0.5 * (i.lower() + i.upper());
            let c1 = 0.5 * (e.lower() + e.upper());
            prop_assert!((c0 - c1).abs() <= 1e-9 * (1.0 + c0.abs() + w * r));
            prop_assert!((e.width() - i.width() * (1.0 + r)).abs() <= 1e-9 * e.width());
        }
    }
}
