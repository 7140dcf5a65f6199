//! Argmin and asymptotic classification of polynomial models.
//!
//! A model's behaviour away from its knots is fixed by its leading nonzero
//! coefficient. [`Shape`] caches the analytic argmin together with the four
//! limits of value and slope as `x -> +inf` and `x -> -inf`:
//!
//! | leading coefficient | argmin | value +inf | value -inf | slope +inf | slope -inf |
//! |---|---|---|---|---|---|
//! | cubic `a3 > 0` | local min, or `-inf` | `+inf` | `-inf` | `+inf` | `+inf` |
//! | cubic `a3 < 0` | local min, or `+inf` | `-inf` | `+inf` | `-inf` | `-inf` |
//! | quadratic `a2 > 0` | `-a1 / 2a2` | `+inf` | `+inf` | `+inf` | `-inf` |
//! | quadratic `a2 < 0` | `+inf` | `-inf` | `-inf` | `-inf` | `+inf` |
//! | affine `a1 > 0` | `-inf` | `+inf` | `-inf` | `a1` | `a1` |
//! | affine `a1 < 0` | `+inf` | `-inf` | `+inf` | `a1` | `a1` |
//! | constant | NaN | `a0` | `a0` | `0` | `0` |

use linesearch_core::domain::Interval;
use linesearch_core::math::exact::round;
use linesearch_core::math::roots::{quadratic_roots, quadratic_roots_exact, QuadraticRoots};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

const INF: f64 = f64::INFINITY;
const NEG_INF: f64 = f64::NEG_INFINITY;

/// Value and slope of a model as `x -> +inf` and `x -> -inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Value as `x -> +inf`
    pub value_pos: f64,
    /// Value as `x -> -inf`
    pub value_neg: f64,
    /// Slope as `x -> +inf`
    pub slope_pos: f64,
    /// Slope as `x -> -inf`
    pub slope_neg: f64,
}

impl Limits {
    /// Limits of the constant `a0`.
    pub fn constant(a0: f64) -> Self {
        Self {
            value_pos: a0,
            value_neg: a0,
            slope_pos: 0.0,
            slope_neg: 0.0,
        }
    }

    /// Limits of an affine function with nonzero slope `a1`.
    pub fn affine(a1: f64) -> Self {
        let (value_pos, value_neg) = if a1 > 0.0 { (INF, NEG_INF) } else { (NEG_INF, INF) };
        Self {
            value_pos,
            value_neg,
            slope_pos: a1,
            slope_neg: a1,
        }
    }

    /// Limits of a quadratic whose leading coefficient has the sign of `a2`.
    pub fn quadratic(a2: f64) -> Self {
        if a2 > 0.0 {
            Self {
                value_pos: INF,
                value_neg: INF,
                slope_pos: INF,
                slope_neg: NEG_INF,
            }
        } else {
            Self {
                value_pos: NEG_INF,
                value_neg: NEG_INF,
                slope_pos: NEG_INF,
                slope_neg: INF,
            }
        }
    }

    /// Limits of a cubic whose leading coefficient has the sign of `a3`.
    pub fn cubic(a3: f64) -> Self {
        if a3 > 0.0 {
            Self {
                value_pos: INF,
                value_neg: NEG_INF,
                slope_pos: INF,
                slope_neg: INF,
            }
        } else {
            Self {
                value_pos: NEG_INF,
                value_neg: INF,
                slope_pos: NEG_INF,
                slope_neg: NEG_INF,
            }
        }
    }

    /// Value at a non-finite `x`: NaN for NaN, the cached limit for `±inf`,
    /// `None` for finite `x`.
    #[inline]
    pub fn value_at(&self, x: f64) -> Option<f64> {
        if x.is_nan() {
            Some(f64::NAN)
        } else if x == INF {
            Some(self.value_pos)
        } else if x == NEG_INF {
            Some(self.value_neg)
        } else {
            None
        }
    }

    /// Slope counterpart of [`Limits::value_at`].
    #[inline]
    pub fn slope_at(&self, x: f64) -> Option<f64> {
        if x.is_nan() {
            Some(f64::NAN)
        } else if x == INF {
            Some(self.slope_pos)
        } else if x == NEG_INF {
            Some(self.slope_neg)
        } else {
            None
        }
    }
}

/// Cached unconstrained argmin and asymptotic limits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    /// Local minimiser, `±inf`, or NaN when every point is minimal
    pub argmin: f64,
    /// Limits at `±inf`
    pub limits: Limits,
}

impl Shape {
    /// The constant `a0`: no minimiser.
    pub fn constant(a0: f64) -> Self {
        Self {
            argmin: f64::NAN,
            limits: Limits::constant(a0),
        }
    }

    /// Affine with slope `a1`: the minimum escapes downhill.
    pub fn affine(a1: f64) -> Self {
        let argmin = if a1 > 0.0 {
            NEG_INF
        } else if a1 < 0.0 {
            INF
        } else {
            f64::NAN
        };
        Self {
            argmin,
            limits: Limits::affine(a1),
        }
    }

    /// Quadratic with leading sign `a2` and vertex `vertex`.
    pub fn quadratic(a2: f64, vertex: f64) -> Self {
        Self {
            argmin: if a2 > 0.0 { vertex } else { INF },
            limits: Limits::quadratic(a2),
        }
    }

    /// Cubic `a0 + a1 x + a2 x^2 + a3 x^3` with `a3 != 0`.
    pub fn cubic(a1: f64, a2: f64, a3: f64) -> Self {
        Self {
            argmin: cubic_argmin(a1, a2, a3),
            limits: Limits::cubic(a3),
        }
    }

    /// Classify monomial coefficients `a0..an` (`n <= 3`) by the leading
    /// nonzero coefficient.
    pub fn monomial(a: &[f64]) -> Self {
        match leading(a.iter().map(|ai| *ai != 0.0)) {
            Some(3) => Self::cubic(a[1], a[2], a[3]),
            Some(2) => Self::quadratic(a[2], -0.5 * a[1] / a[2]),
            Some(1) => Self::affine(a[1]),
            Some(0) => Self::constant(a[0]),
            _ => Self::constant(0.0),
        }
    }

    /// Classify exact monomial coefficients `a0..an` (`n <= 3`).
    ///
    /// Signs and critical points are decided exactly; only the returned
    /// argmin and constant limit are rounded.
    pub fn exact(a: &[BigRational]) -> Self {
        match leading(a.iter().map(|ai| !ai.is_zero())) {
            Some(3) => Self {
                argmin: exact_cubic_argmin(&a[1], &a[2], &a[3]),
                limits: Limits::cubic(signum(&a[3])),
            },
            Some(2) => {
                let vertex = -(&a[1] / (&a[2] + &a[2]));
                Self::quadratic(signum(&a[2]), round(&vertex))
            }
            Some(1) => Self::affine(round(&a[1])),
            Some(0) => Self::constant(round(&a[0])),
            _ => Self::constant(0.0),
        }
    }

    /// The cached argmin if `support` contains it, NaN otherwise.
    #[inline]
    pub fn argmin_in(&self, support: &Interval) -> f64 {
        if support.contains(self.argmin) {
            self.argmin
        } else {
            f64::NAN
        }
    }
}

fn leading(mut nonzero: impl DoubleEndedIterator<Item = bool> + ExactSizeIterator) -> Option<usize> {
    nonzero.rposition(|nz| nz)
}

fn signum(q: &BigRational) -> f64 {
    if q.is_positive() {
        1.0
    } else if q.is_negative() {
        -1.0
    } else {
        0.0
    }
}

/// Local minimiser of `a0 + a1 x + a2 x^2 + a3 x^3`, `a3 != 0`.
///
/// The critical points are the roots of `a1 + 2 a2 x + 3 a3 x^2`; the one
/// where `2 a2 + 6 a3 x` is positive is the minimum. Without two distinct
/// critical points the cubic is monotone and the minimum is at `-inf` when
/// `a3 > 0`, at `+inf` otherwise.
///
/// The roots come from [`quadratic_roots`], whose refinement step divides by
/// `2 a2`. When the two critical points have opposite signs and `a2` is
/// small, the refined root carries a relative error of about
/// `eps * 2|r| / |r0 + r1|`; `CubicMonomial::make(0.0, -1.0, 1e-9, 1.0 / 3.0)`
/// reports about `0.99999997` for a minimiser at `0.999999999`. Factories that
/// fit knots use the exact critical points instead.
pub fn cubic_argmin(a1: f64, a2: f64, a3: f64) -> f64 {
    match quadratic_roots(a1, 2.0 * a2, 3.0 * a3) {
        QuadraticRoots::Two(r0, r1) => {
            let s0 = (6.0 * a3).mul_add(r0, 2.0 * a2);
            let s1 = (6.0 * a3).mul_add(r1, 2.0 * a2);
            debug_assert!(s0 != s1, "critical points share a second derivative");
            if s0 > 0.0 {
                r0
            } else {
                r1
            }
        }
        _ => {
            if a3 > 0.0 {
                NEG_INF
            } else {
                INF
            }
        }
    }
}

/// Exact local minimiser of `a0 + a1 x + a2 x^2 + a3 x^3`, `a3 != 0`, or
/// `None` when the cubic is monotone.
pub(crate) fn exact_local_min(
    a1: &BigRational,
    a2: &BigRational,
    a3: &BigRational,
) -> Option<BigRational> {
    let k = |n: i64| BigRational::from_integer(BigInt::from(n));
    match quadratic_roots_exact(a1, &(k(2) * a2), &(k(3) * a3)) {
        QuadraticRoots::Two(r0, r1) => {
            let s0 = k(6) * a3 * &r0 + k(2) * a2;
            Some(if s0.is_positive() { r0 } else { r1 })
        }
        _ => None,
    }
}

fn exact_cubic_argmin(a1: &BigRational, a2: &BigRational, a3: &BigRational) -> f64 {
    match exact_local_min(a1, a2, a3) {
        Some(r) => round(&r),
        None if a3.is_positive() => NEG_INF,
        None => INF,
    }
}
