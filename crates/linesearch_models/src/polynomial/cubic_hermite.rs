//! Cubic in the Hermite basis.
//!
//! With `t = (x - x0) / (x1 - x0)` the model is
//! `y0 h00(t) + y1 h01(t) + (x1 - x0)(d0 h10(t) + d1 h11(t))`, where the
//! basis functions are kept in nested monomial form:
//!
//! | basis | polynomial in `t` |
//! |---|---|
//! | `h00` | `2t^3 - 3t^2 + 1` |
//! | `h01` | `-2t^3 + 3t^2` |
//! | `h10` | `t^3 - 2t^2 + t` |
//! | `h11` | `t^3 - t^2` |

use std::fmt;

use linesearch_core::math::exact::{rational_pair, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::{downgraded, finite, sample_slopes, sample_values, Basis, Model, QuadraticShifted};
use crate::knots::Knots;
use crate::shape::{exact_local_min, Limits, Shape};

#[inline]
fn h00(t: f64) -> f64 {
    2.0_f64.mul_add(t, -3.0).mul_add(t * t, 1.0)
}

#[inline]
fn h01(t: f64) -> f64 {
    t * t * (-2.0_f64).mul_add(t, 3.0)
}

#[inline]
fn h10(t: f64) -> f64 {
    t * t.mul_add(t - 2.0, 1.0)
}

#[inline]
fn h11(t: f64) -> f64 {
    t * t.mul_add(t, -t)
}

#[inline]
fn dh00(t: f64) -> f64 {
    6.0 * t.mul_add(t, -t)
}

#[inline]
fn dh10(t: f64) -> f64 {
    t.mul_add(3.0_f64.mul_add(t, -4.0), 1.0)
}

#[inline]
fn dh11(t: f64) -> f64 {
    t * 3.0_f64.mul_add(t, -2.0)
}

/// Cubic matching value and slope at two knots.
///
/// # Examples
/// ```
/// use linesearch_core::domain::Interval;
/// use linesearch_core::traits::ScalarFunction;
/// use linesearch_models::polynomial::CubicHermite;
///
/// // x^3 - 3x from its values and slopes at 0 and 2
/// let m = CubicHermite::interpolate_xyd(0.0, 0.0, -3.0, 2.0, 2.0, 9.0).unwrap();
/// assert_eq!(m.argmin(&Interval::ALL), 1.0);
///
/// // The same cubic from the knots in the other order
/// let m = CubicHermite::interpolate_xyd(2.0, 2.0, 9.0, 0.0, 0.0, -3.0).unwrap();
/// assert_eq!(m.argmin(&Interval::ALL), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicHermite {
    x0: f64,
    dx: f64,
    y0: f64,
    y1: f64,
    d0: f64,
    d1: f64,
    shape: Shape,
}

impl CubicHermite {
    /// Cubic with value `y0` and slope `d0` at `x0`, value `y1` and slope
    /// `d1` at `x1`.
    ///
    /// The leading coefficient and the critical points are decided exactly,
    /// and the argmin is rounded once. When the leading coefficient vanishes
    /// the result is a [`QuadraticShifted`] about `x0`, or lower.
    ///
    /// # Errors
    /// `DuplicateKnot` if `x0 == x1`, `NonFiniteKnot` for non-finite input.
    pub fn interpolate_xyd(
        x0: f64,
        y0: f64,
        d0: f64,
        x1: f64,
        y1: f64,
        d1: f64,
    ) -> Result<Model, InterpolationError> {
        finite(x0, y0)?;
        finite(x1, y1)?;
        if x0 == x1 {
            return Err(InterpolationError::DuplicateKnot { x: x0 });
        }
        let (qx0, qd0) = rational_pair(x0, d0)?;
        let (qx1, qd1) = rational_pair(x1, d1)?;
        let (_, qy0) = rational_pair(x0, y0)?;
        let (_, qy1) = rational_pair(x1, y1)?;

        // Monomial coefficients in t: A2 t^2 + A3 t^3 on top of y0 + dx d0 t.
        let k = |n: i64| BigRational::from_integer(BigInt::from(n));
        let dx = &qx1 - &qx0;
        let dy = &qy1 - &qy0;
        let a2 = k(3) * &dy - &dx * (k(2) * &qd0 + &qd1);
        let a3 = &dx * (&qd0 + &qd1) - k(2) * &dy;
        if a3.is_zero() {
            let a2 = a2 / (&dx * &dx);
            return Ok(downgraded(
                Basis::CubicHermite,
                QuadraticShifted::make(y0, d0, round(&a2), x0),
            ));
        }
        // Sign of the x^3 coefficient A3 / dx^3
        let leading = if a3.is_positive() == dx.is_positive() { 1.0 } else { -1.0 };
        // Critical points in t, mapped back through x = x0 + dx t. The
        // discriminant is 4 (v^2 - d0 d1) with v = d0 + d1 - 3 dy / dx.
        let argmin = match exact_local_min(&(&dx * &qd0), &a2, &a3) {
            Some(t) => round(&(&qx0 + &dx * t)),
            None if leading > 0.0 => f64::NEG_INFINITY,
            None => f64::INFINITY,
        };
        Ok(Model::CubicHermite(Self {
            x0,
            dx: x1 - x0,
            y0,
            y1,
            d0,
            d1,
            shape: Shape {
                argmin,
                limits: Limits::cubic(leading),
            },
        }))
    }

    /// Value and slope knots at the same two x-coordinates.
    pub fn valid_knots(knots: &Knots) -> bool {
        knots.values().len() == 2 && knots.same_coordinates() && knots.is_valid_for(3)
    }

    /// Fit to `f` by value and slope at two knots.
    pub fn interpolate<F: ScalarFunction + ?Sized>(
        f: &F,
        knots: &Knots,
    ) -> Result<Model, InterpolationError> {
        Basis::CubicHermite.check(knots)?;
        let v = sample_values(f, knots.values())?;
        let d = sample_slopes(f, knots.values())?;
        Self::interpolate_xyd(v[0].0, v[0].1, d[0].1, v[1].0, v[1].1, d[1].1)
    }

    /// First knot: `(x0, y0, d0)`.
    pub fn start(&self) -> (f64, f64, f64) {
        (self.x0, self.y0, self.d0)
    }

    /// Second knot: `(x1, y1, d1)`.
    pub fn end(&self) -> (f64, f64, f64) {
        (self.x0 + self.dx, self.y1, self.d1)
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, x: f64) -> f64 {
        let t = (x - self.x0) / self.dx;
        self.y0.mul_add(
            h00(t),
            self.y1
                .mul_add(h01(t), self.dx * self.d0.mul_add(h10(t), self.d1 * h11(t))),
        )
    }

    pub(crate) fn slope_finite(&self, x: f64) -> f64 {
        let t = (x - self.x0) / self.dx;
        // dh01 == -dh00
        let dy = (self.y0 - self.y1) * dh00(t) / self.dx;
        dy + self.d0.mul_add(dh10(t), self.d1 * dh11(t))
    }
}

impl fmt::Display for CubicHermite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x1, y1, d1) = self.end();
        write!(
            f,
            "CubicHermite[{}, {}, {}; {}, {}, {}]",
            self.x0, self.y0, self.d0, x1, y1, d1
        )
    }
}
