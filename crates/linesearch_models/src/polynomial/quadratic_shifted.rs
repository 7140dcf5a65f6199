//! Quadratic in a monomial basis centred on an origin.

use std::fmt;

use linesearch_core::math::exact::{rational_pair, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::{downgraded, sample_slopes, sample_values, Affine, Basis, Model};
use crate::knots::Knots;
use crate::shape::Shape;

/// `a0 + a1 u + a2 u^2` with `u = x - origin` and `a2 != 0`.
///
/// Built from mixed knots: two values and one slope, or one value and two
/// slopes. The origin is the knot that appears once, which keeps the
/// coefficients small when all knots are far from zero.
///
/// # Examples
/// ```
/// use linesearch_core::domain::Interval;
/// use linesearch_core::traits::ScalarFunction;
/// use linesearch_models::polynomial::QuadraticShifted;
///
/// // f(x) = (x - 1000)^2 from f(999), f(1001) and f'(1000.5)
/// let m = QuadraticShifted::interpolate_xy2d1(999.0, 1.0, 1001.0, 1.0, 1000.5, 1.0).unwrap();
/// assert_eq!(m.argmin(&Interval::ALL), 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticShifted {
    origin: f64,
    a0: f64,
    a1: f64,
    a2: f64,
    shape: Shape,
}

impl QuadraticShifted {
    /// Quadratic in `x - origin`, downgrading when `a2 == 0`.
    pub fn make(a0: f64, a1: f64, a2: f64, origin: f64) -> Model {
        if a2 == 0.0 {
            return downgraded(
                Basis::QuadraticShifted,
                Affine::make((-a1).mul_add(origin, a0), a1),
            );
        }
        Model::QuadraticShifted(Self {
            origin,
            a0,
            a1,
            a2,
            shape: Shape::quadratic(a2, origin - 0.5 * a1 / a2),
        })
    }

    /// Values at `x0`, `x1` and slope at `x2`; origin `x2`, computed exactly.
    ///
    /// # Errors
    /// - `SingularKnots` when `x2` is exactly midway between `x0` and `x1`
    ///   (the slope then fixes no quadratic term)
    /// - `DuplicateKnot` if `x0 == x1`
    /// - `NonFiniteKnot` for non-finite input
    pub fn interpolate_xy2d1(
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        d2: f64,
    ) -> Result<Model, InterpolationError> {
        if x0 == x1 {
            return Err(InterpolationError::DuplicateKnot { x: x0 });
        }
        let (qx0, qy0) = rational_pair(x0, y0)?;
        let (qx1, qy1) = rational_pair(x1, y1)?;
        let (qx2, qd2) = rational_pair(x2, d2)?;

        let u0 = &qx0 - &qx2;
        let u1 = &qx1 - &qx2;
        let uu0 = &u0 * &u0;
        let uu1 = &u1 * &u1;
        let du2 = &uu1 - &uu0;
        if du2.is_zero() {
            return Err(InterpolationError::SingularKnots { x0, x1, x2 });
        }
        // Values with the slope term removed.
        let r0 = &qy0 - &qd2 * &u0;
        let r1 = &qy1 - &qd2 * &u1;
        let a2 = (&r1 - &r0) / &du2;
        let a0 = (r0 * uu1 - r1 * uu0) / du2;
        Ok(Self::make(round(&a0), d2, round(&a2), x2))
    }

    /// Slopes at `x0`, `x1` and value at `x2`; origin `x2`, computed exactly.
    ///
    /// # Errors
    /// `DuplicateKnot` if `x0 == x1`, `NonFiniteKnot` for non-finite input.
    pub fn interpolate_xd2y1(
        x0: f64,
        d0: f64,
        x1: f64,
        d1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<Model, InterpolationError> {
        if x0 == x1 {
            return Err(InterpolationError::DuplicateKnot { x: x0 });
        }
        let (qx0, qd0) = rational_pair(x0, d0)?;
        let (qx1, qd1) = rational_pair(x1, d1)?;
        let (qx2, _) = rational_pair(x2, y2)?;

        let z0 = &qx0 - &qx2;
        let z1 = &qx1 - &qx2;
        let dz = &z1 - &z0;
        let two = BigRational::from_integer(BigInt::from(2));
        let a1 = (&qd0 * &z1 - &qd1 * &z0) / &dz;
        let a2 = (qd1 - qd0) / (two * dz);
        Ok(Self::make(y2, round(&a1), round(&a2), x2))
    }

    /// Two value knots and one slope knot, or one value knot and two slope knots.
    pub fn valid_knots(knots: &Knots) -> bool {
        let (nv, ns) = (knots.values().len(), knots.slopes().len());
        ((nv == 2 && ns == 1) || (nv == 1 && ns == 2)) && knots.is_valid_for(2)
    }

    /// Fit to `f` at mixed knots.
    pub fn interpolate<F: ScalarFunction + ?Sized>(
        f: &F,
        knots: &Knots,
    ) -> Result<Model, InterpolationError> {
        Basis::QuadraticShifted.check(knots)?;
        let v = sample_values(f, knots.values())?;
        let d = sample_slopes(f, knots.slopes())?;
        if v.len() == 2 {
            Self::interpolate_xy2d1(v[0].0, v[0].1, v[1].0, v[1].1, d[0].0, d[0].1)
        } else {
            Self::interpolate_xd2y1(d[0].0, d[0].1, d[1].0, d[1].1, v[0].0, v[0].1)
        }
    }

    /// Expansion point.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Coefficients `[a0, a1, a2]` in `x - origin`.
    pub fn coefficients(&self) -> [f64; 3] {
        [self.a0, self.a1, self.a2]
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, x: f64) -> f64 {
        let u = x - self.origin;
        u.mul_add(u.mul_add(self.a2, self.a1), self.a0)
    }

    pub(crate) fn slope_finite(&self, x: f64) -> f64 {
        (x - self.origin).mul_add(2.0 * self.a2, self.a1)
    }
}

impl fmt::Display for QuadraticShifted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuadraticShifted[{}, {}, {}; origin={}]",
            self.a0, self.a1, self.a2, self.origin
        )
    }
}
