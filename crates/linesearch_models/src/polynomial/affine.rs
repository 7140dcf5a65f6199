//! Degree-1 model.

use std::fmt;

use linesearch_core::math::exact::{exact_monomial_coefficients, rational_pair, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;

use super::{downgraded, finite, sample_slopes, sample_values, Basis, Constant, Model};
use crate::knots::Knots;
use crate::shape::Shape;

/// The line `a0 + a1 x` with `a1 != 0`.
///
/// The argmin escapes downhill: `-inf` for a rising line, `+inf` for a
/// falling one.
///
/// # Examples
/// ```
/// use linesearch_core::domain::Interval;
/// use linesearch_core::traits::ScalarFunction;
/// use linesearch_models::polynomial::{Affine, Model};
///
/// // f(x) = x sampled at 0.999 and 1.000
/// let m = Affine::interpolate_xy(0.999, 0.999, 1.0, 1.0).unwrap();
/// match &m {
///     Model::Affine(a) => assert_eq!((a.a0(), a.a1()), (0.0, 1.0)),
///     other => panic!("expected affine, got {}", other),
/// }
/// assert_eq!(m.argmin(&Interval::ALL), f64::NEG_INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine {
    a0: f64,
    a1: f64,
    shape: Shape,
}

impl Affine {
    /// Line with translation `a0` and slope `a1`; a zero slope gives a [`Constant`].
    pub fn make(a0: f64, a1: f64) -> Model {
        if a1 == 0.0 {
            return downgraded(Basis::Affine, Constant::make(a0));
        }
        Model::Affine(Self {
            a0,
            a1,
            shape: Shape::affine(a1),
        })
    }

    /// Line through `(x0, y0)` and `(x1, y1)`, coefficients computed exactly.
    ///
    /// # Errors
    /// `DuplicateKnot` if `x0 == x1`, `NonFiniteKnot` for non-finite input.
    pub fn interpolate_xy(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Model, InterpolationError> {
        let a = exact_monomial_coefficients(&[(x0, y0), (x1, y1)])?;
        Ok(Self::make(round(&a[0]), round(&a[1])))
    }

    /// Line through `(x0, y0)` with slope `d1` (sampled at another knot).
    ///
    /// # Errors
    /// `NonFiniteKnot` for non-finite input.
    pub fn interpolate_xyd(x0: f64, y0: f64, d1: f64) -> Result<Model, InterpolationError> {
        finite(x0, y0)?;
        let (qx, qd) = rational_pair(x0, d1)?;
        if d1 == 0.0 {
            return Ok(downgraded(Basis::Affine, Constant::make(y0)));
        }
        let (_, qy) = rational_pair(x0, y0)?;
        let a0 = qy - qd * qx;
        Ok(Self::make(round(&a0), d1))
    }

    /// Two value knots, or one value knot and one slope knot.
    pub fn valid_knots(knots: &Knots) -> bool {
        let (nv, ns) = (knots.values().len(), knots.slopes().len());
        ((nv == 2 && ns == 0) || (nv == 1 && ns == 1)) && knots.is_valid_for(1)
    }

    /// Fit a line to `f` at `knots`.
    pub fn interpolate<F: ScalarFunction + ?Sized>(
        f: &F,
        knots: &Knots,
    ) -> Result<Model, InterpolationError> {
        Basis::Affine.check(knots)?;
        let v = sample_values(f, knots.values())?;
        if knots.slopes().is_empty() {
            Self::interpolate_xy(v[0].0, v[0].1, v[1].0, v[1].1)
        } else {
            let d = sample_slopes(f, knots.slopes())?;
            Self::interpolate_xyd(v[0].0, v[0].1, d[0].1)
        }
    }

    /// Translation (value at zero).
    pub fn a0(&self) -> f64 {
        self.a0
    }

    /// Slope.
    pub fn a1(&self) -> f64 {
        self.a1
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, x: f64) -> f64 {
        self.a1.mul_add(x, self.a0)
    }

    pub(crate) fn slope_finite(&self, _x: f64) -> f64 {
        self.a1
    }
}

impl fmt::Display for Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Affine[{}, {}]", self.a0, self.a1)
    }
}
