//! Cubic in the Newton basis.

use std::fmt;

use linesearch_core::math::exact::{divided_differences, monomial_from_exact, rational_points, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;
use super::{downgraded, sample_values, vanishes, Basis, Model, QuadraticNewton};
use crate::knots::Knots;
use crate::shape::Shape;

/// Cubic `b0 + (x - x0)(b1 + (x - x1)(b2 + (x - x2) b3))`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicNewton {
    x: [f64; 3],
    b: [f64; 4],
    shape: Shape,
}

impl CubicNewton {
    /// Cubic through four points, divided differences computed exactly.
    ///
    /// A vanishing third divided difference yields the [`QuadraticNewton`]
    /// model through the first three points.
    ///
    /// # Errors
    /// `DuplicateKnot` or `NonFiniteKnot` for invalid points.
    #[allow(clippy::too_many_arguments)]
    pub fn interpolate_xy(
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    ) -> Result<Model, InterpolationError> {
        let q = rational_points(&[(x0, y0), (x1, y1), (x2, y2), (x3, y3)])?;
        let dd = divided_differences(&q);
        if vanishes(&dd[3]) {
            let m = QuadraticNewton::interpolate_xy(x0, y0, x1, y1, x2, y2)?;
            return Ok(downgraded(Basis::CubicNewton, m));
        }
        Ok(Model::CubicNewton(Self {
            x: [x0, x1, x2],
            b: [round(&dd[0]), round(&dd[1]), round(&dd[2]), round(&dd[3])],
            shape: Shape::exact(&monomial_from_exact(&q)),
        }))
    }

    /// Four value knots.
    pub fn valid_knots(knots: &Knots) -> bool {
        knots.values().len() == 4 && knots.slopes().is_empty() && knots.is_valid_for(3)
    }

    /// Fit to `f` at four value knots.
    pub fn interpolate<F: ScalarFunction + ?Sized>(
        f: &F,
        knots: &Knots,
    ) -> Result<Model, InterpolationError> {
        Basis::CubicNewton.check(knots)?;
        let p = sample_values(f, knots.values())?;
        Self::interpolate_xy(
            p[0].0, p[0].1, p[1].0, p[1].1, p[2].0, p[2].1, p[3].0, p[3].1,
        )
    }

    /// Divided differences `[b0, b1, b2, b3]`.
    pub fn coefficients(&self) -> [f64; 4] {
        self.b
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, x: f64) -> f64 {
        let [b0, b1, b2, b3] = self.b;
        let [d0, d1, d2] = self.x.map(|xi| x - xi);
        d0.mul_add(d1.mul_add(d2.mul_add(b3, b2), b1), b0)
    }

    pub(crate) fn slope_finite(&self, x: f64) -> f64 {
        let [_, b1, b2, b3] = self.b;
        let [d0, d1, d2] = self.x.map(|xi| x - xi);
        let r2 = d2.mul_add(b3, b2);
        let r1 = d1.mul_add(r2, b1);
        d0.mul_add(d1.mul_add(b3, r2), r1)
    }
}

impl fmt::Display for CubicNewton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubicNewton[x={:?}, b={:?}]", self.x, self.b)
    }
}
