//! Quadratic in the monomial basis.

use std::fmt;

use linesearch_core::math::exact::{exact_monomial_coefficients, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;

use super::{downgraded, sample_values, Affine, Basis, Model};
use crate::knots::Knots;
use crate::shape::Shape;

/// `a0 + a1 x + a2 x^2` with `a2 != 0`, evaluated by fused Horner steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticMonomial {
    a0: f64,
    a1: f64,
    a2: f64,
    shape: Shape,
}

impl QuadraticMonomial {
    /// Quadratic from coefficients, downgrading when `a2 == 0`.
    pub fn make(a0: f64, a1: f64, a2: f64) -> Model {
        if a2 == 0.0 {
            return downgraded(Basis::QuadraticMonomial, Affine::make(a0, a1));
        }
        Model::QuadraticMonomial(Self {
            a0,
            a1,
            a2,
            shape: Shape::quadratic(a2, -0.5 * a1 / a2),
        })
    }

    /// Quadratic through three points; coefficients and vertex are derived
    /// exactly and rounded once.
    ///
    /// # Errors
    /// `DuplicateKnot` or `NonFiniteKnot` for invalid points.
    pub fn interpolate_xy(
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<Model, InterpolationError> {
        let q = exact_monomial_coefficients(&[(x0, y0), (x1, y1), (x2, y2)])?;
        let [a0, a1, a2] = [round(&q[0]), round(&q[1]), round(&q[2])];
        if a2 == 0.0 {
            return Ok(downgraded(Basis::QuadraticMonomial, Affine::make(a0, a1)));
        }
        Ok(Model::QuadraticMonomial(Self {
            a0,
            a1,
            a2,
            shape: Shape::exact(&q),
        }))
    }

    /// Three value knots.
    pub fn valid_knots(knots: &Knots) -> bool {
        knots.values().len() == 3 && knots.slopes().is_empty() && knots.is_valid_for(2)
    }

    /// Fit to `f` at three value knots.
    pub fn interpolate<F: ScalarFunction + ?Sized>(
        f: &F,
        knots: &Knots,
    ) -> Result<Model, InterpolationError> {
        Basis::QuadraticMonomial.check(knots)?;
        let p = sample_values(f, knots.values())?;
        Self::interpolate_xy(p[0].0, p[0].1, p[1].0, p[1].1, p[2].0, p[2].1)
    }

    /// Coefficients `[a0, a1, a2]`.
    pub fn coefficients(&self) -> [f64; 3] {
        [self.a0, self.a1, self.a2]
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, x: f64) -> f64 {
        x.mul_add(x.mul_add(self.a2, self.a1), self.a0)
    }

    pub(crate) fn slope_finite(&self, x: f64) -> f64 {
        x.mul_add(2.0 * self.a2, self.a1)
    }
}

impl fmt::Display for QuadraticMonomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuadraticMonomial[{}, {}, {}]", self.a0, self.a1, self.a2)
    }
}
