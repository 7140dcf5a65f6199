//! Quadratic in the Lagrange basis.

use std::fmt;

use linesearch_core::math::exact::{lagrange_weights, monomial_from_exact, rational_points, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;
use super::{downgraded, sample_values, vanishes, Affine, Basis, Model};
use crate::knots::Knots;
use crate::shape::Shape;

/// Quadratic `sum(b_i * prod_{j != i}(x - x_j))` over three value knots,
/// with weights `b_i = y_i / prod_{j != i}(x_i - x_j)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticLagrange {
    x: [f64; 3],
    b: [f64; 3],
    shape: Shape,
}

impl QuadraticLagrange {
    /// Quadratic through three points.
    ///
    /// Weights, leading-coefficient sign and vertex are computed exactly.
    /// Collinear points yield an [`Affine`] or constant model.
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
        let q = rational_points(&[(x0, y0), (x1, y1), (x2, y2)])?;
        let a = monomial_from_exact(&q);
        let w = lagrange_weights(&q);
        let b = [round(&w[0]), round(&w[1]), round(&w[2])];
        if vanishes(&a[2]) || b.iter().all(|bi| *bi == 0.0) {
            return Ok(downgraded(
                Basis::QuadraticLagrange,
                Affine::make(round(&a[0]), round(&a[1])),
            ));
        }
        Ok(Model::QuadraticLagrange(Self {
            x: [x0, x1, x2],
            b,
            shape: Shape::exact(&a),
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
        Basis::QuadraticLagrange.check(knots)?;
        let p = sample_values(f, knots.values())?;
        Self::interpolate_xy(p[0].0, p[0].1, p[1].0, p[1].1, p[2].0, p[2].1)
    }

    /// Knot x-coordinates.
    pub fn knots(&self) -> [f64; 3] {
        self.x
    }

    /// Barycentric weights.
    pub fn weights(&self) -> [f64; 3] {
        self.b
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, x: f64) -> f64 {
        let [b0, b1, b2] = self.b;
        let (dx0, dx1, dx2) = (x - self.x[0], x - self.x[1], x - self.x[2]);
        b0.mul_add(dx1 * dx2, b1.mul_add(dx2 * dx0, b2 * dx0 * dx1))
    }

    pub(crate) fn slope_finite(&self, x: f64) -> f64 {
        let [b0, b1, b2] = self.b;
        let (dx0, dx1, dx2) = (x - self.x[0], x - self.x[1], x - self.x[2]);
        b0.mul_add(dx1 + dx2, b1.mul_add(dx2 + dx0, b2 * (dx0 + dx1)))
    }
}

impl fmt::Display for QuadraticLagrange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuadraticLagrange[x={:?}, b={:?}]",
            self.x, self.b
        )
    }
}
