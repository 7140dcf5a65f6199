//! Cubic in the Lagrange basis.

use std::fmt;

use linesearch_core::math::exact::{lagrange_weights, monomial_from_exact, rational_points, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;
use super::{downgraded, sample_values, vanishes, Basis, Model, QuadraticLagrange};
use crate::knots::Knots;
use crate::shape::Shape;

/// Cubic `sum(b_i * prod_{j != i}(x - x_j))` over four value knots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicLagrange {
    x: [f64; 4],
    b: [f64; 4],
    shape: Shape,
}

impl CubicLagrange {
    /// Cubic through four points, weights and argmin computed exactly.
    ///
    /// When the four points lie on a quadratic the result is the
    /// [`QuadraticLagrange`] model through the first three.
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
        let a = monomial_from_exact(&q);
        let w = lagrange_weights(&q);
        let b = [round(&w[0]), round(&w[1]), round(&w[2]), round(&w[3])];
        if vanishes(&a[3]) || b.iter().all(|bi| *bi == 0.0) {
            let m = QuadraticLagrange::interpolate_xy(x0, y0, x1, y1, x2, y2)?;
            return Ok(downgraded(Basis::CubicLagrange, m));
        }
        Ok(Model::CubicLagrange(Self {
            x: [x0, x1, x2, x3],
            b,
            shape: Shape::exact(&a),
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
        Basis::CubicLagrange.check(knots)?;
        let p = sample_values(f, knots.values())?;
        Self::interpolate_xy(
            p[0].0, p[0].1, p[1].0, p[1].1, p[2].0, p[2].1, p[3].0, p[3].1,
        )
    }

    /// Knot x-coordinates.
    pub fn knots(&self) -> [f64; 4] {
        self.x
    }

    /// Barycentric weights.
    pub fn weights(&self) -> [f64; 4] {
        self.b
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, x: f64) -> f64 {
        let [b0, b1, b2, b3] = self.b;
        let [d0, d1, d2, d3] = self.x.map(|xi| x - xi);
        b0.mul_add(
            d1 * d2 * d3,
            b1.mul_add(d0 * d2 * d3, b2.mul_add(d0 * d1 * d3, b3 * d0 * d1 * d2)),
        )
    }

    pub(crate) fn slope_finite(&self, x: f64) -> f64 {
        let [b0, b1, b2, b3] = self.b;
        let [d0, d1, d2, d3] = self.x.map(|xi| x - xi);
        // d/dx of the product of three factors
        let p = |u: f64, v: f64, w: f64| u.mul_add(v, (u + v) * w);
        b0.mul_add(
            p(d1, d2, d3),
            b1.mul_add(p(d0, d2, d3), b2.mul_add(p(d0, d1, d3), b3 * p(d0, d1, d2))),
        )
    }
}

impl fmt::Display for CubicLagrange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubicLagrange[x={:?}, b={:?}]", self.x, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linesearch_core::domain::Interval;
    use linesearch_core::math::ulp;

    #[test]
    fn test_reproduces_knots() {
        // x^3 - 3x + 2 at -2, -1, 0, 2
        let f = |x: f64| x * x * x - 3.0 * x + 2.0;
        let m = CubicLagrange::interpolate_xy(-2.0, f(-2.0), -1.0, f(-1.0), 0.0, f(0.0), 2.0, f(2.0))
            .unwrap();
        assert_eq!(m.basis(), Basis::CubicLagrange);
        for x in [-2.0, -1.0, 0.0, 2.0] {
            assert!(
                (m.value(x) - f(x)).abs() <= 2.0 * ulp(f(x).abs().max(1.0)),
                "value({}) = {}, expected {}",
                x,
                m.value(x),
                f(x)
            );
        }
        assert_eq!(m.argmin(&Interval::ALL), 1.0);
        assert!(m.slope(1.0).abs() <= 8.0 * f64::EPSILON);
        assert!((m.slope(0.0) + 3.0).abs() <= 8.0 * f64::EPSILON);
    }

    #[test]
    fn test_quadratic_data_downgrades() {
        let f = |x: f64| (x - 1.0) * (x - 1.0);
        let m = CubicLagrange::interpolate_xy(0.0, f(0.0), 1.0, f(1.0), 2.0, f(2.0), 5.0, f(5.0))
            .unwrap();
        assert_eq!(m.basis(), Basis::QuadraticLagrange);
        assert_eq!(m.argmin(&Interval::ALL), 1.0);
    }

    #[test]
    fn test_negative_leading_coefficient() {
        // -x^3 + x at -1, 0, 1, 2
        let f = |x: f64| -x * x * x + x;
        let m = CubicLagrange::interpolate_xy(-1.0, f(-1.0), 0.0, f(0.0), 1.0, f(1.0), 2.0, f(2.0))
            .unwrap();
        assert_eq!(m.limits().value_pos, f64::NEG_INFINITY);
        assert_eq!(m.limits().slope_neg, f64::NEG_INFINITY);
        let expected = -(3.0_f64.sqrt()) / 3.0;
        assert!((m.argmin(&Interval::ALL) - expected).abs() <= f64::EPSILON);
    }
}
