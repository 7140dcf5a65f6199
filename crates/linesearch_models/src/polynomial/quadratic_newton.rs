//! Quadratic in the Newton basis.

use std::fmt;

use linesearch_core::math::exact::{divided_differences, monomial_from_exact, rational_points, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;
use super::{downgraded, sample_values, vanishes, Affine, Basis, Model};
use crate::knots::Knots;
use crate::shape::Shape;

/// Quadratic `b0 + (x - x0)(b1 + (x - x1) b2)` from divided differences.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticNewton {
    x0: f64,
    x1: f64,
    b: [f64; 3],
    shape: Shape,
}

impl QuadraticNewton {
    /// Quadratic through three points, divided differences computed exactly.
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
        let dd = divided_differences(&q);
        let a = monomial_from_exact(&q);
        if vanishes(&dd[2]) {
            return Ok(downgraded(
                Basis::QuadraticNewton,
                Affine::make(round(&a[0]), round(&a[1])),
            ));
        }
        Ok(Model::QuadraticNewton(Self {
            x0,
            x1,
            b: [round(&dd[0]), round(&dd[1]), round(&dd[2])],
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
        Basis::QuadraticNewton.check(knots)?;
        let p = sample_values(f, knots.values())?;
        Self::interpolate_xy(p[0].0, p[0].1, p[1].0, p[1].1, p[2].0, p[2].1)
    }

    /// Divided differences `[b0, b1, b2]`.
    pub fn coefficients(&self) -> [f64; 3] {
        self.b
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, x: f64) -> f64 {
        let [b0, b1, b2] = self.b;
        let (dx0, dx1) = (x - self.x0, x - self.x1);
        dx0.mul_add(dx1.mul_add(b2, b1), b0)
    }

    pub(crate) fn slope_finite(&self, x: f64) -> f64 {
        let [_, b1, b2] = self.b;
        b2.mul_add((x - self.x0) + (x - self.x1), b1)
    }
}

impl fmt::Display for QuadraticNewton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuadraticNewton[x0={}, x1={}, b={:?}]",
            self.x0, self.x1, self.b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linesearch_core::domain::Interval;

    #[test]
    fn test_divided_differences() {
        // y = x^2 at 0, 1, 3: b = [0, 1, 1]
        let m = QuadraticNewton::interpolate_xy(0.0, 0.0, 1.0, 1.0, 3.0, 9.0).unwrap();
        match &m {
            Model::QuadraticNewton(n) => assert_eq!(n.coefficients(), [0.0, 1.0, 1.0]),
            other => panic!("Expected QuadraticNewton, got {}", other),
        }
        assert_eq!(m.argmin(&Interval::ALL), 0.0);
        assert_eq!(m.value(-2.0), 4.0);
        assert_eq!(m.slope(-2.0), -4.0);
    }

    #[test]
    fn test_affine_data_downgrades() {
        let m = QuadraticNewton::interpolate_xy(0.999, 0.999, 1.0, 1.0, 1.001, 1.001).unwrap();
        assert_eq!(m.degree(), 1);
        assert_eq!(m.slope(0.0), 1.0);
    }

    #[test]
    fn test_vertex_outside_support() {
        let m = QuadraticNewton::interpolate_xy(0.0, 0.0, 1.0, 1.0, 3.0, 9.0).unwrap();
        assert!(m.argmin(&Interval::half_open(-1.0, 0.0)).is_nan());
        assert_eq!(m.argmin(&Interval::half_open(0.0, 1.0)), 0.0);
    }
}
