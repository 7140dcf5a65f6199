//! Cubic in the monomial basis.

use std::fmt;

use linesearch_core::math::exact::{exact_monomial_coefficients, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;
use super::{downgraded, sample_values, vanishes, Basis, Model, QuadraticMonomial};
use crate::knots::Knots;
use crate::shape::Shape;

/// `a0 + a1 x + a2 x^2 + a3 x^3` with `a3 != 0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicMonomial {
    a: [f64; 4],
    shape: Shape,
}

impl CubicMonomial {
    /// Cubic from coefficients, downgrading when `a3 == 0`.
    pub fn make(a0: f64, a1: f64, a2: f64, a3: f64) -> Model {
        if a3 == 0.0 {
            return downgraded(Basis::CubicMonomial, QuadraticMonomial::make(a0, a1, a2));
        }
        Model::CubicMonomial(Self {
            a: [a0, a1, a2, a3],
            shape: Shape::cubic(a1, a2, a3),
        })
    }

    /// Cubic through four points; coefficients are derived exactly and
    /// rounded once, the argmin from the exact critical points.
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
        let q = exact_monomial_coefficients(&[(x0, y0), (x1, y1), (x2, y2), (x3, y3)])?;
        if vanishes(&q[3]) {
            return Ok(downgraded(
                Basis::CubicMonomial,
                QuadraticMonomial::make(round(&q[0]), round(&q[1]), round(&q[2])),
            ));
        }
        Ok(Model::CubicMonomial(Self {
            a: [round(&q[0]), round(&q[1]), round(&q[2]), round(&q[3])],
            shape: Shape::exact(&q),
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
        Basis::CubicMonomial.check(knots)?;
        let p = sample_values(f, knots.values())?;
        Self::interpolate_xy(
            p[0].0, p[0].1, p[1].0, p[1].1, p[2].0, p[2].1, p[3].0, p[3].1,
        )
    }

    /// Coefficients `[a0, a1, a2, a3]`.
    pub fn coefficients(&self) -> [f64; 4] {
        self.a
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, x: f64) -> f64 {
        let [a0, a1, a2, a3] = self.a;
        x.mul_add(x.mul_add(x.mul_add(a3, a2), a1), a0)
    }

    pub(crate) fn slope_finite(&self, x: f64) -> f64 {
        let [_, a1, a2, a3] = self.a;
        x.mul_add(x.mul_add(3.0 * a3, 2.0 * a2), a1)
    }
}

impl fmt::Display for CubicMonomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a0, a1, a2, a3] = self.a;
        write!(f, "CubicMonomial[{}, {}, {}, {}]", a0, a1, a2, a3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linesearch_core::domain::Interval;

    #[test]
    fn test_downgrade_chain() {
        assert_eq!(CubicMonomial::make(1.0, 0.0, 0.0, 0.0).basis(), Basis::Constant);
        assert_eq!(CubicMonomial::make(1.0, 1.0, 0.0, 0.0).basis(), Basis::Affine);
        assert_eq!(
            CubicMonomial::make(1.0, -1.0, 1.0, 0.0).basis(),
            Basis::QuadraticMonomial
        );
        assert_eq!(
            CubicMonomial::make(0.0, -1.0, 0.0, 1.0).basis(),
            Basis::CubicMonomial
        );
    }

    #[test]
    fn test_degenerate_argmins() {
        let all = Interval::ALL;
        assert!(CubicMonomial::make(1.0, 0.0, 0.0, 0.0).argmin(&all).is_nan());
        assert_eq!(
            CubicMonomial::make(1.0, 1.0, 0.0, 0.0).argmin(&all),
            f64::NEG_INFINITY
        );
        assert_eq!(CubicMonomial::make(1.0, -1.0, 1.0, 0.0).argmin(&all), 0.5);
    }

    #[test]
    fn test_local_minimum() {
        // x^3 - 3x + 2: local min at 1, local max at -1
        let m = CubicMonomial::make(2.0, -3.0, 0.0, 1.0);
        assert_eq!(m.argmin(&Interval::ALL), 1.0);
        assert_eq!(m.value(1.0), 0.0);
        assert_eq!(m.slope(-1.0), 0.0);
        assert!(m.argmin(&Interval::half_open(-2.0, 1.0)).is_nan());
        assert_eq!(m.argmin(&Interval::closed(-2.0, 1.0)), 1.0);
    }

    #[test]
    fn test_monotone_decreasing_escapes() {
        let m = CubicMonomial::make(0.0, -1.0, 0.0, -1.0);
        assert_eq!(m.argmin(&Interval::ALL), f64::INFINITY);
        assert_eq!(m.value(f64::INFINITY), f64::NEG_INFINITY);
        assert_eq!(m.slope(f64::INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_interpolate_xy_recovers_coefficients() {
        // x^3 - x at dyadic knots
        let f = |x: f64| x * x * x - x;
        let m = CubicMonomial::interpolate_xy(-2.0, f(-2.0), -0.5, f(-0.5), 0.25, f(0.25), 3.0, f(3.0))
            .unwrap();
        match &m {
            Model::CubicMonomial(c) => assert_eq!(c.coefficients(), [0.0, -1.0, 0.0, 1.0]),
            other => panic!("Expected CubicMonomial, got {}", other),
        }
        let expected = 3.0_f64.sqrt() / 3.0;
        assert!((m.argmin(&Interval::ALL) - expected).abs() <= f64::EPSILON);
    }

    #[test]
    fn test_interpolate_xy_quadratic_data() {
        let f = |x: f64| 1.0 - x + x * x;
        let m = CubicMonomial::interpolate_xy(0.0, f(0.0), 1.0, f(1.0), 2.0, f(2.0), 4.0, f(4.0))
            .unwrap();
        assert_eq!(m.degree(), 2);
        assert_eq!(m.argmin(&Interval::ALL), 0.5);
    }
}
