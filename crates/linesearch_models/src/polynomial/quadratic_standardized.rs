//! Quadratic in a monomial basis on standardized axes.

use std::fmt;

use linesearch_core::math::exact::{monomial_from_exact, rational_points, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

use super::{downgraded, sample_values, vanishes, Affine, Basis, Constant, Model};
use crate::knots::Knots;
use crate::shape::Shape;

/// `ay * p(ax x + bx) + by` with `p(u) = a0 + a1 u + a2 u^2`.
///
/// Fitting maps the knot x-range and y-range onto `[0, 1]`, so the
/// coefficients of `p` are of order one however large or clustered the
/// original samples are.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticStandardized {
    a0: f64,
    a1: f64,
    a2: f64,
    ax: f64,
    bx: f64,
    ay: f64,
    by: f64,
    shape: Shape,
}

impl QuadraticStandardized {
    /// Standardized quadratic, downgrading whenever the composed function
    /// has no quadratic term in `x`.
    pub fn make(a0: f64, a1: f64, a2: f64, ax: f64, bx: f64, ay: f64, by: f64) -> Model {
        if ax == 0.0 || ay == 0.0 {
            let u = bx;
            let v = u.mul_add(u.mul_add(a2, a1), a0);
            return downgraded(Basis::QuadraticStandardized, Constant::make(ay.mul_add(v, by)));
        }
        if a2 == 0.0 {
            // ay (a0 + a1 (ax x + bx)) + by
            let c0 = ay.mul_add(a1.mul_add(bx, a0), by);
            let c1 = a1 * ax * ay;
            return downgraded(Basis::QuadraticStandardized, Affine::make(c0, c1));
        }
        let vertex = (-0.5 * a1 / a2 - bx) / ax;
        Model::QuadraticStandardized(Self {
            a0,
            a1,
            a2,
            ax,
            bx,
            ay,
            by,
            shape: Shape::quadratic(a2 * ay, vertex),
        })
    }

    /// Quadratic through three points.
    ///
    /// The knots are mapped exactly onto `[0, 1] x [0, 1]`, the standardized
    /// coefficients and the vertex are derived exactly, and each stored
    /// value is rounded once.
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
        let (Some(xmin), Some(xmax)) = (q.iter().map(|(x, _)| x).min(), q.iter().map(|(x, _)| x).max())
        else {
            return Err(InterpolationError::InvalidInput("no knots".to_string()));
        };
        let (Some(ymin), Some(ymax)) = (q.iter().map(|(_, y)| y).min(), q.iter().map(|(_, y)| y).max())
        else {
            return Err(InterpolationError::InvalidInput("no knots".to_string()));
        };
        if ymin == ymax {
            return Ok(downgraded(Basis::QuadraticStandardized, Constant::make(round(ymin))));
        }
        let ax = (xmax - xmin).recip();
        let bx = -(&ax * xmin);
        let dy = ymax - ymin;
        let scaled: Vec<(BigRational, BigRational)> = q
            .iter()
            .map(|(x, y)| (&ax * x + &bx, (y - ymin) / &dy))
            .collect();
        let c = monomial_from_exact(&scaled);

        if vanishes(&c[2]) {
            // Collinear samples: map the line back to the original axes.
            let a1 = &dy * &c[1] * &ax;
            let a0 = ymin + &dy * (&c[0] + &c[1] * &bx);
            return Ok(downgraded(
                Basis::QuadraticStandardized,
                Affine::make(round(&a0), round(&a1)),
            ));
        }
        let two = BigRational::from_integer(BigInt::from(2));
        let vertex = (-(&c[1] / (two * &c[2])) - &bx) / &ax;
        let sign = if c[2].is_positive() { 1.0 } else { -1.0 };
        Ok(Model::QuadraticStandardized(Self {
            a0: round(&c[0]),
            a1: round(&c[1]),
            a2: round(&c[2]),
            ax: round(&ax),
            bx: round(&bx),
            ay: round(&dy),
            by: round(ymin),
            shape: Shape::quadratic(sign, round(&vertex)),
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
        Basis::QuadraticStandardized.check(knots)?;
        let p = sample_values(f, knots.values())?;
        Self::interpolate_xy(p[0].0, p[0].1, p[1].0, p[1].1, p[2].0, p[2].1)
    }

    /// Coefficients `[a0, a1, a2]` of the standardized quadratic.
    pub fn coefficients(&self) -> [f64; 3] {
        [self.a0, self.a1, self.a2]
    }

    /// Domain map `(ax, bx)`: `u = ax x + bx`.
    pub fn domain_map(&self) -> (f64, f64) {
        (self.ax, self.bx)
    }

    /// Codomain map `(ay, by)`: `y = ay v + by`.
    pub fn codomain_map(&self) -> (f64, f64) {
        (self.ay, self.by)
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, x: f64) -> f64 {
        let u = self.ax.mul_add(x, self.bx);
        let v = u.mul_add(u.mul_add(self.a2, self.a1), self.a0);
        self.ay.mul_add(v, self.by)
    }

    pub(crate) fn slope_finite(&self, x: f64) -> f64 {
        let u = self.ax.mul_add(x, self.bx);
        self.ax * self.ay * (2.0 * self.a2).mul_add(u, self.a1)
    }
}

impl fmt::Display for QuadraticStandardized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuadraticStandardized[u={}*x+{}; v={}+{}*u+{}*u^2; y={}*v+{}]",
            self.ax, self.bx, self.a0, self.a1, self.a2, self.ay, self.by
        )
    }
}
