//! Polynomials with exact rational coefficients.
//!
//! [`ExactPolynomial`] evaluates in exact arithmetic and rounds once, so its
//! values and slopes are correctly rounded. Tests use it as the objective
//! whose samples the floating models must reproduce.

use std::fmt;

use linesearch_core::domain::Interval;
use linesearch_core::math::exact::{derivative, horner, rational, round};
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::shape::{Limits, Shape};

/// `sum(a[i] * x^i)` for up to four exact coefficients.
///
/// # Examples
/// ```
/// use linesearch_core::domain::Interval;
/// use linesearch_core::traits::ScalarFunction;
/// use linesearch_models::exact::ExactPolynomial;
///
/// // 1/3 - x + x^2 / 2
/// let p = ExactPolynomial::quadratic((1, 3), (-1, 1), (1, 2));
/// assert_eq!(p.value(0.0), 1.0 / 3.0);
/// assert_eq!(p.argmin(&Interval::ALL), 1.0);
/// assert_eq!(p.degree(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExactPolynomial {
    a: Vec<BigRational>,
    d: Vec<BigRational>,
    shape: Shape,
}

impl ExactPolynomial {
    /// Polynomial from monomial coefficients `a0..an`, `n <= 3`.
    ///
    /// # Errors
    /// `InvalidInput` for an empty list or more than four coefficients.
    pub fn from_coefficients(a: Vec<BigRational>) -> Result<Self, InterpolationError> {
        if a.is_empty() || a.len() > 4 {
            return Err(InterpolationError::InvalidInput(format!(
                "expected 1 to 4 coefficients, got {}",
                a.len()
            )));
        }
        let shape = Shape::exact(&a);
        let d = derivative(&a);
        Ok(Self { a, d, shape })
    }

    /// The constant `n/d`.
    ///
    /// # Panics
    /// Panics if a denominator is zero.
    pub fn constant(a0: (i64, i64)) -> Self {
        Self::from_pairs(&[a0])
    }

    /// `a0 + a1 x`.
    ///
    /// # Panics
    /// Panics if a denominator is zero.
    pub fn affine(a0: (i64, i64), a1: (i64, i64)) -> Self {
        Self::from_pairs(&[a0, a1])
    }

    /// `a0 + a1 x + a2 x^2`.
    ///
    /// # Panics
    /// Panics if a denominator is zero.
    pub fn quadratic(a0: (i64, i64), a1: (i64, i64), a2: (i64, i64)) -> Self {
        Self::from_pairs(&[a0, a1, a2])
    }

    /// `a0 + a1 x + a2 x^2 + a3 x^3`.
    ///
    /// # Panics
    /// Panics if a denominator is zero.
    pub fn cubic(a0: (i64, i64), a1: (i64, i64), a2: (i64, i64), a3: (i64, i64)) -> Self {
        Self::from_pairs(&[a0, a1, a2, a3])
    }

    fn from_pairs(pairs: &[(i64, i64)]) -> Self {
        let a: Vec<BigRational> = pairs
            .iter()
            .map(|&(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)))
            .collect();
        let shape = Shape::exact(&a);
        let d = derivative(&a);
        Self { a, d, shape }
    }

    /// Monomial coefficients as given.
    pub fn coefficients(&self) -> &[BigRational] {
        &self.a
    }

    /// Index of the leading nonzero coefficient; 0 for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.a.iter().rposition(|ai| !ai.is_zero()).unwrap_or(0)
    }

    /// Exact value at `x`.
    pub fn value_exact(&self, x: &BigRational) -> BigRational {
        horner(&self.a, x)
    }

    /// Exact first derivative at `x`.
    pub fn slope_exact(&self, x: &BigRational) -> BigRational {
        horner(&self.d, x)
    }

    /// Limits of value and slope at `±inf`.
    pub fn limits(&self) -> &Limits {
        &self.shape.limits
    }

    /// Minimiser over the whole real line, from exact critical points.
    pub fn argmin_unconstrained(&self) -> f64 {
        self.shape.argmin
    }
}

impl ScalarFunction for ExactPolynomial {
    fn value(&self, x: f64) -> f64 {
        if let Some(v) = self.shape.limits.value_at(x) {
            return v;
        }
        rational(x).map_or(f64::NAN, |q| round(&self.value_exact(&q)))
    }

    fn slope(&self, x: f64) -> f64 {
        if let Some(d) = self.shape.limits.slope_at(x) {
            return d;
        }
        rational(x).map_or(f64::NAN, |q| round(&self.slope_exact(&q)))
    }

    fn argmin(&self, support: &Interval) -> f64 {
        self.shape.argmin_in(support)
    }
}

impl fmt::Display for ExactPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactPolynomial[")?;
        for (i, ai) in self.a.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ai)?;
        }
        write!(f, "]")
    }
}
