//! The closed family of polynomial line-search models.
//!
//! A [`Model`] is one of eleven immutable variants, one per
//! (degree, basis) pair. Every variant caches its analytic argmin and its
//! limits at `±inf`, and evaluates in its native basis.
//!
//! ## Available Bases
//!
//! ### Degree 0 and 1
//!
//! - [`Constant`]: one value knot
//! - [`Affine`]: two value knots, or one value and one slope knot
//!
//! ### Quadratic
//!
//! - [`QuadraticMonomial`]: `a0 + a1 x + a2 x^2`, Horner with fused multiply-add
//! - [`QuadraticLagrange`]: barycentric weights over three value knots
//! - [`QuadraticNewton`]: divided differences over three value knots
//! - [`QuadraticShifted`]: monomial in `x - origin`, from mixed value/slope knots
//! - [`QuadraticStandardized`]: monomial after rescaling both axes to `[0, 1]`
//!
//! ### Cubic
//!
//! - [`CubicMonomial`], [`CubicLagrange`], [`CubicNewton`]: four value knots
//! - [`CubicHermite`]: value and slope at two knots
//!
//! ## Degree downgrade
//!
//! Factories inspect the derived coefficients, exactly where possible, and
//! return the lowest-degree model consistent with them. A cubic whose
//! leading coefficient vanishes is built as a quadratic, and so on down to
//! [`Constant`].
//!
//! ## Examples
//!
//! ```
//! use linesearch_core::domain::Interval;
//! use linesearch_core::traits::ScalarFunction;
//! use linesearch_models::polynomial::{Basis, CubicMonomial, QuadraticMonomial};
//!
//! // x^3 - x has its local minimum at 1/sqrt(3)
//! let m = CubicMonomial::make(0.0, -1.0, 0.0, 1.0);
//! assert!((m.argmin(&Interval::ALL) - 3.0_f64.sqrt() / 3.0).abs() < 1e-15);
//! assert_eq!(m.value(-2.0), -6.0);
//! assert_eq!(m.slope(-2.0), 11.0);
//!
//! // A "cubic" with vanishing higher terms is affine
//! let m = CubicMonomial::make(1.0, 1.0, 0.0, 0.0);
//! assert_eq!(m.basis(), Basis::Affine);
//! assert_eq!(m.argmin(&Interval::ALL), f64::NEG_INFINITY);
//!
//! // Limits are used at infinity instead of evaluating the polynomial
//! let m = QuadraticMonomial::make(1.0, 0.0, 0.0);
//! assert!(m.argmin(&Interval::ALL).is_nan());
//! assert_eq!(m.value(f64::INFINITY), 1.0);
//! assert_eq!(m.value(f64::NEG_INFINITY), 1.0);
//! ```

mod affine;
mod constant;
mod cubic_hermite;
mod cubic_lagrange;
mod cubic_monomial;
mod cubic_newton;
mod quadratic_lagrange;
mod quadratic_monomial;
mod quadratic_newton;
mod quadratic_shifted;
mod quadratic_standardized;

// Re-export public types at module level
pub use affine::Affine;
pub use constant::Constant;
pub use cubic_hermite::CubicHermite;
pub use cubic_lagrange::CubicLagrange;
pub use cubic_monomial::CubicMonomial;
pub use cubic_newton::CubicNewton;
pub use quadratic_lagrange::QuadraticLagrange;
pub use quadratic_monomial::QuadraticMonomial;
pub use quadratic_newton::QuadraticNewton;
pub use quadratic_shifted::QuadraticShifted;
pub use quadratic_standardized::QuadraticStandardized;

use std::fmt;

use linesearch_core::domain::Interval;
use linesearch_core::math::exact::round;
use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;
use num_rational::BigRational;
use num_traits::Zero;

use crate::knots::Knots;
use crate::shape::{Limits, Shape};

/// Coefficient basis of a polynomial model.
///
/// Selects a factory at run time:
///
/// ```
/// use linesearch_core::traits::FnScalar;
/// use linesearch_models::knots::Knots;
/// use linesearch_models::polynomial::Basis;
///
/// let f = FnScalar::new(|x: f64| x * x, |x: f64| 2.0 * x);
/// let knots = Knots::values_only(vec![-1.0, 0.5, 2.0]);
/// for basis in Basis::ALL {
///     if basis.valid_knots(&knots) {
///         let m = basis.interpolate(&f, &knots).unwrap();
///         assert_eq!(m.degree(), 2);
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Basis {
    /// [`Constant`]
    Constant,
    /// [`Affine`]
    Affine,
    /// [`QuadraticMonomial`]
    QuadraticMonomial,
    /// [`QuadraticLagrange`]
    QuadraticLagrange,
    /// [`QuadraticNewton`]
    QuadraticNewton,
    /// [`QuadraticShifted`]
    QuadraticShifted,
    /// [`QuadraticStandardized`]
    QuadraticStandardized,
    /// [`CubicMonomial`]
    CubicMonomial,
    /// [`CubicLagrange`]
    CubicLagrange,
    /// [`CubicNewton`]
    CubicNewton,
    /// [`CubicHermite`]
    CubicHermite,
}

impl Basis {
    /// Every basis, lowest degree first.
    pub const ALL: [Basis; 11] = [
        Basis::Constant,
        Basis::Affine,
        Basis::QuadraticMonomial,
        Basis::QuadraticLagrange,
        Basis::QuadraticNewton,
        Basis::QuadraticShifted,
        Basis::QuadraticStandardized,
        Basis::CubicMonomial,
        Basis::CubicLagrange,
        Basis::CubicNewton,
        Basis::CubicHermite,
    ];

    /// Type name of the model struct.
    pub fn name(self) -> &'static str {
        match self {
            Basis::Constant => "Constant",
            Basis::Affine => "Affine",
            Basis::QuadraticMonomial => "QuadraticMonomial",
            Basis::QuadraticLagrange => "QuadraticLagrange",
            Basis::QuadraticNewton => "QuadraticNewton",
            Basis::QuadraticShifted => "QuadraticShifted",
            Basis::QuadraticStandardized => "QuadraticStandardized",
            Basis::CubicMonomial => "CubicMonomial",
            Basis::CubicLagrange => "CubicLagrange",
            Basis::CubicNewton => "CubicNewton",
            Basis::CubicHermite => "CubicHermite",
        }
    }

    /// Nominal degree.
    pub fn degree(self) -> usize {
        match self {
            Basis::Constant => 0,
            Basis::Affine => 1,
            Basis::QuadraticMonomial
            | Basis::QuadraticLagrange
            | Basis::QuadraticNewton
            | Basis::QuadraticShifted
            | Basis::QuadraticStandardized => 2,
            Basis::CubicMonomial
            | Basis::CubicLagrange
            | Basis::CubicNewton
            | Basis::CubicHermite => 3,
        }
    }

    /// Whether `knots` satisfy this basis' knot contract.
    pub fn valid_knots(self, knots: &Knots) -> bool {
        match self {
            Basis::Constant => Constant::valid_knots(knots),
            Basis::Affine => Affine::valid_knots(knots),
            Basis::QuadraticMonomial => QuadraticMonomial::valid_knots(knots),
            Basis::QuadraticLagrange => QuadraticLagrange::valid_knots(knots),
            Basis::QuadraticNewton => QuadraticNewton::valid_knots(knots),
            Basis::QuadraticShifted => QuadraticShifted::valid_knots(knots),
            Basis::QuadraticStandardized => QuadraticStandardized::valid_knots(knots),
            Basis::CubicMonomial => CubicMonomial::valid_knots(knots),
            Basis::CubicLagrange => CubicLagrange::valid_knots(knots),
            Basis::CubicNewton => CubicNewton::valid_knots(knots),
            Basis::CubicHermite => CubicHermite::valid_knots(knots),
        }
    }

    /// Fit a model of this basis to `f` sampled at `knots`.
    ///
    /// # Errors
    /// - `InvalidKnots` if the knots violate the basis contract
    /// - `NonFiniteKnot` if a sample is NaN or infinite
    /// - `SingularKnots` for singular shifted-quadratic geometry
    pub fn interpolate<F: ScalarFunction + ?Sized>(
        self,
        f: &F,
        knots: &Knots,
    ) -> Result<Model, InterpolationError> {
        match self {
            Basis::Constant => Constant::interpolate(f, knots),
            Basis::Affine => Affine::interpolate(f, knots),
            Basis::QuadraticMonomial => QuadraticMonomial::interpolate(f, knots),
            Basis::QuadraticLagrange => QuadraticLagrange::interpolate(f, knots),
            Basis::QuadraticNewton => QuadraticNewton::interpolate(f, knots),
            Basis::QuadraticShifted => QuadraticShifted::interpolate(f, knots),
            Basis::QuadraticStandardized => QuadraticStandardized::interpolate(f, knots),
            Basis::CubicMonomial => CubicMonomial::interpolate(f, knots),
            Basis::CubicLagrange => CubicLagrange::interpolate(f, knots),
            Basis::CubicNewton => CubicNewton::interpolate(f, knots),
            Basis::CubicHermite => CubicHermite::interpolate(f, knots),
        }
    }

    /// Fail unless `knots` satisfy the contract.
    pub(crate) fn check(self, knots: &Knots) -> Result<(), InterpolationError> {
        if self.valid_knots(knots) {
            Ok(())
        } else {
            Err(InterpolationError::InvalidKnots {
                basis: self.name().to_string(),
                values: knots.values().len(),
                slopes: knots.slopes().len(),
            })
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fitted polynomial model.
///
/// Evaluation returns NaN at NaN and the cached limit at `±inf`; finite
/// points are evaluated in the variant's native basis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Model {
    /// Degree 0
    Constant(Constant),
    /// Degree 1
    Affine(Affine),
    /// Degree 2, monomial basis
    QuadraticMonomial(QuadraticMonomial),
    /// Degree 2, Lagrange basis
    QuadraticLagrange(QuadraticLagrange),
    /// Degree 2, Newton basis
    QuadraticNewton(QuadraticNewton),
    /// Degree 2, shifted monomial basis
    QuadraticShifted(QuadraticShifted),
    /// Degree 2, standardized monomial basis
    QuadraticStandardized(QuadraticStandardized),
    /// Degree 3, monomial basis
    CubicMonomial(CubicMonomial),
    /// Degree 3, Lagrange basis
    CubicLagrange(CubicLagrange),
    /// Degree 3, Newton basis
    CubicNewton(CubicNewton),
    /// Degree 3, Hermite basis
    CubicHermite(CubicHermite),
}

macro_rules! each_model {
    ($model:expr, $m:ident => $body:expr) => {
        match $model {
            Model::Constant($m) => $body,
            Model::Affine($m) => $body,
            Model::QuadraticMonomial($m) => $body,
            Model::QuadraticLagrange($m) => $body,
            Model::QuadraticNewton($m) => $body,
            Model::QuadraticShifted($m) => $body,
            Model::QuadraticStandardized($m) => $body,
            Model::CubicMonomial($m) => $body,
            Model::CubicLagrange($m) => $body,
            Model::CubicNewton($m) => $body,
            Model::CubicHermite($m) => $body,
        }
    };
}

impl Model {
    /// Basis of this variant.
    pub fn basis(&self) -> Basis {
        match self {
            Model::Constant(_) => Basis::Constant,
            Model::Affine(_) => Basis::Affine,
            Model::QuadraticMonomial(_) => Basis::QuadraticMonomial,
            Model::QuadraticLagrange(_) => Basis::QuadraticLagrange,
            Model::QuadraticNewton(_) => Basis::QuadraticNewton,
            Model::QuadraticShifted(_) => Basis::QuadraticShifted,
            Model::QuadraticStandardized(_) => Basis::QuadraticStandardized,
            Model::CubicMonomial(_) => Basis::CubicMonomial,
            Model::CubicLagrange(_) => Basis::CubicLagrange,
            Model::CubicNewton(_) => Basis::CubicNewton,
            Model::CubicHermite(_) => Basis::CubicHermite,
        }
    }

    /// Degree of the polynomial; factories guarantee a nonzero leading term.
    #[inline]
    pub fn degree(&self) -> usize {
        self.basis().degree()
    }

    /// Cached argmin and limits.
    #[inline]
    pub fn shape(&self) -> &Shape {
        each_model!(self, m => m.shape())
    }

    /// Limits of value and slope at `±inf`.
    #[inline]
    pub fn limits(&self) -> &Limits {
        &self.shape().limits
    }

    /// Analytic minimiser over the whole real line: finite, `±inf` or NaN.
    #[inline]
    pub fn argmin_unconstrained(&self) -> f64 {
        self.shape().argmin
    }
}

impl ScalarFunction for Model {
    fn value(&self, x: f64) -> f64 {
        if let Some(v) = self.limits().value_at(x) {
            return v;
        }
        each_model!(self, m => m.value_finite(x))
    }

    fn slope(&self, x: f64) -> f64 {
        if let Some(d) = self.limits().slope_at(x) {
            return d;
        }
        each_model!(self, m => m.slope_finite(x))
    }

    fn argmin(&self, support: &Interval) -> f64 {
        self.shape().argmin_in(support)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_model!(self, m => fmt::Display::fmt(m, f))
    }
}

/// Sample `f` at value knots, rejecting non-finite samples.
pub(crate) fn sample_values<F: ScalarFunction + ?Sized>(
    f: &F,
    xs: &[f64],
) -> Result<Vec<(f64, f64)>, InterpolationError> {
    xs.iter().map(|&x| finite(x, f.value(x))).collect()
}

/// Sample `f'` at slope knots, rejecting non-finite samples.
pub(crate) fn sample_slopes<F: ScalarFunction + ?Sized>(
    f: &F,
    xs: &[f64],
) -> Result<Vec<(f64, f64)>, InterpolationError> {
    xs.iter().map(|&x| finite(x, f.slope(x))).collect()
}

pub(crate) fn finite(x: f64, y: f64) -> Result<(f64, f64), InterpolationError> {
    if x.is_finite() && y.is_finite() {
        Ok((x, y))
    } else {
        Err(InterpolationError::NonFiniteKnot { x, y })
    }
}

/// Whether a derived leading coefficient is zero, exactly or once rounded.
///
/// A model stores rounded coefficients, so a nonzero leading term that
/// rounds to `0.0` must downgrade like an exact zero.
pub(crate) fn vanishes(q: &BigRational) -> bool {
    q.is_zero() || round(q) == 0.0
}

/// Record a degree downgrade and pass the model through.
pub(crate) fn downgraded(from: Basis, model: Model) -> Model {
    tracing::trace!(
        from = from.name(),
        to = model.basis().name(),
        degree = model.degree(),
        "degenerate coefficients, model downgraded"
    );
    model
}
