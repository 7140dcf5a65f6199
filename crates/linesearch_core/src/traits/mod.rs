//! The scalar objective contract.
//!
//! Line-search models consume an objective only through [`ScalarFunction`]:
//! its value and slope at a point. Polynomial models implement the same
//! trait, so a fitted model can stand in for the objective it approximates.
//!
//! All implementations are expected to be immutable and side-effect free.
//! Use static dispatch (`&impl ScalarFunction` / generics) in hot paths.

use crate::domain::Interval;

/// A real function of one real variable with a derivative.
///
/// # Examples
/// ```
/// use linesearch_core::domain::Interval;
/// use linesearch_core::traits::{FnScalar, ScalarFunction};
///
/// let square = FnScalar::new(|x: f64| x * x, |x: f64| 2.0 * x);
/// assert_eq!(square.value(3.0), 9.0);
/// assert_eq!(square.slope(3.0), 6.0);
/// assert!(square.argmin(&Interval::ALL).is_nan());
///
/// // Tangent line at x = 3: y = -9 + 6x
/// assert_eq!(square.tangent_at(3.0), (-9.0, 6.0));
/// ```
pub trait ScalarFunction {
    /// Value at `x`.
    fn value(&self, x: f64) -> f64;

    /// First derivative at `x`.
    fn slope(&self, x: f64) -> f64;

    /// Known local minimiser inside `support`, or NaN when none is known.
    fn argmin(&self, support: &Interval) -> f64 {
        let _ = support;
        f64::NAN
    }

    /// `(translation, slope)` of the tangent line at `x`.
    fn tangent_at(&self, x: f64) -> (f64, f64) {
        let d = self.slope(x);
        ((-d).mul_add(x, self.value(x)), d)
    }
}

impl<F: ScalarFunction + ?Sized> ScalarFunction for &F {
    #[inline]
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    #[inline]
    fn slope(&self, x: f64) -> f64 {
        (**self).slope(x)
    }

    fn argmin(&self, support: &Interval) -> f64 {
        (**self).argmin(support)
    }
}

impl<F: ScalarFunction + ?Sized> ScalarFunction for Box<F> {
    #[inline]
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    #[inline]
    fn slope(&self, x: f64) -> f64 {
        (**self).slope(x)
    }

    fn argmin(&self, support: &Interval) -> f64 {
        (**self).argmin(support)
    }
}

/// Adapts a value closure and a slope closure into a [`ScalarFunction`].
#[derive(Debug, Clone, Copy)]
pub struct FnScalar<V, S> {
    value: V,
    slope: S,
}

impl<V, S> FnScalar<V, S>
where
    V: Fn(f64) -> f64,
    S: Fn(f64) -> f64,
{
    /// Wrap `value` and its derivative `slope`.
    pub fn new(value: V, slope: S) -> Self {
        Self { value, slope }
    }
}

impl<V, S> ScalarFunction for FnScalar<V, S>
where
    V: Fn(f64) -> f64,
    S: Fn(f64) -> f64,
{
    #[inline]
    fn value(&self, x: f64) -> f64 {
        (self.value)(x)
    }

    #[inline]
    fn slope(&self, x: f64) -> f64 {
        (self.slope)(x)
    }
}
