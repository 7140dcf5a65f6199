//! Termination rules for 1-D searches.
//!
//! A [`StopTest`] decides from a summary of the search so far whether the
//! search is done. Separating the rule from the search lets the same search
//! run under different termination rules.
//!
//! ## Available Tests
//!
//! - [`Bracketed3`]: three points with the middle value lowest
//! - [`BracketedD2`]: an interval whose endpoint slopes point inwards
//!
//! Objective values are recomputed on every call; it is left to the
//! objective to cache them.

use linesearch_core::domain::Interval;
use linesearch_core::traits::ScalarFunction;

use crate::bracket::DoubleBracket;

/// Should a search whose state is summarised by `S` stop?
pub trait StopTest<S: ?Sized> {
    /// Returns true when `state` satisfies the rule for `f`.
    fn stop(&self, f: &dyn ScalarFunction, state: &S) -> bool;
}

/// Stops when `f(x0) > f(x1) < f(x2)`.
///
/// # Examples
/// ```
/// use linesearch_core::traits::FnScalar;
/// use linesearch_optimiser::bracket::DoubleBracket;
/// use linesearch_optimiser::stop::{Bracketed3, StopTest};
///
/// let f = FnScalar::new(|x: f64| x * x, |x: f64| 2.0 * x);
/// assert!(Bracketed3.stop(&f, &DoubleBracket::make(-1.0, 0.5, 2.0).unwrap()));
/// assert!(!Bracketed3.stop(&f, &DoubleBracket::make(1.0, 2.0, 3.0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bracketed3;

impl StopTest<DoubleBracket> for Bracketed3 {
    fn stop(&self, f: &dyn ScalarFunction, state: &DoubleBracket) -> bool {
        let y1 = f.value(state.x1());
        f.value(state.x0()) > y1 && y1 < f.value(state.x2())
    }
}

/// Stops when `slope(lower) < 0 < slope(upper)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BracketedD2;

impl StopTest<Interval> for BracketedD2 {
    fn stop(&self, f: &dyn ScalarFunction, state: &Interval) -> bool {
        f.slope(state.lower()) < 0.0 && 0.0 < f.slope(state.upper())
    }
}
