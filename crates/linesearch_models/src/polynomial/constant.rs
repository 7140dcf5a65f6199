//! Degree-0 model.

use std::fmt;

use linesearch_core::traits::ScalarFunction;
use linesearch_core::types::InterpolationError;

use super::{sample_values, Basis, Model};
use crate::knots::Knots;
use crate::shape::Shape;

/// The constant function `a0`. Its argmin is NaN: every point is minimal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant {
    a0: f64,
    shape: Shape,
}

impl Constant {
    /// Constant model with value `a0`.
    pub fn make(a0: f64) -> Model {
        Model::Constant(Self {
            a0,
            shape: Shape::constant(a0),
        })
    }

    /// One value knot.
    pub fn valid_knots(knots: &Knots) -> bool {
        knots.values().len() == 1 && knots.slopes().is_empty() && knots.is_valid_for(0)
    }

    /// Constant through `f` at the single value knot.
    pub fn interpolate<F: ScalarFunction + ?Sized>(
        f: &F,
        knots: &Knots,
    ) -> Result<Model, InterpolationError> {
        Basis::Constant.check(knots)?;
        let pts = sample_values(f, knots.values())?;
        Ok(Self::make(pts[0].1))
    }

    /// The constant value.
    pub fn a0(&self) -> f64 {
        self.a0
    }

    /// Cached argmin and limits.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn value_finite(&self, _x: f64) -> f64 {
        self.a0
    }

    pub(crate) fn slope_finite(&self, _x: f64) -> f64 {
        0.0
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constant[{}]", self.a0)
    }
}
