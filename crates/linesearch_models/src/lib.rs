//! # linesearch_models: Polynomial Models for 1-D Line Search
//!
//! ## Layer 2 (Models) Role
//!
//! A line-search driver samples an objective along a line at a handful of
//! points ("knots"). This crate fits a local polynomial model to those
//! samples and reads off its minimiser analytically:
//! - Knot sets and their degree contract (`knots`)
//! - Asymptotic limits and argmin classification (`shape`)
//! - The closed family of polynomial models (`polynomial`)
//! - Exact rational polynomials used as ground-truth objectives (`exact`)
//!
//! Every factory returns the lowest-degree model consistent with its
//! derived coefficients: a cubic fitted to affine data is an affine model.
//!
//! ## Usage Examples
//!
//! ```rust
//! use linesearch_core::domain::Interval;
//! use linesearch_core::traits::{FnScalar, ScalarFunction};
//! use linesearch_models::knots::Knots;
//! use linesearch_models::polynomial::Basis;
//!
//! // f(x) = (x - 2)^2 + 1, sampled at three value knots
//! let f = FnScalar::new(|x: f64| (x - 2.0) * (x - 2.0) + 1.0, |x: f64| 2.0 * (x - 2.0));
//! let knots = Knots::values_only(vec![0.0, 1.0, 3.0]);
//!
//! let model = Basis::QuadraticLagrange.interpolate(&f, &knots).unwrap();
//! assert_eq!(model.degree(), 2);
//! assert_eq!(model.argmin(&Interval::ALL), 2.0);
//! assert!(model.argmin(&Interval::closed(5.0, 6.0)).is_nan());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for knots, limits and every floating model

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod exact;
pub mod knots;
pub mod polynomial;
pub mod shape;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::exact::ExactPolynomial;
    pub use crate::knots::Knots;
    pub use crate::polynomial::*;
    pub use crate::shape::{Limits, Shape};
}
