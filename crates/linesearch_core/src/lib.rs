//! # linesearch_core: Numerical Foundation for 1-D Line Search
//!
//! ## Layer 1 (Foundation) Role
//!
//! linesearch_core is the bottom layer of the line-search workspace, providing:
//! - Exact rational coefficient derivation (`math::exact`)
//! - Quadratic root solving with Newton refinement (`math::roots`)
//! - Closed and half-open intervals used as argmin supports (`domain`)
//! - The scalar objective contract (`traits::ScalarFunction`)
//! - Error types: `InterpolationError`, `SolverError` (`types::error`)
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other linesearch_* crates:
//! - num-traits: `Zero`, `One`, `Signed`, `ToPrimitive` for exact arithmetic
//! - num-bigint / num-rational: arbitrary-precision rationals
//! - thiserror: error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use linesearch_core::domain::Interval;
//! use linesearch_core::math::exact::interpolating_monomial_coefficients;
//! use linesearch_core::math::roots::{quadratic_roots, QuadraticRoots};
//!
//! // y = 1 - 2x + x^2 through three knots
//! let a = interpolating_monomial_coefficients(&[(0.0, 1.0), (1.0, 0.0), (3.0, 4.0)]).unwrap();
//! assert_eq!(a, vec![1.0, -2.0, 1.0]);
//!
//! // Double root at x = 1
//! assert_eq!(quadratic_roots(a[0], a[1], a[2]), QuadraticRoots::One(1.0));
//!
//! assert!(Interval::ALL.contains(f64::NEG_INFINITY));
//! assert!(!Interval::half_open(0.0, 1.0).contains(1.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Interval` and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod domain;
pub mod math;
pub mod traits;
pub mod types;
