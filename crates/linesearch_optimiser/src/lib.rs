//! # linesearch_optimiser
//!
//! Minimum bracketing and line restrictions for 1-D line search.
//!
//! This crate provides:
//! - Three-point minimum brackets and the Numerical Recipes bracket finder
//! - Stop tests for bracketing searches
//! - Restriction of a multivariate objective to a line
//!
//! ## Architecture Position
//!
//! This crate sits at L2.5 in the layered architecture:
//! - Depends on: linesearch_core (L1)
//! - Used by: multivariate search drivers, alongside linesearch_models (L2)
//!
//! ## Modules
//!
//! - `bracket`: `DoubleBracket`, `BracketConfig`, `BracketFinder`
//! - `stop`: `StopTest`, `Bracketed3`, `BracketedD2`
//! - `line`: `LineFunction`, `LineEvaluation`
//!
//! ## Example
//!
//! ```rust
//! use linesearch_core::traits::FnScalar;
//! use linesearch_optimiser::prelude::*;
//!
//! let f = FnScalar::new(|x: f64| (x - 2.0) * (x - 2.0), |x: f64| 2.0 * (x - 2.0));
//! let bracket = BracketFinder::with_defaults().nr(&f, 0.0, 1.0).unwrap();
//! assert!(bracket.x0() < 2.0 && 2.0 < bracket.x2());
//! assert!(Bracketed3.stop(&f, &bracket));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `DoubleBracket` and `BracketConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bracket;
pub mod line;
pub mod stop;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bracket::{BracketConfig, BracketFinder, DoubleBracket};
    pub use crate::line::{LineEvaluation, LineFunction};
    pub use crate::stop::{Bracketed3, BracketedD2, StopTest};
    pub use linesearch_core::types::SolverError;
}
