//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for knot validation, exact coefficient
//!   derivation and bracketing
//!
//! # Re-exports
//!
//! For convenience, [`InterpolationError`] and [`SolverError`] are re-exported
//! at this module level.

pub mod error;

// Re-export commonly used types at module level
pub use error::{InterpolationError, SolverError};
