//! Error types for the line-search toolkit.
//!
//! This module provides structured error types:
//! - `InterpolationError`: knot sets that violate a model's contract, or that
//!   would divide by zero during exact coefficient derivation
//! - `SolverError`: failures of the bracket finder
//!
//! Numerical degeneracy (vanishing leading coefficients, complex roots) is
//! not represented here. It is handled by downgrading models or by returning
//! an infinite or NaN argmin.

use thiserror::Error;

/// Interpolation and knot validation errors.
///
/// # Variants
/// - `InvalidKnots`: knot counts do not match the requested basis
/// - `DuplicateKnot`: two x-coordinates coincide where distinct ones are required
/// - `NonFiniteKnot`: a knot coordinate or sampled value is NaN or infinite
/// - `SingularKnots`: the knot geometry makes the basis singular
/// - `InvalidInput`: any other malformed input
///
/// # Examples
/// ```
/// use linesearch_core::types::InterpolationError;
///
/// let err = InterpolationError::DuplicateKnot { x: 1.0 };
/// assert!(format!("{}", err).contains("Duplicate knot"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Knot counts do not satisfy the basis contract.
    #[error("Invalid knots for {basis}: {values} value knots, {slopes} slope knots")]
    InvalidKnots {
        /// Name of the basis that rejected the knots
        basis: String,
        /// Number of value knots supplied
        values: usize,
        /// Number of slope knots supplied
        slopes: usize,
    },

    /// Two knot x-coordinates coincide.
    #[error("Duplicate knot at x = {x}")]
    DuplicateKnot {
        /// The repeated x-coordinate
        x: f64,
    },

    /// Knot coordinate or sampled value is not finite.
    #[error("Non-finite knot ({x}, {y})")]
    NonFiniteKnot {
        /// Knot x-coordinate
        x: f64,
        /// Sampled value or slope at the knot
        y: f64,
    },

    /// Knot geometry makes the interpolation system singular.
    #[error("Singular knots: {x0}, {x1}, {x2}")]
    SingularKnots {
        /// First knot
        x0: f64,
        /// Second knot
        x1: f64,
        /// Third knot
        x2: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Bracket finder errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: no bracket within the iteration limit
/// - `NotDistinct`: bracket points are not three distinct numbers
/// - `InvalidInterval`: start interval is empty, reversed or not finite
/// - `NonFinite`: the search left the finite reals
///
/// # Examples
/// ```
/// use linesearch_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Bracket points are not distinct.
    #[error("Bracket points not distinct: {a}, {b}, {c}")]
    NotDistinct {
        /// First point
        a: f64,
        /// Second point
        b: f64,
        /// Third point
        c: f64,
    },

    /// Start interval is not a finite, non-empty range.
    #[error("Invalid interval [{lower}, {upper}]")]
    InvalidInterval {
        /// Lower endpoint
        lower: f64,
        /// Upper endpoint
        upper: f64,
    },

    /// Search point or objective value is not finite.
    #[error("Non-finite value at x = {x}")]
    NonFinite {
        /// The offending point
        x: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_knots_display() {
        let err = InterpolationError::InvalidKnots {
            basis: "CubicHermite".to_string(),
            values: 3,
            slopes: 0,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid knots for CubicHermite: 3 value knots, 0 slope knots"
        );
    }

    #[test]
    fn test_duplicate_knot_display() {
        let err = InterpolationError::DuplicateKnot { x: 0.5 };
        assert_eq!(format!("{}", err), "Duplicate knot at x = 0.5");
    }

    #[test]
    fn test_singular_knots_display() {
        let err = InterpolationError::SingularKnots {
            x0: 0.0,
            x1: 2.0,
            x2: 1.0,
        };
        assert_eq!(format!("{}", err), "Singular knots: 0, 2, 1");
    }

    #[test]
    fn test_not_distinct_display() {
        let err = SolverError::NotDistinct {
            a: 1.0,
            b: 1.0,
            c: 2.0,
        };
        assert_eq!(format!("{}", err), "Bracket points not distinct: 1, 1, 2");
    }

    #[test]
    fn test_invalid_interval_display() {
        let err = SolverError::InvalidInterval {
            lower: 1.0,
            upper: 0.0,
        };
        assert_eq!(format!("{}", err), "Invalid interval [1, 0]");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::NonFinite { x: f64::INFINITY };
        let _: &dyn std::error::Error = &err; // Verify Error trait is implemented
        let err = InterpolationError::InvalidInput("empty".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SolverError::MaxIterationsExceeded { iterations: 7 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let err = InterpolationError::DuplicateKnot { x: 2.5 };
        let json = serde_json::to_string(&err).unwrap();
        let back: InterpolationError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
