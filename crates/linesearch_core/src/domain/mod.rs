//! Admissible search regions on the real line.
//!
//! Models report their analytic minimiser only when it lies inside a
//! caller-supplied support. The support is an [`Interval`], either closed
//! `[lower, upper]` or half-open `[lower, upper)`.
//!
//! ## Example
//!
//! ```
//! use linesearch_core::domain::Interval;
//!
//! let support = Interval::half_open(0.0, 1.0);
//! assert!(support.contains(0.0));
//! assert!(!support.contains(1.0));
//!
//! // Covering a point beyond the open end closes the interval
//! let covered = support.cover(2.0);
//! assert!(covered.is_closed());
//! assert!(covered.contains(2.0));
//! ```

mod interval;

// Re-export public types at module level
pub use interval::{Interval, IntervalKind};
