//! Numerical building blocks for polynomial line-search models.
//!
//! ## Available Modules
//!
//! - [`exact`]: exact rational coefficient derivation, rounding once at the end
//! - [`roots`]: real roots of `a0 + a1 x + a2 x^2`, floating and exact
//!
//! Plus [`ulp`], the spacing of doubles at a given magnitude, used to scale
//! tolerances throughout the workspace.
//!
//! ## Example
//!
//! ```
//! use linesearch_core::math::ulp;
//!
//! assert_eq!(ulp(1.0), f64::EPSILON);
//! assert_eq!(ulp(-2.0), 2.0 * f64::EPSILON);
//! ```

pub mod exact;
pub mod roots;

/// Unit in the last place of `x`: the gap between `|x|` and the next larger double.
///
/// NaN maps to NaN, infinities to `+inf`, and `f64::MAX` to the gap below it.
pub fn ulp(x: f64) -> f64 {
    let x = x.abs();
    if x.is_nan() {
        return f64::NAN;
    }
    if x.is_infinite() {
        return f64::INFINITY;
    }
    if x == f64::MAX {
        return x - f64::from_bits(x.to_bits() - 1);
    }
    f64::from_bits(x.to_bits() + 1) - x
}
