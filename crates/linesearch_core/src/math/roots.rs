//! Real roots of `a0 + a1 x + a2 x^2`.
//!
//! Two variants share one algorithm:
//! - [`quadratic_roots`] in `f64`, with each root of a distinct pair refined
//!   by one step of `root <- -(a2 root^2 + a0) / a1`
//! - [`quadratic_roots_exact`] over [`BigRational`], exact except for the
//!   square root of the discriminant

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Zero, one or two real roots, in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadraticRoots<T> {
    /// No real root.
    NoReal,
    /// A single root (double root, or a linear equation).
    One(T),
    /// Two distinct roots, smaller first.
    Two(T, T),
}

impl<T> QuadraticRoots<T> {
    /// Number of roots.
    pub fn len(&self) -> usize {
        match self {
            QuadraticRoots::NoReal => 0,
            QuadraticRoots::One(_) => 1,
            QuadraticRoots::Two(_, _) => 2,
        }
    }

    /// Returns true when there is no real root.
    pub fn is_empty(&self) -> bool {
        matches!(self, QuadraticRoots::NoReal)
    }

    /// Roots as a vector, ascending.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            QuadraticRoots::NoReal => Vec::new(),
            QuadraticRoots::One(r) => vec![r],
            QuadraticRoots::Two(r0, r1) => vec![r0, r1],
        }
    }
}

/// Real roots of `a0 + a1 x + a2 x^2`.
///
/// With `d = a1^2 - 4 a0 a2`: `d < 0` gives no root, `d == 0` the double root
/// `-a1 / (2 a2)`, and `d > 0` the two quadratic-formula roots, each refined
/// by one Newton-like step when `a1 != 0`. A zero `a2` reduces to the linear
/// case; a NaN discriminant yields no root.
///
/// # Example
/// ```
/// use linesearch_core::math::roots::{quadratic_roots, QuadraticRoots};
///
/// // (x - 1)(x - 3) = 3 - 4x + x^2
/// assert_eq!(quadratic_roots(3.0, -4.0, 1.0), QuadraticRoots::Two(1.0, 3.0));
/// assert!(quadratic_roots(1.0, 0.0, 1.0).is_empty());
/// ```
pub fn quadratic_roots(a0: f64, a1: f64, a2: f64) -> QuadraticRoots<f64> {
    if a2 == 0.0 {
        return if a1 == 0.0 {
            QuadraticRoots::NoReal
        } else {
            QuadraticRoots::One(-a0 / a1)
        };
    }
    let d = a1.mul_add(a1, -4.0 * a0 * a2);
    if d.is_nan() || d < 0.0 {
        return QuadraticRoots::NoReal;
    }
    if d == 0.0 {
        return QuadraticRoots::One(-0.5 * a1 / a2);
    }
    let sqrt_d = d.sqrt();
    let mut r0 = 0.5 * (-a1 - sqrt_d) / a2;
    let mut r1 = 0.5 * (-a1 + sqrt_d) / a2;
    if a1 != 0.0 {
        r0 = -a2.mul_add(r0 * r0, a0) / a1;
        r1 = -a2.mul_add(r1 * r1, a0) / a1;
    }
    if r1 < r0 {
        std::mem::swap(&mut r0, &mut r1);
    }
    QuadraticRoots::Two(r0, r1)
}

/// Exact-coefficient variant of [`quadratic_roots`].
///
/// Every step is exact except the square root of the discriminant, which is
/// truncated to at least 128 significant bits.
pub fn quadratic_roots_exact(
    a0: &BigRational,
    a1: &BigRational,
    a2: &BigRational,
) -> QuadraticRoots<BigRational> {
    if a2.is_zero() {
        return if a1.is_zero() {
            QuadraticRoots::NoReal
        } else {
            QuadraticRoots::One(-(a0 / a1))
        };
    }
    let four = BigRational::from_integer(BigInt::from(4));
    let d = a1 * a1 - four * a0 * a2;
    if d.is_negative() {
        return QuadraticRoots::NoReal;
    }
    let m2a2 = -(a2 + a2);
    if d.is_zero() {
        return QuadraticRoots::One(a1 / &m2a2);
    }
    let s = sqrt_approx(&d);
    let r0 = (a1 + &s) / &m2a2;
    let r1 = (a1 - &s) / &m2a2;
    if r1 < r0 {
        QuadraticRoots::Two(r1, r0)
    } else {
        QuadraticRoots::Two(r0, r1)
    }
}

/// Square root of a positive rational, truncated to at least 128 bits.
fn sqrt_approx(d: &BigRational) -> BigRational {
    // sqrt(p/q) = sqrt(p q) / q, scaled by 2^k to keep precision.
    let n = d.numer() * d.denom();
    let bits = n.bits();
    let k: usize = if bits < 256 {
        ((256 - bits) / 2 + 1) as usize
    } else {
        0
    };
    let root = (n << (2 * k)).sqrt();
    BigRational::new(root, d.denom().clone() << k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::exact::{rational, round};

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    // ========================================
    // Floating roots
    // ========================================

    #[test]
    fn test_two_roots_ascending_for_negative_leading() {
        // -(x - 1)(x - 3)
        assert_eq!(
            quadratic_roots(-3.0, 4.0, -1.0),
            QuadraticRoots::Two(1.0, 3.0)
        );
    }

    #[test]
    fn test_double_root() {
        assert_eq!(quadratic_roots(1.0, -2.0, 1.0), QuadraticRoots::One(1.0));
    }

    #[test]
    fn test_no_real_roots() {
        let r = quadratic_roots(2.0, 1.0, 1.0);
        assert_eq!(r.len(), 0);
        assert!(r.into_vec().is_empty());
    }

    #[test]
    fn test_symmetric_roots_skip_refinement() {
        // x^2 - 4: a1 == 0 must not divide by zero
        assert_eq!(quadratic_roots(-4.0, 0.0, 1.0), QuadraticRoots::Two(-2.0, 2.0));
    }

    #[test]
    fn test_linear_and_degenerate() {
        assert_eq!(quadratic_roots(2.0, -4.0, 0.0), QuadraticRoots::One(0.5));
        assert!(quadratic_roots(2.0, 0.0, 0.0).is_empty());
        assert!(quadratic_roots(f64::NAN, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_small_root_accuracy() {
        // Roots 1e-8 and 1e8: the naive formula loses the small one entirely
        let (small, large) = (1.0e-8, 1.0e8);
        let r = quadratic_roots(small * large, -(small + large), 1.0);
        match r {
            QuadraticRoots::Two(r0, r1) => {
                assert!((r0 - small).abs() < 1e-20, "Expected {}, got {}", small, r0);
                assert!((r1 - large).abs() < 1e-6, "Expected {}, got {}", large, r1);
            }
            other => panic!("Expected two roots, got {:?}", other),
        }
    }

    // ========================================
    // Exact roots
    // ========================================

    #[test]
    fn test_exact_rational_roots() {
        // 2x^2 - 3x + 1 = (2x - 1)(x - 1)
        let r = quadratic_roots_exact(&q(1, 1), &q(-3, 1), &q(2, 1));
        assert_eq!(r, QuadraticRoots::Two(q(1, 2), q(1, 1)));
    }

    #[test]
    fn test_exact_double_and_none() {
        let r = quadratic_roots_exact(&q(1, 4), &q(-1, 1), &q(1, 1));
        assert_eq!(r, QuadraticRoots::One(q(1, 2)));
        assert!(quadratic_roots_exact(&q(1, 1), &q(0, 1), &q(1, 1)).is_empty());
        assert_eq!(
            quadratic_roots_exact(&q(1, 1), &q(2, 1), &q(0, 1)),
            QuadraticRoots::One(q(-1, 2))
        );
    }

    #[test]
    fn test_exact_irrational_roots() {
        // x^2 - 2
        match quadratic_roots_exact(&q(-2, 1), &q(0, 1), &q(1, 1)) {
            QuadraticRoots::Two(r0, r1) => {
                assert_eq!(round(&r0), -std::f64::consts::SQRT_2);
                assert_eq!(round(&r1), std::f64::consts::SQRT_2);
            }
            other => panic!("Expected two roots, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_matches_floating() {
        let (a0, a1, a2) = (-11.0 / 7.0, 17.0 / 13.0, 5.0 / 3.0);
        let exact = quadratic_roots_exact(
            &rational(a0).unwrap(),
            &rational(a1).unwrap(),
            &rational(a2).unwrap(),
        );
        match (quadratic_roots(a0, a1, a2), exact) {
            (QuadraticRoots::Two(f0, f1), QuadraticRoots::Two(e0, e1)) => {
                assert!((f0 - round(&e0)).abs() <= 4.0 * crate::math::ulp(f0));
                assert!((f1 - round(&e1)).abs() <= 4.0 * crate::math::ulp(f1));
            }
            other => panic!("Expected two roots each, got {:?}", other),
        }
    }
}
