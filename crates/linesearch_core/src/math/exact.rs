//! Exact rational coefficient derivation.
//!
//! Interpolating coefficients computed in floating point lose precision when
//! knots are clustered or span very different magnitudes. Here every knot is
//! converted to a [`BigRational`] without error, the whole derivation runs in
//! exact arithmetic, and each result is rounded to `f64` exactly once.
//!
//! # Example
//!
//! ```
//! use linesearch_core::math::exact::interpolating_monomial_coefficients;
//!
//! // Knots of x^3 - x, clustered near 1
//! let f = |x: f64| x * x * x - x;
//! let xs = [0.99, 1.0, 1.01, 1.02];
//! let points: Vec<(f64, f64)> = xs.iter().map(|&x| (x, f(x))).collect();
//! let a = interpolating_monomial_coefficients(&points).unwrap();
//! assert_eq!(a.len(), 4);
//! for &(x, y) in &points {
//!     let p = ((a[3] * x + a[2]) * x + a[1]) * x + a[0];
//!     assert!((p - y).abs() < 1e-9);
//! }
//! ```

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

use crate::types::InterpolationError;

/// Exact conversion of a finite double. Returns `None` for NaN and infinities.
#[inline]
pub fn rational(x: f64) -> Option<BigRational> {
    BigRational::from_float(x)
}

/// Exact conversion of a sampled pair `(x, y)`.
pub fn rational_pair(x: f64, y: f64) -> Result<(BigRational, BigRational), InterpolationError> {
    match (rational(x), rational(y)) {
        (Some(qx), Some(qy)) => Ok((qx, qy)),
        _ => Err(InterpolationError::NonFiniteKnot { x, y }),
    }
}

/// Round an exact value to the nearest double.
#[inline]
pub fn round(q: &BigRational) -> f64 {
    q.to_f64().unwrap_or(f64::NAN)
}

/// Horner evaluation of `sum(a[i] * x^i)` in exact arithmetic.
pub fn horner(a: &[BigRational], x: &BigRational) -> BigRational {
    a.iter()
        .rev()
        .fold(BigRational::zero(), |acc, ai| acc * x + ai)
}

/// Monomial coefficients of the derivative of `sum(a[i] * x^i)`.
pub fn derivative(a: &[BigRational]) -> Vec<BigRational> {
    a.iter()
        .enumerate()
        .skip(1)
        .map(|(i, ai)| ai * BigRational::from_integer(BigInt::from(i)))
        .collect()
}

/// Exact conversion of a slice of sampled points.
///
/// # Errors
/// - `InvalidInput` if `points` is empty
/// - `NonFiniteKnot` if a coordinate is NaN or infinite
/// - `DuplicateKnot` if two x-coordinates are equal
pub fn rational_points(
    points: &[(f64, f64)],
) -> Result<Vec<(BigRational, BigRational)>, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::InvalidInput(
            "at least one knot required".to_string(),
        ));
    }
    for (i, &(xi, _)) in points.iter().enumerate() {
        if points[..i].iter().any(|&(xj, _)| xj == xi) {
            return Err(InterpolationError::DuplicateKnot { x: xi });
        }
    }
    points.iter().map(|&(x, y)| rational_pair(x, y)).collect()
}

/// Barycentric weights `b_i = y_i / prod_{j != i}(x_i - x_j)`.
///
/// The points must have distinct x-coordinates.
pub fn lagrange_weights(q: &[(BigRational, BigRational)]) -> Vec<BigRational> {
    q.iter()
        .enumerate()
        .map(|(i, (xi, yi))| {
            let denom = q
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(BigRational::one(), |acc, (_, (xj, _))| acc * (xi - xj));
            yi / denom
        })
        .collect()
}

/// Newton divided differences `[y0], [y0,y1], ..., [y0..y(n-1)]`.
///
/// The points must have distinct x-coordinates.
pub fn divided_differences(q: &[(BigRational, BigRational)]) -> Vec<BigRational> {
    let mut table: Vec<BigRational> = q.iter().map(|(_, y)| y.clone()).collect();
    let mut out = Vec::with_capacity(q.len());
    for level in 0..q.len() {
        out.push(table[0].clone());
        table = (0..table.len() - 1)
            .map(|i| (&table[i + 1] - &table[i]) / (&q[i + level + 1].0 - &q[i].0))
            .collect();
    }
    out
}

/// Exact monomial coefficients of the polynomial through exact points.
///
/// Builds the Lagrange form `sum(b_i * prod_{j != i}(x - x_j))` and expands
/// it term by term. The points must have distinct x-coordinates.
pub fn monomial_from_exact(q: &[(BigRational, BigRational)]) -> Vec<BigRational> {
    let n = q.len();
    let weights = lagrange_weights(q);
    let mut a = vec![BigRational::zero(); n];
    for (i, bi) in weights.iter().enumerate() {
        let mut basis = vec![BigRational::zero(); n];
        basis[0] = BigRational::one();
        let mut len = 1;
        for (j, (xj, _)) in q.iter().enumerate() {
            if j == i {
                continue;
            }
            // basis <- basis * (x - xj)
            for k in (0..=len).rev() {
                let shifted = if k > 0 {
                    basis[k - 1].clone()
                } else {
                    BigRational::zero()
                };
                let scaled = if k < len {
                    &basis[k] * xj
                } else {
                    BigRational::zero()
                };
                basis[k] = shifted - scaled;
            }
            len += 1;
        }
        for (ak, ck) in a.iter_mut().zip(basis.iter()) {
            *ak += bi * ck;
        }
    }
    a
}

/// Exact monomial coefficients `a0..a(n-1)` of the polynomial through `n` points.
///
/// # Errors
/// See [`rational_points`].
pub fn exact_monomial_coefficients(
    points: &[(f64, f64)],
) -> Result<Vec<BigRational>, InterpolationError> {
    Ok(monomial_from_exact(&rational_points(points)?))
}

/// Monomial coefficients through the given points, each rounded once.
///
/// Three points give `[a0, a1, a2]`, four give `[a0, a1, a2, a3]`.
///
/// # Errors
/// See [`exact_monomial_coefficients`].
pub fn interpolating_monomial_coefficients(
    points: &[(f64, f64)],
) -> Result<Vec<f64>, InterpolationError> {
    Ok(exact_monomial_coefficients(points)?
        .iter()
        .map(round)
        .collect())
}
