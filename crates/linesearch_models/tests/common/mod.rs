//! Shared objectives, knot sets and assertions for model integration tests.

#![allow(dead_code)]

use linesearch_core::traits::ScalarFunction;
use linesearch_models::exact::ExactPolynomial;
use linesearch_models::knots::Knots;
use linesearch_models::polynomial::{Basis, Model};

/// A named closed-form objective.
pub struct Objective {
    pub name: &'static str,
    value: fn(f64) -> f64,
    slope: fn(f64) -> f64,
}

impl ScalarFunction for Objective {
    fn value(&self, x: f64) -> f64 {
        (self.value)(x)
    }

    fn slope(&self, x: f64) -> f64 {
        (self.slope)(x)
    }
}

/// Smooth objectives with a variety of shapes near the knots.
pub fn objectives() -> Vec<Objective> {
    vec![
        Objective {
            name: "square",
            value: |x| (x - 1.0) * (x - 1.0),
            slope: |x| 2.0 * (x - 1.0),
        },
        Objective {
            name: "sin",
            value: f64::sin,
            slope: f64::cos,
        },
        Objective {
            name: "exp_minus_linear",
            value: |x| x.exp() - 2.0 * x,
            slope: |x| x.exp() - 2.0,
        },
        Objective {
            name: "runge",
            value: |x| 1.0 / (1.0 + 25.0 * x * x),
            slope: |x| {
                let d = 1.0 + 25.0 * x * x;
                -50.0 * x / (d * d)
            },
        },
        Objective {
            name: "cosh",
            value: f64::cosh,
            slope: f64::sinh,
        },
    ]
}

/// Exact polynomials of every degree, used where knot reproduction must be
/// checked against correctly rounded samples.
pub fn exact_objectives() -> Vec<ExactPolynomial> {
    vec![
        ExactPolynomial::constant((7, 3)),
        ExactPolynomial::affine((1, 3), (-5, 7)),
        ExactPolynomial::quadratic((1, 1), (-1, 1), (1, 1)),
        ExactPolynomial::quadratic((2, 3), (1, 5), (-3, 7)),
        ExactPolynomial::cubic((0, 1), (-1, 1), (0, 1), (1, 1)),
        ExactPolynomial::cubic((1, 1), (-1, 1), (1, 1), (0, 1)),
        ExactPolynomial::cubic((5, 3), (17, 13), (-13, 11), (-1, 9)),
    ]
}

/// Candidate knot coordinates; prefixes of each row are used.
const ROWS: [[f64; 4]; 5] = [
    [-1.0, 0.0, 1.0, 2.0],
    [0.5, 0.75, 1.5, 2.0],
    [-2.0, -0.25, 0.3, 1.7],
    [0.99, 1.0, 1.01, 1.02],
    [2.0, -1.0, 0.0, 0.5],
];

/// Valid knot sets for `basis`.
pub fn knot_sets(basis: Basis) -> Vec<Knots> {
    let mut out = Vec::new();
    for row in ROWS {
        match basis {
            Basis::Constant => out.push(Knots::values_only(row[..1].to_vec())),
            Basis::Affine => {
                out.push(Knots::values_only(row[..2].to_vec()));
                out.push(Knots::new(vec![row[0]], vec![row[1]]));
            }
            Basis::QuadraticMonomial
            | Basis::QuadraticLagrange
            | Basis::QuadraticNewton
            | Basis::QuadraticStandardized => out.push(Knots::values_only(row[..3].to_vec())),
            Basis::QuadraticShifted => {
                out.push(Knots::new(row[..2].to_vec(), vec![row[2]]));
                out.push(Knots::new(vec![row[0]], row[1..3].to_vec()));
            }
            Basis::CubicMonomial | Basis::CubicLagrange | Basis::CubicNewton => {
                out.push(Knots::values_only(row.to_vec()))
            }
            Basis::CubicHermite => out.push(Knots::new(row[..2].to_vec(), row[..2].to_vec())),
        }
    }
    out
}

/// Points at which to compare models away from their knots.
pub fn sample_points() -> Vec<f64> {
    (-12..=12).map(|i| 0.25 * i as f64).collect()
}

/// Assert `actual` is within `rel` of `expected`, relative to `max(1, |expected|)`.
pub fn assert_close(actual: f64, expected: f64, rel: f64, what: &str) {
    let tol = rel * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {}, got {} (tolerance {})",
        what,
        expected,
        actual,
        tol
    );
}

/// Assert `x` is a local minimum of `m`: zero slope and no lower neighbour.
pub fn assert_local_min(m: &Model, x: f64) {
    let scale = 1.0 + m.slope(x + 1.0).abs() + m.slope(x - 1.0).abs();
    assert!(
        m.slope(x).abs() <= 1e-9 * scale,
        "{}: slope at argmin {} is {}",
        m,
        x,
        m.slope(x)
    );
    let delta = 1e-3 * x.abs().max(1.0);
    let fx = m.value(x);
    let tol = 1e-12 * fx.abs().max(1.0);
    assert!(
        fx <= m.value(x - delta) + tol && fx <= m.value(x + delta) + tol,
        "{}: {} is not a local minimum ({}, {}, {})",
        m,
        x,
        m.value(x - delta),
        fx,
        m.value(x + delta)
    );
}
