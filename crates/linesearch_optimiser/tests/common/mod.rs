//! Shared objectives for bracketing integration tests.

#![allow(dead_code)]

use linesearch_core::domain::Interval;
use linesearch_core::traits::ScalarFunction;

/// A named objective with a known local minimiser and a start pair from
/// which the downhill search reaches it.
pub struct Objective {
    pub name: &'static str,
    value: fn(f64) -> f64,
    slope: fn(f64) -> f64,
    pub minimiser: f64,
    pub start: (f64, f64),
}

impl ScalarFunction for Objective {
    fn value(&self, x: f64) -> f64 {
        (self.value)(x)
    }

    fn slope(&self, x: f64) -> f64 {
        (self.slope)(x)
    }

    fn argmin(&self, support: &Interval) -> f64 {
        if support.contains(self.minimiser) {
            self.minimiser
        } else {
            f64::NAN
        }
    }
}

/// Objectives with an interior local minimum.
pub fn objectives() -> Vec<Objective> {
    vec![
        Objective {
            name: "square",
            value: |x| (x - 2.0) * (x - 2.0),
            slope: |x| 2.0 * (x - 2.0),
            minimiser: 2.0,
            start: (0.0, 1.0),
        },
        Objective {
            name: "runge",
            value: |x| 2.0 - 1.0 / (25.0 * x).mul_add(x, 1.0),
            slope: |x| {
                let d = (25.0 * x).mul_add(x, 1.0);
                50.0 * x / (d * d)
            },
            minimiser: 0.0,
            start: (-1.0, -0.5),
        },
        Objective {
            name: "quintic",
            value: |x| -(x - 1.0) * (x - 0.5) * x * (x + 0.5) * (x + 1.0),
            // -(x^5 - 1.25 x^3 + 0.25 x)'
            slope: |x| -(5.0 * x.powi(4) - 3.75 * x * x + 0.25),
            minimiser: 0.271_956_13,
            start: (0.0, 0.1),
        },
        Objective {
            name: "math832",
            value: |x| 100.0 * x.sqrt() + 1.0e6 / x + 1.0e4 / x.sqrt(),
            slope: |x| 50.0 / x.sqrt() - 1.0e6 / (x * x) - 5.0e3 / (x * x.sqrt()),
            minimiser: 804.935_582_5,
            start: (100.0, 200.0),
        },
        Objective {
            name: "cosh",
            value: f64::cosh,
            slope: f64::sinh,
            minimiser: 0.0,
            start: (5.0, 4.0),
        },
    ]
}

/// `(value, gradient)` of `(x - 1)^2 + 10 (y + 2)^2`.
pub fn bowl(p: &[f64]) -> (f64, Vec<f64>) {
    let (dx, dy) = (p[0] - 1.0, p[1] + 2.0);
    (dx * dx + 10.0 * dy * dy, vec![2.0 * dx, 20.0 * dy])
}
