//! Benchmarks for linesearch_models.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linesearch_core::domain::Interval;
use linesearch_core::traits::{FnScalar, ScalarFunction};
use linesearch_models::knots::Knots;
use linesearch_models::polynomial::{Basis, CubicHermite, CubicMonomial};

fn objective() -> impl ScalarFunction {
    FnScalar::new(|x: f64| x.sin() + 0.1 * x * x, |x: f64| x.cos() + 0.2 * x)
}

fn bench_knots(basis: Basis) -> Knots {
    match basis.degree() {
        0 => Knots::values_only(vec![0.5]),
        1 => Knots::values_only(vec![0.5, 1.5]),
        2 if basis == Basis::QuadraticShifted => Knots::new(vec![0.5, 1.5], vec![2.5]),
        2 => Knots::values_only(vec![0.5, 1.5, 2.5]),
        _ if basis == Basis::CubicHermite => Knots::new(vec![0.5, 2.5], vec![0.5, 2.5]),
        _ => Knots::values_only(vec![0.5, 1.5, 2.5, 3.5]),
    }
}

fn benchmark_interpolate(c: &mut Criterion) {
    let f = objective();
    let mut group = c.benchmark_group("interpolate");

    for basis in Basis::ALL {
        let knots = bench_knots(basis);
        group.bench_with_input(BenchmarkId::from_parameter(basis), &knots, |b, k| {
            b.iter(|| basis.interpolate(&f, black_box(k)))
        });
    }

    group.finish();
}

fn benchmark_argmin(c: &mut Criterion) {
    let f = objective();
    let support = Interval::closed(-10.0, 10.0);
    let mut group = c.benchmark_group("argmin");

    for basis in Basis::ALL {
        let Ok(model) = basis.interpolate(&f, &bench_knots(basis)) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(basis), &model, |b, m| {
            b.iter(|| m.argmin(black_box(&support)))
        });
    }

    group.finish();
}

fn benchmark_evaluate(c: &mut Criterion) {
    let monomial = CubicMonomial::make(1.0, -2.0, 0.5, 0.25);
    let hermite = CubicHermite::interpolate_xyd(0.0, 1.0, -2.0, 2.0, 1.0, 3.0).unwrap();
    let xs: Vec<f64> = (0..1000).map(|i| -5.0 + 0.01 * i as f64).collect();

    c.bench_function("cubic_monomial_value", |b| {
        b.iter(|| xs.iter().map(|&x| monomial.value(black_box(x))).sum::<f64>())
    });
    c.bench_function("cubic_hermite_value", |b| {
        b.iter(|| xs.iter().map(|&x| hermite.value(black_box(x))).sum::<f64>())
    });
    c.bench_function("cubic_hermite_argmin", |b| {
        b.iter(|| hermite.argmin(black_box(&Interval::ALL)))
    });
}

criterion_group!(
    benches,
    benchmark_interpolate,
    benchmark_argmin,
    benchmark_evaluate
);
criterion_main!(benches);
