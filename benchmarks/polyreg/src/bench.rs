//! Polynomial regression benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Accumulation throughput (1K to 10K samples)
//! - Solve cost by degree
//! - Decimal scale
//! - Forced coefficients and weighting
//! - Pathological cases (outliers, wide x-range)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polyreg::prelude::*;
use polyreg_benchmarks::{
    generate_outlier_data, generate_polynomial_data, generate_wide_range_data,
};
use std::hint::black_box;

const CUBIC: [f64; 4] = [0.6, 0.6, -6.0, 5.7];

// ============================================================================
// Helper Functions
// ============================================================================

fn fitted(coefficients: usize, scale: i64, samples: &[(f64, f64)]) -> PolynomialRegression {
    let mut regression = PolynomialRegression::builder()
        .coefficients(coefficients)
        .scale(scale)
        .build()
        .unwrap();
    for &(x, y) in samples {
        regression.add_data(x, y).unwrap();
    }
    regression
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_accumulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulation");
    group.sample_size(20);

    for size in [1_000, 5_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let samples = generate_polynomial_data(&CUBIC, size, 0.05, 42);

        group.bench_with_input(BenchmarkId::new("cubic", size), &size, |b, _| {
            b.iter(|| fitted(4, DEFAULT_SCALE, black_box(&samples)))
        });
    }
    group.finish();
}

fn bench_solve_degree(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_degree");
    group.sample_size(50);

    let samples = generate_polynomial_data(&CUBIC, 1_000, 0.05, 42);
    let regression = fitted(7, DEFAULT_SCALE, &samples);

    for count in [2, 4, 7] {
        group.bench_with_input(BenchmarkId::new("coefficients", count), &count, |b, &count| {
            b.iter(|| regression.coefficients_for(black_box(count)).unwrap())
        });
    }
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale");
    group.sample_size(20);

    let samples = generate_polynomial_data(&CUBIC, 1_000, 0.05, 7);

    for scale in [10, 20, 50] {
        group.bench_with_input(BenchmarkId::new("fit", scale), &scale, |b, &scale| {
            b.iter(|| {
                fitted(4, scale, black_box(&samples))
                    .coefficients()
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_configuration(c: &mut Criterion) {
    let mut group = c.benchmark_group("configuration");
    group.sample_size(20);

    let samples = generate_polynomial_data(&CUBIC, 2_000, 0.05, 11);

    group.bench_function("forced", |b| {
        b.iter(|| {
            let mut regression = PolynomialRegression::builder()
                .coefficients(4)
                .forced_coefficient(1, 0.6)
                .forced_coefficient(3, 5.7)
                .build()
                .unwrap();
            for &(x, y) in black_box(&samples) {
                regression.add_data(x, y).unwrap();
            }
            regression.coefficients().unwrap()
        })
    });

    group.bench_function("weighted", |b| {
        b.iter(|| {
            let mut regression = PolynomialRegression::builder()
                .coefficients(4)
                .weighting(ExponentialWeighting::new(1.001))
                .build()
                .unwrap();
            for &(x, y) in black_box(&samples) {
                regression.add_data(x, y).unwrap();
            }
            regression.coefficients().unwrap()
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let outliers = generate_outlier_data(2_000, 123);
    group.bench_function("extreme_outliers", |b| {
        b.iter(|| {
            fitted(4, DEFAULT_SCALE, black_box(&outliers))
                .coefficients()
                .unwrap()
        })
    });

    let wide = generate_wide_range_data(500, 99);
    group.bench_function("wide_x_range", |b| {
        b.iter(|| {
            fitted(6, 40, black_box(&wide))
                .coefficients()
                .unwrap()
        })
    });

    group.bench_function("goodness_of_fit", |b| {
        let regression = fitted(4, DEFAULT_SCALE, &outliers);
        let coefficients = regression.coefficients().unwrap();
        b.iter(|| {
            regression
                .fit_quality(black_box(&outliers), &coefficients)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_accumulation,
    bench_solve_degree,
    bench_scale,
    bench_configuration,
    bench_pathological,
);

criterion_main!(benches);
