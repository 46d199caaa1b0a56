//! Reproducible sample generators for the polyreg benchmarks.

use rand::prelude::*;
use rand_distr::{Normal, Uniform};

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Evaluate `coefficients` (ascending exponent order) at `x` in `f64`.
pub fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Samples of a polynomial on `[0, 1)` with Gaussian noise.
pub fn generate_polynomial_data(
    coefficients: &[f64],
    size: usize,
    noise: f64,
    seed: u64,
) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, noise).unwrap();

    (0..size)
        .map(|i| {
            let x = i as f64 / size as f64;
            (x, polynomial(coefficients, x) + noise_dist.sample(&mut rng))
        })
        .collect()
}

/// Cubic samples with 5% of the y-values pushed far off the curve.
pub fn generate_outlier_data(size: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let outlier_dist = Uniform::new(-5.0, 5.0).unwrap();

    let mut samples = generate_polynomial_data(&[0.6, 0.6, -6.0, 5.7], size, 0.05, seed);

    let n_outliers = size / 20;
    for _ in 0..n_outliers {
        let idx = rng.random_range(0..size);
        samples[idx].1 += outlier_dist.sample(&mut rng);
    }
    samples
}

/// Samples with x spread over several orders of magnitude.
pub fn generate_wide_range_data(size: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 1.0).unwrap();

    (0..size)
        .map(|i| {
            let x = 10f64.powf(i as f64 * 4.0 / size as f64);
            (x, 2.0 + 0.5 * x + noise_dist.sample(&mut rng))
        })
        .collect()
}
