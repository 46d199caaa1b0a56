//! Tests for the high-level polynomial regression API.
//!
//! These tests verify complete fitting workflows against reference datasets
//! and the public error surface, including:
//! - Linear and cubic fits
//! - Forced coefficients (including a zero intercept)
//! - Goodness-of-fit metrics
//! - Coefficient count changes and reset
//! - Weighting strategies
//! - Builder validation
//!
//! ## Test Organization
//!
//! 1. **Reference Fits** - Linear, cubic, lower-degree solves
//! 2. **Forced Coefficients** - Exact forced values, intercept through origin
//! 3. **Goodness of Fit** - R², adjusted R², FitQuality
//! 4. **Coefficient Count** - Setter, deprecated setter, reset protocol
//! 5. **Weighting** - Index sequence, zero weights
//! 6. **Error Handling** - Singular systems, insufficient data, bad input
//! 7. **Builder** - Defaults, duplicates, invalid scale

use approx::assert_abs_diff_eq;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use polyreg::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

const LINEAR_Y: [f64; 51] = [
    27.3834562958158,
    38.2347360741764,
    42.5632501679666,
    19.4638760104114,
    42.690858098909,
    25.330634164557,
    49.6507591632989,
    34.3502467856792,
    52.5267153107089,
    34.5528919545231,
    44.3220950255077,
    44.7805694031715,
    32.9090525820585,
    56.7941323051778,
    48.7192221569495,
    48.7964850888813,
    56.8905173101315,
    66.0107252116092,
    74.3149331561425,
    52.9076168019644,
    64.3463647026162,
    50.0776706625628,
    62.3527806092493,
    75.9589658430523,
    69.280743962744,
    74.4868159870338,
    76.4548504742096,
    82.9347555390181,
    83.9546576353049,
    83.6379624022705,
    92.6278811310654,
    84.3395153143048,
    86.832363003336,
    105.66563124607,
    100.175129109663,
    82.0781941886623,
    95.9916212989616,
    87.5853932119967,
    93.5435091554247,
    98.0622114645327,
    118.067000253198,
    98.2918886287489,
    111.027863906934,
    113.1135947538,
    117.777915259186,
    108.621331147219,
    112.979639159754,
    122.065499190418,
    116.136221596622,
    111.215762010712,
    122.743302375187,
];

const CUBIC_Y: [f64; 21] = [
    0.65646507, 0.61435503, 0.63151965, 0.57711365, 0.58534249, 0.54148715, 0.43877649,
    0.39516968, 0.24977940, 0.24246690, 0.07730788, 0.03633931, 0.08980716, 0.07562991,
    0.11196788, 0.15086596, 0.19979455, 0.34683801, 0.48338650, 0.59196113, 0.99233320,
];

const NOISY_CUBIC_Y: [f64; 21] = [
    0.65379741, 0.64074062, 0.72833783, 0.44629689, 0.45174500, 0.34161602, 0.78621158,
    0.38960121, 0.14126441, 0.38123106, 0.20605429, 0.02456525, 0.48434811, 0.21453304,
    0.54765807, 0.41625294, 0.78163483, 0.71306009, 0.53515664, 0.98918384, 0.93061202,
];

const INTERCEPT_Y: [f64; 20] = [
    0.1924787314,
    0.4586186921,
    0.1318838557,
    0.1865927433,
    0.4667421897,
    0.1027880072,
    0.5599968985,
    0.6605423892,
    0.620103306,
    0.4445367125,
    0.5912679423,
    0.7942020837,
    0.8694575373,
    0.4146043937,
    0.6604661468,
    0.9138025779,
    0.8124334151,
    0.7998087715,
    0.7391285236,
    0.9012208138,
];

/// Pair `y` with x-values `start, start + step, ...` rounded to two decimals.
fn grid(start: f64, step: f64, y: &[f64]) -> Vec<(f64, f64)> {
    y.iter()
        .enumerate()
        .map(|(i, &yi)| {
            let x = ((start + i as f64 * step) * 100.0).round() / 100.0;
            (x, yi)
        })
        .collect()
}

fn linear_samples() -> Vec<(f64, f64)> {
    grid(0.0, 0.02, &LINEAR_Y)
}

fn cubic_samples() -> Vec<(f64, f64)> {
    grid(0.0, 0.05, &CUBIC_Y)
}

fn noisy_cubic_samples() -> Vec<(f64, f64)> {
    grid(0.0, 0.05, &NOISY_CUBIC_Y)
}

fn intercept_samples() -> Vec<(f64, f64)> {
    grid(0.05, 0.05, &INTERCEPT_Y)
}

/// Regression at scale 10 with truncation toward zero.
fn truncating(coefficients: usize) -> PolynomialRegression {
    PolynomialRegression::builder()
        .coefficients(coefficients)
        .scale(10)
        .rounding(RoundingMode::Down)
        .build()
        .expect("valid configuration")
}

fn feed(regression: &mut PolynomialRegression, samples: &[(f64, f64)]) {
    for &(x, y) in samples {
        regression.add_data(x, y).expect("finite sample");
    }
}

fn assert_coefficients(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "coefficient count");
    for (a, e) in actual.iter().zip(expected) {
        // Two-decimal agreement
        assert_abs_diff_eq!(*a, *e, epsilon = 0.005);
    }
}

// ============================================================================
// Reference Fit Tests
// ============================================================================

/// Test straight-line fit over 51 noisy points.
///
/// Verifies intercept and slope to two decimals.
#[test]
fn test_linear_fit() {
    let mut regression = truncating(2);
    feed(&mut regression, &linear_samples());

    let coefficients = regression.coefficients_f64().unwrap();
    assert_coefficients(&coefficients, &[26.55, 95.75]);
}

/// Test cubic fit over 21 points.
///
/// Verifies all four coefficients to two decimals.
#[test]
fn test_cubic_fit() {
    let mut regression = truncating(4);
    feed(&mut regression, &cubic_samples());

    let coefficients = regression.coefficients_f64().unwrap();
    assert_coefficients(&coefficients, &[0.63, 0.60, -5.97, 5.68]);
}

/// Test cubic fit with the default decimal context.
///
/// Verifies that a wider scale with half-even rounding agrees to two decimals.
#[test]
fn test_cubic_fit_default_context() {
    let mut regression = PolynomialRegression::new(4).unwrap();
    feed(&mut regression, &cubic_samples());

    assert_eq!(regression.scale(), DEFAULT_SCALE);
    let coefficients = regression.coefficients_f64().unwrap();
    assert_coefficients(&coefficients, &[0.63, 0.60, -5.97, 5.68]);
}

/// Test exact recovery of a noise-free quadratic.
///
/// Verifies that interpolation reproduces the generating polynomial.
#[test]
fn test_exact_quadratic_recovery() {
    let mut regression = PolynomialRegression::new(3).unwrap();
    for i in 0..6 {
        let x = i as f64;
        regression.add_data(x, 1.0 + 2.0 * x + 3.0 * x * x).unwrap();
    }

    let coefficients = regression.coefficients_f64().unwrap();
    assert_abs_diff_eq!(coefficients[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(coefficients[1], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(coefficients[2], 3.0, epsilon = 1e-12);

    let decimals = regression.coefficients().unwrap();
    let y = PolynomialRegression::interpolate(&decimals, 10.0).unwrap();
    assert_abs_diff_eq!(y, 321.0, epsilon = 1e-9);
}

/// Test solving a lower count from sums accumulated for a higher one.
///
/// Verifies that the linear fit is available from cubic sums without re-adding data.
#[test]
fn test_lower_count_from_existing_sums() {
    let mut regression = truncating(4);
    feed(&mut regression, &linear_samples());

    let linear = regression.coefficients_for(2).unwrap();
    assert_eq!(linear.len(), 2);

    let context = regression.decimal_context();
    let linear: Vec<f64> = linear.iter().map(|c| context.to_f64(c).unwrap()).collect();
    assert_coefficients(&linear, &[26.55, 95.75]);

    regression.set_coefficient_count(2).unwrap();
    assert_coefficients(&regression.coefficients_f64().unwrap(), &[26.55, 95.75]);
}

/// Test that solving does not consume the accumulated state.
///
/// Verifies repeated solves return identical coefficients.
#[test]
fn test_solve_is_repeatable() {
    let mut regression = PolynomialRegression::new(4).unwrap();
    feed(&mut regression, &cubic_samples());

    let first = regression.coefficients().unwrap();
    let second = regression.coefficients().unwrap();
    assert_eq!(first, second);
    assert_eq!(regression.sample_count(), 21);
}

// ============================================================================
// Forced Coefficient Tests
// ============================================================================

/// Test unforced and forced cubic fits over the same noisy data.
///
/// Verifies that forced coefficients are returned exactly and the free
/// coefficients are refitted around them.
#[test]
fn test_forced_cubic() {
    let samples = noisy_cubic_samples();

    let mut free = truncating(4);
    feed(&mut free, &samples);
    assert_coefficients(&free.coefficients_f64().unwrap(), &[0.72, -1.30, 0.35, 1.25]);

    let mut forced = truncating(4);
    forced.set_forced_coefficient(1, -2.0).unwrap();
    forced.set_forced_coefficient(3, 1.5).unwrap();
    feed(&mut forced, &samples);

    let coefficients = forced.coefficients().unwrap();
    assert_eq!(coefficients[1], BigDecimal::from(-2));
    assert_eq!(coefficients[3], BigDecimal::from_str("1.5").unwrap());

    assert_coefficients(
        &forced.coefficients_f64().unwrap(),
        &[0.86, -2.00, 0.76, 1.50],
    );
}

/// Test forcing the intercept through the origin.
///
/// Verifies the intercept is exactly zero and the slope is refitted.
#[test]
fn test_forced_zero_intercept() {
    let samples = intercept_samples();

    let mut free = truncating(2);
    feed(&mut free, &samples);
    assert_coefficients(&free.coefficients_f64().unwrap(), &[0.19, 0.71]);

    let mut forced = PolynomialRegression::builder()
        .coefficients(2)
        .scale(10)
        .rounding(RoundingMode::Down)
        .forced_coefficient(0, 0.0)
        .build()
        .unwrap();
    feed(&mut forced, &samples);

    let coefficients = forced.coefficients().unwrap();
    assert_eq!(coefficients[0], BigDecimal::from(0));
    assert_coefficients(&forced.coefficients_f64().unwrap(), &[0.00, 0.99]);
}

/// Test forced coefficient lookup.
///
/// Verifies forced values are reported and cleared by reset.
#[test]
fn test_forced_coefficient_lookup() {
    let mut regression = PolynomialRegression::new(3).unwrap();
    regression.set_forced_coefficient(2, 0.25).unwrap();

    assert_eq!(
        regression.forced_coefficient(2),
        Some(&BigDecimal::from_str("0.25").unwrap())
    );
    assert_eq!(regression.forced_coefficient(0), None);

    regression.reset();
    assert_eq!(regression.forced_coefficient(2), None);
}

/// Test that a fully forced polynomial needs no data.
///
/// Verifies every coefficient comes back as its forced value.
#[test]
fn test_all_coefficients_forced() {
    let mut regression = PolynomialRegression::new(2).unwrap();
    regression.set_forced_coefficient(0, 1.0).unwrap();
    regression.set_forced_coefficient(1, -3.0).unwrap();

    let coefficients = regression.coefficients().unwrap();
    assert_eq!(coefficients, vec![BigDecimal::from(1), BigDecimal::from(-3)]);
}

// ============================================================================
// Goodness of Fit Tests
// ============================================================================

/// Test R² and adjusted R² of the linear fit.
///
/// Verifies both metrics against reference values.
#[test]
fn test_r_squared_linear() {
    let samples = linear_samples();
    let mut regression = truncating(2);
    feed(&mut regression, &samples);

    let coefficients = regression.coefficients().unwrap();
    let r2 = regression.r_squared(&samples, &coefficients).unwrap();
    assert_abs_diff_eq!(r2, 0.926, epsilon = 0.001);

    let adjusted = PolynomialRegression::r_adjusted(r2, 1, samples.len());
    assert_abs_diff_eq!(adjusted, 0.924, epsilon = 0.001);
    assert!(adjusted < r2);
}

/// Test FitQuality summary.
///
/// Verifies the combined metrics match the individual calls.
#[test]
fn test_fit_quality() {
    let samples = linear_samples();
    let mut regression = PolynomialRegression::new(2).unwrap();
    feed(&mut regression, &samples);

    let coefficients = regression.coefficients().unwrap();
    let quality = regression.fit_quality(&samples, &coefficients).unwrap();

    assert_eq!(quality.sample_count, 51);
    assert_eq!(quality.predictors, 1);
    assert_abs_diff_eq!(quality.r_squared, 0.926, epsilon = 0.001);
    assert_abs_diff_eq!(
        quality.r_adjusted,
        PolynomialRegression::r_adjusted(quality.r_squared, 1, 51),
        epsilon = 1e-15
    );

    let rendered = format!("{}", quality);
    assert!(rendered.contains("Fit Quality:"));
    assert!(rendered.contains("Samples:      51"));
}

/// Test adjusted R² with zero degrees of freedom.
///
/// Verifies that n − p − 1 == 0 yields exactly 1.
#[test]
fn test_r_adjusted_zero_dof() {
    assert_eq!(PolynomialRegression::r_adjusted(0.3, 1, 2), 1.0);
    assert_eq!(PolynomialRegression::r_adjusted(0.9, 3, 4), 1.0);
}

/// Test R² of a perfect fit.
///
/// Verifies R² is 1 when every sample lies on the curve.
#[test]
fn test_r_squared_perfect_fit() {
    let samples: Vec<(f64, f64)> = (0..5).map(|i| (i as f64, 2.0 * i as f64 - 1.0)).collect();
    let mut regression = PolynomialRegression::new(2).unwrap();
    feed(&mut regression, &samples);

    let coefficients = regression.coefficients().unwrap();
    let r2 = regression.r_squared(&samples, &coefficients).unwrap();
    assert_abs_diff_eq!(r2, 1.0, epsilon = 1e-12);
}

/// Test R² error cases.
///
/// Verifies empty samples and constant y-values are rejected.
#[test]
fn test_r_squared_errors() {
    let regression = PolynomialRegression::new(2).unwrap();
    let coefficients = vec![BigDecimal::from(5), BigDecimal::from(0)];

    assert_eq!(
        regression.r_squared(&[], &coefficients),
        Err(RegressionError::EmptyInput)
    );

    let constant = [(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)];
    assert!(matches!(
        regression.r_squared(&constant, &coefficients),
        Err(RegressionError::DegenerateMetric(_))
    ));
}

// ============================================================================
// Coefficient Count Tests
// ============================================================================

/// Test coefficient count setters.
///
/// Verifies the count setter and its deprecated alias.
#[test]
#[allow(deprecated)]
fn test_set_coefficient_count() {
    let mut regression = PolynomialRegression::new(4).unwrap();
    assert_eq!(regression.coefficient_count(), 4);

    regression.set_coefficient_count(2).unwrap();
    assert_eq!(regression.coefficient_count(), 2);

    regression.set_degree(3).unwrap();
    assert_eq!(regression.coefficient_count(), 3);

    assert_eq!(
        regression.set_coefficient_count(0),
        Err(RegressionError::InvalidCoefficientCount(0))
    );
    assert_eq!(regression.coefficient_count(), 3);
}

/// Test the reset protocol after raising the count.
///
/// Verifies that adding data and solving are refused until reset.
#[test]
fn test_raise_count_requires_reset() {
    let mut regression = PolynomialRegression::new(2).unwrap();
    regression.add_data(0.0, 1.0).unwrap();
    regression.add_data(1.0, 2.0).unwrap();

    regression.set_coefficient_count(3).unwrap();

    assert_eq!(
        regression.add_data(2.0, 5.0),
        Err(RegressionError::ResetRequired {
            configured: 3,
            accumulated: 2
        })
    );
    assert_eq!(regression.sample_count(), 2);

    assert_eq!(
        regression.coefficients(),
        Err(RegressionError::CoefficientCountExceedsSums {
            requested: 3,
            accumulated: 2
        })
    );

    regression.reset();
    assert_eq!(regression.sample_count(), 0);
    for (x, y) in [(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)] {
        regression.add_data(x, y).unwrap();
    }

    // y = 1 + 0x + x²
    let coefficients = regression.coefficients_f64().unwrap();
    assert_abs_diff_eq!(coefficients[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(coefficients[1], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(coefficients[2], 1.0, epsilon = 1e-12);
}

/// Test that lowering the count also blocks new data.
///
/// Verifies the reset requirement applies to any count change, and that
/// restoring the accumulated count lifts it.
#[test]
fn test_lower_count_then_add_requires_reset() {
    let mut regression = PolynomialRegression::new(3).unwrap();
    regression.set_coefficient_count(2).unwrap();

    assert!(matches!(
        regression.add_data(1.0, 1.0),
        Err(RegressionError::ResetRequired { .. })
    ));

    regression.set_coefficient_count(3).unwrap();
    assert!(regression.add_data(1.0, 1.0).is_ok());
}

// ============================================================================
// Weighting Tests
// ============================================================================

/// Test the index sequence handed to the weighting strategy.
///
/// Verifies indices start at 1, increase by one and restart after reset.
#[test]
fn test_weighting_index_sequence() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = {
        let seen = Arc::clone(&seen);
        move |index: usize| {
            seen.lock().unwrap().push(index);
            1.0
        }
    };

    let mut regression = PolynomialRegression::new(2).unwrap();
    regression.set_weighting(recorder.clone());
    assert!(regression.weighting().is_some());

    for i in 0..3 {
        regression.add_data(i as f64, i as f64).unwrap();
    }
    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);

    regression.reset();
    assert!(regression.weighting().is_none());

    regression.set_weighting(recorder);
    regression.add_data(0.0, 0.0).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3, 1]);
}

/// Test that a zero weight removes a sample from the fit.
///
/// Verifies the line is recovered exactly despite an outlier.
#[test]
fn test_zero_weight_ignores_outlier() {
    let mut regression = PolynomialRegression::new(2).unwrap();
    regression.set_weighting(|index: usize| if index == 3 { 0.0 } else { 1.0 });

    for (x, y) in [(0.0, 1.0), (1.0, 3.0), (2.0, 100.0), (3.0, 7.0), (4.0, 9.0)] {
        regression.add_data(x, y).unwrap();
    }

    let coefficients = regression.coefficients_f64().unwrap();
    assert_abs_diff_eq!(coefficients[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(coefficients[1], 2.0, epsilon = 1e-12);
}

/// Test that uniform weighting matches the unweighted fit.
///
/// Verifies identical coefficients with and without a unit-weight strategy.
#[test]
fn test_uniform_weighting_matches_unweighted() {
    let samples = cubic_samples();

    let mut plain = PolynomialRegression::new(4).unwrap();
    feed(&mut plain, &samples);

    let mut weighted = PolynomialRegression::builder()
        .coefficients(4)
        .weighting(UniformWeighting)
        .build()
        .unwrap();
    feed(&mut weighted, &samples);

    assert_eq!(plain.coefficients().unwrap(), weighted.coefficients().unwrap());
}

/// Test clearing the weighting strategy.
///
/// Verifies later samples are unweighted.
#[test]
fn test_clear_weighting() {
    let mut regression = PolynomialRegression::new(2).unwrap();
    regression.set_weighting(ExponentialWeighting::new(2.0));
    regression.clear_weighting();
    assert!(regression.weighting().is_none());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

/// Test singular system from repeated x.
///
/// Verifies that identical x-values cannot determine a slope.
#[test]
fn test_singular_repeated_x() {
    let mut regression = PolynomialRegression::new(2).unwrap();
    regression.add_data(2.0, 1.0).unwrap();
    regression.add_data(2.0, 3.0).unwrap();

    assert_eq!(
        regression.coefficients(),
        Err(RegressionError::SingularMatrix { column: 1 })
    );
}

/// Test solving with too few samples.
///
/// Verifies the minimum is the number of free coefficients.
#[test]
fn test_too_few_points() {
    let mut regression = PolynomialRegression::new(3).unwrap();
    assert_eq!(
        regression.coefficients(),
        Err(RegressionError::TooFewPoints { got: 0, min: 3 })
    );

    regression.set_forced_coefficient(0, 0.0).unwrap();
    regression.add_data(1.0, 1.0).unwrap();
    assert_eq!(
        regression.coefficients(),
        Err(RegressionError::TooFewPoints { got: 1, min: 2 })
    );
}

/// Test forced index outside the requested fit.
///
/// Verifies the index is accepted when set and rejected when solving.
#[test]
fn test_forced_index_out_of_range() {
    let mut regression = PolynomialRegression::new(2).unwrap();
    assert!(regression.set_forced_coefficient(3, 1.0).is_ok());

    feed(&mut regression, &[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    assert_eq!(
        regression.coefficients(),
        Err(RegressionError::ForcedCoefficientOutOfRange { index: 3, count: 2 })
    );
}

/// Test non-finite input values.
///
/// Verifies NaN and infinity are rejected without touching the state.
#[test]
fn test_non_finite_input() {
    let mut regression = PolynomialRegression::new(2).unwrap();

    assert!(matches!(
        regression.add_data(f64::NAN, 1.0),
        Err(RegressionError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        regression.add_data(1.0, f64::INFINITY),
        Err(RegressionError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        regression.set_forced_coefficient(0, f64::NEG_INFINITY),
        Err(RegressionError::InvalidNumericValue(_))
    ));
    assert_eq!(regression.sample_count(), 0);
}

/// Test zero coefficients.
///
/// Verifies construction is rejected.
#[test]
fn test_zero_coefficients() {
    assert!(matches!(
        PolynomialRegression::new(0),
        Err(RegressionError::InvalidCoefficientCount(0))
    ));
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
///
/// Verifies default count, scale and empty configuration.
#[test]
fn test_builder_defaults() {
    let regression = PolynomialRegression::builder().build().unwrap();

    assert_eq!(regression.coefficient_count(), DEFAULT_COEFFICIENTS);
    assert_eq!(regression.decimal_context(), DecimalContext::default());
    assert!(regression.weighting().is_none());
    assert_eq!(regression.sample_count(), 0);

    let default = PolynomialRegression::default();
    assert_eq!(default.coefficient_count(), DEFAULT_COEFFICIENTS);
}

/// Test builder duplicate detection.
///
/// Verifies a parameter set twice is reported by name.
#[test]
fn test_builder_duplicate_parameter() {
    let result = PolynomialRegression::builder()
        .coefficients(2)
        .coefficients(3)
        .build();
    assert!(matches!(
        result,
        Err(RegressionError::DuplicateParameter {
            parameter: "coefficients"
        })
    ));

    let result = PolynomialRegression::builder().scale(5).scale(6).build();
    assert!(matches!(
        result,
        Err(RegressionError::DuplicateParameter { parameter: "scale" })
    ));
}

/// Test builder validation of count and scale.
///
/// Verifies invalid values are rejected at build time.
#[test]
fn test_builder_invalid_values() {
    assert!(matches!(
        PolynomialRegression::builder().coefficients(0).build(),
        Err(RegressionError::InvalidCoefficientCount(0))
    ));
    assert!(matches!(
        PolynomialRegression::builder().scale(-1).build(),
        Err(RegressionError::InvalidScale(-1))
    ));
}

/// Test builder with explicit context.
///
/// Verifies scale and rounding are applied.
#[test]
fn test_builder_context() {
    let regression = PolynomialRegression::builder()
        .scale(12)
        .rounding(RoundingMode::Down)
        .build()
        .unwrap();

    assert_eq!(regression.scale(), 12);
    assert_eq!(regression.decimal_context().rounding(), RoundingMode::Down);
}
