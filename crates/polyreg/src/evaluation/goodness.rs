//! Goodness-of-fit metrics for fitted polynomials.
//!
//! ## Purpose
//!
//! This module measures how well a coefficient vector explains a sample set,
//! via the coefficient of determination (R²) and its predictor-adjusted form.
//!
//! ## Design notes
//!
//! * **Predictions**: Fitted values come from decimal interpolation; the
//!   metric sums themselves are plain `f64`.
//! * **Degenerate data**: R² over samples whose y-values are all equal is
//!   undefined and reported as an error instead of dividing by zero.
//!
//! ## Key concepts
//!
//! * **R²**: `1 − SSE / SST`, with `SSE = Σ (y − ŷ)²` and `SST = Σ (y − ȳ)²`.
//! * **Adjusted R²**: `1 − (1 − R²)(n − 1) / (n − p − 1)` for `p` predictors.
//!
//! ## Invariants
//!
//! * R² <= 1 (R² = 1 is a perfect fit).
//! * Adjusted R² is exactly 1 when `n − p − 1 == 0`.
//!
//! ## Non-goals
//!
//! * This module does not provide p-values or confidence intervals.
//! * This module does not compute weighted metrics.

// External dependencies
use bigdecimal::BigDecimal;
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::interpolation::interpolate;
use crate::primitives::decimal::DecimalContext;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Fit Quality
// ============================================================================

/// Goodness-of-fit summary for one coefficient vector over one sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitQuality {
    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// R² adjusted for the number of predictors.
    pub r_adjusted: f64,

    /// Number of samples evaluated.
    pub sample_count: usize,

    /// Number of predictors (polynomial degree).
    pub predictors: usize,
}

impl FitQuality {
    /// Compute both metrics, using `coefficients.len() − 1` predictors.
    pub fn compute(
        context: &DecimalContext,
        samples: &[(f64, f64)],
        coefficients: &[BigDecimal],
    ) -> core::result::Result<Self, RegressionError> {
        let r_squared = GoodnessOfFit::r_squared(context, samples, coefficients)?;
        let predictors = coefficients.len().saturating_sub(1);
        let sample_count = samples.len();

        Ok(Self {
            r_squared,
            r_adjusted: GoodnessOfFit::r_adjusted(r_squared, predictors, sample_count),
            sample_count,
            predictors,
        })
    }
}

// ============================================================================
// Metrics
// ============================================================================

/// Goodness-of-fit calculations.
pub struct GoodnessOfFit;

impl GoodnessOfFit {
    /// Coefficient of determination of `coefficients` over `samples`.
    pub fn r_squared(
        context: &DecimalContext,
        samples: &[(f64, f64)],
        coefficients: &[BigDecimal],
    ) -> core::result::Result<f64, RegressionError> {
        if samples.is_empty() {
            return Err(RegressionError::EmptyInput);
        }

        let mean = samples.iter().fold(0.0, |acc, &(_, y)| acc + y) / samples.len() as f64;

        let mut sse = 0.0;
        let mut sst = 0.0;
        for &(x, y) in samples {
            let error = y - interpolate(context, coefficients, x)?;
            sse += error * error;

            let deviation = y - mean;
            sst += deviation * deviation;
        }

        if sst == 0.0 {
            return Err(RegressionError::DegenerateMetric(
                "R² is undefined when all y-values are identical",
            ));
        }

        Ok(1.0 - sse / sst)
    }

    /// R² adjusted for `predictors` over `sample_size` samples.
    pub fn r_adjusted(r_squared: f64, predictors: usize, sample_size: usize) -> f64 {
        let dof = sample_size as i64 - predictors as i64 - 1;
        if dof == 0 {
            return 1.0;
        }

        1.0 - ((1.0 - r_squared) * (sample_size as f64 - 1.0)) / dof as f64
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FitQuality {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Quality:")?;
        writeln!(f, "  Samples:      {}", self.sample_count)?;
        writeln!(f, "  Predictors:   {}", self.predictors)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        writeln!(f, "  Adjusted R²:  {:.6}", self.r_adjusted)?;
        Ok(())
    }
}
