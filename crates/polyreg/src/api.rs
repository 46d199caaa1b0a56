//! High-level API for polynomial regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the
//! [`PolynomialRegression`] state object fed one sample at a time, and a
//! fluent [`PolynomialRegressionBuilder`] for configuring it.
//!
//! ## Design notes
//!
//! * **Caller-owned state**: Each regression owns its sums; there is no global state.
//! * **Single entry point**: All accumulation goes through `add_data`.
//! * **Deferred checks**: Forced indices and sum ranges are validated when
//!   coefficients are requested.
//! * **Ergonomic**: Builder with sensible defaults for every parameter.
//!
//! ## Key concepts
//!
//! * **Coefficient count**: Degree + 1. Lower counts can be solved from the
//!   same sums; higher counts need a `reset` and the data again.
//! * **Forced coefficients**: Fixed values, returned exactly by the solve.
//! * **Weighting**: Optional strategy weighting samples by arrival index.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolynomialRegressionBuilder`] via `PolynomialRegression::builder()`.
//! 2. Chain configuration methods (`.coefficients()`, `.scale()`, etc.).
//! 3. Call `.build()` to validate and get a [`PolynomialRegression`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use bigdecimal::{BigDecimal, RoundingMode};

// Internal dependencies
use crate::algorithms::accumulator::PowerSumAccumulator;
use crate::algorithms::interpolation;
use crate::engine::executor::FitExecutor;
use crate::engine::validator::Validator;
use crate::evaluation::goodness::GoodnessOfFit;
use crate::math::weighting::BoxedWeighting;

// Publicly re-exported types
pub use crate::evaluation::goodness::FitQuality;
pub use crate::math::weighting::{
    ExponentialWeighting, LinearWeighting, UniformWeighting, WeightingStrategy,
};
pub use crate::primitives::decimal::{DecimalContext, DEFAULT_SCALE};
pub use crate::primitives::errors::RegressionError;

/// Number of coefficients used when none is configured (a quadratic).
pub const DEFAULT_COEFFICIENTS: usize = 3;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`PolynomialRegression`].
#[derive(Debug, Default)]
pub struct PolynomialRegressionBuilder {
    /// Number of coefficients (degree + 1).
    pub coefficients: Option<usize>,

    /// Fractional digits kept by every decimal operation.
    pub scale: Option<i64>,

    /// Rounding applied when a result exceeds the scale.
    pub rounding: Option<RoundingMode>,

    /// Coefficients fixed to known values.
    pub forced: Vec<(usize, f64)>,

    /// Per-sample weighting strategy.
    pub weighting: Option<BoxedWeighting>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl PolynomialRegressionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of coefficients (degree + 1).
    pub fn coefficients(mut self, count: usize) -> Self {
        if self.coefficients.is_some() {
            self.duplicate_param = Some("coefficients");
        }
        self.coefficients = Some(count);
        self
    }

    /// Set the number of fractional digits kept by decimal arithmetic.
    pub fn scale(mut self, scale: i64) -> Self {
        if self.scale.is_some() {
            self.duplicate_param = Some("scale");
        }
        self.scale = Some(scale);
        self
    }

    /// Set the decimal rounding mode.
    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        if self.rounding.is_some() {
            self.duplicate_param = Some("rounding");
        }
        self.rounding = Some(rounding);
        self
    }

    /// Fix coefficient `index` to `value`. Later calls for the same index win.
    pub fn forced_coefficient(mut self, index: usize, value: f64) -> Self {
        self.forced.push((index, value));
        self
    }

    /// Set the per-sample weighting strategy.
    pub fn weighting<W>(mut self, weighting: W) -> Self
    where
        W: WeightingStrategy + Send + Sync + 'static,
    {
        if self.weighting.is_some() {
            self.duplicate_param = Some("weighting");
        }
        self.weighting = Some(Box::new(weighting));
        self
    }

    /// Validate the configuration and create the regression.
    pub fn build(self) -> Result<PolynomialRegression, RegressionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let count = self.coefficients.unwrap_or(DEFAULT_COEFFICIENTS);
        Validator::validate_coefficient_count(count)?;

        let defaults = DecimalContext::default();
        let context = DecimalContext::new(
            self.scale.unwrap_or(defaults.scale()),
            self.rounding.unwrap_or(defaults.rounding()),
        )?;

        let mut regression = PolynomialRegression {
            accumulator: PowerSumAccumulator::new(count, context)?,
        };
        for (index, value) in self.forced {
            regression.set_forced_coefficient(index, value)?;
        }
        if let Some(weighting) = self.weighting {
            regression.accumulator.set_weighting(weighting);
        }

        Ok(regression)
    }
}

// ============================================================================
// Polynomial Regression
// ============================================================================

/// Least-squares polynomial regression over a stream of samples.
#[derive(Debug)]
pub struct PolynomialRegression {
    accumulator: PowerSumAccumulator,
}

impl Default for PolynomialRegression {
    fn default() -> Self {
        Self {
            accumulator: PowerSumAccumulator::sized(DEFAULT_COEFFICIENTS, DecimalContext::default()),
        }
    }
}

impl PolynomialRegression {
    /// Create a regression for `coefficients` coefficients with the default decimal context.
    pub fn new(coefficients: usize) -> Result<Self, RegressionError> {
        Ok(Self {
            accumulator: PowerSumAccumulator::new(coefficients, DecimalContext::default())?,
        })
    }

    /// Start configuring a regression.
    pub fn builder() -> PolynomialRegressionBuilder {
        PolynomialRegressionBuilder::new()
    }

    /// Clear all data, forced coefficients and weighting.
    ///
    /// Must be called after changing the coefficient count and before adding data.
    pub fn reset(&mut self) {
        self.accumulator.reset();
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Set the number of coefficients (degree + 1).
    ///
    /// Lower counts can be solved immediately from the existing sums; higher
    /// counts need a `reset` and the data again.
    pub fn set_coefficient_count(&mut self, coefficients: usize) -> Result<(), RegressionError> {
        self.accumulator.set_coefficient_count(coefficients)
    }

    /// Set the number of coefficients.
    #[deprecated(note = "sets the number of coefficients, not the degree; use `set_coefficient_count`")]
    pub fn set_degree(&mut self, coefficients: usize) -> Result<(), RegressionError> {
        self.set_coefficient_count(coefficients)
    }

    /// Number of coefficients solved for by default.
    pub fn coefficient_count(&self) -> usize {
        self.accumulator.coefficient_count()
    }

    /// Fix coefficient `index` to `value` for subsequent samples and solves.
    pub fn set_forced_coefficient(&mut self, index: usize, value: f64) -> Result<(), RegressionError> {
        let value = self.accumulator.context().from_f64(value, "forced coefficient")?;
        self.accumulator.set_forced(index, value);
        Ok(())
    }

    /// Forced value of coefficient `index`, if it is forced.
    pub fn forced_coefficient(&self, index: usize) -> Option<&BigDecimal> {
        self.accumulator.forced_value(index)
    }

    /// Weight subsequent samples with `weighting`.
    pub fn set_weighting<W>(&mut self, weighting: W)
    where
        W: WeightingStrategy + Send + Sync + 'static,
    {
        self.accumulator.set_weighting(Box::new(weighting));
    }

    /// Stop weighting subsequent samples.
    pub fn clear_weighting(&mut self) {
        self.accumulator.clear_weighting();
    }

    /// Current weighting strategy, if any.
    pub fn weighting(&self) -> Option<&(dyn WeightingStrategy + Send + Sync)> {
        self.accumulator.weighting()
    }

    /// Decimal context used by this regression.
    pub fn decimal_context(&self) -> DecimalContext {
        self.accumulator.context()
    }

    /// Number of fractional digits kept by decimal arithmetic.
    pub fn scale(&self) -> i64 {
        self.accumulator.context().scale()
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Add a sample. Samples are weighted in the order they are added.
    pub fn add_data(&mut self, x: f64, y: f64) -> Result<(), RegressionError> {
        self.accumulator.add(x, y)
    }

    /// Number of samples added since the last reset.
    pub fn sample_count(&self) -> usize {
        self.accumulator.sample_count()
    }

    // ========================================================================
    // Solving
    // ========================================================================

    /// Coefficients for the configured count, ordered by ascending exponent.
    pub fn coefficients(&self) -> Result<Vec<BigDecimal>, RegressionError> {
        self.coefficients_for(self.coefficient_count())
    }

    /// Coefficients for `count` coefficients, ordered by ascending exponent.
    ///
    /// `count` may be lower than the count the data was accumulated for.
    pub fn coefficients_for(&self, count: usize) -> Result<Vec<BigDecimal>, RegressionError> {
        FitExecutor::solve(&self.accumulator, count)
    }

    /// Coefficients for the configured count, converted to `f64`.
    pub fn coefficients_f64(&self) -> Result<Vec<f64>, RegressionError> {
        let context = self.accumulator.context();
        self.coefficients()?
            .iter()
            .map(|c| context.to_f64(c))
            .collect()
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate `coefficients` at `x` with the default decimal context.
    pub fn interpolate(coefficients: &[BigDecimal], x: f64) -> Result<f64, RegressionError> {
        interpolation::interpolate(&DecimalContext::default(), coefficients, x)
    }

    /// Evaluate `coefficients` at `x` with an explicit decimal context.
    pub fn interpolate_with(
        context: &DecimalContext,
        coefficients: &[BigDecimal],
        x: f64,
    ) -> Result<f64, RegressionError> {
        interpolation::interpolate(context, coefficients, x)
    }

    /// Coefficient of determination of `coefficients` over `samples`.
    pub fn r_squared(
        &self,
        samples: &[(f64, f64)],
        coefficients: &[BigDecimal],
    ) -> Result<f64, RegressionError> {
        GoodnessOfFit::r_squared(&self.accumulator.context(), samples, coefficients)
    }

    /// R² adjusted for `predictors` over `sample_size` samples.
    pub fn r_adjusted(r_squared: f64, predictors: usize, sample_size: usize) -> f64 {
        GoodnessOfFit::r_adjusted(r_squared, predictors, sample_size)
    }

    /// R² and adjusted R² of `coefficients` over `samples` in one pass.
    pub fn fit_quality(
        &self,
        samples: &[(f64, f64)],
        coefficients: &[BigDecimal],
    ) -> Result<FitQuality, RegressionError> {
        FitQuality::compute(&self.accumulator.context(), samples, coefficients)
    }
}
