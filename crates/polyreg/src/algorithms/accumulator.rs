//! Running power-sum accumulation for polynomial least squares.
//!
//! ## Purpose
//!
//! This module owns the regression state: the running sums of `w·xᵏ` and
//! `w·y'·xᵏ` from which the normal equations of any polynomial up to the
//! configured degree can be rebuilt without revisiting the samples.
//!
//! ## Design notes
//!
//! * **Streaming**: Samples are consumed one at a time and never stored.
//! * **Running product**: `xᵏ` is built incrementally across the sum index.
//! * **Forced terms**: Known contributions `v·x^c` are subtracted from `y`
//!   before accumulation, so only the free coefficients are fitted.
//! * **Decimal**: Every update uses the accumulator's decimal context.
//!
//! ## Key concepts
//!
//! * **Power sums**: `S[k] = Σ w·xᵏ` for `k = 0 … 2(m−1)`, `m` = coefficient count.
//! * **Cross power sums**: `T[k] = Σ w·y'·xᵏ`.
//! * **Sample index**: 1-based arrival position handed to the weighting strategy.
//!
//! ## Invariants
//!
//! * Both sum vectors have length `2·(sums_count − 1) + 1`.
//! * Sums only grow by whole samples; only `reset` clears them.
//! * A failed `add` leaves the state untouched.
//!
//! ## Non-goals
//!
//! * This module does not solve the normal equations.
//! * This module does not remove individual samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use bigdecimal::BigDecimal;
use log::trace;

// Internal dependencies
use crate::math::weighting::{BoxedWeighting, WeightingStrategy};
use crate::primitives::decimal::DecimalContext;
use crate::primitives::errors::RegressionError;

/// Number of power sums needed for `coefficient_count` coefficients.
#[inline]
pub fn sum_length(coefficient_count: usize) -> usize {
    2 * (coefficient_count - 1) + 1
}

#[inline]
fn check_count(coefficient_count: usize) -> Result<(), RegressionError> {
    if coefficient_count < 1 {
        return Err(RegressionError::InvalidCoefficientCount(coefficient_count));
    }
    Ok(())
}

// ============================================================================
// Power Sum Accumulator
// ============================================================================

/// Running regression state.
#[derive(Debug)]
pub struct PowerSumAccumulator {
    /// Number of coefficients the model solves for by default.
    coefficient_count: usize,

    /// Number of coefficients the sum vectors are sized for.
    sums_count: usize,

    /// Coefficients fixed to known values, keyed by exponent.
    forced: BTreeMap<usize, BigDecimal>,

    /// Σ w·xᵏ
    power_sums: Vec<BigDecimal>,

    /// Σ w·y'·xᵏ
    cross_power_sums: Vec<BigDecimal>,

    /// Number of samples added since the last reset.
    sample_index: usize,

    /// Optional per-sample weighting; `None` means weight 1.
    weighting: Option<BoxedWeighting>,

    /// Scale and rounding for every update.
    context: DecimalContext,
}

impl PowerSumAccumulator {
    /// Create an empty accumulator for `coefficient_count` coefficients.
    pub fn new(coefficient_count: usize, context: DecimalContext) -> Result<Self, RegressionError> {
        check_count(coefficient_count)?;
        Ok(Self::sized(coefficient_count, context))
    }

    /// Create an empty accumulator; the caller guarantees `coefficient_count >= 1`.
    pub(crate) fn sized(coefficient_count: usize, context: DecimalContext) -> Self {
        let mut accumulator = Self {
            coefficient_count,
            sums_count: coefficient_count,
            forced: BTreeMap::new(),
            power_sums: Vec::new(),
            cross_power_sums: Vec::new(),
            sample_index: 0,
            weighting: None,
            context,
        };
        accumulator.reset();
        accumulator
    }

    /// Clear all sums, forced coefficients and weighting.
    ///
    /// Sums are re-sized for the current coefficient count.
    pub fn reset(&mut self) {
        let length = sum_length(self.coefficient_count);
        let zero = self.context.zero();

        self.forced.clear();
        self.power_sums.clear();
        self.power_sums.resize(length, zero.clone());
        self.cross_power_sums.clear();
        self.cross_power_sums.resize(length, zero);
        self.sums_count = self.coefficient_count;
        self.sample_index = 0;
        self.weighting = None;
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Number of coefficients solved for by default.
    #[inline]
    pub fn coefficient_count(&self) -> usize {
        self.coefficient_count
    }

    /// Change the coefficient count. Takes effect for accumulation after `reset`.
    pub fn set_coefficient_count(&mut self, coefficient_count: usize) -> Result<(), RegressionError> {
        check_count(coefficient_count)?;
        self.coefficient_count = coefficient_count;
        Ok(())
    }

    /// Number of coefficients the current sums can serve.
    #[inline]
    pub fn sums_count(&self) -> usize {
        self.sums_count
    }

    /// Fix coefficient `index` to `value`.
    pub fn set_forced(&mut self, index: usize, value: BigDecimal) {
        self.forced.insert(index, value);
    }

    /// Forced value of coefficient `index`, if any.
    pub fn forced_value(&self, index: usize) -> Option<&BigDecimal> {
        self.forced.get(&index)
    }

    /// All forced coefficients ordered by index.
    #[inline]
    pub fn forced(&self) -> &BTreeMap<usize, BigDecimal> {
        &self.forced
    }

    /// Install a weighting strategy.
    pub fn set_weighting(&mut self, weighting: BoxedWeighting) {
        self.weighting = Some(weighting);
    }

    /// Remove the weighting strategy.
    pub fn clear_weighting(&mut self) {
        self.weighting = None;
    }

    /// Current weighting strategy.
    pub fn weighting(&self) -> Option<&(dyn WeightingStrategy + Send + Sync)> {
        self.weighting.as_deref()
    }

    /// Decimal context used for every update.
    #[inline]
    pub fn context(&self) -> DecimalContext {
        self.context
    }

    // ========================================================================
    // State Access
    // ========================================================================

    /// Σ w·xᵏ for `k = 0 … 2(sums_count − 1)`.
    #[inline]
    pub fn power_sums(&self) -> &[BigDecimal] {
        &self.power_sums
    }

    /// Σ w·y'·xᵏ for `k = 0 … 2(sums_count − 1)`.
    #[inline]
    pub fn cross_power_sums(&self) -> &[BigDecimal] {
        &self.cross_power_sums
    }

    /// Number of samples added since the last reset.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_index
    }

    // ========================================================================
    // Accumulation
    // ========================================================================

    /// Add one sample to the running sums.
    pub fn add(&mut self, x: f64, y: f64) -> Result<(), RegressionError> {
        if self.coefficient_count != self.sums_count {
            return Err(RegressionError::ResetRequired {
                configured: self.coefficient_count,
                accumulated: self.sums_count,
            });
        }

        let ctx = self.context;
        let x = ctx.from_f64(x, "x")?;
        let mut y = ctx.from_f64(y, "y")?;

        let index = self.sample_index + 1;
        let weight = match &self.weighting {
            Some(strategy) => Some(ctx.from_f64(strategy.weight(index), "weight")?),
            None => None,
        };

        // Remove the known contribution of forced terms
        for (&exponent, value) in &self.forced {
            let term = ctx.mul(value, &ctx.powi(&x, exponent));
            y = ctx.sub(&y, &term);
        }

        trace!("sample {}: x={}, y'={}, weight={:?}", index, x, y, weight);

        let mut x_power = ctx.one();
        for k in 0..self.power_sums.len() {
            let term = match &weight {
                Some(w) => ctx.mul(&x_power, w),
                None => x_power.clone(),
            };

            self.power_sums[k] = ctx.add(&self.power_sums[k], &term);
            self.cross_power_sums[k] = ctx.add(&self.cross_power_sums[k], &ctx.mul(&y, &term));

            x_power = ctx.mul(&x_power, &x);
        }

        self.sample_index = index;
        Ok(())
    }
}
