//! Arbitrary-precision decimal arithmetic context.
//!
//! ## Purpose
//!
//! This module wraps the `bigdecimal` backend behind a small, caller-owned
//! context that fixes the number of digits kept after the decimal point and
//! the rounding applied when a result needs more.
//!
//! ## Design notes
//!
//! * **Scale**: Every arithmetic result is rounded to `scale` fractional digits.
//! * **Exact zero**: Zero tests are exact; no epsilon comparisons.
//! * **Conversion**: `f64` inputs go through their shortest decimal representation,
//!   so `0.1` becomes exactly `0.1` and not its binary expansion.
//!
//! ## Invariants
//!
//! * The scale is non-negative.
//! * Non-finite `f64` values are never converted.
//!
//! ## Non-goals
//!
//! * This module does not implement decimal arithmetic itself.
//! * This module does not provide transcendental functions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

// External dependencies
use bigdecimal::{BigDecimal, RoundingMode};
use core::str::FromStr;
use num_traits::{One, ToPrimitive, Zero};

// Internal dependencies
use crate::primitives::errors::RegressionError;

/// Default number of fractional digits kept by every operation.
pub const DEFAULT_SCALE: i64 = 20;

// ============================================================================
// Decimal Context
// ============================================================================

/// Scale and rounding applied to every decimal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    scale: i64,
    rounding: RoundingMode,
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            rounding: RoundingMode::HalfEven,
        }
    }
}

impl DecimalContext {
    /// Create a context with the given scale and rounding mode.
    pub fn new(scale: i64, rounding: RoundingMode) -> Result<Self, RegressionError> {
        if scale < 0 {
            return Err(RegressionError::InvalidScale(scale));
        }
        Ok(Self { scale, rounding })
    }

    /// Number of fractional digits kept.
    #[inline]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Rounding mode applied when a result exceeds the scale.
    #[inline]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    // ========================================================================
    // Constants
    // ========================================================================

    /// Decimal zero.
    #[inline]
    pub fn zero(&self) -> BigDecimal {
        BigDecimal::zero()
    }

    /// Decimal one.
    #[inline]
    pub fn one(&self) -> BigDecimal {
        BigDecimal::one()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Round a value to the context scale.
    #[inline]
    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        value.with_scale_round(self.scale, self.rounding)
    }

    /// a + b
    #[inline]
    pub fn add(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a + b)
    }

    /// a - b
    #[inline]
    pub fn sub(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a - b)
    }

    /// a * b
    #[inline]
    pub fn mul(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a * b)
    }

    /// a / b
    ///
    /// The caller guarantees `b` is non-zero; the solver only divides by pivots
    /// that passed an exact zero test.
    #[inline]
    pub fn div(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a / b)
    }

    /// base^exponent by repeated multiplication.
    pub fn powi(&self, base: &BigDecimal, exponent: usize) -> BigDecimal {
        let mut result = self.one();
        for _ in 0..exponent {
            result = self.mul(&result, base);
        }
        result
    }

    /// Exact zero test.
    #[inline]
    pub fn is_zero(&self, value: &BigDecimal) -> bool {
        value.is_zero()
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert a finite `f64` into a decimal at the context scale.
    pub fn from_f64(&self, value: f64, name: &str) -> Result<BigDecimal, RegressionError> {
        if !value.is_finite() {
            return Err(RegressionError::InvalidNumericValue(format!(
                "{}={}",
                name, value
            )));
        }

        let parsed = BigDecimal::from_str(&value.to_string()).map_err(|_| {
            RegressionError::InvalidNumericValue(format!("{}={} is not a decimal", name, value))
        })?;

        Ok(self.round(parsed))
    }

    /// Convert a decimal back to the nearest `f64`.
    pub fn to_f64(&self, value: &BigDecimal) -> Result<f64, RegressionError> {
        match value.to_f64() {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(RegressionError::InvalidNumericValue(format!(
                "{} does not fit in f64",
                value
            ))),
        }
    }
}
