//! Polynomial evaluation from solved coefficients.
//!
//! ## Purpose
//!
//! This module evaluates `Σ cₖ·xᵏ` for a coefficient vector. It needs no
//! regression state, so coefficients computed elsewhere can be evaluated too.
//!
//! ## Design notes
//!
//! * **Decimal**: Evaluation runs in decimal arithmetic and converts to `f64` last.
//! * **Running power**: `xᵏ` is carried across terms rather than recomputed.
//!
//! ## Invariants
//!
//! * Coefficient `k` multiplies `xᵏ` (ascending exponent order).
//! * An empty coefficient vector evaluates to zero.

// External dependencies
use bigdecimal::BigDecimal;

// Internal dependencies
use crate::primitives::decimal::DecimalContext;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate the polynomial at a decimal `x`.
pub fn evaluate(context: &DecimalContext, coefficients: &[BigDecimal], x: &BigDecimal) -> BigDecimal {
    let mut y = context.zero();
    let mut x_power = context.one();

    for (k, coefficient) in coefficients.iter().enumerate() {
        if k > 0 {
            x_power = context.mul(&x_power, x);
        }
        y = context.add(&y, &context.mul(coefficient, &x_power));
    }

    y
}

/// Evaluate the polynomial at `x` and return the result as `f64`.
pub fn interpolate(
    context: &DecimalContext,
    coefficients: &[BigDecimal],
    x: f64,
) -> Result<f64, RegressionError> {
    let x = context.from_f64(x, "x")?;
    context.to_f64(&evaluate(context, coefficients, &x))
}
