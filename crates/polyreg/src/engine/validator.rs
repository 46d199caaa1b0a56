//! Validation of regression configuration and solve requests.
//!
//! ## Purpose
//!
//! This module checks the configuration values that can be validated eagerly
//! (coefficient count, builder duplicates) and the cross-cutting conditions that
//! can only be checked when coefficients are requested.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Deferred**: Forced indices and sum ranges are checked at solve time,
//!   so a forced index may be registered before the count is large enough.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clean or transform sample data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// External dependencies
use bigdecimal::BigDecimal;

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and solve requests.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// A polynomial needs at least one coefficient.
    pub fn validate_coefficient_count(count: usize) -> Result<(), RegressionError> {
        if count < 1 {
            return Err(RegressionError::InvalidCoefficientCount(count));
        }
        Ok(())
    }

    /// Reject builder parameters that were set more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegressionError> {
        if let Some(parameter) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Solve-Time Validation
    // ========================================================================

    /// The requested count must be served by the accumulated power sums.
    pub fn validate_requested_count(
        requested: usize,
        accumulated: usize,
    ) -> Result<(), RegressionError> {
        Self::validate_coefficient_count(requested)?;
        if requested > accumulated {
            return Err(RegressionError::CoefficientCountExceedsSums {
                requested,
                accumulated,
            });
        }
        Ok(())
    }

    /// Every forced index must address a coefficient of the requested fit.
    pub fn validate_forced_indices(
        forced: &BTreeMap<usize, BigDecimal>,
        requested: usize,
    ) -> Result<(), RegressionError> {
        // Keys are ordered, so the last one is the largest
        if let Some((&index, _)) = forced.iter().next_back() {
            if index >= requested {
                return Err(RegressionError::ForcedCoefficientOutOfRange {
                    index,
                    count: requested,
                });
            }
        }
        Ok(())
    }

    /// At least one sample per free coefficient.
    pub fn validate_sample_count(samples: usize, free: usize) -> Result<(), RegressionError> {
        if samples < free {
            return Err(RegressionError::TooFewPoints {
                got: samples,
                min: free,
            });
        }
        Ok(())
    }
}
