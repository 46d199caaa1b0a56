//! Execution engine for solving accumulated regressions.
//!
//! ## Purpose
//!
//! This module orchestrates one solve: it validates the request against the
//! accumulated state, assembles the normal equations, and runs the solver.
//!
//! ## Design notes
//!
//! * **Read-only**: The accumulator is only borrowed; the matrix is transient.
//! * **Repeatable**: Any count up to the accumulated one can be solved from
//!   the same sums without re-adding data.
//!
//! ## Non-goals
//!
//! * This module does not mutate the regression state.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use bigdecimal::BigDecimal;
use log::debug;

// Internal dependencies
use crate::algorithms::accumulator::PowerSumAccumulator;
use crate::algorithms::normal_equations::NormalEquationBuilder;
use crate::algorithms::solver::GaussJordanSolver;
use crate::engine::validator::Validator;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Executor
// ============================================================================

/// Runs the build-and-solve pipeline over an accumulator.
pub struct FitExecutor;

impl FitExecutor {
    /// Solve for `requested` coefficients, ordered by ascending exponent.
    pub fn solve(
        accumulator: &PowerSumAccumulator,
        requested: usize,
    ) -> Result<Vec<BigDecimal>, RegressionError> {
        Validator::validate_requested_count(requested, accumulator.sums_count())?;

        let forced = accumulator.forced();
        Validator::validate_forced_indices(forced, requested)?;
        Validator::validate_sample_count(accumulator.sample_count(), requested - forced.len())?;

        debug!(
            "solving {} coefficients ({} forced) from {} samples at scale {}",
            requested,
            forced.len(),
            accumulator.sample_count(),
            accumulator.context().scale()
        );

        let matrix = NormalEquationBuilder::build(accumulator, requested);
        GaussJordanSolver::new(accumulator.context()).solve(matrix)
    }
}
