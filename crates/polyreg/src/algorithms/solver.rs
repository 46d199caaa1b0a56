//! Gauss-Jordan elimination for the normal equations.
//!
//! ## Purpose
//!
//! This module reduces an augmented normal-equation matrix to its solution
//! using two elementary row operations: scaling a row, and subtracting a
//! multiple of one row from another.
//!
//! ## Design notes
//!
//! * **Out-of-order pivots**: The pivot for column `c` is the first unfinished
//!   row with a non-zero entry, which need not be row `c`. The chosen rows are
//!   recorded in a `column → row` map and replayed during back-substitution.
//! * **Exact zero tests**: Pivot eligibility is decided by exact decimal zero,
//!   never by a tolerance.
//! * **Decimal**: All arithmetic runs through the solver's decimal context.
//!
//! ## Key concepts
//!
//! * **Forward phase**: Leaves every pivot at 1 with zeros below it in pivot order.
//! * **Back-substitution**: Clears the entries above each pivot, leaving the
//!   solution in the right-hand side column:
//!
//! ```text
//!   | 1 0 0 … 0  c0 |
//!   | 0 1 0 … 0  c1 |
//!   | …           … |
//!   | 0 0 0 … 1  cn |
//! ```
//!
//! ## Invariants
//!
//! * Every column receives exactly one pivot row, or the solve fails.
//! * Returned coefficients are ordered by ascending exponent.
//!
//! ## Non-goals
//!
//! * This module does not pick partial pivots by magnitude.
//! * This module does not handle non-square systems.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use bigdecimal::BigDecimal;
use log::{debug, trace};

// Internal dependencies
use crate::primitives::decimal::DecimalContext;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::AugmentedMatrix;

// ============================================================================
// Solver
// ============================================================================

/// Gauss-Jordan solver over decimals.
#[derive(Debug, Clone, Copy)]
pub struct GaussJordanSolver {
    context: DecimalContext,
}

impl GaussJordanSolver {
    /// Create a solver using the given decimal context.
    pub fn new(context: DecimalContext) -> Self {
        Self { context }
    }

    /// Solve the augmented system, consuming the matrix.
    pub fn solve(
        &self,
        mut matrix: AugmentedMatrix<BigDecimal>,
    ) -> Result<Vec<BigDecimal>, RegressionError> {
        let n = matrix.rows();
        let mut done = vec![false; n];

        let pivot_rows = self.forward(&mut matrix, &mut done)?;

        done.fill(false);
        Ok(self.back_substitute(&mut matrix, &mut done, &pivot_rows))
    }

    // ========================================================================
    // Forward Elimination
    // ========================================================================

    /// Normalize one pivot per column and clear that column in unfinished rows.
    ///
    /// Returns the pivot row chosen for each column.
    fn forward(
        &self,
        matrix: &mut AugmentedMatrix<BigDecimal>,
        done: &mut [bool],
    ) -> Result<Vec<usize>, RegressionError> {
        let ctx = &self.context;
        let n = matrix.rows();
        let rhs = matrix.rhs_column();
        let mut pivot_rows = Vec::with_capacity(n);

        for column in 0..n {
            let active = (0..n)
                .find(|&row| !done[row] && !ctx.is_zero(matrix.get(row, column)))
                .ok_or_else(|| {
                    debug!("no pivot for column {} of {}x{} system", column, n, n + 1);
                    RegressionError::SingularMatrix { column }
                })?;

            trace!("column {}: pivot row {}", column, active);
            pivot_rows.push(active);

            // Pivot entry becomes exactly 1
            let pivot = matrix.get(active, column).clone();
            for entry in &mut matrix.row_mut(active)[column..=rhs] {
                *entry = ctx.div(entry, &pivot);
            }
            done[active] = true;

            for row in 0..n {
                if done[row] || ctx.is_zero(matrix.get(row, column)) {
                    continue;
                }
                self.subtract_scaled(matrix, row, active, column);
            }
        }

        Ok(pivot_rows)
    }

    // ========================================================================
    // Back-Substitution
    // ========================================================================

    /// Clear every pivot's column from the rows still pending, last column first.
    fn back_substitute(
        &self,
        matrix: &mut AugmentedMatrix<BigDecimal>,
        done: &mut [bool],
        pivot_rows: &[usize],
    ) -> Vec<BigDecimal> {
        let n = matrix.rows();
        let rhs = matrix.rhs_column();
        let mut coefficients = vec![self.context.zero(); n];

        for column in (0..n).rev() {
            let active = pivot_rows[column];
            done[active] = true;

            for row in 0..n {
                if !done[row] {
                    self.subtract_scaled(matrix, row, active, column);
                }
            }

            coefficients[column] = matrix.get(active, rhs).clone();
        }

        coefficients
    }

    /// `target[j] -= target[column] · source[j]` for `j = column ..= rhs`.
    fn subtract_scaled(
        &self,
        matrix: &mut AugmentedMatrix<BigDecimal>,
        target: usize,
        source: usize,
        column: usize,
    ) {
        let ctx = &self.context;
        let rhs = matrix.rhs_column();
        let (target_row, source_row) = matrix.row_pair_mut(target, source);

        let factor = target_row[column].clone();
        if ctx.is_zero(&factor) {
            return;
        }

        for j in column..=rhs {
            let scaled = ctx.mul(&factor, &source_row[j]);
            target_row[j] = ctx.sub(&target_row[j], &scaled);
        }
    }
}
