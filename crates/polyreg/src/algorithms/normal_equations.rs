//! Normal-equation assembly from accumulated power sums.
//!
//! ## Purpose
//!
//! This module turns the accumulator's power sums into the augmented matrix
//! of the least-squares normal equations, eliminating forced coefficients
//! along the way.
//!
//! ## Design notes
//!
//! * **Hankel structure**: Entry `(r, c)` only depends on `r + c`, so the
//!   whole matrix is read straight from the power sums.
//! * **Forced elimination**: A forced coefficient `c = v` becomes the
//!   identity equation `1·a_c = v`, decoupled from every other row.
//!
//! For a 4-coefficient fit with coefficient 1 forced to `F`:
//!
//! ```text
//!   [ S0 S1 S2 S3 | T0 ]      [ S0 0 S2 S3 | T0 ]
//!   [ S1 S2 S3 S4 | T1 ]  ->  [ 0  1 0  0  | F  ]
//!   [ S2 S3 S4 S5 | T2 ]      [ S2 0 S4 S5 | T2 ]
//!   [ S3 S4 S5 S6 | T3 ]      [ S3 0 S5 S6 | T3 ]
//! ```
//!
//! ## Invariants
//!
//! * The requested size never needs sums beyond those accumulated.
//! * Forced indices are below the requested size (checked by the validator).
//!
//! ## Non-goals
//!
//! * This module does not solve the system.

// External dependencies
use bigdecimal::BigDecimal;

// Internal dependencies
use crate::algorithms::accumulator::PowerSumAccumulator;
use crate::primitives::matrix::AugmentedMatrix;

// ============================================================================
// Normal Equation Builder
// ============================================================================

/// Builds augmented normal-equation matrices.
pub struct NormalEquationBuilder;

impl NormalEquationBuilder {
    /// Build the `coefficients × (coefficients + 1)` augmented matrix.
    pub fn build(
        accumulator: &PowerSumAccumulator,
        coefficients: usize,
    ) -> AugmentedMatrix<BigDecimal> {
        debug_assert!(coefficients >= 1 && coefficients <= accumulator.sums_count());

        let power_sums = accumulator.power_sums();
        let cross_power_sums = accumulator.cross_power_sums();
        let rhs = coefficients;

        let mut matrix = AugmentedMatrix::zeros(coefficients);
        for row in 0..coefficients {
            for column in 0..coefficients {
                matrix.set(row, column, power_sums[row + column].clone());
            }
            matrix.set(row, rhs, cross_power_sums[row].clone());
        }

        let context = accumulator.context();
        for (&forced, value) in accumulator.forced() {
            if forced >= coefficients {
                continue;
            }

            for index in 0..coefficients {
                matrix.set(index, forced, context.zero());
                matrix.set(forced, index, context.zero());
            }
            matrix.set(forced, forced, context.one());
            matrix.set(forced, rhs, value.clone());
        }

        matrix
    }
}
