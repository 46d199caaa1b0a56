//! Dense augmented matrix storage for the normal equations.
//!
//! ## Purpose
//!
//! This module provides the transient `n × (n + 1)` matrix the solver works
//! on: `n` coefficient columns followed by the right-hand side column.
//!
//! ## Design notes
//!
//! * **Row-major**: Rows are contiguous so row operations work on slices.
//! * **Split borrows**: `row_pair_mut` hands out a mutable target row and a
//!   shared source row at the same time for elimination steps.
//!
//! ## Invariants
//!
//! * Storage length is always `rows * (rows + 1)`.
//!
//! ## Non-goals
//!
//! * This module does not perform arithmetic on the entries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Zero;

// ============================================================================
// Augmented Matrix
// ============================================================================

/// Square coefficient matrix with one extra right-hand side column.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T> {
    rows: usize,
    data: Vec<T>,
}

impl<T: Clone + Zero> AugmentedMatrix<T> {
    /// Create an `rows × (rows + 1)` matrix filled with zeros.
    pub fn zeros(rows: usize) -> Self {
        let mut data = Vec::with_capacity(rows * (rows + 1));
        data.resize(rows * (rows + 1), T::zero());
        Self { rows, data }
    }
}

impl<T> AugmentedMatrix<T> {
    /// Number of rows (and coefficient columns).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns including the right-hand side.
    #[inline]
    pub fn columns(&self) -> usize {
        self.rows + 1
    }

    /// Index of the right-hand side column.
    #[inline]
    pub fn rhs_column(&self) -> usize {
        self.rows
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows && column < self.columns());
        row * self.columns() + column
    }

    /// Entry at `(row, column)`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> &T {
        &self.data[self.offset(row, column)]
    }

    /// Overwrite the entry at `(row, column)`.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        let offset = self.offset(row, column);
        self.data[offset] = value;
    }

    /// Full row, right-hand side included.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let width = self.columns();
        &self.data[row * width..(row + 1) * width]
    }

    /// Mutable full row, right-hand side included.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let width = self.columns();
        &mut self.data[row * width..(row + 1) * width]
    }

    /// Borrow `target` mutably and `source` immutably at the same time.
    ///
    /// # Panics
    ///
    /// Panics if `target == source`.
    pub fn row_pair_mut(&mut self, target: usize, source: usize) -> (&mut [T], &[T]) {
        assert_ne!(target, source, "row_pair_mut needs two distinct rows");
        let width = self.columns();
        if target < source {
            let (head, tail) = self.data.split_at_mut(source * width);
            (&mut head[target * width..(target + 1) * width], &tail[..width])
        } else {
            let (head, tail) = self.data.split_at_mut(target * width);
            (&mut tail[..width], &head[source * width..(source + 1) * width])
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display> Display for AugmentedMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for row in 0..self.rows {
            write!(f, "[")?;
            for (column, value) in self.row(row).iter().enumerate() {
                if column == self.rhs_column() {
                    write!(f, " |")?;
                }
                write!(f, " {}", value)?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
