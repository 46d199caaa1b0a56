//! Per-sample weighting strategies.
//!
//! ## Purpose
//!
//! This module defines the capability used to weight samples by their
//! position in the accumulation sequence, along with a few ready-made
//! strategies.
//!
//! ## Design notes
//!
//! * **Index-based**: Weights depend on the 1-based arrival index, never on `x`.
//! * **Plain floats**: Weights are `f64`; they are converted to decimals by the accumulator.
//! * **Closures**: Any `Fn(usize) -> f64` is a strategy.
//!
//! ## Key concepts
//!
//! * **Uniform**: Every sample counts once (the behaviour when no strategy is set).
//! * **Linear**: Weight grows with the index, favouring recent samples.
//! * **Exponential**: Weight is `base^index`; `base > 1` favours recent samples,
//!   `base < 1` favours early ones.
//!
//! ## Invariants
//!
//! * Index 1 is the first sample added since the last reset.
//!
//! ## Non-goals
//!
//! * This module does not validate the returned weights (the accumulator rejects non-finite ones).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use core::fmt::{Debug, Formatter, Result};
use num_traits::pow;

// ============================================================================
// Weighting Trait
// ============================================================================

/// Supplies the weight of the sample at a given 1-based index.
pub trait WeightingStrategy {
    /// Weight of the `index`-th sample (first sample is `1`).
    fn weight(&self, index: usize) -> f64;
}

impl<F> WeightingStrategy for F
where
    F: Fn(usize) -> f64,
{
    #[inline]
    fn weight(&self, index: usize) -> f64 {
        self(index)
    }
}

// ============================================================================
// Built-in Strategies
// ============================================================================

/// Every sample has weight 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniformWeighting;

impl WeightingStrategy for UniformWeighting {
    #[inline]
    fn weight(&self, _index: usize) -> f64 {
        1.0
    }
}

/// Weight equals the sample index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearWeighting;

impl WeightingStrategy for LinearWeighting {
    #[inline]
    fn weight(&self, index: usize) -> f64 {
        index as f64
    }
}

/// Weight is `base^index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialWeighting {
    /// Growth (> 1) or decay (< 1) factor per sample.
    pub base: f64,
}

impl ExponentialWeighting {
    /// Create an exponential strategy with the given per-sample factor.
    pub fn new(base: f64) -> Self {
        Self { base }
    }
}

impl WeightingStrategy for ExponentialWeighting {
    fn weight(&self, index: usize) -> f64 {
        pow(self.base, index)
    }
}

// ============================================================================
// Boxed Strategy
// ============================================================================

/// Strategy as stored by the regression state.
pub type BoxedWeighting = Box<dyn WeightingStrategy + Send + Sync>;

impl Debug for dyn WeightingStrategy + Send + Sync {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("WeightingStrategy")
    }
}
