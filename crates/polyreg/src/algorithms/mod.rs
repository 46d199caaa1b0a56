//! Layer 3: Algorithms
//!
//! This layer implements the accumulation-and-solve pipeline: running power
//! sums, normal-equation assembly with forced-coefficient elimination,
//! Gauss-Jordan solving, and polynomial evaluation. It is orchestrated by the
//! engine layer.

// Running power sums over the sample stream.
pub mod accumulator;

// Augmented normal-equation matrix assembly.
pub mod normal_equations;

// Gauss-Jordan elimination with pivot tracking.
pub mod solver;

// Polynomial evaluation.
pub mod interpolation;
