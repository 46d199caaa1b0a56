//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates statistical metrics for a solved coefficient vector:
//! - Coefficient of determination (R²)
//! - Adjusted R²
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness-of-fit metrics.
pub mod goodness;
