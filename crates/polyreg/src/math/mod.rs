//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure building blocks the algorithms plug into:
//! per-sample weighting strategies.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-sample weighting strategies.
pub mod weighting;
