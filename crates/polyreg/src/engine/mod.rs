//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer validates solve requests and orchestrates the
//! build-and-solve pipeline over the accumulated state.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Build-and-solve orchestration.
pub mod executor;

/// Configuration and request validation.
pub mod validator;
