//! # polyreg — Least-Squares Polynomial Regression with Decimal Precision
//!
//! Fits polynomials of any degree to a stream of `(x, y)` samples by least
//! squares, using arbitrary-precision decimal arithmetic throughout the
//! accumulation and the solve.
//!
//! ## Why decimals?
//!
//! The normal equations of a polynomial fit are built from power sums
//! `Σ xᵏ` for `k` up to twice the degree. For higher degrees these sums span
//! many orders of magnitude, and elimination on them is dominated by
//! subtractions of nearly equal numbers. With `f64` the result loses most of
//! its significant digits; with a fixed decimal scale every intermediate
//! keeps the same absolute precision, and pivot tests are exact.
//!
//! **Features:**
//! - Streaming accumulation: samples are folded into running sums and never stored
//! - Any degree, and any lower degree solvable from the same sums
//! - Forced coefficients (e.g., a zero intercept) returned exactly
//! - Per-sample weighting by arrival index
//! - R² and adjusted R²
//!
//! ## Quick Start
//!
//! ```rust
//! use polyreg::prelude::*;
//!
//! // Two coefficients: a straight line
//! let mut regression = PolynomialRegression::new(2)?;
//!
//! for (x, y) in [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)] {
//!     regression.add_data(x, y)?;
//! }
//!
//! // Coefficients in ascending exponent order: [intercept, slope]
//! let coefficients = regression.coefficients()?;
//!
//! let y = PolynomialRegression::interpolate(&coefficients, 3.0)?;
//! assert!((y - 7.0).abs() < 1e-12);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use polyreg::prelude::*;
//!
//! let mut regression = PolynomialRegression::builder()
//!     .coefficients(4)                 // Cubic
//!     .scale(30)                       // Decimal digits after the point
//!     .rounding(RoundingMode::HalfEven)
//!     .forced_coefficient(0, 0.0)      // Curve passes through the origin
//!     .weighting(LinearWeighting)      // Later samples count more
//!     .build()?;
//!
//! for i in 0..10 {
//!     let x = i as f64 * 0.1;
//!     regression.add_data(x, x * x * x - x)?;
//! }
//!
//! let coefficients = regression.coefficients()?;
//! assert_eq!(coefficients[0], BigDecimal::from(0));
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, RegressionError>`. Errors say
//! why a fit could not be produced:
//!
//! - **Configuration**: zero coefficients, a forced index outside the fit,
//!   or a count that needs sums that were never accumulated.
//! - **Insufficient data**: fewer samples than free coefficients.
//! - **Singular system**: e.g., every sample has the same `x`.
//! - **Degenerate metric**: R² over samples with identical `y`.
//!
//! ```rust
//! use polyreg::prelude::*;
//!
//! let mut regression = PolynomialRegression::new(2)?;
//! regression.add_data(2.0, 1.0)?;
//! regression.add_data(2.0, 3.0)?;
//!
//! match regression.coefficients() {
//!     Ok(c) => println!("{:?}", c),
//!     Err(RegressionError::SingularMatrix { column }) => {
//!         eprintln!("no pivot for column {column}");
//!     }
//!     Err(e) => eprintln!("fit failed: {e}"),
//! }
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polyreg = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Solves emit `debug!` records (system size, forced count, singular
//! columns) and `trace!` records (pivot rows, accumulated samples) through
//! the `log` facade. No logger is installed by the crate.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, decimal context, matrix storage.
mod primitives;

// Layer 2: Math - weighting strategies.
mod math;

// Layer 3: Algorithms - accumulation, normal equations, solver, interpolation.
mod algorithms;

// Layer 4: Evaluation - goodness-of-fit metrics.
mod evaluation;

// Layer 5: Engine - validation and solve orchestration.
mod engine;

// High-level API for polynomial regression.
mod api;

pub use api::{PolynomialRegression, PolynomialRegressionBuilder};

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        DecimalContext, ExponentialWeighting, FitQuality, LinearWeighting, PolynomialRegression,
        PolynomialRegressionBuilder, RegressionError, UniformWeighting, WeightingStrategy,
        DEFAULT_COEFFICIENTS, DEFAULT_SCALE,
    };
    pub use bigdecimal::{BigDecimal, RoundingMode};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
