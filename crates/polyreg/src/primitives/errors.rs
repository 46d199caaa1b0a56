//! Error types for polynomial regression.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while accumulating
//! samples, solving the normal equations, and evaluating a fitted polynomial.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., requested vs. accumulated counts).
//! * **Deferred**: Cross-cutting checks are raised at solve time, not when a setter is called.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Configuration**: Invalid coefficient counts, forced indices out of range, stale sums.
//! 2. **Numeric**: Values that cannot be represented as decimals.
//! 3. **Solving**: Rank-deficient normal equations.
//! 4. **Metrics**: Goodness-of-fit over degenerate data.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for polynomial regression operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// A polynomial needs at least one coefficient.
    InvalidCoefficientCount(usize),

    /// The requested number of coefficients needs power sums that were never accumulated.
    CoefficientCountExceedsSums {
        /// Number of coefficients requested at solve time.
        requested: usize,
        /// Number of coefficients the power sums were accumulated for.
        accumulated: usize,
    },

    /// A forced coefficient index does not fit in the requested polynomial.
    ForcedCoefficientOutOfRange {
        /// Index of the forced coefficient.
        index: usize,
        /// Number of coefficients requested at solve time.
        count: usize,
    },

    /// The coefficient count changed since the last reset; sums must be rebuilt.
    ResetRequired {
        /// Currently configured number of coefficients.
        configured: usize,
        /// Number of coefficients the power sums are sized for.
        accumulated: usize,
    },

    /// Fewer samples than free (unforced) coefficients.
    TooFewPoints {
        /// Number of samples accumulated.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// No usable pivot exists for a column of the normal equations.
    SingularMatrix {
        /// Column (coefficient exponent) without a pivot.
        column: usize,
    },

    /// A goodness-of-fit metric is undefined for the given data.
    DegenerateMetric(&'static str),

    /// A metric was requested over an empty sample set.
    EmptyInput,

    /// Input contains NaN or infinite values, or a decimal could not be converted back.
    InvalidNumericValue(String),

    /// Decimal scale must be non-negative.
    InvalidScale(i64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RegressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidCoefficientCount(count) => {
                write!(f, "Invalid coefficient count: {count} (must be at least 1)")
            }
            Self::CoefficientCountExceedsSums {
                requested,
                accumulated,
            } => {
                write!(
                    f,
                    "Requested {requested} coefficients but data was accumulated for {accumulated}"
                )
            }
            Self::ForcedCoefficientOutOfRange { index, count } => {
                write!(
                    f,
                    "Forced coefficient {index} is out of range for a {count}-coefficient fit"
                )
            }
            Self::ResetRequired {
                configured,
                accumulated,
            } => {
                write!(
                    f,
                    "Coefficient count changed to {configured} (sums sized for {accumulated}); call reset() before adding data"
                )
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::SingularMatrix { column } => {
                write!(f, "Singular normal equations: no pivot for column {column}")
            }
            Self::DegenerateMetric(reason) => write!(f, "Degenerate metric: {reason}"),
            Self::EmptyInput => write!(f, "Input sample set is empty"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidScale(scale) => {
                write!(f, "Invalid decimal scale: {scale} (must be >= 0)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RegressionError {}
