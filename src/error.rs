//! Error types for curve fitting and sampling
//!
//! This module defines the failures that can occur while fitting a dataset
//! or sampling an expression, along with a convenient `Result` alias.
//!
//! Every variant is a distinct, explicit failure. The two intentional
//! fallbacks of the crate are not errors at all:
//! - A linear fit over identical x values yields a horizontal line.
//! - Non-finite samples are dropped from sampled curves.

/// Errors that can occur during curve fitting or expression sampling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Cannot perform curve fitting because there is no data.
    #[error("No data available for fitting")]
    NoData,

    /// The x and y columns of a dataset have different lengths.
    #[error("Dataset columns differ in length: {x} x-values, {y} y-values")]
    LengthMismatch {
        /// Number of x values
        x: usize,
        /// Number of y values
        y: usize,
    },

    /// The linear system has no unique solution.
    ///
    /// For regressions this means the data lacks enough distinct x-values
    /// for the requested model.
    #[error("Matrix ({n}x{n}) is singular; the data may be insufficient or degenerate")]
    SingularMatrix {
        /// Dimension of the system
        n: usize,
    },

    /// A value lies outside the domain of a function.
    ///
    /// Raised for non-positive y values in an exponential fit, and when an
    /// expression evaluates to NaN or infinity at a single point.
    #[error("Value {value} is outside the domain of {function}")]
    InvalidDomain {
        /// Function whose domain was violated
        function: String,
        /// The offending input
        value: f64,
    },

    /// The lower bound of a range is not below the upper bound.
    #[error("Invalid range {min}..{max}: the minimum must be less than the maximum")]
    InvalidRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Sampling requires at least one step.
    #[error("Sampling requires at least one step")]
    InvalidStepCount,

    /// An expression could not be compiled.
    #[error("Failed to parse expression `{expression}`: {reason}")]
    Parse {
        /// The expression source
        expression: String,
        /// Why it was rejected
        reason: String,
    },

    /// A numeric value could not be cast to the target type.
    #[error("Failed to cast value to target type")]
    CastFailed,
}

/// Result type for curve fitting and sampling
pub type Result<T> = std::result::Result<T, Error>;
