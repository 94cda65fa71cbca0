//! Error types for robust outlier detection
//!
//! Provides a unified error type for all robust-outliers crates.

use thiserror::Error;

/// Core error type for robust statistical operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A tail of the distribution has no usable scale
    #[error("Degenerate distribution: tail MAD is zero (left = {left}, right = {right})")]
    DegenerateDistribution { left: f64, right: f64 },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires at least one value"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a label that appears more than once
    pub fn duplicate_label(position: usize) -> Self {
        Self::InvalidInput(format!("Duplicate label at position {position}"))
    }

    /// Create an error for a zero tail MAD
    pub fn degenerate(left: f64, right: f64) -> Self {
        Self::DegenerateDistribution { left, right }
    }

    /// Whether this error signals an undefined scale estimate
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateDistribution { .. })
    }
}
