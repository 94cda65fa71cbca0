//! Core traits and types for robust outlier detection
//!
//! This crate provides the foundation shared by the spread and outlier
//! crates: the unified [`Error`] type, the [`Numeric`] element trait and
//! the sample [`median`].
//!
//! # Example
//!
//! ```rust
//! use robust_core::{median, Median, CentralTendencyEstimator};
//!
//! let data = vec![7, 1, 4, 3];
//! assert_eq!(median(&data).unwrap(), 3.5);
//!
//! let estimator = Median::new();
//! assert_eq!(estimator.estimate(&data[..]).unwrap(), 3.5);
//! ```

pub mod error;
pub mod median;
pub mod numeric;
pub mod traits;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use median::{median, median_sorted, Median};
pub use numeric::Numeric;
pub use traits::CentralTendencyEstimator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{median, CentralTendencyEstimator, Error, Median, Numeric, Result};
}
