//! Robust spread measurements for outlier detection
//!
//! This crate provides median-based estimators of scale:
//! - MAD (Median Absolute Deviation) around a given center
//! - Double MAD: one MAD per tail of the sample, split at the median
//!
//! # Overview
//!
//! A single MAD assumes the sample spreads equally on both sides of its
//! median. On skewed data that estimate is too wide for the short tail and
//! too narrow for the long one, so high outliers can mask low ones. The
//! Double MAD keeps a separate scale for each side.
//!
//! # Estimator Properties
//!
//! | Estimator | Breakdown Point | Use When |
//! |-----------|----------------|----------|
//! | MAD | 50% | Data is roughly symmetric |
//! | Double MAD | 50% per tail | Data is skewed |
//!
//! # Examples
//!
//! ```rust
//! use robust_core::median;
//! use robust_spread::{DoubleMad, TailMads};
//!
//! let sample: Vec<i32> = (1..=10).collect();
//! let m = median(&sample).unwrap();
//!
//! let mads = DoubleMad::new().estimate(&sample, m).unwrap();
//! assert_eq!(mads, TailMads { left: 2.5, right: 2.5 });
//! ```

pub mod mad;
pub mod traits;

// Re-exports
pub use mad::{mad, split_deviations, DoubleMad, Mad, Tail, TailMads};
pub use traits::SpreadEstimatorProperties;
