//! Double MAD outlier detection
//!
//! This crate classifies the points of a labeled sample as outliers using
//! the Double Median Absolute Deviation. The sample is split at its median,
//! each tail gets its own MAD, and each point is scored by how many MADs of
//! its own tail it lies from the median. Points beyond the cutoff (default
//! 4) are outliers.
//!
//! Scaling each side separately keeps skewed samples from hiding outliers:
//! with one symmetric MAD a long right tail inflates the scale and masks
//! low outliers.
//!
//! # Examples
//!
//! ```rust
//! use robust_outlier::{DoubleMadOutliers, DoubleMadOutliersBuilder};
//!
//! let data = vec![30, 10, 4, 7, 4, 5, 5, 7, 8, 1, 16, 4, 5, 5];
//!
//! let detector = DoubleMadOutliers::from_values(data.clone(), 4.0).unwrap();
//! assert_eq!(detector.median(), 5.0);
//!
//! let mads = detector.compute_tail_mads().unwrap();
//! assert_eq!((mads.left, mads.right), (0.5, 2.0));
//!
//! // Labels are input positions; results are ordered by value
//! let outliers = detector.find_outliers().unwrap();
//! assert_eq!(outliers.into_vec(), vec![(9, 1), (10, 16), (0, 30)]);
//!
//! // A stricter cutoff keeps only the most extreme point
//! let strict = DoubleMadOutliersBuilder::new().cutoff(10.0).build_from_values(data).unwrap();
//! assert_eq!(strict.find_outliers().unwrap().into_vec(), vec![(0, 30)]);
//! ```

pub mod builder;
pub mod config;
pub mod detector;
pub mod sample;
pub mod types;

pub use builder::DoubleMadOutliersBuilder;
pub use config::{DoubleMadConfig, DEFAULT_CUTOFF};
pub use detector::{mad_distance, DoubleMadOutliers};
pub use sample::LabeledSample;
pub use types::{Outliers, PointScore};

// Convenience re-exports
pub use robust_core::{Error, Result};
pub use robust_spread::{Tail, TailMads};
