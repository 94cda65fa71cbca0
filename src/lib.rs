//! Robust outlier detection for skewed data
//!
//! This crate re-exports the workspace crates:
//! - [`core`]: error type, numeric trait and the sample median
//! - [`spread`]: MAD and Double MAD scale estimators
//! - [`outlier`]: the Double MAD outlier classifier
//!
//! # Example
//!
//! ```rust
//! use robust_outliers::prelude::*;
//!
//! let latencies = vec![12.0, 11.5, 12.5, 11.0, 13.0, 80.0, 12.2];
//! let detector = DoubleMadOutliers::from_values(latencies, DEFAULT_CUTOFF)?;
//!
//! let outliers = detector.find_outliers()?;
//! assert_eq!(outliers.into_vec(), vec![(5, 80.0)]);
//! # Ok::<(), Error>(())
//! ```

pub use robust_core as core;
pub use robust_outlier as outlier;
pub use robust_spread as spread;

pub use robust_core::{median, Error, Numeric, Result};
pub use robust_outlier::{
    DoubleMadConfig, DoubleMadOutliers, DoubleMadOutliersBuilder, LabeledSample, Outliers,
    PointScore, DEFAULT_CUTOFF,
};
pub use robust_spread::{DoubleMad, Mad, Tail, TailMads};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        median, DoubleMad, DoubleMadOutliers, DoubleMadOutliersBuilder, Error, LabeledSample,
        Numeric, Outliers, Result, TailMads, DEFAULT_CUTOFF,
    };
    pub use robust_spread::SpreadEstimatorProperties;
}
