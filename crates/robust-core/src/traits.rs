//! Core traits for robust estimators

use crate::{Numeric, Result};

/// Trait for central tendency estimators (median, trimmed mean, ...)
pub trait CentralTendencyEstimator<T: Numeric> {
    /// Estimate the center of unordered data
    fn estimate(&self, data: &[T]) -> Result<f64>;

    /// Estimate the center of data sorted ascending (skips the sort)
    fn estimate_sorted(&self, sorted_data: &[T]) -> Result<f64>;

    /// Name of this estimator
    fn name(&self) -> &str;
}
