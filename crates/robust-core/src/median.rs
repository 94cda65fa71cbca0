//! Sample median
//!
//! The median is the central value of the ascending-sorted sample. For an
//! even number of values it is the mean of the two middle values, so the
//! result is always reported as `f64`.

use crate::error::{Error, Result};
use crate::numeric::Numeric;
use crate::traits::CentralTendencyEstimator;
use crate::utils::{check_finite, sorted};

/// Median estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Median;

impl Median {
    /// Create a new median estimator
    pub fn new() -> Self {
        Self
    }
}

impl<T: Numeric> CentralTendencyEstimator<T> for Median {
    fn estimate(&self, data: &[T]) -> Result<f64> {
        median(data)
    }

    fn estimate_sorted(&self, sorted_data: &[T]) -> Result<f64> {
        median_sorted(sorted_data)
    }

    fn name(&self) -> &str {
        "Median"
    }
}

/// Compute the median of unordered values.
///
/// # Examples
///
/// ```rust
/// use robust_core::median;
///
/// assert_eq!(median(&[5, 1, 3, 2, 4]).unwrap(), 3.0);
/// assert_eq!(median(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap(), 5.5);
/// assert!(median::<f64>(&[]).is_err());
/// ```
pub fn median<T: Numeric>(data: &[T]) -> Result<f64> {
    check_finite(data, "median input")?;
    median_sorted(&sorted(data))
}

/// Compute the median of values already sorted ascending.
///
/// The lower-middle index is `(n - 1) / 2`; odd lengths take that element,
/// even lengths average it with its successor.
pub fn median_sorted<T: Numeric>(sorted_data: &[T]) -> Result<f64> {
    let n = sorted_data.len();
    if n == 0 {
        return Err(Error::empty_input("median"));
    }

    let mid = (n - 1) / 2;
    let low = sorted_data[mid].to_float();
    if !low.is_finite() {
        return Err(Error::non_finite("median input"));
    }
    if n % 2 == 1 {
        return Ok(low);
    }

    let high = sorted_data[mid + 1].to_float();
    if !high.is_finite() {
        return Err(Error::non_finite("median input"));
    }
    // Midpoint form stays finite for values near f64::MAX
    Ok(low + (high - low) / 2.0)
}
