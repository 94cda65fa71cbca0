//! Utility functions for working with data slices

use crate::error::{Error, Result};
use crate::numeric::Numeric;
use std::cmp::Ordering;

/// Order two values, treating incomparable pairs as equal.
///
/// Callers validate finiteness first, so the fallback is never taken for
/// data that reaches the statistics.
#[inline]
pub fn compare<T: Numeric>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Sort data and return a new vector
///
/// The sort is stable, so equal values keep their relative order.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted<T: Numeric>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by(compare);
    sorted
}

/// Stable-sort labeled pairs ascending by value, keeping each label with
/// its value.
pub fn sort_pairs_by_value<K, T: Numeric>(pairs: &mut [(K, T)]) {
    pairs.sort_by(|a, b| compare(&a.1, &b.1));
}

/// Fail with `InvalidInput` if any value is NaN or infinite.
pub fn check_finite<T: Numeric>(data: &[T], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}
