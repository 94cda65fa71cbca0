//! Median Absolute Deviation (MAD) estimators
//!
//! `Mad` is the classic single-scale estimator: the median of `|x - center|`.
//! `DoubleMad` splits the sample at its median and reports one MAD per tail,
//! so an asymmetric sample gets a separate scale on each side. Values equal
//! to the median contribute their (zero) deviation to both tails.

use crate::traits::SpreadEstimatorProperties;
use robust_core::{median, Error, Numeric, Result};
use serde::Serialize;

/// Side of the median a value falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tail {
    /// Values `<= median`
    Left,
    /// Values `>= median`
    Right,
}

/// Per-tail MAD pair produced by [`DoubleMad`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TailMads {
    /// MAD of the deviations of values `<= median`
    pub left: f64,
    /// MAD of the deviations of values `>= median`
    pub right: f64,
}

impl TailMads {
    /// MAD for the given tail
    pub fn get(&self, tail: Tail) -> f64 {
        match tail {
            Tail::Left => self.left,
            Tail::Right => self.right,
        }
    }

    /// MAD that applies to `value`: left when `value <= median`, right otherwise
    pub fn for_value(&self, value: f64, median: f64) -> f64 {
        self.get(Tail::of(value, median))
    }

    /// Whether either tail has a zero scale
    pub fn is_degenerate(&self) -> bool {
        self.left == 0.0 || self.right == 0.0
    }
}

impl Tail {
    /// Tail used for scaling `value` (ties go left)
    pub fn of(value: f64, median: f64) -> Self {
        if value <= median {
            Tail::Left
        } else {
            Tail::Right
        }
    }
}

/// Median Absolute Deviation around a caller-supplied center
#[derive(Debug, Clone, Copy, Default)]
pub struct Mad;

impl Mad {
    /// Create a new MAD estimator
    pub fn new() -> Self {
        Self
    }

    /// Median of `|x - center|` over `data`
    pub fn estimate<T: Numeric>(&self, data: &[T], center: f64) -> Result<f64> {
        mad(data, center)
    }
}

impl SpreadEstimatorProperties for Mad {
    fn name(&self) -> &str {
        "MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

/// Compute the MAD of `data` around `center`
pub fn mad<T: Numeric>(data: &[T], center: f64) -> Result<f64> {
    if !center.is_finite() {
        return Err(Error::InvalidParameter(format!("MAD center {center} must be finite")));
    }
    let deviations: Vec<f64> = data.iter().map(|&x| (x.to_float() - center).abs()).collect();
    median(&deviations)
}

/// Split absolute deviations from `median` into left and right tails.
///
/// Values `<= median` go left, values `>= median` go right; a value equal to
/// the median is counted in both.
pub fn split_deviations<T: Numeric>(data: &[T], median: f64) -> (Vec<f64>, Vec<f64>) {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for &value in data {
        let value = value.to_float();
        let deviation = (value - median).abs();
        if value <= median {
            left.push(deviation);
        }
        if value >= median {
            right.push(deviation);
        }
    }

    (left, right)
}

/// Double MAD estimator
///
/// Computes a MAD for each tail of the sample around a precomputed median.
/// Either MAD being zero leaves that side without a usable scale and is
/// reported as [`Error::DegenerateDistribution`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleMad;

impl DoubleMad {
    /// Create a new Double MAD estimator
    pub fn new() -> Self {
        Self
    }

    /// Compute both tail MADs, failing if either is zero
    pub fn estimate<T: Numeric>(&self, data: &[T], median: f64) -> Result<TailMads> {
        let mads = self.estimate_unchecked(data, median)?;
        if mads.is_degenerate() {
            log::warn!(
                "Double MAD is degenerate: left = {}, right = {} (median = {median})",
                mads.left,
                mads.right
            );
            return Err(Error::degenerate(mads.left, mads.right));
        }
        Ok(mads)
    }

    /// Compute both tail MADs without the zero-scale check
    pub fn estimate_unchecked<T: Numeric>(&self, data: &[T], median: f64) -> Result<TailMads> {
        if data.is_empty() {
            return Err(Error::empty_input("Double MAD"));
        }
        if !median.is_finite() {
            return Err(Error::InvalidParameter(format!("median {median} must be finite")));
        }

        let (left, right) = split_deviations(data, median);
        log::trace!("Double MAD tails: {} left, {} right", left.len(), right.len());

        // A median inside the sample's range leaves both tails non-empty;
        // one outside it is rejected here
        if left.is_empty() || right.is_empty() {
            return Err(Error::InvalidParameter(format!(
                "median {median} lies outside the sample range"
            )));
        }

        Ok(TailMads {
            left: robust_core::median(&left)?,
            right: robust_core::median(&right)?,
        })
    }
}

impl SpreadEstimatorProperties for DoubleMad {
    fn name(&self) -> &str {
        "Double MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}
