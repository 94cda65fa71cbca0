//! Double MAD outlier classifier
//!
//! Each point is scored by its distance from the sample median measured in
//! MADs of its own tail:
//!
//! ```text
//! distance(x) = 0                                  if x == median
//!             = |x - median| / MAD_left            if x <  median
//!             = |x - median| / MAD_right           if x >  median
//! ```
//!
//! and is an outlier when `distance > cutoff`.
//!
//! The median and both tail MADs are computed once, when the classifier is
//! built. Construction fails only for invalid data or an invalid cutoff. A
//! degenerate distribution (a zero tail MAD) is kept and returned as
//! [`Error::DegenerateDistribution`] by every query that needs the scale.

use crate::config::{DoubleMadConfig, DEFAULT_CUTOFF};
use crate::sample::LabeledSample;
use crate::types::{Outliers, PointScore};
use robust_core::{median_sorted, Error, Numeric, Result};
use robust_spread::{DoubleMad, Tail, TailMads};
use std::hash::Hash;

/// Distance of `value` from `median` in units of the applicable tail MAD.
///
/// A value exactly at the median scores 0 regardless of the MADs.
pub fn mad_distance(value: f64, median: f64, mads: &TailMads) -> f64 {
    if value == median {
        return 0.0;
    }
    (value - median).abs() / mads.for_value(value, median)
}

/// Immutable Double MAD classifier over a labeled sample
#[derive(Debug, Clone)]
pub struct DoubleMadOutliers<K, T> {
    sample: LabeledSample<K, T>,
    config: DoubleMadConfig,
    median: f64,
    tail_mads: Result<TailMads>,
}

impl<K: Eq + Hash, T: Numeric> DoubleMadOutliers<K, T> {
    /// Build a classifier over `(label, value)` pairs with the given cutoff
    ///
    /// # Examples
    ///
    /// ```rust
    /// use robust_outlier::DoubleMadOutliers;
    ///
    /// let data = [30, 10, 4, 7, 4, 5, 5, 7, 8, 1, 16, 4, 5, 5];
    /// let detector = DoubleMadOutliers::new(data.into_iter().enumerate(), 4.0).unwrap();
    ///
    /// let outliers = detector.find_outliers().unwrap();
    /// assert_eq!(outliers.into_vec(), vec![(9, 1), (10, 16), (0, 30)]);
    /// ```
    pub fn new<I>(data: I, cutoff: f64) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
    {
        Self::from_sample(LabeledSample::from_pairs(data)?, DoubleMadConfig::new(cutoff))
    }

    /// Build a classifier with the default cutoff of 4 MADs
    pub fn with_default_cutoff<I>(data: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
    {
        Self::new(data, DEFAULT_CUTOFF)
    }
}

impl<T: Numeric> DoubleMadOutliers<usize, T> {
    /// Build a classifier over unlabeled values; labels are input positions
    pub fn from_values<I>(values: I, cutoff: f64) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_sample(LabeledSample::from_values(values)?, DoubleMadConfig::new(cutoff))
    }
}

impl<K, T: Numeric> DoubleMadOutliers<K, T> {
    /// Build a classifier over an already validated sample
    pub fn from_sample(sample: LabeledSample<K, T>, config: DoubleMadConfig) -> Result<Self> {
        config.validate()?;

        let median = median_sorted(sample.values())?;
        let tail_mads = DoubleMad::new().estimate(sample.values(), median);

        log::debug!(
            "Built Double MAD classifier: n = {}, median = {median}, cutoff = {}, tail MADs = {:?}",
            sample.len(),
            config.cutoff,
            tail_mads
        );

        Ok(Self {
            sample,
            config,
            median,
            tail_mads,
        })
    }

    /// Median of the full sample
    pub fn median(&self) -> f64 {
        self.median
    }

    /// Outlier threshold in tail MADs
    pub fn cutoff(&self) -> f64 {
        self.config.cutoff
    }

    /// Configuration the classifier was built with
    pub fn config(&self) -> &DoubleMadConfig {
        &self.config
    }

    /// The value-sorted sample this classifier was built over
    pub fn sample(&self) -> &LabeledSample<K, T> {
        &self.sample
    }

    /// MAD of each tail around the median.
    ///
    /// Fails with `DegenerateDistribution` if either MAD is zero.
    pub fn compute_tail_mads(&self) -> Result<TailMads> {
        self.tail_mads.clone()
    }

    /// Robust distance of an arbitrary value from this sample's median
    pub fn distance(&self, value: T) -> Result<f64> {
        let mads = self.compute_tail_mads()?;
        Ok(mad_distance(value.to_float(), self.median, &mads))
    }

    /// Whether `value` would be classified as an outlier
    pub fn is_outlier(&self, value: T) -> Result<bool> {
        Ok(self.distance(value)? > self.config.cutoff)
    }

    /// Score every point, in ascending value order
    pub fn scores(&self) -> Result<Vec<PointScore<K, T>>>
    where
        K: Clone,
    {
        let mads = self.compute_tail_mads()?;
        let median = self.median;

        Ok(self
            .sample
            .iter()
            .map(|(label, value)| {
                let x = value.to_float();
                let distance = mad_distance(x, median, &mads);
                PointScore {
                    label: label.clone(),
                    value,
                    distance,
                    tail: (x != median).then(|| Tail::of(x, median)),
                    is_outlier: distance > self.config.cutoff,
                }
            })
            .collect())
    }

    /// Points whose distance exceeds the cutoff, in ascending value order
    pub fn find_outliers(&self) -> Result<Outliers<K, T>>
    where
        K: Clone,
    {
        let outliers: Outliers<K, T> = self.scores()?.into_iter().collect();
        log::debug!(
            "Double MAD found {} outliers among {} points",
            outliers.len(),
            self.sample.len()
        );
        Ok(outliers)
    }
}

impl<K, T: Numeric> TryFrom<LabeledSample<K, T>> for DoubleMadOutliers<K, T> {
    type Error = Error;

    fn try_from(sample: LabeledSample<K, T>) -> Result<Self> {
        Self::from_sample(sample, DoubleMadConfig::default())
    }
}
