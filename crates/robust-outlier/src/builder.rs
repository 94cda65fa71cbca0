use crate::config::{DoubleMadConfig, DEFAULT_CUTOFF};
use crate::detector::DoubleMadOutliers;
use crate::sample::LabeledSample;
use robust_core::{Numeric, Result};
use std::hash::Hash;

/// Builder for configuring and creating Double MAD classifiers.
///
/// The data is provided at build time so one builder can be reused across
/// samples.
#[derive(Debug, Clone, Copy)]
pub struct DoubleMadOutliersBuilder {
    cutoff: f64,
}

impl DoubleMadOutliersBuilder {
    /// Creates a new builder with the default cutoff.
    pub fn new() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }

    /// Sets the cutoff in tail MADs.
    ///
    /// Lower cutoffs flag more points. The value is validated at build time.
    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// The configuration this builder will apply
    pub fn config(&self) -> DoubleMadConfig {
        DoubleMadConfig::new(self.cutoff)
    }

    /// Builds a classifier over labeled pairs.
    pub fn build_from_pairs<K, T, I>(self, data: I) -> Result<DoubleMadOutliers<K, T>>
    where
        K: Eq + Hash,
        T: Numeric,
        I: IntoIterator<Item = (K, T)>,
    {
        self.config().validate()?;
        DoubleMadOutliers::from_sample(LabeledSample::from_pairs(data)?, self.config())
    }

    /// Builds a classifier over values labeled by input position.
    pub fn build_from_values<T, I>(self, values: I) -> Result<DoubleMadOutliers<usize, T>>
    where
        T: Numeric,
        I: IntoIterator<Item = T>,
    {
        self.build_from_pairs(values.into_iter().enumerate())
    }
}

impl Default for DoubleMadOutliersBuilder {
    fn default() -> Self {
        Self::new()
    }
}
