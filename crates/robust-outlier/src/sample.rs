//! Labeled samples
//!
//! A [`LabeledSample`] pairs every value with a caller-chosen label and keeps
//! the pairs sorted ascending by value. The sort is stable, so equal values
//! stay in input order and each label stays attached to its value.

use robust_core::utils::{check_finite, sort_pairs_by_value};
use robust_core::{Error, Numeric, Result};
use std::collections::HashSet;
use std::hash::Hash;

/// Immutable, value-sorted set of `(label, value)` pairs
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample<K, T> {
    entries: Vec<(K, T)>,
    values: Vec<T>,
}

impl<K: Eq + Hash, T: Numeric> LabeledSample<K, T> {
    /// Build a sample from labeled pairs.
    ///
    /// Fails with `InvalidInput` if the data is empty, holds a NaN or
    /// infinite value, repeats a label, or spans a range too wide for its
    /// deviations from the median to be finite.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
    {
        let mut entries: Vec<(K, T)> = pairs.into_iter().collect();
        if entries.is_empty() {
            return Err(Error::empty_input("labeled sample"));
        }

        {
            let mut seen = HashSet::with_capacity(entries.len());
            for (position, (label, _)) in entries.iter().enumerate() {
                if !seen.insert(label) {
                    return Err(Error::duplicate_label(position));
                }
            }
        }

        let mut values: Vec<T> = entries.iter().map(|&(_, v)| v).collect();
        check_finite(&values, "labeled sample")?;

        sort_pairs_by_value(&mut entries);
        values.clear();
        values.extend(entries.iter().map(|&(_, v)| v));

        // Every deviation from the median is bounded by the range
        let lowest = values[0].to_float();
        let highest = values[values.len() - 1].to_float();
        if !(highest - lowest).is_finite() {
            return Err(Error::InvalidInput(format!(
                "labeled sample range [{lowest}, {highest}] overflows f64"
            )));
        }

        Ok(Self { entries, values })
    }
}

impl<T: Numeric> LabeledSample<usize, T> {
    /// Build a sample labeled by input position
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_pairs(values.into_iter().enumerate())
    }
}

impl<K, T: Numeric> LabeledSample<K, T> {
    /// Number of points
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty data
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in ascending value order
    pub fn iter(&self) -> impl Iterator<Item = (&K, T)> + '_ {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Values in ascending order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Value stored under `label`
    pub fn get(&self, label: &K) -> Option<T>
    where
        K: PartialEq,
    {
        self.entries.iter().find(|(k, _)| k == label).map(|&(_, v)| v)
    }
}
