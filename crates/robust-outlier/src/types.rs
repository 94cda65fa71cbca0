//! Result types for outlier detection

use robust_spread::Tail;
use serde::Serialize;

/// Robust distance and classification of a single point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointScore<K, T> {
    /// Label supplied with the point
    pub label: K,
    /// Original value
    pub value: T,
    /// `|value - median| / tail MAD`, or 0 at the median
    pub distance: f64,
    /// Tail whose MAD scaled the distance; `None` exactly at the median
    pub tail: Option<Tail>,
    /// Whether `distance > cutoff`
    pub is_outlier: bool,
}

/// Outlying `(label, value)` pairs, in ascending value order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Outliers<K, T> {
    entries: Vec<(K, T)>,
}

impl<K, T: Copy> Outliers<K, T> {
    pub(crate) fn new(entries: Vec<(K, T)>) -> Self {
        Self { entries }
    }

    /// Number of outliers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no point qualified
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in ascending value order
    pub fn iter(&self) -> impl Iterator<Item = (&K, T)> + '_ {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Value of the outlier labeled `label`
    pub fn get(&self, label: &K) -> Option<T>
    where
        K: PartialEq,
    {
        self.entries.iter().find(|(k, _)| k == label).map(|&(_, v)| v)
    }

    /// Whether `label` was classified as an outlier
    pub fn contains_label(&self, label: &K) -> bool
    where
        K: PartialEq,
    {
        self.entries.iter().any(|(k, _)| k == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().map(|&(_, v)| v)
    }

    pub fn into_vec(self) -> Vec<(K, T)> {
        self.entries
    }
}

impl<K, T> IntoIterator for Outliers<K, T> {
    type Item = (K, T);
    type IntoIter = std::vec::IntoIter<(K, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, T: Copy> FromIterator<PointScore<K, T>> for Outliers<K, T> {
    /// Keeps only the scores flagged as outliers, in iteration order
    fn from_iter<I: IntoIterator<Item = PointScore<K, T>>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .filter(|score| score.is_outlier)
                .map(|score| (score.label, score.value))
                .collect(),
        )
    }
}
