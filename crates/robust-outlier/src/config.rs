//! Configuration types for Double MAD outlier detection

use robust_core::{Error, Result};

/// Number of tail MADs from the median beyond which a point is an outlier
pub const DEFAULT_CUTOFF: f64 = 4.0;

/// Parameters of a Double MAD classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleMadConfig {
    /// Distance threshold in tail MADs; a point is an outlier when its
    /// distance is strictly greater than this
    pub cutoff: f64,
}

impl DoubleMadConfig {
    /// Create a configuration with the given cutoff
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    /// Check that the cutoff is a finite, nonnegative number
    pub fn validate(&self) -> Result<()> {
        if !self.cutoff.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "cutoff {} must be finite",
                self.cutoff
            )));
        }
        if self.cutoff < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "cutoff {} must be nonnegative",
                self.cutoff
            )));
        }
        Ok(())
    }
}

impl Default for DoubleMadConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF)
    }
}
