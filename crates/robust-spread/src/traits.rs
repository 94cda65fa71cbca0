//! Core traits for spread estimation

/// Intrinsic properties of a spread estimator that don't depend on implementation details
pub trait SpreadEstimatorProperties {
    /// Get the name of this spread estimator
    fn name(&self) -> &str;

    /// Check if this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;
}
