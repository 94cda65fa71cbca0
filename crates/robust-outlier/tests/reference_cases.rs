//! Reference cases for Double MAD outlier detection

use approx::assert_relative_eq;
use robust_outlier::{DoubleMadOutliers, Error, TailMads, DEFAULT_CUTOFF};

const SKEWED: [i32; 14] = [30, 10, 4, 7, 4, 5, 5, 7, 8, 1, 16, 4, 5, 5];

fn outliers_at(cutoff: f64) -> Vec<(usize, i32)> {
    DoubleMadOutliers::from_values(SKEWED, cutoff)
        .unwrap()
        .find_outliers()
        .unwrap()
        .into_vec()
}

#[test]
fn test_get_median() {
    let detector = DoubleMadOutliers::from_values(vec![1, 2, 3, 4, 5], DEFAULT_CUTOFF).unwrap();
    assert_eq!(detector.median(), 3.0);
}

#[test]
fn test_calculate_median() {
    let odd = DoubleMadOutliers::from_values(1..=9, DEFAULT_CUTOFF).unwrap();
    assert_eq!(odd.median(), 5.0);

    let even = DoubleMadOutliers::from_values(1..=10, DEFAULT_CUTOFF).unwrap();
    assert_relative_eq!(even.median(), 5.5);
}

#[test]
fn test_double_mad() {
    let even = DoubleMadOutliers::from_values(1..=10, DEFAULT_CUTOFF).unwrap();
    assert_eq!(even.compute_tail_mads().unwrap(), TailMads { left: 2.5, right: 2.5 });

    let odd = DoubleMadOutliers::from_values(1..=9, DEFAULT_CUTOFF).unwrap();
    assert_eq!(odd.compute_tail_mads().unwrap(), TailMads { left: 2.0, right: 2.0 });
}

#[test]
fn test_find_outliers_default_cutoff() {
    let detector = DoubleMadOutliers::with_default_cutoff(SKEWED.into_iter().enumerate()).unwrap();
    assert_eq!(detector.find_outliers().unwrap().into_vec(), vec![(9, 1), (10, 16), (0, 30)]);
}

#[test]
fn test_find_outliers_small_cutoff() {
    let expected = vec![(9, 1), (2, 4), (4, 4), (11, 4), (8, 8), (1, 10), (10, 16), (0, 30)];
    assert_eq!(outliers_at(1.0), expected);
}

#[test]
fn test_find_outliers_small_cutoff_skips_center() {
    let values: Vec<i32> = outliers_at(1.0).into_iter().map(|(_, v)| v).collect();
    assert!(!values.contains(&5));
    assert!(!values.contains(&7));
}

#[test]
fn test_find_outliers_large_cutoff() {
    assert_eq!(outliers_at(10.0), vec![(0, 30)]);
}

#[test]
fn test_order_follows_value_not_input() {
    let labels: Vec<usize> = outliers_at(1.0).into_iter().map(|(k, _)| k).collect();
    let mut input_order = labels.clone();
    input_order.sort_unstable();
    assert_ne!(labels, input_order);
}

#[test]
fn test_queries_are_idempotent() {
    let detector = DoubleMadOutliers::from_values(SKEWED, 1.0).unwrap();
    assert_eq!(detector.find_outliers().unwrap(), detector.find_outliers().unwrap());

    let first = detector.compute_tail_mads().unwrap();
    let second = detector.compute_tail_mads().unwrap();
    assert_eq!(first.left.to_bits(), second.left.to_bits());
    assert_eq!(first.right.to_bits(), second.right.to_bits());
}

#[test]
fn test_degenerate_low_tail() {
    // More than half of the left tail sits on the median
    let detector = DoubleMadOutliers::from_values(vec![2.0, 3.0, 3.0, 3.0, 3.0, 9.0, 12.0], DEFAULT_CUTOFF).unwrap();
    assert_eq!(detector.median(), 3.0);
    let err = detector.find_outliers().unwrap_err();
    assert!(matches!(err, Error::DegenerateDistribution { left, .. } if left == 0.0));
}

#[test]
fn test_degenerate_high_tail() {
    let detector = DoubleMadOutliers::from_values(vec![1, 2, 3, 5, 5, 5, 9], DEFAULT_CUTOFF).unwrap();
    let err = detector.compute_tail_mads().unwrap_err();
    assert_eq!(err, Error::DegenerateDistribution { left: 1.0, right: 0.0 });
}

#[test]
fn test_empty_is_invalid_input() {
    let err = DoubleMadOutliers::from_values(Vec::<i32>::new(), DEFAULT_CUTOFF).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let err = DoubleMadOutliers::<&str, f64>::with_default_cutoff(Vec::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_unsortable_is_invalid_input() {
    let err = DoubleMadOutliers::from_values(vec![1.0, f64::NAN, 3.0], DEFAULT_CUTOFF).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_overflowing_range_fails_at_construction() {
    let err = DoubleMadOutliers::from_values(vec![-f64::MAX, 0.9 * f64::MAX, f64::MAX], DEFAULT_CUTOFF)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_extreme_but_finite_range_classifies() {
    let data = vec![-f64::MAX / 4.0, -1.0, 0.0, 1.0, f64::MAX / 4.0];
    let detector = DoubleMadOutliers::from_values(data, DEFAULT_CUTOFF).unwrap();
    let mads = detector.compute_tail_mads().unwrap();
    assert_eq!((mads.left, mads.right), (1.0, 1.0));
    assert_eq!(detector.find_outliers().unwrap().len(), 2);
}

#[test]
fn test_float_and_negative_values() {
    let data = vec![-2.5, -1.0, -0.5, 0.0, 0.5, 1.0, 40.0];
    let detector = DoubleMadOutliers::from_values(data, DEFAULT_CUTOFF).unwrap();
    assert_eq!(detector.median(), 0.0);
    assert_eq!(detector.find_outliers().unwrap().into_vec(), vec![(6, 40.0)]);
}

#[test]
fn test_skew_does_not_mask_low_outlier() {
    // A long right tail; a single symmetric MAD would not flag the low point
    let data = vec![0.0, 10.0, 10.5, 11.0, 11.5, 12.0, 20.0, 30.0, 45.0, 60.0, 80.0];
    let detector = DoubleMadOutliers::from_values(data, 3.0).unwrap();
    let outliers = detector.find_outliers().unwrap();
    assert_eq!(outliers.get(&0), Some(0.0));
}
