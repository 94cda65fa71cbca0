//! Generic numeric trait for labeled statistical samples
//!
//! Samples keep their original element type so outlier results can hand back
//! exactly what the caller supplied. Every derived statistic (median, MAD,
//! distance) is carried as `f64`, which represents both exact integers and
//! the fractional midpoints of even-length medians.

use num_traits::{Num, ToPrimitive};
use std::fmt::Debug;

/// Base trait for numeric types that can be used in statistical computations
pub trait Numeric: Num + ToPrimitive + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Convert to floating point for statistical operations
    fn to_float(self) -> f64;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

impl Numeric for f64 {
    fn to_float(self) -> f64 {
        self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Numeric for f32 {
    fn to_float(self) -> f64 {
        self as f64
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

macro_rules! impl_numeric_for_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_float(self) -> f64 {
                    self as f64
                }

                fn is_finite(&self) -> bool {
                    true // Integers are always finite
                }
            }
        )*
    };
}

impl_numeric_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
