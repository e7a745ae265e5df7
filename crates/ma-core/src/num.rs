//! Numeric type abstractions for moving average computations.
//!
//! This module defines the [`TaFloat`] trait which abstracts over `f32` and `f64`
//! so that every transform can be written once and used at either precision.

use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Trait for floating-point types used in moving average calculations.
///
/// # Associated Constants
///
/// - `NAN` - The "undefined" sentinel used for warm-up entries
/// - `ZERO`, `ONE`, `TWO` - Small constants used by the recursions
///
/// # Example
///
/// ```rust
/// use ma_core::TaFloat;
///
/// fn smoothing<T: TaFloat>(period: usize) -> T {
///     T::TWO / <T as TaFloat>::from_usize(period + 1)
/// }
///
/// assert_eq!(smoothing::<f64>(3), 0.5);
/// ```
#[cfg(feature = "serde")]
pub trait TaFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + Serialize + DeserializeOwned + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;

    /// Convert a count or window length.
    #[must_use]
    fn from_usize(value: usize) -> Self;
}

/// Trait for floating-point types used in moving average calculations.
#[cfg(not(feature = "serde"))]
pub trait TaFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;

    /// Convert a count or window length.
    #[must_use]
    fn from_usize(value: usize) -> Self;
}

impl TaFloat for f32 {
    const NAN: Self = f32::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl TaFloat for f64 {
    const NAN: Self = f64::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(<f64 as TaFloat>::NAN.is_nan());
        assert!(<f32 as TaFloat>::NAN.is_nan());
        assert_eq!(<f64 as TaFloat>::ZERO, 0.0);
        assert_eq!(<f64 as TaFloat>::ONE, 1.0);
        assert_eq!(<f32 as TaFloat>::TWO, 2.0f32);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(<f64 as TaFloat>::from_usize(14), 14.0);
        assert_eq!(<f32 as TaFloat>::from_usize(14), 14.0f32);
        assert_eq!(<f64 as TaFloat>::from_usize(0), 0.0);
    }
}
