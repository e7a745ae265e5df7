//! Index-aligned value column.
//!
//! [`Series`] holds one price column of a candle series or the output of a
//! moving average. Output columns start with a NaN warm-up prefix built by
//! [`Series::with_warmup`].

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::TaFloat;

/// Values aligned to candle indices, index 0 = earliest.
///
/// # Example
///
/// ```rust
/// use ma_core::Series;
///
/// let mut averages: Series<f64> = Series::with_warmup(4, 2);
/// averages.push(2.0);
/// averages.push(3.0);
///
/// assert_eq!(averages.len(), 4);
/// assert!(averages[1].is_nan());
/// assert_eq!(averages[3], 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Series<T: TaFloat> {
    data: Vec<T>,
}

impl<T: TaFloat> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> Series<T> {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty column with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create an output column of final length `len` whose first `warmup`
    /// entries are already filled with NaN.
    ///
    /// `warmup` is clamped to `len`.
    #[must_use]
    pub fn with_warmup(len: usize, warmup: usize) -> Self {
        let mut data = Vec::with_capacity(len);
        data.resize(warmup.min(len), T::NAN);
        Self { data }
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the column holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append the value for the next index.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Iterator over the values in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// The values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Number of NaN entries.
    #[must_use]
    pub fn nan_count(&self) -> usize {
        self.data.iter().filter(|x| x.is_nan()).count()
    }
}

impl<T: TaFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: TaFloat> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: TaFloat> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}
