//! Tagged moving average output.
//!
//! An [`MaResult`] is always index-aligned with its input: it holds exactly
//! one entry per input price. Leading warm-up entries, where a windowed
//! average has too little history, are stored as NaN and reported as `None`
//! by the typed accessors. They are never zero.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::TaFloat;
use crate::series::Series;

/// Identifies which formula produced an [`MaResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum MaVariant {
    /// Simple moving average.
    Sma,
    /// Exponential moving average.
    Ema,
    /// Cumulative moving average.
    Cma,
    /// Weighted moving average.
    Wma,
    /// Smoothed (running) moving average.
    Smma,
}

impl MaVariant {
    /// All variants, in declaration order.
    pub const ALL: [MaVariant; 5] = [Self::Sma, Self::Ema, Self::Cma, Self::Wma, Self::Smma];

    /// Conventional acronym of the variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Cma => "CMA",
            Self::Wma => "WMA",
            Self::Smma => "SMMA",
        }
    }

    /// Whether the variant takes a period/weight parameter.
    #[must_use]
    pub fn uses_window(self) -> bool {
        !matches!(self, Self::Cma)
    }

    /// Number of leading undefined entries for the given window.
    ///
    /// Windowed variants need `window` prices before their first value;
    /// recursive variants seed from the first price and have no gap.
    #[must_use]
    pub fn warmup(self, window: usize) -> usize {
        match self {
            Self::Sma | Self::Wma | Self::Smma => window.saturating_sub(1),
            Self::Ema | Self::Cma => 0,
        }
    }
}

impl fmt::Display for MaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a moving average computation.
///
/// # Example
///
/// ```rust
/// use ma_core::{MaResult, MaVariant, Series};
///
/// let result = MaResult::new(MaVariant::Sma, Series::from(vec![f64::NAN, 1.5, 2.5]), 1);
///
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.get(0), None);
/// assert_eq!(result.get(1), Some(1.5));
/// assert_eq!(result.to_options(), vec![None, Some(1.5), Some(2.5)]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound = "T: TaFloat", from = "MaResultFields<T>")
)]
pub struct MaResult<T: TaFloat> {
    variant: MaVariant,
    values: Series<T>,
    warmup: usize,
}

/// Wire shape of [`MaResult`]; decoding goes through [`MaResult::new`] so
/// `warmup` never exceeds the length.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound = "T: TaFloat")]
struct MaResultFields<T: TaFloat> {
    variant: MaVariant,
    values: Series<T>,
    warmup: usize,
}

#[cfg(feature = "serde")]
impl<T: TaFloat> From<MaResultFields<T>> for MaResult<T> {
    fn from(fields: MaResultFields<T>) -> Self {
        Self::new(fields.variant, fields.values, fields.warmup)
    }
}

impl<T: TaFloat> MaResult<T> {
    /// Wrap computed values.
    ///
    /// `warmup` is the number of leading entries that carry no defined value;
    /// it is clamped to the series length.
    #[must_use]
    pub fn new(variant: MaVariant, values: Series<T>, warmup: usize) -> Self {
        let warmup = warmup.min(values.len());
        Self {
            variant,
            values,
            warmup,
        }
    }

    /// The formula that produced these values.
    #[must_use]
    pub fn variant(&self) -> MaVariant {
        self.variant
    }

    /// Raw aligned values, with NaN in the warm-up entries.
    #[must_use]
    pub fn values(&self) -> &Series<T> {
        &self.values
    }

    /// Raw aligned values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.values.as_slice()
    }

    /// Number of entries; always equal to the input length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the result holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of leading undefined entries.
    #[must_use]
    pub fn warmup(&self) -> usize {
        self.warmup
    }

    /// Index of the first defined entry, if any.
    #[must_use]
    pub fn first_defined_index(&self) -> Option<usize> {
        (self.warmup < self.len()).then_some(self.warmup)
    }

    /// Whether entry `index` carries a defined value.
    #[must_use]
    pub fn is_defined(&self, index: usize) -> bool {
        index >= self.warmup && index < self.len()
    }

    /// Value at `index`, or `None` during warm-up or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        if self.is_defined(index) {
            Some(self.values[index])
        } else {
            None
        }
    }

    /// The most recent value, if defined.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterator over `(index, value)` pairs of the defined entries.
    pub fn defined(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.values
            .iter()
            .copied()
            .enumerate()
            .skip(self.warmup)
    }

    /// One `Option` per input index, `None` during warm-up.
    #[must_use]
    pub fn to_options(&self) -> Vec<Option<T>> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }

    /// Consumes the result and returns the raw aligned values.
    #[must_use]
    pub fn into_series(self) -> Series<T> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names() {
        let names: Vec<String> = MaVariant::ALL.iter().map(|v| v.to_string()).collect();
        assert_eq!(names, vec!["SMA", "EMA", "CMA", "WMA", "SMMA"]);
    }

    #[test]
    fn test_variant_warmup() {
        assert_eq!(MaVariant::Sma.warmup(14), 13);
        assert_eq!(MaVariant::Wma.warmup(3), 2);
        assert_eq!(MaVariant::Smma.warmup(1), 0);
        assert_eq!(MaVariant::Ema.warmup(14), 0);
        assert_eq!(MaVariant::Cma.warmup(14), 0);
        assert_eq!(MaVariant::Sma.warmup(0), 0);
    }

    #[test]
    fn test_uses_window() {
        assert!(MaVariant::Sma.uses_window());
        assert!(MaVariant::Smma.uses_window());
        assert!(!MaVariant::Cma.uses_window());
    }

    #[test]
    fn test_result_accessors() {
        let values = Series::from(vec![f64::NAN, f64::NAN, 2.0, 3.0]);
        let result = MaResult::new(MaVariant::Sma, values, 2);

        assert_eq!(result.variant(), MaVariant::Sma);
        assert_eq!(result.len(), 4);
        assert_eq!(result.warmup(), 2);
        assert_eq!(result.first_defined_index(), Some(2));
        assert!(!result.is_defined(1));
        assert!(result.is_defined(2));
        assert!(!result.is_defined(4));
        assert_eq!(result.get(1), None);
        assert_eq!(result.get(3), Some(3.0));
        assert_eq!(result.get(4), None);
        assert_eq!(result.last(), Some(3.0));

        let defined: Vec<(usize, f64)> = result.defined().collect();
        assert_eq!(defined, vec![(2, 2.0), (3, 3.0)]);
    }

    #[test]
    fn test_result_warmup_clamped() {
        let result: MaResult<f64> = MaResult::new(MaVariant::Wma, Series::with_warmup(2, 2), 5);
        assert_eq!(result.warmup(), 2);
        assert_eq!(result.first_defined_index(), None);
        assert_eq!(result.last(), None);
        assert_eq!(result.to_options(), vec![None, None]);
    }

    #[test]
    fn test_into_series_keeps_alignment() {
        let result = MaResult::new(MaVariant::Ema, Series::from(vec![1.0, 2.0]), 0);
        assert_eq!(result.into_series().as_slice(), &[1.0, 2.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_variant_serde() {
        let json = serde_json::to_string(&MaVariant::Smma).unwrap();
        assert_eq!(json, "\"SMMA\"");
        let back: MaVariant = serde_json::from_str("\"WMA\"").unwrap();
        assert_eq!(back, MaVariant::Wma);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_deserialize_clamps_warmup() {
        let json = r#"{"variant":"SMA","values":{"data":[1.0,2.0]},"warmup":7}"#;
        let result: MaResult<f64> = serde_json::from_str(json).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.warmup(), 2);
        assert_eq!(result.first_defined_index(), None);
        assert_eq!(result.to_options(), vec![None, None]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_serde_keeps_warmup() {
        let result = MaResult::new(MaVariant::Wma, Series::from(vec![1.0, 2.0, 3.0]), 1);
        let json = serde_json::to_string(&result).unwrap();
        let back: MaResult<f64> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.warmup(), 1);
        assert_eq!(back.get(0), None);
        assert_eq!(back.get(2), Some(3.0));
    }
}
