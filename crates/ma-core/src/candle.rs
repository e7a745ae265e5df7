//! Candle (OHLC price bar) data types.
//!
//! Candles are produced by an external data source; this module only stores
//! them in a form the moving average engine can read efficiently.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::TaFloat;
use crate::series::Series;

/// A single OHLC(V) price bar.
///
/// # Example
///
/// ```rust
/// use ma_core::Candle;
///
/// let candle = Candle::new(1_700_000_000_000, 100.0, 105.0, 98.0, 103.0).with_volume(2_500.0);
/// assert_eq!(candle.close, 103.0);
/// assert_eq!(candle.volume, Some(2_500.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Candle<T: TaFloat> {
    /// Open time of the bar (Unix epoch in milliseconds).
    pub timestamp: i64,
    /// Opening price for the period.
    pub open: T,
    /// Highest price during the period.
    pub high: T,
    /// Lowest price during the period.
    pub low: T,
    /// Closing price for the period.
    pub close: T,
    /// Trading volume, when the source provides it.
    pub volume: Option<T>,
}

impl<T: TaFloat> Candle<T> {
    /// Create a new candle without volume.
    #[must_use]
    pub fn new(timestamp: i64, open: T, high: T, low: T, close: T) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    /// Set the volume on an existing candle (builder pattern).
    #[must_use]
    pub fn with_volume(mut self, volume: T) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// A columnar, time-ordered collection of candles.
///
/// Index 0 is the earliest bar. Callers are expected to push candles in
/// strictly ascending timestamp order; the series does not reorder them.
///
/// # Example
///
/// ```rust
/// use ma_core::{Candle, CandleSeries};
///
/// let mut candles: CandleSeries<f64> = CandleSeries::new();
/// candles.push(Candle::new(0, 100.0, 105.0, 98.0, 103.0));
/// candles.push(Candle::new(60_000, 103.0, 108.0, 101.0, 107.0));
///
/// assert_eq!(candles.len(), 2);
/// assert_eq!(candles.close()[1], 107.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct CandleSeries<T: TaFloat> {
    timestamps: Vec<i64>,
    open: Series<T>,
    high: Series<T>,
    low: Series<T>,
    close: Series<T>,
    volume: Vec<Option<T>>,
}

impl<T: TaFloat> Default for CandleSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> CandleSeries<T> {
    /// Create a new empty candle series.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new candle series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(capacity),
            open: Series::with_capacity(capacity),
            high: Series::with_capacity(capacity),
            low: Series::with_capacity(capacity),
            close: Series::with_capacity(capacity),
            volume: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of candles in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns `true` if the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Append a candle to the series.
    pub fn push(&mut self, candle: Candle<T>) {
        self.timestamps.push(candle.timestamp);
        self.open.push(candle.open);
        self.high.push(candle.high);
        self.low.push(candle.low);
        self.close.push(candle.close);
        self.volume.push(candle.volume);
    }

    /// Get the candle at the specified index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Candle<T>> {
        if index >= self.len() {
            return None;
        }

        Some(Candle {
            timestamp: self.timestamps[index],
            open: self.open[index],
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
        })
    }

    /// Get the most recent candle, if any.
    #[must_use]
    pub fn last(&self) -> Option<Candle<T>> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns the bar timestamps.
    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Returns a reference to the open prices.
    #[must_use]
    pub fn open(&self) -> &Series<T> {
        &self.open
    }

    /// Returns a reference to the high prices.
    #[must_use]
    pub fn high(&self) -> &Series<T> {
        &self.high
    }

    /// Returns a reference to the low prices.
    #[must_use]
    pub fn low(&self) -> &Series<T> {
        &self.low
    }

    /// Returns a reference to the close prices.
    #[must_use]
    pub fn close(&self) -> &Series<T> {
        &self.close
    }

    /// Returns the per-bar volumes.
    #[must_use]
    pub fn volume(&self) -> &[Option<T>] {
        &self.volume
    }

    /// Returns an iterator over the candles.
    pub fn iter(&self) -> impl Iterator<Item = Candle<T>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl<T: TaFloat> FromIterator<Candle<T>> for CandleSeries<T> {
    fn from_iter<I: IntoIterator<Item = Candle<T>>>(iter: I) -> Self {
        let mut series = Self::new();
        for candle in iter {
            series.push(candle);
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CandleSeries<f64> {
        vec![
            Candle::new(0, 100.0, 105.0, 98.0, 103.0).with_volume(1_000.0),
            Candle::new(60_000, 103.0, 108.0, 101.0, 107.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_candle_creation() {
        let candle = Candle::new(42, 100.0, 105.0, 98.0, 103.0);
        assert_eq!(candle.timestamp, 42);
        assert_eq!(candle.open, 100.0);
        assert_eq!(candle.high, 105.0);
        assert_eq!(candle.low, 98.0);
        assert_eq!(candle.close, 103.0);
        assert!(candle.volume.is_none());
    }

    #[test]
    fn test_series_push_and_get() {
        let candles = sample();
        assert_eq!(candles.len(), 2);
        assert!(!candles.is_empty());

        let first = candles.get(0).unwrap();
        assert_eq!(first.close, 103.0);
        assert_eq!(first.volume, Some(1_000.0));

        let second = candles.get(1).unwrap();
        assert_eq!(second.timestamp, 60_000);
        assert!(second.volume.is_none());

        assert!(candles.get(2).is_none());
    }

    #[test]
    fn test_series_columns() {
        let candles = sample();
        assert_eq!(candles.timestamps(), &[0, 60_000]);
        assert_eq!(candles.open().as_slice(), &[100.0, 103.0]);
        assert_eq!(candles.high().as_slice(), &[105.0, 108.0]);
        assert_eq!(candles.low().as_slice(), &[98.0, 101.0]);
        assert_eq!(candles.close().as_slice(), &[103.0, 107.0]);
        assert_eq!(candles.volume(), &[Some(1_000.0), None]);
    }

    #[test]
    fn test_series_last_and_iter() {
        let empty: CandleSeries<f64> = CandleSeries::new();
        assert!(empty.last().is_none());
        assert_eq!(empty.iter().count(), 0);

        let candles = sample();
        assert_eq!(candles.last().unwrap().close, 107.0);

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        assert_eq!(closes, vec![103.0, 107.0]);
    }
}
