//! Price extraction.
//!
//! A [`PriceSource`] selects which field of each candle feeds a moving
//! average. Extraction turns a [`CandleSeries`] into a flat, index-aligned
//! [`Series`] of prices.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::candle::{Candle, CandleSeries};
use crate::error::{MaError, Result};
use crate::num::TaFloat;
use crate::series::Series;

/// Which price field of a candle to use as input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PriceSource {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    #[default]
    Close,
}

impl PriceSource {
    /// All price sources, in declaration order.
    pub const ALL: [PriceSource; 4] = [Self::Open, Self::High, Self::Low, Self::Close];

    /// Returns the selected field of a single candle.
    #[must_use]
    pub fn select<T: TaFloat>(self, candle: &Candle<T>) -> T {
        match self {
            Self::Open => candle.open,
            Self::High => candle.high,
            Self::Low => candle.low,
            Self::Close => candle.close,
        }
    }

    /// Returns the selected column of a candle series without copying.
    #[must_use]
    pub fn column<T: TaFloat>(self, candles: &CandleSeries<T>) -> &Series<T> {
        match self {
            Self::Open => candles.open(),
            Self::High => candles.high(),
            Self::Low => candles.low(),
            Self::Close => candles.close(),
        }
    }

    /// Extract the price series for this source.
    ///
    /// Element `i` of the output is the selected field of candle `i`.
    ///
    /// # Errors
    ///
    /// Returns [`MaError::EmptySeries`] if `candles` is empty.
    pub fn extract<T: TaFloat>(self, candles: &CandleSeries<T>) -> Result<Series<T>> {
        if candles.is_empty() {
            tracing::debug!(source = %self, "refusing to extract prices from an empty series");
            return Err(MaError::EmptySeries);
        }

        Ok(self.column(candles).clone())
    }

    /// Lowercase name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the `source` field of every candle.
///
/// # Errors
///
/// Returns [`MaError::EmptySeries`] if `candles` is empty.
///
/// # Example
///
/// ```rust
/// use ma_core::{extract_prices, Candle, CandleSeries, PriceSource};
///
/// let candles: CandleSeries<f64> = vec![
///     Candle::new(0, 1.0, 4.0, 0.5, 2.0),
///     Candle::new(1, 2.0, 5.0, 1.5, 3.0),
/// ]
/// .into_iter()
/// .collect();
///
/// let highs = extract_prices(&candles, PriceSource::High).unwrap();
/// assert_eq!(highs.as_slice(), &[4.0, 5.0]);
/// ```
pub fn extract_prices<T: TaFloat>(
    candles: &CandleSeries<T>,
    source: PriceSource,
) -> Result<Series<T>> {
    source.extract(candles)
}
