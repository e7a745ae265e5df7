//! Simple Moving Average (SMA).
//!
//! The SMA is the unweighted mean of the most recent `period` prices.

use core::marker::PhantomData;

use ma_core::{
    candle::CandleSeries,
    error::Result,
    num::TaFloat,
    price::PriceSource,
    result::{MaResult, MaVariant},
    series::Series,
    traits::{validate_window, MovingAverage},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the SMA.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmaConfig {
    /// Number of prices averaged at each index.
    pub period: usize,
    /// Candle field used as input.
    pub price_source: PriceSource,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            period: 14,
            price_source: PriceSource::Close,
        }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given period.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    /// Set the price source.
    pub fn with_price_source(mut self, price_source: PriceSource) -> Self {
        self.price_source = price_source;
        self
    }
}

/// Simple Moving Average.
///
/// # Formula
///
/// SMA_i = (P_{i-n+1} + ... + P_i) / n
///
/// The window sum is maintained incrementally, so a full pass is O(N).
/// The first `n - 1` entries are undefined.
#[derive(Debug, Clone)]
pub struct Sma<T: TaFloat> {
    config: SmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> MovingAverage<T> for Sma<T> {
    type Config = SmaConfig;
    const VARIANT: MaVariant = MaVariant::Sma;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn window(&self) -> Option<usize> {
        Some(self.config.period)
    }

    fn price_source(&self) -> PriceSource {
        self.config.price_source
    }

    fn compute(&self, prices: &[T]) -> Result<MaResult<T>> {
        let len = prices.len();
        let period = self.config.period;
        validate_window("period", period, len)?;

        let divisor = <T as TaFloat>::from_usize(period);
        let mut values = Series::with_warmup(len, period - 1);

        let mut sum = prices[..period].iter().fold(T::ZERO, |acc, &price| acc + price);
        values.push(sum / divisor);

        for i in period..len {
            sum = sum - prices[i - period] + prices[i];
            values.push(sum / divisor);
        }

        Ok(MaResult::new(Self::VARIANT, values, period - 1))
    }
}

/// Simple moving average of `source` prices over `period` candles.
///
/// # Errors
///
/// Returns an error if `candles` is empty or `period` is outside
/// `1..=candles.len()`.
pub fn sma<T: TaFloat>(
    candles: &CandleSeries<T>,
    period: usize,
    source: PriceSource,
) -> Result<MaResult<T>> {
    Sma::new(SmaConfig::new(period).with_price_source(source)).calculate(candles)
}
