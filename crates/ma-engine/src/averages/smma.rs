//! Smoothed Moving Average (SMMA), also known as the running moving average.

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

/// Configuration for the SMMA.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmmaConfig {
    /// Smoothing period.
    pub period: usize,
    /// Candle field used as input.
    pub price_source: PriceSource,
}

impl Default for SmmaConfig {
    fn default() -> Self {
        Self {
            period: 14,
            price_source: PriceSource::Close,
        }
    }
}

impl SmmaConfig {
    /// Create a new SMMA configuration with the given period.
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

/// Smoothed Moving Average.
///
/// # Formula
///
/// SMMA_{n-1} = (P_0 + ... + P_{n-1}) / n
/// SMMA_i = (SMMA_{i-1} * (n - 1) + P_i) / n
///
/// The seed is the same arithmetic mean the SMA reports at index `n - 1`.
/// Each later step replaces 1/n of the running value with the newest price.
#[derive(Debug, Clone)]
pub struct Smma<T: TaFloat> {
    config: SmmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> MovingAverage<T> for Smma<T> {
    type Config = SmmaConfig;
    const VARIANT: MaVariant = MaVariant::Smma;

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
        let retained = <T as TaFloat>::from_usize(period - 1);
        let mut values = Series::with_warmup(len, period - 1);

        // Seed: plain mean of the first `period` prices, summed as SMA does
        let sum = prices[..period].iter().fold(T::ZERO, |acc, &price| acc + price);
        let mut smma = sum / divisor;
        values.push(smma);

        for &price in &prices[period..] {
            smma = (smma * retained + price) / divisor;
            values.push(smma);
        }

        Ok(MaResult::new(Self::VARIANT, values, period - 1))
    }
}

/// Smoothed moving average of `source` prices over `period` candles.
///
/// # Errors
///
/// Returns an error if `candles` is empty or `period` is outside
/// `1..=candles.len()`.
pub fn smma<T: TaFloat>(
    candles: &CandleSeries<T>,
    period: usize,
    source: PriceSource,
) -> Result<MaResult<T>> {
    Smma::new(SmmaConfig::new(period).with_price_source(source)).calculate(candles)
}
