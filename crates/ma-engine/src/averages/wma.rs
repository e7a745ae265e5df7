//! Weighted Moving Average (WMA).
//!
//! WMA assigns linearly increasing weights to the prices in its window, so
//! the newest price counts the most.

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

/// Configuration for WMA.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WmaConfig {
    /// Window size; also the weight of the newest price (default: 14).
    pub weight: usize,
    /// Candle field used as input.
    pub price_source: PriceSource,
}

impl Default for WmaConfig {
    fn default() -> Self {
        Self {
            weight: 14,
            price_source: PriceSource::Close,
        }
    }
}

impl WmaConfig {
    /// Create a new configuration.
    pub fn new(weight: usize) -> Self {
        Self {
            weight,
            ..Self::default()
        }
    }

    /// Set the price source.
    pub fn with_price_source(mut self, price_source: PriceSource) -> Self {
        self.price_source = price_source;
        self
    }
}

/// Weighted Moving Average.
///
/// # Formula
///
/// WMA = (n*P_n + (n-1)*P_{n-1} + ... + 1*P_1) / (n + (n-1) + ... + 1)
///     = Sum(i * P_i) / (n * (n+1) / 2)
///
/// The first `n - 1` entries are undefined.
#[derive(Debug, Clone)]
pub struct Wma<T: TaFloat> {
    config: WmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Wma<T> {
    /// Triangular normalizer: n * (n+1) / 2.
    ///
    /// Evaluated in `T`, so it cannot overflow for an oversized weight.
    pub fn weight_sum(&self) -> T {
        let n = <T as TaFloat>::from_usize(self.config.weight);
        n * (n + T::ONE) / T::TWO
    }

    /// Normalized weights, oldest first. They sum to one.
    pub fn weights(&self) -> Vec<T> {
        let weight_sum = self.weight_sum();
        (1..=self.config.weight)
            .map(|k| <T as TaFloat>::from_usize(k) / weight_sum)
            .collect()
    }
}

impl<T: TaFloat> MovingAverage<T> for Wma<T> {
    type Config = WmaConfig;
    const VARIANT: MaVariant = MaVariant::Wma;

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
        Some(self.config.weight)
    }

    fn price_source(&self) -> PriceSource {
        self.config.price_source
    }

    fn compute(&self, prices: &[T]) -> Result<MaResult<T>> {
        let len = prices.len();
        let window = self.config.weight;
        validate_window("weight", window, len)?;

        let weight_sum = self.weight_sum();
        let mut values = Series::with_warmup(len, window - 1);

        for i in window - 1..len {
            let start = i + 1 - window;
            let weighted_sum = prices[start..=i]
                .iter()
                .enumerate()
                .fold(T::ZERO, |acc, (k, &price)| {
                    acc + price * <T as TaFloat>::from_usize(k + 1)
                });
            values.push(weighted_sum / weight_sum);
        }

        Ok(MaResult::new(Self::VARIANT, values, window - 1))
    }
}

/// Weighted moving average of `source` prices over a window of `weight`
/// candles.
///
/// # Errors
///
/// Returns an error if `candles` is empty or `weight` is outside
/// `1..=candles.len()`.
pub fn wma<T: TaFloat>(
    candles: &CandleSeries<T>,
    weight: usize,
    source: PriceSource,
) -> Result<MaResult<T>> {
    Wma::new(WmaConfig::new(weight).with_price_source(source)).calculate(candles)
}
