//! Exponential Moving Average (EMA).
//!
//! The EMA weights recent prices more heavily using a fixed smoothing
//! factor derived from the period.

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

/// Configuration for the EMA.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmaConfig {
    /// The period used to derive the smoothing factor.
    pub period: usize,
    /// Candle field used as input.
    pub price_source: PriceSource,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self {
            period: 14,
            price_source: PriceSource::Close,
        }
    }
}

impl EmaConfig {
    /// Create a new EMA configuration with the given period.
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

/// Exponential Moving Average.
///
/// # Formula
///
/// alpha = 2 / (period + 1)
/// EMA_0 = P_0
/// EMA_t = alpha * P_t + (1 - alpha) * EMA_{t-1}
///
/// Seeded with the first price, so every entry is defined.
#[derive(Debug, Clone)]
pub struct Ema<T: TaFloat> {
    config: EmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Ema<T> {
    /// Returns the smoothing factor (alpha).
    ///
    /// Evaluated in `T`, so it cannot overflow for an oversized period.
    pub fn alpha(&self) -> T {
        T::TWO / (<T as TaFloat>::from_usize(self.config.period) + T::ONE)
    }
}

impl<T: TaFloat> MovingAverage<T> for Ema<T> {
    type Config = EmaConfig;
    const VARIANT: MaVariant = MaVariant::Ema;

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
        validate_window("period", self.config.period, prices.len())?;

        let alpha = self.alpha();
        let one_minus_alpha = T::ONE - alpha;
        let mut values = Series::with_capacity(prices.len());

        let mut ema = prices[0];
        values.push(ema);

        for &price in &prices[1..] {
            ema = alpha * price + one_minus_alpha * ema;
            values.push(ema);
        }

        Ok(MaResult::new(Self::VARIANT, values, 0))
    }
}

/// Exponential moving average of `source` prices with smoothing derived
/// from `period`.
///
/// # Errors
///
/// Returns an error if `candles` is empty or `period` is outside
/// `1..=candles.len()`.
pub fn ema<T: TaFloat>(
    candles: &CandleSeries<T>,
    period: usize,
    source: PriceSource,
) -> Result<MaResult<T>> {
    Ema::new(EmaConfig::new(period).with_price_source(source)).calculate(candles)
}
