//! Cumulative Moving Average (CMA).
//!
//! The CMA is the running mean of every price seen so far.

use core::marker::PhantomData;

use ma_core::{
    candle::CandleSeries,
    error::{MaError, Result},
    num::TaFloat,
    price::PriceSource,
    result::{MaResult, MaVariant},
    series::Series,
    traits::MovingAverage,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the CMA.
///
/// The CMA has no period; it always spans the whole history to date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CmaConfig {
    /// Candle field used as input.
    pub price_source: PriceSource,
}

impl CmaConfig {
    /// Create a new CMA configuration reading `price_source`.
    pub fn new(price_source: PriceSource) -> Self {
        Self { price_source }
    }
}

/// Cumulative Moving Average.
///
/// # Formula
///
/// CMA_0 = P_0
/// CMA_i = CMA_{i-1} + (P_i - CMA_{i-1}) / (i + 1)
#[derive(Debug, Clone)]
pub struct Cma<T: TaFloat> {
    config: CmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> MovingAverage<T> for Cma<T> {
    type Config = CmaConfig;
    const VARIANT: MaVariant = MaVariant::Cma;

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
        None
    }

    fn price_source(&self) -> PriceSource {
        self.config.price_source
    }

    fn compute(&self, prices: &[T]) -> Result<MaResult<T>> {
        let Some(&first) = prices.first() else {
            tracing::debug!(variant = %Self::VARIANT, "rejecting empty input series");
            return Err(MaError::EmptySeries);
        };

        let mut values = Series::with_capacity(prices.len());
        let mut cma = first;
        values.push(cma);

        for (i, &price) in prices.iter().enumerate().skip(1) {
            // i + 1 prices are included at step i
            cma = cma + (price - cma) / <T as TaFloat>::from_usize(i + 1);
            values.push(cma);
        }

        Ok(MaResult::new(Self::VARIANT, values, 0))
    }
}

/// Cumulative moving average of `source` prices.
///
/// # Errors
///
/// Returns [`MaError::EmptySeries`] if `candles` is empty.
pub fn cma<T: TaFloat>(candles: &CandleSeries<T>, source: PriceSource) -> Result<MaResult<T>> {
    Cma::new(CmaConfig::new(source)).calculate(candles)
}
