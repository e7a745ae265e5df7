//! Run-time selection of a moving average variant.
//!
//! Callers that keep the variant as data (a chart overlay setting, a
//! strategy parameter) use [`moving_average`] instead of naming the
//! concrete type.

use ma_core::{
    candle::CandleSeries,
    error::Result,
    num::TaFloat,
    price::PriceSource,
    result::{MaResult, MaVariant},
    traits::MovingAverage,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::averages::{
    Cma, CmaConfig, Ema, EmaConfig, Sma, SmaConfig, Smma, SmmaConfig, Wma, WmaConfig,
};

/// Per-call parameters shared by every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaParams {
    /// Period (SMA, EMA, SMMA) or weight window (WMA). Ignored by CMA.
    pub window: usize,
    /// Candle field used as input.
    pub price_source: PriceSource,
}

impl Default for MaParams {
    fn default() -> Self {
        Self {
            window: 14,
            price_source: PriceSource::Close,
        }
    }
}

impl MaParams {
    /// Create parameters with the given window.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Set the price source.
    pub fn with_price_source(mut self, price_source: PriceSource) -> Self {
        self.price_source = price_source;
        self
    }
}

/// Compute the `variant` moving average of `candles`.
///
/// # Errors
///
/// Returns an error if `candles` is empty or, for variants that take one,
/// `params.window` is outside `1..=candles.len()`.
///
/// # Example
///
/// ```rust
/// use ma_core::prelude::*;
/// use ma_engine::{moving_average, MaParams};
///
/// let candles: CandleSeries<f64> = [1.0, 2.0, 3.0, 4.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &c)| Candle::new(i as i64, c, c, c, c))
///     .collect();
///
/// let result = moving_average(MaVariant::Sma, &candles, &MaParams::new(2)).unwrap();
/// assert_eq!(result.to_options(), vec![None, Some(1.5), Some(2.5), Some(3.5)]);
/// ```
pub fn moving_average<T: TaFloat>(
    variant: MaVariant,
    candles: &CandleSeries<T>,
    params: &MaParams,
) -> Result<MaResult<T>> {
    tracing::debug!(
        %variant,
        window = params.window,
        source = %params.price_source,
        len = candles.len(),
        "dispatching moving average"
    );

    let prices = params.price_source.extract(candles)?;
    moving_average_of(variant, prices.as_slice(), params.window)
}

/// Compute the `variant` moving average of an already extracted price series.
///
/// # Errors
///
/// Returns an error if `prices` is empty or, for variants that take one,
/// `window` is outside `1..=prices.len()`.
pub fn moving_average_of<T: TaFloat>(
    variant: MaVariant,
    prices: &[T],
    window: usize,
) -> Result<MaResult<T>> {
    match variant {
        MaVariant::Sma => Sma::new(SmaConfig::new(window)).compute(prices),
        MaVariant::Ema => Ema::new(EmaConfig::new(window)).compute(prices),
        MaVariant::Cma => Cma::new(CmaConfig::default()).compute(prices),
        MaVariant::Wma => Wma::new(WmaConfig::new(window)).compute(prices),
        MaVariant::Smma => Smma::new(SmmaConfig::new(window)).compute(prices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ma_core::{candle::Candle, error::MaError};

    fn create_test_candles(closes: &[f64]) -> CandleSeries<f64> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle::new(i as i64, close - 1.0, close + 1.0, close - 2.0, close))
            .collect()
    }

    #[test]
    fn test_params_default() {
        let params = MaParams::default();
        assert_eq!(params.window, 14);
        assert_eq!(params.price_source, PriceSource::Close);
    }

    #[test]
    fn test_dispatch_tags_result() {
        let candles = create_test_candles(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let params = MaParams::new(3);

        for variant in MaVariant::ALL {
            let result = moving_average(variant, &candles, &params).unwrap();
            assert_eq!(result.variant(), variant);
            assert_eq!(result.len(), candles.len());
            assert_eq!(result.warmup(), variant.warmup(3));
        }
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let candles = create_test_candles(&[4.0, 8.0, 6.0, 2.0, 9.0, 7.0]);
        let params = MaParams::new(3).with_price_source(PriceSource::High);

        let dispatched = moving_average(MaVariant::Wma, &candles, &params).unwrap();
        let direct = crate::averages::wma(&candles, 3, PriceSource::High).unwrap();

        assert_eq!(dispatched.to_options(), direct.to_options());
    }

    #[test]
    fn test_dispatch_cma_ignores_window() {
        let candles = create_test_candles(&[1.0, 3.0]);
        let result = moving_average(MaVariant::Cma, &candles, &MaParams::new(99)).unwrap();
        assert_eq!(result.to_options(), vec![Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_dispatch_errors() {
        let candles = create_test_candles(&[1.0, 2.0]);

        assert_eq!(
            moving_average(MaVariant::Smma, &candles, &MaParams::new(3)),
            Err(MaError::invalid_parameter("period", 3, 2))
        );
        assert_eq!(
            moving_average(MaVariant::Wma, &candles, &MaParams::new(0)),
            Err(MaError::invalid_parameter("weight", 0, 2))
        );

        let empty = create_test_candles(&[]);
        for variant in MaVariant::ALL {
            assert_eq!(
                moving_average(variant, &empty, &MaParams::default()),
                Err(MaError::EmptySeries)
            );
        }
    }
}
