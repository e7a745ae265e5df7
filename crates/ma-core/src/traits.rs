//! Core trait definitions for moving averages.
//!
//! Every moving-average variant implements [`MovingAverage`]: a pure batch
//! transform from a price slice to an index-aligned [`MaResult`].

use crate::candle::CandleSeries;
use crate::error::{MaError, Result};
use crate::num::TaFloat;
use crate::price::PriceSource;
use crate::result::{MaResult, MaVariant};

/// Bounds shared by every moving average configuration.
///
/// Serialization comes from each config's own `serde` derive, not from
/// this bound.
pub trait AverageConfig: Clone + Default + Send + Sync {}

impl<T> AverageConfig for T where T: Clone + Default + Send + Sync {}

/// Check a period/weight parameter against the input length.
///
/// # Errors
///
/// Returns [`MaError::EmptySeries`] if `len == 0`, and
/// [`MaError::InvalidParameter`] if `window` is outside `1..=len`.
///
/// # Example
///
/// ```rust
/// use ma_core::{validate_window, MaError};
///
/// assert!(validate_window("period", 3, 10).is_ok());
/// assert_eq!(validate_window("period", 3, 0), Err(MaError::EmptySeries));
/// assert!(validate_window("weight", 11, 10).is_err());
/// ```
pub fn validate_window(name: &'static str, window: usize, len: usize) -> Result<()> {
    if len == 0 {
        tracing::debug!(parameter = name, window, "rejecting empty input series");
        return Err(MaError::EmptySeries);
    }

    if window == 0 || window > len {
        tracing::debug!(parameter = name, window, len, "rejecting out-of-range window");
        return Err(MaError::invalid_parameter(name, window, len));
    }

    Ok(())
}

/// Core trait for moving averages.
///
/// Implementors provide [`compute`](MovingAverage::compute) over a raw price
/// slice; [`calculate`](MovingAverage::calculate) adds price extraction from
/// a candle series on top.
///
/// Implementations hold only their configuration, so a value can be shared
/// across threads and reused for any number of calls.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use ma_core::{MaResult, MaVariant, MovingAverage, PriceSource, Result, TaFloat};
///
/// struct Sma<T: TaFloat> {
///     config: SmaConfig,
///     _marker: PhantomData<T>,
/// }
///
/// impl<T: TaFloat> MovingAverage<T> for Sma<T> {
///     type Config = SmaConfig;
///     const VARIANT: MaVariant = MaVariant::Sma;
///
///     fn new(config: Self::Config) -> Self { /* ... */ }
///     fn config(&self) -> &Self::Config { &self.config }
///     fn window(&self) -> Option<usize> { Some(self.config.period) }
///     fn price_source(&self) -> PriceSource { self.config.price_source }
///     fn compute(&self, prices: &[T]) -> Result<MaResult<T>> { /* ... */ }
/// }
/// ```
pub trait MovingAverage<T: TaFloat>: Send + Sync {
    /// Configuration type for this moving average.
    type Config: AverageConfig;

    /// The variant tag attached to every result.
    const VARIANT: MaVariant;

    /// Create a new moving average with the given configuration.
    fn new(config: Self::Config) -> Self
    where
        Self: Sized;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;

    /// The period/weight parameter, or `None` for variants without one.
    fn window(&self) -> Option<usize>;

    /// The candle field this average reads.
    fn price_source(&self) -> PriceSource;

    /// The variant tag attached to every result.
    fn variant(&self) -> MaVariant {
        Self::VARIANT
    }

    /// Number of leading undefined entries in every result.
    fn warmup(&self) -> usize {
        Self::VARIANT.warmup(self.window().unwrap_or(0))
    }

    /// Compute the average over a raw price series.
    ///
    /// # Errors
    ///
    /// Returns an error if `prices` is empty or the window is outside
    /// `1..=prices.len()`. No output is produced in that case.
    fn compute(&self, prices: &[T]) -> Result<MaResult<T>>;

    /// Extract prices from `candles` and compute the average over them.
    ///
    /// # Errors
    ///
    /// Returns an error if `candles` is empty or the window is outside
    /// `1..=candles.len()`.
    fn calculate(&self, candles: &CandleSeries<T>) -> Result<MaResult<T>> {
        let prices = self.price_source().extract(candles)?;
        tracing::trace!(
            variant = %Self::VARIANT,
            window = ?self.window(),
            source = %self.price_source(),
            len = prices.len(),
            "calculating moving average"
        );
        self.compute(prices.as_slice())
    }
}
