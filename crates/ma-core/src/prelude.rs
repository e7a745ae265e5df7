//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits from ma-core.
//!
//! # Example
//!
//! ```rust
//! use ma_core::prelude::*;
//!
//! let series: Series<f64> = Series::new();
//! let candle = Candle::new(1_700_000_000_000, 100.0, 105.0, 98.0, 103.0);
//! assert_eq!(PriceSource::High.select(&candle), 105.0);
//! ```

// Core types
pub use crate::candle::{Candle, CandleSeries};
pub use crate::num::TaFloat;
pub use crate::price::{extract_prices, PriceSource};
pub use crate::result::{MaResult, MaVariant};
pub use crate::series::Series;

// Error types
pub use crate::error::{MaError, Result};

// Traits
pub use crate::traits::{validate_window, AverageConfig, MovingAverage};
