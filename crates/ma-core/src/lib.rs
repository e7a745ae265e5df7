//! # ma-core
//!
//! Core types and traits for the rust-ma moving average engine.
//!
//! This crate provides the foundational abstractions shared by every
//! moving-average variant:
//!
//! - [`TaFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Index-aligned value container
//! - [`Candle`] and [`CandleSeries`] - OHLC(V) price bars
//! - [`PriceSource`] - Selector mapping a candle series to a price series
//! - [`MaVariant`] and [`MaResult`] - Tagged, index-aligned output
//! - [`MovingAverage`] - Batch computation trait implemented by `ma-engine`
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use ma_core::prelude::*;
//!
//! let candles: CandleSeries<f64> = (0..3)
//!     .map(|i| Candle::new(i * 60_000, 1.0, 2.0, 0.5, 1.5 + i as f64))
//!     .collect();
//!
//! let closes = PriceSource::Close.extract(&candles).unwrap();
//! assert_eq!(closes.as_slice(), &[1.5, 2.5, 3.5]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod candle;
pub mod error;
pub mod num;
pub mod prelude;
pub mod price;
pub mod result;
pub mod series;
pub mod traits;

// Re-export core types at crate root
pub use candle::{Candle, CandleSeries};
pub use error::{MaError, Result};
pub use num::TaFloat;
pub use price::{extract_prices, PriceSource};
pub use result::{MaResult, MaVariant};
pub use series::Series;
pub use traits::{validate_window, AverageConfig, MovingAverage};
