//! # ma-engine
//!
//! Moving averages for the rust-ma library.
//!
//! Five variants share one contract: a price series of length N goes in, an
//! [`MaResult`](ma_core::MaResult) of length N comes out, tagged with the
//! variant that produced it.
//!
//! | Variant | Parameter | Warm-up entries |
//! |---------|-----------|-----------------|
//! | [`Sma`]  | period `n` | `n - 1` |
//! | [`Ema`]  | period `n` | none |
//! | [`Cma`]  | none       | none |
//! | [`Wma`]  | weight `n` | `n - 1` |
//! | [`Smma`] | period `n` | `n - 1` |
//!
//! # Example
//!
//! ```
//! use ma_core::prelude::*;
//! use ma_engine::prelude::*;
//!
//! let candles: CandleSeries<f64> = (1..=10)
//!     .map(|i| {
//!         let close = f64::from(i);
//!         Candle::new(i64::from(i) * 60_000, close, close, close, close)
//!     })
//!     .collect();
//!
//! let result = sma(&candles, 3, PriceSource::Close).unwrap();
//! assert_eq!(result.get(1), None);
//! assert_eq!(result.get(2), Some(2.0));
//! assert_eq!(result.get(9), Some(9.0));
//!
//! let smoothed = Smma::<f64>::new(SmmaConfig::new(3)).calculate(&candles).unwrap();
//! assert_eq!(smoothed.get(2), result.get(2));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod averages;
pub mod dispatch;

pub mod prelude;

pub use prelude::*;
