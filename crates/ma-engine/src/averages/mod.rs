//! Moving average variants.
//!
//! - SMA (Simple Moving Average)
//! - EMA (Exponential Moving Average)
//! - CMA (Cumulative Moving Average)
//! - WMA (Weighted Moving Average)
//! - SMMA (Smoothed Moving Average)

mod cma;
mod ema;
mod sma;
mod smma;
mod wma;

pub use cma::{cma, Cma, CmaConfig};
pub use ema::{ema, Ema, EmaConfig};
pub use sma::{sma, Sma, SmaConfig};
pub use smma::{smma, Smma, SmmaConfig};
pub use wma::{wma, Wma, WmaConfig};
