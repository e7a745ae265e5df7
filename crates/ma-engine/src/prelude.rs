//! Prelude for ma-engine.
//!
//! This module re-exports all commonly used types, traits and functions.

pub use crate::averages::{
    cma, ema, sma, smma, wma,
    Cma, CmaConfig,
    Ema, EmaConfig,
    Sma, SmaConfig,
    Smma, SmmaConfig,
    Wma, WmaConfig,
};

pub use crate::dispatch::{moving_average, moving_average_of, MaParams};

pub use ma_core::traits::MovingAverage;
