//! Golden data tests for ma-engine.
//!
//! Expected outputs in `tests/data/golden.json` were computed independently
//! from the textbook formulas. Each key is `<variant>[_<window>][_<source>]`,
//! and `null` marks a warm-up entry.

use std::collections::BTreeMap;

use ma_core::{Candle, CandleSeries, MaVariant, PriceSource};
use ma_engine::prelude::*;
use serde::Deserialize;

const GOLDEN: &str = include_str!("data/golden.json");

#[derive(Debug, Deserialize)]
struct GoldenData {
    candles: CandleColumns,
    expected: BTreeMap<String, Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
struct CandleColumns {
    timestamp: Vec<i64>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
}

impl GoldenData {
    fn load() -> Self {
        serde_json::from_str(GOLDEN).expect("golden.json should deserialize")
    }

    fn to_candle_series(&self) -> CandleSeries<f64> {
        let c = &self.candles;
        (0..c.close.len())
            .map(|i| Candle::new(c.timestamp[i], c.open[i], c.high[i], c.low[i], c.close[i]))
            .collect()
    }
}

/// Parse a fixture key such as `sma_3`, `cma` or `wma_4_low`.
fn parse_key(key: &str) -> (MaVariant, MaParams) {
    let mut parts = key.split('_');

    let variant = match parts.next() {
        Some("sma") => MaVariant::Sma,
        Some("ema") => MaVariant::Ema,
        Some("cma") => MaVariant::Cma,
        Some("wma") => MaVariant::Wma,
        Some("smma") => MaVariant::Smma,
        other => panic!("unknown variant in key {key}: {other:?}"),
    };

    let window = parts
        .next()
        .map(|w| w.parse().expect("window should be numeric"))
        .unwrap_or(14);

    let source = match parts.next() {
        None | Some("close") => PriceSource::Close,
        Some("open") => PriceSource::Open,
        Some("high") => PriceSource::High,
        Some("low") => PriceSource::Low,
        Some(other) => panic!("unknown price source in key {key}: {other}"),
    };

    (variant, MaParams::new(window).with_price_source(source))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn golden_fixture_is_well_formed() {
    let golden = GoldenData::load();
    let len = golden.candles.close.len();

    assert!(len > 0);
    for column in [&golden.candles.open, &golden.candles.high, &golden.candles.low] {
        assert_eq!(column.len(), len);
    }
    assert!(golden.candles.timestamp.windows(2).all(|w| w[0] < w[1]));
    assert!(!golden.expected.is_empty());
}

#[test]
fn golden_values_match() {
    init_tracing();

    let golden = GoldenData::load();
    let candles = golden.to_candle_series();

    for (key, expected) in &golden.expected {
        let (variant, params) = parse_key(key);
        let result = moving_average(variant, &candles, &params)
            .unwrap_or_else(|e| panic!("{key}: computation failed: {e}"));

        assert_eq!(result.variant(), variant, "{key}: wrong tag");
        assert_eq!(result.len(), expected.len(), "{key}: length mismatch");

        for (i, (actual, expected)) in result.to_options().iter().zip(expected).enumerate() {
            match (actual, expected) {
                (None, None) => {}
                (Some(a), Some(e)) => {
                    let rel = ((a - e) / e).abs();
                    assert!(rel < 1e-9, "{key}[{i}]: expected {e}, got {a} (rel diff {rel:.2e})");
                }
                _ => panic!("{key}[{i}]: definedness mismatch: expected {expected:?}, got {actual:?}"),
            }
        }
    }
}

#[test]
fn golden_direct_calls_agree_with_dispatch() {
    let golden = GoldenData::load();
    let candles = golden.to_candle_series();

    let direct = [
        ("sma_5", sma(&candles, 5, PriceSource::Close).unwrap()),
        ("ema_5", ema(&candles, 5, PriceSource::Close).unwrap()),
        ("cma", cma(&candles, PriceSource::Close).unwrap()),
        ("wma_4_low", wma(&candles, 4, PriceSource::Low).unwrap()),
        ("smma_3", smma(&candles, 3, PriceSource::Close).unwrap()),
    ];

    for (key, result) in direct {
        let expected = &golden.expected[key];
        for (i, value) in result.to_options().into_iter().enumerate() {
            match (value, expected[i]) {
                (None, None) => {}
                (Some(a), Some(e)) => assert!(((a - e) / e).abs() < 1e-9, "{key}[{i}]"),
                other => panic!("{key}[{i}]: definedness mismatch {other:?}"),
            }
        }
    }
}
