//! End-to-end properties of the indicator pipeline.

use chrono::NaiveDate;
use stocklab_core::types::{Bar, Series};
use stocklab_indicators::Pipeline;

fn date(offset: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(offset as u64)
}

/// 25 daily bars climbing 0.50/day with High = Close + 1, Low = Close - 1.
fn rising_series() -> Series {
    let bars: Vec<Bar> = (0..25)
        .map(|i| {
            let close = 100.0 + i as f64 * 0.5;
            Bar::new(date(i), close, close + 1.0, close - 1.0, close, 1000)
        })
        .collect();
    Series::new("RELIANCE.NS", bars).unwrap()
}

/// The same flat bar repeated 30 times.
fn flat_series() -> Series {
    let bars: Vec<Bar> = (0..30)
        .map(|i| Bar::new(date(i), 100.0, 100.0, 100.0, 100.0, 1000))
        .collect();
    Series::new("ITC.NS", bars).unwrap()
}

#[test]
fn rising_series_scenario() {
    let pipeline = Pipeline::with_defaults();
    let series = rising_series();
    let rows = pipeline.run(&series);

    assert_eq!(rows.len(), 25);

    // SMA(20) at position 24 is the mean of closes 5..=24.
    let expected: f64 = (5..=24).map(|i| 100.0 + i as f64 * 0.5).sum::<f64>() / 20.0;
    assert!((rows[24].sma_20.unwrap() - expected).abs() < 1e-9);

    // Every delta is positive, so RSI saturates at 100.
    assert!((rows[24].rsi.unwrap() - 100.0).abs() < 1e-9);

    // Close sits at the top of the trailing high/low range... almost: the
    // high extends one point above the close.
    // %K = 100 * (close - min_low) / (max_high - min_low)
    let close = 100.0 + 24.0 * 0.5;
    let min_low = (100.0 + 11.0 * 0.5) - 1.0;
    let max_high = close + 1.0;
    let expected_k = 100.0 * (close - min_low) / (max_high - min_low);
    assert!((rows[24].stoch_k.unwrap() - expected_k).abs() < 1e-9);
}

#[test]
fn flat_series_scenario() {
    let pipeline = Pipeline::with_defaults();
    let series = flat_series();
    let rows = pipeline.run(&series);

    assert_eq!(rows.len(), 30);

    // 0/0 momentum: RSI stays absent even after the window fills.
    assert!(rows.iter().all(|r| r.rsi.is_none()));

    // Zero high/low range: %K stays absent.
    assert!(rows.iter().all(|r| r.stoch_k.is_none()));

    // SMA and EMA settle on the constant once defined.
    assert!((rows[19].sma_20.unwrap() - 100.0).abs() < 1e-10);
    assert!((rows[29].sma_20.unwrap() - 100.0).abs() < 1e-10);
    assert!((rows[0].ema_12.unwrap() - 100.0).abs() < 1e-10);
    assert!((rows[29].ema_26.unwrap() - 100.0).abs() < 1e-10);

    // Bands collapse onto the constant close.
    assert!((rows[19].bb_upper.unwrap() - 100.0).abs() < 1e-10);
    assert!((rows[19].bb_lower.unwrap() - 100.0).abs() < 1e-10);

    // Flat bars have zero true range.
    assert!(rows[13].atr.unwrap().abs() < 1e-10);
}

#[test]
fn output_is_index_aligned() {
    let pipeline = Pipeline::with_defaults();
    let series = rising_series();
    let rows = pipeline.run(&series);

    assert_eq!(rows.len(), series.len());
    for (row, bar) in rows.iter().zip(series.iter()) {
        assert_eq!(row.bar.date, bar.date);
        assert_eq!(row.bar.close, bar.close);
    }
}

#[test]
fn pipeline_is_idempotent() {
    let pipeline = Pipeline::with_defaults();
    let series = rising_series();

    let first = pipeline.run(&series);
    let second = pipeline.run(&series);
    assert_eq!(first, second);
}

#[test]
fn pipeline_does_not_mutate_input() {
    let pipeline = Pipeline::with_defaults();
    let series = rising_series();
    let copy = series.clone();

    let _ = pipeline.run(&series);
    assert_eq!(series, copy);
}

#[test]
fn no_lookahead() {
    let pipeline = Pipeline::with_defaults();
    let series = rising_series();
    let baseline = pipeline.run(&series);

    // Replace the final bar with something wild; earlier rows must not move.
    let mut bars = series.bars().to_vec();
    let last = bars.len() - 1;
    bars[last] = Bar::new(date(last as i32), 500.0, 600.0, 400.0, 550.0, 9_999_999);
    let mutated = Series::new("RELIANCE.NS", bars).unwrap();
    let rerun = pipeline.run(&mutated);

    for i in 0..last {
        assert_eq!(baseline[i], rerun[i], "row {} changed", i);
    }
}

#[test]
fn rsi_is_bounded() {
    let pipeline = Pipeline::with_defaults();
    let bars: Vec<Bar> = (0..120)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.9).sin() * 20.0 + (i as f64 * 0.13).cos() * 7.0;
            Bar::new(date(i), close, close + 2.0, close - 2.0, close, 1000 + i as u64)
        })
        .collect();
    let series = Series::new("SBIN.NS", bars).unwrap();
    let rows = pipeline.run(&series);

    for row in &rows {
        if let Some(rsi) = row.rsi {
            assert!((0.0..=100.0).contains(&rsi));
        }
        if let Some(k) = row.stoch_k {
            assert!((0.0..=100.0).contains(&k));
        }
    }
}
