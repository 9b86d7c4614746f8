//! Latest-values snapshot over an enriched series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stocklab_core::types::IndicatorRow;

/// Trailing rows considered for the 52-week high/low (one trading year).
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// The most recent state of an enriched series.
///
/// Collects the last row's derived fields together with day-change and
/// trailing-year statistics. This is the unit the signal engine scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub symbol: String,
    pub date: NaiveDate,
    pub close: f64,
    pub volume: u64,
    /// Close minus previous close; absent for a one-bar series.
    pub day_change: Option<f64>,
    /// Day change as a percentage of the previous close.
    pub day_change_percent: Option<f64>,
    /// Highest high over the trailing year of rows.
    pub high_52w: f64,
    /// Lowest low over the trailing year of rows.
    pub low_52w: f64,

    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub stoch_k: Option<f64>,
    pub stoch_d: Option<f64>,
    pub atr: Option<f64>,
    pub volume_ratio: Option<f64>,
}

impl IndicatorSnapshot {
    /// Snapshot the most recent row; `None` when there are no rows.
    pub fn from_rows(symbol: &str, rows: &[IndicatorRow]) -> Option<Self> {
        let last = rows.last()?;
        let prev_close = rows.len().checked_sub(2).map(|i| rows[i].bar.close);

        let day_change = prev_close.map(|pc| last.bar.close - pc);
        let day_change_percent = prev_close.and_then(|pc| {
            if pc != 0.0 {
                Some((last.bar.close - pc) / pc * 100.0)
            } else {
                None
            }
        });

        let year = &rows[rows.len().saturating_sub(TRADING_DAYS_PER_YEAR)..];
        let high_52w = year
            .iter()
            .map(|r| r.bar.high)
            .fold(f64::NEG_INFINITY, f64::max);
        let low_52w = year.iter().map(|r| r.bar.low).fold(f64::INFINITY, f64::min);

        Some(Self {
            symbol: symbol.to_string(),
            date: last.bar.date,
            close: last.bar.close,
            volume: last.bar.volume,
            day_change,
            day_change_percent,
            high_52w,
            low_52w,
            sma_20: last.sma_20,
            sma_50: last.sma_50,
            rsi: last.rsi,
            macd: last.macd,
            macd_signal: last.macd_signal,
            bb_upper: last.bb_upper,
            bb_middle: last.bb_middle,
            bb_lower: last.bb_lower,
            stoch_k: last.stoch_k,
            stoch_d: last.stoch_d,
            atr: last.atr,
            volume_ratio: last.volume_ratio,
        })
    }

    /// Position of the close within the 52-week range, in [0, 1].
    /// 0.5 when the range is degenerate.
    pub fn range_position(&self) -> f64 {
        let range = self.high_52w - self.low_52w;
        if range > 0.0 {
            (self.close - self.low_52w) / range
        } else {
            0.5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklab_core::types::Bar;

    fn rows_from_closes(closes: &[f64]) -> Vec<IndicatorRow> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = NaiveDate::from_num_days_from_ce_opt(738000 + i as i32).unwrap();
                IndicatorRow::bare(Bar::new(date, close, close + 2.0, close - 2.0, close, 500))
            })
            .collect()
    }

    #[test]
    fn test_empty_rows_have_no_snapshot() {
        assert!(IndicatorSnapshot::from_rows("TCS.NS", &[]).is_none());
    }

    #[test]
    fn test_snapshot_takes_last_row() {
        let rows = rows_from_closes(&[100.0, 102.0, 101.0]);
        let snap = IndicatorSnapshot::from_rows("TCS.NS", &rows).unwrap();

        assert_eq!(snap.close, 101.0);
        assert!((snap.day_change.unwrap() + 1.0).abs() < 1e-10);
        assert!((snap.day_change_percent.unwrap() + 1.0 / 102.0 * 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_row_has_no_day_change() {
        let rows = rows_from_closes(&[100.0]);
        let snap = IndicatorSnapshot::from_rows("TCS.NS", &rows).unwrap();

        assert_eq!(snap.day_change, None);
        assert_eq!(snap.day_change_percent, None);
    }

    #[test]
    fn test_52w_range_and_position() {
        let closes: Vec<f64> = (0..300).map(|i| 100.0 + i as f64 * 0.1).collect();
        let rows = rows_from_closes(&closes);
        let snap = IndicatorSnapshot::from_rows("INFY.NS", &rows).unwrap();

        // Only the trailing 252 rows count: first eligible close is at
        // index 48.
        let expected_low = (100.0 + 48.0 * 0.1) - 2.0;
        let expected_high = (100.0 + 299.0 * 0.1) + 2.0;
        assert!((snap.low_52w - expected_low).abs() < 1e-10);
        assert!((snap.high_52w - expected_high).abs() < 1e-10);

        let pos = snap.range_position();
        assert!(pos > 0.8 && pos <= 1.0);
    }
}
