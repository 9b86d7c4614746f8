//! OHLCV bar and validated daily series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One trading day for one instrument.
///
/// Prices are expected positive with `high >= low`; this is not enforced
/// upstream and the pipeline does not reject bars that violate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Calendar day, timezone-naive
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: u64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// The bar's range (high - low).
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// True range relative to the previous close.
    ///
    /// Without a previous close this collapses to the plain range.
    pub fn true_range(&self, prev_close: Option<f64>) -> f64 {
        match prev_close {
            Some(pc) => {
                let hl = self.high - self.low;
                let hc = (self.high - pc).abs();
                let lc = (self.low - pc).abs();
                hl.max(hc).max(lc)
            }
            None => self.range(),
        }
    }
}

/// An ordered daily series for one instrument.
///
/// Construction validates the ordering invariants (non-empty, strictly
/// ascending dates); a `Series` that exists is well-formed. The series is
/// immutable: the pipeline reads it and produces a new structure.
///
/// The series is gap-agnostic. Market holidays leave calendar gaps; all
/// windowing operates on sequence position, not calendar distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    symbol: String,
    bars: Vec<Bar>,
}

impl Series {
    /// Build a series, enforcing the ordering invariants.
    pub fn new(symbol: impl Into<String>, bars: Vec<Bar>) -> Result<Self, ValidationError> {
        if bars.is_empty() {
            return Err(ValidationError::EmptySeries);
        }
        for pair in bars.windows(2) {
            if pair[1].date == pair[0].date {
                return Err(ValidationError::DuplicateDate { date: pair[1].date });
            }
            if pair[1].date < pair[0].date {
                return Err(ValidationError::NonAscendingDates {
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    /// The instrument symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of bars. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// A constructed series is never empty; provided for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// The most recent bar.
    pub fn last(&self) -> &Bar {
        // Invariant: non-empty by construction.
        self.bars.last().expect("series is non-empty")
    }

    /// Extract close prices.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract high prices.
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Extract low prices.
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Extract volumes.
    pub fn volumes(&self) -> Vec<u64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Iterate over the bars, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(ymd: (i32, u32, u32)) -> NaiveDate {
        NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap()
    }

    #[test]
    fn test_true_range() {
        let bar = Bar::new(d((2024, 1, 2)), 100.0, 110.0, 95.0, 105.0, 1_000_000);

        // Without previous close
        assert!((bar.true_range(None) - 15.0).abs() < 1e-10);

        // Gap down: previous close below the low
        assert!((bar.true_range(Some(90.0)) - 20.0).abs() < 1e-10);

        // Gap up: previous close above the high
        assert!((bar.true_range(Some(120.0)) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_series_rejects_empty() {
        assert_eq!(
            Series::new("RELIANCE.NS", vec![]).unwrap_err(),
            ValidationError::EmptySeries
        );
    }

    #[test]
    fn test_series_rejects_duplicate_dates() {
        let bars = vec![
            Bar::new(d((2024, 1, 2)), 100.0, 101.0, 99.0, 100.5, 1000),
            Bar::new(d((2024, 1, 2)), 100.5, 102.0, 100.0, 101.5, 1000),
        ];
        assert!(matches!(
            Series::new("TCS.NS", bars),
            Err(ValidationError::DuplicateDate { .. })
        ));
    }

    #[test]
    fn test_series_rejects_descending_dates() {
        let bars = vec![
            Bar::new(d((2024, 1, 3)), 100.0, 101.0, 99.0, 100.5, 1000),
            Bar::new(d((2024, 1, 2)), 100.5, 102.0, 100.0, 101.5, 1000),
        ];
        assert!(matches!(
            Series::new("TCS.NS", bars),
            Err(ValidationError::NonAscendingDates { .. })
        ));
    }

    #[test]
    fn test_series_allows_calendar_gaps() {
        // Friday to Monday, weekend skipped
        let bars = vec![
            Bar::new(d((2024, 1, 5)), 100.0, 101.0, 99.0, 100.5, 1000),
            Bar::new(d((2024, 1, 8)), 100.5, 102.0, 100.0, 101.5, 2000),
        ];
        let series = Series::new("INFY.NS", bars).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.5, 101.5]);
        assert_eq!(series.volumes(), vec![1000, 2000]);
    }
}
