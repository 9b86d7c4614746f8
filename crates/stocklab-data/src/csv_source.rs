//! CSV bar source.

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use stocklab_core::error::DataError;
use stocklab_core::traits::DataSource;
use stocklab_core::types::Bar;
use tracing::debug;

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Historical daily bars from a CSV file.
pub struct CsvBarSource {
    path: PathBuf,
}

impl CsvBarSource {
    /// Create a new CSV bar source.
    pub fn new(path: &Path) -> Result<Self, DataError> {
        if !path.exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Parse the date formats commonly seen in exported price files.
    fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
        let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

        for format in formats {
            if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
                return Ok(d);
            }
        }

        // Datetime exports (e.g. "2024-01-15 00:00:00"): keep the date part.
        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
                return Ok(dt.date());
            }
        }

        Err(DataError::ParseError(format!(
            "Could not parse date: {}",
            date_str
        )))
    }
}

impl DataSource for CsvBarSource {
    fn load_bars(&self, symbol: &str) -> Result<Vec<Bar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let date = Self::parse_date(&record.date)?;

            bars.push(Bar::new(
                date,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume.max(0.0).round() as u64,
            ));
        }

        if bars.is_empty() {
            return Err(DataError::NoDataAvailable);
        }

        // Oldest first; duplicate dates are caught by series validation.
        bars.sort_by_key(|b| b.date);
        debug!(symbol, bars = bars.len(), path = %self.path.display(), "loaded bars");

        Ok(bars)
    }
}
