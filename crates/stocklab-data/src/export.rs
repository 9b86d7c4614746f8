//! Flat-file export of enriched rows.
//!
//! Truncation (keep only the most recent N rows) is applied here, at the
//! edge; the pipeline itself always produces one row per input bar.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use stocklab_core::error::{PipelineError, PipelineResult};
use stocklab_core::types::IndicatorRow;
use tracing::info;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Invalid export format: {}", s)),
        }
    }
}

/// Flat record shape for CSV headers; `Option` fields serialize as empty
/// cells, keeping absent distinct from zero.
#[derive(Debug, Serialize)]
struct ExportRecord {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
    sma_5: Option<f64>,
    sma_10: Option<f64>,
    sma_20: Option<f64>,
    sma_50: Option<f64>,
    sma_200: Option<f64>,
    ema_12: Option<f64>,
    ema_26: Option<f64>,
    rsi: Option<f64>,
    macd: Option<f64>,
    macd_signal: Option<f64>,
    macd_histogram: Option<f64>,
    bb_upper: Option<f64>,
    bb_middle: Option<f64>,
    bb_lower: Option<f64>,
    stoch_k: Option<f64>,
    stoch_d: Option<f64>,
    atr: Option<f64>,
    volume_sma: Option<f64>,
    volume_ratio: Option<f64>,
}

impl From<&IndicatorRow> for ExportRecord {
    fn from(row: &IndicatorRow) -> Self {
        Self {
            date: row.bar.date.format("%Y-%m-%d").to_string(),
            open: row.bar.open,
            high: row.bar.high,
            low: row.bar.low,
            close: row.bar.close,
            volume: row.bar.volume,
            sma_5: row.sma_5,
            sma_10: row.sma_10,
            sma_20: row.sma_20,
            sma_50: row.sma_50,
            sma_200: row.sma_200,
            ema_12: row.ema_12,
            ema_26: row.ema_26,
            rsi: row.rsi,
            macd: row.macd,
            macd_signal: row.macd_signal,
            macd_histogram: row.macd_histogram,
            bb_upper: row.bb_upper,
            bb_middle: row.bb_middle,
            bb_lower: row.bb_lower,
            stoch_k: row.stoch_k,
            stoch_d: row.stoch_d,
            atr: row.atr,
            volume_sma: row.volume_sma,
            volume_ratio: row.volume_ratio,
        }
    }
}

/// Keep only the most recent `n` rows, when requested.
fn truncate(rows: &[IndicatorRow], keep_last: Option<usize>) -> &[IndicatorRow] {
    match keep_last {
        Some(n) => &rows[rows.len().saturating_sub(n)..],
        None => rows,
    }
}

/// Write rows to a CSV file.
pub fn write_csv(
    path: &Path,
    rows: &[IndicatorRow],
    keep_last: Option<usize>,
) -> PipelineResult<()> {
    let rows = truncate(rows, keep_last);
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| PipelineError::Serialization(e.to_string()))?;

    for row in rows {
        writer
            .serialize(ExportRecord::from(row))
            .map_err(|e| PipelineError::Serialization(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| PipelineError::Serialization(e.to_string()))?;

    info!(rows = rows.len(), path = %path.display(), "wrote csv export");
    Ok(())
}

/// Write rows to a JSON file.
pub fn write_json(
    path: &Path,
    rows: &[IndicatorRow],
    keep_last: Option<usize>,
) -> PipelineResult<()> {
    let rows = truncate(rows, keep_last);
    let records: Vec<ExportRecord> = rows.iter().map(ExportRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| PipelineError::Serialization(e.to_string()))?;
    std::fs::write(path, json)?;

    info!(rows = rows.len(), path = %path.display(), "wrote json export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stocklab_core::types::Bar;

    fn rows(n: usize) -> Vec<IndicatorRow> {
        (0..n)
            .map(|i| {
                let date = NaiveDate::from_num_days_from_ce_opt(738000 + i as i32).unwrap();
                let close = 100.0 + i as f64;
                IndicatorRow::bare(Bar::new(date, close, close + 1.0, close - 1.0, close, 1000))
            })
            .collect()
    }

    #[test]
    fn test_truncate_keeps_most_recent() {
        let all = rows(10);

        let kept = truncate(&all, Some(3));
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].bar.close, 107.0);
        assert_eq!(kept[2].bar.close, 109.0);

        assert_eq!(truncate(&all, None).len(), 10);
        assert_eq!(truncate(&all, Some(100)).len(), 10);
    }

    #[test]
    fn test_csv_round_trip_shape() {
        let all = rows(5);
        let path = std::env::temp_dir().join(format!(
            "stocklab-export-test-{}.csv",
            std::process::id()
        ));

        write_csv(&path, &all, Some(2)).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let lines: Vec<&str> = content.lines().collect();
        // Header plus the two most recent rows.
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("date,open,high,low,close,volume"));
        // Absent indicator fields serialize as empty cells, not zeros.
        assert!(lines[1].contains(",,"));
    }

    #[test]
    fn test_json_export() {
        let all = rows(3);
        let path = std::env::temp_dir().join(format!(
            "stocklab-export-test-{}.json",
            std::process::id()
        ));

        write_json(&path, &all, None).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
        assert!(parsed[0]["rsi"].is_null());
        assert_eq!(parsed[0]["close"], 100.0);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_str("JSON").unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_str("parquet").is_err());
    }
}
