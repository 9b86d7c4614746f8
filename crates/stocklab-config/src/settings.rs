//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stocklab_indicators::IndicatorConfig;
use stocklab_signals::{SignalConfig, ThresholdPolicy};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub pipeline: IndicatorConfig,
    #[serde(default)]
    pub signals: SignalConfig,
    #[serde(default)]
    pub prediction: ThresholdPolicy,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stocklab".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Data directories and export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory scanned for {symbol}.csv price files.
    pub data_dir: PathBuf,
    /// Directory batch exports are written into.
    pub output_dir: PathBuf,
    /// Keep only the most recent N rows on export; None keeps everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_last: Option<usize>,
    /// Default export format ("csv" or "json").
    pub format: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            keep_last: Some(252),
            format: "csv".to_string(),
        }
    }
}
