//! Bar augmented with derived indicator fields.

use serde::{Deserialize, Serialize};

use super::Bar;

/// One bar plus its derived fields, index-aligned with the input series.
///
/// A field is `None` until enough preceding bars exist to fill its window
/// (or when the computation degenerates, e.g. a zero high/low range for
/// %K). Absent is never zero; callers must not collapse the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    /// The underlying bar.
    #[serde(flatten)]
    pub bar: Bar,

    pub sma_5: Option<f64>,
    pub sma_10: Option<f64>,
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,

    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,

    pub rsi: Option<f64>,

    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,

    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,

    pub stoch_k: Option<f64>,
    pub stoch_d: Option<f64>,

    pub atr: Option<f64>,

    pub volume_sma: Option<f64>,
    pub volume_ratio: Option<f64>,
}

impl IndicatorRow {
    /// A row with every derived field absent.
    pub fn bare(bar: Bar) -> Self {
        Self {
            bar,
            sma_5: None,
            sma_10: None,
            sma_20: None,
            sma_50: None,
            sma_200: None,
            ema_12: None,
            ema_26: None,
            rsi: None,
            macd: None,
            macd_signal: None,
            macd_histogram: None,
            bb_upper: None,
            bb_middle: None,
            bb_lower: None,
            stoch_k: None,
            stoch_d: None,
            atr: None,
            volume_sma: None,
            volume_ratio: None,
        }
    }
}
