//! Row assembly: run every indicator over a series and align the outputs.

use serde::{Deserialize, Serialize};
use stocklab_core::error::ValidationError;
use stocklab_core::traits::{BarIndicator, Indicator};
use stocklab_core::types::{IndicatorRow, Series};

use crate::momentum::{Macd, Rsi, Stochastic};
use crate::moving_average::{Ema, Sma};
use crate::volatility::{Atr, BollingerBands};
use crate::volume::VolumeStats;

/// Windows and spans for the indicator set.
///
/// Every window is an explicit parameter; the defaults reproduce the
/// canonical setup the field names are taken from (`sma_20` defaults to 20
/// and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub sma_5: usize,
    pub sma_10: usize,
    pub sma_20: usize,
    pub sma_50: usize,
    pub sma_200: usize,
    /// Fast EMA span (MACD input)
    pub ema_fast: usize,
    /// Slow EMA span (MACD input)
    pub ema_slow: usize,
    /// EMA span of the MACD signal line
    pub macd_signal: usize,
    pub rsi: usize,
    pub bollinger: usize,
    /// Band width in sample standard deviations
    pub bollinger_k: f64,
    pub stochastic_k: usize,
    pub stochastic_d: usize,
    pub atr: usize,
    pub volume: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_5: 5,
            sma_10: 10,
            sma_20: 20,
            sma_50: 50,
            sma_200: 200,
            ema_fast: 12,
            ema_slow: 26,
            macd_signal: 9,
            rsi: 14,
            bollinger: 20,
            bollinger_k: 2.0,
            stochastic_k: 14,
            stochastic_d: 3,
            atr: 14,
            volume: 20,
        }
    }
}

impl IndicatorConfig {
    /// Check the parameters an indicator constructor would otherwise panic on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let windows = [
            ("sma_5", self.sma_5),
            ("sma_10", self.sma_10),
            ("sma_20", self.sma_20),
            ("sma_50", self.sma_50),
            ("sma_200", self.sma_200),
            ("ema_fast", self.ema_fast),
            ("ema_slow", self.ema_slow),
            ("macd_signal", self.macd_signal),
            ("rsi", self.rsi),
            ("stochastic_k", self.stochastic_k),
            ("stochastic_d", self.stochastic_d),
            ("atr", self.atr),
            ("volume", self.volume),
        ];
        for (name, window) in windows {
            if window == 0 {
                return Err(ValidationError::InvalidParameter(format!(
                    "{} window must be greater than 0",
                    name
                )));
            }
        }
        if self.bollinger < 2 {
            return Err(ValidationError::InvalidParameter(
                "bollinger window must be greater than 1".into(),
            ));
        }
        if !(self.bollinger_k > 0.0) {
            return Err(ValidationError::InvalidParameter(
                "bollinger_k must be positive".into(),
            ));
        }
        if self.ema_fast >= self.ema_slow {
            return Err(ValidationError::InvalidParameter(
                "ema_fast span must be less than ema_slow span".into(),
            ));
        }
        Ok(())
    }
}

/// The indicator pipeline.
///
/// A pure function of its input series: one output row per input bar, no
/// I/O, no shared state. Independent instances may run concurrently over
/// different series without coordination.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: IndicatorConfig,
    sma_5: Sma,
    sma_10: Sma,
    sma_20: Sma,
    sma_50: Sma,
    sma_200: Sma,
    ema_fast: Ema,
    ema_slow: Ema,
    rsi: Rsi,
    macd: Macd,
    bollinger: BollingerBands,
    stochastic: Stochastic,
    atr: Atr,
    volume: VolumeStats,
}

impl Pipeline {
    /// Build a pipeline from a validated configuration.
    pub fn new(config: IndicatorConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            sma_5: Sma::new(config.sma_5),
            sma_10: Sma::new(config.sma_10),
            sma_20: Sma::new(config.sma_20),
            sma_50: Sma::new(config.sma_50),
            sma_200: Sma::new(config.sma_200),
            ema_fast: Ema::new(config.ema_fast),
            ema_slow: Ema::new(config.ema_slow),
            rsi: Rsi::new(config.rsi),
            macd: Macd::new(config.ema_fast, config.ema_slow, config.macd_signal),
            bollinger: BollingerBands::new(config.bollinger, config.bollinger_k),
            stochastic: Stochastic::new(config.stochastic_k, config.stochastic_d),
            atr: Atr::new(config.atr),
            volume: VolumeStats::new(config.volume),
            config,
        })
    }

    /// Pipeline with the canonical windows.
    pub fn with_defaults() -> Self {
        Self::new(IndicatorConfig::default()).expect("default config is valid")
    }

    /// The active configuration.
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Compute every indicator and return one row per input bar.
    ///
    /// The series carries the ordering invariants by construction, so this
    /// cannot fail; truncation (keep-last-N) is a caller concern and never
    /// happens here.
    pub fn run(&self, series: &Series) -> Vec<IndicatorRow> {
        let bars = series.bars();
        let closes = series.closes();

        let sma_5 = self.sma_5.compute(&closes);
        let sma_10 = self.sma_10.compute(&closes);
        let sma_20 = self.sma_20.compute(&closes);
        let sma_50 = self.sma_50.compute(&closes);
        let sma_200 = self.sma_200.compute(&closes);
        let ema_fast = self.ema_fast.compute(&closes);
        let ema_slow = self.ema_slow.compute(&closes);
        let rsi = self.rsi.compute(&closes);
        let macd = self.macd.compute(&closes);
        let bollinger = self.bollinger.compute(&closes);
        let stochastic = self.stochastic.compute(bars);
        let atr = self.atr.compute(bars);
        let volume = self.volume.compute(bars);

        bars.iter()
            .enumerate()
            .map(|(i, bar)| {
                let mut row = IndicatorRow::bare(*bar);
                row.sma_5 = sma_5[i];
                row.sma_10 = sma_10[i];
                row.sma_20 = sma_20[i];
                row.sma_50 = sma_50[i];
                row.sma_200 = sma_200[i];
                row.ema_12 = Some(ema_fast[i]);
                row.ema_26 = Some(ema_slow[i]);
                row.rsi = rsi[i];
                row.macd = Some(macd[i].macd);
                row.macd_signal = Some(macd[i].signal);
                row.macd_histogram = Some(macd[i].histogram);
                row.bb_upper = bollinger[i].map(|b| b.upper);
                row.bb_middle = bollinger[i].map(|b| b.middle);
                row.bb_lower = bollinger[i].map(|b| b.lower);
                row.stoch_k = stochastic[i].k;
                row.stoch_d = stochastic[i].d;
                row.atr = atr[i];
                row.volume_sma = volume[i].sma;
                row.volume_ratio = volume[i].ratio;
                row
            })
            .collect()
    }
}
