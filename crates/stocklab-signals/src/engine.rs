//! Composite scoring engine.

use serde::{Deserialize, Serialize};
use stocklab_indicators::IndicatorSnapshot;
use tracing::debug;

use crate::signal::{Action, RiskLevel, TradeSignal};

/// Thresholds for the composite scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// RSI above this counts against the score.
    pub rsi_overbought: f64,
    /// RSI below this counts for the score.
    pub rsi_oversold: f64,
    /// Composite score above this is a BUY.
    pub buy_threshold: f64,
    /// Composite score below this is a SELL.
    pub sell_threshold: f64,
    /// Score magnitude above this downgrades risk to LOW.
    pub strong_threshold: f64,
    /// Daily volume above this reads as heavy institutional interest.
    pub heavy_volume: u64,
    /// Daily volume above this reads as moderate interest.
    pub moderate_volume: u64,
    /// Absolute day change (percent) that counts as momentum.
    pub momentum_pct: f64,
    /// Confidence floor in percent.
    pub min_confidence: f64,
    /// Confidence ceiling in percent.
    pub max_confidence: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            buy_threshold: 0.3,
            sell_threshold: -0.3,
            strong_threshold: 0.6,
            heavy_volume: 1_000_000,
            moderate_volume: 500_000,
            momentum_pct: 2.0,
            min_confidence: 50.0,
            max_confidence: 95.0,
        }
    }
}

/// Maps a model-predicted price to an action.
///
/// The predicted change must clear `min_change_pct` and the model's
/// confidence must clear `min_confidence` before anything other than HOLD
/// comes out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdPolicy {
    pub min_change_pct: f64,
    pub min_confidence: f64,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            min_change_pct: 2.0,
            min_confidence: 75.0,
        }
    }
}

impl ThresholdPolicy {
    /// Map a predicted price and confidence to an action.
    pub fn action(&self, current_price: f64, predicted_price: f64, confidence: f64) -> Action {
        if current_price <= 0.0 {
            return Action::Hold;
        }
        let change_pct = (predicted_price - current_price) / current_price * 100.0;

        if change_pct > self.min_change_pct && confidence > self.min_confidence {
            Action::Buy
        } else if change_pct < -self.min_change_pct && confidence > self.min_confidence {
            Action::Sell
        } else {
            Action::Hold
        }
    }
}

/// The signal engine.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    config: SignalConfig,
}

impl SignalEngine {
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Score a snapshot and produce a signal.
    ///
    /// Indicators that are still absent (young series) simply contribute
    /// nothing; the factor list says so rather than inventing a neutral
    /// value.
    pub fn evaluate(&self, snapshot: &IndicatorSnapshot) -> TradeSignal {
        let cfg = &self.config;
        let mut score: f64 = 0.0;
        let mut factors = Vec::new();

        // RSI zone
        match snapshot.rsi {
            Some(rsi) if rsi > cfg.rsi_overbought => {
                score -= 0.3;
                factors.push("RSI indicates overbought conditions".to_string());
            }
            Some(rsi) if rsi < cfg.rsi_oversold => {
                score += 0.3;
                factors.push("RSI indicates oversold conditions - potential bounce".to_string());
            }
            Some(_) => factors.push("RSI in neutral territory".to_string()),
            None => factors.push("RSI unavailable - insufficient history".to_string()),
        }

        // Moving-average trend
        match (snapshot.sma_20, snapshot.sma_50) {
            (Some(sma_20), Some(sma_50)) => {
                let short_up = snapshot.close > sma_20;
                let long_up = sma_20 > sma_50;
                if short_up && long_up {
                    score += 0.4;
                    factors.push(
                        "Price above both short and long-term moving averages".to_string(),
                    );
                } else if !short_up && !long_up {
                    score -= 0.4;
                    factors.push("Price below moving averages - bearish trend".to_string());
                } else {
                    factors.push("Moving averages give mixed trend".to_string());
                }
            }
            _ => factors.push("Trend unavailable - insufficient history".to_string()),
        }

        // Position within the 52-week range
        let position = snapshot.range_position();
        if position > 0.8 {
            score -= 0.2;
            factors.push("Price near 52-week high - limited upside".to_string());
        } else if position < 0.2 {
            score += 0.2;
            factors.push("Price near 52-week low - potential value opportunity".to_string());
        }

        // Volume interest
        let volume_score = if snapshot.volume > cfg.heavy_volume {
            0.7
        } else if snapshot.volume > cfg.moderate_volume {
            0.5
        } else {
            0.3
        };
        score += volume_score * 0.1;
        let interest = if volume_score > 0.6 {
            "strong"
        } else if volume_score > 0.4 {
            "moderate"
        } else {
            "weak"
        };
        factors.push(format!(
            "Volume analysis shows {} institutional interest",
            interest
        ));

        // Momentum from the day change
        if let Some(change_pct) = snapshot.day_change_percent {
            if change_pct > cfg.momentum_pct {
                score += 0.2;
                factors.push("Strong positive momentum detected".to_string());
            } else if change_pct < -cfg.momentum_pct {
                score -= 0.2;
                factors.push("Negative momentum - caution advised".to_string());
            }
        }

        debug!(symbol = %snapshot.symbol, score, "scored snapshot");
        self.decide(snapshot, score, factors)
    }

    fn decide(
        &self,
        snapshot: &IndicatorSnapshot,
        score: f64,
        factors: Vec<String>,
    ) -> TradeSignal {
        let cfg = &self.config;
        let price = snapshot.close;

        let (action, confidence, target_price, stop_loss, risk, reasoning) =
            if score > cfg.buy_threshold {
                (
                    Action::Buy,
                    70.0 + score * 50.0,
                    price * (1.05 + (score * 0.1).max(0.0)),
                    price * 0.95,
                    self.risk_for(score),
                    "Technical indicators suggest bullish momentum with favorable risk-reward \
                     ratio",
                )
            } else if score < cfg.sell_threshold {
                (
                    Action::Sell,
                    70.0 + score.abs() * 50.0,
                    price * (0.95 + score * 0.1),
                    price * 1.05,
                    self.risk_for(score),
                    "Technical analysis indicates bearish pressure with downside risk",
                )
            } else {
                (
                    Action::Hold,
                    60.0 + score.abs() * 20.0,
                    price * (1.02 + score * 0.05),
                    price * 0.98,
                    RiskLevel::Medium,
                    "Mixed signals suggest sideways movement - wait for clearer direction",
                )
            };

        let confidence = confidence.clamp(cfg.min_confidence, cfg.max_confidence).round();
        let target_price = target_price.max(price * 0.8);
        let stop_loss = match action {
            Action::Buy => stop_loss.min(price * 0.98),
            _ => stop_loss.max(price * 1.02),
        };

        TradeSignal {
            symbol: snapshot.symbol.clone(),
            action,
            confidence,
            target_price,
            stop_loss,
            risk,
            factors,
            reasoning: reasoning.to_string(),
            as_of: snapshot.date,
        }
    }

    fn risk_for(&self, score: f64) -> RiskLevel {
        if score.abs() > self.config.strong_threshold {
            RiskLevel::Low
        } else {
            RiskLevel::Medium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn snapshot() -> IndicatorSnapshot {
        IndicatorSnapshot {
            symbol: "TCS.NS".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
            close: 100.0,
            volume: 2_000_000,
            day_change: Some(0.5),
            day_change_percent: Some(0.5),
            high_52w: 140.0,
            low_52w: 80.0,
            sma_20: Some(98.0),
            sma_50: Some(95.0),
            rsi: Some(50.0),
            macd: Some(0.4),
            macd_signal: Some(0.3),
            bb_upper: Some(105.0),
            bb_middle: Some(98.0),
            bb_lower: Some(91.0),
            stoch_k: Some(60.0),
            stoch_d: Some(55.0),
            atr: Some(2.0),
            volume_ratio: Some(1.1),
        }
    }

    #[test]
    fn test_uptrend_with_oversold_rsi_is_buy() {
        let engine = SignalEngine::default();
        let mut snap = snapshot();
        snap.rsi = Some(25.0);

        // +0.3 (oversold) +0.4 (trend) +0.07 (volume) = 0.77
        let signal = engine.evaluate(&snap);
        assert_eq!(signal.action, Action::Buy);
        assert_eq!(signal.risk, RiskLevel::Low);
        assert!(signal.confidence >= 70.0 && signal.confidence <= 95.0);
        assert!(signal.target_price > snap.close);
        assert!(signal.stop_loss < snap.close);
    }

    #[test]
    fn test_downtrend_with_overbought_rsi_is_sell() {
        let engine = SignalEngine::default();
        let mut snap = snapshot();
        snap.rsi = Some(80.0);
        snap.sma_20 = Some(105.0); // price below short MA
        snap.sma_50 = Some(110.0); // short MA below long MA
        snap.day_change_percent = Some(-3.0);

        let signal = engine.evaluate(&snap);
        assert_eq!(signal.action, Action::Sell);
        assert!(signal.stop_loss > snap.close);
    }

    #[test]
    fn test_neutral_snapshot_is_hold() {
        let engine = SignalEngine::default();
        let mut snap = snapshot();
        snap.sma_20 = Some(101.0); // mixed trend: price below short MA,
        snap.sma_50 = Some(95.0); // but short MA above long MA

        let signal = engine.evaluate(&snap);
        assert_eq!(signal.action, Action::Hold);
        assert!(signal.confidence >= 50.0);
    }

    #[test]
    fn test_absent_indicators_contribute_nothing() {
        let engine = SignalEngine::default();
        let mut snap = snapshot();
        snap.rsi = None;
        snap.sma_20 = None;
        snap.sma_50 = None;

        let signal = engine.evaluate(&snap);
        assert_eq!(signal.action, Action::Hold);
        assert!(signal
            .factors
            .iter()
            .any(|f| f.contains("insufficient history")));
    }

    #[test]
    fn test_confidence_is_clamped() {
        let engine = SignalEngine::default();
        let mut snap = snapshot();
        snap.rsi = Some(20.0);
        snap.day_change_percent = Some(5.0);
        snap.low_52w = 95.0;
        snap.high_52w = 150.0; // near the low -> value opportunity

        let signal = engine.evaluate(&snap);
        assert!(signal.confidence <= 95.0);
        assert!(signal.confidence >= 50.0);
    }

    #[test]
    fn test_threshold_policy_boundaries() {
        let policy = ThresholdPolicy::default();

        assert_eq!(policy.action(100.0, 103.0, 80.0), Action::Buy);
        assert_eq!(policy.action(100.0, 96.0, 80.0), Action::Sell);
        // Move too small
        assert_eq!(policy.action(100.0, 101.0, 80.0), Action::Hold);
        // Confidence too low
        assert_eq!(policy.action(100.0, 103.0, 60.0), Action::Hold);
        // Degenerate price
        assert_eq!(policy.action(0.0, 103.0, 80.0), Action::Hold);
    }
}
