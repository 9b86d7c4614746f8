//! Signal types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
            Action::Hold => "HOLD",
        };
        write!(f, "{}", s)
    }
}

/// Qualitative risk bucket for a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        write!(f, "{}", s)
    }
}

/// A scored trading signal for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSignal {
    pub symbol: String,
    pub action: Action,
    /// Confidence in percent, clamped to the configured band.
    pub confidence: f64,
    pub target_price: f64,
    pub stop_loss: f64,
    pub risk: RiskLevel,
    /// Human-readable factor notes, one per scored component.
    pub factors: Vec<String>,
    pub reasoning: String,
    /// Date of the snapshot the signal was derived from.
    pub as_of: NaiveDate,
}
