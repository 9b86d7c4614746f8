//! Rule-based trading signals over indicator snapshots.
//!
//! The engine scores a snapshot on a handful of technical factors and maps
//! the composite score to BUY/SELL/HOLD with a confidence, target price and
//! stop loss. All thresholds are explicit configuration; the engine holds
//! no mutable state.

mod cache;
mod engine;
mod signal;

pub use cache::SignalCache;
pub use engine::{SignalConfig, SignalEngine, ThresholdPolicy};
pub use signal::{Action, RiskLevel, TradeSignal};
