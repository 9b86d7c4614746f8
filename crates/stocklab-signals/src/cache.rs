//! Signal caching.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::signal::TradeSignal;

/// In-memory TTL cache of evaluated signals, keyed by symbol.
///
/// Re-evaluating a snapshot is cheap, but batch runs touch the same symbol
/// from several commands; entries expire after the configured TTL.
pub struct SignalCache {
    ttl: Duration,
    entries: HashMap<String, (TradeSignal, Instant)>,
}

impl SignalCache {
    /// Default TTL used by the CLI (five minutes).
    pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

    /// Create a cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Get a cached signal if it has not expired.
    pub fn get(&self, symbol: &str) -> Option<&TradeSignal> {
        self.entries.get(symbol).and_then(|(signal, inserted)| {
            if inserted.elapsed() < self.ttl {
                Some(signal)
            } else {
                None
            }
        })
    }

    /// Store a signal.
    pub fn put(&mut self, signal: TradeSignal) {
        self.entries
            .insert(signal.symbol.clone(), (signal, Instant::now()));
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for SignalCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{Action, RiskLevel};
    use chrono::NaiveDate;

    fn signal(symbol: &str) -> TradeSignal {
        TradeSignal {
            symbol: symbol.to_string(),
            action: Action::Hold,
            confidence: 60.0,
            target_price: 102.0,
            stop_loss: 98.0,
            risk: RiskLevel::Medium,
            factors: vec![],
            reasoning: String::new(),
            as_of: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
        }
    }

    #[test]
    fn test_put_get() {
        let mut cache = SignalCache::default();
        cache.put(signal("TCS.NS"));

        assert_eq!(cache.get("TCS.NS").unwrap().symbol, "TCS.NS");
        assert!(cache.get("INFY.NS").is_none());
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let mut cache = SignalCache::new(Duration::ZERO);
        cache.put(signal("TCS.NS"));

        assert!(cache.get("TCS.NS").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cache = SignalCache::default();
        cache.put(signal("TCS.NS"));
        cache.clear();

        assert!(cache.is_empty());
    }
}
