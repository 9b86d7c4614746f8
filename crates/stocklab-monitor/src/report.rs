//! Batch run reporting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use stocklab_core::types::Instrument;

/// Outcome tally for a batch run over many instruments.
///
/// Failures are recorded and the run continues; the report keeps the
/// per-symbol error messages plus exchange/sector distributions of the
/// successfully processed instruments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// (symbol, error message) for every failed instrument.
    pub failures: Vec<(String, String)>,
    /// Successful instruments per exchange.
    pub exchanges: BTreeMap<String, usize>,
    /// Successful instruments per sector.
    pub sectors: BTreeMap<String, usize>,
    /// Successful instruments per market-cap band.
    pub market_caps: BTreeMap<String, usize>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully processed instrument.
    pub fn record_ok(&mut self, instrument: &Instrument) {
        self.processed += 1;
        self.succeeded += 1;
        *self
            .exchanges
            .entry(instrument.exchange.to_string())
            .or_insert(0) += 1;
        *self.sectors.entry(instrument.sector.clone()).or_insert(0) += 1;
        *self
            .market_caps
            .entry(instrument.market_cap.to_string())
            .or_insert(0) += 1;
    }

    /// Record a failed instrument; the run continues.
    pub fn record_err(&mut self, symbol: &str, error: impl ToString) {
        self.processed += 1;
        self.failed += 1;
        self.failures.push((symbol.to_string(), error.to_string()));
    }

    /// Human-readable summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Processed {} instruments", self.processed);
        let _ = writeln!(out, "  succeeded: {}", self.succeeded);
        let _ = writeln!(out, "  failed:    {}", self.failed);

        if !self.exchanges.is_empty() {
            let _ = writeln!(out, "  exchanges:");
            for (exchange, count) in &self.exchanges {
                let _ = writeln!(out, "    {}: {}", exchange, count);
            }
        }
        if !self.sectors.is_empty() {
            let _ = writeln!(out, "  sectors:");
            for (sector, count) in &self.sectors {
                let _ = writeln!(out, "    {}: {}", sector, count);
            }
        }
        for (symbol, error) in &self.failures {
            let _ = writeln!(out, "  error {}: {}", symbol, error);
        }

        out
    }

    /// Serialize the report to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
