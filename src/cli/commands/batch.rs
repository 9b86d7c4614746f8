//! Batch command implementation.
//!
//! Walks the instrument catalog, enriches every symbol with a price file in
//! the data directory, exports the rows and evaluates a signal. Failures
//! are tallied and the run continues.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use stocklab_config::AppConfig;
use stocklab_core::types::{Exchange, Instrument};
use stocklab_data::{Catalog, ExportFormat};
use stocklab_indicators::{IndicatorSnapshot, Pipeline};
use stocklab_signals::{SignalCache, SignalEngine, TradeSignal};
use tracing::{info, warn};

use crate::cli::BatchArgs;

pub fn run(args: BatchArgs, config: &AppConfig) -> Result<()> {
    let data_dir = args.data.unwrap_or_else(|| config.data.data_dir.clone());
    let out_dir = args.out_dir.unwrap_or_else(|| config.data.output_dir.clone());
    let format = match &args.format {
        Some(f) => ExportFormat::from_str(f).map_err(anyhow::Error::msg)?,
        None => ExportFormat::from_str(&config.data.format).map_err(anyhow::Error::msg)?,
    };
    let exchange = args
        .exchange
        .as_deref()
        .map(Exchange::from_str)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    if !data_dir.is_dir() {
        anyhow::bail!(
            "Data directory '{}' does not exist. Provide a directory of {{symbol}}.csv files \
             (e.g. --data ./data)",
            data_dir.display()
        );
    }
    std::fs::create_dir_all(&out_dir)?;

    let catalog = Catalog::builtin();
    let instruments: Vec<&Instrument> = match exchange {
        Some(exchange) => catalog.by_exchange(exchange).collect(),
        None => catalog.instruments().iter().collect(),
    };

    let pipeline = Pipeline::new(config.pipeline.clone())?;
    let engine = SignalEngine::new(config.signals.clone());
    let mut cache = SignalCache::default();
    let mut report = stocklab_monitor::BatchReport::new();

    let total = instruments.len();
    for (i, &instrument) in instruments.iter().enumerate() {
        match process_one(
            instrument,
            &data_dir,
            &out_dir,
            format,
            config,
            &pipeline,
            &engine,
            &mut cache,
        ) {
            Ok(signal) => {
                report.record_ok(instrument);
                info!(
                    "[{}/{}] {} -> {} (confidence {:.0}%)",
                    i + 1,
                    total,
                    instrument.symbol,
                    signal.action,
                    signal.confidence
                );
            }
            Err(e) => {
                report.record_err(&instrument.symbol, &e);
                warn!("[{}/{}] {} failed: {}", i + 1, total, instrument.symbol, e);
            }
        }
    }

    println!("{}", report.summary());

    if let Some(path) = &args.save_report {
        std::fs::write(path, report.to_json()?)?;
        info!("Report saved to {}", path.display());
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn process_one(
    instrument: &Instrument,
    data_dir: &Path,
    out_dir: &Path,
    format: ExportFormat,
    config: &AppConfig,
    pipeline: &Pipeline,
    engine: &SignalEngine,
    cache: &mut SignalCache,
) -> Result<TradeSignal> {
    let symbol = &instrument.symbol;
    let path = find_price_file(data_dir, symbol)
        .ok_or_else(|| anyhow::anyhow!("no price file in {}", data_dir.display()))?;

    let series = stocklab_data::load_csv(&path, symbol)?;
    let rows = pipeline.run(&series);

    let out_path = out_dir.join(format!(
        "{}_indicators.{}",
        symbol.replace('.', "_"),
        format
    ));
    match format {
        ExportFormat::Csv => stocklab_data::write_csv(&out_path, &rows, config.data.keep_last)?,
        ExportFormat::Json => stocklab_data::write_json(&out_path, &rows, config.data.keep_last)?,
    }

    if let Some(cached) = cache.get(symbol) {
        return Ok(cached.clone());
    }
    let snapshot = IndicatorSnapshot::from_rows(symbol, &rows).expect("series is non-empty");
    let signal = engine.evaluate(&snapshot);
    cache.put(signal.clone());
    Ok(signal)
}

/// Look for a price file under the names exports commonly use.
fn find_price_file(dir: &Path, symbol: &str) -> Option<PathBuf> {
    let lower = symbol.to_lowercase();
    let flat = symbol.replace('.', "_");
    let candidates = [
        dir.join(format!("{}.csv", symbol)),
        dir.join(format!("{}.csv", lower)),
        dir.join(format!("{}.csv", flat)),
        dir.join(format!("{}_daily.csv", symbol)),
        dir.join(format!("{}_daily.csv", lower)),
    ];
    candidates.into_iter().find(|p| p.exists())
}
