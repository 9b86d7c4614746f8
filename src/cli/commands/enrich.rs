//! Enrich command implementation.

use anyhow::{Context, Result};
use std::str::FromStr;
use stocklab_config::AppConfig;
use stocklab_data::ExportFormat;
use stocklab_indicators::Pipeline;
use tracing::info;

use crate::cli::EnrichArgs;

pub fn run(args: EnrichArgs, config: &AppConfig) -> Result<()> {
    let series = stocklab_data::load_csv(&args.data, &args.symbol)
        .with_context(|| format!("Failed to load {}", args.data.display()))?;
    info!(symbol = %args.symbol, bars = series.len(), "loaded series");

    let pipeline = Pipeline::new(config.pipeline.clone())?;
    let rows = pipeline.run(&series);

    let keep_last = if args.full {
        None
    } else {
        args.keep_last.or(config.data.keep_last)
    };

    match &args.output {
        Some(path) => {
            let format = match &args.format {
                Some(f) => ExportFormat::from_str(f).map_err(anyhow::Error::msg)?,
                None => ExportFormat::from_str(&config.data.format).map_err(anyhow::Error::msg)?,
            };
            match format {
                ExportFormat::Csv => stocklab_data::write_csv(path, &rows, keep_last)?,
                ExportFormat::Json => stocklab_data::write_json(path, &rows, keep_last)?,
            }
            println!("Wrote {} to {}", args.symbol, path.display());
        }
        None => {
            let last = rows.last().expect("series is non-empty");
            println!("{}: {} rows enriched", args.symbol, rows.len());
            println!("  last bar:   {} close {:.2}", last.bar.date, last.bar.close);
            if let Some(sma_20) = last.sma_20 {
                println!("  sma_20:     {:.2}", sma_20);
            }
            if let Some(rsi) = last.rsi {
                println!("  rsi:        {:.1}", rsi);
            }
            if let Some(macd) = last.macd {
                println!("  macd:       {:.4}", macd);
            }
        }
    }

    Ok(())
}
