//! Signal command implementation.

use anyhow::{Context, Result};
use stocklab_config::AppConfig;
use stocklab_indicators::{IndicatorSnapshot, Pipeline};
use stocklab_signals::{SignalEngine, TradeSignal};

use crate::cli::SignalArgs;

pub fn run(args: SignalArgs, config: &AppConfig) -> Result<()> {
    let series = stocklab_data::load_csv(&args.data, &args.symbol)
        .with_context(|| format!("Failed to load {}", args.data.display()))?;

    let pipeline = Pipeline::new(config.pipeline.clone())?;
    let rows = pipeline.run(&series);
    let snapshot =
        IndicatorSnapshot::from_rows(&args.symbol, &rows).expect("series is non-empty");

    let engine = SignalEngine::new(config.signals.clone());
    let signal = engine.evaluate(&snapshot);

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&signal)?),
        _ => print_text(&signal),
    }

    Ok(())
}

fn print_text(signal: &TradeSignal) {
    println!(
        "{}: {} (confidence {:.0}%, risk {})",
        signal.symbol, signal.action, signal.confidence, signal.risk
    );
    println!("  as of:        {}", signal.as_of);
    println!("  target price: {:.2}", signal.target_price);
    println!("  stop loss:    {:.2}", signal.stop_loss);
    println!("  {}", signal.reasoning);
    for factor in &signal.factors {
        println!("  - {}", factor);
    }
}
