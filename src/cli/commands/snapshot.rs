//! Snapshot command implementation.

use anyhow::{Context, Result};
use stocklab_config::AppConfig;
use stocklab_indicators::{IndicatorSnapshot, Pipeline};

use crate::cli::SnapshotArgs;

pub fn run(args: SnapshotArgs, config: &AppConfig) -> Result<()> {
    let series = stocklab_data::load_csv(&args.data, &args.symbol)
        .with_context(|| format!("Failed to load {}", args.data.display()))?;

    let pipeline = Pipeline::new(config.pipeline.clone())?;
    let rows = pipeline.run(&series);
    let snapshot =
        IndicatorSnapshot::from_rows(&args.symbol, &rows).expect("series is non-empty");

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        _ => print_text(&snapshot),
    }

    Ok(())
}

fn print_text(snapshot: &IndicatorSnapshot) {
    println!("{} as of {}", snapshot.symbol, snapshot.date);
    println!("  close:        {:.2}", snapshot.close);
    match (snapshot.day_change, snapshot.day_change_percent) {
        (Some(change), Some(pct)) => {
            println!("  day change:   {:+.2} ({:+.2}%)", change, pct)
        }
        _ => println!("  day change:   n/a"),
    }
    println!(
        "  52w range:    {:.2} - {:.2}",
        snapshot.low_52w, snapshot.high_52w
    );
    println!("  volume:       {}", snapshot.volume);

    print_field("sma_20", snapshot.sma_20);
    print_field("sma_50", snapshot.sma_50);
    print_field("rsi", snapshot.rsi);
    print_field("macd", snapshot.macd);
    print_field("macd_signal", snapshot.macd_signal);
    print_field("bb_upper", snapshot.bb_upper);
    print_field("bb_middle", snapshot.bb_middle);
    print_field("bb_lower", snapshot.bb_lower);
    print_field("stoch_k", snapshot.stoch_k);
    print_field("stoch_d", snapshot.stoch_d);
    print_field("atr", snapshot.atr);
    print_field("volume_ratio", snapshot.volume_ratio);
}

fn print_field(name: &str, value: Option<f64>) {
    match value {
        Some(v) => println!("  {:<12} {:.4}", format!("{}:", name), v),
        None => println!("  {:<12} n/a (insufficient history)", format!("{}:", name)),
    }
}
