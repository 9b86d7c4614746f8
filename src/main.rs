//! Stocklab CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use stocklab_config::AppConfig;
use stocklab_monitor::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Missing config file falls back to defaults; validate-config reports
    // problems in an existing one.
    let config = if cli.config.exists() {
        stocklab_config::load_config(&cli.config)?
    } else {
        AppConfig::default()
    };

    let level = match cli.log_level {
        Some(cli::LogLevel::Trace) => "trace",
        Some(cli::LogLevel::Debug) => "debug",
        Some(cli::LogLevel::Info) => "info",
        Some(cli::LogLevel::Warn) => "warn",
        Some(cli::LogLevel::Error) => "error",
        None => config.logging.level.as_str(),
    };
    let json = cli.json_logs || config.logging.format == "json";
    let _guard = setup_logging(level, json, config.logging.file.as_deref());

    match cli.command {
        Commands::Enrich(args) => cli::commands::enrich::run(args, &config),
        Commands::Snapshot(args) => cli::commands::snapshot::run(args, &config),
        Commands::Signal(args) => cli::commands::signal::run(args, &config),
        Commands::Batch(args) => cli::commands::batch::run(args, &config),
        Commands::Symbols(args) => cli::commands::symbols::run(args),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, &config),
    }
}
