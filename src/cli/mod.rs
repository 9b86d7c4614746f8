//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stocklab")]
#[command(author, version, about = "Daily-bar indicator pipeline and signal toolkit")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the config file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute indicators for one CSV price file
    Enrich(EnrichArgs),
    /// Show the latest indicator values for one CSV price file
    Snapshot(SnapshotArgs),
    /// Evaluate a trading signal for one CSV price file
    Signal(SignalArgs),
    /// Enrich and score every catalog instrument found in a data directory
    Batch(BatchArgs),
    /// List the instrument catalog
    Symbols(SymbolsArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct EnrichArgs {
    /// Input CSV price file
    #[arg(short, long)]
    pub data: PathBuf,

    /// Instrument symbol, e.g. RELIANCE.NS
    #[arg(short, long)]
    pub symbol: String,

    /// Output file; prints a summary when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (csv, json); defaults to the config setting
    #[arg(short, long)]
    pub format: Option<String>,

    /// Keep only the most recent N rows in the output
    #[arg(long)]
    pub keep_last: Option<usize>,

    /// Export every row, ignoring keep-last settings
    #[arg(long)]
    pub full: bool,
}

#[derive(clap::Args)]
pub struct SnapshotArgs {
    /// Input CSV price file
    #[arg(short, long)]
    pub data: PathBuf,

    /// Instrument symbol
    #[arg(short, long)]
    pub symbol: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}

#[derive(clap::Args)]
pub struct SignalArgs {
    /// Input CSV price file
    #[arg(short, long)]
    pub data: PathBuf,

    /// Instrument symbol
    #[arg(short, long)]
    pub symbol: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}

#[derive(clap::Args)]
pub struct BatchArgs {
    /// Directory containing {symbol}.csv price files; defaults to the
    /// config data_dir
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Directory exports are written into; defaults to the config
    /// output_dir
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Output format (csv, json); defaults to the config setting
    #[arg(short, long)]
    pub format: Option<String>,

    /// Restrict the run to one exchange (NSE, BSE)
    #[arg(long)]
    pub exchange: Option<String>,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub save_report: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct SymbolsArgs {
    /// Filter by exchange (NSE, BSE)
    #[arg(long)]
    pub exchange: Option<String>,

    /// Filter by sector
    #[arg(long)]
    pub sector: Option<String>,
}
