//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use stocklab_config::AppConfig;

pub fn run(config_path: &Path, config: &AppConfig) -> Result<()> {
    if config_path.exists() {
        println!("Validating configuration: {}", config_path.display());
    } else {
        println!(
            "Configuration file {} not found; showing defaults",
            config_path.display()
        );
    }

    config.pipeline.validate()?;

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Data directory: {}", config.data.data_dir.display());
    println!("Output directory: {}", config.data.output_dir.display());
    println!();
    println!("Effective configuration:");
    println!("{}", toml::to_string_pretty(config)?);

    Ok(())
}
