//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, DataSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables use the `STOCKLAB` prefix with `__` separators,
/// e.g. `STOCKLAB__LOGGING__LEVEL=debug`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("STOCKLAB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
