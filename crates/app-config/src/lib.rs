// In crates/app-config/src/lib.rs

use std::path::Path;

use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, IoSettings, Settings};

/// Loads the application settings from the `config` directory.
///
/// See [`load_settings_from`] for the layering.
pub fn load_settings() -> Result<Settings> {
    load_settings_from("config")
}

/// Loads and validates settings from `config_dir`.
///
/// This function orchestrates the layered configuration loading:
/// 1. Built-in defaults for every value.
/// 2. `base.toml`, if present.
/// 3. The environment-specific file (e.g. `development.toml`), if present.
///    The environment comes from `APP_ENVIRONMENT` and defaults to "development".
/// 4. Environment variables, e.g. `APP__ANALYSIS__SHORT_WINDOW=3`.
pub fn load_settings_from<P: AsRef<Path>>(config_dir: P) -> Result<Settings> {
    let config_dir = config_dir.as_ref();
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.toml")).required(false))
        .add_source(File::from(config_dir.join(format!("{environment}.toml"))).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Deserialize the configuration into our `Settings` struct.
    let settings: Settings = settings.try_deserialize()?;
    settings.analysis.validate()?;

    Ok(settings)
}
