use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::domain::validation_constants::locale;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub validation: ValidationSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ValidationSettings {
    /// Locale messages are rendered in, and falls back to
    pub default_locale: String,
    /// Directory of additional locale files merged over the built-in tables
    pub locale_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogSettings {
    /// JSON fixture file seeding the catalog used for uniqueness checks
    pub fixtures: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("DEPOT_ENV").unwrap_or_else(|_| "development".to_string());

        Self::builder()?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("DEPOT").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Defaults only, ignoring files and the environment
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Start with default values
            .set_default("validation.default_locale", locale::DEFAULT)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")
    }
}
