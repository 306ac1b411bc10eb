use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "recipes.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// How many ranked recipes to print. The engine returns the full
    /// ranking; truncation is presentation policy.
    #[serde(default = "default_display_limit")]
    pub limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: default_display_limit(),
        }
    }
}

fn default_display_limit() -> usize {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" for development console output, "json" for structured logs.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PANTRYCHEF__CATALOG__PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("catalog.path", default_catalog_path())?
            .set_default("display.limit", default_display_limit() as u64)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults and env vars cover everything.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PANTRYCHEF")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy override without prefix
        if let Ok(catalog_path) = env::var("CATALOG_PATH") {
            builder = builder.set_override("catalog.path", catalog_path)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.path.trim().is_empty() {
            return Err("Catalog path must not be empty".to_string());
        }
        if self.display.limit == 0 {
            return Err("Display limit must be at least 1".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown logging format '{}': expected 'pretty' or 'json'",
                self.logging.format
            ));
        }
        Ok(())
    }
}
