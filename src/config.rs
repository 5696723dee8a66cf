//! Configuration management for the library console

use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::error::AppResult;

/// What the repository does when writing a collection fails
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SavePolicy {
    /// Return the storage error to the caller
    #[default]
    Propagate,
    /// Log the failure and report success, leaving memory ahead of disk
    #[serde(alias = "log_and_continue")]
    Log,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the four collection files
    pub data_dir: PathBuf,
    #[serde(default)]
    pub save_policy: SavePolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Manager account seeded into an empty managers collection
#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    /// Load configuration from defaults, files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let storage = StorageConfig::default();
        let logging = LoggingConfig::default();
        let admin = AdminConfig::default();

        let config = Config::builder()
            .set_default("storage.data_dir", storage.data_dir.to_string_lossy().into_owned())?
            .set_default("storage.save_policy", "propagate")?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format)?
            .set_default("admin.username", admin.username)?
            .set_default("admin.password", admin.password)?
            .set_default("admin.full_name", admin.full_name)?
            // Optional shared configuration file
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LIBRARY__)
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override data directory from LIBRARY_DATA_DIR env var if present
            .set_override_option("storage.data_dir", env::var("LIBRARY_DATA_DIR").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            save_policy: SavePolicy::Propagate,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            full_name: "Administrator".to_string(),
        }
    }
}
