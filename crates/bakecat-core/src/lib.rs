//! Shared domain types and configuration for the bakecat description engine.

pub mod app_config;
pub mod config;
pub mod products;
pub mod settings;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{
    word_count, DescriptionRecord, DetailField, ParsedDescription, ProductDetails, Version,
    DEFAULT_PLEASE_NOTE,
};
pub use settings::{load_settings, load_settings_or_default, DescriptionSettings};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read settings file {path}: {source}")]
    SettingsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file: {0}")]
    SettingsFileParse(#[from] serde_yaml::Error),

    #[error("settings validation failed: {0}")]
    Validation(String),
}
