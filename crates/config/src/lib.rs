//! Configuration management for the G2P front end
//!
//! Settings are layered from:
//! - `config/default.{toml,yaml,json}`
//! - `config/{env}.*` for a named environment
//! - Environment variables (`G2P_FRONTEND__` prefix, `__` between sections)

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_from, FeatureSettings, G2pSettings, JapaneseSettings,
    ModelPaths, ObservabilityConfig, RuntimeEnvironment, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
