use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::services::catalog::{DEFAULT_TIMEOUT_SECS, DEFAULT_UPSTREAM_BASE};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Upstream catalog API settings.
///
/// Both fields default so the gateway runs with no config file present.
/// Overriding the base URL is for staging and test stubs only.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_upstream_base")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_upstream_base() -> String {
    DEFAULT_UPSTREAM_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Effective filter directive for the subscriber; the LOG_LEVEL
    /// environment variable wins over the configured level.
    pub fn directive(&self) -> String {
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| self.level.clone())
    }

    /// Effective output format; the LOG_FORMAT environment variable wins
    /// over the configured format.
    pub fn output_format(&self) -> String {
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| self.format.clone())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with GATEWAY_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with GATEWAY_)
            // e.g., GATEWAY_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
