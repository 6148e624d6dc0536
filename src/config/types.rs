//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::listen::ListenConfig;
use super::observability::{LogConfig, MetricsConfig};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Bot configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Interactions endpoint listener.
    #[serde(default)]
    pub listen: ListenConfig,
    /// Discord REST settings.
    #[serde(default)]
    pub discord: DiscordConfig,
    /// Prometheus endpoint.
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Log output.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file named on the command line, or `config.toml` when it
    /// exists, or fall back to built-in defaults.
    ///
    /// An explicitly named file that cannot be read is an error.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }
}

/// Discord REST API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    /// REST API base URL (default: "https://discord.com/api/v10").
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Overwrite the global `/f1` command definition at startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            register_commands: true,
        }
    }
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_true() -> bool {
    true
}
