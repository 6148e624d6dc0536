//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct and loading (Config, DiscordConfig, ConfigError)
//! - [`listen`]: Interaction endpoint listener configuration (ListenConfig)
//! - [`observability`]: Logging and Prometheus configuration (LogConfig, MetricsConfig)
//!
//! The bot token is deliberately absent: it is read from the environment only.

mod listen;
mod observability;
mod types;

pub use observability::LogFormat;
pub use types::Config;
