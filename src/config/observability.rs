//! Logging and metrics configuration.

use serde::Deserialize;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration. The filter itself comes from `RUST_LOG`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Prometheus endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Port for the `/metrics` endpoint (default: 9090). 0 disables it.
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl MetricsConfig {
    /// Whether the HTTP endpoint should be started.
    pub fn enabled(&self) -> bool {
        self.port != 0
    }
}

fn default_metrics_port() -> u16 {
    9090
}
