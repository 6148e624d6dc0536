//! Logging setup and command timing.

use crate::config::LogFormat;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Guard for timing command execution and recording metrics.
///
/// Records command latency when dropped.
pub struct CommandTimer {
    command: &'static str,
    start: Instant,
}

impl CommandTimer {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        crate::metrics::record_command(self.command, self.start.elapsed().as_secs_f64());
    }
}

/// Span constructors shared across the crate.
pub mod spans {
    use tracing::{Span, info_span};

    /// One `/f1` dispatch.
    pub fn command(name: &str) -> Span {
        info_span!("f1.command", command = %name)
    }

    /// One incoming Discord interaction.
    pub fn interaction(kind: u8, id: &str) -> Span {
        info_span!("interaction", kind, id = %id)
    }
}
