//! Prometheus metrics for the bot.
//!
//! - `f1bot_commands_total{command}` - dispatched commands
//! - `f1bot_command_duration_seconds{command}` - dispatch latency
//! - `f1bot_command_errors_total{command,kind}` - degraded or failed replies
//! - `f1bot_upstream_requests_total{endpoint}` - OpenF1 requests issued
//! - `f1bot_upstream_errors_total{endpoint,kind}` - OpenF1 failures by kind
//!
//! Recording before [`init`] is a no-op.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

pub static COMMAND_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();
pub static COMMAND_LATENCY: OnceLock<HistogramVec> = OnceLock::new();
pub static COMMAND_ERRORS: OnceLock<IntCounterVec> = OnceLock::new();
pub static UPSTREAM_REQUESTS: OnceLock<IntCounterVec> = OnceLock::new();
pub static UPSTREAM_ERRORS: OnceLock<IntCounterVec> = OnceLock::new();

/// Register every metric. Later calls are harmless.
pub fn init() {
    let r = registry();

    macro_rules! register {
        ($metric:ident, $init:expr) => {
            if $metric.get().is_none() {
                let m = $init.expect(concat!(stringify!($metric), " creation failed"));
                if let Err(e) = r.register(Box::new(m.clone())) {
                    tracing::warn!(error = %e, concat!("Failed to register metric ", stringify!($metric)));
                }
                let _ = $metric.set(m);
            }
        };
    }

    register!(COMMAND_COUNTER, IntCounterVec::new(Opts::new("f1bot_commands_total", "Commands dispatched"), &["command"]));
    register!(COMMAND_LATENCY, HistogramVec::new(
        HistogramOpts::new("f1bot_command_duration_seconds", "Command latency including upstream calls")
            .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 15.0, 30.0]),
        &["command"]));
    register!(COMMAND_ERRORS, IntCounterVec::new(Opts::new("f1bot_command_errors_total", "Degraded or failed command replies"), &["command", "kind"]));
    register!(UPSTREAM_REQUESTS, IntCounterVec::new(Opts::new("f1bot_upstream_requests_total", "OpenF1 requests issued"), &["endpoint"]));
    register!(UPSTREAM_ERRORS, IntCounterVec::new(Opts::new("f1bot_upstream_errors_total", "OpenF1 request failures"), &["endpoint", "kind"]));
}

/// Gather all metrics and encode them in Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = registry().gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode Prometheus metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Prometheus metrics were not valid UTF-8");
        String::new()
    })
}

#[inline]
pub fn record_command(command: &str, duration_secs: f64) {
    if let Some(c) = COMMAND_COUNTER.get() {
        c.with_label_values(&[command]).inc();
    }
    if let Some(h) = COMMAND_LATENCY.get() {
        h.with_label_values(&[command]).observe(duration_secs);
    }
}

#[inline]
pub fn record_command_error(command: &str, kind: &str) {
    if let Some(c) = COMMAND_ERRORS.get() {
        c.with_label_values(&[command, kind]).inc();
    }
}

#[inline]
pub fn record_upstream_request(endpoint: &str) {
    if let Some(c) = UPSTREAM_REQUESTS.get() {
        c.with_label_values(&[endpoint]).inc();
    }
}

#[inline]
pub fn record_upstream_error(endpoint: &str, kind: &str) {
    if let Some(c) = UPSTREAM_ERRORS.get() {
        c.with_label_values(&[endpoint, kind]).inc();
    }
}
