//! # Metrics Registry
//!
//! Prometheus registry and the per-request HTTP metrics. The registry lives
//! in [`crate::models::AppState`] and is injected into handlers rather than
//! held in a process-wide global, so tests get an isolated registry per app.

use prometheus::{
    Encoder, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use tracing::warn;

/// Registry plus the handles the request-tracking middleware updates.
pub struct Metrics {
    registry: Registry,
    /// Total HTTP requests, labeled by method, path and status.
    pub http_requests_total: IntCounterVec,
    /// HTTP request duration in seconds, same labels.
    pub http_request_duration_seconds: HistogramVec,
}

impl Metrics {
    /// Builds a registry with the HTTP request metrics and, on Linux, the
    /// library's default process collector (cpu, memory, fds, ...).
    pub fn new() -> Self {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "path", "status"],
        )
        .expect("metric can be created");

        let http_request_duration_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            ),
            &["method", "path", "status"],
        )
        .expect("metric can be created");

        registry
            .register(Box::new(http_requests_total.clone()))
            .expect("collector can be registered");
        registry
            .register(Box::new(http_request_duration_seconds.clone()))
            .expect("collector can be registered");

        #[cfg(target_os = "linux")]
        {
            let process = prometheus::process_collector::ProcessCollector::for_self();
            registry
                .register(Box::new(process))
                .expect("collector can be registered");
        }

        Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
        }
    }

    /// Renders the current registry contents in the text exposition format.
    pub fn encode(&self) -> String {
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            warn!(error = %e, "Failed to encode metrics");
            return String::new();
        }

        String::from_utf8(buffer).unwrap_or_default()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
