//! Request observability
//!
//! Every completed request is folded into:
//! - a Prometheus histogram keyed by method, route template and status
//! - running totals (requests, 5xx errors, cumulative latency)
//! - a ring buffer holding the most recent request samples
//!
//! The registry is owned by the instance rather than the process-global
//! default, so each `AppState` (and each test) starts from zero. On Linux it
//! also carries the standard `process_*` collector (CPU, memory, fds).

use std::collections::VecDeque;
use std::time::Instant;

use chrono::{DateTime, Utc};
use prometheus::{
    histogram_opts, opts, Encoder, Gauge, HistogramVec, IntCounter, Registry, TextEncoder,
};
use serde::Serialize;
use tokio::sync::Mutex;

/// Number of request samples kept for the summary endpoint
pub const RECENT_CAPACITY: usize = 20;

/// Histogram buckets, in milliseconds
pub const LATENCY_BUCKETS_MS: [f64; 6] = [50.0, 100.0, 300.0, 500.0, 1000.0, 2000.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSample {
    /// Correlation id of the request
    pub id: String,
    pub method: String,
    pub route: String,
    pub status: u16,
    pub duration_ms: u64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservabilitySummary {
    pub total_requests: u64,
    pub total_errors: u64,
    pub avg_latency_ms: f64,
    pub recent_requests: Vec<RequestSample>,
}

#[derive(Debug, Default)]
struct Totals {
    total_requests: u64,
    total_errors: u64,
    total_latency_ms: u64,
    recent: VecDeque<RequestSample>,
}

pub struct Observability {
    registry: Registry,
    request_duration: HistogramVec,
    requests_total: IntCounter,
    errors_total: IntCounter,
    uptime_seconds: Gauge,
    started_at: Instant,
    totals: Mutex<Totals>,
}

impl std::fmt::Debug for Observability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observability")
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

impl Observability {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let request_duration = HistogramVec::new(
            histogram_opts!(
                "http_request_duration_ms",
                "Duration of HTTP requests in ms",
                LATENCY_BUCKETS_MS.to_vec()
            ),
            &["method", "route", "status_code"],
        )?;
        let requests_total = IntCounter::with_opts(opts!(
            "http_requests_total",
            "Total number of completed HTTP requests"
        ))?;
        let errors_total = IntCounter::with_opts(opts!(
            "http_request_errors_total",
            "Total number of HTTP requests answered with a 5xx status"
        ))?;
        let uptime_seconds = Gauge::with_opts(opts!(
            "process_uptime_seconds",
            "Seconds since the service started"
        ))?;

        registry.register(Box::new(request_duration.clone()))?;
        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(errors_total.clone()))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry,
            request_duration,
            requests_total,
            errors_total,
            uptime_seconds,
            started_at: Instant::now(),
            totals: Mutex::new(Totals::default()),
        })
    }

    /// Seconds since this instance was created
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// Fold one completed request into the histogram, totals and ring buffer
    pub async fn record(&self, sample: RequestSample) {
        let status = sample.status.to_string();

        // The metrics sink is best effort: a failure here must not affect the request
        match self.request_duration.get_metric_with_label_values(&[
            sample.method.as_str(),
            sample.route.as_str(),
            status.as_str(),
        ]) {
            Ok(histogram) => histogram.observe(sample.duration_ms as f64),
            Err(e) => tracing::warn!("Failed to record request duration: {}", e),
        }

        let is_error = sample.status >= 500;
        self.requests_total.inc();
        if is_error {
            self.errors_total.inc();
        }

        let mut totals = self.totals.lock().await;
        totals.total_requests += 1;
        totals.total_latency_ms += sample.duration_ms;
        if is_error {
            totals.total_errors += 1;
        }

        totals.recent.push_back(sample);
        while totals.recent.len() > RECENT_CAPACITY {
            totals.recent.pop_front();
        }
    }

    pub async fn summary(&self) -> ObservabilitySummary {
        let totals = self.totals.lock().await;

        ObservabilitySummary {
            total_requests: totals.total_requests,
            total_errors: totals.total_errors,
            avg_latency_ms: average_latency(totals.total_latency_ms, totals.total_requests),
            recent_requests: totals.recent.iter().cloned().collect(),
        }
    }

    /// Prometheus text exposition of this instance's registry
    pub fn render(&self) -> prometheus::Result<String> {
        self.uptime_seconds.set(self.uptime());

        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }
}

/// Mean latency rounded to one decimal place, or 0 before the first request
fn average_latency(total_latency_ms: u64, total_requests: u64) -> f64 {
    if total_requests == 0 {
        return 0.0;
    }
    let avg = total_latency_ms as f64 / total_requests as f64;
    (avg * 10.0).round() / 10.0
}
