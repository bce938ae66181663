//! Basic metrics instrumentation for tracking performance.
//!
//! Provides counters and duration tracking for form-capture HTTP requests
//! and contact submission outcomes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for the contact desk.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Submissions that reached the form-capture endpoint
    submissions_succeeded_total: Arc<AtomicU64>,

    /// Submissions the endpoint refused or never received
    submissions_failed_total: Arc<AtomicU64>,

    /// Submit attempts stopped by field validation
    validation_rejections_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            submissions_succeeded_total: Arc::new(AtomicU64::new(0)),
            submissions_failed_total: Arc::new(AtomicU64::new(0)),
            validation_rejections_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_succeeded(&self) {
        self.submissions_succeeded_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_failed(&self) {
        self.submissions_failed_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_rejection(&self) {
        self.validation_rejections_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn submissions_succeeded_total(&self) -> u64 {
        self.submissions_succeeded_total.load(Ordering::Relaxed)
    }

    pub fn submissions_failed_total(&self) -> u64 {
        self.submissions_failed_total.load(Ordering::Relaxed)
    }

    pub fn validation_rejections_total(&self) -> u64 {
        self.validation_rejections_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.http_requests_total.store(0, Ordering::Relaxed);
        self.http_errors_total.store(0, Ordering::Relaxed);
        self.http_duration_total_ms.store(0, Ordering::Relaxed);
        self.submissions_succeeded_total.store(0, Ordering::Relaxed);
        self.submissions_failed_total.store(0, Ordering::Relaxed);
        self.validation_rejections_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            submissions_succeeded_total: self.submissions_succeeded_total(),
            submissions_failed_total: self.submissions_failed_total(),
            validation_rejections_total: self.validation_rejections_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub submissions_succeeded_total: u64,
    pub submissions_failed_total: u64,
    pub validation_rejections_total: u64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }
}
