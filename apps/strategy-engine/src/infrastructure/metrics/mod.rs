//! Prometheus Metrics Module
//!
//! Exposes service metrics in Prometheus format.
//!
//! # Metrics
//!
//! - `strategy_engine_calculations_total{outcome}`: calculation attempts
//! - `strategy_engine_calculation_seconds`: calculation latency
//! - `strategy_engine_http_requests_total{route, status}`: routed HTTP requests
//!
//! # Integration
//!
//! Metrics are exposed at `/metrics` on the service port.

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::application::ports::{CalculationObserverPort, CalculationOutcome};

// =============================================================================
// Global Metrics Handle
// =============================================================================

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the Prometheus metrics recorder.
///
/// Safe to call more than once; later calls return the first handle.
///
/// # Panics
///
/// Panics if another global recorder was already installed.
#[allow(clippy::expect_used)]
pub fn init_metrics() -> PrometheusHandle {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            register_metrics();
            handle
        })
        .clone()
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn get_metrics_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

// =============================================================================
// Metric Registration
// =============================================================================

fn register_metrics() {
    describe_counter!(
        "strategy_engine_calculations_total",
        "Total strategy calculation attempts by outcome"
    );
    describe_histogram!(
        "strategy_engine_calculation_seconds",
        "Time spent reading inputs and computing the payoff"
    );
    describe_counter!(
        "strategy_engine_http_requests_total",
        "Total routed HTTP requests by route and status"
    );
}

// =============================================================================
// Metric Recording Functions
// =============================================================================

/// Record a calculation attempt.
pub fn record_calculation(outcome: CalculationOutcome, elapsed: Duration) {
    counter!(
        "strategy_engine_calculations_total",
        "outcome" => outcome.as_str()
    )
    .increment(1);

    histogram!("strategy_engine_calculation_seconds").record(elapsed.as_secs_f64());
}

/// Record a routed HTTP request.
pub fn record_http_request(route: &str, status: u16) {
    counter!(
        "strategy_engine_http_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

// =============================================================================
// Observer Adapter
// =============================================================================

/// Calculation observer backed by the global Prometheus recorder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrometheusCalculationObserver;

impl CalculationObserverPort for PrometheusCalculationObserver {
    fn calculation_completed(&self, outcome: CalculationOutcome, elapsed: Duration) {
        record_calculation(outcome, elapsed);
    }
}

// =============================================================================
// Tests
// =============================================================================
