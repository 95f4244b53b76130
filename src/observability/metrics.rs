//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_requests_total` (counter): requests by match result and status
//! - `router_request_duration_seconds` (histogram): dispatch latency
//!
//! Recording is a no-op until an exporter is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::MatchResult;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record one dispatched request.
pub fn record_request(result: MatchResult, status: u16, start_time: Instant) {
    let elapsed = start_time.elapsed().as_secs_f64();

    ::metrics::counter!(
        "router_requests_total",
        "result" => result.as_str(),
        "status" => status.to_string()
    )
    .increment(1);

    ::metrics::histogram!(
        "router_request_duration_seconds",
        "result" => result.as_str()
    )
    .record(elapsed);
}
