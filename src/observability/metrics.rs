//! Metrics collection and exposition.
//!
//! # Metrics
//! - `locale_router_decisions_total` (counter): decisions by kind
//! - `locale_negotiations_total` (counter): root negotiations by locale and source
//! - `http_request_duration_seconds` (histogram): latency through the locale layer
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - The Prometheus exporter is optional and owns its own listener

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::i18n::NegotiationSource;
use crate::routing::RoutingDecision;

/// Install the Prometheus recorder and its HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_decision(decision: &RoutingDecision) {
    counter!("locale_router_decisions_total", "decision" => decision.kind()).increment(1);
}

pub fn record_negotiation(locale: &str, source: NegotiationSource) {
    counter!(
        "locale_negotiations_total",
        "locale" => locale.to_string(),
        "source" => source.as_str()
    )
    .increment(1);
}

pub fn record_latency(decision: &RoutingDecision, start: Instant) {
    histogram!("http_request_duration_seconds", "decision" => decision.kind())
        .record(start.elapsed().as_secs_f64());
}
