//! Metrics collection and exposition.
//!
//! # Metrics
//! - `proxy_provenance_enriched_total` (counter): requests given provenance headers, by scheme
//! - `proxy_provenance_rejected_total` (counter): requests rejected for an unparseable peer address

use std::net::SocketAddr;

use ::metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::provenance::Scheme;

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_enriched(scheme: Scheme) {
    counter!("proxy_provenance_enriched_total", "scheme" => scheme.as_str()).increment(1);
}

pub fn record_rejected() {
    counter!("proxy_provenance_rejected_total").increment(1);
}
