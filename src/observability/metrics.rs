//! Metrics collection and exposition.
//!
//! # Metrics
//! - `vanity_requests_total` (counter): requests by route and status
//! - `vanity_request_duration_seconds` (histogram): handling latency by route
//!
//! Recording is a no-op until a recorder is installed, so handlers can call it
//! unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::StatusCode;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(route: &'static str, status: StatusCode, start: Instant) {
    ::metrics::counter!(
        "vanity_requests_total",
        "route" => route,
        "status" => status.as_u16().to_string()
    )
    .increment(1);
    ::metrics::histogram!("vanity_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};

    #[test]
    fn test_record_request_labels() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            record_request("vanity", StatusCode::OK, Instant::now());
            record_request("vanity", StatusCode::OK, Instant::now());
            record_request("not_found", StatusCode::NOT_FOUND, Instant::now());
        });

        let snapshot = snapshotter.snapshot().into_vec();
        let has_label = |key: &::metrics::Key, name: &str, value: &str| {
            key.labels().any(|l| l.key() == name && l.value() == value)
        };
        let counter = |route: &str, status: &str| {
            snapshot.iter().find_map(|(composite, _, _, value)| {
                let key = composite.key();
                let wanted = key.name() == "vanity_requests_total"
                    && has_label(key, "route", route)
                    && has_label(key, "status", status);
                match (wanted, value) {
                    (true, DebugValue::Counter(n)) => Some(*n),
                    _ => None,
                }
            })
        };

        assert_eq!(counter("vanity", "200"), Some(2));
        assert_eq!(counter("not_found", "404"), Some(1));
        assert_eq!(counter("vanity", "404"), None);

        let vanity_latencies = snapshot.iter().find_map(|(composite, _, _, value)| {
            let key = composite.key();
            let wanted = key.name() == "vanity_request_duration_seconds"
                && has_label(key, "route", "vanity");
            match (wanted, value) {
                (true, DebugValue::Histogram(samples)) => Some(samples.len()),
                _ => None,
            }
        });
        assert_eq!(vanity_latencies, Some(2));
    }
}
