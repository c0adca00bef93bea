//! Prometheus metrics collection for the gateway

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Initialize all metric descriptions
pub fn init_metrics() {
    describe_counter!(
        "platter_store_queries_total",
        "Total number of restaurant store queries"
    );
    describe_counter!(
        "platter_proxy_requests_total",
        "Total number of calls forwarded to the order service"
    );
    describe_histogram!(
        "platter_proxy_latency_seconds",
        "Order service call latency in seconds"
    );
}

/// Record a store query and whether it succeeded
pub fn record_store_query(operation: &'static str, outcome: &'static str) {
    counter!("platter_store_queries_total", 1, "operation" => operation, "outcome" => outcome);
}

/// Record a forwarded call; `outcome` is the downstream status or `"error"`
pub fn record_proxy_call(operation: &'static str, outcome: &str, latency: Duration) {
    counter!(
        "platter_proxy_requests_total",
        1,
        "operation" => operation,
        "outcome" => outcome.to_string()
    );
    histogram!(
        "platter_proxy_latency_seconds",
        latency.as_secs_f64(),
        "operation" => operation
    );
}

/// Storage for Prometheus handle
static PROMETHEUS_HANDLE: std::sync::OnceLock<metrics_exporter_prometheus::PrometheusHandle> =
    std::sync::OnceLock::new();

/// Install the Prometheus recorder as the global metrics recorder
pub fn init_prometheus() -> anyhow::Result<()> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder.install_recorder()?;
    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("Failed to set Prometheus handle"))?;
    Ok(())
}

/// Get Prometheus metrics string
pub fn get_prometheus_metrics() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Prometheus metrics not initialized\n".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    // The only test in this crate that installs a global recorder.
    #[test]
    fn test_recorded_metrics_carry_labels() {
        let handle = PrometheusBuilder::new().install_recorder().unwrap();
        init_metrics();

        record_store_query("find_restaurant", "error");
        record_proxy_call("create_order", "201", Duration::from_millis(12));

        let rendered = handle.render();
        let has_series = |prefix: &str, labels: &[&str]| {
            rendered
                .lines()
                .any(|line| line.starts_with(prefix) && labels.iter().all(|l| line.contains(l)))
        };

        assert!(has_series(
            "platter_store_queries_total{",
            &["operation=\"find_restaurant\"", "outcome=\"error\""]
        ));
        assert!(has_series(
            "platter_proxy_requests_total{",
            &["operation=\"create_order\"", "outcome=\"201\""]
        ));
        assert!(has_series(
            "platter_proxy_latency_seconds_count{",
            &["operation=\"create_order\""]
        ));
    }
}
