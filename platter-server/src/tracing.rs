//! Logging setup: console output, optionally exported over OpenTelemetry

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    runtime,
    trace::{self, RandomIdGenerator, Sampler},
    Resource,
};
use std::time::Duration;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "info,platter=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Whether `OTEL_ENABLED` asks for OpenTelemetry export
pub fn otel_enabled() -> bool {
    std::env::var("OTEL_ENABLED")
        .ok()
        .and_then(|value| value.parse::<bool>().ok())
        .unwrap_or(false)
}

/// Console-only logging
pub fn init_console_logging() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(env_filter())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Initialize OpenTelemetry with OTLP exporter
pub fn init_telemetry(service_name: &str) -> anyhow::Result<opentelemetry_sdk::trace::Tracer> {
    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());

    let resource = Resource::new(vec![
        KeyValue::new("service.name", service_name.to_string()),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(3));

    let sample_arg = std::env::var("OTEL_TRACES_SAMPLER_ARG").ok();
    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(
            trace::config()
                .with_sampler(sampler_from_arg(sample_arg.as_deref()))
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .install_batch(runtime::Tokio)?;

    Ok(tracer)
}

/// Sampler for a ratio argument; unset or unparsable means sample everything
fn sampler_from_arg(arg: Option<&str>) -> Sampler {
    let sample_rate = arg.and_then(|s| s.parse::<f64>().ok()).unwrap_or(1.0);

    if sample_rate >= 1.0 {
        Sampler::AlwaysOn
    } else if sample_rate <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(sample_rate)
    }
}

/// Console logging plus OpenTelemetry export
pub fn init_tracing_stack(service_name: &str) -> anyhow::Result<()> {
    let tracer = init_telemetry(service_name)?;
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_thread_names(true);

    Registry::default()
        .with(env_filter())
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

/// Shutdown OpenTelemetry provider, flushing pending spans
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_defaults_to_always_on() {
        assert!(matches!(sampler_from_arg(None), Sampler::AlwaysOn));
        assert!(matches!(sampler_from_arg(Some("invalid")), Sampler::AlwaysOn));
        assert!(matches!(sampler_from_arg(Some("2.0")), Sampler::AlwaysOn));
    }

    #[test]
    fn test_sampler_boundaries() {
        assert!(matches!(sampler_from_arg(Some("0.0")), Sampler::AlwaysOff));
        assert!(matches!(sampler_from_arg(Some("-0.5")), Sampler::AlwaysOff));
        assert!(matches!(sampler_from_arg(Some("1.0")), Sampler::AlwaysOn));
        assert!(matches!(
            sampler_from_arg(Some("0.5")),
            Sampler::TraceIdRatioBased(_)
        ));
        assert!(matches!(
            sampler_from_arg(Some("0.001")),
            Sampler::TraceIdRatioBased(_)
        ));
    }

    #[test]
    fn test_shutdown_telemetry() {
        shutdown_telemetry();
    }
}
