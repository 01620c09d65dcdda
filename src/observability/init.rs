//! Tracing subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the span export inside the data directory.
pub const TRACE_FILE_NAME: &str = "launchdeck-otlp.jsonl";

/// Installs the global tracing subscriber.
///
/// The pipeline is:
/// 1. `EnvFilter` from `config.trace_level` (default `"info"`)
/// 2. OpenTelemetry layer exporting spans to `<data_dir>/launchdeck-otlp.jsonl`
/// 3. Optional human-readable stderr output when `config.log_to_stderr` is set
///
/// Safe to call more than once; only the first call installs a subscriber. If
/// the data directory cannot be created, tracing is left uninitialized.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = config.data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", "launchdeck"),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(
        data_dir.join(TRACE_FILE_NAME),
        config.trace_file_max_bytes(),
        resource,
    );
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("launchdeck"));

    let stderr_layer = config.log_to_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .with(stderr_layer)
        .try_init();
}
