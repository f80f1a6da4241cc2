//! Tracing initialization and subscriber setup.

use super::exporter::create_tracer_provider;
use super::rotating_file::{RotatingFile, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every span.
const SERVICE_NAME: &str = "memberdesk";

/// Name of the span file inside the data directory.
pub const TRACE_FILE_NAME: &str = "memberdesk-spans.jsonl";

/// Level used when the plugin configuration sets none.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Initializes the tracing subscriber with file-based span export.
///
/// Spans pass an [`EnvFilter`] built from `config.trace_level` (default `info`),
/// go through the OpenTelemetry layer and end up as JSON lines in
/// `~/.local/share/zellij/memberdesk/memberdesk-spans.jsonl`.
///
/// Tracing is optional: if the data directory cannot be created or the filter
/// does not parse, the plugin runs without a subscriber. Calling this twice is
/// harmless; only the first subscriber is installed.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let Ok(filter) = EnvFilter::try_new(level) else {
        return;
    };

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let file = RotatingFile::new(
        data_dir.join(TRACE_FILE_NAME),
        MAX_FILE_SIZE_BYTES,
        MAX_BACKUP_FILES,
    );
    let provider = create_tracer_provider(file, resource);

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry().with(filter).with(otel_layer);

    let _ = subscriber.try_init();
}
