//! OpenTelemetry span exporter writing one JSON object per line.
//!
//! Each finished span becomes a single compact line in the span file:
//!
//! ```text
//! {"service":"memberdesk","name":"handle_event","trace_id":"…","span_id":"…",
//!  "parent_span_id":null,"start_unix_nano":…,"duration_us":42,
//!  "attributes":{"event_type":"\"ToggleRow\""},"events":[],"status":{"code":"unset"}}
//! ```

use super::rotating_file::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use serde_json::{json, Map, Value as JsonValue};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Exports spans as JSON lines into a [`RotatingFile`].
pub struct FileSpanExporter {
    file: RotatingFile,
    service: String,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    #[must_use]
    pub fn new(file: RotatingFile, resource: &Resource) -> Self {
        Self {
            file,
            service: service_name(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        for span in &batch {
            let line = format_span(&self.service, span).to_string();
            if let Err(e) = self.file.write_line(&line) {
                return Box::pin(std::future::ready(Err(TraceError::from(e.to_string()))));
            }
        }

        Box::pin(std::future::ready(Ok(())))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, res: &Resource) {
        self.service = service_name(res);
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider that exports every span as it ends.
#[must_use]
pub fn create_tracer_provider(file: RotatingFile, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file, &resource);

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn service_name(resource: &Resource) -> String {
    resource
        .get(opentelemetry::Key::from_static_str("service.name"))
        .map_or_else(|| "unknown".to_string(), |v| v.to_string())
}

fn unix_nanos(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
}

fn format_span(service: &str, span: &SpanData) -> JsonValue {
    let duration_us = span
        .end_time
        .duration_since(span.start_time)
        .unwrap_or(Duration::ZERO)
        .as_micros();

    let parent = if span.parent_span_id == SpanId::INVALID {
        JsonValue::Null
    } else {
        JsonValue::String(format!("{:016x}", span.parent_span_id))
    };

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "name": event.name,
                "time_unix_nano": unix_nanos(event.timestamp).to_string(),
                "attributes": format_attributes(&event.attributes),
            })
        })
        .collect();

    let status = match &span.status {
        Status::Unset => json!({ "code": "unset" }),
        Status::Ok => json!({ "code": "ok" }),
        Status::Error { description } => json!({ "code": "error", "message": description }),
    };

    json!({
        "service": service,
        "name": span.name,
        "trace_id": format!("{:032x}", span.span_context.trace_id()),
        "span_id": format!("{:016x}", span.span_context.span_id()),
        "parent_span_id": parent,
        "start_unix_nano": unix_nanos(span.start_time).to_string(),
        "duration_us": duration_us.to_string(),
        "attributes": format_attributes(&span.attributes),
        "events": events,
        "status": status,
    })
}

fn format_attributes(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.as_str().to_string(), format_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn format_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => JsonValue::String(s.to_string()),
        other => JsonValue::String(other.to_string()),
    }
}
