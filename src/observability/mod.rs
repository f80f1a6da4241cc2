//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → RotatingFile
//! ```
//!
//! Spans land in `~/.local/share/zellij/memberdesk/memberdesk-spans.jsonl`, one JSON
//! object per line. The file rotates at 5 MiB and keeps 3 numbered backups.
//!
//! The trace level comes from the `trace_level` plugin option and defaults to
//! `"info"`. Any [`EnvFilter`](tracing_subscriber::EnvFilter) directive works, e.g.
//! `memberdesk=debug`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and tracer provider
//! - [`rotating_file`]: Size-rotated line writer

pub mod exporter;
pub mod init;
pub mod rotating_file;

pub use init::init_tracing;
