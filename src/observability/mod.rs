//! OpenTelemetry-based tracing with file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → JsonLinesExporter → JSON lines
//! ```
//!
//! Spans land in `<data_dir>/launchdeck-otlp.jsonl`, rotated by size with three
//! backups kept. The filter level comes from the `trace_level` config option
//! (default `"info"`).

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
