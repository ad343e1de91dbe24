//! # menuflow Audit
//!
//! Diagnostic sinks for menuflow: an in-memory ring buffer for inspection
//! and a `tracing` forwarder for the running server.

mod diagnostic_log;
mod tracing_sink;

pub use diagnostic_log::{DiagnosticEntry, DiagnosticLog, DiagnosticStats, EntryType};
pub use tracing_sink::TracingDiagnostics;
