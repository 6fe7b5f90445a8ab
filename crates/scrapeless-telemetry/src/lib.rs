//! Logging and tracing setup for the Scrapeless tools
//!
//! Wires `tracing` into a `tracing-subscriber` registry with an
//! OpenTelemetry layer, and provides span helpers for tool executions.

pub mod attributes;
pub mod spans;
pub mod tracer;

pub use spans::{ToolSpanAttributes, safe_serialize, trace_tool_call};
pub use tracer::{TelemetryOptions, init_telemetry, init_telemetry_with, tracer_provider};
