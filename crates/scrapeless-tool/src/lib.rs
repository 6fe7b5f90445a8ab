//! Tool plumbing shared by the Scrapeless tools
//!
//! This crate provides:
//! - Declarative input schemas with boundary validation
//! - The default-resolution helper applied to every optional field
//! - Invocation error wrapping and tool-call tracing
//! - A default `ToolContext` implementation

pub mod context;
pub mod defaults;
pub mod invoke;
pub mod schema;

// Re-exports
pub use context::DefaultToolContext;
pub use defaults::or_default;
pub use invoke::{parse_input, record_tool_call, wrap_invocation_error};
pub use schema::{Field, FieldKind, ToolSchema};

// Re-export core types
pub use scrapeless_core::{Error, Result, Tool, ToolContext, ToolResponse};
