//! Shared steps of a tool invocation: argument parsing, error wrapping and tracing

use crate::schema::ToolSchema;
use scrapeless_core::{Error, Result, Tool, ToolContext, ToolResponse};
use scrapeless_telemetry::{ToolSpanAttributes, safe_serialize, trace_tool_call};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Validate `params` against `schema`, then deserialize them into `T`.
///
/// Both failures surface as [`Error::InvalidInput`], which the tool layer
/// passes through without re-wrapping.
pub fn parse_input<T: DeserializeOwned>(tool: &str, schema: &ToolSchema, params: &Value) -> Result<T> {
    schema.validate(tool, params)?;
    serde_json::from_value(params.clone()).map_err(|e| Error::invalid_input(tool, e.to_string()))
}

/// Attach `context` to an adapter failure.
///
/// Errors already classified by the tool layer are returned unchanged; any
/// other error becomes [`Error::Invocation`] with the message
/// `"{context}: {original}"`.
pub fn wrap_invocation_error(tool: &str, context: &str, err: impl Into<Error>) -> Error {
    let err = err.into();
    if err.is_tool_error() {
        return err;
    }

    tracing::warn!(tool, error = %err, "Tool invocation failed");
    Error::Invocation {
        tool: tool.to_string(),
        message: format!("{}: {}", context, err),
    }
}

/// Emit the `execute_tool` span for a finished invocation.
pub fn record_tool_call(
    tool: &dyn Tool,
    ctx: &dyn ToolContext,
    params: &Value,
    outcome: &Result<ToolResponse>,
) {
    let (response_json, succeeded) = match outcome {
        Ok(response) => (safe_serialize(&response.result), true),
        Err(e) => (safe_serialize(&serde_json::json!({ "error": e.to_string() })), false),
    };

    trace_tool_call(ToolSpanAttributes {
        tool_name: tool.name().to_string(),
        tool_description: tool.description().to_string(),
        tool_call_id: ctx.function_call_id().to_string(),
        invocation_id: ctx.invocation_id().to_string(),
        args_json: safe_serialize(params),
        response_json,
        succeeded,
    });
}
