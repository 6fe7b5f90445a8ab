//! Span attribute keys

pub const SYSTEM_NAME: &str = "scrapeless";

pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";
pub const GEN_AI_TOOL_NAME: &str = "gen_ai.tool.name";
pub const GEN_AI_TOOL_DESCRIPTION: &str = "gen_ai.tool.description";
pub const GEN_AI_TOOL_CALL_ID: &str = "gen_ai.tool.call.id";

pub const SCRAPELESS_INVOCATION_ID: &str = "scrapeless.invocation_id";
pub const SCRAPELESS_TOOL_CALL_ARGS: &str = "scrapeless.tool_call_args";
pub const SCRAPELESS_TOOL_RESPONSE: &str = "scrapeless.tool_response";
pub const SCRAPELESS_TOOL_STATUS: &str = "scrapeless.tool_status";
