//! Identifiers handed to a tool for one call

use scrapeless_core::ToolContext;
use uuid::Uuid;

const CALL_ID_PREFIX: &str = "call-";

/// Call and invocation identifiers of a tool execution.
///
/// An invocation groups the calls an agent makes while serving one request;
/// every call inside it carries its own id. Both end up on the
/// `execute_tool` span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultToolContext {
    function_call_id: String,
    invocation_id: String,
}

impl DefaultToolContext {
    pub fn new(function_call_id: String, invocation_id: String) -> Self {
        Self {
            function_call_id,
            invocation_id,
        }
    }

    /// A new invocation holding a single call, both with random UUID ids
    pub fn fresh() -> Self {
        Self::for_invocation(Uuid::new_v4().to_string())
    }

    /// A new call inside an existing invocation
    pub fn for_invocation(invocation_id: impl Into<String>) -> Self {
        Self::new(new_call_id(), invocation_id.into())
    }

    /// The next call of the same invocation
    pub fn next_call(&self) -> Self {
        Self::for_invocation(self.invocation_id.clone())
    }
}

impl Default for DefaultToolContext {
    fn default() -> Self {
        Self::fresh()
    }
}

impl ToolContext for DefaultToolContext {
    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }

    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }
}

fn new_call_id() -> String {
    format!("{}{}", CALL_ID_PREFIX, Uuid::new_v4())
}
