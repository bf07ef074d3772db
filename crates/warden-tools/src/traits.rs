//! Core trait and host-collaborator abstractions for the tool surface.

use async_trait::async_trait;
use serde_json::Value;

use warden_core::WardenError;
use warden_core::tools::Tool;

/// Execution context passed to every tool invocation.
#[derive(Clone, Debug)]
pub struct ToolContext {
    /// Absolute workspace root of the hosting agent session.
    pub workspace_root: String,
}

/// Host-provided collaborators.
///
/// The host owns the conversation: results and errors flow back through
/// these callbacks, and the missing-parameter wording is the host's.
#[async_trait]
pub trait ToolCallbacks: Send + Sync {
    /// Push a text result back to the conversation.
    async fn push_result(&self, text: String);

    /// Report a failure under a labeled operation (e.g. "activating
    /// intent").
    async fn report_error(&self, operation: &str, error: &WardenError);

    /// Build the host's missing-parameter message for a tool call.
    fn missing_parameter(&self, tool_name: &str, param: &str) -> String;
}

/// A tool the host can dispatch.
#[async_trait]
pub trait WardenTool: Send + Sync {
    /// Tool name — the exact string the host dispatches on.
    fn name(&self) -> &str;

    /// Operation label used when reporting unexpected errors.
    fn operation(&self) -> &str;

    /// JSON-Schema definition published to the host.
    fn definition(&self) -> Tool;

    /// Execute with JSON arguments.
    ///
    /// Recoverable failures must be pushed through the callbacks as
    /// strings and return `Ok`; only unexpected failures return `Err`,
    /// which the registry routes to the error sink.
    async fn execute(
        &self,
        params: &Value,
        ctx: &ToolContext,
        callbacks: &dyn ToolCallbacks,
    ) -> Result<(), WardenError>;
}

/// Extract a required, non-empty string parameter.
#[must_use]
pub fn required_string<'a>(params: &'a Value, param: &str) -> Option<&'a str> {
    params
        .get(param)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
