//! Tool-call input passed to hooks.

use serde_json::Value;

/// One intercepted tool call, as seen by the hook chain.
///
/// `result` is populated only on the post-action side — pre-action hooks
/// run before the tool has produced anything.
#[derive(Clone, Debug)]
pub struct ToolInput {
    /// Name of the tool being invoked.
    pub tool_name: String,
    /// Arguments the host passed to the tool.
    pub args: Value,
    /// Serialized tool result (post-action only).
    pub result: Option<Value>,
}

impl ToolInput {
    /// Input for the pre-action chain (no result yet).
    #[must_use]
    pub fn pre(tool_name: impl Into<String>, args: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            args,
            result: None,
        }
    }

    /// Input for the post-action chain.
    #[must_use]
    pub fn post(tool_name: impl Into<String>, args: Value, result: Option<Value>) -> Self {
        Self {
            tool_name: tool_name.into(),
            args,
            result,
        }
    }

    /// The mutation target path, if the arguments carry one.
    ///
    /// Mutating tools pass the target under `path` or `file_path`.
    #[must_use]
    pub fn target_path(&self) -> Option<&str> {
        self.args
            .get("path")
            .or_else(|| self.args.get("file_path"))
            .and_then(Value::as_str)
    }

    /// The full file content, if the arguments carry one.
    ///
    /// Diff-style tools carry no final content.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.args.get("content").and_then(Value::as_str)
    }
}
