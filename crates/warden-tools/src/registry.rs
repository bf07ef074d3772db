//! Tool registry — the host's dispatch index for gate tools.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use warden_core::tools::Tool;

use crate::traits::{ToolCallbacks, ToolContext, WardenTool};

/// Name-keyed registry of gate tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn WardenTool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Overwrites any existing tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn WardenTool>) {
        debug!(tool_name = tool.name(), "tool registered");
        let _ = self.tools.insert(tool.name().to_owned(), tool);
    }

    /// Look up a tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn WardenTool>> {
        self.tools.get(name).cloned()
    }

    /// All tool schemas, for the host to publish.
    #[must_use]
    pub fn definitions(&self) -> Vec<Tool> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }

    /// All tool names, sorted alphabetically.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Dispatch one tool call.
    ///
    /// Returns `false` when no tool with that name is registered. An
    /// `Err` from the tool is routed to the error sink under the tool's
    /// operation label and does not escape.
    pub async fn dispatch(
        &self,
        name: &str,
        params: &Value,
        ctx: &ToolContext,
        callbacks: &dyn ToolCallbacks,
    ) -> bool {
        let Some(tool) = self.get(name) else {
            debug!(tool_name = name, "no such tool");
            return false;
        };
        if let Err(error) = tool.execute(params, ctx, callbacks).await {
            callbacks.report_error(tool.operation(), &error).await;
        }
        true
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.tools.len())
            .finish()
    }
}
