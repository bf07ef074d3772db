//! `select_active_intent` — activate one intent for subsequent mutations.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

use warden_core::WardenError;
use warden_core::tools::{Tool, ToolParameterSchema};
use warden_hooks::{ContextPatch, HookEngine};
use warden_store::IntentStore;

use crate::traits::{ToolCallbacks, ToolContext, WardenTool, required_string};

/// Resolves an intent id against the intents document and, on success,
/// installs it as the engine's active intent.
///
/// The lookup goes through the real document — an id that is not declared
/// there is an error, and the engine context stays untouched.
pub struct SelectActiveIntentTool {
    engine: Arc<HookEngine>,
}

impl SelectActiveIntentTool {
    /// Create the tool bound to the process's hook engine.
    #[must_use]
    pub fn new(engine: Arc<HookEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl WardenTool for SelectActiveIntentTool {
    fn name(&self) -> &str {
        "select_active_intent"
    }

    fn operation(&self) -> &str {
        "activating intent"
    }

    fn definition(&self) -> Tool {
        Tool {
            name: self.name().into(),
            description:
                "Select the intent that authorizes subsequent file mutations. Must be called \
                 before any mutating tool."
                    .into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "intent_id".into(),
                        json!({"type": "string", "description": "Id of the intent to activate"}),
                    );
                    m
                }),
                required: Some(vec!["intent_id".into()]),
            },
        }
    }

    async fn execute(
        &self,
        params: &Value,
        ctx: &ToolContext,
        callbacks: &dyn ToolCallbacks,
    ) -> Result<(), WardenError> {
        let Some(intent_id) = required_string(params, "intent_id") else {
            callbacks
                .push_result(callbacks.missing_parameter(self.name(), "intent_id"))
                .await;
            return Ok(());
        };

        let store = IntentStore::new(&ctx.workspace_root);
        match store.intent(intent_id).await {
            Some(intent) => {
                self.engine
                    .set_context(ContextPatch::workspace_root(ctx.workspace_root.clone()));
                self.engine.set_active_intent(intent.clone());
                info!(intent_id = %intent.id, "intent activated");
                callbacks
                    .push_result(format!(
                        "Successfully activated intent: {} - {}",
                        intent.id, intent.name
                    ))
                    .await;
            }
            None => {
                let error = WardenError::IntentNotFound {
                    id: intent_id.to_string(),
                };
                callbacks
                    .push_result(format!("Error selecting intent: {error}"))
                    .await;
            }
        }
        Ok(())
    }
}
