//! `get_curated_context` — bounded context bundle for one intent.

use async_trait::async_trait;
use serde_json::{Value, json};

use warden_core::WardenError;
use warden_core::constants::DEFAULT_TOKEN_BUDGET;
use warden_core::tools::{Tool, ToolParameterSchema};
use warden_context::ContextCurator;
use warden_store::IntentStore;

use crate::traits::{ToolCallbacks, ToolContext, WardenTool, required_string};

/// Assembles and returns the curated context for an intent.
///
/// `token_budget` arrives from the host as an optional string; values
/// that do not parse to a positive integer fall back to the default.
#[derive(Clone, Copy, Debug, Default)]
pub struct GetCuratedContextTool;

/// Parse the optional `token_budget` argument.
fn parse_token_budget(params: &Value) -> usize {
    params
        .get("token_budget")
        .and_then(Value::as_str)
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|budget| *budget > 0)
        .unwrap_or(DEFAULT_TOKEN_BUDGET)
}

#[async_trait]
impl WardenTool for GetCuratedContextTool {
    fn name(&self) -> &str {
        "get_curated_context"
    }

    fn operation(&self) -> &str {
        "getting curated context"
    }

    fn definition(&self) -> Tool {
        Tool {
            name: self.name().into(),
            description:
                "Assemble a bounded context bundle for an intent: its scope and constraints \
                 plus relevant excerpts from the shared project documents."
                    .into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "intent_id".into(),
                        json!({"type": "string", "description": "Id of the intent to describe"}),
                    );
                    let _ = m.insert(
                        "token_budget".into(),
                        json!({
                            "type": "string",
                            "description": "Approximate output size limit in tokens (default 2000)"
                        }),
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

        let budget = parse_token_budget(params);
        let curator = ContextCurator::new(IntentStore::new(&ctx.workspace_root));
        let context = curator.curated_context(intent_id, budget).await;
        callbacks.push_result(context).await;
        Ok(())
    }
}
