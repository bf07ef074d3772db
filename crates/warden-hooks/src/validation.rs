//! Intent validation — the pre-action authorization gate.

use async_trait::async_trait;
use tracing::debug;

use warden_core::constants::is_mutating_tool;
use warden_core::{ToolInput, WardenError, scope};

use crate::context::HookContext;
use crate::hook::Hook;

/// Pre-action hook proving a mutation is authorized before it runs.
///
/// Applies only to the mutating tool set. Checks, in order:
///
/// 1. an intent is active,
/// 2. its status is `IN_PROGRESS`,
/// 3. the target path (argument `path` or `file_path`, when present)
///    falls inside the intent's owned scope.
///
/// A failed check aborts the pending tool call via the engine's
/// fail-closed pre-chain. Scope violations carry the full authorized
/// scope list so the operator can diagnose and expand it.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntentValidationHook;

#[async_trait]
impl Hook for IntentValidationHook {
    fn name(&self) -> &str {
        "intent-validation"
    }

    async fn pre_action(
        &self,
        context: &HookContext,
        input: &ToolInput,
    ) -> Result<(), WardenError> {
        if !is_mutating_tool(&input.tool_name) {
            return Ok(());
        }

        let Some(intent) = context.active_intent.as_ref() else {
            return Err(WardenError::NoActiveIntent);
        };

        if !intent.status.authorizes_mutation() {
            return Err(WardenError::IntentNotActive {
                id: intent.id.clone(),
                status: intent.status,
            });
        }

        if let Some(path) = input.target_path() {
            if !scope::authorized(path, &intent.owned_scope) {
                return Err(WardenError::ScopeViolation {
                    intent_id: intent.id.clone(),
                    path: path.to_string(),
                    authorized_scopes: intent.owned_scope.clone(),
                });
            }
        }

        debug!(
            tool = %input.tool_name,
            intent = %intent.id,
            "pre-action checks passed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;
    use warden_core::{Intent, IntentStatus};

    use super::*;

    fn context(status: IntentStatus, scopes: &[&str]) -> HookContext {
        HookContext {
            active_intent: Some(Intent {
                id: "INT-1".into(),
                name: "Harden the hook chain".into(),
                status,
                owned_scope: scopes.iter().map(ToString::to_string).collect(),
                constraints: vec![],
                acceptance_criteria: vec![],
            }),
            workspace_root: "/workspace".into(),
        }
    }

    fn write_input(path: &str) -> ToolInput {
        ToolInput::pre("write_to_file", json!({"path": path, "content": "body"}))
    }

    #[tokio::test]
    async fn non_mutating_tools_pass_without_an_intent() {
        let input = ToolInput::pre("read_file", json!({"path": "anywhere.rs"}));
        let result = IntentValidationHook
            .pre_action(&HookContext::default(), &input)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn mutating_tool_without_intent_is_rejected() {
        let result = IntentValidationHook
            .pre_action(&HookContext::default(), &write_input("src/hooks/a.rs"))
            .await;
        assert_matches!(result, Err(WardenError::NoActiveIntent));
    }

    #[tokio::test]
    async fn todo_intent_is_rejected() {
        let ctx = context(IntentStatus::Todo, &["src/hooks/**"]);
        let result = IntentValidationHook
            .pre_action(&ctx, &write_input("src/hooks/a.rs"))
            .await;
        assert_matches!(
            result,
            Err(WardenError::IntentNotActive {
                status: IntentStatus::Todo,
                ..
            })
        );
    }

    #[tokio::test]
    async fn done_intent_is_rejected() {
        let ctx = context(IntentStatus::Done, &["src/hooks/**"]);
        let result = IntentValidationHook
            .pre_action(&ctx, &write_input("src/hooks/a.rs"))
            .await;
        assert_matches!(result, Err(WardenError::IntentNotActive { .. }));
    }

    #[tokio::test]
    async fn in_scope_write_is_authorized() {
        let ctx = context(IntentStatus::InProgress, &["src/hooks/**"]);
        let result = IntentValidationHook
            .pre_action(&ctx, &write_input("src/hooks/engine.rs"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn out_of_scope_write_lists_authorized_scopes() {
        let ctx = context(IntentStatus::InProgress, &["src/hooks/**"]);
        let result = IntentValidationHook
            .pre_action(&ctx, &write_input("src/core/engine.rs"))
            .await;
        let error = result.unwrap_err();
        assert_matches!(error, WardenError::ScopeViolation { .. });
        let message = error.to_string();
        assert!(message.contains("src/core/engine.rs"));
        assert!(message.contains("src/hooks/**"));
    }

    #[tokio::test]
    async fn empty_scope_rejects_every_path() {
        let ctx = context(IntentStatus::InProgress, &[]);
        let result = IntentValidationHook
            .pre_action(&ctx, &write_input("src/hooks/engine.rs"))
            .await;
        assert_matches!(result, Err(WardenError::ScopeViolation { .. }));
    }

    #[tokio::test]
    async fn pathless_call_passes_status_checks_only() {
        let ctx = context(IntentStatus::InProgress, &[]);
        let input = ToolInput::pre("apply_diff", json!({"diff": "@@"}));
        let result = IntentValidationHook.pre_action(&ctx, &input).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn file_path_argument_is_also_checked() {
        let ctx = context(IntentStatus::InProgress, &["src/hooks/**"]);
        let input = ToolInput::pre("edit", json!({"file_path": "src/core/engine.rs"}));
        let result = IntentValidationHook.pre_action(&ctx, &input).await;
        assert_matches!(result, Err(WardenError::ScopeViolation { .. }));
    }
}
