//! Trace logging — the post-action audit recorder.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use warden_core::constants::is_traced_tool;
use warden_core::hash::content_hash;
use warden_core::{AgentTrace, MutationClass, ToolInput, WardenError};
use warden_store::{IntentStore, RevisionProvider};

use crate::context::HookContext;
use crate::hook::Hook;

/// Post-action hook appending one [`AgentTrace`] per completed mutation.
///
/// Applies only when the tool is in the traced set and an intent is
/// active. The content hash covers the `content` argument; diff-style
/// calls carry no final content, so their hash degrades to the hash of
/// the empty string rather than re-reading the file — a documented
/// approximation. The revision lookup is injected and best-effort.
///
/// With no workspace root set, the trace is emitted to the diagnostic
/// log instead of persisted — an explicit degraded mode, not an error.
/// Append failures are logged and swallowed; the mutation already
/// succeeded and must not appear to fail because of bookkeeping.
pub struct TraceLoggerHook {
    revision: Arc<dyn RevisionProvider>,
}

impl TraceLoggerHook {
    /// Create the hook with the given revision capability.
    #[must_use]
    pub fn new(revision: Arc<dyn RevisionProvider>) -> Self {
        Self { revision }
    }
}

#[async_trait]
impl Hook for TraceLoggerHook {
    fn name(&self) -> &str {
        "trace-logger"
    }

    async fn post_action(
        &self,
        context: &HookContext,
        input: &ToolInput,
    ) -> Result<(), WardenError> {
        if !is_traced_tool(&input.tool_name) {
            return Ok(());
        }
        let Some(intent) = context.active_intent.as_ref() else {
            return Ok(());
        };
        let Some(file_path) = input.target_path() else {
            debug!(tool = %input.tool_name, "mutation carried no target path, nothing to trace");
            return Ok(());
        };

        let content = input.content().unwrap_or("");
        let mutation_class = MutationClass::classify(&input.tool_name, content);

        if !context.has_workspace_root() {
            let trace = AgentTrace::record(
                intent,
                file_path,
                content_hash(content),
                mutation_class,
                warden_core::trace::UNKNOWN_REVISION.to_string(),
            );
            warn!(
                trace = %serde_json::to_string(&trace).unwrap_or_else(|_| trace.id.clone()),
                "no workspace root set, emitting trace to diagnostics instead of the ledger"
            );
            return Ok(());
        }

        let git_rev = self
            .revision
            .current_revision(Path::new(&context.workspace_root))
            .await;
        let trace = AgentTrace::record(
            intent,
            file_path,
            content_hash(content),
            mutation_class,
            git_rev,
        );

        let store = IntentStore::new(&context.workspace_root);
        if let Err(error) = store.log_trace(&trace).await {
            warn!(trace_id = %trace.id, %error, "failed to append trace record");
        }
        Ok(())
    }
}

impl std::fmt::Debug for TraceLoggerHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceLoggerHook").finish_non_exhaustive()
    }
}
