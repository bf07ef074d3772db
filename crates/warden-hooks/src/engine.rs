//! Hook execution engine.
//!
//! One engine exists per process, constructed explicitly by the host and
//! shared by reference through the tool-dispatch pipeline — single-instance
//! semantics without a hidden global. Hooks are registered once, before the
//! engine is shared, and run in registration order.
//!
//! The context lock is internal and never held across an await: each chain
//! run takes an owned snapshot first, so selecting a different intent
//! mid-chain cannot alter a chain already in flight.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use warden_core::{Intent, ToolInput, WardenError};

use crate::context::{ContextPatch, HookContext};
use crate::hook::Hook;

/// Drives the pre-/post-action hook chains around mutating tool calls.
#[derive(Default)]
pub struct HookEngine {
    hooks: Vec<Arc<dyn Hook>>,
    context: RwLock<HookContext>,
}

impl HookEngine {
    /// Create an engine with an empty chain and empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook to the chain. Registration order is execution order.
    pub fn register(&mut self, hook: Arc<dyn Hook>) {
        debug!(name = hook.name(), position = self.hooks.len(), "hook registered");
        self.hooks.push(hook);
    }

    /// Number of registered hooks.
    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Merge the patch into the context (shallow override).
    pub fn set_context(&self, patch: ContextPatch) {
        patch.apply(&mut self.context.write());
    }

    /// Replace the active intent snapshot.
    pub fn set_active_intent(&self, intent: Intent) {
        debug!(intent_id = %intent.id, "active intent replaced");
        self.context.write().active_intent = Some(intent);
    }

    /// Owned snapshot of the current context.
    #[must_use]
    pub fn context(&self) -> HookContext {
        self.context.read().clone()
    }

    /// Run the pre-action chain for a pending tool call.
    ///
    /// Hooks run sequentially in registration order. The first error
    /// aborts the remaining chain and must abort the pending tool action:
    /// the caller may only perform the mutation on `Ok`.
    #[instrument(skip_all, fields(tool_name = %tool_name))]
    pub async fn on_pre_tool_execution(
        &self,
        tool_name: &str,
        args: &Value,
    ) -> Result<(), WardenError> {
        let context = self.context();
        let input = ToolInput::pre(tool_name, args.clone());

        for hook in &self.hooks {
            if let Err(error) = hook.pre_action(&context, &input).await {
                warn!(hook = hook.name(), %error, "pre-action hook aborted the tool call");
                return Err(error);
            }
        }
        Ok(())
    }

    /// Run the post-action chain for a completed tool call.
    ///
    /// Hooks run sequentially in registration order. Each hook's failure
    /// is caught and logged, never propagated — the mutation already
    /// succeeded and must not appear to fail because of bookkeeping.
    #[instrument(skip_all, fields(tool_name = %tool_name))]
    pub async fn on_post_tool_execution(
        &self,
        tool_name: &str,
        args: &Value,
        result: Option<&Value>,
    ) {
        let context = self.context();
        let input = ToolInput::post(tool_name, args.clone(), result.cloned());

        for hook in &self.hooks {
            if let Err(error) = hook.post_action(&context, &input).await {
                warn!(hook = hook.name(), %error, "post-action hook failed (isolated)");
            }
        }
    }
}

impl std::fmt::Debug for HookEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookEngine")
            .field("hook_count", &self.hooks.len())
            .field("context", &*self.context.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use serde_json::json;
    use warden_core::IntentStatus;

    use super::*;

    struct RecordingHook {
        name: String,
        pre_calls: AtomicUsize,
        post_calls: AtomicUsize,
        fail_pre: bool,
        fail_post: bool,
    }

    impl RecordingHook {
        fn new(name: &str) -> Arc<Self> {
            Arc::new(Self {
                name: name.into(),
                pre_calls: AtomicUsize::new(0),
                post_calls: AtomicUsize::new(0),
                fail_pre: false,
                fail_post: false,
            })
        }

        fn failing_pre(name: &str) -> Arc<Self> {
            Arc::new(Self {
                fail_pre: true,
                ..Self::unwrapped(name)
            })
        }

        fn failing_post(name: &str) -> Arc<Self> {
            Arc::new(Self {
                fail_post: true,
                ..Self::unwrapped(name)
            })
        }

        fn unwrapped(name: &str) -> Self {
            Self {
                name: name.into(),
                pre_calls: AtomicUsize::new(0),
                post_calls: AtomicUsize::new(0),
                fail_pre: false,
                fail_post: false,
            }
        }
    }

    #[async_trait]
    impl Hook for RecordingHook {
        fn name(&self) -> &str {
            &self.name
        }

        async fn pre_action(
            &self,
            _context: &HookContext,
            _input: &ToolInput,
        ) -> Result<(), WardenError> {
            let _ = self.pre_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_pre {
                return Err(WardenError::NoActiveIntent);
            }
            Ok(())
        }

        async fn post_action(
            &self,
            _context: &HookContext,
            _input: &ToolInput,
        ) -> Result<(), WardenError> {
            let _ = self.post_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_post {
                return Err(WardenError::persistence("ledger unavailable"));
            }
            Ok(())
        }
    }

    fn intent(id: &str) -> Intent {
        Intent {
            id: id.into(),
            name: "n".into(),
            status: IntentStatus::InProgress,
            owned_scope: vec![],
            constraints: vec![],
            acceptance_criteria: vec![],
        }
    }

    #[tokio::test]
    async fn empty_chain_allows_everything() {
        let engine = HookEngine::new();
        let result = engine
            .on_pre_tool_execution("write_to_file", &json!({}))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn pre_chain_runs_in_registration_order_until_failure() {
        let first = RecordingHook::new("first");
        let blocker = RecordingHook::failing_pre("blocker");
        let after = RecordingHook::new("after");

        let mut engine = HookEngine::new();
        engine.register(first.clone());
        engine.register(blocker.clone());
        engine.register(after.clone());

        let result = engine
            .on_pre_tool_execution("write_to_file", &json!({}))
            .await;

        assert_matches!(result, Err(WardenError::NoActiveIntent));
        assert_eq!(first.pre_calls.load(Ordering::SeqCst), 1);
        assert_eq!(blocker.pre_calls.load(Ordering::SeqCst), 1);
        // Fail-closed: the chain stops at the first failure.
        assert_eq!(after.pre_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn post_chain_isolates_failures() {
        let failing = RecordingHook::failing_post("failing");
        let after = RecordingHook::new("after");

        let mut engine = HookEngine::new();
        engine.register(failing.clone());
        engine.register(after.clone());

        engine
            .on_post_tool_execution("write_to_file", &json!({}), None)
            .await;

        // Fault-isolated: the failure neither propagates nor stops the chain.
        assert_eq!(failing.post_calls.load(Ordering::SeqCst), 1);
        assert_eq!(after.post_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn set_active_intent_replaces_snapshot() {
        let engine = HookEngine::new();
        engine.set_active_intent(intent("INT-1"));
        engine.set_active_intent(intent("INT-2"));
        assert_eq!(engine.context().active_intent.unwrap().id, "INT-2");
    }

    #[tokio::test]
    async fn set_context_merges_shallowly() {
        let engine = HookEngine::new();
        engine.set_active_intent(intent("INT-1"));
        engine.set_context(ContextPatch::workspace_root("/workspace"));

        let context = engine.context();
        assert_eq!(context.workspace_root, "/workspace");
        assert_eq!(context.active_intent.unwrap().id, "INT-1");
    }

    #[tokio::test]
    async fn chains_see_a_snapshot_not_live_context() {
        struct SnapshotAssertingHook;

        #[async_trait]
        impl Hook for SnapshotAssertingHook {
            fn name(&self) -> &str {
                "snapshot-asserting"
            }
            async fn pre_action(
                &self,
                context: &HookContext,
                _input: &ToolInput,
            ) -> Result<(), WardenError> {
                assert_eq!(context.active_intent.as_ref().unwrap().id, "INT-1");
                Ok(())
            }
        }

        let mut engine = HookEngine::new();
        engine.register(Arc::new(SnapshotAssertingHook));
        engine.set_active_intent(intent("INT-1"));
        let result = engine
            .on_pre_tool_execution("write_to_file", &json!({}))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn debug_reports_hook_count() {
        let mut engine = HookEngine::new();
        engine.register(RecordingHook::new("only"));
        let debug = format!("{engine:?}");
        assert!(debug.contains("HookEngine"));
        assert!(debug.contains("hook_count"));
    }
}
