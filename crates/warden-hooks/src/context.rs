//! Engine context — the active intent and workspace root.

use warden_core::Intent;

/// Shared state the hook chain runs against.
///
/// One context lives inside the engine for the life of the process. The
/// active intent is a snapshot of the selected record, replaced wholesale
/// on each selection; at most one intent is active at a time.
#[derive(Clone, Debug, Default)]
pub struct HookContext {
    /// Snapshot of the currently selected intent, if any.
    pub active_intent: Option<Intent>,
    /// Absolute workspace root. Empty until the host sets it.
    pub workspace_root: String,
}

impl HookContext {
    /// Whether a workspace root has been set.
    #[must_use]
    pub fn has_workspace_root(&self) -> bool {
        !self.workspace_root.is_empty()
    }
}

/// Partial context update. `None` fields leave the context unchanged.
#[derive(Clone, Debug, Default)]
pub struct ContextPatch {
    /// New workspace root, if being set.
    pub workspace_root: Option<String>,
    /// New active intent snapshot, if being set.
    pub active_intent: Option<Intent>,
}

impl ContextPatch {
    /// Patch that sets only the workspace root.
    #[must_use]
    pub fn workspace_root(root: impl Into<String>) -> Self {
        Self {
            workspace_root: Some(root.into()),
            active_intent: None,
        }
    }

    /// Apply this patch to a context (shallow override).
    pub(crate) fn apply(self, context: &mut HookContext) {
        if let Some(root) = self.workspace_root {
            context.workspace_root = root;
        }
        if let Some(intent) = self.active_intent {
            context.active_intent = Some(intent);
        }
    }
}
