//! Hook trait.
//!
//! A hook exposes optional pre- and post-action members; both default to
//! no-ops, so an implementation overrides only the side it cares about.
//! The engine decides what an error means per side — see the crate docs.

use async_trait::async_trait;

use warden_core::{ToolInput, WardenError};

use crate::context::HookContext;

/// A pluggable callback invoked around a mutating tool call.
#[async_trait]
pub trait Hook: Send + Sync {
    /// Unique name, used in diagnostics.
    fn name(&self) -> &str;

    /// Runs before the tool executes.
    ///
    /// An error here aborts the remaining chain and the pending action.
    async fn pre_action(
        &self,
        _context: &HookContext,
        _input: &ToolInput,
    ) -> Result<(), WardenError> {
        Ok(())
    }

    /// Runs after the tool has executed.
    ///
    /// Errors are caught and logged by the engine, never propagated.
    async fn post_action(
        &self,
        _context: &HookContext,
        _input: &ToolInput,
    ) -> Result<(), WardenError> {
        Ok(())
    }
}
