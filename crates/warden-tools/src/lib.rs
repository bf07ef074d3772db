//! # warden-tools
//!
//! The tool surface the host dispatch framework consumes: two operations,
//! `select_active_intent` and `get_curated_context`, both string-in /
//! string-out from the gate's perspective.
//!
//! Host collaborators — the result sink, the labeled error sink, and the
//! missing-parameter message constructor — are modeled as the
//! [`ToolCallbacks`] trait. The gate calls them but does not define them.
//!
//! Recoverable failures (missing parameter, unknown intent) are turned
//! into human-readable strings and pushed through the result sink; they
//! never unwind past the tool boundary. Unexpected failures returned by a
//! tool are routed to the error sink by [`ToolRegistry::dispatch`] under
//! the tool's operation label.
//!
//! ## Crate Position
//!
//! Top layer. Depends on: warden-core, warden-store, warden-hooks,
//! warden-context.

#![deny(unsafe_code)]

pub mod curated_context;
pub mod registry;
pub mod select_intent;
pub mod traits;

pub use curated_context::GetCuratedContextTool;
pub use registry::ToolRegistry;
pub use select_intent::SelectActiveIntentTool;
pub use traits::{ToolCallbacks, ToolContext, WardenTool};
