//! # warden-hooks
//!
//! The hook-chain engine around mutating tool calls.
//!
//! ## Execution Model
//!
//! Hooks run in registration order, strictly sequentially, on both sides
//! of a tool call. The two sides have opposite failure contracts:
//!
//! - **Pre-action chain is fail-closed**: the first hook error aborts the
//!   remaining chain *and the pending tool action*. An unauthorized write
//!   must never reach disk.
//! - **Post-action chain is fault-isolated**: every hook error is caught
//!   and logged, never propagated. A trace-log failure cannot undo or
//!   flag a mutation that already succeeded.
//!
//! This asymmetry is the engine's central design contract.
//!
//! ## Shipped Hooks
//!
//! | Hook | Side | Purpose |
//! |------|------|---------|
//! | [`IntentValidationHook`] | pre | active-intent, status, and scope checks |
//! | [`TraceLoggerHook`] | post | hash, classify, and append the audit trace |

#![deny(unsafe_code)]

pub mod context;
pub mod engine;
pub mod hook;
pub mod trace_logger;
pub mod validation;

pub use context::{ContextPatch, HookContext};
pub use engine::HookEngine;
pub use hook::Hook;
pub use trace_logger::TraceLoggerHook;
pub use validation::IntentValidationHook;
