//! # warden-core
//!
//! Foundation types and pure logic for the Warden intent gate.
//!
//! - **Intent**: operator-declared unit of work with an authorization scope
//!   and lifecycle status
//! - **AgentTrace**: immutable audit record of one completed mutation
//! - **Scope matcher**: prefix/exact path authorization (`scope`)
//! - **Content hashing**: lowercase hex SHA-256 (`hash`)
//! - **Error taxonomy**: every recoverable failure the gate can report
//!
//! ## Crate Position
//!
//! Leaf crate. Depended on by: warden-store, warden-hooks,
//! warden-context, warden-tools.

#![deny(unsafe_code)]

pub mod constants;
pub mod errors;
pub mod hash;
pub mod input;
pub mod intent;
pub mod scope;
pub mod text;
pub mod tools;
pub mod trace;

pub use errors::{Result, WardenError};
pub use input::ToolInput;
pub use intent::{Intent, IntentStatus};
pub use trace::{AgentTrace, MutationClass};
