//! # warden-store
//!
//! Persistence for the Warden intent gate.
//!
//! - **`IntentStore`**: reads the operator-authored intents document
//!   (fail-open) and appends to the append-only trace ledger
//!   (fault-isolated for callers, ordered and atomic per line).
//! - **`RevisionProvider`**: injected best-effort revision lookup; the
//!   process-backed implementation shells out to `git rev-parse HEAD`.
//!
//! ## Crate Position
//!
//! Depends on: warden-core.
//! Depended on by: warden-hooks, warden-context, warden-tools.

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod revision;
pub mod store;

pub use errors::{Result, StoreError};
pub use revision::{FixedRevision, GitRevisionProvider, RevisionProvider};
pub use store::IntentStore;
