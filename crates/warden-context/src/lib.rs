//! # warden-context
//!
//! On-demand assembly of a bounded "curated context" bundle: a structured
//! view of one intent plus best-effort excerpts from the auxiliary
//! documents, truncated to a token budget. Independent of the hook chain.
//!
//! ## Crate Position
//!
//! Depends on: warden-core, warden-store.
//! Depended on by: warden-tools.

#![deny(unsafe_code)]

pub mod curator;
pub mod extract;

pub use curator::ContextCurator;
