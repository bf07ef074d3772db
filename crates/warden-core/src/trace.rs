//! Trace records — the immutable audit ledger entries.
//!
//! One [`AgentTrace`] is created per completed mutating tool call for
//! which an intent is active. Records are append-only: never updated,
//! never deleted.

use serde::{Deserialize, Serialize};

use crate::constants::{FIX_CONTENT_THRESHOLD, TOOL_APPLY_DIFF, TOOL_WRITE_TO_FILE};
use crate::intent::Intent;

/// Revision string recorded when the best-effort lookup fails.
pub const UNKNOWN_REVISION: &str = "unknown";

/// Heuristic classification of a mutation.
///
/// Approximate by design: classification is derived from the shape of the
/// tool call, not from understanding the change. False classification is
/// acceptable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationClass {
    /// Diff application — assumed to reshape existing code.
    Refactor,
    /// Substantial full-file write.
    Feature,
    /// Short full-file write.
    Fix,
    /// Anything the heuristic cannot place.
    #[default]
    Unknown,
}

impl MutationClass {
    /// Classify a completed mutation from its tool name and content.
    ///
    /// Priority order: `apply_diff` ⇒ refactor; short `write_to_file`
    /// content ⇒ fix; other `write_to_file` content ⇒ feature; anything
    /// else ⇒ unknown.
    #[must_use]
    pub fn classify(tool_name: &str, content: &str) -> Self {
        match tool_name {
            TOOL_APPLY_DIFF => Self::Refactor,
            TOOL_WRITE_TO_FILE if content.chars().count() < FIX_CONTENT_THRESHOLD => Self::Fix,
            TOOL_WRITE_TO_FILE => Self::Feature,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for MutationClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refactor => write!(f, "refactor"),
            Self::Feature => write!(f, "feature"),
            Self::Fix => write!(f, "fix"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Immutable audit record of one completed mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentTrace {
    /// UUID v4 identifier for this record.
    pub id: String,
    /// ISO-8601 timestamp of record creation.
    pub timestamp: String,
    /// Id of the intent that authorized the mutation.
    pub intent_id: String,
    /// Path of the mutated file, as supplied to the tool.
    pub file_path: String,
    /// Lowercase hex SHA-256 of the final file content.
    pub content_hash: String,
    /// Heuristic mutation classification.
    pub mutation_class: MutationClass,
    /// Best-effort revision string, or [`UNKNOWN_REVISION`].
    pub git_rev: String,
    /// The owning intent's constraints and acceptance criteria at the
    /// time of the mutation.
    pub spec_refs: Vec<String>,
}

impl AgentTrace {
    /// Build a trace record for a completed mutation, stamping a fresh
    /// UUID v4 id and the current UTC time.
    #[must_use]
    pub fn record(
        intent: &Intent,
        file_path: impl Into<String>,
        content_hash: String,
        mutation_class: MutationClass,
        git_rev: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            intent_id: intent.id.clone(),
            file_path: file_path.into(),
            content_hash,
            mutation_class,
            git_rev,
            spec_refs: intent.spec_refs(),
        }
    }
}
