//! Intent records — operator-declared units of agent work.
//!
//! Intents are authored by the operator in the intents document and are
//! read-only from the gate's perspective: status is inspected, never
//! written. Only an `IN_PROGRESS` intent authorizes mutation.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an [`Intent`].
///
/// The intended workflow is monotonic: `TODO` → `IN_PROGRESS` → `DONE`,
/// driven externally by the operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentStatus {
    /// Declared but not started. Does not authorize mutation.
    #[default]
    #[serde(rename = "TODO")]
    Todo,
    /// Actively being worked. The only status that authorizes mutation.
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    /// Finished. Does not authorize mutation.
    #[serde(rename = "DONE")]
    Done,
}

impl IntentStatus {
    /// Whether an intent in this status may back a mutating tool call.
    #[must_use]
    pub fn authorizes_mutation(self) -> bool {
        matches!(self, Self::InProgress)
    }
}

impl std::fmt::Display for IntentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Todo => write!(f, "TODO"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Done => write!(f, "DONE"),
        }
    }
}

/// A declared unit of agent work carrying an authorization scope and a
/// lifecycle status.
///
/// `owned_scope` is an ordered list of scope patterns (see
/// [`crate::scope`]); duplicates are allowed but redundant. The list is
/// treated as immutable input for the duration of a tool call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Unique identifier (e.g. `INT-1`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Lifecycle status. Missing in the document means `TODO`.
    #[serde(default)]
    pub status: IntentStatus,
    /// Scope patterns authorizing mutation, in declaration order.
    #[serde(default)]
    pub owned_scope: Vec<String>,
    /// Free-text constraints attached by the operator.
    #[serde(default)]
    pub constraints: Vec<String>,
    /// Free-text acceptance criteria attached by the operator.
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
}

impl Intent {
    /// Constraints and acceptance criteria concatenated, order preserved,
    /// duplicates allowed. This is the `spec_refs` payload recorded on
    /// each trace.
    #[must_use]
    pub fn spec_refs(&self) -> Vec<String> {
        self.constraints
            .iter()
            .chain(self.acceptance_criteria.iter())
            .cloned()
            .collect()
    }
}
