//! Error taxonomy for the Warden gate.
//!
//! Every recoverable failure the gate can report is a [`WardenError`]
//! variant. The policy split lives at the call sites:
//!
//! - Tool-surface failures are recovered into human-readable strings and
//!   pushed through the host's result sink.
//! - `NoActiveIntent`, `IntentNotActive`, and `ScopeViolation` raised
//!   inside the pre-action hook chain propagate to abort the pending
//!   mutation (fail-closed).
//! - Persistence failures on the write path are logged and swallowed
//!   (fault-isolated); on the read path they are fail-open and never
//!   surface as errors at all.

use thiserror::Error;

use crate::intent::IntentStatus;

/// Errors reported by the Warden gate.
#[derive(Debug, Error)]
pub enum WardenError {
    /// A required tool parameter was missing or empty.
    #[error("Missing required parameter '{param}' for tool '{tool}'.")]
    MissingParameter {
        /// Tool that was invoked.
        tool: String,
        /// Parameter that was absent.
        param: String,
    },

    /// The requested intent id does not exist in the intents document.
    #[error("Intent '{id}' was not found in the active intents document.")]
    IntentNotFound {
        /// The id that failed to resolve.
        id: String,
    },

    /// The active intent exists but is not in `IN_PROGRESS` status.
    #[error("Active intent '{id}' is not in IN_PROGRESS status (current: {status}).")]
    IntentNotActive {
        /// Id of the active intent.
        id: String,
        /// Its current status.
        status: IntentStatus,
    },

    /// A mutating tool was called with no intent selected.
    #[error("No active intent selected. Use 'select_active_intent' first.")]
    NoActiveIntent,

    /// The target path falls outside the active intent's authorized scope.
    ///
    /// The message lists every authorized scope so a human or agent can
    /// request scope expansion.
    #[error(
        "Scope violation: intent '{intent_id}' is not authorized to edit [{path}]. \
         Authorized scopes: {}. Request scope expansion.",
        .authorized_scopes.join(", ")
    )]
    ScopeViolation {
        /// Id of the active intent.
        intent_id: String,
        /// The path that was rejected.
        path: String,
        /// The full authorized scope list at the time of the check.
        authorized_scopes: Vec<String>,
    },

    /// Storage I/O or serialization failure.
    #[error("persistence failure: {message}")]
    Persistence {
        /// Description of the underlying failure.
        message: String,
    },
}

impl WardenError {
    /// Build a [`WardenError::Persistence`] from any displayable cause.
    #[must_use]
    pub fn persistence(cause: impl std::fmt::Display) -> Self {
        Self::Persistence {
            message: cause.to_string(),
        }
    }
}

/// Result type for gate operations.
pub type Result<T> = std::result::Result<T, WardenError>;
