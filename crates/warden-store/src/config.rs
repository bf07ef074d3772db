//! Orchestration-directory layout and its environment override.
//!
//! All gate documents live in one directory under the workspace root
//! (`.orchestration` by default). The directory name can be overridden
//! with `WARDEN_ORCHESTRATION_DIR`; invalid values are ignored with a
//! warning, falling back to the default.

/// Default directory name under the workspace root.
pub const DEFAULT_ORCHESTRATION_DIR: &str = ".orchestration";

/// Environment variable overriding the orchestration directory name.
pub const ORCHESTRATION_DIR_ENV: &str = "WARDEN_ORCHESTRATION_DIR";

/// Intents document: top-level `active_intents` list.
pub const ACTIVE_INTENTS_FILE: &str = "active_intents.yaml";

/// Append-only trace ledger, one JSON object per line.
pub const AGENT_TRACE_FILE: &str = "agent_trace.jsonl";

/// Free-form intent map consumed by the context curator.
pub const INTENT_MAP_FILE: &str = "intent_map.md";

/// Free-form technical-context notes consumed by the context curator.
pub const TECHNICAL_CONTEXT_FILE: &str = "technical_context.md";

/// Free-form shared notes consumed by the context curator.
pub const SHARED_BRAIN_FILE: &str = "shared_brain.md";

/// Resolve the orchestration directory name, applying the env override.
#[must_use]
pub fn orchestration_dir_name() -> String {
    resolve_dir_name(std::env::var(ORCHESTRATION_DIR_ENV).ok())
}

/// Pure resolution of the directory name from an optional override.
///
/// Overrides must be a single path segment; anything else is ignored.
#[must_use]
pub fn resolve_dir_name(override_value: Option<String>) -> String {
    match override_value {
        Some(value) if is_valid_dir_name(&value) => value,
        Some(value) => {
            tracing::warn!(
                key = ORCHESTRATION_DIR_ENV,
                value = %value,
                "invalid orchestration dir override, using default"
            );
            DEFAULT_ORCHESTRATION_DIR.to_string()
        }
        None => DEFAULT_ORCHESTRATION_DIR.to_string(),
    }
}

fn is_valid_dir_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_override_uses_default() {
        assert_eq!(resolve_dir_name(None), DEFAULT_ORCHESTRATION_DIR);
    }

    #[test]
    fn valid_override_is_used() {
        assert_eq!(resolve_dir_name(Some(".warden".into())), ".warden");
    }

    #[test]
    fn empty_override_falls_back() {
        assert_eq!(resolve_dir_name(Some(String::new())), DEFAULT_ORCHESTRATION_DIR);
    }

    #[test]
    fn path_separators_fall_back() {
        assert_eq!(
            resolve_dir_name(Some("nested/dir".into())),
            DEFAULT_ORCHESTRATION_DIR
        );
        assert_eq!(
            resolve_dir_name(Some("nested\\dir".into())),
            DEFAULT_ORCHESTRATION_DIR
        );
    }

    #[test]
    fn dot_segments_fall_back() {
        assert_eq!(resolve_dir_name(Some(".".into())), DEFAULT_ORCHESTRATION_DIR);
        assert_eq!(resolve_dir_name(Some("..".into())), DEFAULT_ORCHESTRATION_DIR);
    }
}
