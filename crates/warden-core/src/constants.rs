//! Package-level constants: tool-name sets and sizing heuristics.

/// Current version of the Warden gate (sourced from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name.
pub const NAME: &str = "warden";

/// Tool that writes a complete file.
pub const TOOL_WRITE_TO_FILE: &str = "write_to_file";

/// Tool that edits a file in place.
pub const TOOL_EDIT: &str = "edit";

/// Tool that applies a unified diff.
pub const TOOL_APPLY_DIFF: &str = "apply_diff";

/// Tools that mutate the workspace and therefore require an authorized
/// intent before they may run. Fixed set, not configurable.
pub const MUTATING_TOOLS: &[&str] = &[TOOL_WRITE_TO_FILE, TOOL_EDIT, TOOL_APPLY_DIFF];

/// Tools whose completed mutations are recorded in the trace ledger.
pub const TRACED_TOOLS: &[&str] = &[TOOL_WRITE_TO_FILE, TOOL_APPLY_DIFF];

/// Whether a tool call must pass intent validation before executing.
#[must_use]
pub fn is_mutating_tool(tool_name: &str) -> bool {
    MUTATING_TOOLS.contains(&tool_name)
}

/// Whether a completed tool call produces a trace record.
#[must_use]
pub fn is_traced_tool(tool_name: &str) -> bool {
    TRACED_TOOLS.contains(&tool_name)
}

/// Default token budget for curated context assembly.
pub const DEFAULT_TOKEN_BUDGET: usize = 2000;

/// Characters-per-token heuristic used to convert a token budget into a
/// character limit.
pub const CHARS_PER_TOKEN: usize = 4;

/// Content shorter than this many characters classifies a full-file write
/// as a `fix` rather than a `feature`.
pub const FIX_CONTENT_THRESHOLD: usize = 50;
