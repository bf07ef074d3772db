//! Curated-context assembly.
//!
//! Everything beyond the intent block itself is best-effort: a missing or
//! unreadable auxiliary document silently drops its section. The final
//! text is truncated to the token budget using a fixed 4-characters-per-
//! token heuristic.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use warden_core::constants::CHARS_PER_TOKEN;
use warden_core::text::truncate_chars;
use warden_store::IntentStore;

use crate::extract::{extract_section, tail_lines};

/// Marker appended when the bundle was cut to fit the budget.
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Heading of the vocabulary subsection extracted from the shared notes.
pub const VOCABULARY_HEADING: &str = "## 🧠 Project Vocabulary";

/// How many trailing technical-context lines stand in for "recent
/// decisions".
pub const RECENT_DECISION_LINES: usize = 20;

/// Assembles bounded context bundles against an [`IntentStore`].
#[derive(Debug)]
pub struct ContextCurator {
    store: IntentStore,
}

impl ContextCurator {
    /// Create a curator over the given store.
    #[must_use]
    pub fn new(store: IntentStore) -> Self {
        Self { store }
    }

    /// Assemble the curated context for one intent.
    ///
    /// An unknown id yields a short error-tagged block, not an error. The
    /// result never exceeds `token_budget * 4` characters plus the
    /// truncation marker.
    pub async fn curated_context(&self, intent_id: &str, token_budget: usize) -> String {
        let Some(intent) = self.store.intent(intent_id).await else {
            return format!("<error>Intent '{intent_id}' not found.</error>");
        };

        let mut context = String::from("<intent_context>\n");
        context.push_str("  <active_intent>\n");
        let _ = writeln!(context, "    <id>{}</id>", intent.id);
        let _ = writeln!(context, "    <status>{}</status>", intent.status);
        push_list_block(&mut context, "files", &intent.owned_scope);
        push_list_block(&mut context, "constraints", &intent.constraints);
        context.push_str("  </active_intent>\n");

        if let Some(section) =
            document_section(self.store.intent_map_path(), &format!("## {intent_id}")).await
        {
            let _ = writeln!(context, "  <spatial_map>\n{section}\n  </spatial_map>");
        }

        if let Ok(notes) = tokio::fs::read_to_string(self.store.technical_context_path()).await {
            let recent = tail_lines(&notes, RECENT_DECISION_LINES);
            let _ = writeln!(
                context,
                "  <technical_context>\n{recent}\n  </technical_context>"
            );
        }

        if let Some(vocabulary) =
            document_section(self.store.shared_brain_path(), VOCABULARY_HEADING).await
        {
            let _ = writeln!(context, "  <shared_memory>\n{vocabulary}\n  </shared_memory>");
        }

        context.push_str("</intent_context>");

        enforce_budget(context, token_budget)
    }
}

/// Best-effort read-and-extract of one document section.
async fn document_section(path: &Path, heading: &str) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => extract_section(&content, heading),
        Err(error) => {
            debug!(path = %path.display(), %error, "auxiliary document unavailable");
            None
        }
    }
}

/// Render `    <name>` / indented `- item` lines / `    </name>`.
fn push_list_block(out: &mut String, name: &str, items: &[String]) {
    let _ = writeln!(out, "    <{name}>");
    for item in items {
        let _ = writeln!(out, "      - {item}");
    }
    let _ = writeln!(out, "    </{name}>");
}

/// Cut `context` to the budget, marking the cut when one happens.
fn enforce_budget(context: String, token_budget: usize) -> String {
    let max_chars = token_budget * CHARS_PER_TOKEN;
    let truncated = truncate_chars(&context, max_chars);
    if truncated.len() == context.len() {
        context
    } else {
        format!("{truncated}{TRUNCATION_MARKER}")
    }
}

#[cfg(test)]
mod tests {
    use warden_core::constants::DEFAULT_TOKEN_BUDGET;

    use super::*;

    async fn workspace_with(
        intents: &str,
        documents: &[(&str, &str)],
    ) -> (tempfile::TempDir, ContextCurator) {
        let workspace = tempfile::tempdir().unwrap();
        let store = IntentStore::new(workspace.path());
        store.ensure_dir().await.unwrap();
        tokio::fs::write(store.dir().join("active_intents.yaml"), intents)
            .await
            .unwrap();
        for (file_name, content) in documents {
            tokio::fs::write(store.dir().join(file_name), content)
                .await
                .unwrap();
        }
        (workspace, ContextCurator::new(store))
    }

    const INTENTS: &str = r"
active_intents:
  - id: INT-1
    name: Harden the hook chain
    status: IN_PROGRESS
    owned_scope:
      - src/hooks/**
    constraints:
      - no new dependencies
";

    #[tokio::test]
    async fn unknown_intent_yields_error_block() {
        let (_workspace, curator) = workspace_with(INTENTS, &[]).await;
        let context = curator.curated_context("INT-404", DEFAULT_TOKEN_BUDGET).await;
        assert_eq!(context, "<error>Intent 'INT-404' not found.</error>");
    }

    #[tokio::test]
    async fn intent_block_carries_id_status_scope_and_constraints() {
        let (_workspace, curator) = workspace_with(INTENTS, &[]).await;
        let context = curator.curated_context("INT-1", DEFAULT_TOKEN_BUDGET).await;
        assert!(context.starts_with("<intent_context>"));
        assert!(context.ends_with("</intent_context>"));
        assert!(context.contains("<id>INT-1</id>"));
        assert!(context.contains("<status>IN_PROGRESS</status>"));
        assert!(context.contains("      - src/hooks/**"));
        assert!(context.contains("      - no new dependencies"));
    }

    #[tokio::test]
    async fn missing_documents_drop_their_sections() {
        let (_workspace, curator) = workspace_with(INTENTS, &[]).await;
        let context = curator.curated_context("INT-1", DEFAULT_TOKEN_BUDGET).await;
        assert!(!context.contains("<spatial_map>"));
        assert!(!context.contains("<technical_context>"));
        assert!(!context.contains("<shared_memory>"));
    }

    #[tokio::test]
    async fn intent_map_section_is_extracted_by_id() {
        let map = "# Map\n\n## INT-1\nhook chain territory\n\n## INT-2\nelsewhere\n";
        let (_workspace, curator) = workspace_with(INTENTS, &[("intent_map.md", map)]).await;
        let context = curator.curated_context("INT-1", DEFAULT_TOKEN_BUDGET).await;
        assert!(context.contains("<spatial_map>"));
        assert!(context.contains("hook chain territory"));
        assert!(!context.contains("elsewhere"));
    }

    #[tokio::test]
    async fn technical_context_keeps_only_the_tail() {
        let mut notes = String::new();
        for i in 0..40 {
            notes.push_str(&format!("decision {i}\n"));
        }
        let (_workspace, curator) =
            workspace_with(INTENTS, &[("technical_context.md", &notes)]).await;
        let context = curator.curated_context("INT-1", DEFAULT_TOKEN_BUDGET).await;
        assert!(context.contains("<technical_context>"));
        assert!(context.contains("decision 39"));
        assert!(context.contains("decision 20"));
        assert!(!context.contains("decision 19\n"));
    }

    #[tokio::test]
    async fn vocabulary_section_is_extracted() {
        let brain = format!("# Notes\n\n{VOCABULARY_HEADING}\n- gate: the warden\n\n## Other\nx\n");
        let (_workspace, curator) = workspace_with(INTENTS, &[("shared_brain.md", &brain)]).await;
        let context = curator.curated_context("INT-1", DEFAULT_TOKEN_BUDGET).await;
        assert!(context.contains("<shared_memory>"));
        assert!(context.contains("gate: the warden"));
        assert!(!context.contains("## Other"));
    }

    #[tokio::test]
    async fn output_respects_the_budget() {
        let map = format!("## INT-1\n{}\n", "very long mapping line\n".repeat(400));
        let (_workspace, curator) = workspace_with(INTENTS, &[("intent_map.md", &map)]).await;

        let budget = 100;
        let context = curator.curated_context("INT-1", budget).await;
        assert!(context.ends_with(TRUNCATION_MARKER));
        let max_len = budget * CHARS_PER_TOKEN + TRUNCATION_MARKER.chars().count();
        assert!(context.chars().count() <= max_len);
    }

    #[tokio::test]
    async fn small_output_is_not_truncated() {
        let (_workspace, curator) = workspace_with(INTENTS, &[]).await;
        let context = curator.curated_context("INT-1", DEFAULT_TOKEN_BUDGET).await;
        assert!(!context.contains(TRUNCATION_MARKER));
    }
}
