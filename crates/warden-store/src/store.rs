//! `IntentStore` — the orchestration directory's reader and ledger writer.
//!
//! # Read Path (fail-open)
//!
//! The intents document is operator-authored and may be missing, empty,
//! or malformed at any time. All of those read as "no intents" — never an
//! error — so a broken document can only withhold authorization, not
//! crash the gate.
//!
//! # Write Path (ordered, atomic lines)
//!
//! Trace appends go through a store-level async mutex and a handle opened
//! in append mode, and each record is written as one complete line in a
//! single write. Appends observed by later reads appear in issue order,
//! and concurrent in-process writers cannot interleave partial lines.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use warden_core::{AgentTrace, Intent};

use crate::config;
use crate::errors::Result;

/// Shape of the intents document.
#[derive(Debug, Default, Deserialize)]
struct IntentsDocument {
    #[serde(default)]
    active_intents: Vec<Intent>,
}

/// Store rooted at `<workspace_root>/<orchestration dir>`.
#[derive(Debug)]
pub struct IntentStore {
    dir: PathBuf,
    intents_path: PathBuf,
    trace_path: PathBuf,
    intent_map_path: PathBuf,
    technical_context_path: PathBuf,
    shared_brain_path: PathBuf,
    append_lock: Mutex<()>,
}

impl IntentStore {
    /// Create a store for the given workspace root.
    #[must_use]
    pub fn new(workspace_root: impl AsRef<Path>) -> Self {
        let dir = workspace_root
            .as_ref()
            .join(config::orchestration_dir_name());
        Self {
            intents_path: dir.join(config::ACTIVE_INTENTS_FILE),
            trace_path: dir.join(config::AGENT_TRACE_FILE),
            intent_map_path: dir.join(config::INTENT_MAP_FILE),
            technical_context_path: dir.join(config::TECHNICAL_CONTEXT_FILE),
            shared_brain_path: dir.join(config::SHARED_BRAIN_FILE),
            dir,
            append_lock: Mutex::new(()),
        }
    }

    /// The orchestration directory this store is rooted at.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the intent map document.
    #[must_use]
    pub fn intent_map_path(&self) -> &Path {
        &self.intent_map_path
    }

    /// Path of the technical context document.
    #[must_use]
    pub fn technical_context_path(&self) -> &Path {
        &self.technical_context_path
    }

    /// Path of the shared notes document.
    #[must_use]
    pub fn shared_brain_path(&self) -> &Path {
        &self.shared_brain_path
    }

    /// Create the orchestration directory if absent. Idempotent.
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// All intents declared in the intents document.
    ///
    /// Missing, empty, or malformed documents read as an empty list.
    pub async fn active_intents(&self) -> Vec<Intent> {
        if let Err(error) = self.ensure_dir().await {
            debug!(%error, "could not ensure orchestration dir, reading no intents");
            return Vec::new();
        }

        let content = match tokio::fs::read_to_string(&self.intents_path).await {
            Ok(content) => content,
            Err(error) => {
                debug!(path = %self.intents_path.display(), %error, "intents document unreadable");
                return Vec::new();
            }
        };
        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_yaml::from_str::<IntentsDocument>(&content) {
            Ok(document) => document.active_intents,
            Err(error) => {
                debug!(path = %self.intents_path.display(), %error, "intents document malformed");
                Vec::new()
            }
        }
    }

    /// Look up one intent by id. `None` on miss, never an error.
    pub async fn intent(&self, id: &str) -> Option<Intent> {
        self.active_intents()
            .await
            .into_iter()
            .find(|intent| intent.id == id)
    }

    /// Append one trace record to the ledger.
    ///
    /// The record is serialized to a single JSON line and written through
    /// an append-mode handle while the store's append lock is held, then
    /// synced so the audit record survives the process.
    pub async fn log_trace(&self, trace: &AgentTrace) -> Result<()> {
        self.ensure_dir().await?;

        let mut line = serde_json::to_string(trace)?;
        line.push('\n');

        let _guard = self.append_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.trace_path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.sync_data().await?;

        debug!(
            trace_id = %trace.id,
            intent_id = %trace.intent_id,
            file_path = %trace.file_path,
            "trace appended"
        );
        Ok(())
    }

    /// Read the ledger back, in append order.
    ///
    /// Malformed lines are skipped with a note — the ledger is for audit
    /// readers, and one corrupt line must not hide the rest.
    pub async fn traces(&self) -> Vec<AgentTrace> {
        let content = match tokio::fs::read_to_string(&self.trace_path).await {
            Ok(content) => content,
            Err(error) => {
                debug!(path = %self.trace_path.display(), %error, "trace ledger unreadable");
                return Vec::new();
            }
        };

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str::<AgentTrace>(line) {
                Ok(trace) => Some(trace),
                Err(error) => {
                    debug!(%error, "skipping malformed trace line");
                    None
                }
            })
            .collect()
    }
}
