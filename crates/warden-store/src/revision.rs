//! Best-effort revision lookup.
//!
//! The trace ledger records the workspace revision each mutation landed
//! on. The lookup is an injected capability so the hook chain stays
//! testable without spawning processes, and so a missing or broken `git`
//! can never fail a mutation that already succeeded: every failure mode
//! collapses to the literal [`UNKNOWN_REVISION`].

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use warden_core::trace::UNKNOWN_REVISION;

/// Capability producing the current workspace revision.
#[async_trait]
pub trait RevisionProvider: Send + Sync {
    /// The current revision of `workspace_root`, or [`UNKNOWN_REVISION`].
    ///
    /// Infallible by contract — implementations translate their own
    /// failures into the fallback instead of propagating them.
    async fn current_revision(&self, workspace_root: &Path) -> String;
}

/// Revision lookup backed by `git rev-parse HEAD`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GitRevisionProvider;

#[async_trait]
impl RevisionProvider for GitRevisionProvider {
    async fn current_revision(&self, workspace_root: &Path) -> String {
        let output = tokio::process::Command::new("git")
            .arg("-C")
            .arg(workspace_root)
            .args(["rev-parse", "HEAD"])
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if revision.is_empty() {
                    UNKNOWN_REVISION.to_string()
                } else {
                    revision
                }
            }
            Ok(output) => {
                debug!(
                    status = %output.status,
                    "git rev-parse failed, recording unknown revision"
                );
                UNKNOWN_REVISION.to_string()
            }
            Err(error) => {
                debug!(%error, "could not spawn git, recording unknown revision");
                UNKNOWN_REVISION.to_string()
            }
        }
    }
}

/// Fixed revision for tests and hosts without version control.
#[derive(Clone, Debug)]
pub struct FixedRevision(
    /// The revision string to report.
    pub String,
);

#[async_trait]
impl RevisionProvider for FixedRevision {
    async fn current_revision(&self, _workspace_root: &Path) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_revision_returns_its_value() {
        let provider = FixedRevision("3f2a9c1".into());
        assert_eq!(
            provider.current_revision(Path::new("/anywhere")).await,
            "3f2a9c1"
        );
    }

    #[tokio::test]
    async fn git_outside_a_repository_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let revision = GitRevisionProvider.current_revision(dir.path()).await;
        assert_eq!(revision, UNKNOWN_REVISION);
    }

    #[tokio::test]
    async fn nonexistent_directory_is_unknown() {
        let revision = GitRevisionProvider
            .current_revision(Path::new("/definitely/not/a/real/dir"))
            .await;
        assert_eq!(revision, UNKNOWN_REVISION);
    }
}
