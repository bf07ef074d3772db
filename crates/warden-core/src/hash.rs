//! Content hashing for trace records.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest of `content`.
///
/// Deterministic and idempotent: identical content always yields the same
/// digest.
#[must_use]
pub fn content_hash(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("{digest:x}")
}
