//! Scope matching — decides whether a path is authorized under a set of
//! scope patterns.
//!
//! The pattern language is deliberately tiny: a pattern either matches a
//! path exactly, or — when it ends with the literal suffix `/**` — matches
//! any path starting with the prefix before the `/**`. There are no
//! mid-path wildcards and no `?`/`*` single-segment matching; this is not
//! a glob engine.

/// Recursive-directory wildcard suffix.
pub const RECURSIVE_WILDCARD: &str = "/**";

/// Whether `path` is authorized under `patterns`.
///
/// Both sides are normalized to forward slashes before comparison. A
/// single matching pattern authorizes regardless of the others (logical
/// OR, short-circuit). An empty pattern list authorizes nothing — the
/// fail-closed default.
#[must_use]
pub fn authorized(path: &str, patterns: &[String]) -> bool {
    let path = normalize_separators(path);
    patterns.iter().any(|pattern| matches(&path, pattern))
}

/// Whether a single (already normalized) path matches one pattern.
fn matches(path: &str, pattern: &str) -> bool {
    let pattern = normalize_separators(pattern);
    match pattern.strip_suffix(RECURSIVE_WILDCARD) {
        Some(prefix) => path.starts_with(prefix),
        None => path == pattern,
    }
}

/// Convert backslash separators to forward slashes.
fn normalize_separators(s: &str) -> String {
    s.replace('\\', "/")
}
