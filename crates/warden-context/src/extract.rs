//! Markdown excerpt helpers.

/// Extract the section introduced by a line containing `heading`.
///
/// The section spans from the heading line up to, but excluding, the next
/// heading line at any level (a line whose trimmed form starts with `#`).
/// Returns `None` when no line contains `heading`.
#[must_use]
pub fn extract_section(content: &str, heading: &str) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.iter().position(|line| line.contains(heading))?;
    let end = lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, line)| line.trim_start().starts_with('#'))
        .map_or(lines.len(), |(index, _)| index);
    Some(lines[start..end].join("\n"))
}

/// The trailing `count` lines of `content`, joined with newlines.
#[must_use]
pub fn tail_lines(content: &str, count: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
