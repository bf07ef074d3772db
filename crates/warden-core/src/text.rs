//! Text sizing helpers for budget-bounded output.

/// Truncate `s` to at most `max_chars` characters (not bytes).
///
/// Always cuts on a character boundary, so the result is valid UTF-8.
/// Returns the input unchanged when it already fits.
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn exact_length_is_unchanged() {
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn long_input_is_cut_to_limit() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
    }

    #[test]
    fn zero_limit_yields_empty() {
        assert_eq!(truncate_chars("hello", 0), "");
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
    }

    #[test]
    fn never_splits_a_character() {
        let s = "ab語cd";
        for limit in 0..=s.chars().count() {
            let cut = truncate_chars(s, limit);
            assert_eq!(cut.chars().count(), limit);
        }
    }
}
