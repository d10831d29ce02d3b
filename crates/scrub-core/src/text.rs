//! Shared text helpers for name comparison.

use std::collections::BTreeSet;

/// Strip a trailing space-separated stop-word token from `value`.
///
/// Returns `None` when the value has no trailing stop word: single tokens
/// and values whose last token is not in the set are left alone. The match
/// is case-insensitive; the surviving prefix keeps its original casing.
pub fn strip_trailing_stop_word(value: &str, stop_words: &BTreeSet<String>) -> Option<String> {
    let (prefix, last) = value.rsplit_once(' ')?;
    if stop_words.contains(&last.to_lowercase()) {
        Some(prefix.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_words(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|word| (*word).to_string()).collect()
    }

    #[test]
    fn strips_trailing_stop_word_case_insensitively() {
        let words = stop_words(&["vo", "shg"]);
        assert_eq!(
            strip_trailing_stop_word("North Hamlet VO", &words),
            Some("North Hamlet".to_string())
        );
        assert_eq!(
            strip_trailing_stop_word("Jyoti shg", &words),
            Some("Jyoti".to_string())
        );
    }

    #[test]
    fn leaves_non_stop_word_tails_alone() {
        let words = stop_words(&["vo"]);
        assert_eq!(strip_trailing_stop_word("North Hamlet", &words), None);
    }

    #[test]
    fn single_token_is_never_stripped() {
        let words = stop_words(&["vo"]);
        assert_eq!(strip_trailing_stop_word("vo", &words), None);
    }
}
