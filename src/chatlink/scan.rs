//! Locating chat link candidates inside free text.

use once_cell::sync::Lazy;
use regex::Regex;

static CHAT_LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[&[^\[\]\s]*\]").expect("chat link pattern is valid")
});

/// Return every `[&...]` substring of `text`, in order of appearance.
///
/// Candidates are not validated, so a token with characters outside the
/// base64 alphabet is returned too; pass them to
/// [`decode_chat_link`](super::decode_chat_link).
pub fn find_chat_links(text: &str) -> Vec<&str> {
    CHAT_LINK_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_links_in_message() {
        let text = "WTS [&AgGqtgAA] and [&CkYSAAA=], pm me";
        assert_eq!(find_chat_links(text), vec!["[&AgGqtgAA]", "[&CkYSAAA=]"]);
    }

    #[test]
    fn test_no_links() {
        assert!(find_chat_links("nothing to see [here]").is_empty());
        assert!(find_chat_links("").is_empty());
    }

    #[test]
    fn test_malformed_tokens_are_candidates() {
        assert_eq!(
            find_chat_links("[&AgGqtgAA] [&Ag!qt]"),
            vec!["[&AgGqtgAA]", "[&Ag!qt]"]
        );
        // An unterminated token does not swallow the next one
        assert_eq!(find_chat_links("[&Ag [&CkYSAAA=]"), vec!["[&CkYSAAA=]"]);
    }

    #[test]
    fn test_adjacent_links() {
        assert_eq!(
            find_chat_links("[&AgGqtgAA][&AvoJTQAA]"),
            vec!["[&AgGqtgAA]", "[&AvoJTQAA]"]
        );
    }
}
