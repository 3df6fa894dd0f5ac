//! Whitespace normalization

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every run of whitespace (newlines included) into a single space
/// and trim both ends.
pub fn normalize(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_runs() {
        assert_eq!(normalize("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn test_trims() {
        assert_eq!(normalize("  \n hello world \r\n"), "hello world");
    }

    #[test]
    fn test_unicode_whitespace() {
        assert_eq!(normalize("a\u{00A0}\u{2003}b"), "a b");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["", "x", "  a \n\n b  ", "one.\n\ntwo!  three?", "\u{3000}z\u{3000}"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
