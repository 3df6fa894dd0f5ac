//! Paragraph and sentence segmentation
//!
//! Paragraphs are split on blank lines in the raw text first; each paragraph
//! is then normalized on its own. Splitting after a global normalize would
//! lose every paragraph boundary.

use regex::Regex;
use std::sync::LazyLock;

use super::normalize::normalize;
use crate::types::{Segmentation, Sentence};

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// One or more non-terminators followed by one or more of `.`, `!`, `?`.
static SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Split `raw` into normalized paragraphs and flattened sentences.
///
/// Text after the last terminator of a paragraph is dropped. Positions
/// increase across paragraphs in encounter order.
pub fn segment(raw: &str) -> Segmentation {
    let paragraphs: Vec<String> = split_paragraphs(raw);

    let mut sentences = Vec::new();
    for paragraph in &paragraphs {
        for m in SENTENCE.find_iter(paragraph) {
            let text = m.as_str().trim();
            if text.is_empty() {
                continue;
            }
            let position = sentences.len();
            sentences.push(Sentence::new(text, position));
        }
    }

    Segmentation {
        paragraphs,
        sentences,
    }
}

/// Split on blank lines and normalize each paragraph, skipping empty ones.
pub fn split_paragraphs(raw: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(raw)
        .map(normalize)
        .filter(|p| !p.is_empty())
        .collect()
}
