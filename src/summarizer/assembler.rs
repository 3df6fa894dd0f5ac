//! Paragraph reassembly
//!
//! Selected sentences are regrouped by their synthetic bucket
//! (`position / 3`), not by the source paragraph they came from. This keeps
//! output paragraphs short and predictable regardless of input layout.

use crate::types::ScoredSentence;

/// Separator placed between output paragraphs
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Group consecutive sentences sharing a bucket into paragraphs.
///
/// A new paragraph starts whenever the bucket differs from the previous
/// sentence's bucket. Sentences inside a paragraph are joined by one space.
pub fn group_paragraphs(selected: &[ScoredSentence]) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut last_bucket = None;

    for sentence in selected {
        let bucket = sentence.paragraph_bucket();
        if last_bucket != Some(bucket) {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
            last_bucket = Some(bucket);
        }
        current.push(sentence.text());
    }

    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

/// Join paragraphs with a blank line
pub fn serialize(paragraphs: &[String]) -> String {
    paragraphs.join(PARAGRAPH_SEPARATOR)
}
