//! Core data types shared across the summarization stages.

use serde::{Deserialize, Serialize};

/// Default share of sentences retained when no percentage is given.
pub const DEFAULT_PERCENTAGE: u8 = 50;

/// Number of consecutive sentences grouped into one output paragraph.
pub const SENTENCES_PER_BUCKET: usize = 3;

/// A sentence produced by the segmenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Trimmed sentence text, terminators included
    pub text: String,
    /// Zero-based index in the flattened sentence sequence
    pub position: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// Synthetic output paragraph this sentence is assembled into.
    ///
    /// Buckets are runs of three sentences in flattened order and ignore the
    /// source paragraph breaks.
    #[inline]
    pub fn paragraph_bucket(&self) -> usize {
        self.position / SENTENCES_PER_BUCKET
    }

    /// Whitespace-delimited token count
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A sentence paired with its heuristic relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: u32,
}

impl ScoredSentence {
    pub fn new(sentence: Sentence, score: u32) -> Self {
        Self { sentence, score }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.sentence.position
    }

    #[inline]
    pub fn paragraph_bucket(&self) -> usize {
        self.sentence.paragraph_bucket()
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.sentence.text
    }
}

/// Output of the segmenter: source paragraphs and the flattened sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Whitespace-collapsed source paragraphs, used for opener detection
    pub paragraphs: Vec<String>,
    /// Sentences in encounter order, positions `0..len`
    pub sentences: Vec<Sentence>,
}

impl Segmentation {
    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// True if some source paragraph starts with exactly this sentence text.
    pub fn opens_paragraph(&self, sentence: &str) -> bool {
        self.paragraphs.iter().any(|p| p.starts_with(sentence))
    }
}

/// Requested summary size as a share of the original sentence count.
///
/// Always within `1..=100`; construction clamps instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const MIN: Percentage = Percentage(1);
    pub const MAX: Percentage = Percentage(100);

    /// Create a percentage, clamping into `1..=100`
    pub fn new(value: i64) -> Self {
        Self(value.clamp(1, 100) as u8)
    }

    /// Returns true if `value` would be altered by clamping
    pub fn is_out_of_range(value: i64) -> bool {
        !(1..=100).contains(&value)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of sentences to keep out of `total`.
    ///
    /// `max(1, ceil(total * p / 100))`, never more than `total`; zero when
    /// there is nothing to select.
    pub fn target_count(self, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        let wanted = (total * self.0 as usize).div_ceil(100);
        wanted.clamp(1, total)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self(DEFAULT_PERCENTAGE)
    }
}

impl From<i64> for Percentage {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, lower-cased user keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Create an empty keyword set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a comma-separated keyword string.
    ///
    /// Entries are lower-cased and trimmed; blank entries are dropped and
    /// repeated entries keep their first occurrence.
    pub fn parse(input: &str) -> Self {
        Self::from_list(input.split(','))
    }

    /// Build from individual keywords, normalizing as [`KeywordSet::parse`]
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && !keywords.contains(&word) {
                keywords.push(word);
            }
        }
        Self { keywords }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Comma-joined form used when echoing keywords back to the user
    pub fn display(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Final summary for one document.
///
/// Serialized as a flat record of its four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Selected sentences, paragraphs separated by a blank line
    pub summary_text: String,
    pub original_sentence_count: usize,
    pub summary_sentence_count: usize,
    pub percentage: u8,
}

impl SummaryResult {
    /// True when no sentence survived selection
    pub fn is_empty(&self) -> bool {
        self.summary_text.is_empty()
    }
}

/// A document whose text has already been extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_bucket_groups_by_three() {
        let buckets: Vec<_> = (0..7)
            .map(|i| Sentence::new("x.", i).paragraph_bucket())
            .collect();
        assert_eq!(buckets, vec![0, 0, 0, 1, 1, 1, 2]);
    }

    #[test]
    fn test_percentage_clamps() {
        assert_eq!(Percentage::new(0).get(), 1);
        assert_eq!(Percentage::new(-20).get(), 1);
        assert_eq!(Percentage::new(250).get(), 100);
        assert_eq!(Percentage::new(42).get(), 42);
        assert_eq!(Percentage::default().get(), 50);
        assert!(Percentage::is_out_of_range(101));
        assert!(!Percentage::is_out_of_range(100));
    }

    #[test]
    fn test_target_count() {
        assert_eq!(Percentage::new(50).target_count(4), 2);
        assert_eq!(Percentage::new(50).target_count(5), 3);
        assert_eq!(Percentage::new(1).target_count(3), 1);
        assert_eq!(Percentage::new(100).target_count(9), 9);
        assert_eq!(Percentage::new(30).target_count(0), 0);
    }

    #[test]
    fn test_percentage_deserializes_with_clamp() {
        let p: Percentage = serde_json::from_str("140").unwrap();
        assert_eq!(p.get(), 100);
        assert_eq!(serde_json::to_string(&p).unwrap(), "100");
    }

    #[test]
    fn test_keyword_parse() {
        let kw = KeywordSet::parse(" Revenue , PROFIT,,revenue ");
        let collected: Vec<_> = kw.iter().collect();
        assert_eq!(collected, vec!["revenue", "profit"]);
        assert_eq!(kw.display(), "revenue, profit");
    }

    #[test]
    fn test_keyword_parse_blank_input() {
        assert!(KeywordSet::parse("").is_empty());
        assert!(KeywordSet::parse("   ").is_empty());
        assert!(KeywordSet::parse(" , ,").is_empty());
    }

    #[test]
    fn test_opens_paragraph() {
        let seg = Segmentation {
            paragraphs: vec!["First one. Second one.".to_string()],
            sentences: vec![],
        };
        assert!(seg.opens_paragraph("First one."));
        assert!(!seg.opens_paragraph("Second one."));
    }

    #[test]
    fn test_summary_result_flat_json() {
        let result = SummaryResult {
            summary_text: "A.".to_string(),
            original_sentence_count: 3,
            summary_sentence_count: 1,
            percentage: 30,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["summary_text"], "A.");
        assert_eq!(value["original_sentence_count"], 3);
        assert_eq!(value["summary_sentence_count"], 1);
        assert_eq!(value["percentage"], 30);
    }
}
