//! Heuristic sentence scoring
//!
//! Every rule is independent and additive: a sentence collects points from
//! each rule that applies. Scores depend only on the sentence, its position,
//! the source paragraphs and the keyword set.

use crate::nlp::phrases::PhraseLexicon;
use crate::types::{KeywordSet, Segmentation, Sentence};

/// Points awarded by each scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// First sentence of the document
    pub first_sentence: u32,
    /// Last sentence of the document
    pub last_sentence: u32,
    /// Sentence that opens a source paragraph
    pub paragraph_opener: u32,
    /// Per distinct keyword contained in the sentence
    pub keyword: u32,
    /// Per distinct trigger phrase contained in the sentence
    pub phrase: u32,
    /// Word count strictly inside the length band
    pub length_band: u32,
    /// Percent sign, digit, currency marker or decimal-comma numeral
    pub numeric: u32,
    /// Lower bound of the length band (exclusive)
    pub min_words: usize,
    /// Upper bound of the length band (exclusive)
    pub max_words: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            first_sentence: 3,
            last_sentence: 2,
            paragraph_opener: 2,
            keyword: 3,
            phrase: 2,
            length_band: 1,
            numeric: 2,
            min_words: 5,
            max_words: 30,
        }
    }
}

/// Per-rule contribution to a sentence score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub first_sentence: u32,
    pub last_sentence: u32,
    pub paragraph_opener: u32,
    pub keywords: u32,
    pub phrases: u32,
    pub length_band: u32,
    pub numeric: u32,
}

impl ScoreBreakdown {
    /// Sum of all rule contributions
    pub fn total(&self) -> u32 {
        self.first_sentence
            + self.last_sentence
            + self.paragraph_opener
            + self.keywords
            + self.phrases
            + self.length_band
            + self.numeric
    }
}

/// Additive rule-based sentence scorer
#[derive(Debug, Clone)]
pub struct HeuristicScorer {
    weights: ScoringWeights,
    lexicon: PhraseLexicon,
    /// Case-sensitive currency markers
    currency_markers: Vec<String>,
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicScorer {
    /// Create a scorer with default weights, the built-in lexicon and the
    /// `Rp` currency marker
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
            lexicon: PhraseLexicon::default(),
            currency_markers: vec!["Rp".to_string()],
        }
    }

    /// Replace the trigger-phrase lexicon
    pub fn with_lexicon(mut self, lexicon: PhraseLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Replace the rule weights
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the currency markers
    pub fn with_currency_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.currency_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn lexicon(&self) -> &PhraseLexicon {
        &self.lexicon
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a sentence
    pub fn score(
        &self,
        sentence: &Sentence,
        total_sentences: usize,
        segmentation: &Segmentation,
        keywords: &KeywordSet,
    ) -> u32 {
        self.breakdown(sentence, total_sentences, segmentation, keywords)
            .total()
    }

    /// Score a sentence, keeping each rule's contribution separate
    pub fn breakdown(
        &self,
        sentence: &Sentence,
        total_sentences: usize,
        segmentation: &Segmentation,
        keywords: &KeywordSet,
    ) -> ScoreBreakdown {
        let w = &self.weights;
        let text = sentence.text.as_str();
        let lowered = text.to_lowercase();
        let mut out = ScoreBreakdown::default();

        if sentence.position == 0 {
            out.first_sentence = w.first_sentence;
        }
        if total_sentences > 0 && sentence.position == total_sentences - 1 {
            out.last_sentence = w.last_sentence;
        }
        if segmentation.opens_paragraph(text) {
            out.paragraph_opener = w.paragraph_opener;
        }

        let keyword_hits = keywords.iter().filter(|k| lowered.contains(*k)).count() as u32;
        out.keywords = keyword_hits * w.keyword;

        let phrase_hits = self.lexicon.count_matches(&lowered) as u32;
        out.phrases = phrase_hits * w.phrase;

        let words = sentence.word_count();
        if words > w.min_words && words < w.max_words {
            out.length_band = w.length_band;
        }

        if self.has_numeric_content(text) {
            out.numeric = w.numeric;
        }

        out
    }

    /// Percent sign, any ASCII digit, a currency marker, or digit-comma-digit
    fn has_numeric_content(&self, text: &str) -> bool {
        text.contains('%')
            || text.bytes().any(|b| b.is_ascii_digit())
            || self.currency_markers.iter().any(|m| text.contains(m.as_str()))
            || has_decimal_comma(text)
    }
}

/// True if `text` contains a digit, a comma, then a digit
fn has_decimal_comma(text: &str) -> bool {
    text.as_bytes()
        .windows(3)
        .any(|w| w[0].is_ascii_digit() && w[1] == b',' && w[2].is_ascii_digit())
}
