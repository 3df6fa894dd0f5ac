//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one swappable stage boundary. Implementations are
//! statically dispatched; trait objects work too for dynamic composition.
//! Normalization, segmentation, selection and packaging are fixed stages and
//! have no trait.

use crate::summarizer::assembler;
use crate::summarizer::scorer::HeuristicScorer;
use crate::types::{KeywordSet, ScoredSentence, Segmentation, Sentence};

// ============================================================================
// SentenceScorer — relevance scoring (stage 2)
// ============================================================================

/// Assigns a relevance score to one sentence.
///
/// # Contract
///
/// - **Pure**: the same inputs always produce the same score.
/// - **Independent**: a sentence's score never depends on the scores of
///   other sentences.
pub trait SentenceScorer {
    fn score(
        &self,
        sentence: &Sentence,
        segmentation: &Segmentation,
        keywords: &KeywordSet,
    ) -> u32;

    /// Score every sentence of a segmentation, preserving order.
    fn score_all(&self, segmentation: &Segmentation, keywords: &KeywordSet) -> Vec<ScoredSentence> {
        segmentation
            .sentences
            .iter()
            .map(|s| ScoredSentence::new(s.clone(), self.score(s, segmentation, keywords)))
            .collect()
    }
}

impl SentenceScorer for HeuristicScorer {
    #[inline]
    fn score(
        &self,
        sentence: &Sentence,
        segmentation: &Segmentation,
        keywords: &KeywordSet,
    ) -> u32 {
        HeuristicScorer::score(
            self,
            sentence,
            segmentation.num_sentences(),
            segmentation,
            keywords,
        )
    }
}

/// Scores every sentence zero, leaving selection to position tie-breaks.
///
/// Useful as a baseline: the summary becomes the leading sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadScorer;

impl SentenceScorer for LeadScorer {
    #[inline]
    fn score(&self, _: &Sentence, _: &Segmentation, _: &KeywordSet) -> u32 {
        0
    }
}

// ============================================================================
// Assembler — paragraph regrouping (stage 4)
// ============================================================================

/// Turns selected sentences (in reading order) into output paragraphs.
pub trait Assembler {
    fn assemble(&self, selected: &[ScoredSentence]) -> Vec<String>;
}

/// Default assembler: groups runs of three positions per paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketAssembler;

impl Assembler for BucketAssembler {
    #[inline]
    fn assemble(&self, selected: &[ScoredSentence]) -> Vec<String> {
        assembler::group_paragraphs(selected)
    }
}

/// Puts every selected sentence into a single paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatAssembler;

impl Assembler for FlatAssembler {
    fn assemble(&self, selected: &[ScoredSentence]) -> Vec<String> {
        if selected.is_empty() {
            return Vec::new();
        }
        let joined = selected
            .iter()
            .map(ScoredSentence::text)
            .collect::<Vec<_>>()
            .join(" ");
        vec![joined]
    }
}
