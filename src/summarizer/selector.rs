//! Quota-based sentence selection
//!
//! Keeps the highest-scoring share of sentences and hands them on in reading
//! order.

use crate::types::{Percentage, ScoredSentence};

/// Configuration for sentence selection
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorConfig {
    /// Share of the original sentences to keep
    pub percentage: Percentage,
}

/// Quota-based sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the share of sentences to keep
    pub fn with_percentage(mut self, percentage: Percentage) -> Self {
        self.config.percentage = percentage;
        self
    }

    pub fn percentage(&self) -> Percentage {
        self.config.percentage
    }

    /// Number of sentences that will be kept out of `total`
    pub fn target_count(&self, total: usize) -> usize {
        self.config.percentage.target_count(total)
    }

    /// Select the top-scoring sentences.
    ///
    /// Ranking is by score descending; equal scores keep the earlier position
    /// first. The returned sentences are sorted by position.
    pub fn select(&self, sentences: &[ScoredSentence]) -> Vec<ScoredSentence> {
        let target = self.target_count(sentences.len());
        if target == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<&ScoredSentence> = sentences.iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.position().cmp(&b.position()))
        });

        let mut selected: Vec<ScoredSentence> = ranked.into_iter().take(target).cloned().collect();

        // Sort by document order
        selected.sort_by_key(|s| s.position());
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;

    fn scored(scores: &[u32]) -> Vec<ScoredSentence> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| ScoredSentence::new(Sentence::new(format!("S{i}."), i), s))
            .collect()
    }

    fn positions(selected: &[ScoredSentence]) -> Vec<usize> {
        selected.iter().map(|s| s.position()).collect()
    }

    #[test]
    fn test_selects_top_scores_in_document_order() {
        let selector = SentenceSelector::new().with_percentage(Percentage::new(50));
        let result = selector.select(&scored(&[7, 0, 0, 4]));

        assert_eq!(positions(&result), vec![0, 3]);
    }

    #[test]
    fn test_ties_prefer_earlier_position() {
        let selector = SentenceSelector::new().with_percentage(Percentage::new(40));
        let result = selector.select(&scored(&[1, 5, 2, 5, 5]));

        assert_eq!(positions(&result), vec![1, 3]);
    }

    #[test]
    fn test_document_order() {
        let selector = SentenceSelector::new().with_percentage(Percentage::new(60));
        let result = selector.select(&scored(&[0, 9, 1, 8, 2, 7, 3, 6, 4, 5]));

        for i in 1..result.len() {
            assert!(result[i].position() > result[i - 1].position());
        }
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_at_least_one() {
        let selector = SentenceSelector::new().with_percentage(Percentage::new(1));
        let result = selector.select(&scored(&[0, 0, 3]));

        assert_eq!(positions(&result), vec![2]);
    }

    #[test]
    fn test_full_coverage() {
        let selector = SentenceSelector::new().with_percentage(Percentage::MAX);
        let result = selector.select(&scored(&[3, 1, 2]));

        assert_eq!(positions(&result), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_input() {
        let selector = SentenceSelector::new();
        let result = selector.select(&[]);

        assert!(result.is_empty());
    }
}
