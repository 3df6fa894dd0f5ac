//! Summary packaging

use crate::types::{Percentage, SummaryResult};

/// Builds the final [`SummaryResult`] from the assembled text and counts
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn build(
        &self,
        summary_text: String,
        original_sentence_count: usize,
        summary_sentence_count: usize,
        percentage: Percentage,
    ) -> SummaryResult {
        SummaryResult {
            summary_text,
            original_sentence_count,
            summary_sentence_count,
            percentage: percentage.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_copies_fields() {
        let result = ReportBuilder.build("A. B.".to_string(), 10, 2, Percentage::new(20));
        assert_eq!(result.summary_text, "A. B.");
        assert_eq!(result.original_sentence_count, 10);
        assert_eq!(result.summary_sentence_count, 2);
        assert_eq!(result.percentage, 20);
        assert!(!result.is_empty());
    }
}
