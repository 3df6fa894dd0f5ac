//! # rapid-summary
//!
//! Heuristic extractive summarization of plain text.
//!
//! Text flows through five stages: segmentation (blank-line paragraphs, then
//! whitespace normalization, then sentence split on `.`, `!`, `?`), additive
//! rule-based scoring, quota selection by percentage, regrouping into
//! three-sentence output paragraphs, and packaging into a [`SummaryResult`].
//!
//! ```
//! use rapid_summary::{summarize, KeywordSet};
//!
//! let text = "Revenue grew 12%. The team met weekly. \
//!             Costs were reduced significantly. Therefore profit increased.";
//! let result = summarize(text, &KeywordSet::empty(), 50);
//!
//! assert_eq!(result.summary_sentence_count, 2);
//! assert_eq!(result.summary_text, "Revenue grew 12%.\n\nTherefore profit increased.");
//! ```

pub mod errors;
pub mod extract;
pub mod nlp;
pub mod pipeline;
pub mod session;
pub mod summarizer;
pub mod types;

pub use errors::{ErrorCode, ExtractError, SessionError, SpecError};
pub use nlp::{normalize, segment, PhraseLexicon};
pub use pipeline::{summarize, HeuristicPipeline, PipelineBuilder, SummaryRequest, SummarySpec};
pub use session::{DocumentSummary, Session};
pub use summarizer::{HeuristicScorer, SentenceSelector};
pub use types::{Document, KeywordSet, Percentage, ScoredSentence, Sentence, SummaryResult};
