//! Summarization components
//!
//! Provides heuristic extractive summarization: additive sentence scoring,
//! quota selection and bucketed paragraph reassembly.

pub mod assembler;
pub mod report;
pub mod scorer;
pub mod selector;

pub use report::ReportBuilder;
pub use scorer::{HeuristicScorer, ScoreBreakdown, ScoringWeights};
pub use selector::{SelectorConfig, SentenceSelector};
