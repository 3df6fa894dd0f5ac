//! Summarization pipeline: stage traits, observer hooks, the runner and the
//! JSON configuration spec with its validation engine.

pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;

pub use observer::{NoopObserver, PipelineObserver, RecordingObserver, StageReport};
pub use runner::{summarize, HeuristicPipeline, Pipeline, PipelineBuilder, SummaryRequest};
pub use spec::SummarySpec;
pub use traits::{Assembler, BucketAssembler, FlatAssembler, LeadScorer, SentenceScorer};
pub use validation::{ValidationEngine, ValidationReport};
