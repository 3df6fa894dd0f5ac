//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of pipeline stages.
//! Calling [`Pipeline::run`] executes them in order, threading artifacts
//! between stages and notifying a [`PipelineObserver`] at each boundary.
//!
//! Runs are pure: a pipeline holds no per-document state, so one instance can
//! be shared across threads and used for any number of documents.

use tracing::debug;

use crate::nlp::segmenter::segment;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_ASSEMBLE,
    STAGE_REPORT, STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT,
};
use crate::pipeline::traits::{Assembler, BucketAssembler, SentenceScorer};
use crate::summarizer::assembler::serialize;
use crate::summarizer::report::ReportBuilder;
use crate::summarizer::scorer::HeuristicScorer;
use crate::summarizer::selector::SentenceSelector;
use crate::types::{KeywordSet, Percentage, SummaryResult};

/// Enter a tracing span for a pipeline stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Per-invocation inputs owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRequest {
    pub keywords: KeywordSet,
    pub percentage: Percentage,
}

impl SummaryRequest {
    pub fn new(keywords: KeywordSet, percentage: Percentage) -> Self {
        Self {
            keywords,
            percentage,
        }
    }
}

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Sc`  | [`SentenceScorer`] | [`HeuristicScorer`] |
/// | `As`  | [`Assembler`] | [`BucketAssembler`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Sc = HeuristicScorer, As = BucketAssembler> {
    pub scorer: Sc,
    pub assembler: As,
}

/// Type alias for the default heuristic pipeline.
pub type HeuristicPipeline = Pipeline<HeuristicScorer, BucketAssembler>;

impl HeuristicPipeline {
    /// Default scoring rules, built-in phrase lexicon and bucketed assembly.
    pub fn heuristic() -> Self {
        Pipeline {
            scorer: HeuristicScorer::new(),
            assembler: BucketAssembler,
        }
    }
}

impl Default for HeuristicPipeline {
    fn default() -> Self {
        Self::heuristic()
    }
}

impl<Sc, As> Pipeline<Sc, As>
where
    Sc: SentenceScorer,
    As: Assembler,
{
    /// Summarize `text`, producing a [`SummaryResult`].
    ///
    /// Stages run in order:
    /// 1. Segment (paragraph split, per-paragraph normalize, sentence split)
    /// 2. Score
    /// 3. Select
    /// 4. Assemble
    /// 5. Report
    pub fn run(
        &self,
        text: &str,
        request: &SummaryRequest,
        observer: &mut impl PipelineObserver,
    ) -> SummaryResult {
        // Stage 1: Segment
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let segmentation = segment(text);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(segmentation.paragraphs.len())
            .items_out(segmentation.num_sentences())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_segmentation(&segmentation);
        debug!(
            paragraphs = segmentation.paragraphs.len(),
            sentences = segmentation.num_sentences(),
            "segmented text"
        );

        // Stage 2: Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let scored = self.scorer.score_all(&segmentation, &request.keywords);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(segmentation.num_sentences())
            .items_out(scored.len())
            .build();
        observer.on_stage_end(STAGE_SCORE, &report);
        observer.on_scored(&scored);

        // Stage 3: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selector = SentenceSelector::new().with_percentage(request.percentage);
        let selected = selector.select(&scored);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(scored.len())
            .items_out(selected.len())
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_selected(&selected);
        debug!(
            target_count = selector.target_count(scored.len()),
            selected = selected.len(),
            percentage = request.percentage.get(),
            "selected sentences"
        );

        // Stage 4: Assemble
        trace_stage!(STAGE_ASSEMBLE);
        observer.on_stage_start(STAGE_ASSEMBLE);
        let clock = StageClock::start();
        let paragraphs = self.assembler.assemble(&selected);
        let summary_text = serialize(&paragraphs);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(selected.len())
            .items_out(paragraphs.len())
            .build();
        observer.on_stage_end(STAGE_ASSEMBLE, &report);

        // Stage 5: Report
        trace_stage!(STAGE_REPORT);
        observer.on_stage_start(STAGE_REPORT);
        let clock = StageClock::start();
        let result = ReportBuilder.build(
            summary_text,
            segmentation.num_sentences(),
            selected.len(),
            request.percentage,
        );
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_REPORT, &report);
        observer.on_result(&result);

        result
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// ```
/// # use rapid_summary::pipeline::runner::PipelineBuilder;
/// # use rapid_summary::pipeline::traits::FlatAssembler;
/// let pipeline = PipelineBuilder::new().assembler(FlatAssembler).build();
/// ```
pub struct PipelineBuilder<Sc = HeuristicScorer, As = BucketAssembler> {
    scorer: Sc,
    assembler: As,
}

impl PipelineBuilder {
    /// Start building from the default heuristic stages.
    pub fn new() -> Self {
        PipelineBuilder {
            scorer: HeuristicScorer::new(),
            assembler: BucketAssembler,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sc, As> PipelineBuilder<Sc, As> {
    /// Override the scorer stage.
    pub fn scorer<S: SentenceScorer>(self, s: S) -> PipelineBuilder<S, As> {
        PipelineBuilder {
            scorer: s,
            assembler: self.assembler,
        }
    }

    /// Override the assembler stage.
    pub fn assembler<A: Assembler>(self, a: A) -> PipelineBuilder<Sc, A> {
        PipelineBuilder {
            scorer: self.scorer,
            assembler: a,
        }
    }

    pub fn build(self) -> Pipeline<Sc, As> {
        Pipeline {
            scorer: self.scorer,
            assembler: self.assembler,
        }
    }
}

/// Summarize `text` with the default heuristic pipeline.
///
/// `percentage` is clamped into `1..=100`; an empty or whitespace-only text
/// yields an empty summary with zero counts.
pub fn summarize(text: &str, keywords: &KeywordSet, percentage: i64) -> SummaryResult {
    let request = SummaryRequest::new(keywords.clone(), Percentage::new(percentage));
    HeuristicPipeline::heuristic().run(text, &request, &mut NoopObserver)
}
