//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::types::{ScoredSentence, Segmentation, SummaryResult};

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_ASSEMBLE: &str = "assemble";
pub const STAGE_REPORT: &str = "report";

/// All stage names in execution order.
pub const STAGES: [&str; 5] = [
    STAGE_SEGMENT,
    STAGE_SCORE,
    STAGE_SELECT,
    STAGE_ASSEMBLE,
    STAGE_REPORT,
];

// ─── Timing ─────────────────────────────────────────────────────────────────

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reports once it finishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Items entering the stage (sentences, paragraphs...), when meaningful.
    pub items_in: Option<usize>,
    /// Items leaving the stage.
    pub items_out: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }
}

/// Fluent construction of a [`StageReport`].
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items_in(mut self, n: usize) -> Self {
        self.report.items_in = Some(n);
        self
    }

    pub fn items_out(mut self, n: usize) -> Self {
        self.report.items_out = Some(n);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ─── Observer trait ─────────────────────────────────────────────────────────

/// Callbacks invoked by [`super::runner::Pipeline::run`].
///
/// Every method has an empty default so observers implement only what they
/// need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_segmentation(&mut self, _segmentation: &Segmentation) {}

    fn on_scored(&mut self, _scored: &[ScoredSentence]) {}

    fn on_selected(&mut self, _selected: &[ScoredSentence]) {}

    fn on_result(&mut self, _result: &SummaryResult) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that keeps stage reports and the scored sentences for later
/// inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub stages: Vec<(&'static str, StageReport)>,
    pub scored: Vec<ScoredSentence>,
    pub selected_positions: Vec<usize>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the stages that reported completion, in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|(name, _)| *name).collect()
    }

    /// Sum of all recorded stage durations.
    pub fn total_elapsed(&self) -> Duration {
        self.stages.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for RecordingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.stages.push((stage, report.clone()));
    }

    fn on_scored(&mut self, scored: &[ScoredSentence]) {
        self.scored = scored.to_vec();
    }

    fn on_selected(&mut self, selected: &[ScoredSentence]) {
        self.selected_positions = selected.iter().map(ScoredSentence::position).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .items_in(10)
            .items_out(4)
            .build();
        assert_eq!(report.elapsed, Duration::from_millis(3));
        assert_eq!(report.items_in, Some(10));
        assert_eq!(report.items_out, Some(4));
    }

    #[test]
    fn test_recording_observer_collects_stages() {
        let mut obs = RecordingObserver::new();
        obs.on_stage_end(STAGE_SEGMENT, &StageReport::new(Duration::from_micros(5)));
        obs.on_stage_end(STAGE_SCORE, &StageReport::new(Duration::from_micros(7)));

        assert_eq!(obs.stage_names(), vec![STAGE_SEGMENT, STAGE_SCORE]);
        assert_eq!(obs.total_elapsed(), Duration::from_micros(12));
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
