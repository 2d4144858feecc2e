//! Per-run pipeline context and its forward-only stage machine.

use chrono::{DateTime, Utc};
use skk_core::errors::PipelineError;
use skk_core::types::{Clock, IdGenerator, StructureId, Tier, TierCollections};

/// Stages of one run, in the only order they may occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunStage {
    Idle,
    Chunking,
    Detecting,
    Clustering,
    Crystallizing,
    Synthesizing,
    Reporting,
    Done,
}

impl RunStage {
    /// The stage that must follow this one, if any.
    pub fn successor(self) -> Option<RunStage> {
        match self {
            RunStage::Idle => Some(RunStage::Chunking),
            RunStage::Chunking => Some(RunStage::Detecting),
            RunStage::Detecting => Some(RunStage::Clustering),
            RunStage::Clustering => Some(RunStage::Crystallizing),
            RunStage::Crystallizing => Some(RunStage::Synthesizing),
            RunStage::Synthesizing => Some(RunStage::Reporting),
            RunStage::Reporting => Some(RunStage::Done),
            RunStage::Done => None,
        }
    }
}

/// Everything one run accumulates. Owned by exactly one run and dropped
/// (or turned into the report) when it ends.
pub struct AnalysisContext<'a> {
    clock: &'a dyn Clock,
    started_at: DateTime<Utc>,
    ids: IdGenerator,
    stage: RunStage,
    collections: TierCollections,
}

impl<'a> AnalysisContext<'a> {
    /// Start a first run: captures the start time and seeds the id generator.
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self::for_run(clock, 1)
    }

    /// Start run number `run` of an analyzer.
    pub fn for_run(clock: &'a dyn Clock, run: u32) -> Self {
        let started_at = clock.now();
        Self {
            clock,
            started_at,
            ids: IdGenerator::for_run(started_at, run),
            stage: RunStage::Idle,
            collections: TierCollections::default(),
        }
    }

    pub fn stage(&self) -> RunStage {
        self.stage
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Move to `next`, which must be the direct successor of the current stage.
    pub fn advance(&mut self, next: RunStage) -> Result<(), PipelineError> {
        if self.stage.successor() != Some(next) {
            return Err(PipelineError::StageOrder {
                from: format!("{:?}", self.stage),
                to: format!("{next:?}"),
            });
        }
        self.stage = next;
        Ok(())
    }

    /// Stamp shared by every id of this run.
    pub fn stamp(&self) -> &str {
        self.ids.stamp()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn next_id(&mut self, tier: Tier, chunk_index: usize) -> StructureId {
        self.ids.next(tier, chunk_index)
    }

    pub fn collections(&self) -> &TierCollections {
        &self.collections
    }

    /// Structures are append-only: stages push, nobody edits.
    pub(crate) fn collections_mut(&mut self) -> &mut TierCollections {
        &mut self.collections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use skk_core::types::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
    }

    #[test]
    fn walks_every_stage_in_order() {
        let clock = clock();
        let mut ctx = AnalysisContext::new(&clock);
        let mut stage = ctx.stage();
        while let Some(next) = stage.successor() {
            ctx.advance(next).unwrap();
            stage = next;
        }
        assert_eq!(ctx.stage(), RunStage::Done);
    }

    #[test]
    fn refuses_to_skip_or_go_back() {
        let clock = clock();
        let mut ctx = AnalysisContext::new(&clock);
        assert!(ctx.advance(RunStage::Detecting).is_err());
        ctx.advance(RunStage::Chunking).unwrap();
        assert!(ctx.advance(RunStage::Idle).is_err());
        assert!(ctx.advance(RunStage::Chunking).is_err());
        assert_eq!(ctx.stage(), RunStage::Chunking);
    }

    #[test]
    fn ids_carry_the_start_stamp() {
        let clock = clock();
        let mut ctx = AnalysisContext::new(&clock);
        let id = ctx.next_id(Tier::Anchor, 7);
        assert_eq!(id.as_str(), "knoten_7_20240102_030405_0001");
    }

    #[test]
    fn later_runs_carry_their_run_number() {
        let clock = clock();
        let mut ctx = AnalysisContext::for_run(&clock, 2);
        assert_eq!(ctx.stamp(), "20240102_030405_r2");
        let id = ctx.next_id(Tier::Anchor, 7);
        assert_eq!(id.as_str(), "knoten_7_20240102_030405_r2_0001");
    }
}
