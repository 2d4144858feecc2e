//! 6-phase SKK pipeline orchestrator.
//!
//! Phase 1: Chunking → Phase 2: Detection → Phase 3: Attractors →
//! Phase 4: Anchors → Phase 5: Synthesis → Phase 6: Report

pub mod context;
pub mod phase1_chunking;
pub mod phase2_detection;
pub mod phase3_attractors;
pub mod phase4_anchors;
pub mod phase5_synthesis;
pub mod phase6_report;

use std::time::Instant;

use skk_core::config::SkkConfig;
use skk_core::errors::PipelineError;
use skk_core::types::{AnalysisReport, Clock};
use tracing::info;

use crate::detector::MarkerDetector;

pub use context::{AnalysisContext, RunStage};

/// Numeric policy of one run, resolved from the config before it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    pub chunk_size: usize,
    pub hyperfocus_threshold: f64,
    pub rigidity_warning: f64,
    pub clarity: f64,
}

impl PipelineSettings {
    pub fn from_config(config: &SkkConfig) -> Self {
        Self {
            chunk_size: config.performance.effective_chunk_size(),
            hyperfocus_threshold: config.thresholds.effective_hyperfocus_threshold(),
            rigidity_warning: config.thresholds.effective_rigidity_warning(),
            clarity: config.thresholds.effective_clarity_threshold(),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from_config(&SkkConfig::default())
    }
}

/// Run the full 6-phase pipeline over one text as run number `run`.
///
/// Synchronous and single-threaded; the context lives only for this call.
pub fn run_pipeline(
    text: &str,
    settings: &PipelineSettings,
    detector: &MarkerDetector,
    clock: &dyn Clock,
    run: u32,
) -> Result<AnalysisReport, PipelineError> {
    let started = Instant::now();
    let mut ctx = AnalysisContext::for_run(clock, run);

    // Phase 1: Chunking.
    let chunks = phase1_chunking::chunk_text(&mut ctx, text, settings.chunk_size)?;
    info!(count = chunks.len(), "Phase 1: text chunked");

    // Phase 2: Detection.
    phase2_detection::detect_occurrences(&mut ctx, &chunks, detector)?;
    info!(count = ctx.collections().occurrences.len(), "Phase 2: occurrences detected");

    // Phase 3: Attractors.
    phase3_attractors::form_attractors(&mut ctx, settings.hyperfocus_threshold)?;
    info!(count = ctx.collections().clusters.len(), "Phase 3: attractors formed");

    // Phase 4: Anchors.
    phase4_anchors::crystallize_anchors(&mut ctx, settings.rigidity_warning)?;
    info!(count = ctx.collections().anchors.len(), "Phase 4: anchors crystallized");

    // Phase 5: Synthesis.
    phase5_synthesis::form_synthesis(&mut ctx, settings.clarity)?;
    info!(count = ctx.collections().syntheses.len(), "Phase 5: synthesis complete");

    // Phase 6: Report.
    let report = phase6_report::build_report(&mut ctx)?;
    info!(
        runaway = report.warnings.runaway_clusters,
        rigid = report.warnings.rigid_anchors,
        run_duration_ms = started.elapsed().as_millis() as u64,
        "SKK pipeline complete"
    );

    Ok(report)
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};
    use skk_core::types::{FixedClock, MarkerOccurrence, Tier};

    use super::context::{AnalysisContext, RunStage};

    pub fn fixed_clock() -> FixedClock {
        FixedClock::new(start())
    }

    pub fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
    }

    /// Context positioned right after detection, holding `(chunk, count, interpretation)` occurrences.
    pub fn detected<'a>(
        clock: &'a FixedClock,
        occurrences: &[(usize, u32, &str)],
    ) -> AnalysisContext<'a> {
        let mut ctx = AnalysisContext::new(clock);
        ctx.advance(RunStage::Chunking).unwrap();
        ctx.advance(RunStage::Detecting).unwrap();
        for (i, (chunk_index, count, interpretation)) in occurrences.iter().enumerate() {
            let occurrence = MarkerOccurrence {
                id: ctx.next_id(Tier::Occurrence, *chunk_index),
                chunk_index: *chunk_index,
                marker: format!("m{i}"),
                matches: vec![format!("m{i}"); *count as usize],
                count: *count,
                context: String::new(),
                interpretation: interpretation.to_string(),
                timestamp: ctx.now(),
            };
            ctx.collections_mut().occurrences.push(occurrence);
        }
        ctx
    }
}
