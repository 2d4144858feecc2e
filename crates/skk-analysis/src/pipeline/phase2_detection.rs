//! Phase 2: turn marker hits into Tier-1 occurrences.

use skk_core::constants::CONTEXT_PREVIEW_CHARS;
use skk_core::errors::PipelineError;
use skk_core::types::{MarkerOccurrence, Tier};
use tracing::debug;

use crate::chunker::Chunk;
use crate::detector::MarkerDetector;

use super::context::{AnalysisContext, RunStage};

/// Scan chunks strictly in index order; later phases rely on creation order.
pub fn detect_occurrences(
    ctx: &mut AnalysisContext<'_>,
    chunks: &[Chunk],
    detector: &MarkerDetector,
) -> Result<(), PipelineError> {
    ctx.advance(RunStage::Detecting)?;

    for chunk in chunks {
        for hit in detector.detect(chunk) {
            let occurrence = MarkerOccurrence {
                id: ctx.next_id(Tier::Occurrence, chunk.index),
                chunk_index: chunk.index,
                count: hit.count(),
                marker: hit.marker,
                matches: hit.matches,
                context: chunk.text.chars().take(CONTEXT_PREVIEW_CHARS).collect(),
                interpretation: hit.interpretation,
                timestamp: ctx.now(),
            };
            debug!(
                structure_id = %occurrence.id,
                chunk_index = chunk.index,
                marker = %occurrence.marker,
                count = occurrence.count,
                "occurrence detected"
            );
            ctx.collections_mut().occurrences.push(occurrence);
        }
    }
    Ok(())
}
