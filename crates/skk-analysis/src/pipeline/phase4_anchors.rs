//! Phase 4: clusters above the fixed score cutoff crystallize into anchors.

use skk_core::constants::{ANCHOR_SCORE_CUTOFF, RIGIDITY_SCALE, RIGIDITY_WARNING_TEXT};
use skk_core::errors::PipelineError;
use skk_core::types::{AnchorStructure, StructureId, Tier};
use tracing::{debug, warn};

use super::context::{AnalysisContext, RunStage};

/// `min(score / 10, 1.0)`.
pub fn rigidity_for(aggregate_score: u32) -> f64 {
    (f64::from(aggregate_score) / RIGIDITY_SCALE).min(1.0)
}

pub fn crystallize_anchors(
    ctx: &mut AnalysisContext<'_>,
    rigidity_warning: f64,
) -> Result<(), PipelineError> {
    ctx.advance(RunStage::Crystallizing)?;

    let candidates: Vec<(usize, StructureId, u32, String)> = ctx
        .collections()
        .clusters
        .iter()
        .filter(|c| c.aggregate_score > ANCHOR_SCORE_CUTOFF)
        .map(|c| {
            (
                c.chunk_index,
                c.id.clone(),
                c.aggregate_score,
                c.interpretation.clone(),
            )
        })
        .collect();

    for (chunk_index, cluster_id, score, anchor_text) in candidates {
        let rigidity = rigidity_for(score);
        let rigid = rigidity >= rigidity_warning;
        let anchor = AnchorStructure {
            id: ctx.next_id(Tier::Anchor, chunk_index),
            chunk_index,
            cluster_id,
            rigidity,
            flexibility: 1.0 - rigidity,
            anchor_text,
            rigid,
            warning: rigid.then(|| RIGIDITY_WARNING_TEXT.to_string()),
            timestamp: ctx.now(),
        };
        if rigid {
            warn!(structure_id = %anchor.id, rigidity, "rigid anchor");
        }
        debug!(structure_id = %anchor.id, chunk_index, rigidity, "anchor crystallized");
        ctx.collections_mut().anchors.push(anchor);
    }
    Ok(())
}
