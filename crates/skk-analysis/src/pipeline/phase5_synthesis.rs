//! Phase 5: merge the most recent anchors into one synthesis event.
//!
//! At most one synthesis per run, however many anchors qualify.

use skk_core::constants::{
    INTEGRATION_SEPARATOR, MAX_ANCHORS_PER_SYNTHESIS, MIN_ANCHORS_FOR_SYNTHESIS,
    SYNTHESIS_MEANING, SYNTHESIS_PREVIEW_CHARS,
};
use skk_core::errors::PipelineError;
use skk_core::types::{AnchorStructure, SynthesisEvent, Tier};
use tracing::debug;

use super::context::{AnalysisContext, RunStage};

pub fn form_synthesis(ctx: &mut AnalysisContext<'_>, clarity: f64) -> Result<(), PipelineError> {
    ctx.advance(RunStage::Synthesizing)?;

    let anchors = &ctx.collections().anchors;
    if anchors.len() < MIN_ANCHORS_FOR_SYNTHESIS {
        return Ok(());
    }
    let taken = &anchors[anchors.len().saturating_sub(MAX_ANCHORS_PER_SYNTHESIS)..];

    let anchor_ids = taken.iter().map(|a| a.id.clone()).collect();
    let synthesis_text = synthesis_text(&taken[0], &taken[1]);
    let integration_text = integration_text(taken);
    let chunk_index = taken[taken.len() - 1].chunk_index;

    let event = SynthesisEvent {
        id: ctx.next_id(Tier::Synthesis, chunk_index),
        anchor_ids,
        synthesis_text,
        integration_text,
        clarity,
        meaning: SYNTHESIS_MEANING.to_string(),
        timestamp: ctx.now(),
    };
    debug!(structure_id = %event.id, count = event.anchor_ids.len(), "synthesis formed");
    ctx.collections_mut().syntheses.push(event);
    Ok(())
}

fn preview(text: &str) -> String {
    text.chars().take(SYNTHESIS_PREVIEW_CHARS).collect()
}

fn synthesis_text(first: &AnchorStructure, second: &AnchorStructure) -> String {
    format!(
        "Die Verbindung zwischen {} und {} wird klar!",
        preview(&first.anchor_text),
        preview(&second.anchor_text)
    )
}

fn integration_text(taken: &[AnchorStructure]) -> String {
    let texts: Vec<&str> = taken.iter().map(|a| a.anchor_text.as_str()).collect();
    format!(
        "Synthese von {} Bedeutungsebenen: {}",
        taken.len(),
        texts.join(INTEGRATION_SEPARATOR)
    )
}
