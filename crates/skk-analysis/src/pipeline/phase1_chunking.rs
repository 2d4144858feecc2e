//! Phase 1: split the input text into chunks.

use skk_core::errors::PipelineError;

use crate::chunker::{split_into_chunks, Chunk};

use super::context::{AnalysisContext, RunStage};

pub fn chunk_text(
    ctx: &mut AnalysisContext<'_>,
    text: &str,
    chunk_size: usize,
) -> Result<Vec<Chunk>, PipelineError> {
    ctx.advance(RunStage::Chunking)?;
    split_into_chunks(text, chunk_size)
}
