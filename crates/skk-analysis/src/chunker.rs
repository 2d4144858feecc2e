//! Word-based chunking.
//!
//! A chunk is the unit of locality for every later stage: occurrences are
//! grouped by chunk index, never across chunks.

use skk_core::errors::PipelineError;

/// A contiguous group of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    /// The chunk's words joined by single spaces.
    pub text: String,
}

/// Split `text` into non-overlapping groups of `chunk_size` words.
/// The last chunk may be shorter. Whitespace-only input yields no chunks.
pub fn split_into_chunks(text: &str, chunk_size: usize) -> Result<Vec<Chunk>, PipelineError> {
    if chunk_size == 0 {
        return Err(PipelineError::InvalidChunkSize(chunk_size));
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    Ok(words
        .chunks(chunk_size)
        .enumerate()
        .map(|(index, group)| Chunk {
            index,
            text: group.join(" "),
        })
        .collect())
}
