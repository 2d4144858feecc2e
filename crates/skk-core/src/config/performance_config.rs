//! Performance configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CHUNK_SIZE;

/// Controls how input text is cut into chunks.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Words per chunk. Default: 50.
    pub chunk_size: Option<usize>,
}

impl PerformanceConfig {
    /// Returns the effective chunk size, defaulting to 50.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }
}
