//! Batch-mode configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BATCH_PATTERNS;

/// Which files of a directory are analyzed in batch mode.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// File name glob patterns. Default: `*.txt`, `*.log`.
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl BatchConfig {
    pub fn effective_patterns(&self) -> Vec<String> {
        if self.patterns.is_empty() {
            DEFAULT_BATCH_PATTERNS.iter().map(|p| p.to_string()).collect()
        } else {
            self.patterns.clone()
        }
    }
}
