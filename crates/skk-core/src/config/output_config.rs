//! Output (persistence) configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REPORT_PREFIX;

/// Where the persistence collaborator writes reports and structures.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Output root directory. Default: current directory.
    pub directory: Option<String>,
    /// Report file name prefix. Default: "skk".
    pub report_prefix: Option<String>,
}

impl OutputConfig {
    pub fn effective_directory(&self) -> &str {
        self.directory.as_deref().unwrap_or(".")
    }

    pub fn effective_report_prefix(&self) -> &str {
        self.report_prefix.as_deref().unwrap_or(DEFAULT_REPORT_PREFIX)
    }
}
