//! The immutable result of one run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::structures::{AnchorStructure, AttractorCluster, MarkerOccurrence, SynthesisEvent};

/// All structures of a run, one collection per tier, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierCollections {
    #[serde(rename = "flügel")]
    pub occurrences: Vec<MarkerOccurrence>,
    #[serde(rename = "strudel")]
    pub clusters: Vec<AttractorCluster>,
    #[serde(rename = "knoten")]
    pub anchors: Vec<AnchorStructure>,
    #[serde(rename = "kristalle")]
    pub syntheses: Vec<SynthesisEvent>,
}

impl TierCollections {
    pub fn counts(&self) -> TierCounts {
        TierCounts {
            occurrences: self.occurrences.len(),
            clusters: self.clusters.len(),
            anchors: self.anchors.len(),
            syntheses: self.syntheses.len(),
        }
    }

    pub fn warnings(&self) -> WarningCounts {
        WarningCounts {
            runaway_clusters: self.clusters.iter().filter(|c| c.runaway).count(),
            rigid_anchors: self.anchors.iter().filter(|a| a.rigid).count(),
        }
    }
}

/// Structures per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    #[serde(rename = "flügel")]
    pub occurrences: usize,
    #[serde(rename = "strudel")]
    pub clusters: usize,
    #[serde(rename = "knoten")]
    pub anchors: usize,
    #[serde(rename = "kristalle")]
    pub syntheses: usize,
}

/// Warning flags raised during the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningCounts {
    pub runaway_clusters: usize,
    pub rigid_anchors: usize,
}

/// Final output of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub timestamp: DateTime<Utc>,
    /// Run stamp shared by the report file name and every structure id.
    pub stamp: String,
    pub counts: TierCounts,
    pub warnings: WarningCounts,
    pub structures: TierCollections,
    pub narrative: String,
}
