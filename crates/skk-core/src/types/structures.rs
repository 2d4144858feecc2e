//! The four tiers of structures a run produces.
//!
//! Every structure is created once by its stage and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::{StructureId, Tier};

/// Common view over structures of any tier, used by persistence.
pub trait TierStructure: Serialize {
    const TIER: Tier;

    fn id(&self) -> &StructureId;
}

/// Tier-1: one marker's matches inside one chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerOccurrence {
    pub id: StructureId,
    pub chunk_index: usize,
    pub marker: String,
    /// Matched words, lower-cased, in text order.
    pub matches: Vec<String>,
    pub count: u32,
    /// Leading part of the chunk text.
    pub context: String,
    pub interpretation: String,
    pub timestamp: DateTime<Utc>,
}

/// Tier-2: the occurrences of one chunk, merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractorCluster {
    pub id: StructureId,
    pub chunk_index: usize,
    pub occurrence_ids: Vec<StructureId>,
    /// Sum of the member occurrences' match counts.
    pub aggregate_score: u32,
    pub runaway: bool,
    pub interpretation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Tier-3: a cluster that crossed the crystallization cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorStructure {
    pub id: StructureId,
    pub chunk_index: usize,
    pub cluster_id: StructureId,
    /// In [0, 1]; `rigidity + flexibility == 1.0`.
    pub rigidity: f64,
    pub flexibility: f64,
    pub anchor_text: String,
    pub rigid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Tier-4: integration of the most recent anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisEvent {
    pub id: StructureId,
    /// At most three, in creation order.
    pub anchor_ids: Vec<StructureId>,
    pub synthesis_text: String,
    pub integration_text: String,
    pub clarity: f64,
    pub meaning: String,
    pub timestamp: DateTime<Utc>,
}

impl TierStructure for MarkerOccurrence {
    const TIER: Tier = Tier::Occurrence;

    fn id(&self) -> &StructureId {
        &self.id
    }
}

impl TierStructure for AttractorCluster {
    const TIER: Tier = Tier::Attractor;

    fn id(&self) -> &StructureId {
        &self.id
    }
}

impl TierStructure for AnchorStructure {
    const TIER: Tier = Tier::Anchor;

    fn id(&self) -> &StructureId {
        &self.id
    }
}

impl TierStructure for SynthesisEvent {
    const TIER: Tier = Tier::Synthesis;

    fn id(&self) -> &StructureId {
        &self.id
    }
}
