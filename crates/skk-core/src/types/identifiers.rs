//! Tier identifiers and run-scoped structure ids.
//!
//! Ids are `<prefix>_<chunkIndex>_<stamp>_<seq>`: a stamp captured when the
//! run starts plus a monotonic counter. The stamp is `YYYYMMDD_HHMMSS` for
//! the first run of an analyzer and `YYYYMMDD_HHMMSS_r<run>` for later ones,
//! so ids and file names of runs started in the same second stay apart.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four aggregation tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Tier-1: a marker occurrence.
    Occurrence,
    /// Tier-2: an attractor cluster.
    Attractor,
    /// Tier-3: an anchor structure.
    Anchor,
    /// Tier-4: a synthesis event.
    Synthesis,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Occurrence,
        Tier::Attractor,
        Tier::Anchor,
        Tier::Synthesis,
    ];

    /// 1-based tier number.
    pub fn level(self) -> u8 {
        match self {
            Tier::Occurrence => 1,
            Tier::Attractor => 2,
            Tier::Anchor => 3,
            Tier::Synthesis => 4,
        }
    }

    /// Prefix of structure ids in this tier.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Tier::Occurrence => "flügel",
            Tier::Attractor => "strudel",
            Tier::Anchor => "knoten",
            Tier::Synthesis => "kristall",
        }
    }

    /// Name of the tier's collection in reports and on disk.
    pub fn collection_name(self) -> &'static str {
        match self {
            Tier::Occurrence => "flügel",
            Tier::Attractor => "strudel",
            Tier::Anchor => "knoten",
            Tier::Synthesis => "kristalle",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier-{} ({})", self.level(), self.collection_name())
    }
}

/// Identifier of one structure, unique within a run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureId(String);

impl StructureId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StructureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Format of the timestamp part of ids and file names.
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Stamp of run number `run` (1-based) started at `started_at`.
pub fn run_stamp(started_at: DateTime<Utc>, run: u32) -> String {
    let base = started_at.format(STAMP_FORMAT);
    if run <= 1 {
        base.to_string()
    } else {
        format!("{base}_r{run}")
    }
}

/// Hands out structure ids for one run.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    stamp: String,
    next_seq: u32,
}

impl IdGenerator {
    /// Capture `started_at` as the timestamp part of every id of a first run.
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self::for_run(started_at, 1)
    }

    /// Ids for run number `run` of the same analyzer.
    pub fn for_run(started_at: DateTime<Utc>, run: u32) -> Self {
        Self {
            stamp: run_stamp(started_at, run),
            next_seq: 1,
        }
    }

    /// The captured stamp.
    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    /// Next id for a structure of `tier` located at `chunk_index`.
    pub fn next(&mut self, tier: Tier, chunk_index: usize) -> StructureId {
        let seq = self.next_seq;
        self.next_seq += 1;
        StructureId(format!(
            "{}_{}_{}_{:04}",
            tier.id_prefix(),
            chunk_index,
            self.stamp,
            seq
        ))
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u32 {
        self.next_seq - 1
    }
}
