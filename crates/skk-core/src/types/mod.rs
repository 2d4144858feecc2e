//! Domain types shared across the SKK crates.

pub mod clock;
pub mod identifiers;
pub mod report;
pub mod structures;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identifiers::{IdGenerator, StructureId, Tier};
pub use report::{AnalysisReport, TierCollections, TierCounts, WarningCounts};
pub use structures::{
    AnchorStructure, AttractorCluster, MarkerOccurrence, SynthesisEvent, TierStructure,
};
