//! # skk-core
//!
//! Foundation crate for the SKK (Strudel-Knoten-Kristalle) pipeline.
//! Tier types, identifiers and clock, errors, config, tracing, and constants.
//! Every other crate in the workspace depends on this one.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::SkkConfig;
pub use errors::{PipelineError, SkkErrorCode, StorageError};
pub use types::{
    AnalysisReport, AnchorStructure, AttractorCluster, Clock, FixedClock, IdGenerator,
    MarkerOccurrence, StructureId, SynthesisEvent, SystemClock, Tier,
};
