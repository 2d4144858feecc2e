//! # skk-analysis
//!
//! 6-phase aggregation pipeline: chunking → marker detection → attractor
//! formation → anchor crystallization → synthesis → report.
//! Each run owns its own `AnalysisContext`; nothing is shared between runs.

pub mod analyzer;
pub mod chunker;
pub mod detector;
pub mod input;
pub mod pipeline;

pub use analyzer::SkkAnalyzer;
pub use chunker::{split_into_chunks, Chunk};
pub use detector::{MarkerDetector, MarkerHit};
pub use pipeline::{run_pipeline, AnalysisContext, PipelineSettings, RunStage};
