//! # skk-storage
//!
//! Writes an `AnalysisReport` to disk: the report itself under `analysen/`,
//! and every structure under a directory named after its tier.
//! Existing files are moved to `.bak` (then `.bak.1`, `.bak.2`, ...) before
//! being replaced; no earlier file or backup is ever deleted.

pub mod backup;
pub mod report_store;

pub use report_store::{PersistedReport, ReportStore};
