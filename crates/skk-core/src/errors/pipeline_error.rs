//! Pipeline errors.

use super::error_code::{self, SkkErrorCode};
use super::{ConfigError, DetectionError, InputError};

/// Errors that abort a run.
/// Aggregates subsystem errors via `From` conversions. Persistence failures
/// are deliberately absent: they surface as `StorageError` on their own.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    #[error("Chunk size must be positive, got {0}")]
    InvalidChunkSize(usize),

    #[error("Stage {to} cannot follow stage {from}")]
    StageOrder { from: String, to: String },
}

impl SkkErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Detection(e) => e.error_code(),
            Self::InvalidChunkSize(_) | Self::StageOrder { .. } => error_code::PIPELINE_ERROR,
        }
    }
}
