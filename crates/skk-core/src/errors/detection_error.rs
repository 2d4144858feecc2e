//! Detection errors.

use super::error_code::{self, SkkErrorCode};

/// Errors that can occur while preparing marker detection.
/// A chunk without matches is not an error.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Invalid pattern for marker {marker}: {message}")]
    InvalidPattern { marker: String, message: String },
}

impl SkkErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::DETECTION_ERROR
    }
}
