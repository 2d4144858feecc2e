//! Input errors.

use super::error_code::{self, SkkErrorCode};

/// Errors raised while reading the text to analyze.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Input not found: {path}")]
    NotFound { path: String },

    #[error("Input {path} could not be read: {message}")]
    Unreadable { path: String, message: String },

    #[error("No input files in {path} match {patterns}")]
    EmptyDirectory { path: String, patterns: String },
}

impl SkkErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
