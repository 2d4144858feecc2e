//! Storage errors.

use super::error_code::{self, SkkErrorCode};

/// Errors raised by the persistence collaborator. The report is still
/// valid in memory when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Cannot create directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("Cannot write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Cannot back up {path}: {message}")]
    Backup { path: String, message: String },

    #[error("Cannot serialize {what}: {message}")]
    Serialize { what: String, message: String },
}

impl SkkErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
