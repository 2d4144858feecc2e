//! Reads one input text.

use std::io::ErrorKind;
use std::path::Path;

use skk_core::errors::InputError;

/// Read `path` as UTF-8 text. Missing or unreadable input is fatal to the run.
pub fn read_input(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InputError::NotFound {
            path: path.display().to_string(),
        },
        _ => InputError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })
}
