//! SkkErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that callers (the CLI, log consumers) can match on.
pub trait SkkErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
pub const PIPELINE_ERROR: &str = "PIPELINE_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
