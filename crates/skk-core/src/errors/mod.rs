//! Error handling for SKK.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod detection_error;
pub mod error_code;
pub mod input_error;
pub mod pipeline_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::SkkErrorCode;
pub use input_error::InputError;
pub use pipeline_error::PipelineError;
pub use storage_error::StorageError;
