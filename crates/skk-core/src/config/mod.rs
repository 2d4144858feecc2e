//! Configuration system for SKK.
//! TOML-based, 4-layer resolution: CLI > env > config file > defaults.

pub mod batch_config;
pub mod detection_config;
pub mod marker_config;
pub mod output_config;
pub mod performance_config;
pub mod skk_config;
pub mod threshold_config;

pub use batch_config::BatchConfig;
pub use detection_config::{DetectionConfig, MatchMode};
pub use marker_config::MarkerDefinition;
pub use output_config::OutputConfig;
pub use performance_config::PerformanceConfig;
pub use skk_config::{CliOverrides, SkkConfig};
pub use threshold_config::ThresholdConfig;
