//! Top-level SKK configuration with 4-layer resolution.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    BatchConfig, DetectionConfig, MarkerDefinition, OutputConfig, PerformanceConfig,
    ThresholdConfig,
};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SKK_*`)
/// 3. Explicit config file, or `skk.toml` in the working directory
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SkkConfig {
    pub performance: PerformanceConfig,
    pub thresholds: ThresholdConfig,
    pub detection: DetectionConfig,
    #[serde(default)]
    pub markers: Vec<MarkerDefinition>,
    pub output: OutputConfig,
    pub batch: BatchConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub chunk_size: Option<usize>,
    pub hyperfocus_threshold: Option<f64>,
    pub rigidity_warning: Option<f64>,
    pub output_directory: Option<String>,
}

impl SkkConfig {
    /// Load configuration with 4-layer resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `skk.toml` in
    /// `working_dir` is used when present, otherwise compiled defaults.
    pub fn load(
        working_dir: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: config file
        match config_path {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = working_dir.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// The marker families in effect: configured ones, or the built-in set.
    pub fn effective_markers(&self) -> Vec<MarkerDefinition> {
        if self.markers.is_empty() {
            MarkerDefinition::builtin()
        } else {
            self.markers.clone()
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &SkkConfig) -> Result<(), ConfigError> {
        if config.performance.chunk_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "performance.chunk_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(warning) = config.thresholds.rigidity_warning {
            if !(0.0..=1.0).contains(&warning) {
                return Err(ConfigError::ValidationFailed {
                    field: "thresholds.rigidity_warning".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(threshold) = config.thresholds.hyperfocus_threshold {
            if !threshold.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field: "thresholds.hyperfocus_threshold".to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        if let Some(clarity) = config.thresholds.clarity_threshold {
            if !clarity.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field: "thresholds.clarity_threshold".to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for (idx, marker) in config.markers.iter().enumerate() {
            if marker.id.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("markers[{idx}].id"),
                    message: "must not be empty".to_string(),
                });
            }
            if marker.forms.iter().all(|f| f.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("markers[{idx}].forms"),
                    message: format!("marker '{}' needs at least one form", marker.id),
                });
            }
            if !seen.insert(marker.id.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("markers[{idx}].id"),
                    message: format!("duplicate marker id '{}'", marker.id),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SkkConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SkkConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        debug!(path = %path.display(), "config file merged");
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut SkkConfig, other: &SkkConfig) {
        if other.performance.chunk_size.is_some() {
            base.performance.chunk_size = other.performance.chunk_size;
        }

        if other.thresholds.hyperfocus_threshold.is_some() {
            base.thresholds.hyperfocus_threshold = other.thresholds.hyperfocus_threshold;
        }
        if other.thresholds.rigidity_warning.is_some() {
            base.thresholds.rigidity_warning = other.thresholds.rigidity_warning;
        }
        if other.thresholds.clarity_threshold.is_some() {
            base.thresholds.clarity_threshold = other.thresholds.clarity_threshold;
        }

        if other.detection.match_mode.is_some() {
            base.detection.match_mode = other.detection.match_mode;
        }
        if other.detection.fallback_interpretation.is_some() {
            base.detection.fallback_interpretation =
                other.detection.fallback_interpretation.clone();
        }

        if !other.markers.is_empty() {
            base.markers = other.markers.clone();
        }

        if other.output.directory.is_some() {
            base.output.directory = other.output.directory.clone();
        }
        if other.output.report_prefix.is_some() {
            base.output.report_prefix = other.output.report_prefix.clone();
        }

        if !other.batch.patterns.is_empty() {
            base.batch.patterns = other.batch.patterns.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparsable values are ignored.
    fn apply_env_overrides(config: &mut SkkConfig) {
        if let Ok(val) = std::env::var("SKK_CHUNK_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.performance.chunk_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SKK_HYPERFOCUS_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.thresholds.hyperfocus_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SKK_RIGIDITY_WARNING") {
            if let Ok(v) = val.parse::<f64>() {
                config.thresholds.rigidity_warning = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SKK_CLARITY_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.thresholds.clarity_threshold = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SkkConfig, cli: &CliOverrides) {
        if let Some(v) = cli.chunk_size {
            config.performance.chunk_size = Some(v);
        }
        if let Some(v) = cli.hyperfocus_threshold {
            config.thresholds.hyperfocus_threshold = Some(v);
        }
        if let Some(v) = cli.rigidity_warning {
            config.thresholds.rigidity_warning = Some(v);
        }
        if let Some(ref v) = cli.output_directory {
            config.output.directory = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
