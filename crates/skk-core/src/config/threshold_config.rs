//! Threshold configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CLARITY_THRESHOLD, DEFAULT_HYPERFOCUS_THRESHOLD, DEFAULT_RIGIDITY_WARNING,
};

/// Tunable thresholds for the warning flags and the synthesis clarity.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Aggregate score at which a cluster runs away. Default: 8.
    pub hyperfocus_threshold: Option<f64>,
    /// Rigidity at which an anchor is too rigid. Default: 0.8.
    pub rigidity_warning: Option<f64>,
    /// Clarity copied into each synthesis event. Default: 0.9.
    pub clarity_threshold: Option<f64>,
}

impl ThresholdConfig {
    /// Returns the effective hyperfocus threshold, defaulting to 8.
    pub fn effective_hyperfocus_threshold(&self) -> f64 {
        self.hyperfocus_threshold
            .unwrap_or(DEFAULT_HYPERFOCUS_THRESHOLD)
    }

    /// Returns the effective rigidity warning, defaulting to 0.8.
    pub fn effective_rigidity_warning(&self) -> f64 {
        self.rigidity_warning.unwrap_or(DEFAULT_RIGIDITY_WARNING)
    }

    /// Returns the effective clarity, defaulting to 0.9.
    pub fn effective_clarity_threshold(&self) -> f64 {
        self.clarity_threshold.unwrap_or(DEFAULT_CLARITY_THRESHOLD)
    }
}
