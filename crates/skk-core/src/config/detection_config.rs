//! Marker detection configuration.

use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_INTERPRETATION;

/// How a marker form is matched against the words of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The form is a stem: any word starting with it matches.
    #[default]
    Stem,
    /// The form must be the complete word.
    Word,
}

/// Configuration for the marker detector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectionConfig {
    /// Match mode for all forms. Default: stem.
    pub match_mode: Option<MatchMode>,
    /// Interpretation for markers without one. Default: "Unbenannte Regung im Zwischenraum".
    pub fallback_interpretation: Option<String>,
}

impl DetectionConfig {
    pub fn effective_match_mode(&self) -> MatchMode {
        self.match_mode.unwrap_or_default()
    }

    pub fn effective_fallback_interpretation(&self) -> &str {
        self.fallback_interpretation
            .as_deref()
            .unwrap_or(FALLBACK_INTERPRETATION)
    }
}
