//! Marker detection: case-insensitive, word-boundary matching of marker forms.

use regex::Regex;
use skk_core::config::{MarkerDefinition, MatchMode, SkkConfig};
use skk_core::errors::DetectionError;

use crate::chunker::Chunk;

/// All matches of one marker inside one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerHit {
    pub marker: String,
    /// Matched words, lower-cased, in text order.
    pub matches: Vec<String>,
    pub interpretation: String,
}

impl MarkerHit {
    pub fn count(&self) -> u32 {
        self.matches.len() as u32
    }
}

#[derive(Debug, Clone)]
struct CompiledMarker {
    id: String,
    pattern: Regex,
    interpretation: String,
}

/// Compiled marker table. Detection is pure per chunk.
#[derive(Debug, Clone)]
pub struct MarkerDetector {
    markers: Vec<CompiledMarker>,
}

impl MarkerDetector {
    /// Compile one regex per marker, alternating over its forms.
    pub fn new(
        markers: &[MarkerDefinition],
        mode: MatchMode,
        fallback_interpretation: &str,
    ) -> Result<Self, DetectionError> {
        let markers = markers
            .iter()
            .map(|marker| {
                Ok(CompiledMarker {
                    id: marker.id.clone(),
                    pattern: compile_marker(marker, mode)?,
                    interpretation: marker.resolve_interpretation(fallback_interpretation),
                })
            })
            .collect::<Result<Vec<_>, DetectionError>>()?;
        Ok(Self { markers })
    }

    /// Build the detector from the effective marker table of `config`.
    pub fn from_config(config: &SkkConfig) -> Result<Self, DetectionError> {
        Self::new(
            &config.effective_markers(),
            config.detection.effective_match_mode(),
            config.detection.effective_fallback_interpretation(),
        )
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// One hit per marker with at least one match, in marker-table order.
    pub fn detect(&self, chunk: &Chunk) -> Vec<MarkerHit> {
        self.markers
            .iter()
            .filter_map(|marker| {
                let matches: Vec<String> = marker
                    .pattern
                    .find_iter(&chunk.text)
                    .map(|m| m.as_str().to_lowercase())
                    .collect();
                if matches.is_empty() {
                    return None;
                }
                Some(MarkerHit {
                    marker: marker.id.clone(),
                    matches,
                    interpretation: marker.interpretation.clone(),
                })
            })
            .collect()
    }
}

fn compile_marker(marker: &MarkerDefinition, mode: MatchMode) -> Result<Regex, DetectionError> {
    let mut forms: Vec<&str> = marker
        .forms
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();
    if forms.is_empty() {
        return Err(DetectionError::InvalidPattern {
            marker: marker.id.clone(),
            message: "no forms".to_string(),
        });
    }
    // Longest first so a form never shadows a longer one sharing its prefix.
    forms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    let alternation = forms
        .iter()
        .map(|f| regex::escape(f))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = match mode {
        MatchMode::Stem => format!(r"(?i)\b(?:{alternation})\w*"),
        MatchMode::Word => format!(r"(?i)\b(?:{alternation})\b"),
    };
    Regex::new(&pattern).map_err(|e| DetectionError::InvalidPattern {
        marker: marker.id.clone(),
        message: e.to_string(),
    })
}
