//! SkkAnalyzer: the single entry point shared by the CLI and any other front end.

use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

use skk_core::config::SkkConfig;
use skk_core::errors::PipelineError;
use skk_core::types::{AnalysisReport, Clock, SystemClock};
use tracing::info;

use crate::detector::MarkerDetector;
use crate::input::read_input;
use crate::pipeline::{self, PipelineSettings};

/// Holds the resolved settings and compiled markers. Every `analyze_*` call
/// builds and drops its own context; only the run counter carries over, so
/// runs started in the same second get distinct stamps.
pub struct SkkAnalyzer {
    settings: PipelineSettings,
    detector: MarkerDetector,
    clock: Box<dyn Clock>,
    runs: AtomicU32,
}

impl SkkAnalyzer {
    /// Validate `config` and compile its marker table.
    pub fn new(config: &SkkConfig) -> Result<Self, PipelineError> {
        SkkConfig::validate(config)?;
        let detector = MarkerDetector::from_config(config)?;
        Ok(Self {
            settings: PipelineSettings::from_config(config),
            detector,
            clock: Box::new(SystemClock),
            runs: AtomicU32::new(0),
        })
    }

    /// Replace the wall clock, e.g. with a `FixedClock` for reproducible ids.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn analyze_text(&self, text: &str) -> Result<AnalysisReport, PipelineError> {
        let run = self.runs.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            run,
            chars = text.chars().count(),
            markers = self.detector.marker_count(),
            "starting SKK analysis"
        );
        pipeline::run_pipeline(text, &self.settings, &self.detector, self.clock.as_ref(), run)
    }

    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisReport, PipelineError> {
        info!(path = %path.display(), "analyzing file");
        let text = read_input(path)?;
        self.analyze_text(&text)
    }
}
