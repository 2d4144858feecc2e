//! ReportStore: file layout of persisted runs.

use std::path::{Path, PathBuf};

use serde::Serialize;
use skk_core::config::OutputConfig;
use skk_core::constants::REPORT_DIR;
use skk_core::errors::StorageError;
use skk_core::types::{AnalysisReport, TierStructure};
use tracing::{debug, info};

use crate::backup::backup_existing;

/// Paths written for one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedReport {
    pub report_path: PathBuf,
    pub structure_paths: Vec<PathBuf>,
    /// Files that existed and were moved to `.bak` / `.bak.N`.
    pub backups: Vec<PathBuf>,
}

/// Persists reports below one output root.
#[derive(Debug, Clone)]
pub struct ReportStore {
    root: PathBuf,
    report_prefix: String,
}

impl ReportStore {
    pub fn new(root: impl Into<PathBuf>, report_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            report_prefix: report_prefix.into(),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(
            config.effective_directory(),
            config.effective_report_prefix(),
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/analysen/<prefix>_report_<stamp>.yaml`
    pub fn report_path(&self, report: &AnalysisReport) -> PathBuf {
        self.root
            .join(REPORT_DIR)
            .join(format!("{}_report_{}.yaml", self.report_prefix, report.stamp))
    }

    /// `<root>/<tier collection>/<id>.yaml`
    pub fn structure_path<S: TierStructure>(&self, structure: &S) -> PathBuf {
        self.root
            .join(S::TIER.collection_name())
            .join(format!("{}.yaml", structure.id()))
    }

    /// Write the report and each of its structures.
    pub fn persist(&self, report: &AnalysisReport) -> Result<PersistedReport, StorageError> {
        let mut backups = Vec::new();

        let report_path = self.report_path(report);
        write_yaml(&report_path, report, "report", &mut backups)?;

        let mut structure_paths = Vec::new();
        let structures = &report.structures;
        self.write_all(&structures.occurrences, &mut structure_paths, &mut backups)?;
        self.write_all(&structures.clusters, &mut structure_paths, &mut backups)?;
        self.write_all(&structures.anchors, &mut structure_paths, &mut backups)?;
        self.write_all(&structures.syntheses, &mut structure_paths, &mut backups)?;

        info!(
            report = %report_path.display(),
            structures = structure_paths.len(),
            backups = backups.len(),
            "report persisted"
        );
        Ok(PersistedReport {
            report_path,
            structure_paths,
            backups,
        })
    }

    fn write_all<S: TierStructure>(
        &self,
        structures: &[S],
        paths: &mut Vec<PathBuf>,
        backups: &mut Vec<PathBuf>,
    ) -> Result<(), StorageError> {
        for structure in structures {
            let path = self.structure_path(structure);
            write_yaml(&path, structure, structure.id().as_str(), backups)?;
            debug!(path = %path.display(), "structure written");
            paths.push(path);
        }
        Ok(())
    }
}

fn write_yaml<T: Serialize>(
    path: &Path,
    value: &T,
    what: &str,
    backups: &mut Vec<PathBuf>,
) -> Result<(), StorageError> {
    let yaml = serde_yaml::to_string(value).map_err(|e| StorageError::Serialize {
        what: what.to_string(),
        message: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::CreateDir {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }
    if let Some(backup) = backup_existing(path)? {
        backups.push(backup);
    }
    std::fs::write(path, yaml).map_err(|e| StorageError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
