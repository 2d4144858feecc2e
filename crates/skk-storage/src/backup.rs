//! Backup-before-overwrite.

use std::path::{Path, PathBuf};

use skk_core::constants::BACKUP_SUFFIX;
use skk_core::errors::StorageError;
use tracing::warn;

/// `<path>.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// First free backup slot: `<path>.bak`, then `<path>.bak.1`, `<path>.bak.2`, ...
pub fn next_backup_path(path: &Path) -> PathBuf {
    let first = backup_path(path);
    if !first.exists() {
        return first;
    }
    let mut n = 1u32;
    loop {
        let mut name = first.as_os_str().to_owned();
        name.push(format!(".{n}"));
        let candidate = PathBuf::from(name);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Move an existing `path` aside so the next write does not clobber it.
/// Earlier backups are kept. Returns the backup location when a file was moved.
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }
    let backup = next_backup_path(path);
    std::fs::rename(path, &backup).map_err(|e| StorageError::Backup {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    warn!(path = %path.display(), backup = %backup.display(), "existing file moved to backup");
    Ok(Some(backup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_suffix() {
        assert_eq!(
            backup_path(Path::new("analysen/skk_report_1.yaml")),
            PathBuf::from("analysen/skk_report_1.yaml.bak")
        );
    }

    #[test]
    fn moves_existing_file_aside() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.yaml");
        assert!(backup_existing(&path).unwrap().is_none());

        std::fs::write(&path, "alt").unwrap();
        let backup = backup_existing(&path).unwrap().unwrap();
        assert!(!path.exists());
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "alt");
    }

    #[test]
    fn older_backups_are_rotated_not_replaced() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.yaml");

        for content in ["eins", "zwei", "drei"] {
            std::fs::write(&path, content).unwrap();
            backup_existing(&path).unwrap().unwrap();
        }

        let read = |name: &str| std::fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(read("report.yaml.bak"), "eins");
        assert_eq!(read("report.yaml.bak.1"), "zwei");
        assert_eq!(read("report.yaml.bak.2"), "drei");
    }
}
