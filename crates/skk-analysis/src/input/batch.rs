//! Batch-mode input discovery.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use skk_core::errors::InputError;
use tracing::debug;

/// Files directly inside `dir` whose names match any of `patterns`, sorted by path.
pub fn discover_batch_inputs(dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, InputError> {
    if !dir.is_dir() {
        return Err(InputError::NotFound {
            path: dir.display().to_string(),
        });
    }

    let escaped_dir = Pattern::escape(&dir.display().to_string());
    let mut found = BTreeSet::new();
    for pattern in patterns {
        let full = format!("{escaped_dir}/{pattern}");
        let entries = glob::glob(&full).map_err(|e| InputError::Unreadable {
            path: full.clone(),
            message: e.to_string(),
        })?;
        for entry in entries {
            let path = entry.map_err(|e| InputError::Unreadable {
                path: e.path().display().to_string(),
                message: e.error().to_string(),
            })?;
            if path.is_file() {
                found.insert(path);
            }
        }
    }

    if found.is_empty() {
        return Err(InputError::EmptyDirectory {
            path: dir.display().to_string(),
            patterns: patterns.join(", "),
        });
    }
    debug!(count = found.len(), dir = %dir.display(), "batch inputs discovered");
    Ok(found.into_iter().collect())
}
