//! Snapshot discovery and loading.

use crate::error::SnapshotError;
use crate::host::SnapshotInspector;
use crate::models::snapshot::Snapshot;
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Expand `patterns` relative to `root` into a sorted, de-duplicated file list.
pub fn discover(root: &Path, patterns: &[String]) -> Vec<PathBuf> {
    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        match glob(&pattern) {
            Ok(paths) => targets.extend(paths.flatten()),
            Err(e) => warn!(pattern = %pat, error = %e, "ignoring bad glob pattern"),
        }
    }
    targets.sort();
    targets.dedup();
    targets
}

/// A loaded snapshot with its resolved source path.
pub struct LoadedSnapshot {
    pub snapshot_path: PathBuf,
    pub source_path: PathBuf,
    pub inspector: SnapshotInspector,
}

/// Load a snapshot file and the source document it describes.
///
/// A missing source is not an error here: linting does not need it, and
/// the fix path reports it per type as an inspection failure.
pub fn load(path: &Path) -> Result<LoadedSnapshot, SnapshotError> {
    let data = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: Snapshot = serde_json::from_str(&data).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let source_path = path
        .parent()
        .map(|dir| dir.join(&snapshot.source))
        .unwrap_or_else(|| PathBuf::from(&snapshot.source));
    let source = fs::read_to_string(&source_path).ok();
    debug!(
        snapshot = %path.display(),
        source = %source_path.display(),
        types = snapshot.types.len(),
        source_loaded = source.is_some(),
        "loaded snapshot"
    );
    Ok(LoadedSnapshot {
        snapshot_path: path.to_path_buf(),
        source_path,
        inspector: SnapshotInspector::new(snapshot, source),
    })
}
