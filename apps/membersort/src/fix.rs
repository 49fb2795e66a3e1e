//! Fix runner: applies "Arrange members by accessibility" to every document
//! that carries a `MemberOrder` diagnostic.
//!
//! Behavior:
//! - Only types with a diagnostic are rearranged.
//! - All flagged types of one document go through one atomic edit.
//! - A transform failure leaves the document untouched and is reported on
//!   its `FixResult`; other documents are unaffected.

use crate::config::Effective;
use crate::edit::TextDocument;
use crate::error::{FixError, InspectError};
use crate::host::CancellationToken;
use crate::lint::diagnose;
use crate::reorder::{arrange_members, FixOutcome};
use crate::snapshot;
use crate::utils::display_path;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct FixResult {
    pub file: String,
    pub changed: bool,
    /// Types that were rearranged.
    pub types: Vec<String>,
    pub preview: Option<String>,
    pub original: Option<String>,
    pub error: Option<String>,
}

/// Fix documents described by snapshots matched by the configured patterns.
///
/// When `write` is false the rearranged text is returned as a preview. When
/// `capture_old` is true the original text is returned too, for diffs.
pub fn run_fix(
    eff: &Effective,
    write: bool,
    capture_old: bool,
    cancel: &CancellationToken,
) -> Vec<FixResult> {
    if !eff.enabled {
        return Vec::new();
    }
    let targets = snapshot::discover(&eff.repo_root, &eff.patterns);
    let mut results: Vec<FixResult> = targets
        .par_iter()
        .map(|path| fix_file(path, eff, write, capture_old, cancel))
        .collect();
    results.sort_by(|a, b| a.file.cmp(&b.file));
    results
}

fn fix_file(
    path: &Path,
    eff: &Effective,
    write: bool,
    capture_old: bool,
    cancel: &CancellationToken,
) -> FixResult {
    let loaded = match snapshot::load(path) {
        Ok(l) => l,
        Err(e) => {
            warn!(error = %e, "skipping snapshot");
            return FixResult {
                file: display_path(&eff.repo_root, path),
                error: Some(e.to_string()),
                ..FixResult::default()
            };
        }
    };
    let file = display_path(&eff.repo_root, &loaded.source_path);
    let inspector = &loaded.inspector;

    let flagged = diagnose(inspector, eff).flagged_types();
    if flagged.is_empty() {
        return FixResult {
            file,
            ..FixResult::default()
        };
    }
    let Some(original) = inspector.source() else {
        let e = FixError::from(InspectError::SourceUnavailable {
            path: loaded.source_path.to_string_lossy().to_string(),
        });
        warn!(file = %file, error = %e, "cannot fix document");
        return FixResult {
            file,
            error: Some(e.to_string()),
            ..FixResult::default()
        };
    };

    let mut doc = TextDocument::new(original);
    match arrange_members(inspector, &mut doc, &flagged, cancel) {
        Ok(FixOutcome::Applied(types)) => {
            debug!(file = %file, types = ?types, "rearranged members");
            let text = doc.into_text();
            let captured = capture_old.then(|| original.to_string());
            if write {
                if let Err(e) = fs::write(&loaded.source_path, &text) {
                    warn!(file = %file, error = %e, "write failed");
                    return FixResult {
                        file,
                        types,
                        original: captured,
                        error: Some(format!("write {}: {}", loaded.source_path.display(), e)),
                        ..FixResult::default()
                    };
                }
                FixResult {
                    file,
                    changed: true,
                    types,
                    preview: None,
                    original: captured,
                    error: None,
                }
            } else {
                FixResult {
                    file,
                    changed: true,
                    types,
                    preview: Some(text),
                    original: captured,
                    error: None,
                }
            }
        }
        Ok(FixOutcome::Unchanged) | Ok(FixOutcome::Cancelled) => FixResult {
            file,
            ..FixResult::default()
        },
        Err(e) => {
            warn!(file = %file, error = %e, "fix not applied");
            FixResult {
                file,
                error: Some(e.to_string()),
                ..FixResult::default()
            }
        }
    }
}
