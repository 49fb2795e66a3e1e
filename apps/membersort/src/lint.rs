//! Lint runner for the member ordering rule.
//!
//! Produces a `LintResult` with one issue per misordered type and a summary.
//! Snapshot files are processed in parallel; issues are sorted by file and
//! line afterwards so output is deterministic.

use crate::config::Effective;
use crate::error::InspectError;
use crate::host::MemberInspector;
use crate::models::{Issue, LintResult, Skipped, Summary};
use crate::order::check_scope;
use crate::rule::{Violation, MEMBER_ORDER};
use crate::snapshot;
use crate::utils::display_path;
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of checking every analyzed type of one document.
#[derive(Debug, Default)]
pub struct Diagnosis {
    /// Type index and its first violation.
    pub violations: Vec<(usize, Violation)>,
    /// Types the host could not describe.
    pub failures: Vec<(String, InspectError)>,
    pub analyzed: usize,
}

impl Diagnosis {
    /// Indices of types that carry a diagnostic.
    pub fn flagged_types(&self) -> Vec<usize> {
        self.violations.iter().map(|(i, _)| *i).collect()
    }
}

/// Check every type of a document that the configuration selects.
pub fn diagnose<I: MemberInspector>(inspector: &I, eff: &Effective) -> Diagnosis {
    let mut diagnosis = Diagnosis::default();
    for index in 0..inspector.type_count() {
        let Some((name, kind)) = inspector.describe(index) else {
            continue;
        };
        if !eff.analyzes(name, kind) {
            debug!(type_name = name, kind = kind.as_str(), "type not analyzed");
            continue;
        }
        diagnosis.analyzed += 1;
        match inspector.inspect(index) {
            Ok(scope) => {
                if let Some(v) = check_scope(&scope) {
                    diagnosis.violations.push((index, v));
                }
            }
            Err(e) => {
                warn!(type_name = name, error = %e, "skipping type");
                diagnosis.failures.push((name.to_string(), e));
            }
        }
    }
    diagnosis
}

/// Run lint across snapshot files matched by the configured patterns.
pub fn run_lint(eff: &Effective) -> LintResult {
    if !eff.enabled {
        debug!(rule = MEMBER_ORDER.id, "rule disabled by configuration");
        return LintResult::default();
    }
    let targets = snapshot::discover(&eff.repo_root, &eff.patterns);
    debug!(files = targets.len(), "linting snapshots");

    let per_file: Vec<(Vec<Issue>, Vec<Skipped>, usize)> = targets
        .par_iter()
        .map(|path| lint_file(path, eff))
        .collect();

    let mut issues: Vec<Issue> = Vec::new();
    let mut skipped: Vec<Skipped> = Vec::new();
    let mut types = 0usize;
    for (mut i, mut s, t) in per_file {
        issues.append(&mut i);
        skipped.append(&mut s);
        types += t;
    }
    // Deterministic ordering of issues by file then line
    issues.sort_by(|a, b| {
        a.file
            .cmp(&b.file)
            .then(a.line.cmp(&b.line))
            .then(a.column.cmp(&b.column))
    });

    let mut summary = Summary {
        files: targets.len(),
        types,
        skipped: skipped.len(),
        ..Summary::default()
    };
    for is in &issues {
        match is.severity.as_str() {
            "error" => summary.errors += 1,
            "warn" => summary.warnings += 1,
            _ => summary.infos += 1,
        }
    }
    LintResult {
        issues,
        skipped,
        summary,
    }
}

/// Lint a single snapshot file.
fn lint_file(path: &Path, eff: &Effective) -> (Vec<Issue>, Vec<Skipped>, usize) {
    let loaded = match snapshot::load(path) {
        Ok(l) => l,
        Err(e) => {
            warn!(error = %e, "skipping snapshot");
            return (
                Vec::new(),
                vec![Skipped {
                    file: display_path(&eff.repo_root, path),
                    type_name: None,
                    reason: e.to_string(),
                }],
                0,
            );
        }
    };
    let file = display_path(&eff.repo_root, &loaded.source_path);
    let diagnosis = diagnose(&loaded.inspector, eff);
    let issues = diagnosis
        .violations
        .into_iter()
        .map(|(_, v)| Issue {
            file: file.clone(),
            rule: MEMBER_ORDER.id.to_string(),
            severity: eff.level.as_str().to_string(),
            type_name: v.type_name.clone(),
            member: v.member_name.clone(),
            line: v.position.line,
            column: v.position.column,
            message: v.message(&eff.message),
        })
        .collect();
    let skipped = diagnosis
        .failures
        .into_iter()
        .map(|(name, e)| Skipped {
            file: file.clone(),
            type_name: Some(name),
            reason: e.to_string(),
        })
        .collect();
    (issues, skipped, diagnosis.analyzed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve_effective, Overrides};
    use std::fs;
    use tempfile::tempdir;

    fn write_snapshot(root: &Path, name: &str, types: serde_json::Value) {
        let snap = serde_json::json!({ "source": format!("{}.cs", name), "types": types });
        fs::write(
            root.join(format!("{}.members.json", name)),
            serde_json::to_string_pretty(&snap).unwrap(),
        )
        .unwrap();
    }

    fn effective(root: &Path) -> Effective {
        resolve_effective(&Overrides {
            repo_root: Some(root.to_path_buf()),
            ..Overrides::default()
        })
        .unwrap()
    }

    fn misordered(name: &str, kind: &str) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "kind": kind,
            "members": [
                { "name": "Hidden", "kind": "property", "accessibility": "private", "line": 3, "column": 25 },
                { "name": "Shown", "kind": "property", "accessibility": "public", "line": 5, "column": 24 }
            ]
        })
    }

    #[test]
    fn reports_one_issue_per_misordered_class() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        write_snapshot(
            root,
            "Widgets",
            serde_json::json!([misordered("A", "class"), misordered("B", "struct"), misordered("C", "class")]),
        );
        let res = run_lint(&effective(root));
        assert_eq!(res.summary.files, 1);
        assert_eq!(res.summary.types, 2);
        assert_eq!(res.summary.errors, 2);
        let types: Vec<&str> = res.issues.iter().map(|i| i.type_name.as_str()).collect();
        assert_eq!(types, vec!["A", "C"]);
        assert_eq!(res.issues[0].message, "Shown should be moved");
        assert_eq!(res.issues[0].rule, "MemberOrder");
        assert_eq!((res.issues[0].line, res.issues[0].column), (5, 24));
        assert_eq!(res.issues[0].file, "Widgets.cs");
    }

    #[test]
    fn uninspectable_type_is_skipped_not_reported() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        write_snapshot(
            root,
            "Partial",
            serde_json::json!([{
                "name": "P",
                "members": [
                    { "name": "X", "kind": "method", "line": 1, "column": 1 },
                    { "name": "Y", "kind": "method", "accessibility": "public", "line": 2, "column": 1 }
                ]
            }, misordered("Q", "class")]),
        );
        let res = run_lint(&effective(root));
        assert_eq!(res.summary.skipped, 1);
        assert_eq!(res.skipped[0].type_name.as_deref(), Some("P"));
        assert_eq!(res.issues.len(), 1);
        assert_eq!(res.issues[0].type_name, "Q");
    }

    #[test]
    fn config_level_message_and_switch_apply() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_snapshot(root, "W", serde_json::json!([misordered("W", "class")]));
        fs::write(
            root.join("membersort.toml"),
            "[rule]\nlevel = \"warn\"\nmessage = \"{0} belongs higher up\"\n",
        )
        .unwrap();
        let res = run_lint(&effective(root));
        assert_eq!(res.summary.errors, 0);
        assert_eq!(res.summary.warnings, 1);
        assert_eq!(res.issues[0].message, "Shown belongs higher up");

        fs::write(root.join("membersort.toml"), "[rule]\nenabled = false\n").unwrap();
        let res = run_lint(&effective(root));
        assert!(res.issues.is_empty());
    }
}
