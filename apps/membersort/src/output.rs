//! Output rendering for lint, fix, and rule commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::config::OutputMode;
use crate::fix::FixResult;
use crate::models::LintResult;
use crate::rule::{RuleDescriptor, FIX_TITLE};
use crate::utils::colors_enabled;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: OutputMode) -> bool {
    output == OutputMode::Human && colors_enabled()
}

fn print_json(value: &JsonVal) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
    }
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, output: OutputMode) {
    match output {
        OutputMode::Json => print_json(&compose_lint_json(res)),
        OutputMode::Human => {
            let color = use_colors(output);
            for is in &res.issues {
                let sev = match is.severity.as_str() {
                    "error" if color => "error".red().bold().to_string(),
                    "warn" if color => "warn".yellow().bold().to_string(),
                    "info" if color => "info".blue().bold().to_string(),
                    other => other.to_string(),
                };
                let loc = format!("{}:{}:{}", is.file, is.line, is.column);
                let loc = if color { loc.bold().to_string() } else { loc };
                println!("{} {}[{}] {} (in {})", loc, sev, is.rule, is.message, is.type_name);
            }
            for sk in &res.skipped {
                let what = match &sk.type_name {
                    Some(t) => format!("{} ({})", sk.file, t),
                    None => sk.file.clone(),
                };
                if color {
                    println!("{} {}: {}", "skipped".bright_black(), what, sk.reason);
                } else {
                    println!("skipped {}: {}", what, sk.reason);
                }
            }
            let summary = format!(
                "Summary: errors={} warnings={} infos={} files={} types={} skipped={}",
                res.summary.errors,
                res.summary.warnings,
                res.summary.infos,
                res.summary.files,
                res.summary.types,
                res.summary.skipped
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print fix results. When `write` is false, previews and diffs can be
/// emitted; otherwise only file statuses are shown.
pub fn print_fix(results: &[FixResult], output: OutputMode, write: bool, diff: bool) {
    match output {
        OutputMode::Json => print_json(&compose_fix_json(results, write, diff)),
        OutputMode::Human => {
            let color = use_colors(output);
            for r in results {
                if let Some(err) = &r.error {
                    if color {
                        println!("{} {}: {}", "failed:".red().bold(), r.file.bold(), err);
                    } else {
                        println!("failed: {}: {}", r.file, err);
                    }
                } else if !r.changed {
                    if color {
                        println!("{} {}", "no changes:".bright_black(), r.file);
                    } else {
                        println!("no changes: {}", r.file);
                    }
                } else if write {
                    let types = r.types.join(", ");
                    if color {
                        println!("{} {} ({})", "arranged:".green().bold(), r.file.bold(), types);
                    } else {
                        println!("arranged: {} ({})", r.file, types);
                    }
                } else if diff {
                    if let Some(d) = build_diff(r) {
                        print!("{}", d);
                    }
                } else if let Some(prev) = &r.preview {
                    if color {
                        println!("{} {}\n{}", "---".cyan().bold(), r.file.bold(), prev);
                    } else {
                        println!("--- {}\n{}", r.file, prev);
                    }
                }
            }
        }
    }
}

/// Print the rule identity and its code action.
pub fn print_rule(rule: &RuleDescriptor, output: OutputMode) {
    match output {
        OutputMode::Json => print_json(&json!({ "rule": rule, "fix": { "title": FIX_TITLE } })),
        OutputMode::Human => {
            println!("{}: {}", rule.id, rule.title);
            println!("  severity: {}", rule.severity.as_str());
            println!("  category: {}", rule.category);
            println!("  enabled by default: {}", rule.enabled_by_default);
            println!("  message: {}", rule.message_format);
            println!("  fix: {}", FIX_TITLE);
            println!();
            println!("{}", rule.description);
        }
    }
}

fn build_diff(r: &FixResult) -> Option<String> {
    let old = r.original.as_deref()?;
    let new = r.preview.as_deref()?;
    let patch = diffy::create_patch(old, new).to_string();
    Some(
        patch
            .replacen("--- original", &format!("--- a/{}", r.file), 1)
            .replacen("+++ modified", &format!("+++ b/{}", r.file), 1),
    )
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    serde_json::to_value(res).unwrap_or(JsonVal::Null)
}

/// Compose fix JSON object (pure) for testing/snapshot purposes.
pub fn compose_fix_json(results: &[FixResult], write: bool, diff: bool) -> JsonVal {
    let items: Vec<_> = results
        .iter()
        .map(|r| {
            json!({
                "file": r.file,
                "changed": r.changed,
                "types": r.types,
                "wrote": write && r.changed,
                "preview": if !write { r.preview.as_ref() } else { None },
                "diff": if diff && !write { build_diff(r) } else { None },
                "error": r.error,
            })
        })
        .collect();
    let summary = json!({
        "changed": results.iter().filter(|r| r.changed).count(),
        "failed": results.iter().filter(|r| r.error.is_some()).count(),
        "total": results.len(),
        "wrote": if write { results.iter().filter(|r| r.changed).count() } else { 0 },
    });
    json!({"results": items, "summary": summary})
}
