//! Configuration discovery and effective settings resolution.
//!
//! membersort reads `membersort.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `patterns`: `["**/*.members.json"]`
//! - `output`: `human`
//! - `type_kinds`: `["class"]`
//! - `ignore_types`: none
//! - `rule.enabled`: true, `rule.level`: `error`, `rule.message`: `{0} should be moved`
//! - `fix.write|diff|check`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ConfigError;
use crate::models::member::TypeKind;
use crate::rule::{Severity, MEMBER_ORDER};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILES: [&str; 3] = ["membersort.toml", "membersort.yaml", "membersort.yml"];
pub const DEFAULT_PATTERN: &str = "**/*.members.json";

#[derive(Debug, Default, Deserialize, Clone)]
/// Rule section under `[rule]`.
pub struct RuleCfg {
    pub enabled: Option<bool>,
    pub level: Option<String>, // error|warn|info
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Fix defaults under `[fix]`.
pub struct FixCfg {
    pub write: Option<bool>,
    pub diff: Option<bool>,
    pub check: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `membersort.toml|yaml`.
pub struct MembersortConfig {
    pub patterns: Option<Vec<String>>,
    pub output: Option<String>,
    pub type_kinds: Option<Vec<TypeKind>>,
    pub ignore_types: Option<Vec<String>>,
    pub rule: Option<RuleCfg>,
    pub fix: Option<FixCfg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    fn parse(s: &str) -> Result<OutputMode, ConfigError> {
        match s {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            other => Err(ConfigError::InvalidValue {
                key: "output",
                value: other.to_string(),
                expected: "human|json",
            }),
        }
    }
}

/// Values given on the command line; `None` defers to config or defaults.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub repo_root: Option<PathBuf>,
    pub output: Option<String>,
    pub snapshots: Vec<String>,
    pub write: Option<bool>,
    pub diff: Option<bool>,
    pub check: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub patterns: Vec<String>,
    pub output: OutputMode,
    pub type_kinds: Vec<TypeKind>,
    pub ignore_types: Vec<Regex>,
    pub enabled: bool,
    pub level: Severity,
    pub message: String,
    pub write: bool,
    pub diff: bool,
    pub check: bool,
}

impl Effective {
    /// Whether a type with this name and kind is subject to the rule.
    pub fn analyzes(&self, name: &str, kind: TypeKind) -> bool {
        self.type_kinds.contains(&kind) && !self.ignore_types.iter().any(|re| re.is_match(name))
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `membersort.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `MembersortConfig` from `membersort.toml` or `membersort.yaml|yml` if present.
pub fn load_config(root: &Path) -> Result<Option<MembersortConfig>, ConfigError> {
    let toml_path = root.join("membersort.toml");
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|source| ConfigError::Toml {
            path: toml_path.clone(),
            source,
        })?;
        debug!(path = %toml_path.display(), "loaded config");
        return Ok(Some(cfg));
    }
    for yml in ["membersort.yaml", "membersort.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
                path: p.clone(),
                source,
            })?;
            debug!(path = %p.display(), "loaded config");
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides) -> Result<Effective, ConfigError> {
    let start = cli.repo_root.clone().unwrap_or_else(|| PathBuf::from("."));
    let start = fs::canonicalize(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let patterns = if !cli.snapshots.is_empty() {
        cli.snapshots.clone()
    } else {
        cfg.patterns
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_PATTERN.to_string()])
    };

    let output = OutputMode::parse(
        cli.output
            .as_deref()
            .or(cfg.output.as_deref())
            .unwrap_or("human"),
    )?;

    let type_kinds = cfg.type_kinds.clone().unwrap_or_else(|| vec![TypeKind::Class]);

    let ignore_types = cfg
        .ignore_types
        .clone()
        .unwrap_or_default()
        .into_iter()
        .map(|pattern| {
            Regex::new(&pattern).map_err(|source| ConfigError::Pattern { pattern, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rule = cfg.rule.clone().unwrap_or_default();
    let enabled = rule.enabled.unwrap_or(MEMBER_ORDER.enabled_by_default);
    let level = match rule.level.as_deref() {
        Some(s) => Severity::parse(s).ok_or_else(|| ConfigError::InvalidValue {
            key: "rule.level",
            value: s.to_string(),
            expected: "error|warn|info",
        })?,
        None => MEMBER_ORDER.severity,
    };
    let message = rule
        .message
        .unwrap_or_else(|| MEMBER_ORDER.message_format.to_string());

    let fix = cfg.fix.clone().unwrap_or_default();
    let write = cli.write.or(fix.write).unwrap_or(false);
    let diff = cli.diff.or(fix.diff).unwrap_or(false);
    let check = cli.check.or(fix.check).unwrap_or(false);

    Ok(Effective {
        repo_root,
        config_found,
        patterns,
        output,
        type_kinds,
        ignore_types,
        enabled,
        level,
        message,
        write,
        diff,
        check,
    })
}
