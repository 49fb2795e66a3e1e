//! Error types for membersort.
//!
//! This module separates:
//! - Inspection failures: the host could not describe a type; that type is
//!   skipped and nothing is reported for it.
//! - Transform failures: a reorder plan could not be built or applied safely;
//!   the document is left unchanged and the caller is told.
//! - Configuration failures (exit code 2).

use crate::models::member::Span;
use std::path::PathBuf;
use thiserror::Error;

/// The host could not supply symbol or syntax data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InspectError {
    #[error("no type at index {index}")]
    MissingType { index: usize },

    #[error("member '{member}' of '{type_name}' has no kind")]
    MissingKind { type_name: String, member: String },

    #[error("member '{member}' of '{type_name}' has no accessibility")]
    MissingAccessibility { type_name: String, member: String },

    #[error("source text is unavailable: {path}")]
    SourceUnavailable { path: String },

    #[error("declaration span {}..{} is not valid in a {len}-byte document", span.start, span.end)]
    InvalidSpan { span: Span, len: usize },
}

/// A reorder plan could not be constructed or applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("member '{member}' has no declaration span")]
    MissingDeclaration { member: String },

    #[error("declarations overlap: one ends at byte {previous_end}, the next starts at byte {next_start}")]
    OverlappingDeclarations {
        previous_end: usize,
        next_start: usize,
    },

    #[error("replacement {}..{} is outside the {len}-byte document", span.start, span.end)]
    OutOfRange { span: Span, len: usize },
}

/// Failure of the fix transform for one document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixError {
    #[error("inspection unavailable: {0}")]
    Inspect(#[from] InspectError),

    #[error("transform failure: {0}")]
    Transform(#[from] TransformError),
}

/// A snapshot file could not be loaded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration could not be loaded or resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid TOML: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{path} is not valid YAML: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid ignore_types pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown {key} value '{value}' (expected {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ConfigError {
    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_error_wraps_transform_failure() {
        let err = FixError::from(TransformError::MissingDeclaration {
            member: "Counter".into(),
        });
        assert!(matches!(err, FixError::Transform(_)));
        assert!(err.to_string().contains("transform failure"));
        assert!(err.to_string().contains("'Counter' has no declaration span"));
    }

    #[test]
    fn inspect_error_names_member_and_type() {
        let err = InspectError::MissingAccessibility {
            type_name: "Widget".into(),
            member: "Render".into(),
        };
        let msg = FixError::from(err).to_string();
        assert!(msg.contains("inspection unavailable"));
        assert!(msg.contains("'Render' of 'Widget'"));
    }
}
