//! Host seams: how the rule sees a document and how it edits one.
//!
//! The core only talks to `MemberInspector` and `DeclarationEditor`.
//! `SnapshotInspector` backs the inspector with a snapshot file emitted by
//! the host frontend.

use crate::error::{InspectError, TransformError};
use crate::models::member::{Member, Position, Span, TypeKind, TypeScope};
use crate::models::snapshot::{Snapshot, TypeEntry};
use crate::reorder::ReplacementPlan;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Read-only view of the types declared in one document.
pub trait MemberInspector {
    fn type_count(&self) -> usize;

    /// Name and kind of the type at `index`, without resolving members.
    fn describe(&self, index: usize) -> Option<(&str, TypeKind)>;

    /// Members of the type at `index`, in declaration order.
    fn inspect(&self, index: usize) -> Result<TypeScope, InspectError>;

    /// Text of a declaration in the document.
    fn declaration_text(&self, span: Span) -> Result<&str, InspectError>;
}

/// Applies replacement plans to a document, all of them or none.
pub trait DeclarationEditor {
    fn apply(&mut self, plans: &[ReplacementPlan]) -> Result<(), TransformError>;
}

/// Cooperative cancellation flag shared between a caller and a transform.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// `MemberInspector` over a loaded snapshot and (optionally) its source text.
#[derive(Debug, Clone)]
pub struct SnapshotInspector {
    source_path: String,
    types: Vec<TypeEntry>,
    source: Option<String>,
}

impl SnapshotInspector {
    pub fn new(snapshot: Snapshot, source: Option<String>) -> Self {
        Self {
            source_path: snapshot.source,
            types: snapshot.types,
            source,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl MemberInspector for SnapshotInspector {
    fn type_count(&self) -> usize {
        self.types.len()
    }

    fn describe(&self, index: usize) -> Option<(&str, TypeKind)> {
        self.types.get(index).map(|t| (t.name.as_str(), t.kind))
    }

    fn inspect(&self, index: usize) -> Result<TypeScope, InspectError> {
        let entry = self
            .types
            .get(index)
            .ok_or(InspectError::MissingType { index })?;
        let mut members = Vec::with_capacity(entry.members.len());
        for m in &entry.members {
            let kind = m.kind.ok_or_else(|| InspectError::MissingKind {
                type_name: entry.name.clone(),
                member: m.name.clone(),
            })?;
            let accessibility =
                m.accessibility
                    .ok_or_else(|| InspectError::MissingAccessibility {
                        type_name: entry.name.clone(),
                        member: m.name.clone(),
                    })?;
            members.push(Member {
                name: m.name.clone(),
                kind,
                accessibility,
                position: Position {
                    line: m.line,
                    column: m.column,
                },
                declaration: m.span,
            });
        }
        Ok(TypeScope::new(entry.name.clone(), entry.kind, members))
    }

    fn declaration_text(&self, span: Span) -> Result<&str, InspectError> {
        let source = self
            .source
            .as_deref()
            .ok_or_else(|| InspectError::SourceUnavailable {
                path: self.source_path.clone(),
            })?;
        if span.start > span.end {
            return Err(InspectError::InvalidSpan {
                span,
                len: source.len(),
            });
        }
        source
            .get(span.start..span.end)
            .ok_or(InspectError::InvalidSpan {
                span,
                len: source.len(),
            })
    }
}
