//! Snapshot schema: the host frontend's view of one source document.
//!
//! Kind and accessibility are optional on disk so that a partially resolved
//! document can still be loaded; the inspector rejects such types later.

use super::member::{AccessibilityLevel, MemberKind, Span, TypeKind};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
/// Top-level snapshot file.
pub struct Snapshot {
    /// Source document, relative to the snapshot file's directory.
    pub source: String,
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Deserialize, Clone)]
/// A type declaration and its members in file order.
pub struct TypeEntry {
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub members: Vec<MemberEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MemberEntry {
    pub name: String,
    #[serde(default)]
    pub kind: Option<MemberKind>,
    #[serde(default)]
    pub accessibility: Option<AccessibilityLevel>,
    pub line: usize,
    pub column: usize,
    #[serde(default)]
    pub span: Option<Span>,
}
