//! Member-level data model shared by selection, checking and reordering.
//!
//! A `TypeScope` is an immutable snapshot of one type declaration built per
//! analysis pass. Nothing here is mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared accessibility of a member, ordered from least to most visible.
///
/// The discriminants are the rank used for sorting. `ProtectedOrInternal`
/// outranks `Internal`, which outranks `Protected`, which outranks
/// `ProtectedAndInternal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityLevel {
    NotApplicable = 0,
    Private = 1,
    #[serde(alias = "private_protected")]
    ProtectedAndInternal = 2,
    Protected = 3,
    Internal = 4,
    #[serde(alias = "protected_internal")]
    ProtectedOrInternal = 5,
    Public = 6,
}

impl AccessibilityLevel {
    /// Every level, least visible first.
    pub const ALL: [AccessibilityLevel; 7] = [
        AccessibilityLevel::NotApplicable,
        AccessibilityLevel::Private,
        AccessibilityLevel::ProtectedAndInternal,
        AccessibilityLevel::Protected,
        AccessibilityLevel::Internal,
        AccessibilityLevel::ProtectedOrInternal,
        AccessibilityLevel::Public,
    ];

    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Snapshot spelling of the level.
    pub const fn as_str(self) -> &'static str {
        match self {
            AccessibilityLevel::NotApplicable => "not_applicable",
            AccessibilityLevel::Private => "private",
            AccessibilityLevel::ProtectedAndInternal => "protected_and_internal",
            AccessibilityLevel::Protected => "protected",
            AccessibilityLevel::Internal => "internal",
            AccessibilityLevel::ProtectedOrInternal => "protected_or_internal",
            AccessibilityLevel::Public => "public",
        }
    }
}

impl fmt::Display for AccessibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    Property,
    Field,
    Constructor,
    #[serde(alias = "property_get", alias = "property_set")]
    PropertyAccessor,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Record,
    Enum,
    Other,
}

impl TypeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Record => "record",
            TypeKind::Enum => "enum",
            TypeKind::Other => "other",
        }
    }
}

/// 1-based line and column where a member is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Byte range of a full declaration (signature, body, attached trivia) in
/// the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One declared member of a type, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    pub accessibility: AccessibilityLevel,
    pub position: Position,
    pub declaration: Option<Span>,
}

/// All members of one type declaration, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScope {
    pub name: String,
    pub kind: TypeKind,
    pub members: Vec<Member>,
}

impl TypeScope {
    pub fn new(name: impl Into<String>, kind: TypeKind, members: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            kind,
            members,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A member that survived selection, tagged with its index among the
/// selected members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected<'a> {
    pub original_index: usize,
    pub member: &'a Member,
}

impl Selected<'_> {
    pub fn accessibility(&self) -> AccessibilityLevel {
        self.member.accessibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_table_matches_declared_order() {
        let ranks: Vec<u8> = AccessibilityLevel::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(AccessibilityLevel::ProtectedOrInternal > AccessibilityLevel::Internal);
        assert!(AccessibilityLevel::Internal > AccessibilityLevel::Protected);
        assert!(AccessibilityLevel::Protected > AccessibilityLevel::ProtectedAndInternal);
    }

    #[test]
    fn snapshot_spellings_and_aliases_parse() {
        let lvl: AccessibilityLevel = serde_json::from_str("\"private_protected\"").unwrap();
        assert_eq!(lvl, AccessibilityLevel::ProtectedAndInternal);
        let lvl: AccessibilityLevel = serde_json::from_str("\"protected_internal\"").unwrap();
        assert_eq!(lvl, AccessibilityLevel::ProtectedOrInternal);
        for level in AccessibilityLevel::ALL {
            let json = format!("\"{}\"", level);
            let parsed: AccessibilityLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, level);
        }
        let kind: MemberKind = serde_json::from_str("\"property_get\"").unwrap();
        assert_eq!(kind, MemberKind::PropertyAccessor);
    }
}
