//! Member selection: which members of a type the ordering rule governs.

use crate::models::member::{MemberKind, Selected, TypeScope};

/// Filter `scope` down to the members subject to the ordering rule.
///
/// Constructors, property accessors and fields are never selected; methods
/// and properties are kept in declaration order and numbered by their
/// position among the kept members.
pub fn select(scope: &TypeScope) -> Vec<Selected<'_>> {
    scope
        .members
        .iter()
        .filter(|m| matches!(m.kind, MemberKind::Method | MemberKind::Property))
        .enumerate()
        .map(|(original_index, member)| Selected {
            original_index,
            member,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::{AccessibilityLevel, Member, Position, TypeKind};

    fn member(name: &str, kind: MemberKind, accessibility: AccessibilityLevel) -> Member {
        Member {
            name: name.into(),
            kind,
            accessibility,
            position: Position { line: 1, column: 1 },
            declaration: None,
        }
    }

    #[test]
    fn empty_type_selects_nothing() {
        let scope = TypeScope::new("Empty", TypeKind::Class, vec![]);
        assert!(select(&scope).is_empty());
    }

    #[test]
    fn excludes_constructors_fields_and_accessors() {
        use AccessibilityLevel::*;
        let scope = TypeScope::new(
            "Widget",
            TypeKind::Class,
            vec![
                member("_count", MemberKind::Field, Public),
                member(".ctor", MemberKind::Constructor, Private),
                member("Count", MemberKind::Property, Public),
                member("get_Count", MemberKind::PropertyAccessor, Private),
                member("Render", MemberKind::Method, Internal),
                member("Changed", MemberKind::Other, Public),
            ],
        );
        let selected = select(&scope);
        let names: Vec<&str> = selected.iter().map(|s| s.member.name.as_str()).collect();
        assert_eq!(names, vec!["Count", "Render"]);
        let indices: Vec<usize> = selected.iter().map(|s| s.original_index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn selection_is_deterministic() {
        let scope = TypeScope::new(
            "Widget",
            TypeKind::Class,
            vec![
                member("A", MemberKind::Method, AccessibilityLevel::Private),
                member("B", MemberKind::Property, AccessibilityLevel::Public),
            ],
        );
        assert_eq!(select(&scope), select(&scope));
    }
}
