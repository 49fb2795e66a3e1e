//! The single ranking function shared by the checker and the reorderer.

use crate::models::member::AccessibilityLevel;
use std::cmp::Ordering;

/// Compare two levels so that the more visible one sorts first.
pub fn more_visible_first(a: AccessibilityLevel, b: AccessibilityLevel) -> Ordering {
    b.rank().cmp(&a.rank())
}

/// Stable arrangement of `items` by descending accessibility.
///
/// Items of equal level keep their relative order.
pub fn arranged<T, F>(items: &[T], level: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> AccessibilityLevel,
{
    let mut sorted = items.to_vec();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| more_visible_first(level(a), level(b)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use AccessibilityLevel::*;

    #[test]
    fn shuffled_levels_sort_into_rank_order() {
        let shuffled = vec![
            Internal,
            Private,
            Public,
            NotApplicable,
            ProtectedAndInternal,
            ProtectedOrInternal,
            Protected,
        ];
        let sorted = arranged(&shuffled, |l| *l);
        assert_eq!(
            sorted,
            vec![
                Public,
                ProtectedOrInternal,
                Internal,
                Protected,
                ProtectedAndInternal,
                Private,
                NotApplicable,
            ]
        );
    }

    #[test]
    fn equal_levels_keep_relative_order() {
        let items = vec![(Private, "a"), (Public, "b"), (Private, "c"), (Public, "d")];
        let sorted = arranged(&items, |(l, _)| *l);
        let names: Vec<&str> = sorted.iter().map(|(_, n)| *n).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }
}
