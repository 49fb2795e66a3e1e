//! Violation detection for the member ordering rule.
//!
//! The selected members are compared against their stable arrangement (see
//! `ranking::arranged`). Walking declaration order, the first member that the
//! arrangement moves to an earlier slot is the violation: it is more visible
//! than something declared before it. Only that first member is reported.

use crate::models::member::{Selected, TypeScope};
use crate::ranking::arranged;
use crate::rule::Violation;
use crate::select::select;

/// Find the first misplaced member of `selected`, in declaration order.
pub fn find_first_violation<'a>(selected: &[Selected<'a>]) -> Option<Selected<'a>> {
    let indexed: Vec<(usize, Selected<'a>)> = selected.iter().copied().enumerate().collect();
    let target = arranged(&indexed, |(_, s)| s.accessibility());
    // target_slot[i] = slot the member declared at i occupies once arranged
    let mut target_slot = vec![0usize; selected.len()];
    for (slot, (i, _)) in target.iter().enumerate() {
        target_slot[*i] = slot;
    }
    selected
        .iter()
        .enumerate()
        .find(|(i, _)| target_slot[*i] < *i)
        .map(|(_, current)| *current)
}

/// Run selection and checking over one type.
pub fn check_scope(scope: &TypeScope) -> Option<Violation> {
    let selected = select(scope);
    find_first_violation(&selected).map(|s| Violation {
        type_name: scope.name.clone(),
        member_name: s.member.name.clone(),
        position: s.member.position,
    })
}
