//! Reordering: the code action behind `MemberOrder` diagnostics.
//!
//! The selected declarations are stably arranged by descending accessibility
//! (same ranking as the checker) and original slot `i` receives the full text
//! of `target[i]`. Members that are not selected keep their bytes and their
//! place. Plans for several types of one document are applied in a single
//! atomic edit, since every span refers to the same unedited snapshot.

use crate::error::{FixError, TransformError};
use crate::host::{CancellationToken, DeclarationEditor, MemberInspector};
use crate::models::member::{Selected, Span};
use crate::order::find_first_violation;
use crate::ranking::arranged;
use crate::select::select;
use tracing::debug;

/// A selected member together with its declaration text.
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'a> {
    pub member: Selected<'a>,
    pub span: Span,
    pub content: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Slot among the selected members that this replacement fills.
    pub original_index: usize,
    pub span: Span,
    pub content: String,
}

/// Positional replacement mapping for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPlan {
    pub type_name: String,
    pub replacements: Vec<Replacement>,
}

impl ReplacementPlan {
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// Plans were applied; one entry per rearranged type.
    Applied(Vec<String>),
    /// No type needed rearranging.
    Unchanged,
    Cancelled,
}

/// Build the replacement plan for one type's selected declarations.
pub fn reorder(type_name: &str, declarations: &[Declaration<'_>]) -> ReplacementPlan {
    let target = arranged(declarations, |d| d.member.accessibility());
    let replacements: Vec<Replacement> = declarations
        .iter()
        .zip(target.iter())
        .enumerate()
        .map(|(i, (slot, incoming))| Replacement {
            original_index: i,
            span: slot.span,
            content: incoming.content.to_string(),
        })
        .collect();
    ReplacementPlan {
        type_name: type_name.to_string(),
        replacements,
    }
}

/// Plan the rearrangement of the type at `index`, or `None` when its members
/// are already in order.
pub fn plan_type<I: MemberInspector>(
    inspector: &I,
    index: usize,
) -> Result<Option<ReplacementPlan>, FixError> {
    let scope = inspector.inspect(index)?;
    let selected = select(&scope);
    if find_first_violation(&selected).is_none() {
        return Ok(None);
    }
    let mut declarations = Vec::with_capacity(selected.len());
    for s in &selected {
        let span = s
            .member
            .declaration
            .ok_or_else(|| TransformError::MissingDeclaration {
                member: s.member.name.clone(),
            })?;
        let content = inspector.declaration_text(span)?;
        declarations.push(Declaration {
            member: *s,
            span,
            content,
        });
    }
    let plan = reorder(&scope.name, &declarations);
    debug!(type_name = %scope.name, replacements = plan.len(), "planned member rearrangement");
    Ok(Some(plan))
}

/// Rearrange every type in `types` and commit the result through `editor`.
///
/// Nothing is committed if any type fails to plan or if `cancel` fires
/// before the commit.
pub fn arrange_members<I, E>(
    inspector: &I,
    editor: &mut E,
    types: &[usize],
    cancel: &CancellationToken,
) -> Result<FixOutcome, FixError>
where
    I: MemberInspector,
    E: DeclarationEditor,
{
    if cancel.is_cancelled() {
        return Ok(FixOutcome::Cancelled);
    }
    let mut plans = Vec::new();
    for &index in types {
        if let Some(plan) = plan_type(inspector, index)? {
            plans.push(plan);
        }
    }
    if plans.is_empty() {
        return Ok(FixOutcome::Unchanged);
    }
    if cancel.is_cancelled() {
        return Ok(FixOutcome::Cancelled);
    }
    editor.apply(&plans)?;
    Ok(FixOutcome::Applied(
        plans.into_iter().map(|p| p.type_name).collect(),
    ))
}
