//! In-memory text document that applies replacement plans atomically.

use crate::error::TransformError;
use crate::host::DeclarationEditor;
use crate::models::member::Span;
use crate::reorder::ReplacementPlan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl DeclarationEditor for TextDocument {
    /// Either every replacement of every plan lands, or the text is untouched.
    fn apply(&mut self, plans: &[ReplacementPlan]) -> Result<(), TransformError> {
        let edits: Vec<(Span, &str)> = plans
            .iter()
            .flat_map(|p| p.replacements.iter())
            .map(|r| (r.span, r.content.as_str()))
            .collect();
        self.text = apply_replacements(&self.text, &edits)?;
        Ok(())
    }
}

/// Replace each span of `source` with its content.
///
/// Spans must be in range, on character boundaries and pairwise disjoint.
pub fn apply_replacements(source: &str, edits: &[(Span, &str)]) -> Result<String, TransformError> {
    let len = source.len();
    let mut sorted = edits.to_vec();
    sorted.sort_by(|(a, _), (b, _)| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

    let mut previous_end: Option<usize> = None;
    for (span, _) in &sorted {
        if span.start > span.end
            || span.end > len
            || !source.is_char_boundary(span.start)
            || !source.is_char_boundary(span.end)
        {
            return Err(TransformError::OutOfRange { span: *span, len });
        }
        if let Some(end) = previous_end {
            if span.start < end {
                return Err(TransformError::OverlappingDeclarations {
                    previous_end: end,
                    next_start: span.start,
                });
            }
        }
        previous_end = Some(span.end);
    }

    let mut output = source.to_string();
    for (span, content) in sorted.iter().rev() {
        output.replace_range(span.start..span.end, content);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    #[test]
    fn replacements_apply_back_to_front() {
        let out = apply_replacements("aa bb cc", &[(span(0, 2), "cc"), (span(6, 8), "aa")]).unwrap();
        assert_eq!(out, "cc bb aa");
    }

    #[test]
    fn different_lengths_do_not_shift_other_spans() {
        let out = apply_replacements("x; yyyy;", &[(span(0, 1), "yyyy"), (span(3, 7), "x")]).unwrap();
        assert_eq!(out, "yyyy; x;");
    }

    #[test]
    fn overlap_is_rejected() {
        let err = apply_replacements("abcdef", &[(span(0, 3), "x"), (span(2, 4), "y")]).unwrap_err();
        assert_eq!(
            err,
            TransformError::OverlappingDeclarations {
                previous_end: 3,
                next_start: 2
            }
        );
    }

    #[test]
    fn out_of_range_is_rejected_and_document_untouched() {
        let mut doc = TextDocument::new("abc");
        let plan = ReplacementPlan {
            type_name: "T".into(),
            replacements: vec![crate::reorder::Replacement {
                original_index: 0,
                span: span(1, 9),
                content: "zz".into(),
            }],
        };
        assert!(matches!(
            doc.apply(&[plan]),
            Err(TransformError::OutOfRange { .. })
        ));
        assert_eq!(doc.text(), "abc");
    }
}
