//! Property tests for the fix: it only permutes selected declarations, keeps
//! ties in declaration order, and its output never carries a diagnostic.

use membersort::edit::TextDocument;
use membersort::host::{CancellationToken, MemberInspector, SnapshotInspector};
use membersort::models::member::{AccessibilityLevel, MemberKind};
use membersort::models::snapshot::Snapshot;
use membersort::order::check_scope;
use membersort::reorder::{arrange_members, FixOutcome};
use proptest::prelude::*;
use serde_json::json;

const LEVELS: [AccessibilityLevel; 6] = [
    AccessibilityLevel::Private,
    AccessibilityLevel::ProtectedAndInternal,
    AccessibilityLevel::Protected,
    AccessibilityLevel::Internal,
    AccessibilityLevel::ProtectedOrInternal,
    AccessibilityLevel::Public,
];

fn keyword(level: AccessibilityLevel) -> &'static str {
    match level {
        AccessibilityLevel::Private => "private",
        AccessibilityLevel::ProtectedAndInternal => "private protected",
        AccessibilityLevel::Protected => "protected",
        AccessibilityLevel::Internal => "internal",
        AccessibilityLevel::ProtectedOrInternal => "protected internal",
        _ => "public",
    }
}

fn declaration(i: usize, kind: MemberKind, level: AccessibilityLevel) -> String {
    match kind {
        MemberKind::Method => format!("{} void M{}() {{ }}", keyword(level), i),
        MemberKind::Property => format!("{} int M{} {{ get; }}", keyword(level), i),
        _ => format!("{} int M{};", keyword(level), i),
    }
}

type Row = (MemberKind, AccessibilityLevel);

/// Render a class and the snapshot describing it. Member names encode the
/// generated row, so a rendered text can be re-described after a fix.
fn render(rows: &[(usize, Row)]) -> (String, Snapshot) {
    let mut text = String::from("class T\n{\n");
    let mut members = Vec::new();
    for (line, (i, (kind, level))) in rows.iter().enumerate() {
        let decl = declaration(*i, *kind, *level);
        text.push_str("    ");
        let start = text.len();
        text.push_str(&decl);
        text.push('\n');
        members.push(json!({
            "name": format!("M{}", i),
            "kind": kind,
            "accessibility": level,
            "line": line + 3,
            "column": 5,
            "span": { "start": start, "end": start + decl.len() }
        }));
    }
    text.push_str("}\n");
    let snapshot = serde_json::from_value(json!({
        "source": "T.cs",
        "types": [{ "name": "T", "members": members }]
    }))
    .unwrap();
    (text, snapshot)
}

/// Recover the row order from a rendered class body.
fn rows_of(text: &str, rows: &[(usize, Row)]) -> Vec<(usize, Row)> {
    text.lines()
        .filter_map(|l| {
            let name = l.split_whitespace().find(|w| w.starts_with('M'))?;
            let id: usize = name
                .trim_start_matches('M')
                .trim_end_matches(|c: char| !c.is_ascii_digit())
                .parse()
                .ok()?;
            rows.iter().find(|(i, _)| *i == id).copied()
        })
        .collect()
}

fn selected(kind: MemberKind) -> bool {
    matches!(kind, MemberKind::Method | MemberKind::Property)
}

fn arb_rows() -> impl Strategy<Value = Vec<(usize, Row)>> {
    let kind = prop::sample::select(vec![MemberKind::Method, MemberKind::Property, MemberKind::Field]);
    let level = prop::sample::select(LEVELS.to_vec());
    prop::collection::vec((kind, level), 0..10)
        .prop_map(|v| v.into_iter().enumerate().collect())
}

proptest! {
    #[test]
    fn fix_sorts_selected_slots_and_leaves_fields_in_place(rows in arb_rows()) {
        let (text, snapshot) = render(&rows);
        let inspector = SnapshotInspector::new(snapshot, Some(text.clone()));
        let mut doc = TextDocument::new(text.clone());
        let outcome = arrange_members(&inspector, &mut doc, &[0], &CancellationToken::new()).unwrap();

        let before: Vec<Row> = rows.iter().map(|(_, r)| *r).collect();
        let sorted = before
            .iter()
            .filter(|(k, _)| selected(*k))
            .collect::<Vec<_>>()
            .windows(2)
            .all(|w| w[0].1 >= w[1].1);
        prop_assert_eq!(outcome == FixOutcome::Unchanged, sorted);
        if sorted {
            prop_assert_eq!(doc.text(), text.as_str());
        }

        let after = rows_of(doc.text(), &rows);
        prop_assert_eq!(after.len(), rows.len());
        for (slot, (old, new)) in rows.iter().zip(after.iter()).enumerate() {
            // fields keep their slot; selected slots stay selected
            prop_assert_eq!(selected(old.1 .0), selected(new.1 .0), "slot {}", slot);
            if !selected(old.1 .0) {
                prop_assert_eq!(old, new);
            }
        }

        let mut expected: Vec<(usize, Row)> = rows.iter().copied().filter(|(_, r)| selected(r.0)).collect();
        expected.sort_by(|a, b| b.1 .1.cmp(&a.1 .1));
        let got: Vec<(usize, Row)> = after.into_iter().filter(|(_, r)| selected(r.0)).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn fixed_text_has_no_diagnostic(rows in arb_rows()) {
        let (text, snapshot) = render(&rows);
        let inspector = SnapshotInspector::new(snapshot, Some(text.clone()));
        let mut doc = TextDocument::new(text);
        arrange_members(&inspector, &mut doc, &[0], &CancellationToken::new()).unwrap();

        let (_, again) = render(&rows_of(doc.text(), &rows));
        let reinspected = SnapshotInspector::new(again, Some(doc.into_text()));
        let scope = reinspected.inspect(0).unwrap();
        prop_assert_eq!(check_scope(&scope), None);
    }
}
