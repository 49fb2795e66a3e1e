//! Shared data models: the member model, the snapshot schema, and lint output.

pub mod member;
pub mod snapshot;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
/// A single diagnostic with severity and location.
pub struct Issue {
    pub file: String,
    pub rule: String,
    pub severity: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub member: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
/// A type or file that could not be analyzed.
pub struct Skipped {
    pub file: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub reason: String,
}

#[derive(Debug, Default, Serialize)]
/// Aggregated lint summary used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub files: usize,
    pub types: usize,
    pub skipped: usize,
}

#[derive(Debug, Default, Serialize)]
/// Lint results container.
pub struct LintResult {
    pub issues: Vec<Issue>,
    pub skipped: Vec<Skipped>,
    pub summary: Summary,
}
