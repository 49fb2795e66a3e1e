//! membersort core library.
//!
//! A lint rule that keeps a type's methods and properties declared in
//! descending order of accessibility, plus the code fix that restores that
//! order. The compiler frontend is a collaborator: it hands over a member
//! snapshot per document, and the rule works only through the seams in
//! `host`.
//!
//! High-level modules:
//! - `models`: Member/type model, snapshot schema, lint output structs.
//! - `ranking`: The one accessibility ranking shared by check and fix.
//! - `select`: Which members the rule governs.
//! - `order`: First-violation detection.
//! - `reorder`: Replacement plans and the atomic fix transform.
//! - `host`: `MemberInspector` / `DeclarationEditor` seams and cancellation.
//! - `edit`: Text document editor used by the fix.
//! - `rule`: Rule identity and the violation record.
//! - `lint` / `fix`: Parallel runners over snapshot files.
//! - `config`, `cli`, `output`: Configuration, argument parsing, printers.
pub mod cli;
pub mod config;
pub mod edit;
pub mod error;
pub mod fix;
pub mod host;
pub mod lint;
pub mod models;
pub mod order;
pub mod output;
pub mod ranking;
pub mod reorder;
pub mod rule;
pub mod select;
pub mod snapshot;
pub mod utils;
