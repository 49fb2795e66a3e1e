//! Rule identity and the violation record handed to reporters.

use crate::models::member::Position;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn parse(s: &str) -> Option<Severity> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Some(Severity::Error),
            "warn" | "warning" => Some(Severity::Warn),
            "info" => Some(Severity::Info),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
        }
    }
}

/// Static description of the ordering rule.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RuleDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub message_format: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub enabled_by_default: bool,
    pub description: &'static str,
}

pub const MEMBER_ORDER: RuleDescriptor = RuleDescriptor {
    id: "MemberOrder",
    title: "Members must be ordered by accessibility",
    message_format: "{0} should be moved",
    category: "Naming",
    severity: Severity::Error,
    enabled_by_default: true,
    description: "Methods and properties are declared most visible first. \
                  Constructors, fields and property accessors are not checked.",
};

/// Title of the code action registered against `MEMBER_ORDER` diagnostics.
pub const FIX_TITLE: &str = "Arrange members by accessibility";

/// Diagnostic ids the code action can fix.
pub const FIXABLE_IDS: &[&str] = &[MEMBER_ORDER.id];

/// The first misplaced member of a type.
///
/// Formatting into a message happens only at the reporting boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub type_name: String,
    pub member_name: String,
    pub position: Position,
}

impl Violation {
    /// Render the message from a `{0}` template.
    pub fn message(&self, template: &str) -> String {
        template.replace("{0}", &self.member_name)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(MEMBER_ORDER.message_format))
    }
}
