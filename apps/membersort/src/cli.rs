//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "membersort",
    version,
    about = "Keep type members ordered by accessibility",
    long_about = "membersort — checks that methods and properties are declared most visible first, and rearranges them when they are not.\n\nInput is the member snapshot emitted by a compiler frontend (*.members.json).\nConfiguration precedence: CLI > membersort.toml > defaults.",
    after_help = "Examples:\n  membersort lint\n  membersort lint --snapshot gen/Widget.members.json --output json\n  membersort fix --diff\n  membersort fix --write",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for checking and arranging members.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current membersort version.")]
    Version,
    /// Report misordered members
    #[command(
        about = "Report misordered members",
        long_about = "Check every analyzed type and report its first misordered member. Exits non-zero when an error-level diagnostic is found.",
        after_help = "Examples:\n  membersort lint\n  membersort lint --output json"
    )]
    Lint {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<PathBuf>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long = "snapshot", help = "Snapshot file or glob; repeatable, replaces configured patterns")]
        snapshots: Vec<String>,
    },
    /// Arrange members by accessibility
    #[command(
        about = "Arrange members by accessibility",
        long_about = "Apply the fix to every type with a diagnostic. When --diff or --check is set, write is disabled.",
        after_help = "Examples:\n  membersort fix --diff\n  membersort fix --write"
    )]
    Fix {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<PathBuf>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Write changes to source files")]
        write: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Show diffs for changed files (implies write=false)")]
        diff: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if changes would occur (implies write=false)")]
        check: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long = "snapshot", help = "Snapshot file or glob; repeatable, replaces configured patterns")]
        snapshots: Vec<String>,
    },
    /// Describe the rule
    #[command(
        about = "Describe the rule",
        long_about = "Print the rule id, severity, category, message and fix title."
    )]
    Rule {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
