//! membersort CLI binary entry point.
//! Delegates to the library for lint/fix and prints results.

use clap::Parser;
use membersort::cli::{Cli, Commands};
use membersort::config::{self, Effective, OutputMode, Overrides};
use membersort::error::ConfigError;
use membersort::host::CancellationToken;
use membersort::rule::MEMBER_ORDER;
use membersort::{fix, lint, output, utils};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            eprintln!("{} {}", utils::error_prefix(), e);
            match e.downcast_ref::<ConfigError>() {
                Some(ce) => ExitCode::from(ce.exit_code()),
                None => ExitCode::from(1),
            }
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lint {
            repo_root,
            output,
            snapshots,
        } => {
            let eff = resolve(Overrides {
                repo_root,
                output,
                snapshots,
                ..Overrides::default()
            })?;
            let result = lint::run_lint(&eff);
            output::print_lint(&result, eff.output);
            if result.summary.errors > 0 {
                return Ok(ExitCode::from(1));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Fix {
            repo_root,
            write,
            diff,
            check,
            output,
            snapshots,
        } => {
            let eff = resolve(Overrides {
                repo_root,
                output,
                snapshots,
                write: write.then_some(true),
                diff: diff.then_some(true),
                check: check.then_some(true),
            })?;
            // --diff/--check force a dry run for this invocation
            let eff_write = if eff.diff || eff.check { false } else { eff.write };
            let results = fix::run_fix(
                &eff,
                eff_write,
                eff.diff || eff.check,
                &CancellationToken::new(),
            );
            output::print_fix(&results, eff.output, eff_write, eff.diff);
            if results.iter().any(|r| r.error.is_some()) {
                return Ok(ExitCode::from(1));
            }
            if eff.check && results.iter().any(|r| r.changed) {
                return Ok(ExitCode::from(1));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Rule { output } => {
            let mode = match output.as_deref() {
                Some("json") => OutputMode::Json,
                _ => OutputMode::Human,
            };
            output::print_rule(&MEMBER_ORDER, mode);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve(overrides: Overrides) -> anyhow::Result<Effective> {
    let eff = config::resolve_effective(&overrides)?;
    if !eff.config_found && eff.output == OutputMode::Human {
        eprintln!(
            "{} No membersort.toml found; using defaults.",
            utils::note_prefix()
        );
    }
    Ok(eff)
}
