use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;
use std::fs;
use std::io::Write;

// ---------------------------------------------------------------------------
// Functional Core: pure types and logic, no I/O
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckId {
    Fmt,
    Clippy,
    Test,
}

/// A lint check to execute.
struct Check {
    id: CheckId,
    /// Human-readable name shown in output.
    name: &'static str,
    program: &'static str,
    args: &'static [&'static str],
}

enum CheckOutcome {
    Passed { output: String },
    Failed { output: String },
}

struct CheckResult {
    name: String,
    outcome: CheckOutcome,
}

/// The ordered pipeline of checks to run.
const CHECKS: &[Check] = &[
    Check {
        id: CheckId::Fmt,
        name: "cargo fmt --check",
        program: "cargo",
        args: &["fmt", "--check"],
    },
    Check {
        id: CheckId::Clippy,
        name: "cargo clippy --all-targets -- -D warnings",
        program: "cargo",
        args: &["clippy", "--all-targets", "--", "-D", "warnings"],
    },
    Check {
        id: CheckId::Test,
        name: "cargo test --all-targets",
        program: "cargo",
        args: &["test", "--all-targets"],
    },
];

fn should_skip(id: CheckId, args: &LintArgs) -> bool {
    match id {
        CheckId::Fmt => args.no_fmt,
        CheckId::Clippy => args.no_clippy,
        CheckId::Test => args.no_test,
    }
}

/// Args for a check in `--fix` mode, or `None` to keep the defaults.
fn fix_args(id: CheckId) -> Option<Vec<&'static str>> {
    match id {
        CheckId::Fmt => Some(vec!["fmt"]),
        CheckId::Clippy => Some(vec![
            "clippy",
            "--all-targets",
            "--fix",
            "--allow-dirty",
            "--",
            "-D",
            "warnings",
        ]),
        CheckId::Test => None,
    }
}

fn check_display_name(program: &str, args: &[&str]) -> String {
    format!("{} {}", program, args.join(" "))
}

fn format_log_entry(result: &CheckResult) -> String {
    match &result.outcome {
        CheckOutcome::Passed { output } | CheckOutcome::Failed { output } => {
            format!("=== {} ===\n{}\n", result.name, output)
        }
    }
}

// ---------------------------------------------------------------------------
// Imperative Shell: process execution and the log file
// ---------------------------------------------------------------------------

/// Run the lint pipeline, stopping at the first failing check.
pub fn run(args: &LintArgs) -> Result<()> {
    let log_path = resolve_log_path()?;
    let mut log_file = fs::File::create(&log_path)?;

    for check in CHECKS {
        if should_skip(check.id, args) {
            continue;
        }

        let effective_args = if args.fix { fix_args(check.id) } else { None };
        let name = match &effective_args {
            Some(overrides) => check_display_name(check.program, overrides),
            None => check.name.to_string(),
        };

        let result = run_check(check, name, effective_args.as_deref())?;
        write!(log_file, "{}", format_log_entry(&result))?;

        match result.outcome {
            CheckOutcome::Passed { ref output } => {
                if args.verbose {
                    print!("{output}");
                }
            }
            CheckOutcome::Failed { ref output } => {
                print!("{output}");
                println!("log: {log_path}");
                return Err(eyre!("lint failed at: {}", result.name));
            }
        }
    }

    println!("log: {log_path}");
    Ok(())
}

fn run_check(check: &Check, name: String, override_args: Option<&[&str]>) -> Result<CheckResult> {
    let args: &[&str] = override_args.unwrap_or(check.args);

    let output = cmd(check.program, args)
        .stderr_to_stdout()
        .stdout_capture()
        .unchecked()
        .run()?;

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    let outcome = if output.status.success() {
        CheckOutcome::Passed { output: text }
    } else {
        CheckOutcome::Failed { output: text }
    };

    Ok(CheckResult { name, outcome })
}

/// Absolute path to the log file inside `target/`.
fn resolve_log_path() -> Result<String> {
    let target_dir = std::env::current_dir()?.join("target");
    fs::create_dir_all(&target_dir)?;
    let log_path = target_dir.join("xtask-lint.log");
    Ok(log_path.to_string_lossy().into_owned())
}
