//! CLI argument parsing for nodebug.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ColorChoice;

/// Nodebug: reject commits whose staged lines contain debug statements.
///
/// Scans the lines added by `git diff --cached` for `debugger`,
/// `binding.pry`, `console.log` and friends, and `# NO COMMIT` markers.
/// Exits non-zero when anything is found so git aborts the commit.
#[derive(Parser, Debug)]
#[command(name = "nodebug")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for nodebug.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan staged changes for forbidden patterns.
    ///
    /// Exits 0 when clean and 1 when any added line matches a rule.
    /// This is what the installed pre-commit hook runs.
    Check(CheckArgs),

    /// Install the pre-commit hook into the current repository.
    ///
    /// An existing shell hook is kept and the check is inserted below its
    /// shebang. Hooks for other interpreters need `--force`.
    Install(InstallArgs),

    /// Remove the pre-commit hook block from the current repository.
    Uninstall,

    /// List the active rules.
    Rules(RulesArgs),
}

/// Output format for `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable report with highlighted matches.
    #[default]
    Text,
    /// Machine-readable JSON report.
    Json,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Read the diff from a file instead of running `git diff --cached`.
    #[arg(long, value_name = "PATH", conflicts_with = "stdin")]
    pub diff_file: Option<PathBuf>,

    /// Read the diff from standard input.
    #[arg(long)]
    pub stdin: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colour highlighted matches (overrides config).
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Config file to use instead of `<repo>/.nodebug.yaml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `install` command.
#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Replace an existing pre-commit hook instead of inserting into it.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Config file to use instead of `<repo>/.nodebug.yaml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
