//! Implementation of the `nodebug check` command.
//!
//! # Steps
//!
//! 1. Obtain the diff text (staged changes, a file, or stdin)
//! 2. Load config and build the scanner
//! 3. Scan and render the report to stdout
//! 4. Fail with `ViolationsFound` (exit 1) if any line matched

use std::io::Read;
use std::path::Path;

use colored::control::{SHOULD_COLORIZE, set_override};

use crate::cli::{CheckArgs, OutputFormat};
use crate::config::ColorChoice;
use crate::diff::staged_diff;
use crate::error::{NodebugError, Result};
use crate::git::get_repo_root;
use crate::report::{render_json, render_text};
use crate::scan::Scanner;

use super::{current_dir, resolve_config};

/// Execute the `nodebug check` command.
///
/// # Exit Codes
///
/// - 0: No added line matched any rule
/// - 1: Violations found
/// - 2: User error (bad config, unreadable diff file, not a repository)
/// - 3: Git error
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let cwd = current_dir()?;

    let diff_text = read_diff(&args, &cwd)?;
    let config = resolve_config(args.config.as_deref(), &cwd)?;

    let scanner = Scanner::from_config(&config)?;
    if scanner.rules().is_empty() {
        tracing::warn!("every rule is disabled; nothing will be rejected");
    }

    let report = scanner.scan(&diff_text);

    match args.format {
        OutputFormat::Text => {
            let colorize = apply_color_choice(args.color.unwrap_or(config.color));
            print!("{}", render_text(&report, colorize));
        }
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(NodebugError::ViolationsFound {
            violations: report.violation_count(),
            files: report.files_with_violations_count(),
        })
    }
}

/// Obtain the complete diff text before any matching runs.
pub(super) fn read_diff(args: &CheckArgs, cwd: &Path) -> Result<String> {
    if args.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| NodebugError::UserError(format!("failed to read diff from stdin: {}", e)))?;
        return Ok(text);
    }

    if let Some(path) = &args.diff_file {
        return std::fs::read_to_string(path).map_err(|e| {
            NodebugError::UserError(format!(
                "failed to read diff file '{}': {}",
                path.display(),
                e
            ))
        });
    }

    let root = get_repo_root(cwd)?;
    staged_diff(root)
}

/// Apply the colour choice to `colored` and report whether to highlight.
fn apply_color_choice(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => {
            set_override(true);
            true
        }
        ColorChoice::Never => {
            set_override(false);
            false
        }
        ColorChoice::Auto => SHOULD_COLORIZE.should_colorize(),
    }
}
