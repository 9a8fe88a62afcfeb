//! Git command runner for nodebug.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations go through this module.

use crate::error::{NodebugError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(NodebugError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = exec_git(cwd.as_ref(), args)?;
    Ok(GitOutput::from_output(&output))
}

/// Run a git command and return stdout exactly as produced.
///
/// Diff text must not be trimmed: leading whitespace on an added line is
/// part of its content.
pub fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<String> {
    let output = exec_git(cwd.as_ref(), args)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn exec_git(cwd: &Path, args: &[&str]) -> Result<Output> {
    tracing::debug!(cwd = %cwd.display(), args = ?args, "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            NodebugError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                subcommand(args),
                e
            ))
        })?;

    if output.status.success() {
        return Ok(output);
    }

    let git_output = GitOutput::from_output(&output);
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if git_output.stderr.is_empty() {
        git_output.stdout
    } else {
        git_output.stderr
    };

    Err(NodebugError::GitError(format!(
        "git {} failed (exit code {}): {}",
        subcommand(args),
        exit_code,
        error_msg
    )))
}

/// First argument after any leading `-c key=value` pairs.
fn subcommand<'a>(args: &[&'a str]) -> &'a str {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if *arg == "-c" {
            iter.next();
            continue;
        }
        return arg;
    }
    ""
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(NodebugError::UserError)` - If not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = run_git(cwd, &["rev-parse", "--show-toplevel"]).map_err(not_a_repo)?;
    Ok(PathBuf::from(&output.stdout))
}

/// Resolve the directory git reads hooks from.
///
/// Uses `git rev-parse --git-path hooks`, which honours `core.hooksPath`
/// and linked worktrees. Relative answers are resolved against `cwd`.
pub fn hooks_dir<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();
    let output = run_git(cwd, &["rev-parse", "--git-path", "hooks"]).map_err(not_a_repo)?;

    let path = PathBuf::from(&output.stdout);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(cwd.join(path))
    }
}

/// Repo detection failures are user errors (exit 2), not git errors (exit 3).
fn not_a_repo(err: NodebugError) -> NodebugError {
    match err {
        NodebugError::GitError(msg) if msg.contains("not a git repository") => {
            NodebugError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            )
        }
        other => other,
    }
}
