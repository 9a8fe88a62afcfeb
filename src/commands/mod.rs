//! Command implementations for nodebug.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the config lookup shared by `check` and `rules`.

mod check;
mod install;
mod rules;


use std::path::{Path, PathBuf};

use crate::cli::Command;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{NodebugError, Result};
use crate::git::get_repo_root;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Install(args) => install::cmd_install(args),
        Command::Uninstall => install::cmd_uninstall(),
        Command::Rules(args) => rules::cmd_rules(args),
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        NodebugError::UserError(format!("failed to determine current directory: {}", e))
    })
}

/// Load the config for a command run from `cwd`.
///
/// An explicit path must exist. Otherwise `<repo root>/.nodebug.yaml` is used
/// when present; outside a repository the defaults apply.
fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    match get_repo_root(cwd) {
        Ok(root) => Config::load_or_default(root.join(CONFIG_FILE_NAME)),
        Err(NodebugError::UserError(_)) => Ok(Config::default()),
        Err(e) => Err(e),
    }
}
