//! Git hook installation and management.
//!
//! The hook is a small shell block that runs `nodebug check`. It is wrapped
//! in begin/end marker lines so it can live alongside an existing
//! pre-commit script and be removed again without touching the rest.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{NodebugError, Result};

/// File name of the hook inside the hooks directory.
pub const HOOK_NAME: &str = "pre-commit";

const BEGIN_MARKER: &str = "# >>> nodebug pre-commit guard >>>";
const END_MARKER: &str = "# <<< nodebug pre-commit guard <<<";
const SHEBANG: &str = "#!/bin/sh";

/// Interpreters whose scripts can host the shell block.
const SHELLS: &[&str] = &["sh", "bash", "dash", "zsh", "ksh"];

/// What `install_hook` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// No hook existed; a new script was written.
    Created,
    /// A foreign shell hook existed; the nodebug block was inserted into it.
    Inserted,
    /// `force` overwrote whatever hook was there.
    Replaced,
    /// The nodebug block was already present.
    AlreadyInstalled,
}

/// What `uninstall_hook` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// The hook only contained nodebug and was deleted.
    Removed,
    /// The nodebug block was stripped; the rest of the script was kept.
    Stripped,
    /// No nodebug block was found.
    NotInstalled,
}

/// The marker-delimited block that runs the check.
fn hook_block() -> String {
    format!(
        "{}\n# Rejects staged debug statements. Bypass with: git commit -n\nnodebug check || exit 1\n{}\n",
        BEGIN_MARKER, END_MARKER
    )
}

/// Path of the pre-commit script inside `hooks_dir`.
pub fn hook_path(hooks_dir: &Path) -> PathBuf {
    hooks_dir.join(HOOK_NAME)
}

/// Install the pre-commit hook into `hooks_dir`.
///
/// An existing shell hook that is not ours is preserved and the nodebug
/// block is inserted right below its shebang, so an early `exit` in the
/// script cannot skip the check. Hooks written for another interpreter are
/// refused unless `force` is set, in which case any hook is replaced.
/// Running this again when already installed changes nothing.
pub fn install_hook(hooks_dir: &Path, force: bool) -> Result<InstallOutcome> {
    fs::create_dir_all(hooks_dir).map_err(|e| io_error("create", hooks_dir, e))?;

    let path = hook_path(hooks_dir);
    let fresh = format!("{}\n{}", SHEBANG, hook_block());

    let (content, outcome) = if !path.exists() {
        (fresh, InstallOutcome::Created)
    } else if force {
        (fresh, InstallOutcome::Replaced)
    } else {
        let existing = fs::read_to_string(&path).map_err(|e| io_error("read", &path, e))?;
        if existing.contains(BEGIN_MARKER) {
            return Ok(InstallOutcome::AlreadyInstalled);
        }
        (insert_block(&path, &existing)?, InstallOutcome::Inserted)
    };

    fs::write(&path, content).map_err(|e| io_error("write", &path, e))?;
    make_executable(&path)?;

    info!(path = %path.display(), outcome = ?outcome, "installed pre-commit hook");
    Ok(outcome)
}

/// Place the block directly after the shebang of a foreign shell hook.
///
/// A script without a shebang is run by `sh`, so the block goes on top.
fn insert_block(path: &Path, existing: &str) -> Result<String> {
    if !existing.starts_with("#!") {
        return Ok(format!("{}{}", hook_block(), existing));
    }

    let (shebang, rest) = existing.split_once('\n').unwrap_or((existing, ""));
    match interpreter(shebang) {
        Some(name) if SHELLS.contains(&name) => {
            Ok(format!("{}\n{}{}", shebang, hook_block(), rest))
        }
        other => Err(NodebugError::UserError(format!(
            "existing pre-commit hook at '{}' is not a shell script (interpreter: {}); \
             use --force to replace it",
            path.display(),
            other.unwrap_or("unknown")
        ))),
    }
}

/// Program named by a `#!` line, looking through `/usr/bin/env`.
fn interpreter(shebang: &str) -> Option<&str> {
    let mut words = shebang.strip_prefix("#!")?.split_whitespace();
    let program = basename(words.next()?);
    if program == "env" {
        words
            .find(|w| !w.starts_with('-') && !w.contains('='))
            .map(basename)
    } else {
        Some(program)
    }
}

fn basename(program: &str) -> &str {
    program.rsplit('/').next().unwrap_or(program)
}

/// Remove the nodebug block from the pre-commit hook in `hooks_dir`.
pub fn uninstall_hook(hooks_dir: &Path) -> Result<UninstallOutcome> {
    let path = hook_path(hooks_dir);
    if !path.exists() {
        return Ok(UninstallOutcome::NotInstalled);
    }

    let content = fs::read_to_string(&path).map_err(|e| io_error("read", &path, e))?;
    if !content.contains(BEGIN_MARKER) {
        return Ok(UninstallOutcome::NotInstalled);
    }

    let cleaned = remove_block(&content);
    let outcome = if cleaned.trim().is_empty() || cleaned.trim() == SHEBANG {
        fs::remove_file(&path).map_err(|e| io_error("remove", &path, e))?;
        UninstallOutcome::Removed
    } else {
        fs::write(&path, cleaned).map_err(|e| io_error("write", &path, e))?;
        UninstallOutcome::Stripped
    };

    info!(path = %path.display(), outcome = ?outcome, "uninstalled pre-commit hook");
    Ok(outcome)
}

/// Drop every line from a begin marker through its end marker.
fn remove_block(content: &str) -> String {
    let mut kept = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        if line.trim() == BEGIN_MARKER {
            inside = true;
            continue;
        }
        if inside {
            if line.trim() == END_MARKER {
                inside = false;
            }
            continue;
        }
        kept.push(line);
    }

    let mut cleaned = kept.join("\n").trim_end().to_string();
    cleaned.push('\n');
    cleaned
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| io_error("stat", path, e))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).map_err(|e| io_error("chmod", path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> NodebugError {
    NodebugError::UserError(format!(
        "failed to {} '{}': {}",
        action,
        path.display(),
        e
    ))
}
