//! Implementation of `nodebug install` and `nodebug uninstall`.

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::git::hooks_dir;
use crate::hook::{InstallOutcome, UninstallOutcome, hook_path, install_hook, uninstall_hook};

use super::current_dir;

/// Execute the `nodebug install` command.
pub fn cmd_install(args: InstallArgs) -> Result<()> {
    let hooks = hooks_dir(current_dir()?)?;
    let path = hook_path(&hooks);

    match install_hook(&hooks, args.force)? {
        InstallOutcome::Created => println!("Installed pre-commit hook at {}", path.display()),
        InstallOutcome::Inserted => println!(
            "Inserted nodebug check into existing pre-commit hook at {}",
            path.display()
        ),
        InstallOutcome::Replaced => {
            println!("Replaced pre-commit hook at {}", path.display())
        }
        InstallOutcome::AlreadyInstalled => {
            println!("Pre-commit hook already installed at {}", path.display())
        }
    }

    Ok(())
}

/// Execute the `nodebug uninstall` command.
pub fn cmd_uninstall() -> Result<()> {
    let hooks = hooks_dir(current_dir()?)?;
    let path = hook_path(&hooks);

    match uninstall_hook(&hooks)? {
        UninstallOutcome::Removed => println!("Removed pre-commit hook {}", path.display()),
        UninstallOutcome::Stripped => println!(
            "Removed nodebug check from pre-commit hook {}",
            path.display()
        ),
        UninstallOutcome::NotInstalled => println!("No nodebug pre-commit hook installed."),
    }

    Ok(())
}
