//! Implementation of the `nodebug rules` command.

use crate::cli::RulesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::rules::{BUILTIN_RULES, Rule, RuleSet};

use super::{current_dir, resolve_config};

/// Execute the `nodebug rules` command.
pub fn cmd_rules(args: RulesArgs) -> Result<()> {
    let cwd = current_dir()?;
    let config = resolve_config(args.config.as_deref(), &cwd)?;
    let rules = RuleSet::from_config(&config)?;

    print!("{}", format_rules(&rules, &config));
    Ok(())
}

/// Render the active rule set, followed by any disabled built-ins.
fn format_rules(rules: &RuleSet, config: &Config) -> String {
    let mut out = format!("Active rules ({}):\n", rules.len());

    let width = rules.iter().map(|r| r.id().len()).max().unwrap_or(0);
    for rule in rules.iter() {
        out.push_str(&format!("  {:<width$}  {}\n", rule.id(), rule.pattern()));
        if !rule.description().is_empty() {
            out.push_str(&format!("  {:<width$}  {}\n", "", rule.description()));
        }
    }

    let disabled: Vec<&str> = BUILTIN_RULES
        .iter()
        .map(|r| r.id())
        .filter(|id| config.disabled_rules.iter().any(|d| d == id))
        .collect();
    if !disabled.is_empty() {
        out.push_str(&format!("\nDisabled built-in rules: {}\n", disabled.join(", ")));
    }

    out
}
