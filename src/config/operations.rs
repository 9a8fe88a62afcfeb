//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{NodebugError, Result};
use crate::rules::builtin_rule_ids;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(NodebugError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            NodebugError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults if it does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| NodebugError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every `disabled_rules` entry names a built-in rule
    /// - `custom_rules` ids are non-empty and unique (also against built-ins)
    /// - `custom_rules` patterns are non-empty
    /// - `exclude_paths` entries are valid globs
    ///
    /// Regex syntax is checked when the rule set is compiled.
    pub fn validate(&self) -> Result<()> {
        let builtin: Vec<&str> = builtin_rule_ids().collect();

        for id in &self.disabled_rules {
            if !builtin.contains(&id.as_str()) {
                return Err(NodebugError::UserError(format!(
                    "config validation failed: unknown rule '{}' in disabled_rules (known: {}).\n\
                     Fix: edit {} and correct or remove this entry.",
                    id,
                    builtin.join(", "),
                    super::CONFIG_FILE_NAME
                )));
            }
        }

        let mut seen: HashSet<&str> = builtin.iter().copied().collect();
        for rule in &self.custom_rules {
            if rule.id.trim().is_empty() {
                return Err(NodebugError::UserError(
                    "config validation failed: custom_rules entries must have a non-empty id"
                        .to_string(),
                ));
            }
            if rule.pattern.is_empty() {
                return Err(NodebugError::UserError(format!(
                    "config validation failed: custom rule '{}' has an empty pattern",
                    rule.id
                )));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(NodebugError::UserError(format!(
                    "config validation failed: duplicate rule id '{}' in custom_rules",
                    rule.id
                )));
            }
        }

        self.exclude_globset()?;

        Ok(())
    }

    /// Compile `exclude_paths` into a glob set (empty set matches nothing).
    pub fn exclude_globset(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        for pattern in &self.exclude_paths {
            let glob = Glob::new(pattern).map_err(|e| {
                NodebugError::UserError(format!(
                    "invalid glob pattern in exclude_paths: '{}' - {}\n\
                     Fix: edit {} and correct or remove this pattern.",
                    pattern,
                    e,
                    super::CONFIG_FILE_NAME
                ))
            })?;
            builder.add(glob);
        }

        builder.build().map_err(|e| {
            NodebugError::UserError(format!("failed to build exclude_paths globset: {}", e))
        })
    }
}
