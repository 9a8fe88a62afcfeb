//! Ordered rule sets and per-line matching.

use serde::Serialize;

use super::catalog::BUILTIN_RULES;
use super::pattern::{MatchSpan, PatternRule, Rule};
use crate::config::Config;
use crate::error::{NodebugError, Result};

/// One rule that matched one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    pub rule_id: String,
    pub pattern: String,
    pub spans: Vec<MatchSpan>,
}

/// An ordered collection of rules.
///
/// Order is significant: [`RuleSet::matches`] reports matches in the order
/// rules were added.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.iter().map(|r| r.id()).collect::<Vec<_>>())
            .finish()
    }
}

impl RuleSet {
    /// A rule set with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The full built-in catalog, in catalog order.
    pub fn builtin() -> Self {
        let mut set = Self::empty();
        for rule in BUILTIN_RULES.iter() {
            set.push(Box::new(rule.clone()));
        }
        set
    }

    /// Build the active rule set from config.
    ///
    /// Enabled built-ins come first in catalog order, followed by
    /// `custom_rules` in config order.
    ///
    /// # Returns
    ///
    /// * `Ok(RuleSet)` - Successfully compiled rule set
    /// * `Err(NodebugError::UserError)` - A custom pattern failed to compile
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut set = Self::empty();

        for rule in BUILTIN_RULES.iter() {
            if config.disabled_rules.iter().any(|id| id == rule.id()) {
                tracing::debug!(rule = rule.id(), "built-in rule disabled by config");
                continue;
            }
            set.push(Box::new(rule.clone()));
        }

        for custom in &config.custom_rules {
            let description = custom.description.clone().unwrap_or_default();
            let rule = PatternRule::new(&custom.id, description, &custom.pattern).map_err(|e| {
                NodebugError::UserError(format!(
                    "invalid regex pattern in custom rule '{}': '{}' - {}\n\
                     Fix: edit {} and correct or remove this rule.",
                    custom.id,
                    custom.pattern,
                    e,
                    crate::config::CONFIG_FILE_NAME
                ))
            })?;
            set.push(Box::new(rule));
        }

        Ok(set)
    }

    /// Append a rule after all existing rules.
    pub fn push(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Iterate the rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn Rule>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Test `line` against every rule; one entry per matching rule, in rule order.
    pub fn matches(&self, line: &str) -> Vec<RuleMatch> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let spans = rule.find(line);
                if spans.is_empty() {
                    None
                } else {
                    Some(RuleMatch {
                        rule_id: rule.id().to_string(),
                        pattern: rule.pattern().to_string(),
                        spans,
                    })
                }
            })
            .collect()
    }
}
