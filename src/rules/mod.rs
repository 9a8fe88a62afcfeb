//! Forbidden-pattern rules for nodebug.
//!
//! A [`Rule`] tests one added line and returns the spans it matched. The
//! built-in catalog is compiled once per process; a [`RuleSet`] combines the
//! enabled built-ins with any project-specific rules from config, in a fixed
//! order, and reports every rule that matches a line.

mod catalog;
mod pattern;
mod ruleset;


// Re-export public API
pub use catalog::{BUILTIN_RULES, builtin_rule_ids};
pub use pattern::{MatchSpan, PatternRule, Rule};
pub use ruleset::{RuleMatch, RuleSet};
