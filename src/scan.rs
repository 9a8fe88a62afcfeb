//! Scanning a diff for forbidden patterns.
//!
//! Ties the segmenter to the rule set: every `+++ b/` file is registered in
//! the report, and every added line of a non-excluded file is tested against
//! every rule. Scanning does no I/O and keeps no state between runs.

use globset::GlobSet;
use tracing::debug;

use crate::config::Config;
use crate::diff::segment_diff;
use crate::error::Result;
use crate::report::{Report, Violation};
use crate::rules::RuleSet;

/// A compiled rule set plus the paths it should not look at.
#[derive(Debug)]
pub struct Scanner {
    rules: RuleSet,
    exclude: GlobSet,
}

impl Scanner {
    /// A scanner that checks every file with `rules`.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            exclude: GlobSet::empty(),
        }
    }

    /// Build the scanner described by config (rules and `exclude_paths`).
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            rules: RuleSet::from_config(config)?,
            exclude: config.exclude_globset()?,
        })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Scan raw diff text and build the report.
    pub fn scan(&self, diff_text: &str) -> Report {
        let staged = segment_diff(diff_text);
        let mut report = Report::new();

        if staged.is_empty() {
            debug!("diff names no files");
            return report;
        }

        for path in &staged.files {
            report.register_file(path);
        }

        for added in &staged.added_lines {
            if self.exclude.is_match(&added.file_path) {
                continue;
            }

            for rule_match in self.rules.matches(&added.content) {
                report.record(
                    &added.file_path,
                    Violation::from_match(added.content.as_str(), rule_match),
                );
            }
        }

        debug!(
            files = report.file_count(),
            violations = report.violation_count(),
            "scan complete"
        );

        report
    }
}
