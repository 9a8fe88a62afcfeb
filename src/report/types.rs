//! Core types for scan reports.

use serde::Serialize;

use crate::rules::{MatchSpan, RuleMatch};

/// A single forbidden-pattern match in an added line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The added line's content (without the leading '+').
    pub line: String,
    /// Id of the rule that matched.
    pub rule_id: String,
    /// The rule's pattern source.
    pub pattern: String,
    /// Matched regions of `line`, for highlighting.
    pub spans: Vec<MatchSpan>,
}

impl Violation {
    /// Create a violation from a rule match against `line`.
    pub fn from_match(line: impl Into<String>, rule_match: RuleMatch) -> Self {
        Self {
            line: line.into(),
            rule_id: rule_match.rule_id,
            pattern: rule_match.pattern,
            spans: rule_match.spans,
        }
    }
}

/// One file of the diff and its violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Repository-relative file path (forward slashes).
    pub path: String,
    /// Violations in append order (empty if the file is clean).
    pub violations: Vec<Violation>,
}

impl FileEntry {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Derived counts over a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Total violations across all files.
    pub violations: usize,
    /// Files with at least one violation.
    pub files_with_violations: usize,
    /// All files named by the diff.
    pub files: usize,
}

/// Result of scanning a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    files: Vec<FileEntry>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` with an empty violation list if not already present.
    pub fn register_file(&mut self, path: &str) {
        if self.position(path).is_none() {
            self.files.push(FileEntry {
                path: path.to_string(),
                violations: Vec::new(),
            });
        }
    }

    /// Append a violation to `path`'s list, registering the file if needed.
    pub fn record(&mut self, path: &str, violation: Violation) {
        let index = match self.position(path) {
            Some(index) => index,
            None => {
                self.register_file(path);
                self.files.len() - 1
            }
        };
        self.files[index].violations.push(violation);
    }

    /// All files in first-seen order, including clean ones.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Look up one file's entry.
    #[cfg(test)]
    pub fn file(&self, path: &str) -> Option<&FileEntry> {
        self.position(path).map(|index| &self.files[index])
    }

    /// Only the files with at least one violation, in first-seen order.
    pub fn files_with_violations(&self) -> impl Iterator<Item = &FileEntry> {
        self.files.iter().filter(|entry| entry.has_violations())
    }

    pub fn violation_count(&self) -> usize {
        self.files_with_violations()
            .map(|entry| entry.violations.len())
            .sum()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn files_with_violations_count(&self) -> usize {
        self.files_with_violations().count()
    }

    /// True when no file has a violation; the commit may proceed.
    pub fn is_clean(&self) -> bool {
        self.files_with_violations_count() == 0
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            violations: self.violation_count(),
            files_with_violations: self.files_with_violations_count(),
            files: self.file_count(),
        }
    }

    fn position(&self, path: &str) -> Option<usize> {
        self.files.iter().position(|entry| entry.path == path)
    }
}
