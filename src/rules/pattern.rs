//! The `Rule` capability and its regex-backed implementation.

use regex::Regex;
use serde::Serialize;

/// A matched region of an added line, as byte offsets into that line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl From<regex::Match<'_>> for MatchSpan {
    fn from(m: regex::Match<'_>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        }
    }
}

/// A forbidden pattern that can be tested against a single added line.
pub trait Rule: Send + Sync {
    /// Stable identifier (e.g., `debugger`).
    fn id(&self) -> &str;

    /// One-line human-readable description.
    fn description(&self) -> &str;

    /// Source form of the pattern, for reports and listings.
    fn pattern(&self) -> &str;

    /// Every non-overlapping match in `line`; empty when the rule does not match.
    fn find(&self, line: &str) -> Vec<MatchSpan>;
}

/// A rule backed by a compiled regular expression.
#[derive(Debug, Clone)]
pub struct PatternRule {
    id: String,
    description: String,
    regex: Regex,
}

impl PatternRule {
    /// Compile a pattern rule.
    ///
    /// # Returns
    ///
    /// * `Ok(PatternRule)` - Successfully compiled rule
    /// * `Err(regex::Error)` - The pattern is not valid `regex` syntax
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            id: id.into(),
            description: description.into(),
            regex: Regex::new(pattern)?,
        })
    }
}

impl Rule for PatternRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    fn find(&self, line: &str) -> Vec<MatchSpan> {
        self.regex.find_iter(line).map(MatchSpan::from).collect()
    }
}
