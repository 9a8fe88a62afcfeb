//! Public API for diff segmentation.

use crate::error::Result;
use crate::git::run_git_raw;
use std::path::Path;

/// Represents a single added line from a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedLine {
    /// Repository-relative file path (forward slashes).
    pub file_path: String,
    /// The content of the added line (without the leading '+').
    pub content: String,
}

impl AddedLine {
    pub fn new(file_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            content: content.into(),
        }
    }
}

/// Output of one segmentation pass over a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedDiff {
    /// Every path named by a `+++ b/` header, first-seen order, no duplicates.
    pub files: Vec<String>,
    /// Added lines in diff order, each attributed to the file it follows.
    pub added_lines: Vec<AddedLine>,
}

impl StagedDiff {
    pub(super) fn register_file(&mut self, path: &str) {
        if !self.files.iter().any(|f| f == path) {
            self.files.push(path.to_string());
        }
    }

    /// Returns true if the diff named no files at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Get the diff of the currently staged changes.
///
/// Runs `git diff --cached` with prefixes and colouring pinned, so user
/// configuration (`color.ui=always`, `diff.noprefix`, `diff.mnemonicPrefix`,
/// external diff drivers) cannot change the `+++ b/` file header format.
/// `core.quotePath=false` keeps non-ASCII names unquoted; names with tabs,
/// quotes or backslashes are still C-quoted and decoded by the segmenter.
///
/// # Arguments
///
/// * `cwd` - Any directory inside the repository
///
/// # Returns
///
/// * `Ok(String)` - The raw, untrimmed diff text
/// * `Err(NodebugError::GitError)` - Git command failed
pub fn staged_diff<P: AsRef<Path>>(cwd: P) -> Result<String> {
    run_git_raw(
        cwd,
        &[
            "-c",
            "core.quotePath=false",
            "diff",
            "--cached",
            "--no-color",
            "--no-ext-diff",
            "--src-prefix=a/",
            "--dst-prefix=b/",
        ],
    )
}
