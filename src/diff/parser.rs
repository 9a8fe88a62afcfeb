//! Core diff segmentation logic.

use tracing::{debug, trace};

use super::api::{AddedLine, StagedDiff};
use super::helpers::{DiffLine, classify_line, normalize_path};

/// The file added lines are currently attributed to.
///
/// Starts as `NoFile` and only changes on a `+++ b/` header, which replaces
/// the current path wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FileContext {
    NoFile,
    File(String),
}

/// Segment raw diff text into files and their added lines.
///
/// Lines are processed strictly in order with no look-ahead. Added lines
/// that appear before the first header have no file to report against and
/// are dropped.
///
/// # Arguments
///
/// * `diff_text` - Raw unified diff output (as from `git diff --cached`)
///
/// # Returns
///
/// A [`StagedDiff`] with every header path (even those with no additions)
/// and every added line paired with its file.
pub fn segment_diff(diff_text: &str) -> StagedDiff {
    let mut staged = StagedDiff::default();
    let mut context = FileContext::NoFile;
    let mut dropped = 0usize;

    for line in diff_text.lines() {
        match classify_line(line) {
            DiffLine::FileHeader(path) => {
                let path = normalize_path(&path);
                staged.register_file(&path);
                context = FileContext::File(path);
            }
            DiffLine::Addition(content) => match &context {
                FileContext::File(path) => {
                    staged.added_lines.push(AddedLine::new(path.as_str(), content));
                }
                FileContext::NoFile => {
                    trace!(line, "dropping added line before first file header");
                    dropped += 1;
                }
            },
            DiffLine::Ignored => {}
        }
    }

    debug!(
        files = staged.files.len(),
        added_lines = staged.added_lines.len(),
        dropped,
        "segmented diff"
    );

    staged
}
