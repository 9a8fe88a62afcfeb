//! Diff segmentation for nodebug.
//!
//! Turns the text of `git diff --cached` into the ordered list of files the
//! diff touches and the lines added to each of them. Only two kinds of line
//! carry meaning:
//! - `+++ b/<path>` opens a new file context
//! - any other line starting with `+` is an added line of the current file
//!
//! Everything else (`---`, `@@`, `diff --git`, `index`, removed and context
//! lines) is ignored. Hunk line numbers are not tracked.

mod api;
mod helpers;
mod parser;

#[cfg(test)]
mod tests;

// Re-export public API
pub use api::{AddedLine, StagedDiff, staged_diff};
pub use parser::segment_diff;
