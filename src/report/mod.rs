//! Report model and rendering for nodebug.
//!
//! A [`Report`] maps every file named by the diff (first-seen order) to the
//! violations found in its added lines (append order). Files with no
//! violations stay in the report so summaries can say "N of M files".

mod render;
mod types;


// Re-export public API
pub use render::{render_json, render_text};
pub use types::{FileEntry, Report, ReportSummary, Violation};
