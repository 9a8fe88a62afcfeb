//! Text and JSON rendering of reports.

use colored::Colorize;
use serde::Serialize;

use super::types::{FileEntry, Report, ReportSummary};
use crate::error::{NodebugError, Result};
use crate::rules::MatchSpan;

/// Format the report for a terminal.
///
/// Output format (clean reports render as the empty string):
/// ```text
///
/// app/models/user.rb
///     +    binding.pry
///
/// 1 violations found in 1 of 3 files
///
/// Use git commit -n to bypass this pre-commit hook
/// ```
///
/// With `colorize`, each matched span is drawn white on red.
pub fn render_text(report: &Report, colorize: bool) -> String {
    if report.is_clean() {
        return String::new();
    }

    let mut out = String::new();

    for entry in report.files_with_violations() {
        out.push('\n');
        out.push_str(&entry.path);
        out.push('\n');

        for violation in &entry.violations {
            out.push_str("\t+");
            out.push_str(&highlight(&violation.line, &violation.spans, colorize));
            out.push('\n');
        }
    }

    let summary = report.summary();
    out.push_str(&format!(
        "\n{} violations found in {} of {} files\n\n",
        summary.violations, summary.files_with_violations, summary.files
    ));

    let bypass = if colorize {
        " git commit -n ".white().bold().to_string()
    } else {
        "git commit -n".to_string()
    };
    out.push_str(&format!("Use {} to bypass this pre-commit hook\n", bypass));

    out
}

/// Rebuild `line` with every span highlighted.
fn highlight(line: &str, spans: &[MatchSpan], colorize: bool) -> String {
    if !colorize {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    let mut cursor = 0;

    for span in spans {
        if span.start < cursor || span.end > line.len() {
            continue;
        }
        out.push_str(&line[cursor..span.start]);
        out.push_str(&line[span.start..span.end].white().on_red().to_string());
        cursor = span.end;
    }
    out.push_str(&line[cursor..]);

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    summary: ReportSummary,
    files: &'a [FileEntry],
}

/// Format the report as pretty-printed JSON.
///
/// Unlike the text form, clean files are included.
pub fn render_json(report: &Report) -> Result<String> {
    let json = JsonReport {
        passed: report.is_clean(),
        summary: report.summary(),
        files: report.files(),
    };

    serde_json::to_string_pretty(&json)
        .map_err(|e| NodebugError::UserError(format!("failed to serialize report: {}", e)))
}
