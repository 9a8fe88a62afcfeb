//! Tests for diff segmentation.

use super::api::AddedLine;
use super::helpers::{DiffLine, classify_line, unquote_c_path};
use super::parser::segment_diff;
use super::staged_diff;
use crate::test_support::{create_test_repo, stage_file};

/// Test segmenting a simple diff with one file and added lines.
#[test]
fn test_segment_simple_added_lines() {
    let diff = r#"diff --git a/src/lib.rs b/src/lib.rs
index abc1234..def5678 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -10,0 +11,2 @@ fn existing_function() {
+    let x = 42;
+    println!("Added line");
"#;

    let result = segment_diff(diff);

    assert_eq!(result.files, vec!["src/lib.rs"]);
    assert_eq!(result.added_lines.len(), 2);
    assert_eq!(result.added_lines[0].file_path, "src/lib.rs");
    assert_eq!(result.added_lines[0].content, "    let x = 42;");
    assert_eq!(result.added_lines[1].content, "    println!(\"Added line\");");
}

/// Test segmenting a new file (source is /dev/null).
#[test]
fn test_segment_new_file() {
    let diff = r#"diff --git a/src/new_file.rs b/src/new_file.rs
new file mode 100644
index 0000000..abc1234
--- /dev/null
+++ b/src/new_file.rs
@@ -0,0 +1,3 @@
+//! New module
+
+pub fn hello() {}
"#;

    let result = segment_diff(diff);

    assert_eq!(result.added_lines.len(), 3);
    assert_eq!(result.added_lines[0].content, "//! New module");
    assert_eq!(result.added_lines[1].content, "");
    assert_eq!(result.added_lines[2].content, "pub fn hello() {}");
}

/// Removed and context lines are never additions.
#[test]
fn test_removed_and_context_lines_not_captured() {
    let diff = r#"diff --git a/src/config.rs b/src/config.rs
index abc1234..def5678 100644
--- a/src/config.rs
+++ b/src/config.rs
@@ -10,3 +10,2 @@ struct Config {
 // context line
-    old_field: i32,
-    debugger_field: String,
+    new_field: i64,
"#;

    let result = segment_diff(diff);

    assert_eq!(result.added_lines, vec![AddedLine::new("src/config.rs", "    new_field: i64,")]);
}

/// Added lines are attributed to the most recent header.
#[test]
fn test_segment_multiple_files() {
    let diff = r#"diff --git a/src/first.rs b/src/first.rs
index abc1234..def5678 100644
--- a/src/first.rs
+++ b/src/first.rs
@@ -1,0 +2,1 @@
+// Added to first.rs
diff --git a/src/second.rs b/src/second.rs
index 111111..222222 100644
--- a/src/second.rs
+++ b/src/second.rs
@@ -5,0 +6,1 @@
+// Added to second.rs
"#;

    let result = segment_diff(diff);

    assert_eq!(result.files, vec!["src/first.rs", "src/second.rs"]);
    assert_eq!(
        result.added_lines,
        vec![
            AddedLine::new("src/first.rs", "// Added to first.rs"),
            AddedLine::new("src/second.rs", "// Added to second.rs"),
        ]
    );
}

/// The `+++ b/` header starts with `+` but must never be an added line.
#[test]
fn test_header_line_is_never_an_addition() {
    let diff = "+++ b/app.js\n+++ b/other.js\n";

    let result = segment_diff(diff);

    assert_eq!(result.files, vec!["app.js", "other.js"]);
    assert!(result.added_lines.is_empty());
    assert_eq!(classify_line("+++ b/app.js"), DiffLine::FileHeader("app.js".into()));
}

/// Added content may itself start with `+`.
#[test]
fn test_added_content_starting_with_plus() {
    let diff = "+++ b/counter.c\n++i;\n+ +x\n";

    let result = segment_diff(diff);

    assert_eq!(result.added_lines.len(), 2);
    assert_eq!(result.added_lines[0].content, "+i;");
    assert_eq!(result.added_lines[1].content, " +x");
}

/// Zero headers yields zero files and zero added lines.
#[test]
fn test_no_headers_yields_empty() {
    assert!(segment_diff("").is_empty());

    let result = segment_diff("+debugger\n+console.log(1)\n-removed\n");
    assert!(result.files.is_empty());
    assert!(result.added_lines.is_empty());
}

/// Added lines before the first header are dropped, later ones kept.
#[test]
fn test_lines_before_first_header_dropped() {
    let diff = "+orphan\n+++ b/kept.rb\n+kept\n";

    let result = segment_diff(diff);

    assert_eq!(result.added_lines, vec![AddedLine::new("kept.rb", "kept")]);
}

/// A file with no added lines still appears in `files`.
#[test]
fn test_file_without_additions_is_registered() {
    let diff = r#"diff --git a/bin/run b/bin/run
old mode 100644
new mode 100755
diff --git a/lib/a.rb b/lib/a.rb
--- a/lib/a.rb
+++ b/lib/a.rb
@@ -1,1 +0,0 @@
-puts 1
"#;

    let result = segment_diff(diff);

    assert_eq!(result.files, vec!["lib/a.rb"]);
    assert!(result.added_lines.is_empty());
}

/// A repeated header for the same path is registered once.
#[test]
fn test_repeated_header_registered_once() {
    let diff = "+++ b/a.rb\n+one\n+++ b/b.rb\n+two\n+++ b/a.rb\n+three\n";

    let result = segment_diff(diff);

    assert_eq!(result.files, vec!["a.rb", "b.rb"]);
    assert_eq!(result.added_lines[2], AddedLine::new("a.rb", "three"));
}

/// Test deleted file (destination is /dev/null) produces no added lines.
#[test]
fn test_deleted_file() {
    let diff = r#"diff --git a/src/deleted.rs b/src/deleted.rs
deleted file mode 100644
index abc1234..0000000
--- a/src/deleted.rs
+++ /dev/null
@@ -1,2 +0,0 @@
-//! This file is deleted
-debugger
"#;

    let result = segment_diff(diff);

    assert!(result.files.is_empty());
    assert!(result.added_lines.is_empty());
}

/// Git ends headers of names containing a space with a tab.
#[test]
fn test_file_path_with_spaces() {
    let diff = "--- a/src/my file.rs\t\n+++ b/src/my file.rs\t\n@@ -1,0 +2,1 @@\n+// Added line\n";

    let result = segment_diff(diff);

    assert_eq!(result.files, vec!["src/my file.rs"]);
    assert_eq!(result.added_lines[0].file_path, "src/my file.rs");
}

/// C-quoted headers are decoded and open a new file context.
#[test]
fn test_quoted_header_opens_file() {
    let diff = "+++ b/a.js\n+ok();\n+++ \"b/\\303\\274.js\"\n+debugger\n";

    let result = segment_diff(diff);

    assert_eq!(result.files, vec!["a.js", "\u{fc}.js"]);
    assert_eq!(
        result.added_lines,
        vec![
            AddedLine::new("a.js", "ok();"),
            AddedLine::new("\u{fc}.js", "debugger"),
        ]
    );
}

#[test]
fn test_unquote_escapes() {
    assert_eq!(unquote_c_path(r#"tab\tname.js""#).as_deref(), Some("tab\tname.js"));
    assert_eq!(unquote_c_path(r#"say \"hi\".rb""#).as_deref(), Some("say \"hi\".rb"));
    assert_eq!(unquote_c_path(r#"\303\274ber.js""#).as_deref(), Some("\u{fc}ber.js"));
    assert_eq!(unquote_c_path("unterminated"), None);
}

/// A real staged file with a space in its name.
#[test]
fn test_staged_path_with_space() {
    let repo = create_test_repo();
    stage_file(repo.path(), "my file.js", "debugger\n");

    let result = segment_diff(&staged_diff(repo.path()).unwrap());

    assert_eq!(result.files, vec!["my file.js"]);
    assert_eq!(result.added_lines, vec![AddedLine::new("my file.js", "debugger")]);
}

/// Non-ASCII names are attributed to their own file, first or not.
#[test]
fn test_staged_non_ascii_path() {
    let repo = create_test_repo();
    stage_file(repo.path(), "\u{fc}.js", "debugger\n");

    let result = segment_diff(&staged_diff(repo.path()).unwrap());
    assert_eq!(result.files, vec!["\u{fc}.js"]);
    assert_eq!(result.added_lines, vec![AddedLine::new("\u{fc}.js", "debugger")]);

    stage_file(repo.path(), "a.js", "ok();\n");

    let result = segment_diff(&staged_diff(repo.path()).unwrap());
    assert_eq!(result.files, vec!["a.js", "\u{fc}.js"]);
    assert_eq!(
        result.added_lines,
        vec![
            AddedLine::new("a.js", "ok();"),
            AddedLine::new("\u{fc}.js", "debugger"),
        ]
    );
}

/// CRLF diffs classify the same as LF diffs.
#[test]
fn test_crlf_line_endings() {
    let diff = "+++ b/win.js\r\n+debugger;\r\n";

    let result = segment_diff(diff);

    assert_eq!(result.files, vec!["win.js"]);
    assert_eq!(result.added_lines, vec![AddedLine::new("win.js", "debugger;")]);
}

/// Test binary file (should produce no added lines).
#[test]
fn test_binary_file() {
    let diff = r#"diff --git a/assets/image.png b/assets/image.png
new file mode 100644
index 0000000..abc1234
Binary files /dev/null and b/assets/image.png differ
"#;

    let result = segment_diff(diff);

    assert!(result.added_lines.is_empty());
}

/// Segmenting is a pure function of its input.
#[test]
fn test_segment_is_idempotent() {
    let diff = "+++ b/a.rb\n+binding.pry\n+++ b/b.rb\n+puts \"ok\"\n";
    assert_eq!(segment_diff(diff), segment_diff(diff));
}

/// Integration test: segment the staged diff of a real repository.
#[test]
fn test_integration_with_git() {
    let repo = create_test_repo();
    let path = repo.path();

    stage_file(path, "README.md", "# Test\n    indented addition\n");
    stage_file(path, "web/app.js", "debugger;\nconsole.log(\"hi\");\n");

    let diff = staged_diff(path).unwrap();
    let result = segment_diff(&diff);

    assert_eq!(result.files, vec!["README.md", "web/app.js"]);
    assert!(
        result
            .added_lines
            .contains(&AddedLine::new("README.md", "    indented addition"))
    );
    assert!(
        result
            .added_lines
            .contains(&AddedLine::new("web/app.js", "debugger;"))
    );
}

/// User diff config must not change the `+++ b/` convention.
#[test]
fn test_staged_diff_ignores_noprefix_config() {
    let repo = create_test_repo();
    let path = repo.path();
    crate::test_support::git(path, &["config", "diff.noprefix", "true"]);
    crate::test_support::git(path, &["config", "color.ui", "always"]);

    stage_file(path, "lib/x.rb", "binding.pry\n");

    let result = segment_diff(&staged_diff(path).unwrap());

    assert_eq!(result.files, vec!["lib/x.rb"]);
    assert_eq!(result.added_lines, vec![AddedLine::new("lib/x.rb", "binding.pry")]);
}

/// Nothing staged yields an empty diff.
#[test]
fn test_staged_diff_empty_when_nothing_staged() {
    let repo = create_test_repo();

    let result = segment_diff(&staged_diff(repo.path()).unwrap());

    assert!(result.is_empty());
}
