//! Line classification helpers for diff segmentation.

use std::borrow::Cow;

/// Literal prefix of a new-file header line.
pub(super) const FILE_HEADER_PREFIX: &str = "+++ b/";

/// Prefix of a header whose path git wrote as a C-style quoted string.
const QUOTED_FILE_HEADER_PREFIX: &str = "+++ \"b/";

/// Destination header of a deleted file.
const DELETED_FILE_HEADER: &str = "+++ /dev/null";

/// What a single raw diff line means to the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum DiffLine<'a> {
    /// `+++ b/<path>` or `+++ "b/<quoted path>"`; carries the decoded path.
    FileHeader(Cow<'a, str>),
    /// An added line; carries the content after the `+` marker.
    Addition(&'a str),
    /// Removal, context, hunk header or other metadata.
    Ignored,
}

/// Classify one line of unified diff text.
///
/// The header checks must run before the generic `+` check: header lines
/// start with `+` too.
pub(super) fn classify_line(line: &str) -> DiffLine<'_> {
    if let Some(path) = line.strip_prefix(FILE_HEADER_PREFIX) {
        // Git terminates names containing a space with a tab.
        let path = path.strip_suffix('\t').unwrap_or(path);
        return DiffLine::FileHeader(Cow::Borrowed(path));
    }

    if let Some(quoted) = line.strip_prefix(QUOTED_FILE_HEADER_PREFIX)
        && let Some(path) = unquote_c_path(quoted)
    {
        return DiffLine::FileHeader(Cow::Owned(path));
    }

    if line == DELETED_FILE_HEADER {
        return DiffLine::Ignored;
    }

    match line.strip_prefix('+') {
        Some(content) => DiffLine::Addition(content),
        None => DiffLine::Ignored,
    }
}

/// Decode the body of a git C-quoted path, up to its closing quote.
///
/// Handles the escapes git emits: `\\`, `\"`, `\a \b \f \n \r \t \v` and
/// three-digit octal bytes (UTF-8 sequences arrive as runs of these).
/// Returns `None` if the closing quote is missing.
pub(super) fn unquote_c_path(quoted: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(quoted.len());
    let mut iter = quoted.bytes();

    loop {
        match iter.next()? {
            b'"' => break,
            b'\\' => {
                let escaped = iter.next()?;
                let byte = match escaped {
                    b'a' => 0x07,
                    b'b' => 0x08,
                    b'f' => 0x0c,
                    b'n' => b'\n',
                    b'r' => b'\r',
                    b't' => b'\t',
                    b'v' => 0x0b,
                    b'0'..=b'3' => {
                        let d2 = iter.next()?;
                        let d3 = iter.next()?;
                        if !(b'0'..=b'7').contains(&d2) || !(b'0'..=b'7').contains(&d3) {
                            return None;
                        }
                        ((escaped - b'0') << 6) | ((d2 - b'0') << 3) | (d3 - b'0')
                    }
                    other => other,
                };
                bytes.push(byte);
            }
            other => bytes.push(other),
        }
    }

    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
