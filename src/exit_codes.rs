//! Exit code constants for the nodebug CLI.
//!
//! Git aborts the commit whenever a pre-commit hook exits non-zero, so the
//! only hard contract is 0 for a clean diff and 1 for a rejected one:
//! - 0: Success (no forbidden patterns in staged lines)
//! - 1: Violations found (commit rejected)
//! - 2: User error (bad args, bad config, not a repository)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// At least one added line matched a forbidden pattern.
pub const VIOLATIONS_FOUND: i32 = 1;

/// User error: bad arguments, invalid config, or unreadable input.
pub const USER_ERROR: i32 = 2;

/// Git operation failure: git missing, or `git diff` / `rev-parse` errored.
pub const GIT_FAILURE: i32 = 3;
