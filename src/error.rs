//! Error types for the nodebug CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for nodebug operations.
///
/// Each variant maps to a specific exit code (see [`exit_codes`]).
#[derive(Error, Debug)]
pub enum NodebugError {
    /// Staged changes contain forbidden patterns.
    #[error("commit rejected: {violations} violation(s) in {files} file(s)")]
    ViolationsFound { violations: usize, files: usize },

    /// User provided invalid arguments, config, or input.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl NodebugError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            NodebugError::ViolationsFound { .. } => exit_codes::VIOLATIONS_FOUND,
            NodebugError::UserError(_) => exit_codes::USER_ERROR,
            NodebugError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for nodebug operations.
pub type Result<T> = std::result::Result<T, NodebugError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_found_exits_one() {
        let err = NodebugError::ViolationsFound {
            violations: 3,
            files: 2,
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = NodebugError::UserError("bad config".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = NodebugError::GitError("diff failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = NodebugError::ViolationsFound {
            violations: 1,
            files: 1,
        };
        assert_eq!(
            err.to_string(),
            "commit rejected: 1 violation(s) in 1 file(s)"
        );

        let err = NodebugError::GitError("git diff failed".to_string());
        assert_eq!(err.to_string(), "Git operation failed: git diff failed");
    }
}
