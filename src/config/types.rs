//! Configuration types for nodebug.

use serde::{Deserialize, Serialize};

/// When to colour highlighted matches in text output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorChoice {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset (default).
    #[default]
    Auto,
    /// Always emit ANSI colour codes.
    Always,
    /// Never emit ANSI colour codes.
    Never,
}

/// A project-specific forbidden pattern, appended after the built-in rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomRule {
    /// Stable identifier shown in reports (e.g., "pdb").
    pub id: String,

    /// Regular expression (Rust `regex` syntax) tested against each added line.
    pub pattern: String,

    /// Optional human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
