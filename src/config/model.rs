//! Config struct definition.

use super::types::*;
use serde::{Deserialize, Serialize};

/// File name looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".nodebug.yaml";

/// Configuration for nodebug.
///
/// Every field is optional; a missing file is equivalent to an empty one.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in rule ids to switch off (e.g., `console-call`).
    pub disabled_rules: Vec<String>,

    /// Extra forbidden patterns, tested after the built-in rules.
    pub custom_rules: Vec<CustomRule>,

    /// Globs of repository paths whose added lines are not checked.
    ///
    /// Matching files still count towards the report's file total.
    pub exclude_paths: Vec<String>,

    /// Default colour choice for text output (the `--color` flag wins).
    pub color: ColorChoice,
}
