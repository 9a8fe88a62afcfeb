//! Configuration model for nodebug.
//!
//! This module defines the Config struct that represents the optional
//! `.nodebug.yaml` file at the repository root. It supports
//! forward-compatible YAML parsing (unknown fields are ignored), sensible
//! defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{CONFIG_FILE_NAME, Config};
pub use types::{ColorChoice, CustomRule};
