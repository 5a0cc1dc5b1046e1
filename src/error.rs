//! Error types for yaml-get.
//!
//! Uses thiserror for derive macros. None of these errors reach the user:
//! the lookup boundary logs them and substitutes the caller's default.

use std::path::PathBuf;
use thiserror::Error;

/// Why a lookup did not produce a value.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The YAML file could not be read (missing, permissions, invalid UTF-8).
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a single valid YAML document.
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// An intermediate node on the path is not a mapping.
    #[error("cannot descend into '{segment}': parent is not a mapping")]
    NotAMapping { segment: String },

    /// A mapping on the path has no such key.
    #[error("key '{segment}' not found")]
    MissingKey { segment: String },

    /// The path resolved, but to an explicit null.
    #[error("value is null")]
    NullValue,

    /// A resolved collection could not be written back out as YAML.
    #[error("failed to render value: {source}")]
    Render {
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
