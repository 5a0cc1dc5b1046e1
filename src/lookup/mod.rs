//! PathLookup: resolve a key path in a YAML file, or fall back to a default.
//!
//! [`resolve`] keeps the reason for every failure; [`lookup`] is the single
//! place where any failure collapses to the caller's default.

use crate::document::Document;
use crate::error::Result;
use crate::key_path::KeyPath;
use crate::render::render_value;
use std::path::PathBuf;


/// One lookup invocation, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub file_path: PathBuf,
    pub key_path: String,
    /// `None` means no default was supplied, which is not the same as `""`.
    pub default: Option<String>,
}

impl LookupRequest {
    pub fn new(
        file_path: impl Into<PathBuf>,
        key_path: impl Into<String>,
        default: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            key_path: key_path.into(),
            default,
        }
    }
}

/// Load the file, walk the key path and render the value found.
pub fn resolve(request: &LookupRequest) -> Result<String> {
    let document = Document::load(&request.file_path)?;
    let key_path = KeyPath::parse(&request.key_path);
    let value = document.resolve(&key_path)?;
    render_value(value)
}

/// Resolve `request`, returning its default on any failure.
pub fn lookup(request: LookupRequest) -> Option<String> {
    match resolve(&request) {
        Ok(value) => {
            tracing::debug!(
                file = %request.file_path.display(),
                key_path = %request.key_path,
                "resolved"
            );
            Some(value)
        }
        Err(e) => {
            tracing::debug!(
                file = %request.file_path.display(),
                key_path = %request.key_path,
                error = %e,
                has_default = request.default.is_some(),
                "lookup failed, using default"
            );
            request.default
        }
    }
}
