//! Loading a YAML document and walking a key path through it.
//!
//! The document is kept as a `serde_yaml::Value` tree. Anchors and aliases
//! are expanded by the parser; merge keys (`<<`) are applied right after
//! parsing so that merged entries can be reached by the walk.

use crate::error::{LookupError, Result};
use crate::key_path::KeyPath;
use serde_yaml::Value;
use std::path::Path;

/// A parsed YAML document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Load a YAML document from a file.
    ///
    /// # Errors
    ///
    /// * `LookupError::Read` - the file is missing, unreadable, or not UTF-8
    /// * `LookupError::Parse` - the contents are not a single YAML document
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|source| LookupError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a YAML document from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut root: Value = serde_yaml::from_str(yaml)?;
        root.apply_merge()?;
        Ok(Self { root })
    }

    /// Walk `path` from the root, one mapping key per segment.
    ///
    /// Only string keys match; a segment `1` does not reach an integer key
    /// `1`. An explicit null at the end of the path counts as a miss.
    pub fn resolve(&self, path: &KeyPath) -> Result<&Value> {
        let mut current = &self.root;

        for segment in path.segments() {
            let Value::Mapping(mapping) = current else {
                return Err(LookupError::NotAMapping {
                    segment: segment.clone(),
                });
            };

            current = mapping
                .get(segment.as_str())
                .ok_or_else(|| LookupError::MissingKey {
                    segment: segment.clone(),
                })?;
        }

        if current.is_null() {
            return Err(LookupError::NullValue);
        }

        Ok(current)
    }
}
