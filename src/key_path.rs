//! Dot-separated key paths.
//!
//! `image.node` names key `image` of the root mapping, then key `node` of the
//! mapping found there. The split is purely textual: there is no escape for
//! a literal `.` inside a key name.

use std::fmt;

/// Ordered, immutable list of mapping keys to descend through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Split `path` on `.`.
    ///
    /// Empty segments are kept (`a..b` yields `["a", "", "b"]`); they only
    /// match a literal empty-string key.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_dots_in_order() {
        let path = KeyPath::parse("image.node");
        assert_eq!(path.segments(), ["image", "node"]);
    }

    #[test]
    fn single_segment() {
        let path = KeyPath::parse("version");
        assert_eq!(path.segments(), ["version"]);
    }

    #[test]
    fn keeps_empty_segments() {
        assert_eq!(KeyPath::parse("a..b").segments(), ["a", "", "b"]);
        assert_eq!(KeyPath::parse(".a").segments(), ["", "a"]);
        assert_eq!(KeyPath::parse("a.").segments(), ["a", ""]);

        assert_eq!(KeyPath::parse("").segments(), [""]);
    }

    #[test]
    fn display_round_trips_input() {
        for input in ["image.node", "a..b", "", "x"] {
            assert_eq!(KeyPath::parse(input).to_string(), input);
        }
    }
}
