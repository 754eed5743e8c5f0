//! Dotted key paths.
//!
//! A [`KeyPath`] is a borrowed view of a string such as `"user.profile.name"`
//! split into its segments. Each segment names one level of descent through
//! nested maps.
//!
//! Parsing never fails:
//! - Trailing empty segments are dropped: `"user."` is `["user"]`
//! - Interior empty segments are kept: `"a..b"` is `["a", "", "b"]`
//! - A path with no segments left is the single empty segment: `""` and
//!   `"."` are both `[""]`
//!
//! ```
//! # use databag::KeyPath;
//! let path = KeyPath::parse("user.profile.name");
//! assert_eq!(path.segments(), ["user", "profile", "name"]);
//! assert_eq!(path.parents(), ["user", "profile"]);
//! assert_eq!(path.deepest_key(), "name");
//!
//! assert_eq!(KeyPath::parse("").segments(), [""]);
//! ```

use std::fmt;

/// Segment separator.
pub const SEPARATOR: char = '.';

/// A parsed, borrowed dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> KeyPath<'a> {
    /// Splits `raw` into segments.
    pub fn parse(raw: &'a str) -> Self {
        let mut segments: Vec<&str> = raw.split(SEPARATOR).collect();
        while segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        // `split` always yields at least one item, so `segments` is non-empty
        Self { raw, segments }
    }

    /// Returns the path string as given
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Returns every segment in order
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Returns all segments but the last: the spine of maps above the
    /// deepest key
    pub fn parents(&self) -> &[&'a str] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Returns the last segment
    pub fn deepest_key(&self) -> &'a str {
        self.segments[self.segments.len() - 1]
    }

    /// Returns the number of segments, always at least one
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path addresses a top-level key
    pub fn is_shallow(&self) -> bool {
        self.segments.len() == 1
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.raw)
        }
    }
}
