//! Segmented path representation.
//!
//! [`SegmentPath`] is an immutable, ordered sequence of named segments with
//! an optional anchor (a Windows drive or UNC prefix) and a rooted flag. All
//! path arithmetic in this crate operates on segments rather than on raw
//! strings, so comparisons are exact and separator handling lives in one
//! place.

use std::fmt;
use std::path::{self, Component, Path, PathBuf, MAIN_SEPARATOR};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The segment that climbs to the parent directory.
pub const PARENT_SEGMENT: &str = "..";

/// The segment naming the current directory.
pub const CURRENT_SEGMENT: &str = ".";

/// An ordered, immutable sequence of path segments.
///
/// Two paths are equal iff their anchors, rootedness and segment sequences
/// are identical. Segments compare as exact strings (case-sensitive).
///
/// # Examples
///
/// ```
/// use relpath::path::SegmentPath;
///
/// let path = SegmentPath::parse_absolute("/a/b/c").unwrap();
/// assert_eq!(path.segment_count(), 3);
/// assert_eq!(path.segment(1), Some("b"));
///
/// let other = SegmentPath::parse_absolute("/a/b/d/e").unwrap();
/// assert_eq!(path.matching_first_segments(&other), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SegmentPath {
    /// Drive or UNC prefix; empty on Unix.
    anchor: String,
    /// Whether the path starts at a root directory.
    rooted: bool,
    segments: Vec<String>,
}

impl SegmentPath {
    /// The root directory of the host filesystem (`/` on Unix).
    #[must_use]
    pub fn root() -> Self {
        Self {
            anchor: String::new(),
            rooted: true,
            segments: Vec::new(),
        }
    }

    /// Parse an absolute path string.
    ///
    /// Splitting follows the host's rules: consecutive separators collapse,
    /// a trailing separator is ignored. Each `..` removes the preceding
    /// segment; at the root it has nothing to remove and is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] for an empty string and
    /// [`Error::InvalidPath`] if the string is not absolute or not UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::path::SegmentPath;
    ///
    /// let path = SegmentPath::parse_absolute("/usr//local/").unwrap();
    /// assert_eq!(path.segments().collect::<Vec<_>>(), ["usr", "local"]);
    ///
    /// let path = SegmentPath::parse_absolute("/usr/../opt/..").unwrap();
    /// assert!(path.is_root());
    ///
    /// assert!(SegmentPath::parse_absolute("usr/local").is_err());
    /// ```
    pub fn parse_absolute(s: &str) -> Result<Self> {
        Self::from_path(Path::new(s))
    }

    /// Parse a relative path string.
    ///
    /// Both `/` and the host separator split segments. Empty segments
    /// (from leading, trailing or doubled separators) and `.` segments are
    /// dropped, so `""` and `"."` both parse to zero segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::path::SegmentPath;
    ///
    /// let rel = SegmentPath::parse_relative("./../d//e/");
    /// assert!(!rel.is_absolute());
    /// assert_eq!(rel.segments().collect::<Vec<_>>(), ["..", "d", "e"]);
    /// assert!(SegmentPath::parse_relative("").is_empty());
    /// ```
    #[must_use]
    pub fn parse_relative(s: &str) -> Self {
        let segments = s
            .split(|c: char| c == '/' || path::is_separator(c))
            .filter(|segment| !segment.is_empty() && *segment != CURRENT_SEGMENT)
            .map(str::to_string)
            .collect();
        Self {
            anchor: String::new(),
            rooted: false,
            segments,
        }
    }

    /// Convert a standard library path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] for an empty path and
    /// [`Error::InvalidPath`] if the path is relative or contains non-UTF-8
    /// components.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::NullArgument { parameter: "path" });
        }
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "path must be absolute".to_string(),
            });
        }

        let mut result = Self {
            anchor: String::new(),
            rooted: false,
            segments: Vec::new(),
        };
        for component in path.components() {
            let text = component.as_os_str().to_str().ok_or_else(|| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "path contains invalid UTF-8".to_string(),
            })?;
            match component {
                Component::Prefix(_) => result.anchor = text.to_string(),
                Component::RootDir => result.rooted = true,
                Component::CurDir => {}
                Component::ParentDir => {
                    result.segments.pop();
                }
                Component::Normal(_) => result.segments.push(text.to_string()),
            }
        }
        Ok(result)
    }

    /// Convert to a standard library path.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.to_string())
    }

    /// Whether this path is anchored at a root directory.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.rooted
    }

    /// Whether this is an absolute path with no segments (a filesystem root).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.rooted && self.segments.is_empty()
    }

    /// Whether the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments below the root.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The segment at `index`, if any.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// The last segment, if any.
    #[must_use]
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Iterate over the segments in order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(String::as_str)
    }

    /// Length of the longest common prefix of the two segment sequences.
    ///
    /// Paths with different anchors or rootedness share nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::path::SegmentPath;
    ///
    /// let a = SegmentPath::parse_absolute("/a/b/c").unwrap();
    /// let x = SegmentPath::parse_absolute("/x/y").unwrap();
    /// assert_eq!(a.matching_first_segments(&x), 0);
    /// assert_eq!(a.matching_first_segments(&a), 3);
    /// ```
    #[must_use]
    pub fn matching_first_segments(&self, other: &Self) -> usize {
        if !self.same_anchor(other) {
            return 0;
        }
        self.segments
            .iter()
            .zip(&other.segments)
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Whether both paths share anchor and rootedness.
    #[must_use]
    pub fn same_anchor(&self, other: &Self) -> bool {
        self.rooted == other.rooted && self.anchor == other.anchor
    }

    /// Return a new path with `segment` applied.
    ///
    /// `..` removes the last segment when one exists; on a path with no
    /// segments it is a no-op for absolute paths (there is nothing above
    /// the root) and is kept for relative ones. Any other value is pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::path::SegmentPath;
    ///
    /// let path = SegmentPath::parse_absolute("/a").unwrap();
    /// let parent = path.append("..");
    /// assert!(parent.is_root());
    /// assert_eq!(parent.append("..").segment_count(), 0);
    /// assert_eq!(path.append("b").to_string(), SegmentPath::parse_absolute("/a/b").unwrap().to_string());
    /// ```
    #[must_use]
    pub fn append(&self, segment: &str) -> Self {
        let mut result = self.clone();
        if segment == PARENT_SEGMENT {
            let can_pop = result
                .segments
                .last()
                .is_some_and(|last| last != PARENT_SEGMENT);
            if can_pop {
                result.segments.pop();
            } else if !self.rooted {
                result.segments.push(segment.to_string());
            }
        } else {
            result.segments.push(segment.to_string());
        }
        result
    }

    /// Return a new path without its last `count` segments.
    ///
    /// Removing more segments than exist yields an empty path.
    #[must_use]
    pub fn remove_last_segments(&self, count: usize) -> Self {
        let mut result = self.clone();
        let keep = result.segments.len().saturating_sub(count);
        result.segments.truncate(keep);
        result
    }

    /// Join the segments (without anchor or root) using `separator`.
    #[must_use]
    pub fn join(&self, separator: char) -> String {
        let mut buf = [0u8; 4];
        self.segments.join(separator.encode_utf8(&mut buf))
    }
}

impl fmt::Display for SegmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.anchor)?;
        if self.rooted {
            write!(f, "{MAIN_SEPARATOR}")?;
        }
        f.write_str(&self.join(MAIN_SEPARATOR))
    }
}

impl TryFrom<String> for SegmentPath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if Path::new(&value).is_absolute() {
            Self::parse_absolute(&value)
        } else {
            Ok(Self::parse_relative(&value))
        }
    }
}

impl From<SegmentPath> for String {
    fn from(path: SegmentPath) -> Self {
        path.to_string()
    }
}

impl TryFrom<&Path> for SegmentPath {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self> {
        Self::from_path(path)
    }
}
