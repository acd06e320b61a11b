//! Path relationship checking.
//!
//! Classifies how two absolute paths sit relative to each other in the
//! hierarchy, using the same shared-prefix measure that drives relative
//! path computation.

use crate::path::segments::SegmentPath;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use relpath::path::{PathRelationship, SegmentPath};
///
/// let parent = SegmentPath::parse_absolute("/home/user").unwrap();
/// let child = SegmentPath::parse_absolute("/home/user/project").unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The second path lies beneath the first.
    Ancestor,

    /// The first path lies beneath the second.
    Descendant,

    /// The segment sequences are identical.
    Same,

    /// The paths are in different branches of the tree.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::path::{PathRelationship, SegmentPath};
    ///
    /// let a = SegmentPath::parse_absolute("/a").unwrap();
    /// let b = SegmentPath::parse_absolute("/b").unwrap();
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &SegmentPath, path2: &SegmentPath) -> Self {
        if path1 == path2 {
            return Self::Same;
        }
        if !path1.same_anchor(path2) {
            return Self::Unrelated;
        }

        let shared = path1.matching_first_segments(path2);
        if shared == path1.segment_count() {
            Self::Ancestor
        } else if shared == path2.segment_count() {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Returns `true` unless the paths are unrelated.
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Whether a relative path between the two needs no `..` component.
    ///
    /// Only paths at or beneath the base can be reached by descending.
    #[must_use]
    pub fn is_descent(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Same)
    }

    /// Check if `path` is within `directory` (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::path::{PathRelationship, SegmentPath};
    ///
    /// let dir = SegmentPath::parse_absolute("/home/user").unwrap();
    /// let file = SegmentPath::parse_absolute("/home/user/file.txt").unwrap();
    ///
    /// assert!(PathRelationship::is_within(&file, &dir));
    /// assert!(PathRelationship::is_within(&dir, &dir));
    /// ```
    #[must_use]
    pub fn is_within(path: &SegmentPath, directory: &SegmentPath) -> bool {
        matches!(Self::between(path, directory), Self::Descendant | Self::Same)
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &SegmentPath, other: &SegmentPath) -> bool {
        Self::between(path, other).is_descent()
    }
}
