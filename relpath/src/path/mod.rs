//! Segment-wise path arithmetic.
//!
//! Paths are handled as [`SegmentPath`] values: ordered sequences of named
//! segments compared exactly, never as raw strings. On top of that type the
//! module provides two operations:
//!
//! - [`relative_path`]: express a target relative to a base, climbing with
//!   `..` to the deepest shared ancestor and descending from there.
//! - [`absolute_path`]: resolve a relative path against a base, refusing any
//!   `..` that would climb above the base's root.
//!
//! Resolving the output of the first against the same base always yields the
//! original target.
//!
//! Neither operation touches the filesystem: nothing needs to exist and
//! symlinks are not followed.
//!
//! # Examples
//!
//! ```
//! use relpath::path::{absolute_path, relative_path, SegmentPath};
//!
//! let base = SegmentPath::parse_absolute("/a/b").unwrap();
//! let target = SegmentPath::parse_absolute("/a/c/d").unwrap();
//!
//! let relative = relative_path(&base, &target).unwrap();
//! assert_eq!(absolute_path(&base, &relative).unwrap(), target);
//!
//! let root = SegmentPath::root();
//! assert!(absolute_path(&root, "..").unwrap_err().is_invalid_argument());
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use relpath::path::{PathRelationship, SegmentPath};
//!
//! let parent = SegmentPath::parse_absolute("/home/user").unwrap();
//! let child = SegmentPath::parse_absolute("/home/user/project").unwrap();
//!
//! let rel = PathRelationship::between(&parent, &child);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert!(rel.is_descent());
//! ```

pub mod relationship;
pub mod resolver;
pub mod segments;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use relationship::PathRelationship;
pub use resolver::{absolute_path, relative_path, PathResolver};
pub use segments::SegmentPath;
