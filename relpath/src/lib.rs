#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # relpath
//!
//! Relative and absolute path arithmetic over path segments.
//!
//! This library expresses one absolute path relative to another, and
//! resolves relative paths against a base while refusing to climb above the
//! base's root. Paths are compared segment by segment, never as strings,
//! and the filesystem is never consulted.
//!
//! ## Core Types
//!
//! - [`SegmentPath`]: ordered, immutable sequence of path segments
//! - [`PathResolver`]: the `relative_path` / `absolute_path` operations
//! - [`PathRelationship`]: ancestor/descendant classification
//! - [`ResolverConfig`] and [`ResolverConfigBuilder`]: configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use relpath::{absolute_path, relative_path, SegmentPath};
//!
//! let base = SegmentPath::parse_absolute("/a/b/c").unwrap();
//! let target = SegmentPath::parse_absolute("/a/b/d/e").unwrap();
//!
//! let relative = relative_path(&base, &target).unwrap();
//! assert_eq!(absolute_path(&base, &relative).unwrap(), target);
//!
//! let shallow = SegmentPath::parse_absolute("/a").unwrap();
//! assert!(absolute_path(&shallow, "../../x").is_err());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{ResolverConfig, ResolverConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{absolute_path, relative_path, PathRelationship, PathResolver, SegmentPath};
