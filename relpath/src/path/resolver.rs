//! Relative and absolute path computation.
//!
//! This module provides the [`PathResolver`] type, which expresses one
//! absolute path relative to another and resolves relative paths against a
//! base without ever climbing above the base's root. Both operations are
//! purely lexical: the filesystem is never consulted.

use std::env;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::path::segments::{SegmentPath, PARENT_SEGMENT};

/// Relative path between two identical paths.
const IDENTITY: &str = ".";

/// Reason reported when a relative path climbs above the base's root.
const ESCAPES_ROOT: &str = "Relative path can't point beyond the root of the base path";

/// Computes relative paths and resolves them back against a base.
///
/// # Examples
///
/// ```
/// use relpath::path::{PathResolver, SegmentPath};
///
/// let resolver = PathResolver::new();
/// let base = SegmentPath::parse_absolute("/a/b/c").unwrap();
/// let target = SegmentPath::parse_absolute("/a/b/d/e").unwrap();
///
/// let relative = resolver.relative_path(&base, &target).unwrap();
/// assert_eq!(relative, ["..", "d", "e"].join(std::path::MAIN_SEPARATOR_STR));
/// assert_eq!(resolver.absolute_path(&base, &relative).unwrap(), target);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    config: ResolverConfig,
    logger: Logger,
}

impl PathResolver {
    /// Create a resolver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from a configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::config::ResolverConfig;
    /// use relpath::path::PathResolver;
    ///
    /// let resolver = PathResolver::with_config(ResolverConfig {
    ///     warn_on_escape: Some(true),
    ///     ..Default::default()
    /// });
    /// assert!(resolver.config().warn_on_escape());
    /// ```
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        let logger = Logger::new(config.log_level());
        Self { config, logger }
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Express `target` relative to `base`.
    ///
    /// The result climbs from `base` to the deepest shared ancestor with one
    /// `..` per unshared base segment, then descends through the remaining
    /// target segments. Components are joined with the host separator. Equal
    /// paths yield `"."`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if either path is relative and
    /// [`Error::InvalidArgument`] if the paths live under different anchors
    /// (e.g. two Windows drives), where no relative form exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::path::{PathResolver, SegmentPath};
    ///
    /// let resolver = PathResolver::new();
    /// let base = SegmentPath::parse_absolute("/a/b/c").unwrap();
    /// let target = SegmentPath::parse_absolute("/x/y").unwrap();
    /// let relative = resolver.relative_path(&base, &target).unwrap();
    /// assert_eq!(relative.split(std::path::MAIN_SEPARATOR).collect::<Vec<_>>(), ["..", "..", "..", "x", "y"]);
    /// ```
    pub fn relative_path(&self, base: &SegmentPath, target: &SegmentPath) -> Result<String> {
        require_absolute(base)?;
        require_absolute(target)?;

        if base == target {
            return Ok(IDENTITY.to_string());
        }

        if !base.same_anchor(target) {
            return Err(Error::InvalidArgument {
                base: base.to_string(),
                relative_path: target.to_string(),
                reason: "Paths on different roots have no relative form".to_string(),
            });
        }

        let shared = base.matching_first_segments(target);
        log::trace!("{base} and {target} share {shared} segment(s)");

        let climb = std::iter::repeat_n(PARENT_SEGMENT, base.segment_count() - shared);
        let descend = target.segments().skip(shared);

        Ok(climb.chain(descend).collect::<Vec<_>>().join(MAIN_SEPARATOR_STR))
    }

    /// Resolve `relative_path` against `base`.
    ///
    /// Each `..` climbs one segment and every other segment is appended.
    /// An empty relative path resolves to `base` itself. `base` is never
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a `..` would climb above the
    /// root of `base`, and [`Error::InvalidPath`] if `base` is relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::path::{PathResolver, SegmentPath};
    ///
    /// let resolver = PathResolver::new();
    /// let base = SegmentPath::parse_absolute("/a/b/c").unwrap();
    /// let resolved = resolver.absolute_path(&base, "../d").unwrap();
    /// assert_eq!(resolved, SegmentPath::parse_absolute("/a/b/d").unwrap());
    ///
    /// let shallow = SegmentPath::parse_absolute("/a").unwrap();
    /// assert!(resolver.absolute_path(&shallow, "../../x").is_err());
    /// ```
    pub fn absolute_path(&self, base: &SegmentPath, relative_path: &str) -> Result<SegmentPath> {
        require_absolute(base)?;

        let mut result = base.clone();
        for segment in SegmentPath::parse_relative(relative_path).segments() {
            let next = result.append(segment);
            // appending ".." at the root leaves the path unchanged
            if segment == PARENT_SEGMENT && next.segment_count() >= result.segment_count() {
                log::debug!("rejecting {relative_path:?}: climbs above the root of {base}");
                if self.config.warn_on_escape() {
                    self.logger.warn(&format!(
                        "relative path {relative_path} points above the root of {base}"
                    ));
                }
                return Err(Error::InvalidArgument {
                    base: base.to_string(),
                    relative_path: relative_path.to_string(),
                    reason: ESCAPES_ROOT.to_string(),
                });
            }
            result = next;
        }

        Ok(result)
    }

    /// Express `target` relative to `base`, both given as filesystem paths.
    ///
    /// Relative inputs are first made absolute against the current working
    /// directory. No symlinks are followed and nothing is required to exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if either path is empty, plus any
    /// error of [`PathResolver::relative_path`].
    pub fn relative_path_between(&self, base: &Path, target: &Path) -> Result<String> {
        let base = to_absolute(base, "base")?;
        let target = to_absolute(target, "target")?;
        self.relative_path(&base, &target)
    }

    /// Resolve `relative_path` against the filesystem path `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if `base` is empty, plus any error of
    /// [`PathResolver::absolute_path`].
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::path::PathResolver;
    /// use std::path::{Path, PathBuf};
    ///
    /// let resolver = PathResolver::new();
    /// let file = resolver.absolute_file(Path::new("/srv/app/conf"), "../data/db").unwrap();
    /// assert_eq!(file, PathBuf::from("/srv/app/data/db"));
    /// ```
    pub fn absolute_file(&self, base: &Path, relative_path: &str) -> Result<PathBuf> {
        let base = to_absolute(base, "base")?;
        Ok(self.absolute_path(&base, relative_path)?.to_path_buf())
    }
}

/// Express `target` relative to `base` with the default configuration.
///
/// # Errors
///
/// See [`PathResolver::relative_path`].
pub fn relative_path(base: &SegmentPath, target: &SegmentPath) -> Result<String> {
    PathResolver::new().relative_path(base, target)
}

/// Resolve `relative` against `base` with the default configuration.
///
/// # Errors
///
/// See [`PathResolver::absolute_path`].
pub fn absolute_path(base: &SegmentPath, relative: &str) -> Result<SegmentPath> {
    PathResolver::new().absolute_path(base, relative)
}

fn require_absolute(path: &SegmentPath) -> Result<()> {
    if path.is_absolute() {
        Ok(())
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path must be absolute".to_string(),
        })
    }
}

/// Lexically anchor `path` at the current directory if it is relative.
fn to_absolute(path: &Path, parameter: &'static str) -> Result<SegmentPath> {
    if path.as_os_str().is_empty() {
        return Err(Error::NullArgument { parameter });
    }
    if path.is_absolute() {
        return SegmentPath::from_path(path);
    }
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    SegmentPath::from_path(&cwd.join(path))
}
