//! Error types for the relpath library.
//!
//! This module provides the error hierarchy for path arithmetic and
//! configuration loading, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a relpath error.
///
/// # Examples
///
/// ```
/// use relpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(".".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the relpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was missing.
    ///
    /// Rust references cannot be null, so this is reported for empty path
    /// inputs, which carry no location at all.
    #[error("missing required argument '{parameter}'")]
    NullArgument {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A relative path cannot be applied to (or derived from) a base path.
    #[error("{reason} (base={base}, relativePath={relative_path})")]
    InvalidArgument {
        /// The base path the operation started from.
        base: String,
        /// The offending relative path.
        relative_path: String,
        /// The reason the argument is invalid.
        reason: String,
    },

    /// A path string could not be interpreted.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error reports a missing argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::Error;
    ///
    /// let err = Error::NullArgument { parameter: "base" };
    /// assert!(err.is_null_argument());
    /// ```
    #[must_use]
    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }

    /// Check if error reports a relative path that cannot be applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use relpath::Error;
    ///
    /// let err = Error::InvalidArgument {
    ///     base: "/a".to_string(),
    ///     relative_path: "../../x".to_string(),
    ///     reason: "points above the root".to_string(),
    /// };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
