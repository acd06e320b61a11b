//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Path resolver configuration.
///
/// Every field is optional so that partial configurations from several
/// sources can be merged; accessors supply the defaults.
///
/// # Examples
///
/// ```
/// use relpath::config::ResolverConfig;
///
/// let config: ResolverConfig = serde_yaml::from_str("log_level: verbose\nwarn_on_escape: true\n").unwrap();
/// assert!(config.warn_on_escape());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Verbosity of the resolver's stderr logger.
    pub log_level: Option<LogLevel>,

    /// Write a warning through the resolver's logger whenever a relative
    /// path is rejected for climbing above the base's root.
    pub warn_on_escape: Option<bool>,
}

impl ResolverConfig {
    /// The log level, defaulting to Normal.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or(LogLevel::Normal)
    }

    /// Whether escape attempts are reported, defaulting to false.
    #[must_use]
    pub fn warn_on_escape(&self) -> bool {
        self.warn_on_escape.unwrap_or(false)
    }
}
