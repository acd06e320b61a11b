//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//! - `RELPATH_LOG_MODE`: `quiet`, `normal` or `verbose`
//! - `RELPATH_WARN_ON_ESCAPE`: boolean

use std::env;

use crate::config::schema::ResolverConfig;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Variable overriding [`ResolverConfig::warn_on_escape`].
pub const WARN_ON_ESCAPE_ENV: &str = "RELPATH_WARN_ON_ESCAPE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use relpath::config::{EnvironmentConfig, ResolverConfig};
///
/// let mut config = ResolverConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `RELPATH_*` overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable holds an unparseable value.
    pub fn apply_overrides(config: &mut ResolverConfig) -> Result<()> {
        if let Ok(val) = env::var(LOG_MODE_ENV) {
            config.log_level = Some(LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?);
        }

        if let Ok(val) = env::var(WARN_ON_ESCAPE_ENV) {
            config.warn_on_escape = Some(Self::parse_bool(WARN_ON_ESCAPE_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value.
    ///
    /// Accepts true/1/yes/on and false/0/no/off (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
