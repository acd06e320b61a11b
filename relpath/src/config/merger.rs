//! Configuration merging and precedence handling.

use crate::config::schema::ResolverConfig;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use relpath::config::{ConfigMerger, ResolverConfig};
/// use relpath::LogLevel;
///
/// let low = ResolverConfig { log_level: Some(LogLevel::Quiet), ..Default::default() };
/// let high = ResolverConfig { log_level: Some(LogLevel::Verbose), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_level(), LogLevel::Verbose);
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `source` into `target`; fields set in `source` win.
    pub fn merge_into(target: &mut ResolverConfig, source: &ResolverConfig) {
        if source.log_level.is_some() {
            target.log_level = source.log_level;
        }

        if source.warn_on_escape.is_some() {
            target.warn_on_escape = source.warn_on_escape;
        }
    }
}
