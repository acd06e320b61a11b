//! Builder assembling a [`ResolverConfig`] from files, environment and
//! programmatic overrides.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::merger::ConfigMerger;
use crate::config::schema::ResolverConfig;
use crate::error::Result;

/// Builds a [`ResolverConfig`] from layered sources.
///
/// # Examples
///
/// ```no_run
/// use relpath::config::ResolverConfigBuilder;
/// use std::path::Path;
///
/// let config = ResolverConfigBuilder::new()
///     .with_file(Path::new("relpath.yaml"))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolverConfigBuilder {
    files: Vec<PathBuf>,
    overrides: Option<ResolverConfig>,
    skip_env: bool,
}

impl ResolverConfigBuilder {
    /// Create a builder with no sources beyond the defaults and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a YAML configuration file. Files added later take precedence.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.files.push(path.to_path_buf());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Do not read `RELPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Load and merge every source.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, or if an
    /// environment variable holds an invalid value.
    pub fn build(self) -> Result<ResolverConfig> {
        let mut config = ResolverConfig::default();

        for file in &self.files {
            let loaded = Self::load_file(file)?;
            log::debug!("loaded configuration from {}", file.display());
            ConfigMerger::merge_into(&mut config, &loaded);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        Ok(config)
    }

    /// Parse a single YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read and a configuration
    /// error if it is not valid YAML for the schema.
    pub fn load_file(path: &Path) -> Result<ResolverConfig> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(ResolverConfig::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::logging::LogLevel;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_build_defaults() {
        let config = ResolverConfigBuilder::new().skip_env().build().unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("base.yaml");
        let local = dir.path().join("local.yaml");
        fs::write(&base, "warn_on_escape: true\nlog_level: quiet\n").unwrap();
        fs::write(&local, "log_level: verbose\n").unwrap();

        let config = ResolverConfigBuilder::new()
            .with_file(&base)
            .with_file(&local)
            .skip_env()
            .build()
            .unwrap();

        assert!(config.warn_on_escape());
        assert_eq!(config.log_level(), LogLevel::Verbose);
    }

    #[test]
    fn test_programmatic_override_wins() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("relpath.yaml");
        fs::write(&file, "warn_on_escape: true\n").unwrap();

        let config = ResolverConfigBuilder::new()
            .with_file(&file)
            .with_config(ResolverConfig {
                warn_on_escape: Some(false),
                ..Default::default()
            })
            .skip_env()
            .build()
            .unwrap();

        assert!(!config.warn_on_escape());
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("empty.yaml");
        fs::write(&file, "\n").unwrap();
        assert_eq!(
            ResolverConfigBuilder::load_file(&file).unwrap(),
            ResolverConfig::default()
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = ResolverConfigBuilder::new()
            .with_file(&dir.path().join("absent.yaml"))
            .skip_env()
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("bad.yaml");
        fs::write(&file, "log_level: [unclosed\n").unwrap();
        let err = ResolverConfigBuilder::load_file(&file).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_identity_key_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("relpath.yaml");
        fs::write(&file, "identity: ..\n").unwrap();
        let err = ResolverConfigBuilder::new()
            .with_file(&file)
            .skip_env()
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
