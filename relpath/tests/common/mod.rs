//! Common test utilities for integration tests.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use relpath::SegmentPath;

/// Parses an absolute path, panicking on malformed test input.
#[allow(dead_code)]
pub fn abs(s: &str) -> SegmentPath {
    SegmentPath::parse_absolute(s).unwrap()
}

/// Joins relative path components with the host separator.
#[allow(dead_code)]
pub fn host_rel(parts: &[&str]) -> String {
    parts.join(std::path::MAIN_SEPARATOR_STR)
}

/// Writes `content` to `dir/filename` and returns the path.
#[allow(dead_code)]
pub fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every `RELPATH_*` variable for the lifetime of the returned guards.
#[allow(dead_code)]
pub fn clear_relpath_env_vars() -> Vec<EnvGuard> {
    ["RELPATH_LOG_MODE", "RELPATH_WARN_ON_ESCAPE"]
        .iter()
        .map(|key| EnvGuard::remove(key))
        .collect()
}
