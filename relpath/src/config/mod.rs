//! Configuration for path resolution.
//!
//! Settings are merged from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via [`ResolverConfigBuilder::with_config`])
//! 2. Environment variables (`RELPATH_*`)
//! 3. YAML files added with [`ResolverConfigBuilder::with_file`], later
//!    files overriding earlier ones
//! 4. Built-in defaults
//!
//! The relative path between identical paths is always `"."` and is not
//! configurable.
//!
//! # Examples
//!
//! ```
//! use relpath::config::{ResolverConfig, ResolverConfigBuilder};
//!
//! let config = ResolverConfigBuilder::new()
//!     .skip_env()
//!     .with_config(ResolverConfig {
//!         warn_on_escape: Some(false),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.warn_on_escape());
//! ```

pub mod builder;
pub mod environment;
pub mod merger;
pub mod schema;

pub use builder::ResolverConfigBuilder;
pub use environment::EnvironmentConfig;
pub use merger::ConfigMerger;
pub use schema::ResolverConfig;
