//! Configuration system for hostrt.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! A configuration describes the host that path operations run against: the
//! path flavor, the working directory and the visible environment. See
//! [`Config::into_host`].
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HOSTRT_*`)
//! 3. Private project config (`hostrt.local.yaml`)
//! 4. Project config (`hostrt.yaml`)
//! 5. User config (`config.yaml` in the user config directory)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use hostrt::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("flavor: {}", config.path_flavor().unwrap());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use hostrt::config::{Config, ConfigBuilder};
//! use hostrt::path::PathFlavor;
//!
//! let custom = Config {
//!     flavor: Some("posix".to_string()),
//!     cwd: Some("/srv/app".to_string()),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.path_flavor().unwrap(), PathFlavor::Posix);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use validator::ConfigValidator;
