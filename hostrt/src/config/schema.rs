//! Configuration schema definitions.
//!
//! A configuration describes the host that path operations should assume:
//! which path flavor to apply, which working directory to resolve against and
//! which environment variables are visible.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::host::{HostEnvironment, Process, StaticHost, SystemHost};
use crate::path::PathFlavor;

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "hostrt.yaml";

/// Name of the private, uncommitted configuration file next to it.
pub const LOCAL_CONFIG_FILE: &str = "hostrt.local.yaml";

/// Name of the per-user configuration file inside the user config directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; see
/// [`ConfigMerger`](crate::config::ConfigMerger).
///
/// # Examples
///
/// ```
/// use hostrt::config::Config;
/// use hostrt::path::PathFlavor;
///
/// let config: Config = serde_yaml::from_str("flavor: win32\ncwd: 'C:\\work'\n").unwrap();
/// assert_eq!(config.path_flavor().unwrap(), PathFlavor::Win32);
/// assert_eq!(config.cwd.as_deref(), Some("C:\\work"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path flavor: `posix`, `win32` or `native`.
    pub flavor: Option<String>,

    /// Working directory to resolve against instead of the process's own.
    pub cwd: Option<String>,

    /// Extra environment variables, layered over the inherited ones.
    pub env: Option<BTreeMap<String, String>>,

    /// Whether the process environment is visible (default true).
    pub inherit_env: Option<bool>,

    /// Output format for structured command results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured path flavor, or the native one.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown flavor name.
    pub fn path_flavor(&self) -> Result<PathFlavor> {
        self.flavor
            .as_deref()
            .map_or_else(|| Ok(PathFlavor::native()), PathFlavor::from_string)
    }

    /// Whether the process environment is inherited.
    #[must_use]
    pub fn inherits_env(&self) -> bool {
        self.inherit_env.unwrap_or(true)
    }

    /// Builds the host this configuration describes.
    ///
    /// A relative `cwd` is resolved against the real working directory. The
    /// environment is the process environment (unless `inherit_env` is
    /// false) overlaid with `env`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown flavor name.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::config::Config;
    /// use hostrt::host::HostEnvironment;
    /// use hostrt::JsString;
    /// use std::collections::BTreeMap;
    ///
    /// let config = Config {
    ///     flavor: Some("posix".into()),
    ///     cwd: Some("/srv".into()),
    ///     env: Some(BTreeMap::from([("MODE".to_string(), "test".to_string())])),
    ///     inherit_env: Some(false),
    ///     ..Default::default()
    /// };
    /// let host = config.into_host().unwrap();
    /// assert_eq!(host.current_dir(), "/srv");
    /// assert_eq!(host.env_var(&JsString::from("MODE")).unwrap(), "test");
    /// assert!(host.env_var(&JsString::from("PATH")).is_none());
    /// ```
    pub fn into_host(self) -> Result<StaticHost> {
        let flavor = self.path_flavor()?;
        let inherit = self.inherits_env();

        let cwd = match self.cwd {
            Some(cwd) if flavor.is_absolute(cwd.as_str()) => flavor.normalize(cwd.as_str()),
            Some(cwd) => flavor.resolve_with(&SystemHost, [cwd.as_str()]),
            None => SystemHost.current_dir(),
        };

        let mut host = StaticHost::new(cwd);
        if inherit {
            for (name, value) in Process::current().env() {
                host.set_var(name, value);
            }
        }
        for (name, value) in self.env.unwrap_or_default() {
            host.set_var(name, value);
        }
        log::debug!(
            "configured {flavor} host at {} with {} variables",
            host.current_dir(),
            host.vars().len()
        );
        Ok(host)
    }
}

/// Output format for structured results.
///
/// # Examples
///
/// ```
/// use hostrt::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key: value` line per field.
    #[default]
    Plain,
    /// JSON output format.
    Json,
    /// YAML output format.
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
