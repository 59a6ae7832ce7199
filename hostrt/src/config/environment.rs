//! Environment variable handling for configuration overrides.
//!
//! `HOSTRT_*` variables override values from configuration files.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::path::PathFlavor;
use std::env;

/// Overrides the path flavor (`posix`, `win32`, `native`).
pub const PATH_FLAVOR_VAR: &str = "HOSTRT_PATH_FLAVOR";
/// Overrides the working directory.
pub const CWD_VAR: &str = "HOSTRT_CWD";
/// Overrides environment inheritance (boolean).
pub const INHERIT_ENV_VAR: &str = "HOSTRT_INHERIT_ENV";
/// Overrides the output format (`plain`, `json`, `yaml`).
pub const OUTPUT_FORMAT_VAR: &str = "HOSTRT_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use hostrt::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value (unknown
    /// flavor or format, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(flavor) = env::var(PATH_FLAVOR_VAR) {
            // reject early so the error names the variable
            PathFlavor::from_string(&flavor).map_err(|_| Error::Validation {
                field: PATH_FLAVOR_VAR.into(),
                message: format!("Invalid path flavor: '{flavor}' (expected posix/win32/native)"),
            })?;
            config.flavor = Some(flavor);
        }

        if let Ok(cwd) = env::var(CWD_VAR) {
            if !cwd.is_empty() {
                config.cwd = Some(cwd);
            }
        }

        if let Ok(val) = env::var(INHERIT_ENV_VAR) {
            config.inherit_env = Some(Self::parse_bool(INHERIT_ENV_VAR, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_VAR) {
            config.output_format = Some(Self::parse_output_format(&val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
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

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(Error::Validation {
                field: OUTPUT_FORMAT_VAR.into(),
                message: format!("Invalid output format: '{s}' (expected plain/json/yaml)"),
            }),
        }
    }
}
