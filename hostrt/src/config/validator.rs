//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::PathFlavor;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use hostrt::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref flavor) = config.flavor {
            PathFlavor::from_string(flavor)?;
        }

        if let Some(ref cwd) = config.cwd {
            Self::validate_cwd(cwd)?;
        }

        if let Some(ref env) = config.env {
            for (name, value) in env {
                Self::validate_env_var_name("env", name)?;
                if value.contains('\0') {
                    return Err(Error::Validation {
                        field: format!("env.{name}"),
                        message: "Cannot contain null bytes".into(),
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_cwd(cwd: &str) -> Result<()> {
        if cwd.trim().is_empty() {
            return Err(Error::Validation {
                field: "cwd".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if cwd.contains('\0') {
            return Err(Error::Validation {
                field: "cwd".into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    /// Validate environment variable name.
    ///
    /// Names are non-empty, contain no `=` or NUL, except that a leading `=`
    /// is allowed for Win32 per-drive variables such as `=C:`.
    fn validate_env_var_name(field: &str, name: &str) -> Result<()> {
        let body = name.strip_prefix('=').unwrap_or(name);

        if body.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Environment variable name cannot be empty".into(),
            });
        }

        if body.contains('=') || body.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid environment variable name '{name}'"),
            });
        }

        Ok(())
    }
}
