//! Configuration merging and precedence handling.
//!
//! Scalar fields are replaced by higher-precedence sources; the `env` map is
//! accumulated, with higher-precedence sources winning per variable.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use hostrt::config::{Config, ConfigMerger};
///
/// let low = Config { flavor: Some("posix".to_string()), ..Default::default() };
/// let high = Config { flavor: Some("win32".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.flavor, Some("win32".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!("merging configuration from {}", source.path.display());
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - `env`: union, source wins for variables defined in both
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.flavor.is_some() {
            target.flavor.clone_from(&source.flavor);
        }

        if source.cwd.is_some() {
            target.cwd.clone_from(&source.cwd);
        }

        if source.inherit_env.is_some() {
            target.inherit_env = source.inherit_env;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_env) = source.env {
            match &mut target.env {
                Some(target_env) => {
                    target_env.extend(source_env.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                None => {
                    target.env.clone_from(&source.env);
                }
            }
        }
    }
}
