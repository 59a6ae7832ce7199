//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, host construction and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use hostrt::config::{ConfigLoader, ConfigMerger, OutputFormat as ConfigOutputFormat};
use hostrt::{Config, ConfigBuilder, PathFlavor, StaticHost};
use serde::Serialize;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path flavor override.
    pub flavor: Option<String>,

    /// Working directory override.
    pub cwd: Option<String>,

    /// Extra configuration file.
    pub config: Option<PathBuf>,
}

/// Everything a command needs to evaluate paths.
#[derive(Debug, Clone)]
pub struct HostContext {
    /// Path semantics in effect.
    pub flavor: PathFlavor,
    /// Working directory and environment.
    pub host: StaticHost,
    /// Output format for structured results.
    pub output_format: OutputFormat,
}

/// Output format for structured command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key: value` line per field
    Plain,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<ConfigOutputFormat> for OutputFormat {
    fn from(format: ConfigOutputFormat) -> Self {
        match format {
            ConfigOutputFormat::Plain => Self::Plain,
            ConfigOutputFormat::Json => Self::Json,
            ConfigOutputFormat::Yaml => Self::Yaml,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. The `--config` file
/// 3. Environment variables
/// 4. Discovered configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    if let Some(ref flavor) = global.flavor {
        PathFlavor::from_string(flavor).map_err(|e| CliError::InvalidArguments(e.to_string()))?;
    }

    let mut overrides = match global.config {
        Some(ref path) => {
            ConfigLoader::load_file(path).map_err(|e| CliError::Config(e.to_string()))?
        }
        None => Config::default(),
    };
    let flags = Config {
        flavor: global.flavor.clone(),
        cwd: global.cwd.clone(),
        ..Default::default()
    };
    ConfigMerger::merge_into(&mut overrides, &flags);

    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Load the configuration and build the host it describes.
pub fn load_context(global: &GlobalOptions) -> Result<HostContext, CliError> {
    let config = load_configuration(global)?;
    let flavor = config
        .path_flavor()
        .map_err(|e| CliError::Config(e.to_string()))?;
    let output_format = config.output_format.unwrap_or_default().into();
    let host = config
        .into_host()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(HostContext {
        flavor,
        host,
        output_format,
    })
}

/// Print a structured value in the requested format.
///
/// `plain` supplies the `key: value` lines used for [`OutputFormat::Plain`].
pub fn print_structured<T: Serialize>(
    value: &T,
    format: OutputFormat,
    plain: &[(&str, String)],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Plain => {
            for (key, value) in plain {
                println!("{key}: {value}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}
