//! Command to show per-application directories.

use crate::error::CliError;
use crate::utils::{load_context, print_structured, GlobalOptions, OutputFormat};
use clap::Args;
use hostrt::host::{EnvPaths, EnvPathsOptions, Platform};
use hostrt::PathFlavor;

/// Show the data, config, cache, log and temp directories of an application.
#[derive(Args)]
pub struct EnvPathsCommand {
    /// Application name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Suffix appended to the name as `NAME-SUFFIX`
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Output format (defaults to the configured one)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl EnvPathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.name.is_empty() {
            return Err(CliError::InvalidArguments(
                "Application name cannot be empty".to_string(),
            ));
        }

        let ctx = load_context(global)?;
        let options = EnvPathsOptions {
            suffix: self.suffix,
        };
        let paths = EnvPaths::create(&self.name, &options, platform_for(ctx.flavor), &ctx.host)?;

        let plain = [
            ("data", paths.data.to_string()),
            ("config", paths.config.to_string()),
            ("cache", paths.cache.to_string()),
            ("log", paths.log.to_string()),
            ("temp", paths.temp.to_string()),
        ];
        print_structured(&paths, self.format.unwrap_or(ctx.output_format), &plain)
    }
}

/// Platform whose conventions match `flavor`, preferring the real one.
fn platform_for(flavor: PathFlavor) -> Platform {
    let current = Platform::current();
    if current.path_flavor() == flavor {
        current
    } else if flavor == PathFlavor::Win32 {
        Platform::Win32
    } else {
        Platform::Linux
    }
}
