//! Info command implementation.
//!
//! Shows the host the other commands evaluate paths against, after
//! configuration files, environment overrides and global flags are applied.

use crate::error::CliError;
use crate::utils::{load_context, print_structured, GlobalOptions, OutputFormat};
use clap::Args;
use hostrt::host::{os, HostEnvironment, Platform, Process};
use hostrt::{JsString, PathFlavor};
use serde::Serialize;

/// Show the effective host: flavor, separators, working directory and
/// well-known directories.
#[derive(Args)]
pub struct InfoCommand {
    /// Output format (defaults to the configured one)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Serialize)]
struct HostReport {
    platform: Platform,
    pid: u32,
    flavor: PathFlavor,
    sep: String,
    delimiter: String,
    cwd: JsString,
    tmpdir: JsString,
    homedir: Option<JsString>,
}

impl InfoCommand {
    /// Execute the info command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        let process = Process::current();

        let homedir = match os::homedir_for(ctx.flavor, &ctx.host) {
            Ok(home) => Some(home),
            Err(e) => {
                log::debug!("no home directory: {e}");
                None
            }
        };
        let report = HostReport {
            platform: process.platform(),
            pid: process.pid(),
            flavor: ctx.flavor,
            sep: ctx.flavor.separator().to_string(),
            delimiter: ctx.flavor.delimiter().to_string(),
            cwd: ctx.host.current_dir(),
            tmpdir: os::tmpdir_for(ctx.flavor, &ctx.host),
            homedir,
        };

        let plain = [
            ("platform", report.platform.to_string()),
            ("pid", report.pid.to_string()),
            ("flavor", report.flavor.to_string()),
            ("sep", report.sep.clone()),
            ("delimiter", report.delimiter.clone()),
            ("cwd", report.cwd.to_string()),
            ("tmpdir", report.tmpdir.to_string()),
            (
                "homedir",
                report
                    .homedir
                    .as_ref()
                    .map_or_else(String::new, ToString::to_string),
            ),
        ];
        print_structured(&report, self.format.unwrap_or(ctx.output_format), &plain)
    }
}
