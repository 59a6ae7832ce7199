//! Parse command implementation.
//!
//! This module implements the `parse` command, which splits a path into its
//! components and prints them in various formats (plain, JSON, YAML).

use crate::error::CliError;
use crate::utils::{load_context, print_structured, GlobalOptions, OutputFormat};
use clap::Args;

/// Split a path into root, dir, base, name and ext.
#[derive(Args)]
pub struct ParseCommand {
    /// Path to parse
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format (defaults to the configured one)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ParseCommand {
    /// Execute the parse command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        let parsed = ctx.flavor.parse(self.path.as_str());

        let plain = [
            ("root", parsed.root.to_string()),
            ("dir", parsed.dir.to_string()),
            ("base", parsed.base.to_string()),
            ("ext", parsed.ext.to_string()),
            ("name", parsed.name.to_string()),
        ];
        print_structured(&parsed, self.format.unwrap_or(ctx.output_format), &plain)
    }
}
