//! Resolve command implementation.
//!
//! Resolution reads the configured host: its working directory and, for
//! Win32 drive-relative paths, the `=X:` per-drive variables.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;

/// Resolve a sequence of paths into an absolute path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths, processed right to left until an absolute path is formed
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        let resolved = ctx
            .flavor
            .resolve_with(&ctx.host, self.paths.iter().map(String::as_str));
        println!("{resolved}");
        Ok(())
    }
}
