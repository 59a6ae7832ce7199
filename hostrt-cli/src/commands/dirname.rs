//! Dirname command implementation.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;

/// Print the directory portion of a path.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        println!("{}", ctx.flavor.dirname(self.path.as_str()));
        Ok(())
    }
}
