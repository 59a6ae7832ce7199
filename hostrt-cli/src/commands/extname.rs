//! Extname command implementation.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;

/// Print the extension of a path, from the last `.` of its last portion.
#[derive(Args)]
pub struct ExtnameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ExtnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        println!("{}", ctx.flavor.extname(self.path.as_str()));
        Ok(())
    }
}
