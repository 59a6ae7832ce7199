//! Join command implementation.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;

/// Join path segments with the flavor's separator and normalize the result.
#[derive(Args)]
pub struct JoinCommand {
    /// Segments to join (none yields `.`)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        println!("{}", ctx.flavor.join(self.paths.iter().map(String::as_str)));
        Ok(())
    }
}
