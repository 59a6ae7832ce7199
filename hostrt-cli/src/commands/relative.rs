//! Relative command implementation.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;

/// Compute the relative path from one path to another.
#[derive(Args)]
pub struct RelativeCommand {
    /// Starting path
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Target path
    #[arg(value_name = "TO")]
    pub to: String,
}

impl RelativeCommand {
    /// Execute the relative command.
    ///
    /// An empty result (both paths resolve to the same place) prints an
    /// empty line.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        let relative = ctx
            .flavor
            .relative_with(&ctx.host, self.from.as_str(), self.to.as_str());
        println!("{relative}");
        Ok(())
    }
}
