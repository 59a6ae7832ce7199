//! Command to assert that a path is absolute.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;

/// Check whether a path is absolute.
///
/// Exits 0 for an absolute path and 1 for a relative one.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Invert the assertion (fail if the path is absolute)
    #[arg(long)]
    pub not: bool,
}

impl IsAbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        let absolute = ctx.flavor.is_absolute(self.path.as_str());

        let success = if self.not { !absolute } else { absolute };
        if success {
            if !global.quiet {
                println!("{absolute}");
            }
            Ok(())
        } else {
            let msg = if self.not {
                format!("Assertion failed: {} is absolute", self.path)
            } else {
                format!("Assertion failed: {} is not absolute", self.path)
            };
            Err(CliError::SemanticFailure(msg))
        }
    }
}
