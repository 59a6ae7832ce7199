//! Namespaced command implementation.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;

/// Print the namespace-prefixed form of a path.
///
/// Under Win32 semantics, drive and UNC paths gain the `\\?\` prefix; every
/// other input, and every input under POSIX semantics, is printed unchanged.
#[derive(Args)]
pub struct NamespacedCommand {
    /// Path to convert
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl NamespacedCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        println!(
            "{}",
            ctx.flavor
                .to_namespaced_path_with(&ctx.host, self.path.as_str())
        );
        Ok(())
    }
}
