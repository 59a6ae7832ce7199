//! Basename command implementation.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use hostrt::JsString;

/// Print the last portion of a path.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Suffix to strip from the result, e.g. `.html`
    #[arg(long, value_name = "EXT", allow_hyphen_values = true)]
    pub ext: Option<String>,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        let suffix = self.ext.map(JsString::from);
        println!("{}", ctx.flavor.basename(self.path.as_str(), suffix.as_ref()));
        Ok(())
    }
}
