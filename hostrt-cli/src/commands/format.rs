//! Format command implementation.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use hostrt::ParsedPath;

/// Build a path from its parts.
///
/// `dir` takes priority over `root`, and `base` over `name` + `ext`.
#[derive(Args)]
pub struct FormatCommand {
    /// Root of the path
    #[arg(long, value_name = "ROOT", default_value = "", allow_hyphen_values = true)]
    pub root: String,

    /// Directory part
    #[arg(long, value_name = "DIR", default_value = "", allow_hyphen_values = true)]
    pub dir: String,

    /// Last segment including extension
    #[arg(long, value_name = "BASE", default_value = "", allow_hyphen_values = true)]
    pub base: String,

    /// Last segment without extension
    #[arg(long, value_name = "NAME", default_value = "", allow_hyphen_values = true)]
    pub name: String,

    /// Extension, including the leading dot
    #[arg(long, value_name = "EXT", default_value = "", allow_hyphen_values = true)]
    pub ext: String,
}

impl FormatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        let parts = ParsedPath {
            root: self.root.into(),
            dir: self.dir.into(),
            base: self.base.into(),
            ext: self.ext.into(),
            name: self.name.into(),
        };
        println!("{}", ctx.flavor.format(&parts));
        Ok(())
    }
}
