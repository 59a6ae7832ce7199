//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "hostrt";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_install_hint(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn print_install_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!("#   hostrt completions bash > ~/.local/share/bash-completion/completions/hostrt");
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(hostrt completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   hostrt completions zsh > ~/.zsh/completions/_hostrt");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   hostrt completions fish > ~/.config/fish/completions/hostrt.fish");
            eprintln!("# Or add to config.fish:");
            eprintln!("#   hostrt completions fish | source");
        }
        Shell::PowerShell => {
            eprintln!("#   hostrt completions powershell > $PROFILE");
            eprintln!("# Or run:");
            eprintln!("#   hostrt completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
