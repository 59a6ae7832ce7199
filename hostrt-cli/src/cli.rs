//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasenameCommand, CompletionsCommand, DirnameCommand, EnvPathsCommand, ExtnameCommand,
    FormatCommand, InfoCommand, IsAbsoluteCommand, JoinCommand, NamespacedCommand,
    NormalizeCommand, ParseCommand, RelativeCommand, ResolveCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line front end for hostrt path and host utilities.
#[derive(Parser)]
#[command(name = "hostrt")]
#[command(version, about = "POSIX and Win32 path utilities", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path semantics to apply (posix, win32 or native)
    #[arg(long, value_name = "FLAVOR", global = true)]
    pub flavor: Option<String>,

    /// Working directory to resolve relative paths against
    #[arg(long, value_name = "PATH", global = true)]
    pub cwd: Option<String>,

    /// Additional configuration file, applied over discovered ones
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize a path
    Normalize(NormalizeCommand),

    /// Join path segments and normalize the result
    Join(JoinCommand),

    /// Resolve paths to an absolute path
    Resolve(ResolveCommand),

    /// Relative path from one path to another
    Relative(RelativeCommand),

    /// Directory portion of a path
    Dirname(DirnameCommand),

    /// Last portion of a path
    Basename(BasenameCommand),

    /// Extension of a path
    Extname(ExtnameCommand),

    /// Split a path into root, dir, base, name and ext
    Parse(ParseCommand),

    /// Build a path from its parts
    Format(FormatCommand),

    /// Check whether a path is absolute
    IsAbsolute(IsAbsoluteCommand),

    /// Win32 namespace-prefixed form of a path
    Namespaced(NamespacedCommand),

    /// Show the host the other commands run against
    Info(InfoCommand),

    /// Show per-application directories
    EnvPaths(EnvPathsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
