//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Normalize a path
//! - `join`: Join segments and normalize
//! - `resolve`: Resolve paths against the configured host
//! - `relative`: Relative path between two paths
//! - `dirname`, `basename`, `extname`: Path components
//! - `parse`: Split a path into its parts
//! - `format`: Build a path from its parts
//! - `is_absolute`: Assert a path is absolute
//! - `namespaced`: Win32 namespace-prefixed path
//! - `info`: Show the effective host
//! - `env_paths`: Show per-application directories
//! - `completions`: Generate shell completion scripts

pub mod basename;
pub mod completions;
pub mod dirname;
pub mod env_paths;
pub mod extname;
pub mod format;
pub mod info;
pub mod is_absolute;
pub mod join;
pub mod namespaced;
pub mod normalize;
pub mod parse;
pub mod relative;
pub mod resolve;

pub use basename::BasenameCommand;
pub use completions::CompletionsCommand;
pub use dirname::DirnameCommand;
pub use env_paths::EnvPathsCommand;
pub use extname::ExtnameCommand;
pub use format::FormatCommand;
pub use info::InfoCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use join::JoinCommand;
pub use namespaced::NamespacedCommand;
pub use normalize::NormalizeCommand;
pub use parse::ParseCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
