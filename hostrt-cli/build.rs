//! Build script for hostrt-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("hostrt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("POSIX and Win32 path utilities")
        .long_about(
            "Command-line front end for the hostrt path engines, evaluating paths with \
             POSIX or Win32 semantics against a configurable host",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flavor")
                .long("flavor")
                .help("Path semantics to apply (posix, win32 or native)")
                .value_name("FLAVOR")
                .global(true),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Working directory to resolve relative paths against")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Additional configuration file, applied over discovered ones")
                .value_name("FILE")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize").about("Normalize a path"),
            Command::new("join").about("Join path segments and normalize the result"),
            Command::new("resolve").about("Resolve paths to an absolute path"),
            Command::new("relative").about("Relative path from one path to another"),
            Command::new("dirname").about("Directory portion of a path"),
            Command::new("basename").about("Last portion of a path"),
            Command::new("extname").about("Extension of a path"),
            Command::new("parse").about("Split a path into root, dir, base, name and ext"),
            Command::new("format").about("Build a path from its parts"),
            Command::new("is-absolute")
                .about("Check whether a path is absolute")
                .long_about("Exit with status 0 for an absolute path and 1 for a relative one"),
            Command::new("namespaced").about("Win32 namespace-prefixed form of a path"),
            Command::new("info").about("Show the host the other commands run against"),
            Command::new("env-paths").about("Show per-application directories"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("hostrt.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
