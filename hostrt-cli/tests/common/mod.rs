//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated working and home directory
//! - Command builder helpers for common patterns
//! - Config file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would leak the developer's own setup into a test.
const SCRUBBED_VARS: [&str; 5] = [
    "HOSTRT_PATH_FLAVOR",
    "HOSTRT_CWD",
    "HOSTRT_INHERIT_ENV",
    "HOSTRT_OUTPUT_FORMAT",
    "HOSTRT_LOG_MODE",
];

/// Test environment with isolated working and home directories.
///
/// Commands run with the temporary directory as their working directory and
/// with `HOME` and the user config locations pointing inside it, so no real
/// user configuration is picked up.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Fake home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command builder with the isolated environment applied.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("hostrt").expect("Failed to find hostrt binary");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.home)
            .env("USERPROFILE", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("APPDATA", self.home.join("AppData").join("Roaming"));
        cmd
    }

    /// Get a command builder pinned to POSIX semantics and a fixed cwd.
    pub fn posix(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["--flavor", "posix", "--cwd", "/work/project"]);
        cmd
    }

    /// Get a command builder pinned to Win32 semantics and a fixed cwd.
    pub fn win32(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["--flavor", "win32", "--cwd", "C:\\work\\project"]);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file relative to the temporary directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

/// Run a command and return its stdout as a trimmed string.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run hostrt");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("stdout is not UTF-8")
        .trim_end_matches(['\r', '\n'])
        .to_string()
}
