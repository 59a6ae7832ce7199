//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Every `HOSTRT_*` variable the configuration layer reads.
pub const HOSTRT_VARS: [&str; 4] = [
    "HOSTRT_PATH_FLAVOR",
    "HOSTRT_CWD",
    "HOSTRT_INHERIT_ENV",
    "HOSTRT_OUTPUT_FORMAT",
];

/// Sets variables for the duration of `f`, restoring previous values.
///
/// Callers must be `#[serial]`: the process environment is shared.
pub fn with_vars<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let saved: Vec<_> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), env::var_os(key)))
        .collect();
    for (key, value) in vars {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }
    f();
    for (key, value) in saved {
        match value {
            Some(v) => env::set_var(&key, v),
            None => env::remove_var(&key),
        }
    }
}

/// `with_vars` with every `HOSTRT_*` variable cleared first.
pub fn with_clean_hostrt_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let mut all: Vec<(&str, Option<&str>)> = HOSTRT_VARS.iter().map(|k| (*k, None)).collect();
    all.extend_from_slice(vars);
    with_vars(&all, f);
}

/// Temporary project tree with an isolated user config directory.
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory standing in for the user config directory.
    pub fn user_config_dir(&self) -> PathBuf {
        let dir = self.root().join("user-config");
        fs::create_dir_all(&dir).expect("Failed to create user config dir");
        dir
    }

    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let dir = self.root().join(relative);
        fs::create_dir_all(&dir).expect("Failed to create dir");
        dir
    }

    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }
}
