//! Snapshot of the current process.

use std::collections::BTreeMap;
use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{HostEnvironment, SystemHost};
use crate::path::PathFlavor;
use crate::string::JsString;

/// Operating system family, named the way scripting runtimes report it.
///
/// # Examples
///
/// ```
/// use hostrt::host::Platform;
/// use hostrt::path::PathFlavor;
///
/// assert_eq!(Platform::Darwin.to_string(), "darwin");
/// assert_eq!(Platform::Win32.path_flavor(), PathFlavor::Win32);
/// assert_eq!(Platform::Linux.path_flavor(), PathFlavor::Posix);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows.
    Win32,
    /// macOS.
    Darwin,
    /// Linux.
    Linux,
    /// Android.
    Android,
    /// Anything else.
    Unknown,
}

impl Platform {
    /// The platform of the compilation target.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Win32
        } else if cfg!(target_os = "macos") {
            Self::Darwin
        } else if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Unknown
        }
    }

    /// Path semantics used on this platform.
    #[must_use]
    pub const fn path_flavor(self) -> PathFlavor {
        match self {
            Self::Win32 => PathFlavor::Win32,
            Self::Darwin | Self::Linux | Self::Android | Self::Unknown => PathFlavor::Posix,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win32 => write!(f, "win32"),
            Self::Darwin => write!(f, "darwin"),
            Self::Linux => write!(f, "linux"),
            Self::Android => write!(f, "android"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Process id, platform and environment captured at one point in time.
///
/// The environment is a copy: later changes to the real environment are not
/// visible through it. The working directory is always read live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pid: u32,
    platform: Platform,
    env: BTreeMap<JsString, JsString>,
}

impl Process {
    /// Captures the current process.
    #[must_use]
    pub fn current() -> Self {
        let env = env::vars_os()
            .map(|(name, value)| (JsString::from_os_str(&name), JsString::from_os_str(&value)))
            .collect::<BTreeMap<_, _>>();
        log::debug!("captured {} environment variables", env.len());
        Self {
            pid: std::process::id(),
            platform: Platform::current(),
            env,
        }
    }

    /// Builds a process description from explicit parts.
    #[must_use]
    pub fn from_parts(pid: u32, platform: Platform, env: BTreeMap<JsString, JsString>) -> Self {
        Self { pid, platform, env }
    }

    /// Process id.
    #[must_use]
    pub const fn pid(&self) -> u32 {
        self.pid
    }

    /// Operating system family.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Captured environment.
    #[must_use]
    pub fn env(&self) -> &BTreeMap<JsString, JsString> {
        &self.env
    }

    /// The live working directory.
    #[must_use]
    pub fn cwd(&self) -> JsString {
        SystemHost.current_dir()
    }
}

impl HostEnvironment for Process {
    fn current_dir(&self) -> JsString {
        self.cwd()
    }

    fn env_var(&self, name: &JsString) -> Option<JsString> {
        self.env.get(name).cloned()
    }

    fn account_home_dir(&self) -> Option<JsString> {
        SystemHost.account_home_dir()
    }
}
