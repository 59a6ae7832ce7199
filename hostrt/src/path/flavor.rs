//! Runtime selection between the POSIX and Win32 engines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::host::{HostEnvironment, SystemHost};
use crate::string::JsString;

use super::types::ParsedPath;
use super::{posix, win32};

/// Path semantics to apply.
///
/// The free functions in [`crate::path`] always use the semantics of the
/// compilation target; `PathFlavor` lets callers pick at runtime, for example
/// to handle Windows paths on a Linux host.
///
/// # Examples
///
/// ```
/// use hostrt::path::PathFlavor;
///
/// assert_eq!(PathFlavor::Win32.join(["a", "b"]), "a\\b");
/// assert_eq!(PathFlavor::Posix.join(["a", "b"]), "a/b");
/// assert_eq!(PathFlavor::Win32.to_string(), "win32");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PathFlavor {
    /// `/`-separated paths.
    Posix,
    /// Drive letters, UNC roots and `\`-separated paths.
    Win32,
}

impl PathFlavor {
    /// The flavor of the compilation target.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Win32
        } else {
            Self::Posix
        }
    }

    /// Parse a flavor name (case-insensitive). `native` selects
    /// [`PathFlavor::native`].
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "win32" | "windows" => Ok(Self::Win32),
            "native" => Ok(Self::native()),
            _ => Err(Error::Validation {
                field: "flavor".to_string(),
                message: format!("unknown path flavor '{s}': expected posix, win32 or native"),
            }),
        }
    }

    /// Segment separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => posix::SEPARATOR,
            Self::Win32 => win32::SEPARATOR,
        }
    }

    /// `PATH`-style list delimiter.
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Self::Posix => posix::DELIMITER,
            Self::Win32 => win32::DELIMITER,
        }
    }

    /// Whether `path` is absolute under this flavor.
    #[must_use]
    pub fn is_absolute(self, path: impl Into<JsString>) -> bool {
        match self {
            Self::Posix => posix::is_absolute(path),
            Self::Win32 => win32::is_absolute(path),
        }
    }

    /// Collapses dot segments and duplicate separators.
    #[must_use]
    pub fn normalize(self, path: impl Into<JsString>) -> JsString {
        match self {
            Self::Posix => posix::normalize(path),
            Self::Win32 => win32::normalize(path),
        }
    }

    /// Joins the non-empty `paths` and normalizes the result.
    #[must_use]
    pub fn join<I, S>(self, paths: I) -> JsString
    where
        I: IntoIterator<Item = S>,
        S: Into<JsString>,
    {
        match self {
            Self::Posix => posix::join(paths),
            Self::Win32 => win32::join(paths),
        }
    }

    /// Resolves against the live process state.
    #[must_use]
    pub fn resolve<I, S>(self, paths: I) -> JsString
    where
        I: IntoIterator<Item = S>,
        S: Into<JsString>,
    {
        self.resolve_with(&SystemHost, paths)
    }

    /// Resolves `paths` against the working directory of `host`.
    #[must_use]
    pub fn resolve_with<H, I, S>(self, host: &H, paths: I) -> JsString
    where
        H: HostEnvironment + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<JsString>,
    {
        match self {
            Self::Posix => posix::resolve_with(host, paths),
            Self::Win32 => win32::resolve_with(host, paths),
        }
    }

    /// Relative path from `from` to `to`, against the live process state.
    #[must_use]
    pub fn relative(self, from: impl Into<JsString>, to: impl Into<JsString>) -> JsString {
        self.relative_with(&SystemHost, from, to)
    }

    /// Relative path from `from` to `to`, resolving through `host`.
    #[must_use]
    pub fn relative_with<H>(
        self,
        host: &H,
        from: impl Into<JsString>,
        to: impl Into<JsString>,
    ) -> JsString
    where
        H: HostEnvironment + ?Sized,
    {
        match self {
            Self::Posix => posix::relative_with(host, from, to),
            Self::Win32 => win32::relative_with(host, from, to),
        }
    }

    /// Directory part of `path`.
    #[must_use]
    pub fn dirname(self, path: impl Into<JsString>) -> JsString {
        match self {
            Self::Posix => posix::dirname(path),
            Self::Win32 => win32::dirname(path),
        }
    }

    /// Last segment of `path`, minus `suffix` when it ends with it.
    #[must_use]
    pub fn basename(self, path: impl Into<JsString>, suffix: Option<&JsString>) -> JsString {
        match self {
            Self::Posix => posix::basename(path, suffix),
            Self::Win32 => win32::basename(path, suffix),
        }
    }

    /// Extension of the last segment.
    #[must_use]
    pub fn extname(self, path: impl Into<JsString>) -> JsString {
        match self {
            Self::Posix => posix::extname(path),
            Self::Win32 => win32::extname(path),
        }
    }

    /// Splits `path` into its components.
    #[must_use]
    pub fn parse(self, path: impl Into<JsString>) -> ParsedPath {
        match self {
            Self::Posix => posix::parse(path),
            Self::Win32 => win32::parse(path),
        }
    }

    /// Builds a path from its components.
    #[must_use]
    pub fn format(self, parsed: &ParsedPath) -> JsString {
        match self {
            Self::Posix => posix::format(parsed),
            Self::Win32 => win32::format(parsed),
        }
    }

    /// Namespaced form of `path`, against the live process state.
    #[must_use]
    pub fn to_namespaced_path(self, path: impl Into<JsString>) -> JsString {
        self.to_namespaced_path_with(&SystemHost, path)
    }

    /// Namespaced form of `path`; identity for POSIX.
    #[must_use]
    pub fn to_namespaced_path_with<H>(self, host: &H, path: impl Into<JsString>) -> JsString
    where
        H: HostEnvironment + ?Sized,
    {
        match self {
            Self::Posix => posix::to_namespaced_path(path),
            Self::Win32 => win32::to_namespaced_path_with(host, path),
        }
    }
}

impl Default for PathFlavor {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for PathFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Win32 => write!(f, "win32"),
        }
    }
}

impl FromStr for PathFlavor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}
