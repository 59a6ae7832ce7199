//! Per-application directories following each platform's conventions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::{posix, win32, PathFlavor};
use crate::string::JsString;

use super::os::{homedir_for, tmpdir_for};
use super::{non_empty_var, HostEnvironment, Platform};

/// Options for [`EnvPaths::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnvPathsOptions {
    /// Appended to the application name as `name-suffix`.
    pub suffix: Option<String>,
}

/// Where an application keeps its files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnvPaths {
    /// Persistent data.
    pub data: JsString,
    /// Configuration.
    pub config: JsString,
    /// Non-essential cached data.
    pub cache: JsString,
    /// Log files.
    pub log: JsString,
    /// Scratch files.
    pub temp: JsString,
}

impl EnvPaths {
    /// Computes the directories of application `name` on `platform`.
    ///
    /// - Windows: `%LOCALAPPDATA%\<name>\{Data,Cache,Log}` and
    ///   `%APPDATA%\<name>\Config`.
    /// - macOS: `~/Library/{Application Support,Preferences,Caches,Logs}/<name>`.
    /// - Linux and others: the XDG base directories with their usual
    ///   defaults, and `<tmpdir>/<user>/<name>` for scratch files.
    ///
    /// Nothing is created on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirUnavailable`](crate::Error::HomeDirUnavailable)
    /// when a directory depends on the home directory and none is known.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::host::{EnvPaths, EnvPathsOptions, Platform, StaticHost};
    ///
    /// let host = StaticHost::new("/").with_var("HOME", "/home/ada");
    /// let paths = EnvPaths::create("demo", &EnvPathsOptions::default(), Platform::Linux, &host)?;
    /// assert_eq!(paths.config, "/home/ada/.config/demo");
    /// assert_eq!(paths.temp, "/tmp/ada/demo");
    /// # Ok::<(), hostrt::Error>(())
    /// ```
    pub fn create<H>(
        name: &str,
        options: &EnvPathsOptions,
        platform: Platform,
        host: &H,
    ) -> Result<Self>
    where
        H: HostEnvironment + ?Sized,
    {
        let name = match options.suffix.as_deref() {
            Some(suffix) if !suffix.is_empty() => format!("{name}-{suffix}"),
            _ => name.to_string(),
        };
        log::debug!("computing {platform} directories for {name}");

        match platform {
            Platform::Win32 => Self::windows(&name, host),
            Platform::Darwin => Self::macos(&name, host),
            Platform::Linux | Platform::Android | Platform::Unknown => Self::linux(&name, host),
        }
    }

    fn windows<H>(name: &str, host: &H) -> Result<Self>
    where
        H: HostEnvironment + ?Sized,
    {
        let app_data = match non_empty_var(host, "APPDATA") {
            Some(dir) => dir,
            None => win32::join([homedir_for(PathFlavor::Win32, host)?, "AppData\\Roaming".into()]),
        };
        let local_app_data = match non_empty_var(host, "LOCALAPPDATA") {
            Some(dir) => dir,
            None => win32::join([homedir_for(PathFlavor::Win32, host)?, "AppData\\Local".into()]),
        };
        let under = |base: &JsString, leaf: &str| win32::join([base, &name.into(), &leaf.into()]);

        Ok(Self {
            data: under(&local_app_data, "Data"),
            config: under(&app_data, "Config"),
            cache: under(&local_app_data, "Cache"),
            log: under(&local_app_data, "Log"),
            temp: win32::join([tmpdir_for(PathFlavor::Win32, host), name.into()]),
        })
    }

    fn macos<H>(name: &str, host: &H) -> Result<Self>
    where
        H: HostEnvironment + ?Sized,
    {
        let library = posix::join([homedir_for(PathFlavor::Posix, host)?, "Library".into()]);
        let under = |folder: &str| posix::join([&library, &folder.into(), &name.into()]);

        Ok(Self {
            data: under("Application Support"),
            config: under("Preferences"),
            cache: under("Caches"),
            log: under("Logs"),
            temp: posix::join([tmpdir_for(PathFlavor::Posix, host), name.into()]),
        })
    }

    fn linux<H>(name: &str, host: &H) -> Result<Self>
    where
        H: HostEnvironment + ?Sized,
    {
        let home = homedir_for(PathFlavor::Posix, host)?;
        let username = posix::basename(&home, None);
        let xdg = |variable: &str, fallback: &str| {
            let base = non_empty_var(host, variable)
                .unwrap_or_else(|| posix::join([&home, &fallback.into()]));
            posix::join([base, name.into()])
        };

        Ok(Self {
            data: xdg("XDG_DATA_HOME", ".local/share"),
            config: xdg("XDG_CONFIG_HOME", ".config"),
            cache: xdg("XDG_CACHE_HOME", ".cache"),
            log: xdg("XDG_STATE_HOME", ".local/state"),
            temp: posix::join([tmpdir_for(PathFlavor::Posix, host), username, name.into()]),
        })
    }
}
