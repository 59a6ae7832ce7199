//! Well-known directories of the host.

use crate::error::{Error, Result};
use crate::path::PathFlavor;
use crate::string::JsString;

use super::{non_empty_var, HostEnvironment};

/// Temporary directory for the native flavor.
///
/// See [`tmpdir_for`].
#[must_use]
pub fn tmpdir<H>(host: &H) -> JsString
where
    H: HostEnvironment + ?Sized,
{
    tmpdir_for(PathFlavor::native(), host)
}

/// Temporary directory as the environment of `host` describes it.
///
/// Win32 consults `TEMP`, `TMP`, then `%SystemRoot%\temp` and
/// `%windir%\temp`, falling back to `C:\temp`. POSIX consults `TMPDIR`,
/// `TMP` and `TEMP`, falling back to `/tmp`. One trailing separator is
/// dropped, except after a drive (`C:\`) or for the root itself.
///
/// # Examples
///
/// ```
/// use hostrt::host::{os, StaticHost};
/// use hostrt::path::PathFlavor;
///
/// let host = StaticHost::new("/").with_var("TMPDIR", "/var/tmp/");
/// assert_eq!(os::tmpdir_for(PathFlavor::Posix, &host), "/var/tmp");
///
/// let host = StaticHost::new("C:\\").with_var("SystemRoot", "C:\\Windows");
/// assert_eq!(os::tmpdir_for(PathFlavor::Win32, &host), "C:\\Windows\\temp");
/// ```
#[must_use]
pub fn tmpdir_for<H>(flavor: PathFlavor, host: &H) -> JsString
where
    H: HostEnvironment + ?Sized,
{
    match flavor {
        PathFlavor::Win32 => {
            let path = non_empty_var(host, "TEMP")
                .or_else(|| non_empty_var(host, "TMP"))
                .or_else(|| {
                    non_empty_var(host, "SystemRoot")
                        .or_else(|| non_empty_var(host, "windir"))
                        .map(|root| root + "\\temp")
                })
                .unwrap_or_else(|| JsString::from("C:\\temp"));
            if path.length() > 1 && path.ends_with("\\", None) && !path.ends_with(":\\", None) {
                path.slice(0, Some(-1))
            } else {
                path
            }
        }
        PathFlavor::Posix => {
            let path = non_empty_var(host, "TMPDIR")
                .or_else(|| non_empty_var(host, "TMP"))
                .or_else(|| non_empty_var(host, "TEMP"))
                .unwrap_or_else(|| JsString::from("/tmp"));
            if path.length() > 1 && path.ends_with("/", None) {
                path.slice(0, Some(-1))
            } else {
                path
            }
        }
    }
}

/// Home directory for the native flavor.
///
/// # Errors
///
/// See [`homedir_for`].
pub fn homedir<H>(host: &H) -> Result<JsString>
where
    H: HostEnvironment + ?Sized,
{
    homedir_for(PathFlavor::native(), host)
}

/// Home directory of the current user.
///
/// Reads `USERPROFILE` (Win32) or `HOME` (POSIX) and falls back to the
/// account database as reported by [`HostEnvironment::account_home_dir`].
///
/// # Errors
///
/// Returns [`Error::HomeDirUnavailable`] when neither source knows one.
pub fn homedir_for<H>(flavor: PathFlavor, host: &H) -> Result<JsString>
where
    H: HostEnvironment + ?Sized,
{
    let variable = match flavor {
        PathFlavor::Win32 => "USERPROFILE",
        PathFlavor::Posix => "HOME",
    };
    non_empty_var(host, variable)
        .or_else(|| {
            log::debug!("{variable} is not set, asking the account database");
            host.account_home_dir().filter(|home| !home.is_empty())
        })
        .ok_or(Error::HomeDirUnavailable)
}
