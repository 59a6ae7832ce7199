//! Host process collaborators.
//!
//! Path resolution needs two facts about the surrounding process: the
//! working directory and, on Win32, the per-drive working directories kept
//! in `=C:`-style environment variables. [`HostEnvironment`] is the seam
//! through which both are read, so the path engines stay pure and tests can
//! substitute a [`StaticHost`].
//!
//! # Examples
//!
//! ```
//! use hostrt::host::{HostEnvironment, StaticHost};
//! use hostrt::JsString;
//!
//! let host = StaticHost::new("/srv/app").with_var("HOME", "/home/app");
//! assert_eq!(host.current_dir(), "/srv/app");
//! assert_eq!(host.env_var(&JsString::from("HOME")).unwrap(), "/home/app");
//! assert!(host.env_var(&JsString::from("MISSING")).is_none());
//! ```

mod env_paths;
pub mod os;
mod process;

use std::cell::{OnceCell, RefCell};
use std::collections::BTreeMap;
use std::env;

use crate::string::JsString;

pub use env_paths::{EnvPaths, EnvPathsOptions};
pub use process::{Platform, Process};

/// Read access to the state of the host process.
#[cfg_attr(test, mockall::automock)]
pub trait HostEnvironment {
    /// The working directory. An empty string when it cannot be determined.
    fn current_dir(&self) -> JsString;

    /// Value of the environment variable `name`, if set.
    fn env_var(&self, name: &JsString) -> Option<JsString>;

    /// Home directory from the account database, used when no environment
    /// variable names one.
    fn account_home_dir(&self) -> Option<JsString> {
        None
    }
}

/// The live process: `std::env` for everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemHost;

impl HostEnvironment for SystemHost {
    fn current_dir(&self) -> JsString {
        match env::current_dir() {
            Ok(dir) => JsString::from_os_str(dir.as_os_str()),
            Err(e) => {
                log::warn!("failed to read the working directory: {e}");
                JsString::new()
            }
        }
    }

    fn env_var(&self, name: &JsString) -> Option<JsString> {
        if !is_valid_var_name(name) {
            log::debug!("skipping lookup of invalid variable name {name:?}");
            return None;
        }
        env::var_os(name.to_os_string()).map(|value| JsString::from_os_str(&value))
    }

    fn account_home_dir(&self) -> Option<JsString> {
        home::home_dir().map(|dir| JsString::from_os_str(dir.as_os_str()))
    }
}

/// Names the platform environment API accepts. Win32 allows a leading `=`
/// for the per-drive variables.
fn is_valid_var_name(name: &JsString) -> bool {
    let units = name.code_units();
    let equals = u16::from(b'=');
    let body = if cfg!(windows) && units.first() == Some(&equals) {
        &units[1..]
    } else {
        units
    };
    !units.is_empty() && !body.is_empty() && !body.iter().any(|&u| u == 0 || u == equals)
}

/// A fixed working directory and environment.
///
/// Used by tests, by configuration files that pin a working directory, and
/// for handling paths of a machine other than the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHost {
    cwd: JsString,
    vars: BTreeMap<JsString, JsString>,
    home: Option<JsString>,
}

impl StaticHost {
    /// Creates a host with the given working directory and no variables.
    #[must_use]
    pub fn new(cwd: impl Into<JsString>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Self::default()
        }
    }

    /// Adds a variable, replacing any previous value.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<JsString>, value: impl Into<JsString>) -> Self {
        self.set_var(name, value);
        self
    }

    /// Sets the home directory reported as the account database entry.
    #[must_use]
    pub fn with_account_home_dir(mut self, home: impl Into<JsString>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Sets a variable, replacing any previous value.
    pub fn set_var(&mut self, name: impl Into<JsString>, value: impl Into<JsString>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Removes a variable, returning its previous value.
    pub fn remove_var(&mut self, name: &JsString) -> Option<JsString> {
        self.vars.remove(name)
    }

    /// Replaces the working directory.
    pub fn set_current_dir(&mut self, cwd: impl Into<JsString>) {
        self.cwd = cwd.into();
    }

    /// All variables, in ordinal order of their names.
    #[must_use]
    pub fn vars(&self) -> &BTreeMap<JsString, JsString> {
        &self.vars
    }

    /// Snapshot of another host's working directory and the given variables.
    #[must_use]
    pub fn capture<H, I>(host: &H, names: I) -> Self
    where
        H: HostEnvironment + ?Sized,
        I: IntoIterator<Item = JsString>,
    {
        let vars = names
            .into_iter()
            .filter_map(|name| host.env_var(&name).map(|value| (name, value)))
            .collect();
        Self {
            cwd: host.current_dir(),
            vars,
            home: host.account_home_dir(),
        }
    }
}

impl HostEnvironment for StaticHost {
    fn current_dir(&self) -> JsString {
        self.cwd.clone()
    }

    fn env_var(&self, name: &JsString) -> Option<JsString> {
        self.vars.get(name).cloned()
    }

    fn account_home_dir(&self) -> Option<JsString> {
        self.home.clone()
    }
}

/// Memoizing view of another host for the duration of one operation.
///
/// The working directory and each variable are read from the inner host at
/// most once, so every resolution inside the operation sees the same state.
pub(crate) struct Snapshot<'a, H: ?Sized> {
    inner: &'a H,
    cwd: OnceCell<JsString>,
    vars: RefCell<BTreeMap<JsString, Option<JsString>>>,
}

impl<'a, H> Snapshot<'a, H>
where
    H: HostEnvironment + ?Sized,
{
    #[must_use]
    pub(crate) fn new(inner: &'a H) -> Self {
        Self {
            inner,
            cwd: OnceCell::new(),
            vars: RefCell::new(BTreeMap::new()),
        }
    }
}

impl<H> HostEnvironment for Snapshot<'_, H>
where
    H: HostEnvironment + ?Sized,
{
    fn current_dir(&self) -> JsString {
        self.cwd.get_or_init(|| self.inner.current_dir()).clone()
    }

    fn env_var(&self, name: &JsString) -> Option<JsString> {
        let cached = self.vars.borrow().get(name).cloned();
        if let Some(value) = cached {
            return value;
        }
        let value = self.inner.env_var(name);
        self.vars.borrow_mut().insert(name.clone(), value.clone());
        value
    }

    fn account_home_dir(&self) -> Option<JsString> {
        self.inner.account_home_dir()
    }
}

/// Value of `name` on `host`, treating an empty value as unset.
pub(crate) fn non_empty_var<H>(host: &H, name: &str) -> Option<JsString>
where
    H: HostEnvironment + ?Sized,
{
    host.env_var(&JsString::from(name))
        .filter(|value| !value.is_empty())
}
