//! Node-compatible path manipulation.
//!
//! Two engines implement the same operation set over [`JsString`]:
//!
//! - [`posix`]: `/`-separated paths with a single root shape.
//! - [`win32`]: drive letters, UNC roots, `\` output with `/` accepted on input.
//!
//! Both share the dot-segment collapser and the tail scanners in
//! [`separator`]. The free functions re-exported here use the engine of the
//! compilation target; [`PathFlavor`] selects one at runtime.
//!
//! Every operation is total: malformed input produces a best-effort string,
//! never an error.
//!
//! # Host state
//!
//! `resolve`, `relative` and the Win32 `to_namespaced_path` read the working
//! directory (and on Win32 the `=C:` per-drive variables). The plain versions
//! read the live process through [`SystemHost`](crate::host::SystemHost); the
//! `*_with` versions take any [`HostEnvironment`](crate::host::HostEnvironment).
//!
//! # Examples
//!
//! ```
//! use hostrt::host::StaticHost;
//! use hostrt::path::{posix, win32};
//!
//! assert_eq!(posix::normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
//! assert_eq!(win32::normalize("C:////temp\\\\/\\/\\/foo/bar"), "C:\\temp\\foo\\bar");
//!
//! let host = StaticHost::new("/home/user");
//! assert_eq!(posix::resolve_with(&host, ["a", "../b"]), "/home/user/b");
//! ```
//!
//! [`JsString`]: crate::string::JsString

mod flavor;
pub mod posix;
pub mod separator;
mod types;
pub mod win32;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use flavor::PathFlavor;
pub use types::ParsedPath;

#[cfg(not(windows))]
pub use posix::{
    basename, dirname, extname, format, is_absolute, join, normalize, parse, relative,
    relative_with, resolve, resolve_with, to_namespaced_path, DELIMITER, SEPARATOR,
};

#[cfg(windows)]
pub use win32::{
    basename, dirname, extname, format, is_absolute, join, normalize, parse, relative,
    relative_with, resolve, resolve_with, to_namespaced_path, DELIMITER, SEPARATOR,
};
