#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hostrt
//!
//! Host runtime primitives: UTF-16 strings and POSIX/Win32 path semantics.
//!
//! This library provides a string type with UTF-16 code-unit semantics and
//! pure path engines for both POSIX and Win32 conventions, together with the
//! small amount of host state (working directory, environment) that path
//! resolution depends on.
//!
//! ## Core Types
//!
//! - [`JsString`]: Code-unit indexed string with the usual search and transform operations
//! - [`path::PathFlavor`] and the [`path::posix`] / [`path::win32`] engines
//! - [`host::HostEnvironment`]: Working directory and environment collaborator
//! - [`config::Config`]: Layered configuration describing a host
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use hostrt::path::{posix, win32, PathFlavor};
//! use hostrt::JsString;
//!
//! let s = JsString::from("a😀b");
//! assert_eq!(s.length(), 4);
//!
//! assert_eq!(posix::normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
//! assert_eq!(win32::join(["C:\\temp", "..", "x"]), "C:\\x");
//! assert_eq!(PathFlavor::Posix.extname("index.coffee.md"), ".md");
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod path;
pub mod string;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use host::{HostEnvironment, StaticHost, SystemHost};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{ParsedPath, PathFlavor};
pub use string::JsString;
