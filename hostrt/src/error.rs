//! Error types for the hostrt library.
//!
//! Almost everything in this crate is total: path operations never fail and
//! out-of-range string accessors return a default value. The variants below
//! cover the few operations that do signal failure, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a hostrt error.
///
/// # Examples
///
/// ```
/// use hostrt::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(0x1F600)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hostrt library.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric value is not a Unicode code point (RangeError class).
    #[error("invalid code point: {value}")]
    InvalidCodePoint {
        /// The rejected value.
        value: u32,
    },

    /// A byte sequence could not be decoded as UTF-8.
    #[error("invalid UTF-8: {reason}")]
    InvalidUtf8 {
        /// Why decoding failed.
        reason: String,
    },

    /// A string cannot be represented in the requested encoding.
    #[error("string is not representable: {reason}")]
    NotRepresentable {
        /// Why encoding failed.
        reason: String,
    },

    /// Neither the environment nor the account database names a home directory.
    #[error("cannot determine home directory")]
    HomeDirUnavailable,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::InvalidUtf8 {
            reason: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf16Error> for Error {
    fn from(err: std::string::FromUtf16Error) -> Self {
        Self::NotRepresentable {
            reason: err.to_string(),
        }
    }
}

impl Error {
    /// Check if error belongs to the RangeError class.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::Error;
    ///
    /// let err = Error::InvalidCodePoint { value: 0x110000 };
    /// assert!(err.is_range_error());
    /// ```
    #[must_use]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::InvalidCodePoint { .. })
    }

    /// Check if error comes from the UTF-8 codec boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::Error;
    ///
    /// let err = Error::NotRepresentable { reason: "lone surrogate".to_string() };
    /// assert!(err.is_encoding_error());
    /// ```
    #[must_use]
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Self::InvalidUtf8 { .. } | Self::NotRepresentable { .. })
    }
}
