//! Conversions between [`JsString`] and UTF-8, OS strings and scalar values.

use std::ffi::{OsStr, OsString};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::JsString;
use crate::error::{Error, Result};

impl JsString {
    /// Decodes UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUtf8`] if `bytes` is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::JsString;
    ///
    /// let s = JsString::from_utf8("caf\u{e9}".as_bytes()).unwrap();
    /// assert_eq!(s.length(), 4);
    /// assert!(JsString::from_utf8(&[0xC3]).is_err());
    /// ```
    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| Error::InvalidUtf8 {
            reason: e.to_string(),
        })?;
        Ok(Self::from(text))
    }

    /// Decodes UTF-8 bytes, replacing invalid sequences with U+FFFD.
    #[must_use]
    pub fn from_utf8_lossy(bytes: &[u8]) -> Self {
        Self::from(String::from_utf8_lossy(bytes).as_ref())
    }

    /// Encodes the string as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRepresentable`] if the string holds an unpaired
    /// surrogate.
    pub fn to_utf8(&self) -> Result<String> {
        Ok(String::from_utf16(&self.units)?)
    }

    /// Encodes the string as UTF-8, replacing unpaired surrogates with U+FFFD.
    #[must_use]
    pub fn to_utf8_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Encodes the string as UTF-8 bytes, replacing unpaired surrogates.
    #[must_use]
    pub fn to_utf8_bytes(&self) -> Vec<u8> {
        self.to_utf8_lossy().into_bytes()
    }

    /// Converts a platform string.
    ///
    /// Wide strings convert exactly on Windows; elsewhere invalid UTF-8 is
    /// replaced with U+FFFD.
    #[must_use]
    pub fn from_os_str(s: &OsStr) -> Self {
        #[cfg(windows)]
        {
            use std::os::windows::ffi::OsStrExt;
            s.encode_wide().collect()
        }
        #[cfg(not(windows))]
        {
            Self::from(s.to_string_lossy().as_ref())
        }
    }

    /// Converts to a platform string.
    #[must_use]
    pub fn to_os_string(&self) -> OsString {
        #[cfg(windows)]
        {
            use std::os::windows::ffi::OsStringExt;
            OsString::from_wide(&self.units)
        }
        #[cfg(not(windows))]
        {
            OsString::from(self.to_utf8_lossy())
        }
    }
}

impl From<&str> for JsString {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for JsString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for JsString {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<char> for JsString {
    fn from(c: char) -> Self {
        let mut buf = [0u16; 2];
        Self::from_slice(c.encode_utf16(&mut buf))
    }
}

impl From<bool> for JsString {
    fn from(value: bool) -> Self {
        Self::from(if value { "true" } else { "false" })
    }
}

impl From<i64> for JsString {
    fn from(value: i64) -> Self {
        Self::from(value.to_string())
    }
}

impl From<f64> for JsString {
    /// Renders the number the way the scripting runtime prints it:
    /// integral values without a fraction, `NaN` and `Infinity` spelled out.
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Self::from("NaN")
        } else if value.is_infinite() {
            Self::from(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value == 0.0 {
            Self::from("0")
        } else {
            Self::from(value.to_string())
        }
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8_lossy())
    }
}

impl Serialize for JsString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_utf8_lossy())
    }
}

impl<'de> Deserialize<'de> for JsString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
