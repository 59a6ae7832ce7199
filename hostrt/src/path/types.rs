//! Core types for path handling.

use serde::{Deserialize, Serialize};

use crate::string::JsString;

/// A path split into its components.
///
/// For values returned by `parse`, `base` equals `name` followed by `ext`,
/// and `dir` only ends in a separator when it is a bare root.
///
/// # Examples
///
/// ```
/// use hostrt::path::posix;
///
/// let parsed = posix::parse("/home/user/dir/file.txt");
/// assert_eq!(parsed.root, "/");
/// assert_eq!(parsed.dir, "/home/user/dir");
/// assert_eq!(parsed.base, "file.txt");
/// assert_eq!(parsed.ext, ".txt");
/// assert_eq!(parsed.name, "file");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedPath {
    /// Root of the path (`/`, `C:\`, `\\server\share\`), empty if relative.
    pub root: JsString,
    /// Everything before the last segment.
    pub dir: JsString,
    /// Last segment including its extension.
    pub base: JsString,
    /// Extension of the last segment including the leading dot.
    pub ext: JsString,
    /// Last segment without its extension.
    pub name: JsString,
}

impl ParsedPath {
    /// Builds a value with only `dir` and `base` set, the usual input to `format`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrt::path::{posix, ParsedPath};
    ///
    /// let parts = ParsedPath::from_dir_and_base("/tmp", "notes.md");
    /// assert_eq!(posix::format(&parts), "/tmp/notes.md");
    /// ```
    #[must_use]
    pub fn from_dir_and_base(dir: impl Into<JsString>, base: impl Into<JsString>) -> Self {
        Self {
            dir: dir.into(),
            base: base.into(),
            ..Self::default()
        }
    }
}
