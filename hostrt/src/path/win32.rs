//! Win32 path semantics.
//!
//! `\` is the separator emitted by every operation, `/` is accepted on input.
//! A path may start with one of three roots:
//!
//! - a drive, `C:` (drive-relative) or `C:\` (absolute);
//! - a UNC root, `\\server\share`;
//! - a bare separator, `\`.
//!
//! Roots are classified once per call by [`Root::classify`]; the rest of
//! each algorithm works on the tail after the root.
//!
//! # Examples
//!
//! ```
//! use hostrt::path::win32;
//!
//! assert_eq!(win32::normalize("C:////temp\\\\/\\/\\/foo/bar"), "C:\\temp\\foo\\bar");
//! assert_eq!(win32::dirname("\\\\unc\\share\\foo"), "\\\\unc\\share\\");
//! assert!(win32::is_absolute("//server"));
//! assert!(!win32::is_absolute("C:foo"));
//! ```

use std::ops::Range;

use crate::host::{HostEnvironment, Snapshot, SystemHost};
use crate::string::JsString;

use super::separator::{
    basename_from, code_at, collapse_dot_segments, common_prefix, extname_from, format_with,
    is_drive_letter, is_win32_separator, parent_steps, slice_units, TailScan, CHAR_BACKWARD_SLASH,
    CHAR_COLON, CHAR_DOT, CHAR_FORWARD_SLASH, CHAR_QUESTION_MARK,
};
use super::types::ParsedPath;

/// Segment separator.
pub const SEPARATOR: char = '\\';

/// `PATH`-style list delimiter.
pub const DELIMITER: char = ';';

/// Root shape at the start of a Win32 path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Root {
    /// Relative path.
    None,
    /// A leading separator that does not start a full UNC root.
    Separator,
    /// `\\server\share`; the share range ends where the root ends.
    Unc {
        server: Range<usize>,
        share: Range<usize>,
    },
    /// `C:`, absolute when followed by a separator.
    Drive { absolute: bool },
}

impl Root {
    pub fn classify(path: &[u16]) -> Self {
        let Some(&first) = path.first() else {
            return Self::None;
        };

        if is_win32_separator(first) {
            if is_win32_separator(code_at(path, 1)) {
                if let Some((server, share)) = match_unc(path) {
                    return Self::Unc { server, share };
                }
            }
            return Self::Separator;
        }

        if is_drive_letter(first) && code_at(path, 1) == CHAR_COLON {
            return Self::Drive {
                absolute: path.len() > 2 && is_win32_separator(path[2]),
            };
        }

        Self::None
    }

    pub fn is_absolute(&self) -> bool {
        match self {
            Self::None => false,
            Self::Separator | Self::Unc { .. } => true,
            Self::Drive { absolute } => *absolute,
        }
    }

    /// Index where the root ends, not counting a separator after a UNC share.
    pub fn end(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Separator => 1,
            Self::Unc { share, .. } => share.end,
            Self::Drive { absolute: true } => 3,
            Self::Drive { absolute: false } => 2,
        }
    }

    /// The device prefix in canonical form: `C:` or `\\server\share`.
    pub fn device(&self, path: &[u16]) -> Vec<u16> {
        match self {
            Self::Unc { server, share } => {
                let mut device = vec![CHAR_BACKWARD_SLASH, CHAR_BACKWARD_SLASH];
                device.extend_from_slice(&path[server.clone()]);
                device.push(CHAR_BACKWARD_SLASH);
                device.extend_from_slice(&path[share.clone()]);
                device
            }
            Self::Drive { .. } => path[..2].to_vec(),
            Self::None | Self::Separator => Vec::new(),
        }
    }
}

/// Matches `\\server\share` at the start of `path`, which must begin with two
/// separators. Separator runs between the parts may be of any length.
fn match_unc(path: &[u16]) -> Option<(Range<usize>, Range<usize>)> {
    let len = path.len();
    let mut j = 2;

    let server_start = j;
    while j < len && !is_win32_separator(path[j]) {
        j += 1;
    }
    if j >= len || j == server_start {
        return None;
    }
    let server = server_start..j;

    while j < len && is_win32_separator(path[j]) {
        j += 1;
    }
    if j >= len {
        return None;
    }

    let share_start = j;
    while j < len && !is_win32_separator(path[j]) {
        j += 1;
    }
    Some((server, share_start..j))
}

fn lowercase_eq(a: &[u16], b: &[u16]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(&x, &y)| ascii_lower(x) == ascii_lower(y))
}

fn ascii_lower(unit: u16) -> u16 {
    match unit {
        0x41..=0x5A => unit + 32,
        _ => unit,
    }
}

/// Returns true for paths starting with a separator or a drive and separator.
#[must_use]
pub fn is_absolute(path: impl Into<JsString>) -> bool {
    Root::classify(path.into().code_units()).is_absolute()
}

/// Collapses `.` and `..` segments and converts separators to `\`.
///
/// # Examples
///
/// ```
/// use hostrt::path::win32;
///
/// assert_eq!(win32::normalize("C:"), "C:.");
/// assert_eq!(win32::normalize("//server/share"), "\\\\server\\share\\");
/// assert_eq!(win32::normalize("C:..\\..\\abc\\..\\def"), "C:..\\..\\def");
/// ```
#[must_use]
pub fn normalize(path: impl Into<JsString>) -> JsString {
    normalize_units(path.into().code_units())
}

fn normalize_units(path: &[u16]) -> JsString {
    let len = path.len();
    if len == 0 {
        return JsString::from(".");
    }
    if len == 1 {
        if path[0] == CHAR_FORWARD_SLASH {
            return JsString::from("\\");
        }
        return JsString::from(path);
    }

    let root = Root::classify(path);
    if let Root::Unc { share, .. } = &root {
        if share.end == len {
            // Only a UNC root; it always gets a trailing separator.
            let mut out = JsString::from(root.device(path));
            out.push_unit(CHAR_BACKWARD_SLASH);
            return out;
        }
    }

    let root_end = root.end();
    let absolute = root.is_absolute();
    let mut tail = if root_end < len {
        collapse_dot_segments(
            &path[root_end..],
            !absolute,
            CHAR_BACKWARD_SLASH,
            is_win32_separator,
        )
    } else {
        Vec::new()
    };
    if tail.is_empty() && !absolute {
        tail.push(CHAR_DOT);
    }
    if !tail.is_empty() && is_win32_separator(path[len - 1]) {
        tail.push(CHAR_BACKWARD_SLASH);
    }

    let mut out = JsString::from(root.device(path));
    if absolute {
        out.push_unit(CHAR_BACKWARD_SLASH);
    }
    out.extend(tail);
    out
}

/// Joins the non-empty `paths` with `\` and normalizes the result.
///
/// A run of leading separators is collapsed to one unless the first
/// non-empty part itself looks like a UNC root (`\\server`), so joining
/// `\\` with `foo` does not produce an accidental UNC path.
///
/// # Examples
///
/// ```
/// use hostrt::path::win32;
///
/// assert_eq!(win32::join(["//foo", "bar"]), "\\\\foo\\bar\\");
/// assert_eq!(win32::join(["//", "foo/bar"]), "\\foo\\bar");
/// assert_eq!(win32::join(["c:", "file"]), "c:\\file");
/// ```
#[must_use]
pub fn join<I, S>(paths: I) -> JsString
where
    I: IntoIterator<Item = S>,
    S: Into<JsString>,
{
    let mut joined: Option<JsString> = None;
    let mut first_part = JsString::new();
    for part in paths {
        let part = part.into();
        if part.is_empty() {
            continue;
        }
        match joined.as_mut() {
            Some(acc) => {
                acc.push_unit(CHAR_BACKWARD_SLASH);
                acc.append(&part);
            }
            None => {
                first_part = part.clone();
                joined = Some(part);
            }
        }
    }
    let Some(joined) = joined else {
        return JsString::from(".");
    };

    let first = first_part.code_units();
    let mut needs_replace = true;
    let mut slash_count = 0;
    if is_win32_separator(code_at(first, 0)) {
        slash_count += 1;
        if first.len() > 1 && is_win32_separator(first[1]) {
            slash_count += 1;
            if first.len() > 2 {
                if is_win32_separator(first[2]) {
                    slash_count += 1;
                } else {
                    // `\\server` was given explicitly
                    needs_replace = false;
                }
            }
        }
    }

    let joined = joined.code_units();
    if needs_replace {
        while slash_count < joined.len() && is_win32_separator(joined[slash_count]) {
            slash_count += 1;
        }
        if slash_count >= 2 {
            let mut replaced = vec![CHAR_BACKWARD_SLASH];
            replaced.extend_from_slice(&joined[slash_count..]);
            return normalize_units(&replaced);
        }
    }
    normalize_units(joined)
}

/// Resolves `paths` against the process working directory.
///
/// See [`resolve_with`].
#[must_use]
pub fn resolve<I, S>(paths: I) -> JsString
where
    I: IntoIterator<Item = S>,
    S: Into<JsString>,
{
    resolve_with(&SystemHost, paths)
}

/// Accumulated state of a right-to-left resolution.
#[derive(Debug, Default)]
struct Resolution {
    device: Vec<u16>,
    tail: Vec<u16>,
    absolute: bool,
}

impl Resolution {
    /// Folds in the next argument to the left. Returns true once both a
    /// device and an absolute tail are known.
    fn absorb(&mut self, path: &[u16]) -> bool {
        let root = Root::classify(path);
        let device = root.device(path);

        if !device.is_empty() {
            if self.device.is_empty() {
                self.device = device;
            } else if !lowercase_eq(&device, &self.device) {
                // a path on another device cannot contribute
                return false;
            }
        }

        if self.absolute {
            return !self.device.is_empty();
        }

        let mut tail = path[root.end()..].to_vec();
        tail.push(CHAR_BACKWARD_SLASH);
        tail.append(&mut self.tail);
        self.tail = tail;
        self.absolute = root.is_absolute();
        self.absolute && !self.device.is_empty()
    }
}

/// Directory used when the arguments do not resolve on their own.
///
/// With a known device the per-drive directory (`=C:`) is preferred; when
/// neither it nor the working directory lives on that device, the device root
/// is used instead.
fn base_directory<H>(host: &H, device: &[u16]) -> JsString
where
    H: HostEnvironment + ?Sized,
{
    if device.is_empty() {
        return host.current_dir();
    }

    let variable = drive_variable(device);
    let path = drive_directory(host, &variable)
        .or_else(|| {
            // a host map may hold the variable under the spelling it was given
            let typed = JsString::from("=") + &JsString::from(device);
            (typed != variable).then(|| drive_directory(host, &typed)).flatten()
        })
        .unwrap_or_else(|| host.current_dir());
    log::debug!("working directory for drive {variable}: {path}");

    let units = path.code_units();
    if !lowercase_eq(slice_units(units, 0, 2), device) && code_at(units, 2) == CHAR_BACKWARD_SLASH {
        let mut root = JsString::from(device);
        root.push_unit(CHAR_BACKWARD_SLASH);
        return root;
    }
    path
}

/// Name of the per-drive variable for `device`, `=C:` for `c:`.
///
/// Windows keeps these with an upper-case letter and looks names up without
/// regard to case, so the letter is upper-cased here.
fn drive_variable(device: &[u16]) -> JsString {
    let mut variable = JsString::from("=");
    if device.len() == 2 && is_drive_letter(device[0]) && device[1] == CHAR_COLON {
        let letter = device[0];
        variable.push_unit(if letter >= 0x61 { letter - 0x20 } else { letter });
        variable.push_unit(CHAR_COLON);
    } else {
        variable.extend(device.iter().copied());
    }
    variable
}

fn drive_directory<H>(host: &H, variable: &JsString) -> Option<JsString>
where
    H: HostEnvironment + ?Sized,
{
    host.env_var(variable).filter(|value| !value.is_empty())
}

/// Resolves `paths` into an absolute path.
///
/// Drive-relative arguments (`C:foo`) resolve against the drive's own working
/// directory, read from the `=C:` variable of `host`.
///
/// # Examples
///
/// ```
/// use hostrt::host::StaticHost;
/// use hostrt::path::win32;
///
/// let host = StaticHost::new("C:\\Users\\me");
/// assert_eq!(win32::resolve_with(&host, ["c:/blah\\blah", "d:/games", "c:../a"]), "c:\\blah\\a");
/// assert_eq!(win32::resolve_with(&host, ["foo"]), "C:\\Users\\me\\foo");
/// assert_eq!(win32::resolve_with(&host, ["d:foo"]), "d:\\foo");
/// ```
#[must_use]
pub fn resolve_with<H, I, S>(host: &H, paths: I) -> JsString
where
    H: HostEnvironment + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<JsString>,
{
    let paths: Vec<JsString> = paths.into_iter().map(Into::into).collect();
    let mut resolution = Resolution::default();

    let complete = paths
        .iter()
        .rev()
        .filter(|path| !path.is_empty())
        .any(|path| resolution.absorb(path.code_units()));

    if !complete {
        let base = base_directory(host, &resolution.device);
        if !base.is_empty() {
            resolution.absorb(base.code_units());
        }
    }

    let tail = collapse_dot_segments(
        &resolution.tail,
        !resolution.absolute,
        CHAR_BACKWARD_SLASH,
        is_win32_separator,
    );

    let mut out = JsString::from(resolution.device);
    if resolution.absolute {
        out.push_unit(CHAR_BACKWARD_SLASH);
    }
    out.extend(tail);
    if out.is_empty() {
        return JsString::from(".");
    }
    out
}

/// Returns the relative path from `from` to `to` using the process working
/// directory.
#[must_use]
pub fn relative(from: impl Into<JsString>, to: impl Into<JsString>) -> JsString {
    relative_with(&SystemHost, from, to)
}

/// Returns the relative path from `from` to `to`.
///
/// Comparison ignores ASCII case; the returned segments keep the casing of
/// the resolved `to`. Paths on different devices yield the resolved `to`.
///
/// # Examples
///
/// ```
/// use hostrt::host::StaticHost;
/// use hostrt::path::win32;
///
/// let host = StaticHost::new("C:\\");
/// assert_eq!(win32::relative_with(&host, "C:\\orandea\\test\\aaa", "C:\\orandea\\impl\\bbb"), "..\\..\\impl\\bbb");
/// assert_eq!(win32::relative_with(&host, "c:/AaAa/bbbb", "c:/aaaa/bbbb"), "");
/// assert_eq!(win32::relative_with(&host, "c:/aaaa", "d:/Games"), "d:\\Games");
/// ```
#[must_use]
pub fn relative_with<H>(host: &H, from: impl Into<JsString>, to: impl Into<JsString>) -> JsString
where
    H: HostEnvironment + ?Sized,
{
    let from = from.into();
    let to = to.into();
    if from == to {
        return JsString::new();
    }

    let host = Snapshot::new(host);
    let from_orig = resolve_with(&host, [from]);
    let to_orig = resolve_with(&host, [to]);
    if from_orig == to_orig {
        return JsString::new();
    }

    let from_lower = from_orig.to_lower_case();
    let to_lower = to_orig.to_lower_case();
    if from_lower == to_lower {
        return JsString::new();
    }
    let from = from_lower.code_units();
    let to = to_lower.code_units();

    let (from_start, from_end) = trim_backslashes(from);
    let from_len = from_end - from_start;
    let (mut to_start, to_end) = trim_backslashes(to);
    let to_len = to_end - to_start;

    let length = from_len.min(to_len);
    let (i, mut last_common_sep) = common_prefix(
        &from[from_start..from_end],
        &to[to_start..to_end],
        CHAR_BACKWARD_SLASH,
    );

    let to_units = to_orig.code_units();
    if i == length {
        if to_len > length {
            if to[to_start + i] == CHAR_BACKWARD_SLASH {
                // `from` is the exact base path of `to`
                return JsString::from(slice_units(to_units, to_start + i + 1, to_units.len()));
            }
            if i == 2 {
                // `from` is a device root
                return JsString::from(slice_units(to_units, to_start + i, to_units.len()));
            }
        }
        if from_len > length {
            if from[from_start + i] == CHAR_BACKWARD_SLASH {
                // `to` is the exact base path of `from`
                last_common_sep = Some(i);
            } else if i == 2 {
                // `to` is a device root
                last_common_sep = Some(3);
            }
        }
    } else if last_common_sep.is_none() {
        // nothing in common, e.g. different drives
        return to_orig;
    }

    let first = from_start + last_common_sep.map_or(0, |sep| sep + 1);
    let mut out = if first > from_end {
        JsString::new()
    } else {
        parent_steps(&from[first..from_end], CHAR_BACKWARD_SLASH)
    };

    to_start = match last_common_sep {
        Some(sep) => to_start + sep,
        None => to_start.saturating_sub(1),
    };
    if !out.is_empty() {
        out.extend(slice_units(to_units, to_start, to_end).iter().copied());
        return out;
    }
    if code_at(to_units, to_start) == CHAR_BACKWARD_SLASH {
        to_start += 1;
    }
    JsString::from(slice_units(to_units, to_start, to_end))
}

/// Bounds of `path` without leading and trailing backslashes.
fn trim_backslashes(path: &[u16]) -> (usize, usize) {
    let mut start = 0;
    while start < path.len() && path[start] == CHAR_BACKWARD_SLASH {
        start += 1;
    }
    let mut end = path.len();
    while end > start + 1 && path[end - 1] == CHAR_BACKWARD_SLASH {
        end -= 1;
    }
    (start, end)
}

/// Converts `path` to a `\\?\` namespaced path using the process working
/// directory.
#[must_use]
pub fn to_namespaced_path(path: impl Into<JsString>) -> JsString {
    to_namespaced_path_with(&SystemHost, path)
}

/// Converts `path` to a `\\?\` namespaced path.
///
/// Drive paths become `\\?\C:\...` and UNC paths `\\?\UNC\server\share\...`.
/// Anything else, including already namespaced and device paths, is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use hostrt::host::StaticHost;
/// use hostrt::path::win32;
///
/// let host = StaticHost::new("C:\\");
/// assert_eq!(win32::to_namespaced_path_with(&host, "C:/foo"), "\\\\?\\C:\\foo");
/// assert_eq!(win32::to_namespaced_path_with(&host, "//foo//bar"), "\\\\?\\UNC\\foo\\bar\\");
/// assert_eq!(win32::to_namespaced_path_with(&host, "\\\\.\\pipe\\p"), "\\\\.\\pipe\\p");
/// ```
#[must_use]
pub fn to_namespaced_path_with<H>(host: &H, path: impl Into<JsString>) -> JsString
where
    H: HostEnvironment + ?Sized,
{
    let path = path.into();
    if path.is_empty() {
        return path;
    }

    let resolved = resolve_with(host, [&path]);
    let units = resolved.code_units();
    if units.len() <= 2 {
        return path;
    }

    if units[0] == CHAR_BACKWARD_SLASH {
        if units[1] == CHAR_BACKWARD_SLASH && units[2] != CHAR_QUESTION_MARK && units[2] != CHAR_DOT
        {
            let mut out = JsString::from("\\\\?\\UNC\\");
            out.extend(units[2..].iter().copied());
            return out;
        }
    } else if is_drive_letter(units[0])
        && units[1] == CHAR_COLON
        && units[2] == CHAR_BACKWARD_SLASH
    {
        return JsString::from("\\\\?\\") + &resolved;
    }
    path
}

/// Returns the directory part of `path`.
///
/// Roots are returned whole: `C:\`, `\\server\share\` and a bare UNC root
/// are their own directory.
#[must_use]
pub fn dirname(path: impl Into<JsString>) -> JsString {
    let path = path.into();
    let units = path.code_units();
    let len = units.len();
    if len == 0 {
        return JsString::from(".");
    }
    if len == 1 {
        return if is_win32_separator(units[0]) {
            path
        } else {
            JsString::from(".")
        };
    }

    let root_end = match Root::classify(units) {
        Root::None => None,
        Root::Separator => Some(1),
        Root::Unc { share, .. } => {
            if share.end == len {
                return path;
            }
            Some(share.end + 1)
        }
        root @ Root::Drive { .. } => Some(root.end()),
    };
    let offset = root_end.unwrap_or(0);

    let mut end = None;
    let mut matched_slash = true;
    for i in (offset..len).rev() {
        if is_win32_separator(units[i]) {
            if !matched_slash {
                end = Some(i);
                break;
            }
        } else {
            matched_slash = false;
        }
    }

    match end.or(root_end) {
        Some(end) => JsString::from(&units[..end]),
        None => JsString::from("."),
    }
}

/// Length of a leading `C:` drive prefix, if any.
fn drive_prefix_len(path: &[u16]) -> usize {
    if path.len() >= 2 && is_drive_letter(path[0]) && path[1] == CHAR_COLON {
        2
    } else {
        0
    }
}

/// Returns the last segment of `path`, dropping `suffix` if it ends with it.
///
/// # Examples
///
/// ```
/// use hostrt::path::win32;
///
/// assert_eq!(win32::basename("C:\\temp\\myfile.html", None), "myfile.html");
/// assert_eq!(win32::basename("C:foo", None), "foo");
/// ```
#[must_use]
pub fn basename(path: impl Into<JsString>, suffix: Option<&JsString>) -> JsString {
    let path = path.into();
    let units = path.code_units();
    JsString::from(basename_from(
        units,
        drive_prefix_len(units),
        suffix.map(JsString::code_units),
        is_win32_separator,
    ))
}

/// Returns the extension of the last segment, from its last `.` on.
#[must_use]
pub fn extname(path: impl Into<JsString>) -> JsString {
    let path = path.into();
    let units = path.code_units();
    JsString::from(extname_from(units, drive_prefix_len(units), is_win32_separator))
}

/// Splits `path` into root, directory, base name, name and extension.
///
/// # Examples
///
/// ```
/// use hostrt::path::win32;
///
/// let parsed = win32::parse("C:\\path\\dir\\file.txt");
/// assert_eq!(parsed.root, "C:\\");
/// assert_eq!(parsed.dir, "C:\\path\\dir");
/// assert_eq!(parsed.base, "file.txt");
/// assert_eq!(parsed.ext, ".txt");
/// assert_eq!(parsed.name, "file");
/// ```
#[must_use]
pub fn parse(path: impl Into<JsString>) -> ParsedPath {
    let path = path.into();
    let units = path.code_units();
    let len = units.len();
    let mut parsed = ParsedPath::default();
    if len == 0 {
        return parsed;
    }

    if len == 1 {
        if is_win32_separator(units[0]) {
            parsed.root = path.clone();
            parsed.dir = path;
        } else {
            parsed.base = path.clone();
            parsed.name = path;
        }
        return parsed;
    }

    let root_end = match Root::classify(units) {
        Root::None => 0,
        Root::Separator => 1,
        Root::Unc { share, .. } => {
            if share.end == len {
                share.end
            } else {
                share.end + 1
            }
        }
        Root::Drive { absolute } => {
            if len == 2 || (absolute && len == 3) {
                // nothing but the root
                parsed.root = path.clone();
                parsed.dir = path;
                return parsed;
            }
            if absolute {
                3
            } else {
                2
            }
        }
    };
    if root_end > 0 {
        parsed.root = JsString::from(&units[..root_end]);
    }

    let scan = TailScan::run(units, root_end, root_end, is_win32_separator);
    scan.fill_parsed(units, scan.start_part, &mut parsed);

    parsed.dir = if scan.start_part > 0 && scan.start_part != root_end {
        JsString::from(&units[..scan.start_part - 1])
    } else {
        parsed.root.clone()
    };
    parsed
}

/// Builds a path from its parts; the inverse of [`parse`].
#[must_use]
pub fn format(parsed: &ParsedPath) -> JsString {
    format_with(CHAR_BACKWARD_SLASH, parsed)
}
