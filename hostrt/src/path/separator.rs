//! Separator predicates and the scanning routines shared by both path flavors.
//!
//! Everything here works on raw UTF-16 code units so the POSIX and Win32
//! engines can share one implementation of dot-segment collapsing and of the
//! backwards scans behind `basename`, `extname` and `parse`.

use crate::string::JsString;

use super::types::ParsedPath;

/// `.`
pub const CHAR_DOT: u16 = b'.' as u16;
/// `/`
pub const CHAR_FORWARD_SLASH: u16 = b'/' as u16;
/// `\`
pub const CHAR_BACKWARD_SLASH: u16 = b'\\' as u16;
/// `:`
pub const CHAR_COLON: u16 = b':' as u16;
/// `?`
pub const CHAR_QUESTION_MARK: u16 = b'?' as u16;

/// Returns true for the POSIX separator `/`.
#[must_use]
pub const fn is_posix_separator(unit: u16) -> bool {
    unit == CHAR_FORWARD_SLASH
}

/// Returns true for either Win32 separator, `/` or `\`.
#[must_use]
pub const fn is_win32_separator(unit: u16) -> bool {
    unit == CHAR_FORWARD_SLASH || unit == CHAR_BACKWARD_SLASH
}

/// Returns true for an ASCII letter that may name a drive.
#[must_use]
pub const fn is_drive_letter(unit: u16) -> bool {
    matches!(unit, 0x41..=0x5A | 0x61..=0x7A)
}

/// Code unit at `index`, or `0` past the end.
pub(crate) fn code_at(units: &[u16], index: usize) -> u16 {
    units.get(index).copied().unwrap_or(0)
}

/// `units[start..end]`, empty when the range is inverted or out of bounds.
pub(crate) fn slice_units(units: &[u16], start: usize, end: usize) -> &[u16] {
    let end = end.min(units.len());
    if start >= end {
        &[]
    } else {
        &units[start..end]
    }
}

/// Collapses `.` and `..` segments and repeated separators in a root-less path.
///
/// Segments are joined with `separator` in the result. When
/// `allow_above_root` is false a `..` that would climb past the start of
/// `path` is dropped; when true it is kept as a literal `..` segment.
///
/// # Examples
///
/// ```
/// use hostrt::path::separator::{collapse_dot_segments, is_posix_separator};
///
/// let tail: Vec<u16> = "foo/bar//baz/asdf/quux/..".encode_utf16().collect();
/// let collapsed = collapse_dot_segments(&tail, false, u16::from(b'/'), is_posix_separator);
/// assert_eq!(String::from_utf16_lossy(&collapsed), "foo/bar/baz/asdf");
///
/// let tail: Vec<u16> = "../a/..".encode_utf16().collect();
/// let kept = collapse_dot_segments(&tail, true, u16::from(b'/'), is_posix_separator);
/// assert_eq!(String::from_utf16_lossy(&kept), "..");
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn collapse_dot_segments(
    path: &[u16],
    allow_above_root: bool,
    separator: u16,
    is_separator: fn(u16) -> bool,
) -> Vec<u16> {
    let mut res: Vec<u16> = Vec::with_capacity(path.len());
    let mut last_segment_length: usize = 0;
    // Index of the previous separator; -1 before the first one.
    let mut last_slash: isize = -1;
    // Dots seen in the current segment; -1 once any other unit shows up.
    let mut dots: i32 = 0;
    let mut code: u16 = 0;

    for i in 0..=path.len() {
        if i < path.len() {
            code = path[i];
        } else if is_separator(code) {
            break;
        } else {
            code = CHAR_FORWARD_SLASH;
        }

        let i = i as isize;
        if is_separator(code) {
            if last_slash == i - 1 || dots == 1 {
                // empty or `.` segment
            } else if dots == 2 {
                let ends_in_parent = res.len() >= 2
                    && last_segment_length == 2
                    && res[res.len() - 1] == CHAR_DOT
                    && res[res.len() - 2] == CHAR_DOT;
                if !ends_in_parent {
                    if res.len() > 2 {
                        match res.iter().rposition(|&unit| unit == separator) {
                            Some(index) => {
                                res.truncate(index);
                                last_segment_length = res
                                    .iter()
                                    .rposition(|&unit| unit == separator)
                                    .map_or(res.len(), |sep| res.len() - 1 - sep);
                            }
                            None => {
                                res.clear();
                                last_segment_length = 0;
                            }
                        }
                        last_slash = i;
                        dots = 0;
                        continue;
                    } else if !res.is_empty() {
                        res.clear();
                        last_segment_length = 0;
                        last_slash = i;
                        dots = 0;
                        continue;
                    }
                }
                if allow_above_root {
                    if !res.is_empty() {
                        res.push(separator);
                    }
                    res.extend_from_slice(&[CHAR_DOT, CHAR_DOT]);
                    last_segment_length = 2;
                }
            } else {
                let segment = &path[(last_slash + 1) as usize..i as usize];
                if !res.is_empty() {
                    res.push(separator);
                }
                res.extend_from_slice(segment);
                last_segment_length = segment.len();
            }
            last_slash = i;
            dots = 0;
        } else if code == CHAR_DOT && dots != -1 {
            dots += 1;
        } else {
            dots = -1;
        }
    }

    res
}

/// State left behind by a backwards scan over the last path segment.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TailScan {
    /// Index where the last segment begins.
    pub start_part: usize,
    /// Index just past the last non-separator unit, if any.
    pub end: Option<usize>,
    start_dot: Option<usize>,
    pre_dot_state: i8,
}

impl TailScan {
    /// Scans `path` backwards down to `stop`, starting the segment bookkeeping
    /// at `start_part`.
    pub fn run(path: &[u16], stop: usize, start_part: usize, is_separator: fn(u16) -> bool) -> Self {
        let mut scan = Self {
            start_part,
            end: None,
            start_dot: None,
            pre_dot_state: 0,
        };
        let mut matched_slash = true;

        for i in (stop..path.len()).rev() {
            let code = path[i];
            if is_separator(code) {
                if !matched_slash {
                    scan.start_part = i + 1;
                    break;
                }
                continue;
            }
            if scan.end.is_none() {
                matched_slash = false;
                scan.end = Some(i + 1);
            }
            if code == CHAR_DOT {
                if scan.start_dot.is_none() {
                    scan.start_dot = Some(i);
                } else if scan.pre_dot_state != 1 {
                    scan.pre_dot_state = 1;
                }
            } else if scan.start_dot.is_some() {
                scan.pre_dot_state = -1;
            }
        }

        scan
    }

    /// Index of the dot that starts the extension of the last segment.
    ///
    /// Dotfiles and a bare `..` have no extension.
    pub fn extension_dot(&self) -> Option<usize> {
        let start_dot = self.start_dot?;
        let end = self.end?;
        if self.pre_dot_state == 0
            || (self.pre_dot_state == 1
                && start_dot + 1 == end
                && start_dot == self.start_part + 1)
        {
            return None;
        }
        Some(start_dot)
    }

    /// Fills `base`, `name` and `ext` from the segment starting at `start`.
    pub fn fill_parsed(&self, path: &[u16], start: usize, parsed: &mut ParsedPath) {
        let Some(end) = self.end else {
            return;
        };
        match self.extension_dot() {
            Some(dot) => {
                parsed.name = JsString::from(slice_units(path, start, dot));
                parsed.base = JsString::from(slice_units(path, start, end));
                parsed.ext = JsString::from(slice_units(path, dot, end));
            }
            None => {
                parsed.base = JsString::from(slice_units(path, start, end));
                parsed.name = parsed.base.clone();
            }
        }
    }
}

/// Returns the extension of the last segment of `path`, scanning down to `start`.
pub(crate) fn extname_from(path: &[u16], start: usize, is_separator: fn(u16) -> bool) -> &[u16] {
    let scan = TailScan::run(path, start, start, is_separator);
    match (scan.extension_dot(), scan.end) {
        (Some(dot), Some(end)) => slice_units(path, dot, end),
        _ => &[],
    }
}

/// Returns the last segment of `path`, scanning down to `start` and stripping
/// `suffix` when the segment ends with it.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn basename_from<'a>(
    path: &'a [u16],
    start: usize,
    suffix: Option<&[u16]>,
    is_separator: fn(u16) -> bool,
) -> &'a [u16] {
    let mut start = start;
    let mut matched_slash = true;

    if let Some(suffix) = suffix.filter(|s| !s.is_empty() && s.len() <= path.len()) {
        if suffix == path {
            return &[];
        }
        // Remaining suffix units to match, counting down; -1 once settled.
        let mut ext_idx = suffix.len() as isize - 1;
        let mut first_non_slash_end: Option<usize> = None;
        let mut end: Option<usize> = None;

        for i in (start..path.len()).rev() {
            let code = path[i];
            if is_separator(code) {
                if !matched_slash {
                    start = i + 1;
                    break;
                }
            } else {
                if first_non_slash_end.is_none() {
                    matched_slash = false;
                    first_non_slash_end = Some(i + 1);
                }
                if ext_idx >= 0 {
                    if code == suffix[ext_idx as usize] {
                        ext_idx -= 1;
                        if ext_idx == -1 {
                            end = Some(i);
                        }
                    } else {
                        ext_idx = -1;
                        end = first_non_slash_end;
                    }
                }
            }
        }

        let end = if end == Some(start) {
            first_non_slash_end
        } else {
            end.or(Some(path.len()))
        };
        return slice_units(path, start, end.unwrap_or(0));
    }

    let mut end: Option<usize> = None;
    for i in (start..path.len()).rev() {
        if is_separator(path[i]) {
            if !matched_slash {
                start = i + 1;
                break;
            }
        } else if end.is_none() {
            matched_slash = false;
            end = Some(i + 1);
        }
    }

    match end {
        Some(end) => slice_units(path, start, end),
        None => &[],
    }
}

/// Joins the parts of a [`ParsedPath`] back into one path.
///
/// `dir` wins over `root` and `base` wins over `name` + `ext`.
pub(crate) fn format_with(separator: u16, parsed: &ParsedPath) -> JsString {
    let dir = if parsed.dir.is_empty() {
        &parsed.root
    } else {
        &parsed.dir
    };
    let base = if parsed.base.is_empty() {
        parsed.name.clone() + &parsed.ext
    } else {
        parsed.base.clone()
    };

    if dir.is_empty() {
        return base;
    }
    let mut out = dir.clone();
    if *dir != parsed.root {
        out.push_unit(separator);
    }
    out + base
}

/// Longest common prefix of `from` and `to`, compared unit by unit.
///
/// Returns the number of matching units and the offset of the last
/// `separator` inside that shared prefix.
pub(crate) fn common_prefix(from: &[u16], to: &[u16], separator: u16) -> (usize, Option<usize>) {
    let mut last_common_sep = None;
    let mut i = 0;
    while i < from.len() && i < to.len() {
        let unit = from[i];
        if unit != to[i] {
            break;
        } else if unit == separator {
            last_common_sep = Some(i);
        }
        i += 1;
    }
    (i, last_common_sep)
}

/// One `..` for every segment of `remainder`, joined with `separator`.
///
/// An empty `remainder` still counts as one segment.
pub(crate) fn parent_steps(remainder: &[u16], separator: u16) -> JsString {
    let mut out = JsString::new();
    for index in 0..=remainder.len() {
        if index == remainder.len() || remainder[index] == separator {
            if !out.is_empty() {
                out.push_unit(separator);
            }
            out.extend([CHAR_DOT, CHAR_DOT]);
        }
    }
    out
}
