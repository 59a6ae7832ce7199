//! POSIX path semantics: a single `/` separator and a single `/` root.
//!
//! # Examples
//!
//! ```
//! use hostrt::path::posix;
//!
//! assert_eq!(posix::normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
//! assert_eq!(posix::join(["/foo", "bar", "baz/asdf", "quux", ".."]), "/foo/bar/baz/asdf");
//! assert_eq!(
//!     posix::relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb"),
//!     "../../impl/bbb"
//! );
//! ```

use crate::host::{HostEnvironment, Snapshot, SystemHost};
use crate::string::JsString;

use super::separator::{
    basename_from, collapse_dot_segments, common_prefix, extname_from, format_with,
    is_posix_separator, parent_steps, slice_units, TailScan, CHAR_FORWARD_SLASH,
};
use super::types::ParsedPath;

/// Segment separator.
pub const SEPARATOR: char = '/';

/// `PATH`-style list delimiter.
pub const DELIMITER: char = ':';

fn units_is_absolute(path: &[u16]) -> bool {
    path.first() == Some(&CHAR_FORWARD_SLASH)
}

/// Returns true if `path` starts with `/`.
#[must_use]
pub fn is_absolute(path: impl Into<JsString>) -> bool {
    units_is_absolute(path.into().code_units())
}

/// Collapses `.` and `..` segments and duplicate separators.
///
/// An empty path normalizes to `.`. A trailing separator is preserved.
#[must_use]
pub fn normalize(path: impl Into<JsString>) -> JsString {
    normalize_units(path.into().code_units())
}

fn normalize_units(path: &[u16]) -> JsString {
    if path.is_empty() {
        return JsString::from(".");
    }

    let absolute = units_is_absolute(path);
    let trailing_separator = path.last() == Some(&CHAR_FORWARD_SLASH);
    let tail = collapse_dot_segments(path, !absolute, CHAR_FORWARD_SLASH, is_posix_separator);

    if tail.is_empty() {
        if absolute {
            return JsString::from("/");
        }
        return JsString::from(if trailing_separator { "./" } else { "." });
    }

    let mut out = JsString::new();
    if absolute {
        out.push_unit(CHAR_FORWARD_SLASH);
    }
    out.extend(tail);
    if trailing_separator {
        out.push_unit(CHAR_FORWARD_SLASH);
    }
    out
}

/// Joins the non-empty `paths` with `/` and normalizes the result.
///
/// Returns `.` when every part is empty.
#[must_use]
pub fn join<I, S>(paths: I) -> JsString
where
    I: IntoIterator<Item = S>,
    S: Into<JsString>,
{
    let mut joined: Option<JsString> = None;
    for part in paths {
        let part = part.into();
        if part.is_empty() {
            continue;
        }
        match joined.as_mut() {
            Some(acc) => {
                acc.push_unit(CHAR_FORWARD_SLASH);
                acc.append(&part);
            }
            None => joined = Some(part),
        }
    }

    joined.map_or_else(|| JsString::from("."), |joined| normalize_units(joined.code_units()))
}

/// Resolves `paths` into an absolute path against the process working directory.
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

/// Resolves `paths` into an absolute path.
///
/// Arguments are processed right to left, prepending each until an absolute
/// one is found. If none is, the working directory reported by `host` is
/// used. With no arguments the result is the normalized working directory.
///
/// # Examples
///
/// ```
/// use hostrt::host::StaticHost;
/// use hostrt::path::posix;
///
/// let host = StaticHost::new("/home/user");
/// assert_eq!(posix::resolve_with(&host, ["/foo/bar", "./baz"]), "/foo/bar/baz");
/// assert_eq!(posix::resolve_with(&host, ["/foo/bar", "/tmp/file/"]), "/tmp/file");
/// assert_eq!(posix::resolve_with(&host, ["www", "static/png/"]), "/home/user/www/static/png");
/// assert_eq!(posix::resolve_with(&host, Vec::<&str>::new()), "/home/user");
/// ```
#[must_use]
pub fn resolve_with<H, I, S>(host: &H, paths: I) -> JsString
where
    H: HostEnvironment + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<JsString>,
{
    let paths: Vec<JsString> = paths.into_iter().map(Into::into).collect();
    let mut resolved: Vec<u16> = Vec::new();
    let mut resolved_absolute = false;

    for path in paths.iter().rev() {
        if prepend_segment(&mut resolved, path.code_units()) {
            resolved_absolute = true;
            break;
        }
    }

    if !resolved_absolute {
        let cwd = host.current_dir();
        log::debug!("resolving against working directory {cwd}");
        resolved_absolute = prepend_segment(&mut resolved, cwd.code_units());
    }

    let tail = collapse_dot_segments(
        &resolved,
        !resolved_absolute,
        CHAR_FORWARD_SLASH,
        is_posix_separator,
    );

    if resolved_absolute {
        let mut out = JsString::from("/");
        out.extend(tail);
        out
    } else if tail.is_empty() {
        JsString::from(".")
    } else {
        JsString::from(tail)
    }
}

/// Prepends `path/` to `resolved`, returning true if `path` is absolute.
fn prepend_segment(resolved: &mut Vec<u16>, path: &[u16]) -> bool {
    if path.is_empty() {
        return false;
    }
    let mut next = Vec::with_capacity(path.len() + 1 + resolved.len());
    next.extend_from_slice(path);
    next.push(CHAR_FORWARD_SLASH);
    next.extend_from_slice(resolved);
    *resolved = next;
    units_is_absolute(path)
}

/// Returns the relative path from `from` to `to`, using the process working
/// directory for relative inputs.
#[must_use]
pub fn relative(from: impl Into<JsString>, to: impl Into<JsString>) -> JsString {
    relative_with(&SystemHost, from, to)
}

/// Returns the relative path from `from` to `to`.
///
/// Both are resolved first; identical locations give an empty string.
///
/// # Examples
///
/// ```
/// use hostrt::host::StaticHost;
/// use hostrt::path::posix;
///
/// let host = StaticHost::new("/srv");
/// assert_eq!(posix::relative_with(&host, "/var/lib", "/bin"), "../../bin");
/// assert_eq!(posix::relative_with(&host, "app", "/srv/app/log"), "log");
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
    let from = resolve_with(&host, [from]);
    let to = resolve_with(&host, [to]);
    if from == to {
        return JsString::new();
    }

    // Both are absolute; compare without the leading `/`.
    let to_units = to.code_units();
    let from = slice_units(from.code_units(), 1, from.length());
    let to = slice_units(to_units, 1, to_units.len());

    let length = from.len().min(to.len());
    let (i, mut last_common_sep) = common_prefix(from, to, CHAR_FORWARD_SLASH);

    if i == length {
        if to.len() > length {
            if to[i] == CHAR_FORWARD_SLASH {
                // `from` is the exact base path of `to`
                return JsString::from(&to[i + 1..]);
            }
            if i == 0 {
                // `from` is the root
                return JsString::from(&to[i..]);
            }
        } else if from.len() > length {
            if from[i] == CHAR_FORWARD_SLASH {
                // `to` is the exact base path of `from`
                last_common_sep = Some(i);
            } else if i == 0 {
                // `to` is the root
                last_common_sep = Some(0);
            }
        }
    }

    let first = last_common_sep.map_or(0, |sep| sep + 1);
    let mut out = parent_steps(&from[first..], CHAR_FORWARD_SLASH);

    // The remainder of `to` keeps its leading separator.
    let rest = match last_common_sep {
        Some(sep) => &to[sep..],
        None => to_units,
    };
    out.extend(rest.iter().copied());
    out
}

/// Returns the directory part of `path`.
///
/// # Examples
///
/// ```
/// use hostrt::path::posix;
///
/// assert_eq!(posix::dirname("/foo/bar/baz/asdf/quux"), "/foo/bar/baz/asdf");
/// assert_eq!(posix::dirname("//a"), "//");
/// assert_eq!(posix::dirname("file"), ".");
/// ```
#[must_use]
pub fn dirname(path: impl Into<JsString>) -> JsString {
    let path = path.into();
    let path = path.code_units();
    if path.is_empty() {
        return JsString::from(".");
    }

    let has_root = units_is_absolute(path);
    let mut end = None;
    let mut matched_slash = true;
    for i in (1..path.len()).rev() {
        if path[i] == CHAR_FORWARD_SLASH {
            if !matched_slash {
                end = Some(i);
                break;
            }
        } else {
            matched_slash = false;
        }
    }

    match end {
        None => JsString::from(if has_root { "/" } else { "." }),
        Some(1) if has_root => JsString::from("//"),
        Some(end) => JsString::from(&path[..end]),
    }
}

/// Returns the last segment of `path`, dropping `suffix` if it ends with it.
///
/// # Examples
///
/// ```
/// use hostrt::path::posix;
/// use hostrt::JsString;
///
/// assert_eq!(posix::basename("/foo/bar/baz/asdf/quux.html", None), "quux.html");
/// let ext = JsString::from(".html");
/// assert_eq!(posix::basename("/foo/bar/baz/asdf/quux.html", Some(&ext)), "quux");
/// ```
#[must_use]
pub fn basename(path: impl Into<JsString>, suffix: Option<&JsString>) -> JsString {
    let path = path.into();
    JsString::from(basename_from(
        path.code_units(),
        0,
        suffix.map(JsString::code_units),
        is_posix_separator,
    ))
}

/// Returns the extension of the last segment, from its last `.` on.
///
/// Dotfiles such as `.bashrc` have no extension.
#[must_use]
pub fn extname(path: impl Into<JsString>) -> JsString {
    let path = path.into();
    JsString::from(extname_from(path.code_units(), 0, is_posix_separator))
}

/// Splits `path` into root, directory, base name, name and extension.
#[must_use]
pub fn parse(path: impl Into<JsString>) -> ParsedPath {
    let path = path.into();
    let path = path.code_units();
    let mut parsed = ParsedPath::default();
    if path.is_empty() {
        return parsed;
    }

    let absolute = units_is_absolute(path);
    let stop = usize::from(absolute);
    if absolute {
        parsed.root = JsString::from("/");
    }

    let scan = TailScan::run(path, stop, 0, is_posix_separator);
    let start = if scan.start_part == 0 && absolute {
        1
    } else {
        scan.start_part
    };
    scan.fill_parsed(path, start, &mut parsed);

    if scan.start_part > 0 {
        parsed.dir = JsString::from(slice_units(path, 0, scan.start_part - 1));
    } else if absolute {
        parsed.dir = JsString::from("/");
    }
    parsed
}

/// Builds a path from its parts; the inverse of [`parse`].
#[must_use]
pub fn format(parsed: &ParsedPath) -> JsString {
    format_with(CHAR_FORWARD_SLASH, parsed)
}

/// Returns `path` unchanged; namespaced paths only exist on Win32.
#[must_use]
pub fn to_namespaced_path(path: impl Into<JsString>) -> JsString {
    path.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MockHostEnvironment, StaticHost};

    fn host() -> StaticHost {
        StaticHost::new("/home/user/project")
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/foo/bar"));
        assert!(is_absolute("/baz/.."));
        assert!(!is_absolute("qux/"));
        assert!(!is_absolute("."));
        assert!(!is_absolute(""));
    }

    #[test]
    fn test_normalize() {
        let cases = [
            ("/foo/bar//baz/asdf/quux/..", "/foo/bar/baz/asdf"),
            ("", "."),
            ("./", "./"),
            (".", "."),
            ("/", "/"),
            ("//", "/"),
            ("fixtures///b/../b/c.js", "fixtures/b/c.js"),
            ("/foo/../../../bar", "/bar"),
            ("a//b//../b", "a/b"),
            ("a//b//./c", "a/b/c"),
            ("a//b//.", "a/b"),
            ("/a/b/c/../../../x/y/z", "/x/y/z"),
            ("///..//./foo/.//bar", "/foo/bar"),
            ("bar/foo../../", "bar/"),
            ("bar/foo../..", "bar"),
            ("bar/foo../../baz", "bar/baz"),
            ("bar/foo../", "bar/foo../"),
            ("bar/foo..", "bar/foo.."),
            ("../foo../../../bar", "../../bar"),
            ("../.../.././.../../../bar", "../../bar"),
            ("../../../foo/../../../bar", "../../../../../bar"),
            ("../foobar/barfoo/foo/../../../bar/../../", "../../"),
            ("/../../..", "/"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize(input), expected, "normalize({input:?})");
        }
    }

    #[test]
    fn test_join() {
        let cases: Vec<(Vec<&str>, &str)> = vec![
            (vec!["/foo", "bar", "baz/asdf", "quux", ".."], "/foo/bar/baz/asdf"),
            (vec!["/foo", "bar", "baz/asdf", "quux", "..", "a", "bbb"], "/foo/bar/baz/asdf/a/bbb"),
            (vec![".", "x/b", "..", "/b/c.js"], "x/b/c.js"),
            (vec![], "."),
            (vec!["/.", "x/b", "..", "/b/c.js"], "/x/b/c.js"),
            (vec!["/foo", "../../../bar"], "/bar"),
            (vec!["foo", "../../../bar"], "../../bar"),
            (vec!["foo/", "../../../bar"], "../../bar"),
            (vec!["", ""], "."),
            (vec!["", "foo"], "foo"),
            (vec!["foo", "/bar"], "foo/bar"),
            (vec!["/", ".."], "/"),
            (vec![" ", "foo"], " /foo"),
            (vec!["./", ".."], ".."),
        ];
        for (parts, expected) in cases {
            assert_eq!(join(parts.clone()), expected, "join({parts:?})");
        }
    }

    #[test]
    fn test_resolve() {
        let host = host();
        assert_eq!(resolve_with(&host, ["/var/lib", "../", "file/"]), "/var/file");
        assert_eq!(resolve_with(&host, ["/var/lib", "/../", "file/"]), "/file");
        assert_eq!(resolve_with(&host, ["a/b/c/", "../../.."]), "/home/user/project");
        assert_eq!(resolve_with(&host, ["."]), "/home/user/project");
        assert_eq!(resolve_with(&host, ["/some/dir", ".", "/absolute/"]), "/absolute");
        assert_eq!(
            resolve_with(&host, ["/foo/tmp.3/", "../tmp.3/cycles/root.js"]),
            "/foo/tmp.3/cycles/root.js"
        );
        assert_eq!(resolve_with(&host, ["", ""]), "/home/user/project");
    }

    #[test]
    fn test_resolve_without_arguments_is_cwd() {
        let host = StaticHost::new("/tmp//work/./dir/");
        assert_eq!(resolve_with(&host, Vec::<JsString>::new()), "/tmp/work/dir");
    }

    #[test]
    fn test_resolve_with_relative_cwd() {
        let host = StaticHost::new("");
        assert_eq!(resolve_with(&host, ["a", "b"]), "a/b");
        assert_eq!(resolve_with(&host, Vec::<&str>::new()), ".");
    }

    #[test]
    fn test_relative() {
        let host = host();
        let cases = [
            ("/var/lib", "/var", ".."),
            ("/var/lib", "/bin", "../../bin"),
            ("/var/lib", "/var/lib", ""),
            ("/var/lib", "/var/apache", "../apache"),
            ("/var/", "/var/lib", "lib"),
            ("/", "/var/lib", "var/lib"),
            ("/foo/test", "/foo/test/bar/package.json", "bar/package.json"),
            ("/Users/a/web/b/test/mails", "/Users/a/web/b", "../.."),
            ("/foo/bar/baz-quux", "/foo/bar/baz", "../baz"),
            ("/foo/bar/baz", "/foo/bar/baz-quux", "../baz-quux"),
            ("/baz-quux", "/baz", "../baz"),
            ("/baz", "/baz-quux", "../baz-quux"),
            ("/page1/page2/foo", "/", "../../.."),
            ("/data/orandea/test/aaa", "/data/orandea/impl/bbb", "../../impl/bbb"),
        ];
        for (from, to, expected) in cases {
            assert_eq!(relative_with(&host, from, to), expected, "relative({from:?}, {to:?})");
        }
    }

    #[test]
    fn test_relative_uses_cwd_for_relative_inputs() {
        let host = host();
        assert_eq!(relative_with(&host, "src", "src/lib.rs"), "lib.rs");
        assert_eq!(relative_with(&host, "/home/user", "docs"), "project/docs");
        assert_eq!(relative_with(&host, ".", "/home/user/project"), "");
    }

    #[test]
    fn test_relative_reads_host_once() {
        let mut host = MockHostEnvironment::new();
        let mut calls = 0;
        host.expect_current_dir().times(1).returning(move || {
            calls += 1;
            JsString::from(if calls == 1 { "/one/a" } else { "/two/b" })
        });
        assert_eq!(relative_with(&host, "x", "y"), "../y");
    }

    #[test]
    fn test_relative_absolute_inputs_skip_host() {
        let mut host = MockHostEnvironment::new();
        host.expect_current_dir().never();
        assert_eq!(relative_with(&host, "/a/b", "/a/c"), "../c");
    }

    #[test]
    fn test_dirname() {
        let cases = [
            ("/a/b/", "/a"),
            ("/a/b", "/a"),
            ("/a", "/"),
            ("", "."),
            ("/", "/"),
            ("////", "/"),
            ("//a", "//"),
            ("foo", "."),
            ("foo/bar", "foo"),
        ];
        for (input, expected) in cases {
            assert_eq!(dirname(input), expected, "dirname({input:?})");
        }
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/dir/basename.ext", None), "basename.ext");
        assert_eq!(basename("basename.ext/", None), "basename.ext");
        assert_eq!(basename("basename.ext//", None), "basename.ext");
        assert_eq!(basename("", None), "");
        assert_eq!(basename("/", None), "");
        assert_eq!(basename("a\\b", None), "a\\b");
    }

    #[test]
    fn test_basename_with_suffix() {
        let s = |v: &str| JsString::from(v);
        assert_eq!(basename("aaa/bbb", Some(&s("bbb"))), "bbb");
        assert_eq!(basename("aaa/bbb", Some(&s("/bbb"))), "bbb");
        assert_eq!(basename("aaa/bbb", Some(&s("a/bbb"))), "bbb");
        assert_eq!(basename("aaa/bbb//", Some(&s("bbb"))), "bbb");
        assert_eq!(basename("aaa/bbb", Some(&s("bb"))), "b");
        assert_eq!(basename("aaa/bbb", Some(&s("b"))), "bb");
        assert_eq!(basename("/aaa/bbb", Some(&s("bbb"))), "bbb");
        assert_eq!(basename("/aaa/", Some(&s("aa"))), "a");
        assert_eq!(basename("file.js", Some(&s(".js"))), "file");
        assert_eq!(basename("file.js", Some(&s(""))), "file.js");
    }

    #[test]
    fn test_extname() {
        let cases = [
            ("index.html", ".html"),
            ("index.coffee.md", ".md"),
            ("index.", "."),
            ("index", ""),
            (".index", ""),
            (".index.md", ".md"),
            ("/path/to/file.ext", ".ext"),
            ("/path.to/file", ""),
            ("file.ext/", ".ext"),
            ("..", ""),
            ("...", "."),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(extname(input), expected, "extname({input:?})");
        }
    }

    #[test]
    fn test_parse() {
        let parsed = parse("/home/user/dir/file.txt");
        assert_eq!(parsed.root, "/");
        assert_eq!(parsed.dir, "/home/user/dir");
        assert_eq!(parsed.base, "file.txt");
        assert_eq!(parsed.ext, ".txt");
        assert_eq!(parsed.name, "file");

        assert_eq!(parse(""), ParsedPath::default());

        let root = parse("/");
        assert_eq!(root.root, "/");
        assert_eq!(root.dir, "/");
        assert!(root.base.is_empty());

        let dotfile = parse("x/.bashrc");
        assert_eq!(dotfile.dir, "x");
        assert_eq!(dotfile.name, ".bashrc");
        assert!(dotfile.ext.is_empty());

        let trailing = parse("a/b/");
        assert_eq!(trailing.dir, "a");
        assert_eq!(trailing.base, "b");

        let top = parse("/file");
        assert_eq!(top.dir, "/");
        assert_eq!(top.base, "file");
    }

    #[test]
    fn test_format() {
        let parsed = ParsedPath {
            root: JsString::from("/ignored"),
            dir: JsString::from("/home/user/dir"),
            base: JsString::from("file.txt"),
            ..ParsedPath::default()
        };
        assert_eq!(format(&parsed), "/home/user/dir/file.txt");

        let parsed = ParsedPath {
            root: JsString::from("/"),
            base: JsString::from("file.txt"),
            ext: JsString::from("ignored"),
            ..ParsedPath::default()
        };
        assert_eq!(format(&parsed), "/file.txt");

        let parsed = ParsedPath {
            root: JsString::from("/"),
            name: JsString::from("file"),
            ext: JsString::from(".txt"),
            ..ParsedPath::default()
        };
        assert_eq!(format(&parsed), "/file.txt");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for input in ["/a/b/c.txt", "a/b", "/x", "rel.tar.gz", "/"] {
            assert_eq!(format(&parse(input)), input, "format(parse({input:?}))");
        }
    }

    #[test]
    fn test_to_namespaced_path_is_identity() {
        assert_eq!(to_namespaced_path("/foo/bar"), "/foo/bar");
        assert_eq!(to_namespaced_path(""), "");
    }
}
