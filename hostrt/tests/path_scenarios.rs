//! Integration tests for the path engines through the public API.
//!
//! Hosts are always [`StaticHost`] values so results never depend on the
//! machine running the tests.

use std::cell::Cell;

use hostrt::path::{posix, win32, ParsedPath, PathFlavor};
use hostrt::{HostEnvironment, JsString, StaticHost};

/// A host whose working directory changes on every read.
struct MovingHost {
    dirs: [&'static str; 2],
    reads: Cell<usize>,
}

impl MovingHost {
    fn new(dirs: [&'static str; 2]) -> Self {
        Self {
            dirs,
            reads: Cell::new(0),
        }
    }
}

impl HostEnvironment for MovingHost {
    fn current_dir(&self) -> JsString {
        let reads = self.reads.get();
        self.reads.set(reads + 1);
        JsString::from(self.dirs[reads.min(1)])
    }

    fn env_var(&self, _name: &JsString) -> Option<JsString> {
        None
    }
}

// ============================================================================
// Documented Scenarios
// ============================================================================

#[test]
fn test_posix_normalize_collapses_parent() {
    assert_eq!(
        posix::normalize("/foo/bar//baz/asdf/quux/.."),
        "/foo/bar/baz/asdf"
    );
}

#[test]
fn test_win32_normalize_mixed_separators() {
    assert_eq!(
        win32::normalize("C:////temp\\\\/\\/\\/foo/bar"),
        "C:\\temp\\foo\\bar"
    );
}

#[test]
fn test_posix_relative_siblings() {
    let host = StaticHost::new("/");
    assert_eq!(
        posix::relative_with(&host, "/data/orandea/test/aaa", "/data/orandea/impl/bbb"),
        "../../impl/bbb"
    );
}

#[test]
fn test_posix_join_segments() {
    assert_eq!(
        posix::join(["/foo", "bar", "baz/asdf", "quux", "..", "a", "bbb"]),
        "/foo/bar/baz/asdf/a/bbb"
    );
}

#[test]
fn test_extname_last_dot_only() {
    assert_eq!(posix::extname("index.coffee.md"), ".md");
    assert_eq!(posix::extname(".index"), "");
}

#[test]
fn test_astral_code_point_is_a_surrogate_pair() {
    let s = JsString::from_code_point(&[0x2F804]).unwrap();
    assert_eq!(s.code_units(), &[0xD87E_u16, 0xDC04_u16]);
    assert_eq!(s.length(), 2);
}

// ============================================================================
// Cross-flavor Behavior
// ============================================================================

#[test]
fn test_shared_join_table_differs_only_in_separator() {
    let cases: &[(&[&str], &str)] = &[
        (&[".", "x/b", "..", "/b/c.js"], "x/b/c.js"),
        (&[], "."),
        (&["/.", "x/b", "..", "/b/c.js"], "/x/b/c.js"),
        (&["/foo", "../../../bar"], "/bar"),
        (&["foo", "../../../bar"], "../../bar"),
        (&["foo/", "../../../bar"], "../../bar"),
        (&["", ""], "."),
        (&["", "foo"], "foo"),
        (&["foo", "/bar"], "foo/bar"),
        (&["/", ".."], "/"),
    ];
    for (args, expected) in cases {
        assert_eq!(
            PathFlavor::Posix.join(args.iter().copied()),
            *expected,
            "posix {args:?}"
        );
        let win_expected = expected.replace('/', "\\");
        assert_eq!(
            PathFlavor::Win32.join(args.iter().copied()),
            win_expected.as_str(),
            "win32 {args:?}"
        );
    }
}

#[test]
fn test_backslash_is_an_ordinary_character_on_posix() {
    assert_eq!(posix::normalize("foo\\..\\bar"), "foo\\..\\bar");
    assert_eq!(win32::normalize("foo\\..\\bar"), "bar");
    assert_eq!(posix::basename("C:\\dir\\file.txt", None), "C:\\dir\\file.txt");
    assert_eq!(win32::basename("C:\\dir\\file.txt", None), "file.txt");
    assert!(!posix::is_absolute("C:\\dir"));
    assert!(win32::is_absolute("C:\\dir"));
}

#[test]
fn test_forward_slash_is_a_separator_everywhere() {
    for flavor in [PathFlavor::Posix, PathFlavor::Win32] {
        assert!(flavor.is_absolute("/foo"), "{flavor:?}");
        assert_eq!(flavor.basename("/a/b.txt", None), "b.txt", "{flavor:?}");
        assert_eq!(flavor.extname("/a/b.txt"), ".txt", "{flavor:?}");
    }
}

#[test]
fn test_extname_shared_table() {
    let cases = [
        ("", ""),
        ("/path/to/file", ""),
        ("/path/to/file.ext", ".ext"),
        ("/path.to/file.ext", ".ext"),
        ("/path.to/file", ""),
        ("/path.to/.file", ""),
        ("/path.to/.file.ext", ".ext"),
        ("/path/to/f.ext", ".ext"),
        ("/path/to/..ext", ".ext"),
        ("/path/to/..", ""),
        ("file", ""),
        ("file.ext", ".ext"),
        (".file", ""),
        (".file.ext", ".ext"),
        ("..", ""),
        ("..file.ext", ".ext"),
        ("file.ext.ext", ".ext"),
        ("file.", "."),
        (".", ""),
        ("./", ""),
        (".file.ext/", ".ext"),
        ("file.ext//", ".ext"),
    ];
    for (path, expected) in cases {
        assert_eq!(posix::extname(path), expected, "posix {path:?}");
        assert_eq!(win32::extname(path), expected, "win32 {path:?}");
    }
    assert_eq!(posix::extname("file.\\"), ".\\");
    assert_eq!(win32::extname("file.\\"), ".");
}

#[test]
fn test_native_dispatch_matches_flavor() {
    let native = PathFlavor::native();
    for path in ["/a/b/../c", "C:\\x\\..\\y", "rel//dir/", ""] {
        assert_eq!(hostrt::path::normalize(path), native.normalize(path));
        assert_eq!(hostrt::path::dirname(path), native.dirname(path));
        assert_eq!(hostrt::path::extname(path), native.extname(path));
        assert_eq!(hostrt::path::is_absolute(path), native.is_absolute(path));
        assert_eq!(hostrt::path::parse(path), native.parse(path));
    }
    assert_eq!(hostrt::path::SEPARATOR, native.separator());
    assert_eq!(hostrt::path::DELIMITER, native.delimiter());
}

#[test]
fn test_flavor_from_string() {
    assert_eq!(PathFlavor::from_string("posix").unwrap(), PathFlavor::Posix);
    assert_eq!(PathFlavor::from_string("win32").unwrap(), PathFlavor::Win32);
    assert!(PathFlavor::from_string("vms").is_err());
}

// ============================================================================
// Host-driven Operations
// ============================================================================

#[test]
fn test_resolve_without_arguments_is_cwd() {
    let posix_host = StaticHost::new("/srv/app");
    assert_eq!(
        PathFlavor::Posix.resolve_with(&posix_host, Vec::<&str>::new()),
        "/srv/app"
    );

    let win_host = StaticHost::new("C:\\srv\\app");
    assert_eq!(
        PathFlavor::Win32.resolve_with(&win_host, Vec::<&str>::new()),
        "C:\\srv\\app"
    );
}

#[test]
fn test_resolve_result_is_absolute_and_normalized() {
    let host = StaticHost::new("/home/user/project");
    let cases: [&[&str]; 4] = [&["a", "b/../c"], &["../x"], &["/abs", "./y//z/"], &["."]];
    for args in cases {
        let resolved = PathFlavor::Posix.resolve_with(&host, args.iter().copied());
        assert!(posix::is_absolute(resolved.clone()), "{args:?}");
        assert_eq!(posix::normalize(resolved.clone()), resolved, "{args:?}");
    }
}

#[test]
fn test_relative_to_self_is_empty() {
    let posix_host = StaticHost::new("/home/user");
    assert_eq!(PathFlavor::Posix.relative_with(&posix_host, "docs", "./docs/"), "");

    let win_host = StaticHost::new("C:\\Users\\ada");
    assert_eq!(
        PathFlavor::Win32.relative_with(&win_host, "C:\\Users\\ADA", "c:/users/ada"),
        ""
    );
}

#[test]
fn test_relative_then_resolve_round_trip() {
    let host = StaticHost::new("/");
    let pairs = [
        ("/var/lib", "/var/apache"),
        ("/a/b/c", "/a"),
        ("/", "/usr/local/bin"),
        ("/x/y", "/x/y/z/w"),
    ];
    for (from, to) in pairs {
        let rel = PathFlavor::Posix.relative_with(&host, from, to);
        assert_eq!(
            PathFlavor::Posix.resolve_with(&host, [JsString::from(from), rel]),
            to,
            "{from:?} -> {to:?}"
        );
    }
}

#[test]
fn test_win32_resolve_reads_drive_working_directory() {
    let host = StaticHost::new("C:\\Users\\ada").with_var("=D:", "D:\\games\\saves");
    assert_eq!(
        PathFlavor::Win32.resolve_with(&host, ["d:slot1"]),
        "d:\\games\\saves\\slot1"
    );
    assert_eq!(PathFlavor::Win32.resolve_with(&host, ["\\rooted"]), "C:\\rooted");
}

#[test]
fn test_relative_sees_one_working_directory() {
    let host = MovingHost::new(["/one/a", "/two/b"]);
    assert_eq!(PathFlavor::Posix.relative_with(&host, "x", "y"), "../y");
    assert_eq!(host.reads.get(), 1);

    let host = MovingHost::new(["C:\\one\\a", "C:\\two\\b"]);
    assert_eq!(PathFlavor::Win32.relative_with(&host, "x", "y"), "..\\y");
    assert_eq!(host.reads.get(), 1);
}

#[test]
fn test_win32_resolve_unknown_drive_uses_root() {
    let host = StaticHost::new("C:\\Users\\ada");
    assert_eq!(PathFlavor::Win32.resolve_with(&host, ["E:notes"]), "E:\\notes");
}

#[test]
fn test_win32_resolve_unc_share() {
    let host = StaticHost::new("C:\\Users\\ada");
    assert_eq!(
        PathFlavor::Win32.resolve_with(&host, ["//server/share", "..", "relative\\"]),
        "\\\\server\\share\\relative"
    );
}

#[test]
fn test_win32_relative_across_drives_is_absolute_target() {
    let host = StaticHost::new("C:\\");
    assert_eq!(
        PathFlavor::Win32.relative_with(&host, "c:/blah\\blah", "d:/games"),
        "d:\\games"
    );
}

#[test]
fn test_to_namespaced_path() {
    let host = StaticHost::new("C:\\Users\\ada");
    assert_eq!(
        PathFlavor::Win32.to_namespaced_path_with(&host, "relative"),
        "\\\\?\\C:\\Users\\ada\\relative"
    );
    assert_eq!(
        PathFlavor::Win32.to_namespaced_path_with(&host, "\\\\server\\share"),
        "\\\\?\\UNC\\server\\share\\"
    );
    assert_eq!(
        PathFlavor::Posix.to_namespaced_path_with(&host, "relative"),
        "relative"
    );
}

// ============================================================================
// parse / format
// ============================================================================

#[test]
fn test_parse_fields() {
    let parsed = PathFlavor::Posix.parse("/home/user/a dir/another File.zip");
    assert_eq!(parsed.root, "/");
    assert_eq!(parsed.dir, "/home/user/a dir");
    assert_eq!(parsed.base, "another File.zip");
    assert_eq!(parsed.ext, ".zip");
    assert_eq!(parsed.name, "another File");

    let parsed = PathFlavor::Win32.parse("C:\\path\\dir\\index.html");
    assert_eq!(parsed.root, "C:\\");
    assert_eq!(parsed.dir, "C:\\path\\dir");
    assert_eq!(parsed.base, "index.html");
    assert_eq!(parsed.ext, ".html");
    assert_eq!(parsed.name, "index");
}

#[test]
fn test_format_round_trips_parse() {
    for path in ["/home/user/dir/file.txt", "user/dir/file.txt", "file", "/"] {
        assert_eq!(posix::format(&posix::parse(path)), path);
    }
    for path in ["C:\\path\\dir\\index.html", "\\\\srv\\share\\x", "a\\b"] {
        assert_eq!(win32::format(&win32::parse(path)), path);
    }
}

#[test]
fn test_format_prefers_dir_and_base() {
    let parts = ParsedPath {
        root: "/ignored".into(),
        dir: "/dir".into(),
        base: "base.txt".into(),
        ext: ".ignored".into(),
        name: "ignored".into(),
    };
    assert_eq!(posix::format(&parts), "/dir/base.txt");
    assert_eq!(win32::format(&parts), "/dir\\base.txt");
}

#[test]
fn test_format_name_and_ext() {
    let parts = ParsedPath {
        root: "C:\\".into(),
        name: "x".into(),
        ext: ".y".into(),
        ..ParsedPath::default()
    };
    assert_eq!(win32::format(&parts), "C:\\x.y");
}
