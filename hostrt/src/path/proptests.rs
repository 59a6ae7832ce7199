//! Property-based tests for both path engines.

use super::{posix, win32, PathFlavor};
use crate::host::StaticHost;
use proptest::prelude::*;

// Segments mixing names, dots and empty runs
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn posix_path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(segment_strategy(), 0..8)).prop_map(|(absolute, parts)| {
        let body = parts.join("/");
        if absolute {
            format!("/{body}")
        } else {
            body
        }
    })
}

fn win32_path_strategy() -> impl Strategy<Value = String> {
    let root = prop_oneof![
        Just(String::new()),
        Just("\\".to_string()),
        Just("C:".to_string()),
        Just("C:\\".to_string()),
        Just("d:/".to_string()),
        Just("\\\\server\\share\\".to_string()),
    ];
    let separator = prop_oneof![Just("\\"), Just("/")];
    (root, prop::collection::vec(segment_strategy(), 0..8), separator)
        .prop_map(|(root, parts, sep)| format!("{root}{}", parts.join(sep)))
}

fn absolute_posix_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,6}", 0..6).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn absolute_win32_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z]{1,6}", 0..6).prop_map(|parts| format!("C:\\{}", parts.join("\\")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn posix_normalize_idempotent(path in posix_path_strategy()) {
        let once = posix::normalize(path.as_str());
        prop_assert_eq!(posix::normalize(&once), once);
    }

    #[test]
    fn win32_normalize_idempotent(path in win32_path_strategy()) {
        let once = win32::normalize(path.as_str());
        prop_assert_eq!(win32::normalize(&once), once);
    }

    // Absolute inputs never keep a `..` segment after normalization
    #[test]
    fn posix_normalize_absolute_has_no_parent_refs(path in posix_path_strategy()) {
        let normalized = posix::normalize(format!("/{path}"));
        prop_assert!(!normalized.split("/", None).iter().any(|part| *part == ".."));
    }

    // join(a, b) == normalize(a + "/" + b) for non-empty parts
    #[test]
    fn posix_join_is_normalized_concat(a in "[a-z./]{1,12}", b in "[a-z./]{1,12}") {
        let joined = posix::join([a.as_str(), b.as_str()]);
        prop_assert_eq!(joined, posix::normalize(format!("{a}/{b}")));
    }

    // resolve(from, relative(from, to)) == resolve(to)
    #[test]
    fn posix_relative_round_trip(from in absolute_posix_strategy(), to in absolute_posix_strategy()) {
        let host = StaticHost::new("/cwd");
        let rel = posix::relative_with(&host, from.as_str(), to.as_str());
        prop_assert_eq!(
            posix::resolve_with(&host, [from.as_str().into(), rel]),
            posix::resolve_with(&host, [to.as_str()])
        );
    }

    #[test]
    fn win32_relative_round_trip(from in absolute_win32_strategy(), to in absolute_win32_strategy()) {
        let host = StaticHost::new("C:\\cwd");
        let rel = win32::relative_with(&host, from.as_str(), to.as_str());
        let back = win32::resolve_with(&host, [from.as_str().into(), rel]);
        let expected = win32::resolve_with(&host, [to.as_str()]);
        prop_assert_eq!(back.to_lower_case(), expected.to_lower_case());
    }

    // relative(x, x) is always empty
    #[test]
    fn relative_to_self_is_empty(path in posix_path_strategy(), flavor in prop_oneof![Just(PathFlavor::Posix), Just(PathFlavor::Win32)]) {
        let host = StaticHost::new(match flavor {
            PathFlavor::Posix => "/cwd",
            PathFlavor::Win32 => "C:\\cwd",
        });
        prop_assert!(flavor.relative_with(&host, path.as_str(), path.as_str()).is_empty());
    }

    // resolve always yields an absolute path when the cwd is absolute
    #[test]
    fn resolve_is_absolute(path in posix_path_strategy(), win in win32_path_strategy()) {
        let posix_host = StaticHost::new("/cwd");
        let win_host = StaticHost::new("C:\\cwd");
        prop_assert!(posix::is_absolute(posix::resolve_with(&posix_host, [path.as_str()])));
        prop_assert!(win32::is_absolute(win32::resolve_with(&win_host, [win.as_str()])));
    }

    // resolve with no arguments is the working directory itself
    #[test]
    fn resolve_empty_is_cwd(cwd in absolute_posix_strategy()) {
        let host = StaticHost::new(cwd.as_str());
        let no_args: [&str; 0] = [];
        prop_assert_eq!(posix::resolve_with(&host, no_args), posix::normalize(cwd.as_str()));
    }

    // base == name + ext for every parse result
    #[test]
    fn parse_base_is_name_plus_ext(path in win32_path_strategy()) {
        for flavor in [PathFlavor::Posix, PathFlavor::Win32] {
            let parsed = flavor.parse(path.as_str());
            prop_assert_eq!(parsed.base.clone(), parsed.name.clone() + &parsed.ext);
        }
        let parsed = posix::parse(path.as_str());
        prop_assert_eq!(posix::basename(path.as_str(), None), parsed.base);
    }

    // format(parse(p)) names the same location as p
    #[test]
    fn posix_format_parse_consistent(path in absolute_posix_strategy()) {
        let formatted = posix::format(&posix::parse(path.as_str()));
        prop_assert_eq!(posix::normalize(formatted), posix::normalize(path.as_str()));
    }
}
