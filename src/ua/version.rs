//! Helpers to cut version strings into their components.
//!
//! Components stay strings: `02` is not `2`, and `0b` is a valid minor.

use super::tables::{LEADING_DECIMAL, MAJOR_MINOR};

/// First `major.minor` pair found anywhere in `version`.
pub(super) fn major_minor(version: &str) -> Option<(String, String)> {
    let caps = MAJOR_MINOR.captures(version)?;
    let major = caps.get(1)?.as_str().to_owned();
    let minor = caps.get(2)?.as_str().to_owned();
    Some((major, minor))
}

/// Split `version` on `.`, ignoring trailing empty components,
/// and return the first two components.
pub(super) fn dotted_major_minor(version: &str) -> (Option<String>, Option<String>) {
    let mut parts: Vec<&str> = version.split('.').collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    let mut parts = parts.into_iter().map(ToOwned::to_owned);
    (parts.next(), parts.next())
}

/// The first `n` characters of `s` (or all of `s` when shorter).
pub(super) fn prefix_chars(s: &str, n: usize) -> &str {
    s.char_indices()
        .nth(n)
        .and_then(|(idx, _)| s.get(..idx))
        .unwrap_or(s)
}

/// The number `s` starts with, `0.0` if it does not start with one.
pub(super) fn leading_decimal(s: &str) -> f64 {
    LEADING_DECIMAL
        .find(s)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(major: &str, minor: &str) -> Option<(String, String)> {
        Some((major.to_owned(), minor.to_owned()))
    }

    #[test]
    fn test_major_minor() {
        for (version, expected) in [
            ("1.5.0.1", pair("1", "5")),
            ("6.0.472.63", pair("6", "0")),
            ("9.80", pair("9", "80")),
            ("10.02", pair("10", "02")),
            ("r1.9b", pair("1", "9")),
            ("4", None),
            ("", None),
            ("a.b", None),
        ] {
            assert_eq!(major_minor(version), expected, "version: {version}");
        }
    }

    #[test]
    fn test_dotted_major_minor() {
        for (version, major, minor) in [
            ("6.0", Some("6"), Some("0")),
            ("7.0b", Some("7"), Some("0b")),
            ("5.5.1", Some("5"), Some("5")),
            ("8", Some("8"), None),
            ("8.", Some("8"), None),
            (".5", Some(""), Some("5")),
            ("", None, None),
        ] {
            let (got_major, got_minor) = dotted_major_minor(version);
            assert_eq!(got_major.as_deref(), major, "version: {version}");
            assert_eq!(got_minor.as_deref(), minor, "version: {version}");
        }
    }

    #[test]
    fn test_prefix_chars() {
        assert_eq!(prefix_chars("417.9.2", 3), "417");
        assert_eq!(prefix_chars("85", 3), "85");
        assert_eq!(prefix_chars("", 3), "");
        assert_eq!(prefix_chars("äöü€", 2), "äö");
        assert_eq!(prefix_chars("abc", 0), "");
    }

    #[test]
    fn test_leading_decimal() {
        for (s, expected) in [
            ("417", 417.0),
            ("85.", 85.0),
            ("4.1", 4.1),
            ("653", 653.0),
            ("x12", 0.0),
            ("", 0.0),
        ] {
            assert!((leading_decimal(s) - expected).abs() < f64::EPSILON, "s: {s}");
        }
    }
}
