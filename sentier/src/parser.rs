//! Total string-to-structure path parsing.
//!
//! Parsing never fails: any input string yields a [`ParsedPath`] that
//! records the segments and structural flags recognized in it. Validating
//! the segments themselves happens later, when a path value is built from
//! the parse result (see [`crate::PathFactory::from_parsed`]).

use serde::{Deserialize, Serialize};

use crate::atom::Atom;
use crate::flavor::Flavor;

/// The structural breakdown of a raw path string.
///
/// This is plain parser output: segment strings plus the flags recognized
/// around them. The only guarantee is that no segment is empty; nothing
/// has been validated against a flavor's character rules yet.
///
/// # Examples
///
/// ```
/// use sentier::{parse, Flavor};
///
/// let parsed = parse("/usr/local/", Flavor::Unix);
/// assert!(parsed.is_absolute);
/// assert!(parsed.has_trailing_separator);
/// assert_eq!(parsed.atoms, vec!["usr", "local"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPath {
    /// Path segments in order; never contains empty strings.
    pub atoms: Vec<String>,
    /// Whether the input named a root (with a drive, for Windows input).
    pub is_absolute: bool,
    /// Whether the input was rooted but driveless Windows input (`\foo`).
    pub is_anchored: bool,
    /// Drive letter, when the input began with a `<letter>:` prefix.
    pub drive: Option<char>,
    /// Whether the input ended with a separator.
    pub has_trailing_separator: bool,
}

/// Parses a raw path string under a flavor's grammar.
///
/// Parsing is total: there is no invalid input at this level. Empty input
/// becomes the relative self path `.`, repeated separators collapse, and
/// a trailing separator on anything but a bare root sets the trailing
/// flag.
///
/// # Examples
///
/// ```
/// use sentier::{parse, Flavor};
///
/// let parsed = parse("", Flavor::Generic);
/// assert_eq!(parsed.atoms, vec!["."]);
/// assert!(!parsed.is_absolute);
///
/// let parsed = parse("C:\\Windows\\System32", Flavor::Windows);
/// assert_eq!(parsed.drive, Some('C'));
/// assert!(parsed.is_absolute);
/// assert_eq!(parsed.atoms, vec!["Windows", "System32"]);
/// ```
#[must_use]
pub fn parse(raw: &str, flavor: Flavor) -> ParsedPath {
    match flavor {
        Flavor::Generic | Flavor::Unix => parse_posix(raw),
        Flavor::Windows => parse_windows(raw),
    }
}

fn parse_posix(raw: &str) -> ParsedPath {
    if raw.is_empty() {
        return assemble(Vec::new(), false, false, None, false);
    }
    let mut segments: Vec<&str> = raw.split('/').collect();
    let mut is_absolute = false;
    if segments.len() > 1 && segments.first().is_some_and(|s| s.is_empty()) {
        is_absolute = true;
        segments.remove(0);
    }
    let mut has_trailing_separator = false;
    if segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
        has_trailing_separator = true;
        segments.pop();
    }
    let atoms = segments
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    assemble(atoms, is_absolute, false, None, has_trailing_separator)
}

fn parse_windows(raw: &str) -> ParsedPath {
    if raw.is_empty() {
        return assemble(Vec::new(), false, false, None, false);
    }
    let mut segments: Vec<String> = raw.split(['/', '\\']).map(str::to_owned).collect();
    let mut drive = None;
    if let Some(first) = segments.first_mut() {
        if let Some(letter) = drive_prefix(first) {
            drive = Some(letter);
            first.replace_range(..2, "");
        }
    }
    // `C:\foo` leaves an empty first segment after the drive is stripped,
    // exactly like `/foo` does. A rooted path with a drive is absolute; a
    // rooted path without one is merely anchored.
    let mut is_absolute = false;
    let mut is_anchored = false;
    if segments.first().is_some_and(String::is_empty) && (drive.is_some() || segments.len() > 1) {
        if drive.is_some() {
            is_absolute = true;
        } else {
            is_anchored = true;
        }
        segments.remove(0);
    }
    let mut has_trailing_separator = false;
    if segments.len() > 1 && segments.last().is_some_and(String::is_empty) {
        has_trailing_separator = true;
        segments.pop();
    }
    let atoms = segments.into_iter().filter(|s| !s.is_empty()).collect();
    assemble(atoms, is_absolute, is_anchored, drive, has_trailing_separator)
}

/// Recognizes a `<letter>:` prefix at the start of the first raw segment.
fn drive_prefix(segment: &str) -> Option<char> {
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => Some(letter),
        _ => None,
    }
}

fn assemble(
    mut atoms: Vec<String>,
    is_absolute: bool,
    is_anchored: bool,
    drive: Option<char>,
    mut has_trailing_separator: bool,
) -> ParsedPath {
    let rooted = is_absolute || is_anchored;
    // A bare root never carries a trailing separator, and a relative path
    // always has at least the self atom.
    if rooted && atoms.is_empty() {
        has_trailing_separator = false;
    }
    if !rooted && atoms.is_empty() {
        atoms.push(Atom::SELF.to_string());
    }
    ParsedPath {
        atoms,
        is_absolute,
        is_anchored,
        drive,
        has_trailing_separator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(parsed: &ParsedPath) -> Vec<&str> {
        parsed.atoms.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_empty_input_is_self_path() {
        for flavor in [Flavor::Generic, Flavor::Unix, Flavor::Windows] {
            let parsed = parse("", flavor);
            assert_eq!(atoms(&parsed), vec!["."]);
            assert!(!parsed.is_absolute);
            assert!(!parsed.is_anchored);
            assert!(!parsed.has_trailing_separator);
            assert_eq!(parsed.drive, None);
        }
    }

    #[test]
    fn test_bare_root() {
        let parsed = parse("/", Flavor::Unix);
        assert!(parsed.is_absolute);
        assert!(parsed.atoms.is_empty());
        assert!(!parsed.has_trailing_separator);
    }

    #[test]
    fn test_repeated_root_separators_collapse() {
        let parsed = parse("//", Flavor::Generic);
        assert!(parsed.is_absolute);
        assert!(parsed.atoms.is_empty());
        assert!(!parsed.has_trailing_separator);

        let parsed = parse("///foo", Flavor::Generic);
        assert!(parsed.is_absolute);
        assert_eq!(atoms(&parsed), vec!["foo"]);
    }

    #[test]
    fn test_absolute_with_atoms() {
        let parsed = parse("/path/to/file", Flavor::Generic);
        assert!(parsed.is_absolute);
        assert_eq!(atoms(&parsed), vec!["path", "to", "file"]);
        assert!(!parsed.has_trailing_separator);
    }

    #[test]
    fn test_relative_with_atoms() {
        let parsed = parse("a/b/c", Flavor::Unix);
        assert!(!parsed.is_absolute);
        assert_eq!(atoms(&parsed), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_separator_detected() {
        let parsed = parse("foo/", Flavor::Generic);
        assert!(!parsed.is_absolute);
        assert!(parsed.has_trailing_separator);
        assert_eq!(atoms(&parsed), vec!["foo"]);

        let parsed = parse("/a/b/", Flavor::Unix);
        assert!(parsed.is_absolute);
        assert!(parsed.has_trailing_separator);
        assert_eq!(atoms(&parsed), vec!["a", "b"]);
    }

    #[test]
    fn test_interior_empty_segments_dropped() {
        let parsed = parse("a//b///c", Flavor::Generic);
        assert_eq!(atoms(&parsed), vec!["a", "b", "c"]);
        assert!(!parsed.has_trailing_separator);
    }

    #[test]
    fn test_dot_segments_survive_parsing() {
        let parsed = parse("./foo/../bar", Flavor::Generic);
        assert_eq!(atoms(&parsed), vec![".", "foo", "..", "bar"]);
    }

    #[test]
    fn test_self_with_trailing_separator() {
        let parsed = parse("./", Flavor::Generic);
        assert_eq!(atoms(&parsed), vec!["."]);
        assert!(parsed.has_trailing_separator);
    }

    #[test]
    fn test_backslash_is_plain_text_for_posix() {
        let parsed = parse("a\\b", Flavor::Unix);
        assert_eq!(atoms(&parsed), vec!["a\\b"]);
    }

    #[test]
    fn test_windows_mixed_separators() {
        let parsed = parse("a\\b/c", Flavor::Windows);
        assert_eq!(atoms(&parsed), vec!["a", "b", "c"]);
        assert!(!parsed.is_absolute);
    }

    #[test]
    fn test_windows_bare_drive_is_absolute_root() {
        let parsed = parse("C:", Flavor::Windows);
        assert!(parsed.is_absolute);
        assert!(!parsed.is_anchored);
        assert_eq!(parsed.drive, Some('C'));
        assert!(parsed.atoms.is_empty());
    }

    #[test]
    fn test_windows_drive_rooted() {
        for raw in ["C:\\Users", "C:/Users"] {
            let parsed = parse(raw, Flavor::Windows);
            assert!(parsed.is_absolute, "{raw} should be absolute");
            assert_eq!(parsed.drive, Some('C'));
            assert_eq!(atoms(&parsed), vec!["Users"]);
        }
    }

    #[test]
    fn test_windows_drive_relative() {
        let parsed = parse("c:foo", Flavor::Windows);
        assert!(!parsed.is_absolute);
        assert!(!parsed.is_anchored);
        assert_eq!(parsed.drive, Some('c'));
        assert_eq!(atoms(&parsed), vec!["foo"]);
    }

    #[test]
    fn test_windows_drive_case_preserved() {
        assert_eq!(parse("c:\\x", Flavor::Windows).drive, Some('c'));
        assert_eq!(parse("D:\\x", Flavor::Windows).drive, Some('D'));
    }

    #[test]
    fn test_windows_anchored() {
        let parsed = parse("\\foo\\bar", Flavor::Windows);
        assert!(!parsed.is_absolute);
        assert!(parsed.is_anchored);
        assert_eq!(parsed.drive, None);
        assert_eq!(atoms(&parsed), vec!["foo", "bar"]);
    }

    #[test]
    fn test_windows_bare_anchor() {
        let parsed = parse("\\", Flavor::Windows);
        assert!(parsed.is_anchored);
        assert!(parsed.atoms.is_empty());
        assert!(!parsed.has_trailing_separator);
    }

    #[test]
    fn test_windows_drive_with_trailing_separator() {
        let parsed = parse("C:/foo/", Flavor::Windows);
        assert!(parsed.is_absolute);
        assert!(parsed.has_trailing_separator);
        assert_eq!(atoms(&parsed), vec!["foo"]);
    }

    #[test]
    fn test_non_letter_drive_prefix_is_an_atom() {
        // `1:foo` has no drive; the colon stays in the segment text.
        let parsed = parse("1:foo", Flavor::Windows);
        assert_eq!(parsed.drive, None);
        assert_eq!(atoms(&parsed), vec!["1:foo"]);
    }

    #[test]
    fn test_colon_drive_prefix_requires_position_zero() {
        let parsed = parse("foo/c:bar", Flavor::Windows);
        assert_eq!(parsed.drive, None);
        assert_eq!(atoms(&parsed), vec!["foo", "c:bar"]);
    }

    #[test]
    fn test_parsed_path_serde() {
        let parsed = parse("/a/b", Flavor::Generic);
        let serialized = serde_json::to_string(&parsed).unwrap();
        let deserialized: ParsedPath = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, parsed);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn raw_strategy() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9_.:/\\\\-]{0,30}"
        }

        proptest! {
            #[test]
            fn parse_is_total_and_consistent(raw in raw_strategy()) {
                for flavor in [Flavor::Generic, Flavor::Unix, Flavor::Windows] {
                    let parsed = parse(&raw, flavor);
                    prop_assert!(parsed.atoms.iter().all(|a| !a.is_empty()));
                    prop_assert!(!(parsed.is_absolute && parsed.is_anchored));
                    if parsed.is_anchored {
                        prop_assert!(parsed.drive.is_none());
                    }
                    if flavor != Flavor::Windows {
                        prop_assert!(parsed.drive.is_none());
                        prop_assert!(!parsed.is_anchored);
                    }
                }
            }

            #[test]
            fn relative_paths_always_have_atoms(raw in raw_strategy()) {
                for flavor in [Flavor::Generic, Flavor::Unix, Flavor::Windows] {
                    let parsed = parse(&raw, flavor);
                    if !parsed.is_absolute && !parsed.is_anchored {
                        prop_assert!(!parsed.atoms.is_empty());
                    }
                }
            }

            #[test]
            fn bare_roots_never_carry_trailing_separators(raw in raw_strategy()) {
                for flavor in [Flavor::Generic, Flavor::Unix, Flavor::Windows] {
                    let parsed = parse(&raw, flavor);
                    if parsed.atoms.is_empty() {
                        prop_assert!(!parsed.has_trailing_separator);
                    }
                }
            }
        }
    }
}
