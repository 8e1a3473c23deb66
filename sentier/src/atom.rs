//! Atoms and drive specifiers, the validated building blocks of paths.
//!
//! An [`Atom`] is a single path segment; a [`Drive`] is the one-letter
//! drive specifier used by Windows-flavored paths. Both are validated at
//! construction, so a path value can never hold a malformed segment.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flavor::Flavor;

/// A single validated path segment.
///
/// Atoms are non-empty, contain no separator for their flavor, and contain
/// no character the flavor forbids. Two texts are reserved: [`Atom::SELF`]
/// (`.`) and [`Atom::PARENT`] (`..`), which normalization treats specially.
///
/// # Examples
///
/// ```
/// use sentier::{Atom, Flavor};
///
/// let atom = Atom::new("src", Flavor::Unix)?;
/// assert_eq!(atom.as_str(), "src");
/// assert!(atom.is_real());
///
/// assert!(Atom::new("", Flavor::Unix).is_err());
/// assert!(Atom::new("a/b", Flavor::Unix).is_err());
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atom(String);

impl Atom {
    /// Text of the reserved self atom.
    pub const SELF: &'static str = ".";

    /// Text of the reserved parent atom.
    pub const PARENT: &'static str = "..";

    /// Creates a validated atom for the given flavor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAtom`], [`Error::AtomContainsSeparator`], or
    /// [`Error::ForbiddenCharacter`] when the text is not a legal segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{Atom, Error, Flavor};
    ///
    /// assert!(Atom::new("notes.txt", Flavor::Windows).is_ok());
    /// assert_eq!(
    ///     Atom::new("a?b", Flavor::Windows),
    ///     Err(Error::ForbiddenCharacter {
    ///         atom: "a?b".to_string(),
    ///         character: '?',
    ///     })
    /// );
    /// ```
    pub fn new(text: impl Into<String>, flavor: Flavor) -> Result<Self> {
        Self::with_forbidden(text, flavor, &[])
    }

    /// Creates a validated atom, rejecting additional caller-supplied
    /// forbidden characters on top of the flavor's own rules.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Atom::new`], plus
    /// [`Error::ForbiddenCharacter`] for any character in `forbidden`.
    pub fn with_forbidden(
        text: impl Into<String>,
        flavor: Flavor,
        forbidden: &[char],
    ) -> Result<Self> {
        let text = text.into();
        validate(&text, flavor, forbidden)?;
        Ok(Self(text))
    }

    /// The reserved self atom, `.`.
    #[must_use]
    pub fn self_atom() -> Self {
        Self(Self::SELF.to_string())
    }

    /// The reserved parent atom, `..`.
    #[must_use]
    pub fn parent_atom() -> Self {
        Self(Self::PARENT.to_string())
    }

    /// Returns the atom text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the reserved self atom `.`.
    #[must_use]
    pub fn is_self(&self) -> bool {
        self.0 == Self::SELF
    }

    /// Returns `true` if this is the reserved parent atom `..`.
    #[must_use]
    pub fn is_parent(&self) -> bool {
        self.0 == Self::PARENT
    }

    /// Returns `true` for ordinary segments, neither `.` nor `..`.
    #[must_use]
    pub fn is_real(&self) -> bool {
        !self.is_self() && !self.is_parent()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates raw segment text against a flavor and an extra forbidden set.
pub(crate) fn validate(text: &str, flavor: Flavor, forbidden: &[char]) -> Result<()> {
    if text.is_empty() {
        return Err(Error::EmptyAtom);
    }
    if text.chars().any(|c| flavor.is_separator(c)) {
        return Err(Error::AtomContainsSeparator {
            atom: text.to_string(),
        });
    }
    if let Some(character) = text
        .chars()
        .find(|c| flavor.is_forbidden(*c) || forbidden.contains(c))
    {
        return Err(Error::ForbiddenCharacter {
            atom: text.to_string(),
            character,
        });
    }
    Ok(())
}

/// A Windows drive specifier, one ASCII letter.
///
/// Drives compare case-insensitively: `c` and `C` name the same drive.
/// The letter is stored as supplied; [`Drive::canonical`] uppercases it,
/// which is what normalization renders.
///
/// # Examples
///
/// ```
/// use sentier::Drive;
///
/// let lower = Drive::new('c')?;
/// let upper = Drive::new('C')?;
/// assert_eq!(lower, upper);
/// assert_eq!(lower.canonical().letter(), 'C');
/// assert!(Drive::new('7').is_err());
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drive(char);

impl Drive {
    /// Creates a drive from a single ASCII letter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDriveSpecifier`] when `letter` is not an
    /// ASCII letter.
    pub fn new(letter: char) -> Result<Self> {
        if letter.is_ascii_alphabetic() {
            Ok(Self(letter))
        } else {
            Err(Error::InvalidDriveSpecifier {
                value: letter.to_string(),
            })
        }
    }

    /// Returns the drive letter as supplied.
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }

    /// Returns the drive with its letter uppercased.
    #[must_use]
    pub const fn canonical(self) -> Self {
        Self(self.0.to_ascii_uppercase())
    }

    /// Case-insensitive comparison with another drive.
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialEq for Drive {
    fn eq(&self, other: &Self) -> bool {
        self.matches(*other)
    }
}

impl Eq for Drive {}

impl Hash for Drive {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_uppercase().hash(state);
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Drive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(Error::InvalidDriveSpecifier {
                value: s.to_string(),
            }),
        }
    }
}
