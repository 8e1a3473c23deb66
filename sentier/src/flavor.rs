//! Path flavors and their separator and character rules.
//!
//! A flavor selects which characters act as separators during parsing,
//! which characters may not appear inside an atom, and whether the
//! platform-specific features (drive specifiers, anchored relative paths)
//! are available.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The platform rule set a path follows.
///
/// `Generic` and `Unix` share one grammar; they differ only in how eagerly
/// `parent` keeps relative paths canonical. `Windows` splits on both `/`
/// and `\`, forbids a set of characters inside atoms, and adds drive and
/// anchoring semantics.
///
/// # Examples
///
/// ```
/// use sentier::Flavor;
///
/// assert!(Flavor::Windows.is_separator('\\'));
/// assert!(!Flavor::Unix.is_separator('\\'));
/// assert!(Flavor::Windows.is_forbidden('?'));
/// assert!(!Flavor::Generic.is_forbidden('?'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Portable slash-separated paths with no forbidden characters.
    Generic,
    /// Unix paths; same grammar as `Generic`, canonical `parent` results.
    Unix,
    /// Windows paths: drive specifiers, anchored relatives, forbidden set.
    Windows,
}

impl Flavor {
    /// The separator used when rendering a path of any flavor.
    pub const RENDER_SEPARATOR: char = '/';

    /// Returns `true` if `character` splits atoms when parsing this flavor.
    #[must_use]
    pub fn is_separator(self, character: char) -> bool {
        match self {
            Self::Generic | Self::Unix => character == '/',
            Self::Windows => character == '/' || character == '\\',
        }
    }

    /// Returns `true` if `character` may not appear inside an atom.
    ///
    /// Only the Windows flavor forbids characters: `<`, `>`, `:`, `"`,
    /// `|`, `?`, `*`, and ASCII control characters.
    #[must_use]
    pub fn is_forbidden(self, character: char) -> bool {
        match self {
            Self::Generic | Self::Unix => false,
            Self::Windows => {
                matches!(character, '<' | '>' | ':' | '"' | '|' | '?' | '*')
                    || character.is_control()
            }
        }
    }

    /// Returns `true` for the Windows flavor.
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// The flavor matching the compilation target.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::Flavor;
    ///
    /// let flavor = Flavor::platform();
    /// assert!(flavor == Flavor::Unix || flavor == Flavor::Windows);
    /// ```
    #[must_use]
    pub const fn platform() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Parses a flavor name.
    ///
    /// Recognizes `generic`, `unix`, and `windows`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not a known flavor name.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::Flavor;
    ///
    /// assert_eq!(Flavor::parse("unix").unwrap(), Flavor::Unix);
    /// assert_eq!(Flavor::parse("WINDOWS").unwrap(), Flavor::Windows);
    /// assert!(Flavor::parse("vms").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "unix" => Ok(Self::Unix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!(
                "invalid flavor: {value} (expected generic, unix, or windows)"
            )),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
