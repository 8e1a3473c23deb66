//! Error types for the sentier library.
//!
//! This module provides the error type shared by atom validation, path
//! construction, and the path algebra, using `thiserror` for ergonomic
//! error handling.

use thiserror::Error;

use crate::atom::Drive;

/// Result type alias for operations that may fail with a sentier error.
///
/// # Examples
///
/// ```
/// use sentier::Result;
///
/// fn level_count() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sentier library.
///
/// Every variant describes one rejected input or one impossible request.
/// Nothing here is transient: retrying the same call with the same
/// arguments always produces the same error, so errors are `Clone` and
/// comparable for equality.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An atom was the empty string.
    #[error("empty atom")]
    EmptyAtom,

    /// An atom contained a path separator character.
    #[error("atom '{atom}' contains a path separator")]
    AtomContainsSeparator {
        /// The offending atom text.
        atom: String,
    },

    /// An atom contained a character its flavor forbids.
    #[error("atom '{atom}' contains forbidden character {character:?}")]
    ForbiddenCharacter {
        /// The offending atom text.
        atom: String,
        /// The first forbidden character found.
        character: char,
    },

    /// An operation required at least one atom but found none.
    #[error("path has no atoms")]
    EmptyPath,

    /// An index-based atom lookup fell outside the valid range.
    #[error("no atom at index {index}")]
    UndefinedAtom {
        /// The requested index; negative values count from the end.
        index: isize,
    },

    /// Attempted to mark an atomless root path as ending in a separator.
    #[error("the root path cannot carry a trailing separator")]
    RootTrailingSeparator,

    /// A supplied drive specifier was not a single ASCII letter.
    #[error("invalid drive specifier '{value}': expected a single ASCII letter")]
    InvalidDriveSpecifier {
        /// The rejected drive text.
        value: String,
    },

    /// Two drive specifiers that were required to match did not.
    #[error("drive '{left}' does not match drive '{right}'")]
    DriveMismatch {
        /// The drive already attached to the path.
        left: Drive,
        /// The drive supplied by the caller.
        right: Drive,
    },

    /// A structurally impossible combination of path features was requested.
    #[error("invalid path state: {reason}")]
    InvalidPathState {
        /// Why the combination is impossible.
        reason: String,
    },

    /// A system-provided directory could not be determined.
    #[error("system path unavailable: {what}")]
    UnavailableSystemPath {
        /// The path source that could not be read.
        what: String,
    },
}

impl Error {
    /// Check if the error came from atom validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::Error;
    ///
    /// assert!(Error::EmptyAtom.is_atom_error());
    /// assert!(!Error::EmptyPath.is_atom_error());
    /// ```
    #[must_use]
    pub fn is_atom_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyAtom | Self::AtomContainsSeparator { .. } | Self::ForbiddenCharacter { .. }
        )
    }

    /// Check if the error is drive-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::Error;
    ///
    /// let err = Error::InvalidDriveSpecifier {
    ///     value: "7".to_string(),
    /// };
    /// assert!(err.is_drive_error());
    /// assert!(!Error::EmptyAtom.is_drive_error());
    /// ```
    #[must_use]
    pub fn is_drive_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDriveSpecifier { .. } | Self::DriveMismatch { .. }
        )
    }
}
