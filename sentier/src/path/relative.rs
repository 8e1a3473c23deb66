//! The relative path value type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::atom::{Atom, Drive};
use crate::error::{Error, Result};
use crate::factory::PathFactory;
use crate::flavor::Flavor;
use crate::path::absolute::AbsolutePath;
use crate::path::normalize::PathNormalizer;
use crate::path::relationship::PathRelationship;
use crate::path::resolve::BasePathResolver;
use crate::path::segment;

/// A path interpreted against some base.
///
/// An ordinary relative path always has at least one atom; the no-op path
/// is the single self atom `.`. Windows adds two rooted-but-incomplete
/// forms: an *anchored* path (`\foo`) that names a location on whichever
/// drive the base supplies, and a *drive-relative* path (`c:foo`) that
/// names a drive but no starting directory. An anchored path may have
/// zero atoms and never carries a drive.
///
/// # Examples
///
/// ```
/// use sentier::{Flavor, RelativePath};
///
/// let path = RelativePath::new(["src", "lib.rs"], Flavor::Unix)?;
/// assert_eq!(path.to_string(), "src/lib.rs");
/// assert!(RelativePath::new(Vec::<&str>::new(), Flavor::Unix).is_err());
///
/// let here = RelativePath::here(Flavor::Unix);
/// assert_eq!(here.to_string(), ".");
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RelativePath {
    atoms: Vec<Atom>,
    flavor: Flavor,
    drive: Option<Drive>,
    anchored: bool,
    trailing_separator: bool,
}

impl RelativePath {
    /// The no-op relative path, a single self atom.
    #[must_use]
    pub fn here(flavor: Flavor) -> Self {
        Self::from_parts(vec![Atom::self_atom()], flavor, None, false, false)
    }

    /// Creates a relative path by validating each atom text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] for an empty iterator, or an atom
    /// validation error when any text is not a legal atom of `flavor`.
    pub fn new<I, S>(atoms: I, flavor: Flavor) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let atoms = segment::validate_atoms(atoms, flavor)?;
        if atoms.is_empty() {
            return Err(Error::EmptyPath);
        }
        Ok(Self::from_parts(atoms, flavor, None, false, false))
    }

    /// Builds a path from already-validated parts, keeping the invariants
    /// that an unanchored path has at least the self atom and an atomless
    /// anchor never carries a trailing separator.
    pub(crate) fn from_parts(
        mut atoms: Vec<Atom>,
        flavor: Flavor,
        drive: Option<Drive>,
        anchored: bool,
        trailing_separator: bool,
    ) -> Self {
        if !anchored && atoms.is_empty() {
            atoms.push(Atom::self_atom());
        }
        let trailing_separator = trailing_separator && !atoms.is_empty();
        Self {
            atoms,
            flavor,
            drive,
            anchored,
            trailing_separator,
        }
    }

    /// Builds a path from validated atoms plus structural flags, checking
    /// that the flags are legal for the flavor.
    pub(crate) fn assemble(
        atoms: Vec<Atom>,
        flavor: Flavor,
        drive: Option<Drive>,
        anchored: bool,
        trailing_separator: bool,
    ) -> Result<Self> {
        if (drive.is_some() || anchored) && !flavor.is_windows() {
            return Err(Error::InvalidPathState {
                reason: format!(
                    "drive specifiers and anchoring require the windows flavor, not {flavor}"
                ),
            });
        }
        if drive.is_some() && anchored {
            return Err(Error::InvalidPathState {
                reason: "a path cannot be both anchored and drive-relative".to_string(),
            });
        }
        Ok(Self::from_parts(
            atoms,
            flavor,
            drive,
            anchored,
            trailing_separator,
        ))
    }

    /// The validated atoms, in order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The flavor this path was built under.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// The drive specifier of a drive-relative path.
    #[must_use]
    pub const fn drive(&self) -> Option<Drive> {
        self.drive
    }

    /// Returns `true` when the path carries a drive specifier.
    #[must_use]
    pub const fn has_drive(&self) -> bool {
        self.drive.is_some()
    }

    /// Case-insensitive drive comparison; two absent drives match.
    #[must_use]
    pub fn matches_drive(&self, other: Option<Drive>) -> bool {
        match (self.drive, other) {
            (None, None) => true,
            (Some(mine), Some(theirs)) => mine.matches(theirs),
            _ => false,
        }
    }

    /// Returns `true` for an anchored path (`\foo` on Windows).
    #[must_use]
    pub const fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Returns `true` when the path rendered with a final separator.
    #[must_use]
    pub const fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Looks up an atom by index; negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedAtom`] when the index is out of range.
    pub fn atom_at(&self, index: isize) -> Result<&Atom> {
        segment::locate(self.atoms.len(), index)
            .map(|position| &self.atoms[position])
            .ok_or(Error::UndefinedAtom { index })
    }

    /// The final atom's text, or `None` for an atomless anchor.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.atoms.last().map(Atom::as_str)
    }

    /// The final atom's dot-separated name parts.
    #[must_use]
    pub fn name_parts(&self) -> Vec<&str> {
        self.atoms
            .last()
            .map(|atom| segment::name_parts(atom.as_str()))
            .unwrap_or_default()
    }

    /// The final atom's extension, when it has one.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.atoms
            .last()
            .and_then(|atom| segment::extension_of(atom.as_str()))
    }

    /// All of the final atom's extensions, outermost last.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        self.atoms
            .last()
            .map(|atom| segment::extensions_of(atom.as_str()))
            .unwrap_or_default()
    }

    /// The final atom's text with its extension removed.
    #[must_use]
    pub fn name_without_extension(&self) -> Option<&str> {
        self.atoms
            .last()
            .map(|atom| segment::without_extension(atom.as_str()))
    }

    /// Appends another relative path's atoms to this path.
    ///
    /// The result keeps this path's flavor, drive, and anchoring; the
    /// argument's drive and anchoring are ignored. The trailing separator
    /// of the result is the argument's. No normalization happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{Flavor, RelativePath};
    ///
    /// let base = RelativePath::new(["src"], Flavor::Unix)?;
    /// let more = RelativePath::new(["path", "mod.rs"], Flavor::Unix)?;
    /// assert_eq!(base.join(&more).to_string(), "src/path/mod.rs");
    /// # Ok::<(), sentier::Error>(())
    /// ```
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        let mut atoms = self.atoms.clone();
        atoms.extend(other.atoms.iter().cloned());
        Self::from_parts(
            atoms,
            self.flavor,
            self.drive,
            self.anchored,
            other.trailing_separator,
        )
    }

    /// Validates and appends atom texts to this path.
    ///
    /// The result never carries a trailing separator.
    ///
    /// # Errors
    ///
    /// Returns an atom validation error when any text is not a legal atom
    /// of this path's flavor.
    pub fn join_atoms<I, S>(&self, atoms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = self.atoms.clone();
        joined.extend(segment::validate_atoms(atoms, self.flavor)?);
        Ok(Self::from_parts(
            joined,
            self.flavor,
            self.drive,
            self.anchored,
            false,
        ))
    }

    /// Marks the path as rendered with a final separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootTrailingSeparator`] for an atomless anchor,
    /// which renders like a root.
    pub fn join_trailing_separator(&self) -> Result<Self> {
        if self.atoms.is_empty() {
            return Err(Error::RootTrailingSeparator);
        }
        Ok(Self {
            trailing_separator: true,
            ..self.clone()
        })
    }

    /// Removes the trailing separator flag, if present.
    #[must_use]
    pub fn strip_trailing_separator(&self) -> Self {
        Self {
            trailing_separator: false,
            ..self.clone()
        }
    }

    /// Appends extensions to the final atom, dot-joined.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] for an atomless anchor, or an atom
    /// validation error when the combined text is not a legal atom.
    pub fn join_extensions<I, S>(&self, extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut atoms = self.atoms.clone();
        let Some(last) = atoms.last_mut() else {
            return Err(Error::EmptyPath);
        };
        let mut text = last.as_str().to_string();
        for extension in extensions {
            text.push('.');
            text.push_str(extension.as_ref());
        }
        *last = Atom::new(text, self.flavor)?;
        Ok(Self::from_parts(
            atoms,
            self.flavor,
            self.drive,
            self.anchored,
            self.trailing_separator,
        ))
    }

    /// Replaces the final atom's extension, adding one if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] for an atomless anchor, or an atom
    /// validation error when the combined text is not a legal atom.
    pub fn replace_extension(&self, extension: impl AsRef<str>) -> Result<Self> {
        let mut atoms = self.atoms.clone();
        let Some(last) = atoms.last_mut() else {
            return Err(Error::EmptyPath);
        };
        let mut text = segment::without_extension(last.as_str()).to_string();
        text.push('.');
        text.push_str(extension.as_ref());
        *last = Atom::new(text, self.flavor)?;
        Ok(Self::from_parts(
            atoms,
            self.flavor,
            self.drive,
            self.anchored,
            self.trailing_separator,
        ))
    }

    /// Replaces `count` atoms starting at `index` with validated atoms.
    ///
    /// Out-of-range positions clamp to the sequence. Emptying an
    /// unanchored path leaves the self atom.
    ///
    /// # Errors
    ///
    /// Returns an atom validation error when any replacement text is not
    /// a legal atom of this path's flavor.
    pub fn replace<I, S>(&self, index: usize, count: usize, replacement: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let replacement = segment::validate_atoms(replacement, self.flavor)?;
        let atoms = segment::splice(&self.atoms, index, count, replacement);
        Ok(Self::from_parts(
            atoms,
            self.flavor,
            self.drive,
            self.anchored,
            self.trailing_separator,
        ))
    }

    /// The path one level up.
    ///
    /// Appends a parent atom rather than popping, so the result still
    /// refers one level above wherever the base turns out to be. The
    /// Unix flavor keeps the result canonical; other flavors leave the
    /// appended parent atom in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{Flavor, RelativePath};
    ///
    /// let generic = RelativePath::new(["a", "b"], Flavor::Generic)?;
    /// assert_eq!(generic.parent().to_string(), "a/b/..");
    ///
    /// let unix = RelativePath::new(["a", "b"], Flavor::Unix)?;
    /// assert_eq!(unix.parent().to_string(), "a");
    /// # Ok::<(), sentier::Error>(())
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        self.ancestor(1)
    }

    /// The path `levels` up; see [`RelativePath::parent`].
    #[must_use]
    pub fn ancestor(&self, levels: usize) -> Self {
        let mut atoms = self.atoms.clone();
        atoms.extend(std::iter::repeat_with(Atom::parent_atom).take(levels));
        let raised = Self::from_parts(atoms, self.flavor, self.drive, self.anchored, false);
        if self.flavor == Flavor::Unix {
            raised.normalize()
        } else {
            raised
        }
    }

    /// The relationship between this path and another of the same kind.
    ///
    /// Both paths are normalized before comparison.
    #[must_use]
    pub fn relationship_to(&self, other: &Self) -> PathRelationship {
        PathRelationship::between_relative(self, other)
    }

    /// Returns `true` when this path is a strict ancestor of `other`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.relationship_to(other) == PathRelationship::Ancestor
    }

    /// Marks the path as anchored: rooted on whichever drive a base
    /// supplies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathState`] for non-Windows flavors or
    /// when the path already carries a drive.
    pub fn anchor(&self) -> Result<Self> {
        if !self.flavor.is_windows() {
            return Err(Error::InvalidPathState {
                reason: format!("anchoring requires the windows flavor, not {}", self.flavor),
            });
        }
        if self.drive.is_some() {
            return Err(Error::InvalidPathState {
                reason: "a drive-relative path cannot be anchored".to_string(),
            });
        }
        Ok(Self {
            anchored: true,
            ..self.clone()
        })
    }

    /// Attaches a drive specifier, making the path drive-relative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathState`] for non-Windows flavors or
    /// when the path is anchored.
    pub fn with_drive(&self, drive: Drive) -> Result<Self> {
        if !self.flavor.is_windows() {
            return Err(Error::InvalidPathState {
                reason: format!(
                    "drive specifiers require the windows flavor, not {}",
                    self.flavor
                ),
            });
        }
        if self.anchored {
            return Err(Error::InvalidPathState {
                reason: "an anchored path cannot carry a drive specifier".to_string(),
            });
        }
        Ok(Self {
            drive: Some(drive),
            ..self.clone()
        })
    }

    /// Combines the path with a drive into an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathState`] for non-Windows flavors, or
    /// [`Error::DriveMismatch`] when the path already carries a
    /// different drive.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{Drive, Flavor, RelativePath};
    ///
    /// let rel = RelativePath::new(["Users", "x"], Flavor::Windows)?;
    /// let abs = rel.join_drive(Drive::new('C')?)?;
    /// assert_eq!(abs.to_string(), "C:/Users/x");
    /// # Ok::<(), sentier::Error>(())
    /// ```
    pub fn join_drive(&self, drive: Drive) -> Result<AbsolutePath> {
        if !self.flavor.is_windows() {
            return Err(Error::InvalidPathState {
                reason: format!(
                    "drive specifiers require the windows flavor, not {}",
                    self.flavor
                ),
            });
        }
        if let Some(own) = self.drive {
            if !own.matches(drive) {
                return Err(Error::DriveMismatch {
                    left: own,
                    right: drive,
                });
            }
        }
        Ok(AbsolutePath::from_parts(
            self.atoms.clone(),
            self.flavor,
            Some(drive),
            self.trailing_separator,
        ))
    }

    /// Promotes the path to absolute, keeping its own drive if any.
    ///
    /// An anchored path becomes a driveless absolute path; a
    /// drive-relative path becomes absolute on its own drive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathState`] for non-Windows flavors.
    pub fn to_absolute(&self) -> Result<AbsolutePath> {
        if !self.flavor.is_windows() {
            return Err(Error::InvalidPathState {
                reason: format!(
                    "promotion to absolute requires the windows flavor, not {}",
                    self.flavor
                ),
            });
        }
        Ok(AbsolutePath::from_parts(
            self.atoms.clone(),
            self.flavor,
            self.drive,
            self.trailing_separator,
        ))
    }

    /// Resolves the path against an absolute base.
    ///
    /// Plain relative paths are appended to the base without
    /// normalization; Windows adds drive handling. See
    /// [`BasePathResolver`] for the exact rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{AbsolutePath, Flavor, RelativePath};
    ///
    /// let base = AbsolutePath::new(["foo", "bar"], Flavor::Unix)?;
    /// let rel = RelativePath::new(["baz"], Flavor::Unix)?;
    /// assert_eq!(rel.resolve(&base).to_string(), "/foo/bar/baz");
    /// # Ok::<(), sentier::Error>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, base: &AbsolutePath) -> AbsolutePath {
        self.resolve_with(base, &BasePathResolver::new(self.flavor))
    }

    /// Resolves the path against a base using an injected resolver.
    #[must_use]
    pub fn resolve_with(&self, base: &AbsolutePath, resolver: &BasePathResolver) -> AbsolutePath {
        resolver.resolve_relative(base, self)
    }

    /// The canonical form of this path, under its own flavor's rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::PathFactory;
    ///
    /// let factory = PathFactory::generic();
    /// let path = factory.create_relative("../foo/../../bar")?;
    /// assert_eq!(path.normalize().to_string(), "../../bar");
    /// # Ok::<(), sentier::Error>(())
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        PathNormalizer::new(self.flavor).normalize_relative(self)
    }

    /// The canonical form of this path under an injected normalizer.
    #[must_use]
    pub fn normalize_with(&self, normalizer: &PathNormalizer) -> Self {
        normalizer.normalize_relative(self)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(drive) = self.drive {
            write!(f, "{drive}:")?;
        }
        if self.anchored {
            write!(f, "{}", Flavor::RENDER_SEPARATOR)?;
        }
        write!(f, "{}", segment::render_atoms(&self.atoms))?;
        if self.trailing_separator {
            write!(f, "{}", Flavor::RENDER_SEPARATOR)?;
        }
        Ok(())
    }
}

impl FromStr for RelativePath {
    type Err = Error;

    /// Parses under the generic flavor; use a [`PathFactory`] to choose
    /// another.
    fn from_str(s: &str) -> Result<Self> {
        PathFactory::generic().create_relative(s)
    }
}
