//! A path that is either absolute or relative.

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
use crate::path::relative::RelativePath;
use crate::path::resolve::BasePathResolver;

/// Either an [`AbsolutePath`] or a [`RelativePath`].
///
/// Most code should hold the concrete type and let the signatures enforce
/// absoluteness. `AnyPath` is for the boundary where a string of unknown
/// kind arrives, typically straight from [`crate::PathFactory::create`].
///
/// # Examples
///
/// ```
/// use sentier::PathFactory;
///
/// let factory = PathFactory::unix();
/// assert!(factory.create("/etc")?.is_absolute());
/// assert!(factory.create("etc")?.is_relative());
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AnyPath {
    /// A path anchored at a root.
    Absolute(AbsolutePath),
    /// A path interpreted against some base.
    Relative(RelativePath),
}

impl AnyPath {
    /// Returns `true` for the absolute variant.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute(_))
    }

    /// Returns `true` for the relative variant.
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }

    /// Borrows the absolute path, when this is one.
    #[must_use]
    pub const fn as_absolute(&self) -> Option<&AbsolutePath> {
        match self {
            Self::Absolute(path) => Some(path),
            Self::Relative(_) => None,
        }
    }

    /// Borrows the relative path, when this is one.
    #[must_use]
    pub const fn as_relative(&self) -> Option<&RelativePath> {
        match self {
            Self::Absolute(_) => None,
            Self::Relative(path) => Some(path),
        }
    }

    /// The validated atoms, in order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        match self {
            Self::Absolute(path) => path.atoms(),
            Self::Relative(path) => path.atoms(),
        }
    }

    /// The flavor this path was built under.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        match self {
            Self::Absolute(path) => path.flavor(),
            Self::Relative(path) => path.flavor(),
        }
    }

    /// The drive specifier, if any.
    #[must_use]
    pub const fn drive(&self) -> Option<Drive> {
        match self {
            Self::Absolute(path) => path.drive(),
            Self::Relative(path) => path.drive(),
        }
    }

    /// Returns `true` when the path rendered with a final separator.
    #[must_use]
    pub const fn has_trailing_separator(&self) -> bool {
        match self {
            Self::Absolute(path) => path.has_trailing_separator(),
            Self::Relative(path) => path.has_trailing_separator(),
        }
    }

    /// The final atom's text, if there is one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Absolute(path) => path.name(),
            Self::Relative(path) => path.name(),
        }
    }

    /// The final atom's extension, when it has one.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        match self {
            Self::Absolute(path) => path.extension(),
            Self::Relative(path) => path.extension(),
        }
    }

    /// All of the final atom's extensions, outermost last.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        match self {
            Self::Absolute(path) => path.extensions(),
            Self::Relative(path) => path.extensions(),
        }
    }

    /// Validates and appends atom texts to the path.
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
        match self {
            Self::Absolute(path) => path.join_atoms(atoms).map(Self::Absolute),
            Self::Relative(path) => path.join_atoms(atoms).map(Self::Relative),
        }
    }

    /// Marks the path as rendered with a final separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootTrailingSeparator`] when the path is an
    /// atomless root.
    pub fn join_trailing_separator(&self) -> Result<Self> {
        match self {
            Self::Absolute(path) => path.join_trailing_separator().map(Self::Absolute),
            Self::Relative(path) => path.join_trailing_separator().map(Self::Relative),
        }
    }

    /// The canonical form of this path, under its own flavor's rules.
    #[must_use]
    pub fn normalize(&self) -> Self {
        match self {
            Self::Absolute(path) => Self::Absolute(path.normalize()),
            Self::Relative(path) => Self::Relative(path.normalize()),
        }
    }

    /// The canonical form of this path under an injected normalizer.
    #[must_use]
    pub fn normalize_with(&self, normalizer: &PathNormalizer) -> Self {
        normalizer.normalize(self)
    }

    /// Resolves the path against an absolute base.
    ///
    /// An absolute path resolves to itself, ignoring the base.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{AbsolutePath, Flavor, PathFactory};
    ///
    /// let factory = PathFactory::unix();
    /// let base = factory.create_absolute("/foo/bar")?;
    ///
    /// let resolved = factory.create("baz")?.resolve(&base);
    /// assert_eq!(resolved.to_string(), "/foo/bar/baz");
    ///
    /// let resolved = factory.create("/opt")?.resolve(&base);
    /// assert_eq!(resolved.to_string(), "/opt");
    /// # Ok::<(), sentier::Error>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, base: &AbsolutePath) -> AbsolutePath {
        self.resolve_with(base, &BasePathResolver::new(self.flavor()))
    }

    /// Resolves the path against a base using an injected resolver.
    #[must_use]
    pub fn resolve_with(&self, base: &AbsolutePath, resolver: &BasePathResolver) -> AbsolutePath {
        resolver.resolve(base, self)
    }

    /// The relationship between this path and another.
    ///
    /// Paths of different kinds are always [`PathRelationship::Unrelated`].
    #[must_use]
    pub fn relationship_to(&self, other: &Self) -> PathRelationship {
        PathRelationship::between(self, other)
    }

    /// Returns `true` when this path is a strict ancestor of `other`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.relationship_to(other) == PathRelationship::Ancestor
    }
}

impl From<AbsolutePath> for AnyPath {
    fn from(path: AbsolutePath) -> Self {
        Self::Absolute(path)
    }
}

impl From<RelativePath> for AnyPath {
    fn from(path: RelativePath) -> Self {
        Self::Relative(path)
    }
}

impl fmt::Display for AnyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(path) => path.fmt(f),
            Self::Relative(path) => path.fmt(f),
        }
    }
}

impl FromStr for AnyPath {
    type Err = Error;

    /// Parses under the generic flavor; use a [`PathFactory`] to choose
    /// another.
    fn from_str(s: &str) -> Result<Self> {
        PathFactory::generic().create(s)
    }
}
