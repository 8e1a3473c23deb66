//! Hierarchical relationships between paths.

use std::fmt;

use crate::atom::{Atom, Drive};
use crate::path::absolute::AbsolutePath;
use crate::path::any::AnyPath;
use crate::path::relative::RelativePath;

/// How one path relates to another in the hierarchy.
///
/// Paths are normalized before comparison, so `/a/./b` and `/a/b` are the
/// same location. The relationship reads left to right: `Ancestor` means
/// the first path strictly contains the second.
///
/// # Examples
///
/// ```
/// use sentier::{PathFactory, PathRelationship};
///
/// let factory = PathFactory::unix();
/// let parent = factory.create("/a")?;
/// let child = factory.create("/a/b")?;
///
/// assert_eq!(parent.relationship_to(&child), PathRelationship::Ancestor);
/// assert_eq!(child.relationship_to(&parent), PathRelationship::Descendant);
/// assert_eq!(parent.relationship_to(&parent), PathRelationship::Same);
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path strictly contains the second.
    Ancestor,
    /// The first path is strictly contained in the second.
    Descendant,
    /// Both paths name the same location.
    Same,
    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determines the relationship between two paths of either kind.
    ///
    /// An absolute and a relative path are always `Unrelated`: without a
    /// base there is no way to place them in one hierarchy.
    #[must_use]
    pub fn between(left: &AnyPath, right: &AnyPath) -> Self {
        match (left, right) {
            (AnyPath::Absolute(left), AnyPath::Absolute(right)) => {
                Self::between_absolute(left, right)
            }
            (AnyPath::Relative(left), AnyPath::Relative(right)) => {
                Self::between_relative(left, right)
            }
            _ => Self::Unrelated,
        }
    }

    /// Determines the relationship between two absolute paths.
    ///
    /// Paths on different drives are `Unrelated`.
    #[must_use]
    pub fn between_absolute(left: &AbsolutePath, right: &AbsolutePath) -> Self {
        let left = left.normalize();
        let right = right.normalize();
        if !drives_match(left.drive(), right.drive()) {
            return Self::Unrelated;
        }
        compare_sequences(left.atoms(), right.atoms())
    }

    /// Determines the relationship between two relative paths.
    ///
    /// Both paths must agree on anchoring and drive. Leading parent atoms
    /// name unknown directories above the base, so ancestry across
    /// different parent depths is only knowable when the higher path has
    /// no real atoms of its own.
    #[must_use]
    pub fn between_relative(left: &RelativePath, right: &RelativePath) -> Self {
        let left = left.normalize();
        let right = right.normalize();
        if left.is_anchored() != right.is_anchored() {
            return Self::Unrelated;
        }
        if !drives_match(left.drive(), right.drive()) {
            return Self::Unrelated;
        }
        let (left_parents, left_reals) = split_parents(left.atoms());
        let (right_parents, right_reals) = split_parents(right.atoms());
        match left_parents.cmp(&right_parents) {
            std::cmp::Ordering::Equal => compare_sequences(left_reals, right_reals),
            std::cmp::Ordering::Greater => {
                if left_reals.is_empty() {
                    Self::Ancestor
                } else {
                    Self::Unrelated
                }
            }
            std::cmp::Ordering::Less => {
                if right_reals.is_empty() {
                    Self::Descendant
                } else {
                    Self::Unrelated
                }
            }
        }
    }

    /// Returns `true` when the paths share a hierarchy at all.
    #[must_use]
    pub const fn is_hierarchical(self) -> bool {
        !matches!(self, Self::Unrelated)
    }

    /// Returns `true` when the first path lies within the second,
    /// counting a path as within itself.
    #[must_use]
    pub const fn is_within(self) -> bool {
        matches!(self, Self::Descendant | Self::Same)
    }

    /// Returns `true` when the first path contains the second, counting
    /// a path as containing itself.
    #[must_use]
    pub const fn contains(self) -> bool {
        matches!(self, Self::Ancestor | Self::Same)
    }

    /// A short phrase for reporting, reading left to right.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ancestor => "is an ancestor of",
            Self::Descendant => "is a descendant of",
            Self::Same => "is the same as",
            Self::Unrelated => "is unrelated to",
        }
    }
}

impl fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Same => write!(f, "same"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}

/// Case-insensitive drive comparison where two absent drives match.
fn drives_match(left: Option<Drive>, right: Option<Drive>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left.matches(right),
        _ => false,
    }
}

/// Splits normalized atoms into the leading parent run and the rest.
///
/// A lone self atom counts as no atoms at all.
fn split_parents(atoms: &[Atom]) -> (usize, &[Atom]) {
    if atoms.len() == 1 && atoms[0].is_self() {
        return (0, &[]);
    }
    let parents = atoms.iter().take_while(|atom| atom.is_parent()).count();
    (parents, &atoms[parents..])
}

fn compare_sequences(left: &[Atom], right: &[Atom]) -> PathRelationship {
    if left == right {
        PathRelationship::Same
    } else if right.starts_with(left) {
        PathRelationship::Ancestor
    } else if left.starts_with(right) {
        PathRelationship::Descendant
    } else {
        PathRelationship::Unrelated
    }
}
