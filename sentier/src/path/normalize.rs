//! Reduction of paths to canonical form.
//!
//! # Key Concepts
//!
//! ## Rooted reduction
//!
//! Inside an absolute or anchored path, a self atom disappears and a
//! parent atom removes the atom before it. A parent atom with nothing
//! before it is absorbed: the root has no parent, so `/../../foo`
//! normalizes to `/foo`.
//!
//! ## Relative reduction
//!
//! Inside an ordinary relative path the base is unknown, so a parent atom
//! is only cancelled against a preceding real atom. Otherwise it is kept,
//! which is how `../foo/../../bar` normalizes to `../../bar`: the leading
//! parents still mean "above wherever we start".
//!
//! Reduction never consults the flavor's separator rules; the only
//! flavor-specific step is uppercasing a Windows drive letter.

use crate::atom::{Atom, Drive};
use crate::flavor::Flavor;
use crate::path::absolute::AbsolutePath;
use crate::path::any::AnyPath;
use crate::path::relative::RelativePath;

/// Rewrites paths into canonical form.
///
/// A normalizer is stateless; it exists as a value so that call sites can
/// inject one (see [`crate::NormalizingResolver`]) and so that a path can
/// be normalized under a flavor other than its own.
///
/// # Examples
///
/// ```
/// use sentier::{Flavor, PathFactory, PathNormalizer};
///
/// let factory = PathFactory::unix();
/// let path = factory.create_absolute("/path/./to/foo/../bar")?;
/// let normalizer = PathNormalizer::new(Flavor::Unix);
/// assert_eq!(normalizer.normalize_absolute(&path).to_string(), "/path/to/bar");
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNormalizer {
    flavor: Flavor,
}

impl PathNormalizer {
    /// Creates a normalizer applying `flavor`'s canonical form.
    #[must_use]
    pub const fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    /// The flavor whose canonical form this normalizer applies.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Normalizes either kind of path.
    #[must_use]
    pub fn normalize(&self, path: &AnyPath) -> AnyPath {
        match path {
            AnyPath::Absolute(path) => AnyPath::Absolute(self.normalize_absolute(path)),
            AnyPath::Relative(path) => AnyPath::Relative(self.normalize_relative(path)),
        }
    }

    /// Normalizes an absolute path.
    ///
    /// Self atoms drop, parent atoms pop, parents at the root are
    /// absorbed, the trailing separator clears, and a Windows-flavored
    /// normalizer uppercases the drive letter.
    #[must_use]
    pub fn normalize_absolute(&self, path: &AbsolutePath) -> AbsolutePath {
        AbsolutePath::from_parts(
            collapse_rooted(path.atoms()),
            path.flavor(),
            self.canonical_drive(path.drive()),
            false,
        )
    }

    /// Normalizes a relative path.
    ///
    /// An anchored path reduces like an absolute one. An ordinary
    /// relative path keeps leading parent atoms; reducing to nothing
    /// leaves the self atom.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{Flavor, PathFactory, PathNormalizer};
    ///
    /// let factory = PathFactory::generic();
    /// let normalizer = PathNormalizer::new(Flavor::Generic);
    ///
    /// let path = factory.create_relative("a/..")?;
    /// assert_eq!(normalizer.normalize_relative(&path).to_string(), ".");
    ///
    /// let path = factory.create_relative("../a/../../b")?;
    /// assert_eq!(normalizer.normalize_relative(&path).to_string(), "../../b");
    /// # Ok::<(), sentier::Error>(())
    /// ```
    #[must_use]
    pub fn normalize_relative(&self, path: &RelativePath) -> RelativePath {
        let atoms = if path.is_anchored() {
            collapse_rooted(path.atoms())
        } else {
            collapse_relative(path.atoms())
        };
        RelativePath::from_parts(
            atoms,
            path.flavor(),
            self.canonical_drive(path.drive()),
            path.is_anchored(),
            false,
        )
    }

    fn canonical_drive(&self, drive: Option<Drive>) -> Option<Drive> {
        if self.flavor.is_windows() {
            drive.map(Drive::canonical)
        } else {
            drive
        }
    }
}

/// Reduction for paths with a fixed starting point.
fn collapse_rooted(atoms: &[Atom]) -> Vec<Atom> {
    let mut result: Vec<Atom> = Vec::with_capacity(atoms.len());
    for atom in atoms {
        if atom.is_self() {
            continue;
        }
        if atom.is_parent() {
            result.pop();
            continue;
        }
        result.push(atom.clone());
    }
    result
}

/// Reduction for paths whose starting point is unknown.
fn collapse_relative(atoms: &[Atom]) -> Vec<Atom> {
    let mut result: Vec<Atom> = Vec::with_capacity(atoms.len());
    for atom in atoms {
        if atom.is_self() {
            continue;
        }
        if atom.is_parent() {
            if result.last().is_some_and(Atom::is_real) {
                result.pop();
            } else {
                result.push(atom.clone());
            }
            continue;
        }
        result.push(atom.clone());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::PathFactory;

    fn normalize_abs(raw: &str) -> String {
        let path = PathFactory::generic().create_absolute(raw).unwrap();
        PathNormalizer::new(Flavor::Generic)
            .normalize_absolute(&path)
            .to_string()
    }

    fn normalize_rel(raw: &str) -> String {
        let path = PathFactory::generic().create_relative(raw).unwrap();
        PathNormalizer::new(Flavor::Generic)
            .normalize_relative(&path)
            .to_string()
    }

    #[test]
    fn test_absolute_drops_self_atoms() {
        assert_eq!(normalize_abs("/a/./b/."), "/a/b");
    }

    #[test]
    fn test_absolute_pops_on_parent() {
        assert_eq!(normalize_abs("/path/./to/foo/../bar"), "/path/to/bar");
        assert_eq!(normalize_abs("/a/b/.."), "/a");
    }

    #[test]
    fn test_absolute_absorbs_parents_at_root() {
        assert_eq!(normalize_abs("/.."), "/");
        assert_eq!(normalize_abs("/../../foo"), "/foo");
        assert_eq!(normalize_abs("/a/../../.."), "/");
    }

    #[test]
    fn test_absolute_clears_trailing_separator() {
        assert_eq!(normalize_abs("/a/b/"), "/a/b");
    }

    #[test]
    fn test_relative_cancels_against_real_atoms() {
        assert_eq!(normalize_rel("a/.."), ".");
        assert_eq!(normalize_rel("a/b/../c"), "a/c");
    }

    #[test]
    fn test_relative_keeps_leading_parents() {
        assert_eq!(normalize_rel(".."), "..");
        assert_eq!(normalize_rel("../foo/../../bar"), "../../bar");
        assert_eq!(normalize_rel("../../a"), "../../a");
    }

    #[test]
    fn test_relative_drops_self_atoms() {
        assert_eq!(normalize_rel("./a/."), "a");
        assert_eq!(normalize_rel("."), ".");
    }

    #[test]
    fn test_relative_reduces_to_self_atom() {
        assert_eq!(normalize_rel("a/b/../.."), ".");
    }

    #[test]
    fn test_relative_clears_trailing_separator() {
        assert_eq!(normalize_rel("a/b/"), "a/b");
    }

    #[test]
    fn test_anchored_uses_rooted_reduction() {
        let factory = PathFactory::windows();
        let path = factory.create_relative("\\..\\foo\\..\\bar").unwrap();
        assert!(path.is_anchored());
        let normalized = PathNormalizer::new(Flavor::Windows).normalize_relative(&path);
        assert!(normalized.is_anchored());
        assert_eq!(normalized.to_string(), "/bar");
    }

    #[test]
    fn test_windows_normalizer_uppercases_drive() {
        let factory = PathFactory::windows();
        let path = factory.create_absolute("c:\\Users\\x").unwrap();
        let normalized = PathNormalizer::new(Flavor::Windows).normalize_absolute(&path);
        assert_eq!(normalized.to_string(), "C:/Users/x");
    }

    #[test]
    fn test_foreign_normalizer_leaves_drive_case_alone() {
        let factory = PathFactory::windows();
        let path = factory.create_absolute("c:\\Users").unwrap();
        let normalized = PathNormalizer::new(Flavor::Generic).normalize_absolute(&path);
        assert_eq!(normalized.to_string(), "c:/Users");
    }

    #[test]
    fn test_normalize_any_path() {
        let factory = PathFactory::generic();
        let normalizer = PathNormalizer::new(Flavor::Generic);
        let path = factory.create("/a/./b").unwrap();
        assert_eq!(normalizer.normalize(&path).to_string(), "/a/b");
        let path = factory.create("a/./b").unwrap();
        assert_eq!(normalizer.normalize(&path).to_string(), "a/b");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn dotted_atoms_strategy() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec(
                prop_oneof![
                    3 => "[a-z0-9]{1,8}",
                    1 => Just(".".to_string()),
                    1 => Just("..".to_string()),
                ],
                0..8,
            )
        }

        proptest! {
            #[test]
            fn absolute_normalization_is_idempotent(atoms in dotted_atoms_strategy()) {
                let path = AbsolutePath::new(atoms, Flavor::Generic).unwrap();
                let once = path.normalize();
                prop_assert_eq!(once.normalize(), once);
            }

            #[test]
            fn normalized_absolute_has_no_reserved_atoms(atoms in dotted_atoms_strategy()) {
                let path = AbsolutePath::new(atoms, Flavor::Generic).unwrap();
                prop_assert!(path.normalize().atoms().iter().all(Atom::is_real));
            }

            #[test]
            fn relative_normalization_is_idempotent(atoms in dotted_atoms_strategy()) {
                prop_assume!(!atoms.is_empty());
                let path = RelativePath::new(atoms, Flavor::Generic).unwrap();
                let once = path.normalize();
                prop_assert_eq!(once.normalize(), once);
            }

            #[test]
            fn normalized_relative_keeps_parents_only_as_prefix(atoms in dotted_atoms_strategy()) {
                prop_assume!(!atoms.is_empty());
                let path = RelativePath::new(atoms, Flavor::Generic).unwrap();
                let normalized = path.normalize();
                let atoms = normalized.atoms();
                let first_real = atoms
                    .iter()
                    .position(Atom::is_real)
                    .unwrap_or(atoms.len());
                if atoms.len() == 1 && atoms[0].is_self() {
                    return Ok(());
                }
                for (index, atom) in atoms.iter().enumerate() {
                    if index < first_real {
                        prop_assert!(atom.is_parent());
                    } else {
                        prop_assert!(atom.is_real());
                    }
                }
            }
        }
    }
}
