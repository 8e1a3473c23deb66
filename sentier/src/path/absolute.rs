//! The absolute path value type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::atom::{Atom, Drive};
use crate::error::{Error, Result};
use crate::factory::PathFactory;
use crate::flavor::Flavor;
use crate::path::normalize::PathNormalizer;
use crate::path::relationship::PathRelationship;
use crate::path::relative::RelativePath;
use crate::path::segment;

/// A path anchored at a root.
///
/// An absolute path holds zero or more validated atoms below its root.
/// With zero atoms it is the root itself. Windows-flavored absolute paths
/// may carry a [`Drive`]; other flavors never do. A trailing separator is
/// a cosmetic flag: it never changes which location the path names, and
/// the root cannot carry one.
///
/// # Examples
///
/// ```
/// use sentier::{AbsolutePath, Flavor};
///
/// let path = AbsolutePath::new(["var", "log"], Flavor::Unix)?;
/// assert_eq!(path.to_string(), "/var/log");
/// assert!(!path.is_root());
/// assert_eq!(path.name(), Some("log"));
///
/// let root = AbsolutePath::root(Flavor::Unix);
/// assert_eq!(root.to_string(), "/");
/// assert!(root.is_root());
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AbsolutePath {
    atoms: Vec<Atom>,
    flavor: Flavor,
    drive: Option<Drive>,
    trailing_separator: bool,
}

impl AbsolutePath {
    /// The root path of a flavor: absolute with no atoms and no drive.
    #[must_use]
    pub fn root(flavor: Flavor) -> Self {
        Self::from_parts(Vec::new(), flavor, None, false)
    }

    /// Creates an absolute path by validating each atom text.
    ///
    /// An empty iterator produces the root.
    ///
    /// # Errors
    ///
    /// Returns an atom validation error when any text is not a legal atom
    /// of `flavor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{AbsolutePath, Flavor};
    ///
    /// let path = AbsolutePath::new(["etc", "ssh"], Flavor::Unix)?;
    /// assert_eq!(path.to_string(), "/etc/ssh");
    ///
    /// assert!(AbsolutePath::new(["a/b"], Flavor::Unix).is_err());
    /// # Ok::<(), sentier::Error>(())
    /// ```
    pub fn new<I, S>(atoms: I, flavor: Flavor) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_parts(
            segment::validate_atoms(atoms, flavor)?,
            flavor,
            None,
            false,
        ))
    }

    /// Builds a path from already-validated parts, keeping the invariant
    /// that the root never carries a trailing separator.
    pub(crate) fn from_parts(
        atoms: Vec<Atom>,
        flavor: Flavor,
        drive: Option<Drive>,
        trailing_separator: bool,
    ) -> Self {
        let trailing_separator = trailing_separator && !atoms.is_empty();
        Self {
            atoms,
            flavor,
            drive,
            trailing_separator,
        }
    }

    /// Builds a path from validated atoms plus structural flags, checking
    /// that the flags are legal for the flavor.
    pub(crate) fn assemble(
        atoms: Vec<Atom>,
        flavor: Flavor,
        drive: Option<Drive>,
        trailing_separator: bool,
    ) -> Result<Self> {
        if drive.is_some() && !flavor.is_windows() {
            return Err(Error::InvalidPathState {
                reason: format!("drive specifiers require the windows flavor, not {flavor}"),
            });
        }
        Ok(Self::from_parts(atoms, flavor, drive, trailing_separator))
    }

    /// The validated atoms below the root, in order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The flavor this path was built under.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// The drive specifier, if any.
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

    /// Returns `true` when the path rendered with a final separator.
    #[must_use]
    pub const fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Returns `true` for the atomless root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Looks up an atom by index; negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedAtom`] when the index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{AbsolutePath, Flavor};
    ///
    /// let path = AbsolutePath::new(["a", "b", "c"], Flavor::Generic)?;
    /// assert_eq!(path.atom_at(0)?.as_str(), "a");
    /// assert_eq!(path.atom_at(-1)?.as_str(), "c");
    /// assert!(path.atom_at(3).is_err());
    /// # Ok::<(), sentier::Error>(())
    /// ```
    pub fn atom_at(&self, index: isize) -> Result<&Atom> {
        segment::locate(self.atoms.len(), index)
            .map(|position| &self.atoms[position])
            .ok_or(Error::UndefinedAtom { index })
    }

    /// The final atom's text, or `None` for the root.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.atoms.last().map(Atom::as_str)
    }

    /// The final atom's dot-separated name parts.
    ///
    /// Leading dots stay glued to the first part, so `.bashrc` is one
    /// part. Empty for the root.
    #[must_use]
    pub fn name_parts(&self) -> Vec<&str> {
        self.atoms
            .last()
            .map(|atom| segment::name_parts(atom.as_str()))
            .unwrap_or_default()
    }

    /// The final atom's extension, when it has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{AbsolutePath, Flavor};
    ///
    /// let archive = AbsolutePath::new(["data", "logs.tar.gz"], Flavor::Unix)?;
    /// assert_eq!(archive.extension(), Some("gz"));
    ///
    /// let dotfile = AbsolutePath::new(["home", ".bashrc"], Flavor::Unix)?;
    /// assert_eq!(dotfile.extension(), None);
    /// # Ok::<(), sentier::Error>(())
    /// ```
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

    /// Appends a relative path's atoms to this path.
    ///
    /// The result keeps this path's flavor and drive; the argument's
    /// drive and anchoring, if any, are ignored. The trailing separator
    /// of the result is the argument's. No normalization happens: joining
    /// `..` atoms leaves them in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{AbsolutePath, Flavor, RelativePath};
    ///
    /// let base = AbsolutePath::new(["usr"], Flavor::Unix)?;
    /// let rel = RelativePath::new(["local", "bin"], Flavor::Unix)?;
    /// assert_eq!(base.join(&rel).to_string(), "/usr/local/bin");
    /// # Ok::<(), sentier::Error>(())
    /// ```
    #[must_use]
    pub fn join(&self, other: &RelativePath) -> Self {
        let mut atoms = self.atoms.clone();
        atoms.extend(other.atoms().iter().cloned());
        Self::from_parts(
            atoms,
            self.flavor,
            self.drive,
            other.has_trailing_separator(),
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
        Ok(Self::from_parts(joined, self.flavor, self.drive, false))
    }

    /// Marks the path as rendered with a final separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootTrailingSeparator`] for the atomless root.
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
    /// Returns [`Error::EmptyPath`] for the root, or an atom validation
    /// error when the combined text is not a legal atom.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{AbsolutePath, Flavor};
    ///
    /// let path = AbsolutePath::new(["data", "dump"], Flavor::Unix)?;
    /// let archived = path.join_extensions(["tar", "gz"])?;
    /// assert_eq!(archived.to_string(), "/data/dump.tar.gz");
    /// # Ok::<(), sentier::Error>(())
    /// ```
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
            self.trailing_separator,
        ))
    }

    /// Replaces the final atom's extension, adding one if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] for the root, or an atom validation
    /// error when the combined text is not a legal atom.
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
            self.trailing_separator,
        ))
    }

    /// Replaces `count` atoms starting at `index` with validated atoms.
    ///
    /// Out-of-range positions clamp to the sequence instead of failing,
    /// so replacing at an index past the end appends.
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
            self.trailing_separator,
        ))
    }

    /// The path one level up, always in normalized form.
    ///
    /// The parent of the root is the root itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{AbsolutePath, Flavor};
    ///
    /// let path = AbsolutePath::new(["a", "b"], Flavor::Unix)?;
    /// assert_eq!(path.parent().to_string(), "/a");
    /// assert_eq!(AbsolutePath::root(Flavor::Unix).parent().to_string(), "/");
    /// # Ok::<(), sentier::Error>(())
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        self.ancestor(1)
    }

    /// The path `levels` up, always in normalized form.
    ///
    /// Ascending past the root stops at the root.
    #[must_use]
    pub fn ancestor(&self, levels: usize) -> Self {
        let mut atoms = self.atoms.clone();
        atoms.extend(std::iter::repeat_with(Atom::parent_atom).take(levels));
        PathNormalizer::new(self.flavor).normalize_absolute(&Self::from_parts(
            atoms,
            self.flavor,
            self.drive,
            false,
        ))
    }

    /// The relationship between this path and another of the same kind.
    ///
    /// Both paths are normalized before comparison.
    #[must_use]
    pub fn relationship_to(&self, other: &Self) -> PathRelationship {
        PathRelationship::between_absolute(self, other)
    }

    /// Returns `true` when this path is a strict ancestor of `other`.
    ///
    /// A path is not its own ancestor.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::{AbsolutePath, Flavor};
    ///
    /// let parent = AbsolutePath::new(["a"], Flavor::Unix)?;
    /// let child = AbsolutePath::new(["a", "b"], Flavor::Unix)?;
    /// assert!(parent.is_ancestor_of(&child));
    /// assert!(!child.is_ancestor_of(&parent));
    /// assert!(!parent.is_ancestor_of(&parent));
    /// # Ok::<(), sentier::Error>(())
    /// ```
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.relationship_to(other) == PathRelationship::Ancestor
    }

    /// Attaches a drive specifier, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathState`] for non-Windows flavors.
    pub fn with_drive(&self, drive: Drive) -> Result<Self> {
        if !self.flavor.is_windows() {
            return Err(Error::InvalidPathState {
                reason: format!(
                    "drive specifiers require the windows flavor, not {}",
                    self.flavor
                ),
            });
        }
        Ok(Self {
            drive: Some(drive),
            ..self.clone()
        })
    }

    /// The canonical form of this path, under its own flavor's rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentier::PathFactory;
    ///
    /// let factory = PathFactory::unix();
    /// let path = factory.create_absolute("/path/./to/foo/../bar")?;
    /// assert_eq!(path.normalize().to_string(), "/path/to/bar");
    /// # Ok::<(), sentier::Error>(())
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        PathNormalizer::new(self.flavor).normalize_absolute(self)
    }

    /// The canonical form of this path under an injected normalizer.
    #[must_use]
    pub fn normalize_with(&self, normalizer: &PathNormalizer) -> Self {
        normalizer.normalize_absolute(self)
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(drive) = self.drive {
            write!(f, "{drive}:")?;
        }
        write!(f, "{}", Flavor::RENDER_SEPARATOR)?;
        write!(f, "{}", segment::render_atoms(&self.atoms))?;
        if self.trailing_separator {
            write!(f, "{}", Flavor::RENDER_SEPARATOR)?;
        }
        Ok(())
    }
}

impl FromStr for AbsolutePath {
    type Err = Error;

    /// Parses under the generic flavor; use a [`PathFactory`] to choose
    /// another.
    fn from_str(s: &str) -> Result<Self> {
        PathFactory::generic().create_absolute(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unix(atoms: &[&str]) -> AbsolutePath {
        AbsolutePath::new(atoms.iter().copied(), Flavor::Unix).unwrap()
    }

    #[test]
    fn test_root_construction() {
        let root = AbsolutePath::root(Flavor::Generic);
        assert!(root.is_root());
        assert!(root.atoms().is_empty());
        assert_eq!(root.to_string(), "/");
        assert!(!root.has_trailing_separator());
    }

    #[test]
    fn test_new_validates_each_atom() {
        assert!(AbsolutePath::new(["a", "b"], Flavor::Unix).is_ok());
        assert_eq!(
            AbsolutePath::new(["a", ""], Flavor::Unix),
            Err(Error::EmptyAtom)
        );
        assert_eq!(
            AbsolutePath::new(["a/b"], Flavor::Unix),
            Err(Error::AtomContainsSeparator {
                atom: "a/b".to_string()
            })
        );
    }

    #[test]
    fn test_new_with_empty_iterator_is_root() {
        let path = AbsolutePath::new(Vec::<&str>::new(), Flavor::Unix).unwrap();
        assert!(path.is_root());
    }

    #[test]
    fn test_atom_at() {
        let path = unix(&["a", "b", "c"]);
        assert_eq!(path.atom_at(0).unwrap().as_str(), "a");
        assert_eq!(path.atom_at(2).unwrap().as_str(), "c");
        assert_eq!(path.atom_at(-1).unwrap().as_str(), "c");
        assert_eq!(path.atom_at(-3).unwrap().as_str(), "a");
        assert_eq!(path.atom_at(3), Err(Error::UndefinedAtom { index: 3 }));
        assert_eq!(path.atom_at(-4), Err(Error::UndefinedAtom { index: -4 }));
    }

    #[test]
    fn test_name_family() {
        let path = unix(&["dir", "archive.tar.gz"]);
        assert_eq!(path.name(), Some("archive.tar.gz"));
        assert_eq!(path.name_parts(), vec!["archive", "tar", "gz"]);
        assert_eq!(path.extension(), Some("gz"));
        assert_eq!(path.extensions(), vec!["tar", "gz"]);
        assert_eq!(path.name_without_extension(), Some("archive.tar"));
    }

    #[test]
    fn test_name_family_on_root() {
        let root = AbsolutePath::root(Flavor::Unix);
        assert_eq!(root.name(), None);
        assert!(root.name_parts().is_empty());
        assert_eq!(root.extension(), None);
        assert!(root.extensions().is_empty());
        assert_eq!(root.name_without_extension(), None);
    }

    #[test]
    fn test_name_family_dotfile() {
        let path = unix(&["home", ".bashrc"]);
        assert_eq!(path.name(), Some(".bashrc"));
        assert_eq!(path.name_parts(), vec![".bashrc"]);
        assert_eq!(path.extension(), None);
        assert_eq!(path.name_without_extension(), Some(".bashrc"));
    }

    #[test]
    fn test_join() {
        let base = unix(&["usr"]);
        let rel = RelativePath::new(["local", "bin"], Flavor::Unix).unwrap();
        let joined = base.join(&rel);
        assert_eq!(joined.to_string(), "/usr/local/bin");
        assert_eq!(joined.flavor(), Flavor::Unix);
    }

    #[test]
    fn test_join_does_not_normalize() {
        let base = unix(&["usr"]);
        let rel = RelativePath::new(["..", "opt"], Flavor::Unix).unwrap();
        assert_eq!(base.join(&rel).to_string(), "/usr/../opt");
    }

    #[test]
    fn test_join_takes_trailing_separator_from_argument() {
        let base = unix(&["a"]).join_trailing_separator().unwrap();
        let plain = RelativePath::new(["b"], Flavor::Unix).unwrap();
        assert!(!base.join(&plain).has_trailing_separator());

        let trailed = plain.join_trailing_separator().unwrap();
        assert!(base.join(&trailed).has_trailing_separator());
    }

    #[test]
    fn test_join_atoms() {
        let path = unix(&["a"]).join_atoms(["b", "c"]).unwrap();
        assert_eq!(path.to_string(), "/a/b/c");
        assert!(unix(&["a"]).join_atoms(["x/y"]).is_err());
    }

    #[test]
    fn test_join_atoms_clears_trailing_separator() {
        let base = unix(&["a"]).join_trailing_separator().unwrap();
        let joined = base.join_atoms(["b"]).unwrap();
        assert!(!joined.has_trailing_separator());
    }

    #[test]
    fn test_trailing_separator_round_trip() {
        let path = unix(&["a", "b"]);
        let trailed = path.join_trailing_separator().unwrap();
        assert_eq!(trailed.to_string(), "/a/b/");
        assert_eq!(trailed.strip_trailing_separator(), path);
    }

    #[test]
    fn test_root_rejects_trailing_separator() {
        assert_eq!(
            AbsolutePath::root(Flavor::Unix).join_trailing_separator(),
            Err(Error::RootTrailingSeparator)
        );
    }

    #[test]
    fn test_join_extensions() {
        let path = unix(&["dump"]).join_extensions(["tar", "gz"]).unwrap();
        assert_eq!(path.to_string(), "/dump.tar.gz");
        assert_eq!(
            AbsolutePath::root(Flavor::Unix).join_extensions(["txt"]),
            Err(Error::EmptyPath)
        );
    }

    #[test]
    fn test_join_extensions_revalidates_atom() {
        let result = unix(&["dump"]).join_extensions(["t/gz"]);
        assert!(matches!(
            result,
            Err(Error::AtomContainsSeparator { .. })
        ));
    }

    #[test]
    fn test_replace_extension() {
        let path = unix(&["notes.txt"]).replace_extension("md").unwrap();
        assert_eq!(path.to_string(), "/notes.md");

        let path = unix(&["notes"]).replace_extension("md").unwrap();
        assert_eq!(path.to_string(), "/notes.md");

        let path = unix(&[".bashrc"]).replace_extension("bak").unwrap();
        assert_eq!(path.to_string(), "/.bashrc.bak");
    }

    #[test]
    fn test_replace() {
        let path = unix(&["a", "b", "c"]);
        let replaced = path.replace(1, 1, ["x", "y"]).unwrap();
        assert_eq!(replaced.to_string(), "/a/x/y/c");
    }

    #[test]
    fn test_replace_clamps_out_of_range() {
        let path = unix(&["a", "b"]);
        assert_eq!(path.replace(5, 2, ["z"]).unwrap().to_string(), "/a/b/z");
        assert_eq!(path.replace(1, 99, ["z"]).unwrap().to_string(), "/a/z");
    }

    #[test]
    fn test_replace_can_produce_the_root() {
        let path = unix(&["a"]).join_trailing_separator().unwrap();
        let emptied = path.replace(0, 1, Vec::<&str>::new()).unwrap();
        assert!(emptied.is_root());
        assert!(!emptied.has_trailing_separator());
    }

    #[test]
    fn test_parent() {
        assert_eq!(unix(&["a", "b"]).parent().to_string(), "/a");
        assert_eq!(unix(&["a"]).parent().to_string(), "/");
        assert_eq!(AbsolutePath::root(Flavor::Unix).parent().to_string(), "/");
    }

    #[test]
    fn test_parent_normalizes() {
        let factory = PathFactory::generic();
        let path = factory.create_absolute("/a/./b").unwrap();
        assert_eq!(path.parent().to_string(), "/a");
    }

    #[test]
    fn test_ancestor() {
        let path = unix(&["a", "b", "c"]);
        assert_eq!(path.ancestor(0).to_string(), "/a/b/c");
        assert_eq!(path.ancestor(2).to_string(), "/a");
        assert_eq!(path.ancestor(9).to_string(), "/");
    }

    #[test]
    fn test_is_ancestor_of() {
        let parent = unix(&["a"]);
        let child = unix(&["a", "b"]);
        assert!(parent.is_ancestor_of(&child));
        assert!(!child.is_ancestor_of(&parent));
        assert!(!parent.is_ancestor_of(&parent));
        assert!(AbsolutePath::root(Flavor::Unix).is_ancestor_of(&parent));
    }

    #[test]
    fn test_with_drive() {
        let path = AbsolutePath::new(["x"], Flavor::Windows)
            .unwrap()
            .with_drive(Drive::new('c').unwrap())
            .unwrap();
        assert_eq!(path.to_string(), "c:/x");
        assert!(path.has_drive());

        assert!(matches!(
            unix(&["x"]).with_drive(Drive::new('c').unwrap()),
            Err(Error::InvalidPathState { .. })
        ));
    }

    #[test]
    fn test_matches_drive() {
        let driveless = AbsolutePath::new(["x"], Flavor::Windows).unwrap();
        let on_c = driveless.with_drive(Drive::new('c').unwrap()).unwrap();
        assert!(driveless.matches_drive(None));
        assert!(on_c.matches_drive(Some(Drive::new('C').unwrap())));
        assert!(!on_c.matches_drive(None));
        assert!(!on_c.matches_drive(Some(Drive::new('d').unwrap())));
        assert!(!driveless.matches_drive(Some(Drive::new('c').unwrap())));
    }

    #[test]
    fn test_display_with_drive_and_trailing() {
        let path = AbsolutePath::new(["Users", "x"], Flavor::Windows)
            .unwrap()
            .with_drive(Drive::new('C').unwrap())
            .unwrap()
            .join_trailing_separator()
            .unwrap();
        assert_eq!(path.to_string(), "C:/Users/x/");
    }

    #[test]
    fn test_from_str_uses_generic_flavor() {
        let path: AbsolutePath = "/a/b".parse().unwrap();
        assert_eq!(path.flavor(), Flavor::Generic);
        assert_eq!(path.to_string(), "/a/b");
        assert!("relative/path".parse::<AbsolutePath>().is_err());
    }

    #[test]
    fn test_equality_ignores_drive_case() {
        let base = AbsolutePath::new(["x"], Flavor::Windows).unwrap();
        let lower = base.with_drive(Drive::new('c').unwrap()).unwrap();
        let upper = base.with_drive(Drive::new('C').unwrap()).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_serialize() {
        let path = unix(&["a", "b"]);
        let value = serde_json::to_value(&path).unwrap();
        assert_eq!(value["atoms"][0], "a");
        assert_eq!(value["flavor"], "unix");
    }
}
