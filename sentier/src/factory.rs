//! Construction of path values from strings, atoms, and the system.
//!
//! A [`PathFactory`] fixes the flavor once so that call sites do not
//! repeat it, carries any extra forbidden characters, and is the single
//! place where unvalidated input (raw strings, parse results, system
//! paths) becomes a validated path value.

use crate::atom::{Atom, Drive};
use crate::error::{Error, Result};
use crate::flavor::Flavor;
use crate::parser::{parse, ParsedPath};
use crate::path::{AbsolutePath, AnyPath, RelativePath};
use crate::system::PathSource;

/// Builds validated path values under one flavor.
///
/// # Examples
///
/// ```
/// use sentier::PathFactory;
///
/// let factory = PathFactory::unix();
/// let path = factory.create("/var/log/app.log")?;
/// assert!(path.is_absolute());
/// assert_eq!(path.extension(), Some("log"));
///
/// let strict = PathFactory::unix().with_forbidden([' ']);
/// assert!(strict.create("/var/with space").is_err());
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFactory {
    flavor: Flavor,
    forbidden: Vec<char>,
}

impl PathFactory {
    /// Creates a factory for `flavor`.
    #[must_use]
    pub const fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            forbidden: Vec::new(),
        }
    }

    /// A factory for the generic flavor.
    #[must_use]
    pub const fn generic() -> Self {
        Self::new(Flavor::Generic)
    }

    /// A factory for the Unix flavor.
    #[must_use]
    pub const fn unix() -> Self {
        Self::new(Flavor::Unix)
    }

    /// A factory for the Windows flavor.
    #[must_use]
    pub const fn windows() -> Self {
        Self::new(Flavor::Windows)
    }

    /// A factory for the compilation target's flavor.
    #[must_use]
    pub const fn platform() -> Self {
        Self::new(Flavor::platform())
    }

    /// Adds characters this factory rejects inside atoms, on top of the
    /// flavor's own rules.
    #[must_use]
    pub fn with_forbidden(mut self, characters: impl IntoIterator<Item = char>) -> Self {
        self.forbidden.extend(characters);
        self
    }

    /// The flavor this factory builds under.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Parses and validates a raw string into a path of either kind.
    ///
    /// # Errors
    ///
    /// Returns an atom validation error when a segment is not a legal
    /// atom, [`Error::InvalidDriveSpecifier`] for a bad drive letter, or
    /// [`Error::InvalidPathState`] when the recognized structure is not
    /// legal for the flavor.
    pub fn create(&self, raw: &str) -> Result<AnyPath> {
        self.from_parsed(&parse(raw, self.flavor))
    }

    /// Parses a raw string that must come out absolute.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`PathFactory::create`], plus
    /// [`Error::InvalidPathState`] when the string parses as relative.
    pub fn create_absolute(&self, raw: &str) -> Result<AbsolutePath> {
        match self.create(raw)? {
            AnyPath::Absolute(path) => Ok(path),
            AnyPath::Relative(path) => Err(Error::InvalidPathState {
                reason: format!("expected an absolute path, got relative '{path}'"),
            }),
        }
    }

    /// Parses a raw string that must come out relative.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`PathFactory::create`], plus
    /// [`Error::InvalidPathState`] when the string parses as absolute.
    pub fn create_relative(&self, raw: &str) -> Result<RelativePath> {
        match self.create(raw)? {
            AnyPath::Relative(path) => Ok(path),
            AnyPath::Absolute(path) => Err(Error::InvalidPathState {
                reason: format!("expected a relative path, got absolute '{path}'"),
            }),
        }
    }

    /// Validates a parse result into a path value.
    ///
    /// This is the single point where parser output becomes a validated
    /// value; [`PathFactory::create`] is parse plus this.
    ///
    /// # Errors
    ///
    /// Returns an atom validation error, [`Error::InvalidDriveSpecifier`],
    /// or [`Error::InvalidPathState`] as described on
    /// [`PathFactory::create`].
    pub fn from_parsed(&self, parsed: &ParsedPath) -> Result<AnyPath> {
        let mut atoms = Vec::with_capacity(parsed.atoms.len());
        for text in &parsed.atoms {
            atoms.push(Atom::with_forbidden(
                text.as_str(),
                self.flavor,
                &self.forbidden,
            )?);
        }
        let drive = parsed.drive.map(Drive::new).transpose()?;
        if parsed.is_absolute {
            Ok(AnyPath::Absolute(AbsolutePath::assemble(
                atoms,
                self.flavor,
                drive,
                parsed.has_trailing_separator,
            )?))
        } else {
            Ok(AnyPath::Relative(RelativePath::assemble(
                atoms,
                self.flavor,
                drive,
                parsed.is_anchored,
                parsed.has_trailing_separator,
            )?))
        }
    }

    /// Builds an absolute path from atom texts; empty input is the root.
    ///
    /// # Errors
    ///
    /// Returns an atom validation error when any text is not a legal
    /// atom under this factory's rules.
    pub fn absolute_from_atoms<I, S>(&self, atoms: I) -> Result<AbsolutePath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(AbsolutePath::from_parts(
            self.validated(atoms)?,
            self.flavor,
            None,
            false,
        ))
    }

    /// Builds a relative path from atom texts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] for empty input, or an atom
    /// validation error when any text is not a legal atom under this
    /// factory's rules.
    pub fn relative_from_atoms<I, S>(&self, atoms: I) -> Result<RelativePath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let atoms = self.validated(atoms)?;
        if atoms.is_empty() {
            return Err(Error::EmptyPath);
        }
        Ok(RelativePath::from_parts(
            atoms,
            self.flavor,
            None,
            false,
            false,
        ))
    }

    /// The process working directory as an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnavailableSystemPath`] when the source cannot
    /// provide it, plus the errors of [`PathFactory::create`] when the
    /// provided string does not parse absolute under this flavor.
    pub fn working_directory(&self, source: &dyn PathSource) -> Result<AbsolutePath> {
        let raw = source
            .working_directory()
            .ok_or_else(|| unavailable("working directory"))?;
        self.system_absolute(&raw, "working directory")
    }

    /// The system temporary directory as an absolute path.
    ///
    /// # Errors
    ///
    /// Same as [`PathFactory::working_directory`].
    pub fn temp_directory(&self, source: &dyn PathSource) -> Result<AbsolutePath> {
        let raw = source
            .temp_directory()
            .ok_or_else(|| unavailable("temporary directory"))?;
        self.system_absolute(&raw, "temporary directory")
    }

    /// The current user's home directory as an absolute path.
    ///
    /// # Errors
    ///
    /// Same as [`PathFactory::working_directory`].
    pub fn home_directory(&self, source: &dyn PathSource) -> Result<AbsolutePath> {
        let raw = source
            .home_directory()
            .ok_or_else(|| unavailable("home directory"))?;
        self.system_absolute(&raw, "home directory")
    }

    /// A fresh path inside the temporary directory, suitable for a new
    /// file or directory.
    ///
    /// # Errors
    ///
    /// Same as [`PathFactory::temp_directory`], plus an atom validation
    /// error when the source's unique name is not a legal atom.
    pub fn temp_path(&self, source: &dyn PathSource) -> Result<AbsolutePath> {
        let name = source.unique_name();
        log::debug!("using temporary name {name}");
        self.temp_directory(source)?.join_atoms([name])
    }

    fn validated<I, S>(&self, atoms: I) -> Result<Vec<Atom>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        atoms
            .into_iter()
            .map(|atom| Atom::with_forbidden(atom.as_ref(), self.flavor, &self.forbidden))
            .collect()
    }

    fn system_absolute(&self, raw: &str, what: &str) -> Result<AbsolutePath> {
        match self.create(raw)? {
            AnyPath::Absolute(path) => Ok(path),
            AnyPath::Relative(_) => Err(Error::UnavailableSystemPath {
                what: format!("{what} is not absolute: {raw}"),
            }),
        }
    }
}

impl Default for PathFactory {
    fn default() -> Self {
        Self::platform()
    }
}

fn unavailable(what: &str) -> Error {
    Error::UnavailableSystemPath {
        what: what.to_string(),
    }
}
