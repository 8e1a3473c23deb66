//! Resolution of paths against absolute bases.

use crate::flavor::Flavor;
use crate::path::absolute::AbsolutePath;
use crate::path::any::AnyPath;
use crate::path::normalize::PathNormalizer;
use crate::path::relative::RelativePath;

/// Combines an absolute base with a path of unknown kind.
///
/// An absolute path resolves to itself; a relative path is appended to
/// the base. Resolution never normalizes: resolving `..` against
/// `/foo/bar` yields `/foo/bar/..`, keeping the distinction between a
/// location named through a parent atom and its reduced form. Use
/// [`NormalizingResolver`] when the reduced form is wanted.
///
/// A Windows-flavored resolver adds two rules: an anchored path takes
/// the base's drive, and a drive-relative path whose drive differs from
/// the base's resolves on its own drive from that drive's root.
///
/// # Examples
///
/// ```
/// use sentier::{BasePathResolver, Flavor, PathFactory};
///
/// let factory = PathFactory::unix();
/// let resolver = BasePathResolver::new(Flavor::Unix);
/// let base = factory.create_absolute("/foo/bar")?;
///
/// let resolved = resolver.resolve(&base, &factory.create("baz")?);
/// assert_eq!(resolved.to_string(), "/foo/bar/baz");
///
/// let resolved = resolver.resolve(&base, &factory.create("..")?);
/// assert_eq!(resolved.to_string(), "/foo/bar/..");
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePathResolver {
    flavor: Flavor,
}

impl BasePathResolver {
    /// Creates a resolver applying `flavor`'s resolution rules.
    #[must_use]
    pub const fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    /// The flavor whose resolution rules this resolver applies.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Resolves either kind of path against `base`.
    #[must_use]
    pub fn resolve(&self, base: &AbsolutePath, path: &AnyPath) -> AbsolutePath {
        match path {
            AnyPath::Absolute(path) => path.clone(),
            AnyPath::Relative(path) => self.resolve_relative(base, path),
        }
    }

    /// Resolves a relative path against `base`.
    #[must_use]
    pub fn resolve_relative(&self, base: &AbsolutePath, path: &RelativePath) -> AbsolutePath {
        if self.flavor.is_windows() {
            if path.is_anchored() {
                log::debug!("anchored path {path} takes its drive from base {base}");
                return AbsolutePath::from_parts(
                    path.atoms().to_vec(),
                    path.flavor(),
                    base.drive(),
                    path.has_trailing_separator(),
                );
            }
            if let Some(own) = path.drive() {
                let differs = base
                    .drive()
                    .map_or(true, |base_drive| !own.matches(base_drive));
                if differs {
                    log::debug!("path {path} resolves from the root of its own drive");
                    return AbsolutePath::from_parts(
                        path.atoms().to_vec(),
                        path.flavor(),
                        Some(own),
                        path.has_trailing_separator(),
                    );
                }
            }
        }
        base.join(path)
    }
}

/// A resolver that reduces its result to canonical form.
///
/// # Examples
///
/// ```
/// use sentier::{Flavor, NormalizingResolver, PathFactory};
///
/// let factory = PathFactory::unix();
/// let resolver = NormalizingResolver::new(Flavor::Unix);
/// let base = factory.create_absolute("/foo/bar")?;
///
/// let resolved = resolver.resolve(&base, &factory.create("../qux")?);
/// assert_eq!(resolved.to_string(), "/foo/qux");
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizingResolver {
    resolver: BasePathResolver,
    normalizer: PathNormalizer,
}

impl NormalizingResolver {
    /// Creates a resolver that normalizes under `flavor`'s rules.
    #[must_use]
    pub const fn new(flavor: Flavor) -> Self {
        Self {
            resolver: BasePathResolver::new(flavor),
            normalizer: PathNormalizer::new(flavor),
        }
    }

    /// Resolves either kind of path against `base` and normalizes the
    /// result.
    #[must_use]
    pub fn resolve(&self, base: &AbsolutePath, path: &AnyPath) -> AbsolutePath {
        self.normalizer
            .normalize_absolute(&self.resolver.resolve(base, path))
    }
}

/// A resolver bound to one base path.
///
/// Useful when many paths resolve against the same location, such as a
/// working directory captured once.
///
/// # Examples
///
/// ```
/// use sentier::{FixedBaseResolver, PathFactory};
///
/// let factory = PathFactory::unix();
/// let resolver = FixedBaseResolver::new(factory.create_absolute("/srv")?);
/// let resolved = resolver.resolve(&factory.create("data")?);
/// assert_eq!(resolved.to_string(), "/srv/data");
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBaseResolver {
    base: AbsolutePath,
    resolver: BasePathResolver,
    normalize: bool,
}

impl FixedBaseResolver {
    /// Binds a resolver to `base`, using the base's flavor.
    #[must_use]
    pub fn new(base: AbsolutePath) -> Self {
        let resolver = BasePathResolver::new(base.flavor());
        Self {
            base,
            resolver,
            normalize: false,
        }
    }

    /// Binds a normalizing resolver to `base`.
    #[must_use]
    pub fn normalizing(base: AbsolutePath) -> Self {
        Self {
            normalize: true,
            ..Self::new(base)
        }
    }

    /// The bound base path.
    #[must_use]
    pub const fn base(&self) -> &AbsolutePath {
        &self.base
    }

    /// Resolves either kind of path against the bound base.
    #[must_use]
    pub fn resolve(&self, path: &AnyPath) -> AbsolutePath {
        let resolved = self.resolver.resolve(&self.base, path);
        if self.normalize {
            PathNormalizer::new(self.base.flavor()).normalize_absolute(&resolved)
        } else {
            resolved
        }
    }
}
