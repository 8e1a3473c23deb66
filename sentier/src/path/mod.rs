//! Path values and the algebra over them.
//!
//! # Key Concepts
//!
//! ## Absolute vs. relative
//!
//! Absoluteness lives in the type system: [`AbsolutePath`] and
//! [`RelativePath`] are distinct types, and operations that only make
//! sense one way (joining takes a relative path, resolving takes an
//! absolute base) say so in their signatures instead of failing at
//! runtime. [`AnyPath`] wraps either kind for the boundary where a
//! string of unknown kind arrives.
//!
//! ## Structure over meaning
//!
//! The algebra manipulates atom sequences and flags; it never touches
//! the filesystem and never reduces `a/..` behind the caller's back.
//! Reduction is an explicit step through [`PathNormalizer`], and
//! combining with a base is an explicit step through a resolver.
//!
//! # Examples
//!
//! ```
//! use sentier::{Flavor, PathFactory};
//!
//! let factory = PathFactory::unix();
//! let base = factory.create_absolute("/srv/app")?;
//! let config = base.join_atoms(["etc", "app.yaml"])?;
//! assert_eq!(config.to_string(), "/srv/app/etc/app.yaml");
//! assert_eq!(config.extension(), Some("yaml"));
//! # Ok::<(), sentier::Error>(())
//! ```

pub mod normalize;
pub mod relationship;
pub mod resolve;

mod absolute;
mod any;
mod relative;
mod segment;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use absolute::AbsolutePath;
pub use any::AnyPath;
pub use normalize::PathNormalizer;
pub use relationship::PathRelationship;
pub use relative::RelativePath;
pub use resolve::{BasePathResolver, FixedBaseResolver, NormalizingResolver};
