#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sentier
//!
//! A library for typed, flavor-aware path parsing and manipulation.
//!
//! Paths here are values, not filesystem handles: parsing, joining,
//! normalizing, and resolving never touch the disk, so `a/../b` and `b`
//! stay distinguishable until the caller asks for the reduced form.
//! Absolute and relative paths are separate types, and every atom is
//! validated when a path is built, never later.
//!
//! ## Core Types
//!
//! - [`Atom`]: a single validated path segment
//! - [`AbsolutePath`] / [`RelativePath`]: the two path kinds
//! - [`AnyPath`]: either kind, for boundaries that accept both
//! - [`PathFactory`]: turns strings, atoms, and system paths into values
//! - [`PathNormalizer`]: reduces paths to canonical form
//! - [`BasePathResolver`]: combines a base with a path of unknown kind
//! - [`Flavor`]: the generic, Unix, or Windows rule set
//!
//! ## Examples
//!
//! ```
//! use sentier::{Flavor, PathFactory};
//!
//! let factory = PathFactory::unix();
//!
//! let base = factory.create_absolute("/srv/app")?;
//! let config = factory.create("etc/../config.yaml")?;
//!
//! let resolved = config.resolve(&base);
//! assert_eq!(resolved.to_string(), "/srv/app/etc/../config.yaml");
//! assert_eq!(resolved.normalize().to_string(), "/srv/app/config.yaml");
//! # Ok::<(), sentier::Error>(())
//! ```

pub mod atom;
pub mod error;
pub mod factory;
pub mod flavor;
pub mod logging;
pub mod parser;
pub mod path;
pub mod system;

// Re-export key types at crate root for convenience
pub use atom::{Atom, Drive};
pub use error::{Error, Result};
pub use factory::PathFactory;
pub use flavor::Flavor;
pub use logging::{init_logger, LogLevel, Logger, LOG_MODE_ENV};
pub use parser::{parse, ParsedPath};
pub use path::{
    AbsolutePath, AnyPath, BasePathResolver, FixedBaseResolver, NormalizingResolver,
    PathNormalizer, PathRelationship, RelativePath,
};
pub use system::{PathSource, SystemPaths};
