//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands,
//! including argument-to-path conversion and working directory lookup.

use crate::error::CliError;
use sentier::{AbsolutePath, AnyPath, Flavor, PathFactory, SystemPaths};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path flavor to interpret inputs under.
    pub flavor: Flavor,
}

impl GlobalOptions {
    /// A path factory for the selected flavor.
    pub fn factory(&self) -> PathFactory {
        PathFactory::new(self.flavor)
    }
}

/// Parse a command-line argument into a path of either kind.
///
/// Validation failures surface as invalid-argument errors, since the
/// offending string came straight from the command line.
pub fn parse_path(factory: &PathFactory, raw: &str) -> Result<AnyPath, CliError> {
    factory
        .create(raw)
        .map_err(|e| CliError::InvalidArguments(format!("invalid path '{raw}': {e}")))
}

/// Parse a command-line argument that must be an absolute path.
pub fn parse_absolute(factory: &PathFactory, raw: &str) -> Result<AbsolutePath, CliError> {
    factory
        .create_absolute(raw)
        .map_err(|e| CliError::InvalidArguments(format!("invalid base path '{raw}': {e}")))
}

/// The process working directory under the factory's flavor.
pub fn working_directory(factory: &PathFactory) -> Result<AbsolutePath, CliError> {
    factory
        .working_directory(&SystemPaths::new())
        .map_err(CliError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            flavor: Flavor::Unix,
        }
    }

    #[test]
    fn test_factory_uses_the_selected_flavor() {
        assert_eq!(options().factory().flavor(), Flavor::Unix);
    }

    #[test]
    fn test_parse_path_names_the_offending_input() {
        let factory = PathFactory::windows();
        let err = parse_path(&factory, "bad|atom").unwrap_err();

        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("bad|atom"));
    }

    #[test]
    fn test_parse_absolute_rejects_relative_input() {
        let factory = options().factory();
        let err = parse_absolute(&factory, "not/absolute").unwrap_err();

        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_working_directory_is_absolute() {
        // The test process always has a working directory.
        let path = working_directory(&options().factory()).unwrap();
        assert!(!path.atoms().is_empty());
    }
}
