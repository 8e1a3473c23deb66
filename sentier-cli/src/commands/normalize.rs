//! Normalize command implementation.
//!
//! This module implements the `normalize` command, which rewrites a
//! path into its canonical form.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions};
use clap::Args;

/// Rewrite a path into its canonical form.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path string to normalize
    pub path: String,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let factory = global.factory();
        let path = parse_path(&factory, &self.path)?;

        println!("{}", path.normalize());

        Ok(())
    }
}
