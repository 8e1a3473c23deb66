//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which resolves a path
//! against an absolute base. The base defaults to the process working
//! directory when `--base` is not given.

use crate::error::CliError;
use crate::utils::{parse_absolute, parse_path, working_directory, GlobalOptions};
use clap::Args;
use sentier::{BasePathResolver, NormalizingResolver};

/// Resolve a path against an absolute base.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path string to resolve
    pub path: String,

    /// Absolute base path (defaults to the working directory)
    #[arg(long, value_name = "PATH")]
    pub base: Option<String>,

    /// Normalize the resolved path
    #[arg(long)]
    pub normalize: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let factory = global.factory();
        let path = parse_path(&factory, &self.path)?;

        let base = match self.base.as_deref() {
            Some(raw) => parse_absolute(&factory, raw)?,
            None => working_directory(&factory)?,
        };
        if global.verbose {
            eprintln!("Resolving against base: {base}");
        }

        let resolved = if self.normalize {
            NormalizingResolver::new(global.flavor).resolve(&base, &path)
        } else {
            BasePathResolver::new(global.flavor).resolve(&base, &path)
        };
        println!("{resolved}");

        Ok(())
    }
}
