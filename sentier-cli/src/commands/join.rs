//! Join command implementation.
//!
//! This module implements the `join` command, which appends atoms to a
//! path after validating them under the active flavor.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions};
use clap::Args;

/// Append atoms to a path.
#[derive(Args)]
pub struct JoinCommand {
    /// Path string to extend
    pub path: String,

    /// Atoms to append, in order
    #[arg(required = true, num_args = 1..)]
    pub atoms: Vec<String>,

    /// Mark the result with a trailing separator
    #[arg(long)]
    pub trailing: bool,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let factory = global.factory();
        let path = parse_path(&factory, &self.path)?;

        let mut joined = path.join_atoms(&self.atoms)?;
        if self.trailing {
            joined = joined.join_trailing_separator()?;
        }
        println!("{joined}");

        Ok(())
    }
}
