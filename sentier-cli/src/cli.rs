//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, JoinCommand, NormalizeCommand, ParseCommand, RelateCommand, ResolveCommand,
};
use clap::{Parser, Subcommand};
use sentier::Flavor;

/// Command-line tool for typed, flavor-aware path manipulation.
#[derive(Parser)]
#[command(name = "sentier")]
#[command(version, about = "Inspect and transform structured paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path flavor to interpret inputs under (generic, unix, or windows)
    #[arg(
        long,
        value_name = "FLAVOR",
        global = true,
        env = "SENTIER_FLAVOR",
        value_parser = Flavor::parse,
        default_value_t = Flavor::platform()
    )]
    pub flavor: Flavor,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Break a path string into its structure
    Parse(ParseCommand),

    /// Reduce a path to canonical form
    Normalize(NormalizeCommand),

    /// Resolve a path against a base
    Resolve(ResolveCommand),

    /// Append atoms to a path
    Join(JoinCommand),

    /// Report the relationship between two paths
    Relate(RelateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
