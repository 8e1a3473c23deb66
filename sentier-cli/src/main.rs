//! Main entry point for the sentier CLI.
//!
//! This is the command-line interface for the sentier path toolkit.
//! It provides commands for inspecting and transforming paths:
//! - `parse`: Break a path string into its structure
//! - `normalize`: Reduce a path to canonical form
//! - `resolve`: Resolve a path against a base
//! - `join`: Append atoms to a path
//! - `relate`: Report the relationship between two paths

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = sentier::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        flavor: cli.flavor,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Relate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
