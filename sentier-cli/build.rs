//! Build script for sentier-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("sentier")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and transform structured paths")
        .long_about(
            "Command-line tool for parsing, normalizing, resolving, and comparing paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flavor")
                .long("flavor")
                .help("Path flavor to interpret inputs under (generic, unix, or windows)")
                .value_name("FLAVOR")
                .global(true)
                .env("SENTIER_FLAVOR"),
        )
        .subcommands(vec![
            Command::new("parse")
                .about("Break a path string into its structure")
                .long_about("Parse a path and display its atoms, kind, drive, and name fields"),
            Command::new("normalize")
                .about("Reduce a path to canonical form")
                .long_about("Remove self atoms and reduce parent atoms under the active flavor"),
            Command::new("resolve")
                .about("Resolve a path against a base")
                .long_about("Resolve a path against a base path or the working directory"),
            Command::new("join")
                .about("Append atoms to a path")
                .long_about("Validate atoms under the active flavor and append them to a path"),
            Command::new("relate")
                .about("Report the relationship between two paths")
                .long_about("Report whether one path is an ancestor, descendant, or the same"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main sentier.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("sentier.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
