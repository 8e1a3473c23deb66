//! Parse command implementation.
//!
//! This module implements the `parse` command, which breaks a path
//! string into its structure and prints it in various formats
//! (text, JSON, YAML).

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions};
use clap::{Args, ValueEnum};
use sentier::{AnyPath, RelativePath};
use serde::Serialize;
use std::io::Write;

/// Break a path string into its structure.
#[derive(Args)]
pub struct ParseCommand {
    /// Path string to parse
    pub path: String,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "SENTIER_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for the parse command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned key/value lines (human-readable)
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// The structural fields of a parsed path.
#[derive(Serialize)]
struct Breakdown {
    raw: String,
    flavor: String,
    rendered: String,
    is_absolute: bool,
    is_anchored: bool,
    drive: Option<char>,
    has_trailing_separator: bool,
    atoms: Vec<String>,
    name: Option<String>,
    extension: Option<String>,
    extensions: Vec<String>,
}

impl Breakdown {
    fn of(raw: &str, path: &AnyPath) -> Self {
        Self {
            raw: raw.to_string(),
            flavor: path.flavor().to_string(),
            rendered: path.to_string(),
            is_absolute: path.is_absolute(),
            is_anchored: path.as_relative().is_some_and(RelativePath::is_anchored),
            drive: path.drive().map(|drive| drive.letter()),
            has_trailing_separator: path.has_trailing_separator(),
            atoms: path.atoms().iter().map(|a| a.as_str().to_string()).collect(),
            name: path.name().map(str::to_string),
            extension: path.extension().map(str::to_string),
            extensions: path.extensions().iter().map(|e| (*e).to_string()).collect(),
        }
    }
}

impl ParseCommand {
    /// Execute the parse command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let factory = global.factory();
        let path = parse_path(&factory, &self.path)?;
        let breakdown = Breakdown::of(&self.path, &path);

        match self.format {
            OutputFormat::Text => format_as_text(&breakdown)?,
            OutputFormat::Json => format_as_json(&breakdown)?,
            OutputFormat::Yaml => format_as_yaml(&breakdown)?,
        }

        Ok(())
    }
}

/// Format the breakdown as aligned key/value lines.
fn format_as_text(breakdown: &Breakdown) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let kind = if breakdown.is_absolute {
        "absolute"
    } else {
        "relative"
    };
    let drive = breakdown
        .drive
        .map_or_else(|| String::from("-"), |d| d.to_string());

    writeln!(handle, "{:<11}{}", "raw:", breakdown.raw)?;
    writeln!(handle, "{:<11}{}", "flavor:", breakdown.flavor)?;
    writeln!(handle, "{:<11}{}", "rendered:", breakdown.rendered)?;
    writeln!(handle, "{:<11}{}", "kind:", kind)?;
    writeln!(handle, "{:<11}{}", "anchored:", breakdown.is_anchored)?;
    writeln!(handle, "{:<11}{}", "drive:", drive)?;
    writeln!(handle, "{:<11}{}", "trailing:", breakdown.has_trailing_separator)?;
    writeln!(handle, "{:<11}{}", "atoms:", breakdown.atoms.join(" "))?;
    writeln!(
        handle,
        "{:<11}{}",
        "name:",
        breakdown.name.as_deref().unwrap_or("-")
    )?;
    writeln!(
        handle,
        "{:<11}{}",
        "extension:",
        breakdown.extension.as_deref().unwrap_or("-")
    )?;

    Ok(())
}

/// Format the breakdown as JSON.
fn format_as_json(breakdown: &Breakdown) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, breakdown)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Format the breakdown as YAML.
fn format_as_yaml(breakdown: &Breakdown) -> Result<(), CliError> {
    let yaml = serde_yaml::to_string(breakdown)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    print!("{yaml}");

    Ok(())
}
