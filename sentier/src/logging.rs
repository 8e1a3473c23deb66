//! Logging infrastructure with configurable verbosity.
//!
//! The logger is deliberately small: consumers construct one through
//! [`init_logger`], which reconciles command-line flags with the
//! `SENTIER_LOG_MODE` environment variable.

use std::env;
use std::fmt;

/// The environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_ENV: &str = "SENTIER_LOG_MODE";

/// Verbosity levels, from least to most output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Errors only.
    Quiet,
    /// Errors, warnings, and informational messages.
    Normal,
    /// Everything, including debug detail.
    Verbose,
}

impl LogLevel {
    /// Parses a level name.
    ///
    /// Recognizes `quiet`, `normal`, and `verbose`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not a level name.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log mode: {value}")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

/// Writes messages gated on a [`LogLevel`].
///
/// Errors and warnings go to standard error; informational and debug
/// messages go to standard output.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The level this logger writes at.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Writes an error message; never suppressed.
    pub fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    /// Writes a warning unless the logger is quiet.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("warning: {message}");
        }
    }

    /// Writes an informational message unless the logger is quiet.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            println!("{message}");
        }
    }

    /// Writes a debug message when the logger is verbose.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            println!("debug: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds the process logger from flags and the environment.
///
/// Flags win over the environment: `quiet` silences everything but
/// errors, `verbose` enables debug output. With neither flag set, the
/// `SENTIER_LOG_MODE` variable is consulted; an unset or unrecognized
/// value means normal.
///
/// # Examples
///
/// ```
/// use sentier::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    match env::var(LOG_MODE_ENV) {
        Ok(value) => Logger::new(LogLevel::parse(&value).unwrap_or(LogLevel::Normal)),
        Err(_) => Logger::new(LogLevel::Normal),
    }
}
