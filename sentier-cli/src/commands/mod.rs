//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `parse`: Break a path string into its structure
//! - `normalize`: Reduce a path to canonical form
//! - `resolve`: Resolve a path against a base
//! - `join`: Append atoms to a path
//! - `relate`: Report the relationship between two paths
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod join;
pub mod normalize;
pub mod parse;
pub mod relate;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use join::JoinCommand;
pub use normalize::NormalizeCommand;
pub use parse::ParseCommand;
pub use relate::RelateCommand;
pub use resolve::ResolveCommand;
