//! Relate command implementation.
//!
//! This module implements the `relate` command, which classifies the
//! relationship between two paths and can assert an expected outcome
//! for use in scripts.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions};
use clap::{Args, ValueEnum};
use sentier::PathRelationship;

/// Classify the relationship between two paths.
#[derive(Args)]
pub struct RelateCommand {
    /// Path whose role is reported
    pub left: String,

    /// Path the first is compared against
    pub right: String,

    /// Fail unless the relationship matches
    #[arg(long, value_enum)]
    pub expect: Option<ExpectedRelationship>,
}

/// A relationship the caller requires to hold.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExpectedRelationship {
    /// The first path must be a strict ancestor of the second
    Ancestor,
    /// The first path must be a strict descendant of the second
    Descendant,
    /// The paths must name the same location
    Same,
    /// The paths must not be related
    Unrelated,
}

impl ExpectedRelationship {
    const fn to_relationship(self) -> PathRelationship {
        match self {
            Self::Ancestor => PathRelationship::Ancestor,
            Self::Descendant => PathRelationship::Descendant,
            Self::Same => PathRelationship::Same,
            Self::Unrelated => PathRelationship::Unrelated,
        }
    }
}

impl RelateCommand {
    /// Execute the relate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let factory = global.factory();
        let left = parse_path(&factory, &self.left)?;
        let right = parse_path(&factory, &self.right)?;

        let relationship = left.relationship_to(&right);
        println!("{} {} {}", self.left, relationship.description(), self.right);

        if let Some(expected) = self.expect.map(ExpectedRelationship::to_relationship) {
            if relationship != expected {
                return Err(CliError::SemanticFailure(format!(
                    "expected {expected} relationship, found {relationship}"
                )));
            }
        }

        Ok(())
    }
}
