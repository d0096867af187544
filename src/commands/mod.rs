//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - the command struct with clap attributes for CLI parsing (`mod.rs`)
//! - the execution logic (`execute.rs`)
//! - the result type and its table formatting (`output.rs`)

mod check;
mod generate;

pub use check::CheckCmd;
pub use generate::GenerateCmd;

use clap::Subcommand;

use crate::error::GeneratorError;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self) -> Result<Self::Output, GeneratorError>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate migrations, models, and Filament resources from a schema
    Generate(GenerateCmd),

    /// Validate a schema and report the migration order without writing files
    Check(CheckCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, format: OutputFormat) -> Result<String, GeneratorError> {
        match self {
            Command::Generate(cmd) => {
                let result = cmd.execute()?;
                Ok(result.format(format))
            }
            Command::Check(cmd) => {
                let result = cmd.execute()?;
                Ok(result.format(format))
            }
        }
    }
}
