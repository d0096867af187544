mod execute;
mod output;

pub use output::{CheckResult, EntityReport};

use clap::Args;
use std::path::PathBuf;

/// Validate a schema without generating anything
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  laragen check --schema schema.yaml
  laragen check -s schema.yaml --format json")]
pub struct CheckCmd {
    /// Path to the YAML schema file
    #[arg(short, long)]
    pub schema: PathBuf,
}
