mod execute;
mod output;

pub use output::{ArtifactRecord, GenerateResult};

use clap::Args;
use std::path::PathBuf;

/// Generate Laravel artifacts from a YAML schema
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  laragen generate --schema schema.yaml --output ./my-app
  laragen generate -s schema.yaml -o . --format json")]
pub struct GenerateCmd {
    /// Path to the YAML schema file
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Laravel project root the artifacts are written under
    #[arg(short, long)]
    pub output: PathBuf,
}
