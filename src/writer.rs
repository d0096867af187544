//! Artifact file writing.
//!
//! The one place the pipeline touches the filesystem. Called only after the
//! whole schema has compiled and every artifact has rendered, so a failing
//! run never leaves partial output behind from the validation stages.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GeneratorError;
use crate::generate::GeneratedArtifact;

/// Writes every artifact under `root`, creating parent directories as
/// needed. Returns the written paths in artifact order.
pub fn write_artifacts(
    root: &Path,
    artifacts: &[GeneratedArtifact],
) -> Result<Vec<PathBuf>, GeneratorError> {
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = root.join(artifact.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GeneratorError::Write {
                path: parent.display().to_string(),
                source,
            })?;
        }
        fs::write(&path, &artifact.content).map_err(|source| GeneratorError::Write {
            path: path.display().to_string(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}
