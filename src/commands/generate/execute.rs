use std::fs;

use super::output::{ArtifactRecord, GenerateResult};
use super::GenerateCmd;
use crate::commands::Execute;
use crate::error::GeneratorError;
use crate::{generate, schema, writer};

impl Execute for GenerateCmd {
    type Output = GenerateResult;

    fn execute(self) -> Result<GenerateResult, GeneratorError> {
        let source =
            fs::read_to_string(&self.schema).map_err(|source| GeneratorError::SchemaRead {
                path: self.schema.display().to_string(),
                source,
            })?;

        // Everything validates before anything is written.
        let doc = schema::compile(&source)?;
        let artifacts = generate::generate_artifacts(&doc)?;
        let written = writer::write_artifacts(&self.output, &artifacts)?;

        let records = artifacts
            .iter()
            .zip(written.iter())
            .map(|(artifact, path)| ArtifactRecord {
                kind: artifact.kind,
                entity: artifact.entity.clone(),
                path: path.display().to_string(),
            })
            .collect();

        Ok(GenerateResult {
            schema: self.schema.display().to_string(),
            output_root: self.output.display().to_string(),
            entities: doc.len(),
            artifacts: records,
        })
    }
}
