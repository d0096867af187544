use serde::Serialize;

use crate::generate::ArtifactKind;
use crate::output::Outputable;

/// One written artifact, as reported to the user.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactRecord {
    pub kind: ArtifactKind,
    pub entity: String,
    pub path: String,
}

/// Result of a generate run.
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    pub schema: String,
    pub output_root: String,
    pub entities: usize,
    pub artifacts: Vec<ArtifactRecord>,
}

impl Outputable for GenerateResult {
    fn to_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Generated {} artifact(s) for {} entity(ies) from {}\n",
            self.artifacts.len(),
            self.entities,
            self.schema
        ));
        for record in &self.artifacts {
            out.push_str(&format!(
                "  [{}] {} -> {}\n",
                record.kind, record.entity, record.path
            ));
        }
        out.trim_end().to_string()
    }
}
