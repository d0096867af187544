use std::fs;

use super::output::{CheckResult, EntityReport};
use super::CheckCmd;
use crate::commands::Execute;
use crate::error::GeneratorError;
use crate::schema;
use crate::schema::DependencyGraph;

impl Execute for CheckCmd {
    type Output = CheckResult;

    fn execute(self) -> Result<CheckResult, GeneratorError> {
        let source =
            fs::read_to_string(&self.schema).map_err(|source| GeneratorError::SchemaRead {
                path: self.schema.display().to_string(),
                source,
            })?;

        let doc = schema::compile(&source)?;
        let migration_order = DependencyGraph::build(&doc).topological_order()?;

        let entities = doc
            .iter()
            .map(|entity| EntityReport {
                name: entity.name.clone(),
                table: entity.table.clone(),
                columns: entity.columns.len(),
                relations: entity.relations.len(),
                has_admin: entity.admin.is_some(),
            })
            .collect();

        Ok(CheckResult {
            schema: self.schema.display().to_string(),
            entities,
            migration_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_schema(dir: &std::path::Path, content: &str) -> PathBuf {
        let path = dir.join("schema.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_check_reports_entities_and_order() {
        let dir = tempdir().unwrap();
        let schema = write_schema(
            dir.path(),
            "Post:\n  columns:\n    id:\n      type: id\n    user_id:\n      type: unsignedBigInteger\n      foreign: users.id\nUser:\n  columns:\n    id:\n      type: id\n",
        );

        let result = CheckCmd { schema }.execute().unwrap();
        assert_eq!(result.entities.len(), 2);
        assert_eq!(result.migration_order, vec!["User", "Post"]);
        // Declaration order in the report, not migration order.
        assert_eq!(result.entities[0].name, "Post");
    }

    #[test]
    fn test_check_fails_on_invalid_schema() {
        let dir = tempdir().unwrap();
        let schema = write_schema(dir.path(), "User:\n  columns: {}\n");
        let err = CheckCmd { schema }.execute().unwrap_err();
        assert!(matches!(err, GeneratorError::Invalid(_)));
    }

    #[test]
    fn test_check_writes_nothing() {
        let dir = tempdir().unwrap();
        let schema = write_schema(
            dir.path(),
            "User:\n  columns:\n    id:\n      type: id\n",
        );
        CheckCmd { schema }.execute().unwrap();
        assert!(!dir.path().join("app").exists());
        assert!(!dir.path().join("database").exists());
    }
}
