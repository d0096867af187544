//! Artifact generation.
//!
//! Three independent renderers share the compiled schema model and the
//! placeholder template renderer:
//!
//! - **migration** — `Schema::create` migrations, one per entity, numbered
//!   by the foreign-key topological order
//! - **model** — Eloquent model classes with relation methods
//! - **resource** — Filament admin resources for entities with a
//!   `filament` block
//!
//! `generate_artifacts` runs all three for a compiled document. Generators
//! are pure: nothing here touches the filesystem (see `writer`).

pub mod migration;
pub mod model;
pub mod resource;
pub mod template;

use std::path::PathBuf;

use serde::Serialize;

use crate::error::GeneratorError;
use crate::schema::model::SchemaDocument;
use crate::schema::DependencyGraph;

/// The artifact families a generation run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Migration,
    Model,
    Resource,
}

impl ArtifactKind {
    /// Output directory relative to the Laravel project root.
    pub fn directory(&self) -> &'static str {
        match self {
            ArtifactKind::Migration => "database/migrations",
            ArtifactKind::Model => "app/Models",
            ArtifactKind::Resource => "app/Filament/Resources",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArtifactKind::Migration => "migration",
            ArtifactKind::Model => "model",
            ArtifactKind::Resource => "resource",
        };
        write!(f, "{name}")
    }
}

/// One generated output unit for one entity.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub entity: String,
    pub filename: String,
    pub content: String,
}

impl GeneratedArtifact {
    /// Path relative to the output root this artifact should be written to.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.kind.directory()).join(&self.filename)
    }
}

/// Generates every artifact for a compiled document.
///
/// Migrations come first, in topological order with sequence numbers taken
/// from that order; models and resources follow in declaration order (their
/// output is order-independent).
pub fn generate_artifacts(
    doc: &SchemaDocument,
) -> Result<Vec<GeneratedArtifact>, GeneratorError> {
    let order = DependencyGraph::build(doc).topological_order()?;

    let mut artifacts = Vec::new();
    for (index, entity_name) in order.iter().enumerate() {
        let Some(entity) = doc.get(entity_name) else {
            continue;
        };
        artifacts.push(migration::generate_migration(entity, doc, index + 1)?);
    }

    for entity in doc.iter() {
        artifacts.push(model::generate_model(entity, doc)?);
        if let Some(admin) = &entity.admin {
            artifacts.push(resource::generate_resource(entity, admin, doc)?);
        }
    }

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    const USER_POST: &str = "\
User:
  columns:
    id:
      type: id
    name:
      type: string
  relations:
    posts:
      type: hasMany
      model: Post
  filament:
    form:
      fields: [name]
    table:
      columns: [id, name]
Post:
  columns:
    id:
      type: id
    user_id:
      type: unsignedBigInteger
      foreign: users.id
  relations:
    user:
      type: belongsTo
      model: User
";

    #[test]
    fn test_artifact_relative_paths() {
        let doc = schema::compile(USER_POST).unwrap();
        let artifacts = generate_artifacts(&doc).unwrap();

        let model = artifacts
            .iter()
            .find(|a| a.kind == ArtifactKind::Model && a.entity == "User")
            .unwrap();
        assert_eq!(
            model.relative_path(),
            PathBuf::from("app/Models/User.php")
        );

        let resource = artifacts
            .iter()
            .find(|a| a.kind == ArtifactKind::Resource)
            .unwrap();
        assert_eq!(
            resource.relative_path(),
            PathBuf::from("app/Filament/Resources/UserResource.php")
        );
    }

    #[test]
    fn test_migration_sequence_respects_dependencies() {
        let doc = schema::compile(USER_POST).unwrap();
        let artifacts = generate_artifacts(&doc).unwrap();

        let migrations: Vec<_> = artifacts
            .iter()
            .filter(|a| a.kind == ArtifactKind::Migration)
            .collect();
        assert_eq!(migrations.len(), 2);
        // User is Post's dependency; its filename must sort first.
        assert_eq!(migrations[0].entity, "User");
        assert_eq!(migrations[1].entity, "Post");
        assert!(migrations[0].filename < migrations[1].filename);
    }

    #[test]
    fn test_resource_only_for_filament_entities() {
        let doc = schema::compile(USER_POST).unwrap();
        let artifacts = generate_artifacts(&doc).unwrap();

        let resources: Vec<_> = artifacts
            .iter()
            .filter(|a| a.kind == ArtifactKind::Resource)
            .collect();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].entity, "User");
    }

    #[test]
    fn test_generation_is_idempotent() {
        let doc = schema::compile(USER_POST).unwrap();
        let first = generate_artifacts(&doc).unwrap();
        let second = generate_artifacts(&doc).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.filename, b.filename);
            assert_eq!(a.content, b.content);
        }
    }

    #[test]
    fn test_post_migration_declares_foreign_key() {
        let doc = schema::compile(USER_POST).unwrap();
        let artifacts = generate_artifacts(&doc).unwrap();
        let post_migration = artifacts
            .iter()
            .find(|a| a.kind == ArtifactKind::Migration && a.entity == "Post")
            .unwrap();
        assert!(post_migration
            .content
            .contains("$table->foreign('user_id')->references('id')->on('users');"));
    }
}
