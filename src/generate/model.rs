//! Eloquent model artifact generation.
//!
//! Renders the model class for one entity: table binding, mass-assignment
//! list, hidden-on-serialize list, and one relation method per declared
//! relation, dispatched on the relation kind.

use crate::error::GeneratorError;
use crate::generate::template;
use crate::generate::{ArtifactKind, GeneratedArtifact};
use crate::schema::model::{ColumnType, EntityDefinition, RelationDefinition, SchemaDocument};

const MODEL_STUB: &str = include_str!("stubs/model.stub");

/// Renders the model artifact for one entity.
pub fn generate_model(
    entity: &EntityDefinition,
    _doc: &SchemaDocument,
) -> Result<GeneratedArtifact, GeneratorError> {
    let fillable = quoted_list(entity.columns.iter().filter_map(|c| {
        // Framework-managed columns are never mass-assigned.
        (!matches!(c.column_type, ColumnType::Id | ColumnType::Timestamps))
            .then_some(c.name.as_str())
    }));

    let hidden = quoted_list(
        entity
            .columns
            .iter()
            .filter(|c| c.hidden)
            .map(|c| c.name.as_str()),
    );

    let content = template::render(
        MODEL_STUB,
        &[
            ("model", entity.name.clone()),
            ("table", entity.table.clone()),
            ("fillable", fillable),
            ("hidden", hidden),
            ("relations", relation_methods(&entity.relations)),
        ],
    )?;

    Ok(GeneratedArtifact {
        kind: ArtifactKind::Model,
        entity: entity.name.clone(),
        filename: format!("{}.php", entity.name),
        content,
    })
}

fn quoted_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn relation_methods(relations: &[RelationDefinition]) -> String {
    if relations.is_empty() {
        return String::new();
    }

    let methods = relations
        .iter()
        .map(relation_method)
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("\n{methods}\n")
}

/// One relation stub, e.g.
///
/// ```php
///     public function posts()
///     {
///         return $this->hasMany(Post::class);
///     }
/// ```
fn relation_method(relation: &RelationDefinition) -> String {
    let args = match &relation.foreign_key {
        // An explicit foreign key is passed through; the inferred
        // conventional name is left to the framework.
        Some(fk) => format!("{}::class, '{}'", relation.target, fk),
        None => format!("{}::class", relation.target),
    };
    format!(
        "    public function {}()\n    {{\n        return $this->{}({});\n    }}",
        relation.name,
        relation.kind.method_name(),
        args
    )
}
