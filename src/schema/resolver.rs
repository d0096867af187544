//! Cross-entity reference resolution.
//!
//! Stage three of the pipeline. Runs once the whole document is assembled,
//! because the checks here span entities:
//!
//! - every relation `model` must name a declared entity
//! - every `foreign: <table>.<column>` must resolve to a declared entity's
//!   table, and the referenced column must exist on that entity
//! - every filament form field / table column must name a column on the
//!   owning entity
//! - every belongsTo relation must have its (explicit or inferred)
//!   foreign-key column declared on the owning entity
//!
//! Like the validator, all problems are accumulated before failing.

use crate::error::{GeneratorError, SchemaError};
use crate::schema::model::SchemaDocument;

/// Checks every cross-entity reference in the document, or fails with the
/// full list of unresolved/inconsistent references.
pub fn resolve(doc: &SchemaDocument) -> Result<(), GeneratorError> {
    let mut problems = Vec::new();

    for entity in doc.iter() {
        for relation in &entity.relations {
            if doc.get(&relation.target).is_none() {
                problems.push(SchemaError::UnresolvedRelation {
                    entity: entity.name.clone(),
                    relation: relation.name.clone(),
                    target: relation.target.clone(),
                });
                continue;
            }

            // Cross-checked, never auto-created.
            if let Some(expected) = relation.expected_foreign_key() {
                if !entity.has_column(&expected) {
                    problems.push(SchemaError::InconsistentRelation {
                        entity: entity.name.clone(),
                        relation: relation.name.clone(),
                        expected_column: expected,
                    });
                }
            }
        }

        for column in &entity.columns {
            let Some(fk) = &column.foreign else { continue };
            match doc.entity_by_table(&fk.table) {
                None => problems.push(SchemaError::UnresolvedForeignTable {
                    entity: entity.name.clone(),
                    column: column.name.clone(),
                    table: fk.table.clone(),
                }),
                Some(target) => {
                    if !target.has_column(&fk.column) {
                        problems.push(SchemaError::UnresolvedForeignColumn {
                            entity: entity.name.clone(),
                            column: column.name.clone(),
                            table: fk.table.clone(),
                            target_column: fk.column.clone(),
                        });
                    }
                }
            }
        }

        if let Some(admin) = &entity.admin {
            for field in &admin.form_fields {
                if !entity.has_column(field) {
                    problems.push(SchemaError::UnknownAdminColumn {
                        entity: entity.name.clone(),
                        section: "form field",
                        column: field.clone(),
                    });
                }
            }
            for column in &admin.table_columns {
                if !entity.has_column(column) {
                    problems.push(SchemaError::UnknownAdminColumn {
                        entity: entity.name.clone(),
                        section: "table column",
                        column: column.clone(),
                    });
                }
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(GeneratorError::invalid(problems))
    }
}
