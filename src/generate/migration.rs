//! Migration artifact generation.
//!
//! Renders one `Schema::create` migration per entity. Column calls come from
//! the `ColumnType::builder_method()` mapping table; foreign-key constraints
//! are emitted after the column list. The filename sequence token is derived
//! from the topological order, never wall-clock time, so identical input
//! yields identical filenames.

use crate::error::GeneratorError;
use crate::generate::template;
use crate::generate::{ArtifactKind, GeneratedArtifact};
use crate::schema::model::{ColumnDefinition, EntityDefinition, SchemaDocument};

const MIGRATION_STUB: &str = include_str!("stubs/migration.stub");

/// Fixed logical date token for migration filenames.
///
/// Laravel orders migrations lexically by filename; a constant epoch plus the
/// orderer's sequence number gives reproducible ordering across runs.
const MIGRATION_EPOCH: &str = "0001_01_01";

/// Renders the migration artifact for one entity.
///
/// `sequence` is the entity's 1-based position in the topological order.
pub fn generate_migration(
    entity: &EntityDefinition,
    _doc: &SchemaDocument,
    sequence: usize,
) -> Result<GeneratedArtifact, GeneratorError> {
    let mut lines: Vec<String> = entity.columns.iter().map(column_call).collect();

    // Constraints follow the column definitions, as hand-written migrations do.
    for column in &entity.columns {
        if let Some(fk) = &column.foreign {
            lines.push(format!(
                "$table->foreign('{}')->references('{}')->on('{}');",
                column.name, fk.column, fk.table
            ));
        }
    }

    let content = template::render(
        MIGRATION_STUB,
        &[
            ("table", entity.table.clone()),
            ("columns", lines.join("\n            ")),
        ],
    )?;

    Ok(GeneratedArtifact {
        kind: ArtifactKind::Migration,
        entity: entity.name.clone(),
        filename: migration_filename(sequence, &entity.table),
        content,
    })
}

/// `<epoch>_<seq>_create_<table>_table.php`
pub fn migration_filename(sequence: usize, table: &str) -> String {
    format!("{MIGRATION_EPOCH}_{sequence:06}_create_{table}_table.php")
}

/// Renders a single `$table->...;` builder call for a column.
fn column_call(column: &ColumnDefinition) -> String {
    let method = column.column_type.builder_method();

    let mut call = if !column.column_type.named_in_builder() {
        // id() and timestamps() name their columns themselves; timestamps
        // expands to the paired created_at/updated_at form here.
        format!("$table->{method}()")
    } else if let Some(length) = column.length {
        format!("$table->{method}('{}', {length})", column.name)
    } else {
        format!("$table->{method}('{}')", column.name)
    };

    if column.nullable {
        call.push_str("->nullable()");
    }
    if column.unique {
        call.push_str("->unique()");
    }
    if let Some(default) = &column.default {
        call.push_str(&format!("->default({})", default.to_php_literal()));
    }
    call.push(';');
    call
}
