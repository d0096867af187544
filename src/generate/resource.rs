//! Filament resource artifact generation.
//!
//! Renders the admin-panel resource for an entity with a `filament` block:
//! form fields become `TextInput` components, table columns become
//! `TextColumn` components, both in declaration order. Column references
//! were checked by the resolver, so this stage assumes validity.

use crate::error::GeneratorError;
use crate::generate::template;
use crate::generate::{ArtifactKind, GeneratedArtifact};
use crate::schema::model::{AdminConfig, EntityDefinition, SchemaDocument};

const RESOURCE_STUB: &str = include_str!("stubs/resource.stub");

/// Renders the resource artifact for one entity with admin configuration.
pub fn generate_resource(
    entity: &EntityDefinition,
    admin: &AdminConfig,
    _doc: &SchemaDocument,
) -> Result<GeneratedArtifact, GeneratorError> {
    let form_fields = component_list(
        &admin.form_fields,
        "Forms\\Components\\TextInput::make",
    );
    let table_columns = component_list(
        &admin.table_columns,
        "Tables\\Columns\\TextColumn::make",
    );

    let content = template::render(
        RESOURCE_STUB,
        &[
            ("model", entity.name.clone()),
            ("formFields", form_fields),
            ("tableColumns", table_columns),
        ],
    )?;

    Ok(GeneratedArtifact {
        kind: ArtifactKind::Resource,
        entity: entity.name.clone(),
        filename: format!("{}Resource.php", entity.name),
        content,
    })
}

fn component_list(names: &[String], constructor: &str) -> String {
    names
        .iter()
        .map(|name| format!("{constructor}('{name}')"))
        .collect::<Vec<_>>()
        .join(",\n                ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::model::{ColumnDefinition, ColumnType};

    fn user_entity() -> (EntityDefinition, AdminConfig) {
        let admin = AdminConfig {
            form_fields: vec!["name".to_string(), "email".to_string()],
            table_columns: vec!["id".to_string(), "name".to_string()],
        };
        let entity = EntityDefinition {
            name: "User".to_string(),
            table: "users".to_string(),
            columns: vec![
                ColumnDefinition::new("id", ColumnType::Id),
                ColumnDefinition::new("name", ColumnType::String),
                ColumnDefinition::new("email", ColumnType::String),
            ],
            relations: vec![],
            admin: Some(admin.clone()),
        };
        (entity, admin)
    }

    #[test]
    fn test_resource_class_name_and_model() {
        let (entity, admin) = user_entity();
        let artifact =
            generate_resource(&entity, &admin, &SchemaDocument::default()).unwrap();
        assert_eq!(artifact.filename, "UserResource.php");
        assert!(artifact.content.contains("class UserResource extends Resource"));
        assert!(artifact
            .content
            .contains("protected static ?string $model = User::class;"));
    }

    #[test]
    fn test_form_fields_in_declaration_order() {
        let (entity, admin) = user_entity();
        let artifact =
            generate_resource(&entity, &admin, &SchemaDocument::default()).unwrap();
        let name_pos = artifact
            .content
            .find("Forms\\Components\\TextInput::make('name')")
            .unwrap();
        let email_pos = artifact
            .content
            .find("Forms\\Components\\TextInput::make('email')")
            .unwrap();
        assert!(name_pos < email_pos);
    }

    #[test]
    fn test_table_columns_rendered() {
        let (entity, admin) = user_entity();
        let artifact =
            generate_resource(&entity, &admin, &SchemaDocument::default()).unwrap();
        assert!(artifact
            .content
            .contains("Tables\\Columns\\TextColumn::make('id')"));
        assert!(artifact
            .content
            .contains("Tables\\Columns\\TextColumn::make('name')"));
    }

    #[test]
    fn test_empty_sections_render() {
        let entity = EntityDefinition {
            name: "Log".to_string(),
            table: "logs".to_string(),
            columns: vec![ColumnDefinition::new("id", ColumnType::Id)],
            relations: vec![],
            admin: Some(AdminConfig::default()),
        };
        let artifact = generate_resource(
            &entity,
            &AdminConfig::default(),
            &SchemaDocument::default(),
        )
        .unwrap();
        assert!(artifact.content.contains("->schema(["));
        assert!(artifact.content.contains("->columns(["));
    }
}
