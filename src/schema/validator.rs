//! Schema validation and normalization.
//!
//! Stage two of the pipeline: converts the untyped YAML tree into a typed
//! `SchemaDocument`. Problems are accumulated across all entities before the
//! run fails, so a single invocation reports everything wrong with a schema.
//!
//! Normalization applied here:
//! - a missing `table` defaults to the pluralized snake_case entity name
//! - a missing column `type` defaults to `string`
//! - `timestamps` stays a single marker column, not two synthetic ones
//!
//! Cross-entity checks (relation targets, foreign-key tables, admin column
//! references) need the complete document and live in the resolver.

use serde_yaml::{Mapping, Value};

use crate::error::{GeneratorError, SchemaError};
use crate::schema::model::{
    AdminConfig, ColumnAttribute, ColumnDefinition, ColumnType, DefaultValue, EntityDefinition,
    ForeignKeyRef, RelationDefinition, RelationKind, SchemaDocument,
};
use crate::utils;

/// Validates the untyped tree into a typed document, or fails with every
/// problem found.
pub fn validate(tree: &Value) -> Result<SchemaDocument, GeneratorError> {
    let mut problems = Vec::new();
    let mut doc = SchemaDocument::default();

    let Some(root) = tree.as_mapping() else {
        problems.push(SchemaError::Structure {
            context: "schema".to_string(),
            message: "document root must be a mapping of entity definitions".to_string(),
        });
        return Err(GeneratorError::invalid(problems));
    };

    for (key, value) in root {
        let Some(entity_name) = key.as_str() else {
            problems.push(SchemaError::Structure {
                context: "schema".to_string(),
                message: format!("entity name must be a string, got {}", type_name(key)),
            });
            continue;
        };

        if let Some(entity) = validate_entity(entity_name, value, &mut problems) {
            if doc.entities.insert(entity_name.to_string(), entity).is_some() {
                problems.push(SchemaError::DuplicateName {
                    entity: entity_name.to_string(),
                    kind: "entity",
                    name: entity_name.to_string(),
                });
            }
        }
    }

    if problems.is_empty() {
        Ok(doc)
    } else {
        Err(GeneratorError::invalid(problems))
    }
}

fn validate_entity(
    entity: &str,
    value: &Value,
    problems: &mut Vec<SchemaError>,
) -> Option<EntityDefinition> {
    let Some(body) = value.as_mapping() else {
        problems.push(SchemaError::Structure {
            context: format!("entity '{entity}'"),
            message: "entity body must be a mapping".to_string(),
        });
        return None;
    };

    for key in body.keys() {
        match key.as_str() {
            Some("table" | "columns" | "relations" | "filament") => {}
            Some(other) => problems.push(SchemaError::UnknownKey {
                entity: entity.to_string(),
                key: other.to_string(),
            }),
            None => problems.push(SchemaError::Structure {
                context: format!("entity '{entity}'"),
                message: "entity keys must be strings".to_string(),
            }),
        }
    }

    let table = match body.get("table") {
        None => utils::tableize(entity),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            problems.push(SchemaError::Structure {
                context: format!("entity '{entity}'"),
                message: format!("'table' must be a string, got {}", type_name(other)),
            });
            return None;
        }
    };

    let columns = validate_columns(entity, body, problems);
    let relations = validate_relations(entity, body, &columns, problems);
    let admin = validate_admin(entity, body, problems);

    Some(EntityDefinition {
        name: entity.to_string(),
        table,
        columns,
        relations,
        admin,
    })
}

fn validate_columns(
    entity: &str,
    body: &Mapping,
    problems: &mut Vec<SchemaError>,
) -> Vec<ColumnDefinition> {
    let Some(columns_value) = body.get("columns") else {
        problems.push(SchemaError::MissingKey {
            entity: entity.to_string(),
            key: "columns".to_string(),
        });
        return Vec::new();
    };

    let Some(columns) = columns_value.as_mapping() else {
        problems.push(SchemaError::Structure {
            context: format!("entity '{entity}'"),
            message: "'columns' must be a mapping of column definitions".to_string(),
        });
        return Vec::new();
    };

    if columns.is_empty() {
        problems.push(SchemaError::EmptyColumns {
            entity: entity.to_string(),
        });
        return Vec::new();
    }

    let mut out = Vec::with_capacity(columns.len());
    for (key, value) in columns {
        let Some(column_name) = key.as_str() else {
            problems.push(SchemaError::Structure {
                context: format!("entity '{entity}'"),
                message: "column names must be strings".to_string(),
            });
            continue;
        };
        if let Some(column) = validate_column(entity, column_name, value, problems) {
            out.push(column);
        }
    }
    out
}

fn validate_column(
    entity: &str,
    column: &str,
    value: &Value,
    problems: &mut Vec<SchemaError>,
) -> Option<ColumnDefinition> {
    let Some(body) = value.as_mapping() else {
        problems.push(SchemaError::Structure {
            context: format!("entity '{entity}', column '{column}'"),
            message: "column body must be a mapping".to_string(),
        });
        return None;
    };

    let column_type = match body.get("type") {
        // Bare declarations default to string, matching the original tool.
        None => ColumnType::String,
        Some(Value::String(keyword)) => match ColumnType::from_keyword(keyword) {
            Some(ty) => ty,
            None => {
                problems.push(SchemaError::UnsupportedType {
                    entity: entity.to_string(),
                    column: column.to_string(),
                    type_name: keyword.clone(),
                });
                return None;
            }
        },
        Some(other) => {
            problems.push(SchemaError::InvalidColumnValue {
                entity: entity.to_string(),
                column: column.to_string(),
                message: format!("'type' must be a string, got {}", type_name(other)),
            });
            return None;
        }
    };

    let mut def = ColumnDefinition::new(column, column_type);
    let before = problems.len();

    for (key, attr_value) in body {
        let Some(key_str) = key.as_str() else {
            problems.push(SchemaError::InvalidColumnValue {
                entity: entity.to_string(),
                column: column.to_string(),
                message: "attribute keys must be strings".to_string(),
            });
            continue;
        };
        if key_str == "type" {
            continue;
        }
        let Some(attribute) = ColumnAttribute::from_keyword(key_str) else {
            problems.push(SchemaError::InvalidColumnValue {
                entity: entity.to_string(),
                column: column.to_string(),
                message: format!("unknown attribute '{key_str}'"),
            });
            continue;
        };

        // Attribute/type compatibility is a hard error, not a warning.
        if !column_type.allows_attribute(attribute) {
            problems.push(SchemaError::InvalidAttribute {
                entity: entity.to_string(),
                column: column.to_string(),
                attribute: attribute.keyword().to_string(),
                type_name: column_type.keyword().to_string(),
            });
            continue;
        }

        apply_attribute(entity, column, attribute, attr_value, &mut def, problems);
    }

    (problems.len() == before).then_some(def)
}

fn apply_attribute(
    entity: &str,
    column: &str,
    attribute: ColumnAttribute,
    value: &Value,
    def: &mut ColumnDefinition,
    problems: &mut Vec<SchemaError>,
) {
    let mut bad_value = |message: String| {
        problems.push(SchemaError::InvalidColumnValue {
            entity: entity.to_string(),
            column: column.to_string(),
            message,
        });
    };

    match attribute {
        ColumnAttribute::Length => match value.as_u64() {
            Some(n) if n > 0 && n <= u32::MAX as u64 => def.length = Some(n as u32),
            _ => bad_value("'length' must be a positive integer".to_string()),
        },
        ColumnAttribute::Unique => match value.as_bool() {
            Some(b) => def.unique = b,
            None => bad_value("'unique' must be a boolean".to_string()),
        },
        ColumnAttribute::Hidden => match value.as_bool() {
            Some(b) => def.hidden = b,
            None => bad_value("'hidden' must be a boolean".to_string()),
        },
        ColumnAttribute::Nullable => match value.as_bool() {
            Some(b) => def.nullable = b,
            None => bad_value("'nullable' must be a boolean".to_string()),
        },
        ColumnAttribute::Default => match value {
            Value::String(s) => def.default = Some(DefaultValue::String(s.clone())),
            Value::Bool(b) => def.default = Some(DefaultValue::Bool(*b)),
            Value::Number(n) => {
                def.default = Some(if let Some(i) = n.as_i64() {
                    DefaultValue::Integer(i)
                } else {
                    DefaultValue::Float(n.as_f64().unwrap_or_default())
                });
            }
            _ => bad_value("'default' must be a scalar".to_string()),
        },
        ColumnAttribute::Foreign => match value.as_str() {
            Some(raw) => match ForeignKeyRef::parse(raw) {
                Some(fk) => def.foreign = Some(fk),
                None => bad_value(format!(
                    "'foreign' must use the <table>.<column> format, got '{raw}'"
                )),
            },
            None => bad_value("'foreign' must be a string".to_string()),
        },
    }
}

fn validate_relations(
    entity: &str,
    body: &Mapping,
    columns: &[ColumnDefinition],
    problems: &mut Vec<SchemaError>,
) -> Vec<RelationDefinition> {
    let Some(relations_value) = body.get("relations") else {
        return Vec::new();
    };

    let Some(relations) = relations_value.as_mapping() else {
        problems.push(SchemaError::Structure {
            context: format!("entity '{entity}'"),
            message: "'relations' must be a mapping of relation definitions".to_string(),
        });
        return Vec::new();
    };

    let mut out = Vec::with_capacity(relations.len());
    for (key, value) in relations {
        let Some(relation_name) = key.as_str() else {
            problems.push(SchemaError::Structure {
                context: format!("entity '{entity}'"),
                message: "relation names must be strings".to_string(),
            });
            continue;
        };

        if columns.iter().any(|c| c.name == relation_name) {
            problems.push(SchemaError::DuplicateName {
                entity: entity.to_string(),
                kind: "relation",
                name: relation_name.to_string(),
            });
            continue;
        }

        if let Some(relation) = validate_relation(entity, relation_name, value, problems) {
            out.push(relation);
        }
    }
    out
}

fn validate_relation(
    entity: &str,
    relation: &str,
    value: &Value,
    problems: &mut Vec<SchemaError>,
) -> Option<RelationDefinition> {
    let context = format!("entity '{entity}', relation '{relation}'");

    let Some(body) = value.as_mapping() else {
        problems.push(SchemaError::Structure {
            context,
            message: "relation body must be a mapping".to_string(),
        });
        return None;
    };

    for key in body.keys() {
        match key.as_str() {
            Some("type" | "model" | "foreignKey") => {}
            other => problems.push(SchemaError::Structure {
                context: context.clone(),
                message: format!(
                    "unknown relation key '{}'",
                    other.unwrap_or("<non-string>")
                ),
            }),
        }
    }

    let kind = match body.get("type").and_then(Value::as_str) {
        Some(keyword) => match RelationKind::from_keyword(keyword) {
            Some(kind) => kind,
            None => {
                problems.push(SchemaError::UnknownRelationKind {
                    entity: entity.to_string(),
                    relation: relation.to_string(),
                    kind: keyword.to_string(),
                });
                return None;
            }
        },
        None => {
            problems.push(SchemaError::Structure {
                context,
                message: "missing required key 'type'".to_string(),
            });
            return None;
        }
    };

    let Some(target) = body.get("model").and_then(Value::as_str) else {
        problems.push(SchemaError::Structure {
            context,
            message: "missing required key 'model'".to_string(),
        });
        return None;
    };

    let foreign_key = match body.get("foreignKey") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            problems.push(SchemaError::Structure {
                context,
                message: "'foreignKey' must be a string".to_string(),
            });
            return None;
        }
    };

    Some(RelationDefinition {
        name: relation.to_string(),
        kind,
        target: target.to_string(),
        foreign_key,
    })
}

fn validate_admin(
    entity: &str,
    body: &Mapping,
    problems: &mut Vec<SchemaError>,
) -> Option<AdminConfig> {
    let filament = body.get("filament")?;

    let Some(filament) = filament.as_mapping() else {
        problems.push(SchemaError::Structure {
            context: format!("entity '{entity}'"),
            message: "'filament' must be a mapping".to_string(),
        });
        return None;
    };

    for key in filament.keys() {
        match key.as_str() {
            Some("form" | "table") => {}
            other => problems.push(SchemaError::Structure {
                context: format!("entity '{entity}', filament"),
                message: format!("unknown key '{}'", other.unwrap_or("<non-string>")),
            }),
        }
    }

    let form_fields = string_sequence(entity, filament, "form", "fields", problems);
    let table_columns = string_sequence(entity, filament, "table", "columns", problems);

    Some(AdminConfig {
        form_fields,
        table_columns,
    })
}

/// Extracts `filament.<section>.<key>` as a list of strings, defaulting to
/// empty when the section is absent.
fn string_sequence(
    entity: &str,
    filament: &Mapping,
    section: &str,
    key: &str,
    problems: &mut Vec<SchemaError>,
) -> Vec<String> {
    let context = format!("entity '{entity}', filament {section}");

    let Some(section_value) = filament.get(section) else {
        return Vec::new();
    };
    let Some(section_body) = section_value.as_mapping() else {
        problems.push(SchemaError::Structure {
            context,
            message: format!("'{section}' must be a mapping"),
        });
        return Vec::new();
    };
    let Some(list) = section_body.get(key) else {
        problems.push(SchemaError::Structure {
            context,
            message: format!("missing required key '{key}'"),
        });
        return Vec::new();
    };
    let Some(items) = list.as_sequence() else {
        problems.push(SchemaError::Structure {
            context,
            message: format!("'{key}' must be a sequence of strings"),
        });
        return Vec::new();
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(s) => out.push(s.to_string()),
            None => problems.push(SchemaError::Structure {
                context: context.clone(),
                message: format!("'{key}' entries must be strings"),
            }),
        }
    }
    out
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
