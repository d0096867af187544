//! Error types for the schema compiler and artifact generators.
//!
//! Two layers: `SchemaError` describes a single problem in a schema (every
//! variant names the offending entity/column/relation so diagnostics are
//! actionable), and `GeneratorError` is what a pipeline run fails with —
//! either a single hard failure (I/O, YAML syntax, rendering) or the full
//! accumulated list of schema problems. Nothing is written to disk once any
//! problem has been recorded.

use thiserror::Error;

/// A single problem detected while validating or resolving a schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{context}: {message}")]
    Structure { context: String, message: String },

    #[error("entity '{entity}': missing required key '{key}'")]
    MissingKey { entity: String, key: String },

    #[error("entity '{entity}': 'columns' must contain at least one column")]
    EmptyColumns { entity: String },

    #[error("entity '{entity}': unknown key '{key}'")]
    UnknownKey { entity: String, key: String },

    #[error("entity '{entity}': duplicate {kind} name '{name}'")]
    DuplicateName {
        entity: String,
        kind: &'static str,
        name: String,
    },

    #[error("entity '{entity}', column '{column}': unsupported column type '{type_name}'")]
    UnsupportedType {
        entity: String,
        column: String,
        type_name: String,
    },

    #[error(
        "entity '{entity}', column '{column}': attribute '{attribute}' is not valid for type '{type_name}'"
    )]
    InvalidAttribute {
        entity: String,
        column: String,
        attribute: String,
        type_name: String,
    },

    #[error("entity '{entity}', column '{column}': {message}")]
    InvalidColumnValue {
        entity: String,
        column: String,
        message: String,
    },

    #[error("entity '{entity}', relation '{relation}': unknown relation type '{kind}'")]
    UnknownRelationKind {
        entity: String,
        relation: String,
        kind: String,
    },

    #[error("entity '{entity}', relation '{relation}': target entity '{target}' is not declared")]
    UnresolvedRelation {
        entity: String,
        relation: String,
        target: String,
    },

    #[error(
        "entity '{entity}', column '{column}': foreign key references unknown table '{table}'"
    )]
    UnresolvedForeignTable {
        entity: String,
        column: String,
        table: String,
    },

    #[error(
        "entity '{entity}', column '{column}': foreign key references unknown column '{table}.{target_column}'"
    )]
    UnresolvedForeignColumn {
        entity: String,
        column: String,
        table: String,
        target_column: String,
    },

    #[error(
        "entity '{entity}', relation '{relation}': expected foreign-key column '{expected_column}' is not declared"
    )]
    InconsistentRelation {
        entity: String,
        relation: String,
        expected_column: String,
    },

    #[error(
        "entity '{entity}': filament {section} references unknown column '{column}'"
    )]
    UnknownAdminColumn {
        entity: String,
        section: &'static str,
        column: String,
    },

    #[error("cyclic foreign-key dependency: {}", cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },
}

/// Failure of a full generation run.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("failed to read schema file '{path}': {source}")]
    SchemaRead {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML syntax error: {0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("schema is invalid:\n{}", format_problems(.0))]
    Invalid(Vec<SchemaError>),

    #[error("template references unknown placeholder '{{{{{placeholder}}}}}'")]
    MissingPlaceholder { placeholder: String },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

fn format_problems(problems: &[SchemaError]) -> String {
    problems
        .iter()
        .map(|p| format!("  - {p}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl GeneratorError {
    /// Wraps an accumulated problem list, which must be non-empty.
    pub fn invalid(problems: Vec<SchemaError>) -> Self {
        debug_assert!(!problems.is_empty());
        GeneratorError::Invalid(problems)
    }
}
