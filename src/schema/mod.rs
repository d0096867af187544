//! Schema compiler: YAML text to a validated, resolved schema model.
//!
//! # Overview
//!
//! The compiler runs in four stages, each in its own module:
//!
//! 1. **Parser** (`parser.rs`): raw YAML text into an untyped value tree.
//!    Detects syntax errors; knows nothing about columns or relations.
//! 2. **Validator** (`validator.rs`): untyped tree into a typed
//!    `SchemaDocument`. Normalizes defaults (table names, column types) and
//!    accumulates every structural problem before failing.
//! 3. **Resolver** (`resolver.rs`): cross-entity checks — relation targets,
//!    `foreign` table/column references, filament column references, and
//!    belongsTo foreign-key consistency.
//! 4. **Orderer** (`graph.rs`): derives the foreign-key `DependencyGraph`
//!    and computes a stable topological order for migration emission.
//!
//! `compile()` chains all four; the returned document is immutable input for
//! the artifact generators.

pub mod graph;
pub mod model;
pub mod parser;
pub mod resolver;
pub mod validator;

pub use graph::DependencyGraph;
pub use model::{
    AdminConfig, ColumnAttribute, ColumnDefinition, ColumnType, DefaultValue, EntityDefinition,
    ForeignKeyRef, RelationDefinition, RelationKind, SchemaDocument,
};

use crate::error::GeneratorError;

/// Compiles schema source text into a validated, fully resolved document.
///
/// The dependency graph is also checked for cycles here, so a document this
/// function returns is safe to generate from.
pub fn compile(source: &str) -> Result<SchemaDocument, GeneratorError> {
    let tree = parser::parse_schema_text(source)?;
    let doc = validator::validate(&tree)?;
    resolver::resolve(&doc)?;
    DependencyGraph::build(&doc).topological_order()?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_valid_schema() {
        let doc = compile(
            "User:\n  columns:\n    id:\n      type: id\n    name:\n      type: string\n",
        )
        .unwrap();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_compile_rejects_syntax_error() {
        let err = compile("User:\n\tcolumns: {}\n").unwrap_err();
        assert!(matches!(err, GeneratorError::Syntax(_)));
    }

    #[test]
    fn test_compile_rejects_unresolved_relation() {
        let err = compile(
            "User:\n  columns:\n    id:\n      type: id\n  relations:\n    posts:\n      type: hasMany\n      model: Post\n",
        )
        .unwrap_err();
        assert!(matches!(err, GeneratorError::Invalid(_)));
    }

    #[test]
    fn test_compile_rejects_cycle() {
        let err = compile(
            "A:\n  table: as\n  columns:\n    id:\n      type: id\n    b_id:\n      type: unsignedBigInteger\n      foreign: bs.id\nB:\n  table: bs\n  columns:\n    id:\n      type: id\n    a_id:\n      type: unsignedBigInteger\n      foreign: as.id\n",
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("cyclic foreign-key dependency"), "got: {msg}");
    }
}
