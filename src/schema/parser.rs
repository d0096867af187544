//! Schema text parsing.
//!
//! Stage one of the pipeline: raw YAML text into an untyped value tree.
//! No semantic interpretation happens here; the validator owns that. Syntax
//! failures carry serde_yaml's location information ("at line N column M").

use serde_yaml::Value;

use crate::error::GeneratorError;

/// Parses schema source text into an untyped YAML tree.
///
/// The returned tree preserves mapping key order (serde_yaml mappings are
/// insertion-ordered), which the rest of the pipeline relies on for
/// deterministic output.
pub fn parse_schema_text(source: &str) -> Result<Value, GeneratorError> {
    let value: Value = serde_yaml::from_str(source)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_entity_mapping() {
        let tree = parse_schema_text("User:\n  table: users\n").unwrap();
        let mapping = tree.as_mapping().unwrap();
        assert!(mapping.contains_key(Value::from("User")));
    }

    #[test]
    fn test_mapping_order_is_preserved() {
        let tree = parse_schema_text("Beta:\n  table: betas\nAlpha:\n  table: alphas\n").unwrap();
        let keys: Vec<_> = tree
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_syntax_error_reports_location() {
        let err = parse_schema_text("User: [users, posts\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("YAML syntax error:"), "got: {msg}");
        assert!(msg.contains("line"), "location missing from: {msg}");
    }

    #[test]
    fn test_empty_document_parses_to_null() {
        let tree = parse_schema_text("").unwrap();
        assert!(tree.is_null());
    }
}
