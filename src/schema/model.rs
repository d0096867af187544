//! Typed schema model.
//!
//! The in-memory representation a schema is compiled into before anything is
//! generated. Downstream components (resolver, orderer, generators) only see
//! these types; the untyped YAML tree never leaves the validator.

use indexmap::IndexMap;

use crate::utils;

/// Supported column types.
///
/// Each type maps to exactly one Laravel schema-builder method via
/// `builder_method()`; the mapping is the authoritative type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Auto-increment primary key
    Id,
    /// Variable-length string (honors `length`, Laravel default 255)
    String,
    /// Unbounded text
    Text,
    /// Signed integer
    Integer,
    /// Unsigned 64-bit integer
    UnsignedBigInteger,
    /// Paired created_at/updated_at timestamp columns.
    ///
    /// Kept as a single marker column so the model round-trips the source
    /// declaration; the migration generator expands it to the paired form.
    Timestamps,
}

impl ColumnType {
    /// Parses a schema keyword into a column type.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "id" => Some(ColumnType::Id),
            "string" => Some(ColumnType::String),
            "text" => Some(ColumnType::Text),
            "integer" => Some(ColumnType::Integer),
            "unsignedBigInteger" => Some(ColumnType::UnsignedBigInteger),
            "timestamps" => Some(ColumnType::Timestamps),
            _ => None,
        }
    }

    /// Returns the schema keyword for this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            ColumnType::Id => "id",
            ColumnType::String => "string",
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::UnsignedBigInteger => "unsignedBigInteger",
            ColumnType::Timestamps => "timestamps",
        }
    }

    /// Returns the Laravel schema-builder method for this type.
    pub fn builder_method(&self) -> &'static str {
        // The keyword set is chosen to match Laravel's builder verbatim.
        self.keyword()
    }

    /// Whether the builder method takes the column name as an argument.
    ///
    /// `id()` and `timestamps()` name their columns themselves.
    pub fn named_in_builder(&self) -> bool {
        !matches!(self, ColumnType::Id | ColumnType::Timestamps)
    }

    /// Whether `attribute` may be declared on a column of this type.
    pub fn allows_attribute(&self, attribute: ColumnAttribute) -> bool {
        use ColumnAttribute::*;
        match self {
            // id() and timestamps() are fully framework-managed
            ColumnType::Id | ColumnType::Timestamps => false,
            ColumnType::String => true,
            ColumnType::Text => !matches!(attribute, Length | Foreign),
            ColumnType::Integer | ColumnType::UnsignedBigInteger => {
                !matches!(attribute, Length)
            }
        }
    }
}

/// Optional attributes a column declaration may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAttribute {
    Length,
    Unique,
    Hidden,
    Nullable,
    Default,
    Foreign,
}

impl ColumnAttribute {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "length" => Some(ColumnAttribute::Length),
            "unique" => Some(ColumnAttribute::Unique),
            "hidden" => Some(ColumnAttribute::Hidden),
            "nullable" => Some(ColumnAttribute::Nullable),
            "default" => Some(ColumnAttribute::Default),
            "foreign" => Some(ColumnAttribute::Foreign),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            ColumnAttribute::Length => "length",
            ColumnAttribute::Unique => "unique",
            ColumnAttribute::Hidden => "hidden",
            ColumnAttribute::Nullable => "nullable",
            ColumnAttribute::Default => "default",
            ColumnAttribute::Foreign => "foreign",
        }
    }
}

/// A scalar default value, preserved with enough type information to render
/// it back out as a PHP literal.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl DefaultValue {
    /// Renders the value as a PHP literal for `->default(...)`.
    pub fn to_php_literal(&self) -> String {
        match self {
            DefaultValue::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            DefaultValue::Integer(n) => n.to_string(),
            DefaultValue::Float(f) => f.to_string(),
            DefaultValue::Bool(true) => "true".to_string(),
            DefaultValue::Bool(false) => "false".to_string(),
        }
    }
}

/// A `<table>.<column>` foreign-key reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    pub table: String,
    pub column: String,
}

impl ForeignKeyRef {
    /// Parses the `foreign: <table>.<column>` attribute format.
    pub fn parse(raw: &str) -> Option<Self> {
        let (table, column) = raw.split_once('.')?;
        if table.is_empty() || column.is_empty() || column.contains('.') {
            return None;
        }
        Some(ForeignKeyRef {
            table: table.to_string(),
            column: column.to_string(),
        })
    }
}

/// A single column declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub column_type: ColumnType,
    pub length: Option<u32>,
    pub unique: bool,
    pub hidden: bool,
    pub nullable: bool,
    pub default: Option<DefaultValue>,
    pub foreign: Option<ForeignKeyRef>,
}

impl ColumnDefinition {
    /// A bare column of the given type with no attributes set.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        ColumnDefinition {
            name: name.into(),
            column_type,
            length: None,
            unique: false,
            hidden: false,
            nullable: false,
            default: None,
            foreign: None,
        }
    }
}

/// Relation cardinality/direction between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    HasMany,
    BelongsTo,
    HasOne,
    BelongsToMany,
}

impl RelationKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "hasMany" => Some(RelationKind::HasMany),
            "belongsTo" => Some(RelationKind::BelongsTo),
            "hasOne" => Some(RelationKind::HasOne),
            "belongsToMany" => Some(RelationKind::BelongsToMany),
            _ => None,
        }
    }

    /// Returns the Eloquent relation method name.
    pub fn method_name(&self) -> &'static str {
        match self {
            RelationKind::HasMany => "hasMany",
            RelationKind::BelongsTo => "belongsTo",
            RelationKind::HasOne => "hasOne",
            RelationKind::BelongsToMany => "belongsToMany",
        }
    }
}

/// A declared relation to another entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDefinition {
    pub name: String,
    pub kind: RelationKind,
    /// Target entity name; checked for existence by the resolver.
    pub target: String,
    /// Explicit foreign-key column, if the declaration carries one.
    pub foreign_key: Option<String>,
}

impl RelationDefinition {
    /// The foreign-key column this relation expects on the owning entity.
    ///
    /// Only belongsTo implies one; explicit `foreignKey` overrides the
    /// `<snake_case(target)>_id` convention.
    pub fn expected_foreign_key(&self) -> Option<String> {
        match self.kind {
            RelationKind::BelongsTo => Some(
                self.foreign_key
                    .clone()
                    .unwrap_or_else(|| utils::foreign_key_name(&self.target)),
            ),
            _ => None,
        }
    }
}

/// Filament admin-panel configuration for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminConfig {
    /// Column names rendered as form inputs, in declaration order.
    pub form_fields: Vec<String>,
    /// Column names rendered as table columns, in declaration order.
    pub table_columns: Vec<String>,
}

/// One entity: a backing table plus its columns, relations, and admin config.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDefinition {
    pub name: String,
    pub table: String,
    pub columns: Vec<ColumnDefinition>,
    pub relations: Vec<RelationDefinition>,
    pub admin: Option<AdminConfig>,
}

impl EntityDefinition {
    pub fn find_column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.find_column(name).is_some()
    }
}

/// The full validated schema: entities keyed by name, declaration order
/// preserved for deterministic output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    pub entities: IndexMap<String, EntityDefinition>,
}

impl SchemaDocument {
    pub fn get(&self, entity_name: &str) -> Option<&EntityDefinition> {
        self.entities.get(entity_name)
    }

    /// Entities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityDefinition> {
        self.entities.values()
    }

    /// Looks an entity up by its table name.
    pub fn entity_by_table(&self, table: &str) -> Option<&EntityDefinition> {
        self.entities.values().find(|e| e.table == table)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_keywords_round_trip() {
        for keyword in ["id", "string", "text", "integer", "unsignedBigInteger", "timestamps"] {
            let ty = ColumnType::from_keyword(keyword).unwrap();
            assert_eq!(ty.keyword(), keyword);
            assert_eq!(ty.builder_method(), keyword);
        }
        assert_eq!(ColumnType::from_keyword("tinyint"), None);
    }

    #[test]
    fn test_length_only_valid_on_string() {
        assert!(ColumnType::String.allows_attribute(ColumnAttribute::Length));
        assert!(!ColumnType::Text.allows_attribute(ColumnAttribute::Length));
        assert!(!ColumnType::Integer.allows_attribute(ColumnAttribute::Length));
        assert!(!ColumnType::Timestamps.allows_attribute(ColumnAttribute::Length));
    }

    #[test]
    fn test_framework_managed_types_allow_no_attributes() {
        for attr in [
            ColumnAttribute::Length,
            ColumnAttribute::Unique,
            ColumnAttribute::Hidden,
            ColumnAttribute::Nullable,
            ColumnAttribute::Default,
            ColumnAttribute::Foreign,
        ] {
            assert!(!ColumnType::Id.allows_attribute(attr));
            assert!(!ColumnType::Timestamps.allows_attribute(attr));
        }
    }

    #[test]
    fn test_foreign_allowed_on_integer_types() {
        assert!(ColumnType::UnsignedBigInteger.allows_attribute(ColumnAttribute::Foreign));
        assert!(ColumnType::Integer.allows_attribute(ColumnAttribute::Foreign));
        assert!(!ColumnType::Text.allows_attribute(ColumnAttribute::Foreign));
    }

    #[test]
    fn test_foreign_key_ref_parse() {
        let fk = ForeignKeyRef::parse("users.id").unwrap();
        assert_eq!(fk.table, "users");
        assert_eq!(fk.column, "id");

        assert_eq!(ForeignKeyRef::parse("users"), None);
        assert_eq!(ForeignKeyRef::parse(".id"), None);
        assert_eq!(ForeignKeyRef::parse("users."), None);
        assert_eq!(ForeignKeyRef::parse("a.b.c"), None);
    }

    #[test]
    fn test_relation_kind_method_names() {
        assert_eq!(RelationKind::from_keyword("hasMany").unwrap().method_name(), "hasMany");
        assert_eq!(RelationKind::from_keyword("belongsTo").unwrap().method_name(), "belongsTo");
        assert_eq!(RelationKind::from_keyword("hasOne").unwrap().method_name(), "hasOne");
        assert_eq!(
            RelationKind::from_keyword("belongsToMany").unwrap().method_name(),
            "belongsToMany"
        );
        assert_eq!(RelationKind::from_keyword("embedsMany"), None);
    }

    #[test]
    fn test_expected_foreign_key_inference() {
        let rel = RelationDefinition {
            name: "user".to_string(),
            kind: RelationKind::BelongsTo,
            target: "User".to_string(),
            foreign_key: None,
        };
        assert_eq!(rel.expected_foreign_key(), Some("user_id".to_string()));
    }

    #[test]
    fn test_expected_foreign_key_explicit_override() {
        let rel = RelationDefinition {
            name: "author".to_string(),
            kind: RelationKind::BelongsTo,
            target: "User".to_string(),
            foreign_key: Some("author_id".to_string()),
        };
        assert_eq!(rel.expected_foreign_key(), Some("author_id".to_string()));
    }

    #[test]
    fn test_has_many_expects_no_foreign_key() {
        let rel = RelationDefinition {
            name: "posts".to_string(),
            kind: RelationKind::HasMany,
            target: "Post".to_string(),
            foreign_key: None,
        };
        assert_eq!(rel.expected_foreign_key(), None);
    }

    #[test]
    fn test_default_value_php_literals() {
        assert_eq!(DefaultValue::String("draft".to_string()).to_php_literal(), "'draft'");
        assert_eq!(DefaultValue::String("it's".to_string()).to_php_literal(), "'it\\'s'");
        assert_eq!(DefaultValue::Integer(0).to_php_literal(), "0");
        assert_eq!(DefaultValue::Bool(true).to_php_literal(), "true");
    }

    #[test]
    fn test_entity_by_table() {
        let mut doc = SchemaDocument::default();
        doc.entities.insert(
            "User".to_string(),
            EntityDefinition {
                name: "User".to_string(),
                table: "users".to_string(),
                columns: vec![ColumnDefinition::new("id", ColumnType::Id)],
                relations: vec![],
                admin: None,
            },
        );
        assert!(doc.entity_by_table("users").is_some());
        assert!(doc.entity_by_table("posts").is_none());
    }
}
