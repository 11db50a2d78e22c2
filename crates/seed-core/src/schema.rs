//! Table schema types.
//!
//! A [`ColumnDescriptor`] is the per-column metadata a schema provider
//! reports: system type name, declared size and the identity/nullability
//! flags. Descriptors keep the provider's native column order, which is the
//! order placeholders appear in the generated INSERT.
//!
//! Schemas can also be written by hand in YAML for offline runs:
//!
//! ```yaml
//! name: dbo.Addr
//! columns:
//!   - name: addrID
//!     type: int
//!     max_length: 4
//!     identity: true
//!   - name: street
//!     type: nvarchar
//!     max_length: 100
//!     nullable: true
//!   - name: personID
//!     type: int
//!     max_length: 4
//!     references_identity: true
//! ```

use crate::types::{classify, TypeCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Length a schema provider reports for columns without a declared limit
/// (`nvarchar(max)`, `LONGTEXT`, ...).
pub const UNBOUNDED_LENGTH: i64 = -1;

/// Number of characters generated for [`UNBOUNDED_LENGTH`] text columns
/// unless configured otherwise.
pub const DEFAULT_UNBOUNDED_TEXT_LENGTH: usize = 30_000;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Two columns share a name
    #[error("Column '{column}' appears more than once in table '{table}'")]
    DuplicateColumn { table: String, column: String },
}

/// Metadata for a single table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Database system type name, e.g. `nvarchar` or `bigint`
    #[serde(rename = "type")]
    pub system_type_name: String,

    /// Declared size; [`UNBOUNDED_LENGTH`] for unlimited text
    pub max_length: i64,

    /// Whether this column accepts NULL
    #[serde(default, rename = "nullable")]
    pub is_nullable: bool,

    /// Whether the database fills this column itself on insert
    #[serde(default, rename = "identity")]
    pub is_identity: bool,

    /// Whether this column is a foreign key to another table's identity column.
    /// Random values cannot satisfy it, so it is only filled from overrides.
    #[serde(default)]
    pub references_identity: bool,
}

impl ColumnDescriptor {
    /// Create a non-nullable, non-identity column.
    pub fn new(name: impl Into<String>, system_type_name: impl Into<String>, max_length: i64) -> Self {
        Self {
            name: name.into(),
            system_type_name: system_type_name.into(),
            max_length,
            is_nullable: false,
            is_identity: false,
            references_identity: false,
        }
    }

    /// Mark this column as nullable.
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    /// Mark this column as database-generated.
    pub fn identity(mut self) -> Self {
        self.is_identity = true;
        self
    }

    /// Mark this column as a foreign key to an identity column.
    pub fn referencing_identity(mut self) -> Self {
        self.references_identity = true;
        self
    }

    /// Whether values for this column are generated when it has no override.
    pub fn is_generated(&self) -> bool {
        !self.is_identity && !self.references_identity
    }

    /// Semantic category of this column's type, if known.
    pub fn category(&self) -> Option<TypeCategory> {
        classify(&self.system_type_name)
    }

    /// Whether this column has no declared length limit.
    pub fn is_unbounded(&self) -> bool {
        self.max_length == UNBOUNDED_LENGTH
    }
}

/// A table name together with its ordered columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name, optionally schema-qualified (`dbo.Addr`)
    pub name: String,

    /// Columns in the provider's native order
    pub columns: Vec<ColumnDescriptor>,
}

impl TableSchema {
    /// Create a new table schema.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Load a table schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a table schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: TableSchema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Reject schemas with repeated column names.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(SchemaError::DuplicateColumn {
                    table: self.name.clone(),
                    column: column.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR_YAML: &str = r#"
name: dbo.Addr
columns:
  - name: addrID
    type: int
    max_length: 4
    identity: true
  - name: street
    type: nvarchar
    max_length: 100
    nullable: true
  - name: notes
    type: nvarchar
    max_length: -1
  - name: state
    type: char
    max_length: 2
  - name: personID
    type: int
    max_length: 4
    references_identity: true
"#;

    #[test]
    fn test_parse_yaml() {
        let schema = TableSchema::from_yaml(ADDR_YAML).unwrap();

        assert_eq!(schema.name, "dbo.Addr");
        assert_eq!(
            schema.column_names(),
            vec!["addrID", "street", "notes", "state", "personID"]
        );

        let id = schema.get_column("addrID").unwrap();
        assert!(id.is_identity);
        assert!(!id.is_nullable);
        assert_eq!(id.category(), Some(TypeCategory::Integer));

        let street = schema.get_column("street").unwrap();
        assert!(street.is_nullable);
        assert!(!street.is_identity);
        assert_eq!(street.max_length, 100);

        assert!(schema.get_column("notes").unwrap().is_unbounded());

        let person = schema.get_column("personID").unwrap();
        assert!(person.references_identity);
        assert!(!person.is_generated());
        assert!(schema.get_column("state").unwrap().is_generated());
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let yaml = r#"
name: t
columns:
  - name: a
    type: int
    max_length: 4
  - name: a
    type: int
    max_length: 4
"#;
        let result = TableSchema::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateColumn { ref column, .. }) if column == "a"
        ));
    }

    #[test]
    fn test_missing_type_is_parse_error() {
        let yaml = r#"
name: t
columns:
  - name: a
    max_length: 4
"#;
        assert!(matches!(
            TableSchema::from_yaml(yaml),
            Err(SchemaError::YamlError(_))
        ));
    }

    #[test]
    fn test_builder_helpers() {
        let column = ColumnDescriptor::new("id", "bigint", 8).identity().nullable();
        assert!(column.is_identity);
        assert!(!column.is_generated());
        assert!(column.is_nullable);
        assert_eq!(column.category(), Some(TypeCategory::Integer));
    }
}
