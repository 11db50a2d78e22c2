//! Collaborator interfaces for schema introspection and statement execution.

use crate::error::SeedError;
use async_trait::async_trait;
use seed_core::{ColumnDescriptor, InsertPlan, SqlDialect, TableSchema};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Source of table column metadata.
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    /// Columns of `table` in native column order.
    ///
    /// Any failure is fatal for the seeding run.
    async fn table_schema(&self, table: &str) -> Result<Vec<ColumnDescriptor>, SeedError>;
}

/// Executes assembled INSERT statements.
///
/// Shared across concurrent attempts, so implementations must be
/// `Send + Sync`; one failing call must not affect the others.
#[async_trait]
pub trait InsertExecutor: Send + Sync {
    /// Dialect the executor's database expects.
    fn dialect(&self) -> SqlDialect;

    /// Execute the plan and return the number of rows affected.
    async fn execute_insert(&self, plan: &InsertPlan) -> Result<u64, SeedError>;
}

/// Schema provider backed by YAML table-schema files.
#[derive(Debug, Clone, Default)]
pub struct YamlSchemaProvider {
    tables: HashMap<String, TableSchema>,
}

impl YamlSchemaProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a provider from one or more schema files.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, SeedError> {
        let mut provider = Self::new();
        for path in paths {
            provider.add_table(TableSchema::from_file(path)?);
        }
        Ok(provider)
    }

    /// Register a table schema, replacing any table with the same name.
    pub fn add_table(&mut self, table: TableSchema) {
        self.tables.insert(table.name.clone(), table);
    }

    /// Builder-style [`add_table`](Self::add_table).
    pub fn with_table(mut self, table: TableSchema) -> Self {
        self.add_table(table);
        self
    }

    /// Names of all registered tables, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[async_trait]
impl SchemaProvider for YamlSchemaProvider {
    async fn table_schema(&self, table: &str) -> Result<Vec<ColumnDescriptor>, SeedError> {
        self.tables
            .get(table)
            .map(|schema| schema.columns.clone())
            .ok_or_else(|| SeedError::SchemaUnavailable {
                table: table.to_string(),
                reason: format!(
                    "table not found in schema files (known tables: {:?})",
                    self.table_names()
                ),
            })
    }
}

/// Executor that logs statements instead of running them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunExecutor {
    dialect: SqlDialect,
}

impl DryRunExecutor {
    /// Create a dry-run executor rendering in the given dialect.
    pub fn new(dialect: SqlDialect) -> Self {
        Self { dialect }
    }
}

#[async_trait]
impl InsertExecutor for DryRunExecutor {
    fn dialect(&self) -> SqlDialect {
        self.dialect
    }

    async fn execute_insert(&self, plan: &InsertPlan) -> Result<u64, SeedError> {
        let arguments: Vec<String> = plan
            .column_names()
            .iter()
            .zip(plan.arguments())
            .map(|(column, value)| format!("{column}={value}"))
            .collect();
        info!("[DRY-RUN] {}", plan.sql());
        info!("[DRY-RUN] Arguments: {}", arguments.join(", "));
        Ok(0)
    }
}
