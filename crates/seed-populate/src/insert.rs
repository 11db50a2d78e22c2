//! INSERT statement assembly.

use crate::error::SeedError;
use rand::Rng;
use seed_core::{ColumnDescriptor, GeneratedValue, InsertPlan, SqlDialect, StaticOverrides};
use seed_generator::ValueGenerator;
use std::collections::HashSet;
use tracing::warn;

/// Builds one [`InsertPlan`] per seeding attempt.
///
/// Identity columns are always skipped, even when overridden. Columns with a
/// static override are skipped during generation and appended, with the
/// override value, after every generated column. Foreign keys to identity
/// columns are never generated and only appear when overridden.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementBuilder {
    dialect: SqlDialect,
}

impl StatementBuilder {
    /// Create a builder rendering statements in the given dialect.
    pub fn new(dialect: SqlDialect) -> Self {
        Self { dialect }
    }

    /// Dialect of the statements this builder produces.
    pub fn dialect(&self) -> SqlDialect {
        self.dialect
    }

    /// Names of the columns a plan for this table would contain, in order.
    ///
    /// Fails with [`SeedError::EmptyColumnList`] when nothing is left to insert.
    pub fn insertable_columns<'a>(
        &self,
        table: &str,
        columns: &'a [ColumnDescriptor],
        overrides: &'a StaticOverrides,
    ) -> Result<Vec<&'a str>, SeedError> {
        let identity = identity_columns(columns);

        let names: Vec<&str> = columns
            .iter()
            .filter(|c| c.is_generated() && !overrides.contains(&c.name))
            .map(|c| c.name.as_str())
            .chain(
                overrides
                    .iter()
                    .map(|(column, _)| column)
                    .filter(|column| !identity.contains(column)),
            )
            .collect();

        if names.is_empty() {
            return Err(SeedError::EmptyColumnList {
                table: table.to_string(),
            });
        }
        Ok(names)
    }

    /// Assemble a plan with freshly generated values.
    ///
    /// A column whose type cannot be generated is bound to NULL and logged;
    /// the remaining columns still proceed.
    pub fn build<R: Rng>(
        &self,
        table: &str,
        columns: &[ColumnDescriptor],
        overrides: &StaticOverrides,
        generator: &mut ValueGenerator<R>,
    ) -> Result<InsertPlan, SeedError> {
        let mut plan = InsertPlan::new(table, self.dialect);

        for column in columns {
            if !column.is_generated() || overrides.contains(&column.name) {
                continue;
            }

            let value = match generator.generate_for_column(column) {
                Ok(value) => value,
                Err(_) => {
                    let err = SeedError::UnsupportedType {
                        table: table.to_string(),
                        column: column.name.clone(),
                        type_name: column.system_type_name.clone(),
                    };
                    warn!("{err}; binding NULL");
                    GeneratedValue::Null
                }
            };
            plan.push(column.name.clone(), value);
        }

        let identity = identity_columns(columns);
        for (column, value) in overrides.iter() {
            if identity.contains(column) {
                warn!(
                    "Ignoring override for identity column '{}' in table '{}'",
                    column, table
                );
                continue;
            }
            plan.push(column, value.clone());
        }

        if plan.is_empty() {
            return Err(SeedError::EmptyColumnList {
                table: table.to_string(),
            });
        }

        Ok(plan)
    }
}

fn identity_columns(columns: &[ColumnDescriptor]) -> HashSet<&str> {
    columns
        .iter()
        .filter(|c| c.is_identity)
        .map(|c| c.name.as_str())
        .collect()
}
