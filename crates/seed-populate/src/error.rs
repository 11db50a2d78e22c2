//! Error types for seeding.

use seed_core::{OverrideError, SchemaError};
use thiserror::Error;

/// Errors that can occur while seeding a table.
#[derive(Error, Debug)]
pub enum SeedError {
    /// A column's system type has no semantic category. Recovered by binding NULL.
    #[error("Unsupported type '{type_name}' for column '{column}' in table '{table}'")]
    UnsupportedType {
        table: String,
        column: String,
        type_name: String,
    },

    /// The schema could not be read, or the table has no columns. Fatal for the run.
    #[error("Schema for table '{table}' unavailable: {reason}")]
    SchemaUnavailable { table: String, reason: String },

    /// Every column is an identity column or overridden away.
    #[error("No insertable columns for table '{table}'")]
    EmptyColumnList { table: String },

    /// The executor rejected the statement.
    #[error("Insert into '{table}' failed: {reason}")]
    ExecutionFailed { table: String, reason: String },

    /// An attempt's task panicked or was aborted.
    #[error("Seeding attempt {attempt} for table '{table}' did not complete: {reason}")]
    AttemptPanicked {
        table: String,
        attempt: usize,
        reason: String,
    },

    /// Static overrides could not be loaded.
    #[error("Override error: {0}")]
    Overrides(#[from] OverrideError),

    /// Schema file could not be loaded.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl SeedError {
    /// Whether this error aborts the whole run rather than a single attempt.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SeedError::SchemaUnavailable { .. }
                | SeedError::EmptyColumnList { .. }
                | SeedError::Overrides(_)
                | SeedError::Schema(_)
        )
    }
}
