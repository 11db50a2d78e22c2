//! Error types for the MySQL seeder.

use seed_populate::SeedError;
use thiserror::Error;

/// Errors that can occur while talking to MySQL.
#[derive(Error, Debug)]
pub enum MySQLSeedError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// Invalid connection URL.
    #[error("Invalid MySQL connection string: {0}")]
    Url(#[from] mysql_async::UrlError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MySQLSeedError {
    /// Report this error as a fatal schema failure for `table`.
    pub fn into_schema_unavailable(self, table: &str) -> SeedError {
        SeedError::SchemaUnavailable {
            table: table.to_string(),
            reason: self.to_string(),
        }
    }

    /// Report this error as a failed insert into `table`.
    pub fn into_execution_failed(self, table: &str) -> SeedError {
        SeedError::ExecutionFailed {
            table: table.to_string(),
            reason: self.to_string(),
        }
    }
}
