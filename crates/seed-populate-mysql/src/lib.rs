//! MySQL collaborators for dbseedr.
//!
//! - [`MySQLSchemaProvider`] reads column metadata from `INFORMATION_SCHEMA`
//! - [`MySQLExecutor`] runs assembled INSERT plans with positional parameters

pub mod args;
pub mod error;
pub mod insert;
pub mod schema;

pub use args::MySQLSeedArgs;
pub use error::MySQLSeedError;
pub use insert::{to_mysql_value, MySQLExecutor};
pub use schema::MySQLSchemaProvider;
