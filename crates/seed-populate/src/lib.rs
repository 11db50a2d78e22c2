//! Statement assembly and seeding orchestration.
//!
//! This crate turns a table's column descriptors plus caller overrides into
//! parameterized INSERT statements and runs one or more independent seeding
//! attempts concurrently against an [`InsertExecutor`].
//!
//! Database-specific crates (`seed-populate-mysql`) implement
//! [`SchemaProvider`] and [`InsertExecutor`]; everything else lives here.

pub mod args;
pub mod error;
pub mod executor;
pub mod insert;
pub mod populator;

pub use args::CommonSeedArgs;
pub use error::SeedError;
pub use executor::{DryRunExecutor, InsertExecutor, SchemaProvider, YamlSchemaProvider};
pub use insert::StatementBuilder;
pub use populator::{seed_table, AttemptOutcome, SeedReport, SeedRequest, SeedingOrchestrator};
