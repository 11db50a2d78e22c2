//! Core types for the dbseedr seeding framework.
//!
//! This crate provides the foundational types shared by the generator,
//! the statement builder and the database-specific collaborators:
//!
//! - [`TypeCategory`] - Semantic category derived from a system type name
//! - [`GeneratedValue`] - One value bound to an INSERT placeholder
//! - [`ColumnDescriptor`] / [`TableSchema`] - Column metadata from a schema provider
//! - [`StaticOverrides`] - Caller-supplied literal values per column
//! - [`InsertPlan`] - A fully assembled, ready-to-execute INSERT
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator       (random values per TypeCategory)
//!    │
//!    ├─── seed-populate        (StatementBuilder, SeedingOrchestrator)
//!    │
//!    └─── seed-populate-mysql  (schema provider + executor for MySQL)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::{classify, TypeCategory};
//!
//! assert_eq!(classify("VARCHAR"), Some(TypeCategory::Text));
//! assert_eq!(classify("geography"), None);
//! ```

pub mod overrides;
pub mod plan;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use overrides::{OverrideError, StaticOverrides};
pub use plan::{InsertPlan, SqlDialect};
pub use schema::{
    ColumnDescriptor, SchemaError, TableSchema, DEFAULT_UNBOUNDED_TEXT_LENGTH, UNBOUNDED_LENGTH,
};
pub use types::{classify, TypeCategory};
pub use values::GeneratedValue;
