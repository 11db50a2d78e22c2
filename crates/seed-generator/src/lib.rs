//! Random value generator for the dbseedr seeding framework.
//!
//! This crate provides the [`ValueGenerator`] which produces one plausible
//! random value per column, shaped by the column's semantic category and
//! declared size. Each seeding attempt owns its own generator and RNG; no
//! random state is shared between attempts.
//!
//! # Architecture
//!
//! ```text
//! ColumnDescriptor { type, max_length }
//!        │
//!        ▼ classify()
//!  Option<TypeCategory>
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  ValueGenerator  │
//! │                  │
//! │  - config        │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    GeneratedValue
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::TypeCategory;
//! use seed_generator::{attempt_rng, GeneratorConfig, ValueGenerator};
//!
//! let mut generator = ValueGenerator::new(GeneratorConfig::default(), attempt_rng(Some(42), 0));
//! let value = generator.generate(Some(TypeCategory::Text), 12).unwrap();
//! assert_eq!(value.as_str().map(|s| s.len()), Some(12));
//! ```
//!
//! # Generators
//!
//! - `text` - Mock sentence of 1-9 letter words, exactly `max_length` characters
//! - `integer` - Uniform integer in `[1, max_length]`
//! - `decimal` - Uniform float whose magnitude grows with `max_length`
//! - `boolean` - Uniform `true`/`false` (or the legacy `[0, max_length]` integer draw)

pub mod config;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use config::{BooleanMode, GeneratorConfig};
pub use generator::{attempt_rng, GeneratorError, ValueGenerator};
pub use generators::generate_value;
