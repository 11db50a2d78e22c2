//! Per-attempt value generator.

use crate::config::GeneratorConfig;
use crate::generators::generate_value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{ColumnDescriptor, GeneratedValue, TypeCategory};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The column's type has no semantic category
    #[error("Unsupported type category for system type '{0}'")]
    UnsupportedCategory(String),
}

/// Build the RNG for one seeding attempt.
///
/// With a base seed, attempt `n` is seeded deterministically so the same
/// seed reproduces the same rows. Without one, each attempt draws its seed
/// from the operating system.
pub fn attempt_rng(seed: Option<u64>, attempt: u64) -> StdRng {
    match seed {
        Some(base_seed) => {
            StdRng::seed_from_u64(base_seed.wrapping_add(attempt.wrapping_mul(0x9E3779B97F4A7C15)))
        }
        None => StdRng::from_os_rng(),
    }
}

/// Value generator owning the random source for one seeding attempt.
///
/// A generator is never shared between attempts; each concurrent attempt
/// builds its own from [`attempt_rng`].
pub struct ValueGenerator<R: Rng = StdRng> {
    /// Shared tunables
    config: GeneratorConfig,
    /// Random source owned by this attempt
    rng: R,
}

impl<R: Rng> ValueGenerator<R> {
    /// Create a new generator with the given configuration and RNG.
    pub fn new(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one value for a category and size bound.
    ///
    /// `None` is the unknown category and fails with
    /// [`GeneratorError::UnsupportedCategory`].
    pub fn generate(
        &mut self,
        category: Option<TypeCategory>,
        size_bound: i64,
    ) -> Result<GeneratedValue, GeneratorError> {
        let category =
            category.ok_or_else(|| GeneratorError::UnsupportedCategory("unknown".to_string()))?;
        Ok(generate_value(&self.config, category, size_bound, &mut self.rng))
    }

    /// Generate one value for a column, classifying its system type first.
    pub fn generate_for_column(
        &mut self,
        column: &ColumnDescriptor,
    ) -> Result<GeneratedValue, GeneratorError> {
        let category = column
            .category()
            .ok_or_else(|| GeneratorError::UnsupportedCategory(column.system_type_name.clone()))?;
        Ok(generate_value(
            &self.config,
            category,
            column.max_length,
            &mut self.rng,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unknown_category() {
        let mut generator = ValueGenerator::new(GeneratorConfig::default(), attempt_rng(Some(42), 0));
        let result = generator.generate(None, 10);
        assert!(matches!(result, Err(GeneratorError::UnsupportedCategory(_))));
    }

    #[test]
    fn test_generate_for_column() {
        let mut generator = ValueGenerator::new(GeneratorConfig::default(), attempt_rng(Some(42), 0));

        let name = ColumnDescriptor::new("name", "nvarchar", 20);
        let value = generator.generate_for_column(&name).unwrap();
        assert_eq!(value.as_str().map(str::len), Some(20));

        let geo = ColumnDescriptor::new("loc", "geography", -1);
        match generator.generate_for_column(&geo) {
            Err(GeneratorError::UnsupportedCategory(type_name)) => assert_eq!(type_name, "geography"),
            other => panic!("Expected UnsupportedCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let column = ColumnDescriptor::new("name", "varchar", 40);

        let mut gen1 = ValueGenerator::new(GeneratorConfig::default(), attempt_rng(Some(42), 3));
        let mut gen2 = ValueGenerator::new(GeneratorConfig::default(), attempt_rng(Some(42), 3));

        assert_eq!(
            gen1.generate_for_column(&column).unwrap(),
            gen2.generate_for_column(&column).unwrap()
        );
    }

    #[test]
    fn test_attempts_get_distinct_streams() {
        let column = ColumnDescriptor::new("name", "varchar", 40);

        let mut gen1 = ValueGenerator::new(GeneratorConfig::default(), attempt_rng(Some(42), 0));
        let mut gen2 = ValueGenerator::new(GeneratorConfig::default(), attempt_rng(Some(42), 1));

        assert_ne!(
            gen1.generate_for_column(&column).unwrap(),
            gen2.generate_for_column(&column).unwrap()
        );
    }
}
