//! Individual value generators for each semantic type category.
//!
//! This module provides the generation logic for each category; the size
//! bound passed in is the column's declared `max_length`.

pub mod boolean;
pub mod numeric;
pub mod text;

use crate::config::GeneratorConfig;
use rand::Rng;
use seed_core::{GeneratedValue, TypeCategory};

/// Generate a value for the given category and size bound.
pub fn generate_value<R: Rng>(
    config: &GeneratorConfig,
    category: TypeCategory,
    size_bound: i64,
    rng: &mut R,
) -> GeneratedValue {
    match category {
        TypeCategory::Text => {
            let length = config.text_length(size_bound);
            GeneratedValue::Text(text::generate_mock_sentence(rng, length))
        }

        TypeCategory::Integer => numeric::generate_bounded_int(rng, size_bound),

        TypeCategory::Decimal => numeric::generate_scaled_decimal(rng, size_bound),

        TypeCategory::Boolean => boolean::generate_bool(rng, config.boolean_mode, size_bound),
    }
}
