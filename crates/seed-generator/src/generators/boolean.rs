//! Boolean value generator.

use crate::config::BooleanMode;
use rand::Rng;
use seed_core::GeneratedValue;

/// Generate a value for a boolean column.
pub fn generate_bool<R: Rng>(rng: &mut R, mode: BooleanMode, size_bound: i64) -> GeneratedValue {
    match mode {
        BooleanMode::TwoValued => GeneratedValue::Bool(rng.random_bool(0.5)),
        BooleanMode::IntegerRange => GeneratedValue::Int64(rng.random_range(0..=size_bound.max(0))),
    }
}
