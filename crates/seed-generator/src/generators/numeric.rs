//! Numeric value generators.
//!
//! The size bound is the column's declared `max_length`, which for numeric
//! columns is a storage size in bytes rather than a digit count. Both
//! generators treat it only as a magnitude hint: larger columns get larger
//! values. This is an approximation, not a model of the column's precision.

use rand::Rng;
use seed_core::GeneratedValue;

/// Largest power of ten used by the decimal generator. Keeps values finite.
pub const MAX_DECIMAL_EXPONENT: i64 = 280;

/// Generate a random integer in `[1, size_bound]` (inclusive).
///
/// Bounds below 1 collapse to the single value 1.
pub fn generate_bounded_int<R: Rng>(rng: &mut R, size_bound: i64) -> GeneratedValue {
    let max = size_bound.max(1);
    GeneratedValue::Int64(rng.random_range(1..=max))
}

/// Generate a random float scaled by the size bound.
///
/// The value is `rand() * (size_bound + 1) * 10^ceil(size_bound / 3)`, i.e.
/// roughly one extra decimal digit for every three bytes of storage.
pub fn generate_scaled_decimal<R: Rng>(rng: &mut R, size_bound: i64) -> GeneratedValue {
    let bound = size_bound.max(1);
    let exponent = (bound.saturating_add(2) / 3).min(MAX_DECIMAL_EXPONENT) as i32;
    let multiplier = 10f64.powi(exponent);
    let value = rng.random::<f64>() * (bound as f64 + 1.0) * multiplier;
    GeneratedValue::Float64(value)
}

/// Exclusive upper limit of [`generate_scaled_decimal`] for a size bound.
pub fn decimal_upper_limit(size_bound: i64) -> f64 {
    let bound = size_bound.max(1);
    let exponent = (bound.saturating_add(2) / 3).min(MAX_DECIMAL_EXPONENT) as i32;
    (bound as f64 + 1.0) * 10f64.powi(exponent)
}
