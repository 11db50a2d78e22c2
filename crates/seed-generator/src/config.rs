//! Generator configuration.

use seed_core::DEFAULT_UNBOUNDED_TEXT_LENGTH;
use std::fmt;
use std::str::FromStr;

/// How `bit`/boolean columns are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanMode {
    /// Uniform choice between `true` and `false`
    #[default]
    TwoValued,

    /// Integer drawn from `[0, max_length]`, as older seeders did
    IntegerRange,
}

impl FromStr for BooleanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "two_valued" | "bool" => Ok(BooleanMode::TwoValued),
            "integer_range" | "int" => Ok(BooleanMode::IntegerRange),
            other => Err(format!(
                "unknown boolean mode '{other}' (expected two-valued or integer-range)"
            )),
        }
    }
}

impl fmt::Display for BooleanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BooleanMode::TwoValued => f.write_str("two-valued"),
            BooleanMode::IntegerRange => f.write_str("integer-range"),
        }
    }
}

/// Tunables shared by every value the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Characters generated for text columns reported as unbounded
    pub unbounded_text_length: usize,

    /// Boolean column strategy
    pub boolean_mode: BooleanMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            unbounded_text_length: DEFAULT_UNBOUNDED_TEXT_LENGTH,
            boolean_mode: BooleanMode::default(),
        }
    }
}

impl GeneratorConfig {
    /// Set the length used for unbounded text columns.
    pub fn with_unbounded_text_length(mut self, length: usize) -> Self {
        self.unbounded_text_length = length;
        self
    }

    /// Set the boolean column strategy.
    pub fn with_boolean_mode(mut self, mode: BooleanMode) -> Self {
        self.boolean_mode = mode;
        self
    }

    /// Number of characters to generate for a text column of `size_bound`.
    ///
    /// Negative bounds are the schema provider's "unbounded" sentinel.
    pub fn text_length(&self, size_bound: i64) -> usize {
        usize::try_from(size_bound).unwrap_or(self.unbounded_text_length)
    }
}
