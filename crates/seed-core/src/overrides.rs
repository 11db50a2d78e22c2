//! Static column overrides and YAML to GeneratedValue conversion.
//!
//! Overrides are literal values the caller pins for specific columns, most
//! often non-nullable foreign keys that random data cannot satisfy. They can
//! be read from a YAML mapping:
//!
//! ```yaml
//! state: MN
//! addressID: 1
//! ```
//!
//! or from `column=value` assignments, where the value is parsed as a YAML
//! scalar (`42` is an integer, `true` a bool, `null` a null, `MN` a string).

use crate::values::GeneratedValue;
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Error type for override parsing.
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    /// Error reading overrides file
    #[error("Failed to read overrides file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Assignment without `=`
    #[error("Invalid override '{0}': expected COLUMN=VALUE")]
    InvalidAssignment(String),

    /// Top-level document is not a mapping
    #[error("Overrides must be a mapping of column names to values")]
    NotAMapping,

    /// Mapping key is not a string
    #[error("Override key {0:?} is not a column name")]
    InvalidKey(YamlValue),

    /// Value cannot be bound to a single placeholder
    #[error("Override for column '{column}' must be a scalar value")]
    UnsupportedValue { column: String },
}

/// Caller-supplied literal values keyed by column name.
///
/// Iteration order is the sorted column name order, which keeps the
/// appended override columns stable across attempts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticOverrides {
    values: BTreeMap<String, GeneratedValue>,
}

impl StaticOverrides {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, OverrideError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse overrides from a YAML mapping. An empty document yields no overrides.
    pub fn from_yaml(yaml: &str) -> Result<Self, OverrideError> {
        let document: YamlValue = serde_yaml::from_str(yaml)?;
        let mapping = match document {
            YamlValue::Null => return Ok(Self::new()),
            YamlValue::Mapping(mapping) => mapping,
            _ => return Err(OverrideError::NotAMapping),
        };

        let mut overrides = Self::new();
        for (key, value) in mapping {
            let column = match key {
                YamlValue::String(s) => s,
                other => return Err(OverrideError::InvalidKey(other)),
            };
            let value = yaml_to_generated_value(&column, &value)?;
            overrides.insert(column, value);
        }
        Ok(overrides)
    }

    /// Parse a single `column=value` assignment.
    ///
    /// The value is read as a YAML scalar. Text that would otherwise parse as
    /// a number or bool (`+15551234`, `1.10`, `yes`) must be quoted.
    pub fn parse_assignment(assignment: &str) -> Result<(String, GeneratedValue), OverrideError> {
        let (column, raw) = assignment
            .split_once('=')
            .ok_or_else(|| OverrideError::InvalidAssignment(assignment.to_string()))?;
        let column = column.trim();
        if column.is_empty() {
            return Err(OverrideError::InvalidAssignment(assignment.to_string()));
        }

        let raw = raw.trim();
        // An empty right-hand side is an empty string, not YAML null.
        let value = if raw.is_empty() {
            GeneratedValue::Text(String::new())
        } else {
            let yaml: YamlValue = serde_yaml::from_str(raw)
                .unwrap_or_else(|_| YamlValue::String(raw.to_string()));
            yaml_to_generated_value(column, &yaml)?
        };
        Ok((column.to_string(), value))
    }

    /// Apply `column=value` assignments on top of the current overrides.
    pub fn extend_from_assignments<I, S>(&mut self, assignments: I) -> Result<(), OverrideError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for assignment in assignments {
            let (column, value) = Self::parse_assignment(assignment.as_ref())?;
            self.insert(column, value);
        }
        Ok(())
    }

    /// Set the override for a column, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<GeneratedValue>) {
        self.values.insert(column.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<GeneratedValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Whether the column has an override.
    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Get the override for a column.
    pub fn get(&self, column: &str) -> Option<&GeneratedValue> {
        self.values.get(column)
    }

    /// Iterate over `(column, value)` pairs in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of overridden columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no column is overridden.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Convert a scalar YAML value to a GeneratedValue.
fn yaml_to_generated_value(column: &str, yaml: &YamlValue) -> Result<GeneratedValue, OverrideError> {
    match yaml {
        YamlValue::Null => Ok(GeneratedValue::Null),
        YamlValue::Bool(b) => Ok(GeneratedValue::Bool(*b)),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(GeneratedValue::Int64(i))
            } else if let Some(f) = n.as_f64() {
                Ok(GeneratedValue::Float64(f))
            } else {
                Ok(GeneratedValue::Text(n.to_string()))
            }
        }
        YamlValue::String(s) => Ok(GeneratedValue::Text(s.clone())),
        YamlValue::Tagged(tagged) => yaml_to_generated_value(column, &tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(OverrideError::UnsupportedValue {
            column: column.to_string(),
        }),
    }
}
