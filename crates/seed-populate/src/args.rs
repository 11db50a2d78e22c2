//! Common CLI argument definitions shared by all seeders.

use crate::error::SeedError;
use crate::populator::SeedRequest;
use clap::Args;
use seed_core::{StaticOverrides, DEFAULT_UNBOUNDED_TEXT_LENGTH};
use seed_generator::{BooleanMode, GeneratorConfig};
use std::path::PathBuf;

/// Common arguments shared by all seed commands.
#[derive(Args, Clone, Debug)]
pub struct CommonSeedArgs {
    /// Table to seed (may be schema-qualified, e.g. dbo.Addr)
    #[arg(long, short = 't')]
    pub table: String,

    /// Number of rows to insert, one concurrent attempt per row
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
    pub concurrency: u32,

    /// Random seed for reproducible values (same seed = same rows)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Static value for a column, e.g. --set state=MN (repeatable).
    /// Values are read as YAML scalars, so `42` binds an integer and `null`
    /// a NULL; quote text that looks numeric: --set 'phone="+15551234"'
    #[arg(long = "set", value_name = "COLUMN=VALUE")]
    pub set: Vec<String>,

    /// YAML file mapping column names to static values
    #[arg(long)]
    pub overrides_file: Option<PathBuf>,

    /// Characters generated for text columns without a length limit
    #[arg(long, default_value_t = DEFAULT_UNBOUNDED_TEXT_LENGTH, env = "DBSEEDR_UNBOUNDED_TEXT_LENGTH")]
    pub unbounded_text_length: usize,

    /// How bit/boolean columns are filled (two-valued or integer-range)
    #[arg(long, default_value_t = BooleanMode::TwoValued)]
    pub boolean_mode: BooleanMode,
}

impl CommonSeedArgs {
    /// Overrides from the file (if any) with `--set` values applied on top.
    pub fn overrides(&self) -> Result<StaticOverrides, SeedError> {
        let mut overrides = match &self.overrides_file {
            Some(path) => StaticOverrides::from_file(path)?,
            None => StaticOverrides::new(),
        };
        overrides.extend_from_assignments(&self.set)?;
        Ok(overrides)
    }

    /// Generator configuration from the CLI flags.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_unbounded_text_length(self.unbounded_text_length)
            .with_boolean_mode(self.boolean_mode)
    }

    /// Assemble the seed request these arguments describe.
    pub fn to_request(&self) -> Result<SeedRequest, SeedError> {
        Ok(SeedRequest::new(self.table.clone())
            .with_overrides(self.overrides()?)
            .with_concurrency(self.concurrency as usize)
            .with_seed(self.seed)
            .with_generator_config(self.generator_config()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use seed_core::GeneratedValue;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonSeedArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["dbseedr", "--table", "dbo.Addr"]).unwrap();
        let request = cli.common.to_request().unwrap();

        assert_eq!(request.table, "dbo.Addr");
        assert_eq!(request.concurrency, 5);
        assert_eq!(request.seed, None);
        assert!(request.overrides.is_empty());
        assert_eq!(request.generator_config, GeneratorConfig::default());
    }

    #[test]
    fn test_overrides_and_flags() {
        let cli = TestCli::try_parse_from([
            "dbseedr",
            "-t",
            "person",
            "--concurrency",
            "12",
            "--seed",
            "42",
            "--set",
            "age=42",
            "--set",
            "state=MN",
            "--unbounded-text-length",
            "100",
            "--boolean-mode",
            "integer-range",
        ])
        .unwrap();
        let request = cli.common.to_request().unwrap();

        assert_eq!(request.concurrency, 12);
        assert_eq!(request.seed, Some(42));
        assert_eq!(request.overrides.get("age"), Some(&GeneratedValue::Int64(42)));
        assert_eq!(
            request.overrides.get("state"),
            Some(&GeneratedValue::Text("MN".into()))
        );
        assert_eq!(request.generator_config.unbounded_text_length, 100);
        assert_eq!(
            request.generator_config.boolean_mode,
            BooleanMode::IntegerRange
        );
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        assert!(TestCli::try_parse_from(["dbseedr", "-t", "x", "--concurrency", "0"]).is_err());
    }

    #[test]
    fn test_invalid_assignment() {
        let cli = TestCli::try_parse_from(["dbseedr", "-t", "x", "--set", "age"]).unwrap();
        assert!(matches!(
            cli.common.overrides(),
            Err(SeedError::Overrides(_))
        ));
    }
}
