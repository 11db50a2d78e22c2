//! Concurrent seeding of a single table.

use crate::error::SeedError;
use crate::executor::{InsertExecutor, SchemaProvider};
use crate::insert::StatementBuilder;
use seed_core::{ColumnDescriptor, StaticOverrides};
use seed_generator::{attempt_rng, GeneratorConfig, ValueGenerator};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Default number of concurrent seeding attempts.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Outcome of one seeding attempt.
#[derive(Debug)]
pub struct AttemptOutcome {
    /// Zero-based attempt number.
    pub attempt: usize,
    /// Rows affected, or why the attempt failed.
    pub result: Result<u64, SeedError>,
    /// Time spent building and executing the statement.
    pub duration: Duration,
}

impl AttemptOutcome {
    /// Whether the insert succeeded.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-attempt results of a seeding run.
#[derive(Debug)]
pub struct SeedReport {
    /// Table that was seeded.
    pub table: String,
    /// One outcome per attempt, ordered by attempt number.
    pub attempts: Vec<AttemptOutcome>,
    /// Wall-clock time until every attempt finished.
    pub total_duration: Duration,
}

impl SeedReport {
    /// Number of attempts that succeeded.
    pub fn succeeded(&self) -> usize {
        self.attempts.iter().filter(|a| a.is_success()).count()
    }

    /// Number of attempts that failed.
    pub fn failed(&self) -> usize {
        self.attempts.len() - self.succeeded()
    }

    /// Whether every attempt succeeded.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Total rows affected across successful attempts.
    pub fn rows_affected(&self) -> u64 {
        self.attempts
            .iter()
            .filter_map(|a| a.result.as_ref().ok())
            .sum()
    }

    /// Errors of the failed attempts.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &SeedError)> {
        self.attempts
            .iter()
            .filter_map(|a| a.result.as_ref().err().map(|e| (a.attempt, e)))
    }

    /// Calculate attempts per second.
    pub fn attempts_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.attempts.len() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Runs independent seeding attempts concurrently.
///
/// Every attempt builds its own plan with its own RNG and hands it to the
/// executor. Attempts share no mutable state; [`run`](Self::run) returns
/// only after all of them finished, successfully or not.
#[derive(Debug, Clone)]
pub struct SeedingOrchestrator {
    builder: StatementBuilder,
    generator_config: GeneratorConfig,
    concurrency: usize,
    seed: Option<u64>,
}

impl SeedingOrchestrator {
    /// Create an orchestrator with the default concurrency and no fixed seed.
    pub fn new(builder: StatementBuilder, generator_config: GeneratorConfig) -> Self {
        Self {
            builder,
            generator_config,
            concurrency: DEFAULT_CONCURRENCY,
            seed: None,
        }
    }

    /// Set the number of concurrent attempts. Zero runs nothing.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Fix the base seed so runs are reproducible.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Number of concurrent attempts.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Run `concurrency` attempts against `executor` and wait for all of them.
    pub async fn run(
        &self,
        table: &str,
        columns: &[ColumnDescriptor],
        overrides: &StaticOverrides,
        executor: Arc<dyn InsertExecutor>,
    ) -> SeedReport {
        let start_time = Instant::now();
        let table: Arc<str> = Arc::from(table);
        let columns: Arc<[ColumnDescriptor]> = Arc::from(columns);
        let overrides = Arc::new(overrides.clone());

        info!(
            "Seeding table '{}' with {} concurrent attempt(s)",
            table, self.concurrency
        );

        let handles: Vec<_> = (0..self.concurrency)
            .map(|attempt| {
                let table = Arc::clone(&table);
                let columns = Arc::clone(&columns);
                let overrides = Arc::clone(&overrides);
                let executor = Arc::clone(&executor);
                let builder = self.builder;
                let config = self.generator_config;
                let seed = self.seed;

                tokio::spawn(async move {
                    let attempt_start = Instant::now();
                    let plan = {
                        let mut generator =
                            ValueGenerator::new(config, attempt_rng(seed, attempt as u64));
                        builder.build(&table, &columns, &overrides, &mut generator)
                    };
                    let result = match plan {
                        Ok(plan) => {
                            debug!("Attempt {}: {}", attempt, plan.sql());
                            executor.execute_insert(&plan).await
                        }
                        Err(e) => Err(e),
                    };
                    AttemptOutcome {
                        attempt,
                        result,
                        duration: attempt_start.elapsed(),
                    }
                })
            })
            .collect();

        let mut attempts = Vec::with_capacity(handles.len());
        for (attempt, handle) in handles.into_iter().enumerate() {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(join_error) => AttemptOutcome {
                    attempt,
                    result: Err(SeedError::AttemptPanicked {
                        table: table.to_string(),
                        attempt,
                        reason: join_error.to_string(),
                    }),
                    duration: Duration::ZERO,
                },
            };

            match &outcome.result {
                Ok(rows) => info!(
                    "Attempt {} on '{}': {} row(s) affected in {:?}",
                    outcome.attempt, table, rows, outcome.duration
                ),
                Err(e) => error!("Attempt {} on '{}' failed: {}", outcome.attempt, table, e),
            }
            attempts.push(outcome);
        }

        let report = SeedReport {
            table: table.to_string(),
            attempts,
            total_duration: start_time.elapsed(),
        };

        info!(
            "Seeding '{}' complete: {} succeeded, {} failed, {} row(s) in {:?}",
            report.table,
            report.succeeded(),
            report.failed(),
            report.rows_affected(),
            report.total_duration
        );

        report
    }
}

/// Everything needed to seed one table.
#[derive(Debug, Clone)]
pub struct SeedRequest {
    /// Table to seed, optionally schema-qualified.
    pub table: String,
    /// Caller-pinned column values.
    pub overrides: StaticOverrides,
    /// Number of concurrent attempts.
    pub concurrency: usize,
    /// Base seed for reproducible runs.
    pub seed: Option<u64>,
    /// Generator tunables.
    pub generator_config: GeneratorConfig,
}

impl SeedRequest {
    /// Create a request with default concurrency, no overrides and no seed.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            overrides: StaticOverrides::new(),
            concurrency: DEFAULT_CONCURRENCY,
            seed: None,
            generator_config: GeneratorConfig::default(),
        }
    }

    /// Set the static overrides.
    pub fn with_overrides(mut self, overrides: StaticOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Set the number of concurrent attempts.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the generator configuration.
    pub fn with_generator_config(mut self, config: GeneratorConfig) -> Self {
        self.generator_config = config;
        self
    }
}

/// Seed one table: read its schema, then run the concurrent attempts.
///
/// Schema failures, an empty table and a column list emptied by identity
/// columns and overrides are fatal and returned as `Err`. Per-attempt
/// execution failures are recorded in the returned [`SeedReport`].
pub async fn seed_table(
    provider: &dyn SchemaProvider,
    executor: Arc<dyn InsertExecutor>,
    request: &SeedRequest,
) -> Result<SeedReport, SeedError> {
    let columns = provider.table_schema(&request.table).await?;
    if columns.is_empty() {
        return Err(SeedError::SchemaUnavailable {
            table: request.table.clone(),
            reason: "table has no columns".to_string(),
        });
    }

    let builder = StatementBuilder::new(executor.dialect());
    let insertable = builder.insertable_columns(&request.table, &columns, &request.overrides)?;
    debug!(
        "Columns for '{}': {}",
        request.table,
        insertable.join(", ")
    );

    let orchestrator = SeedingOrchestrator::new(builder, request.generator_config)
        .with_concurrency(request.concurrency)
        .with_seed(request.seed);

    Ok(orchestrator
        .run(&request.table, &columns, &request.overrides, executor)
        .await)
}
