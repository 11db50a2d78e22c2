//! INSERT execution against MySQL.

use crate::error::MySQLSeedError;
use async_trait::async_trait;
use mysql_async::{prelude::*, Params, Pool, Value};
use seed_core::{GeneratedValue, InsertPlan, SqlDialect};
use seed_populate::{InsertExecutor, SeedError};

/// Convert a generated value to a MySQL parameter.
pub fn to_mysql_value(value: &GeneratedValue) -> Value {
    match value {
        GeneratedValue::Bool(b) => Value::Int(i64::from(*b)),
        GeneratedValue::Int64(i) => Value::Int(*i),
        GeneratedValue::Float64(f) => Value::Double(*f),
        GeneratedValue::Text(s) => Value::Bytes(s.as_bytes().to_vec()),
        GeneratedValue::Null => Value::NULL,
    }
}

/// Executor running plans on a MySQL connection pool.
///
/// Each call checks out its own connection, so concurrent attempts never
/// share a session.
#[derive(Debug, Clone)]
pub struct MySQLExecutor {
    pool: Pool,
}

impl MySQLExecutor {
    /// Create an executor on an existing pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Get a reference to the pool.
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    async fn insert(&self, plan: &InsertPlan) -> Result<u64, MySQLSeedError> {
        let mut conn = self.pool.get_conn().await?;
        let params: Vec<Value> = plan.arguments().iter().map(to_mysql_value).collect();
        conn.exec_drop(plan.sql(), Params::Positional(params)).await?;
        Ok(conn.affected_rows())
    }
}

#[async_trait]
impl InsertExecutor for MySQLExecutor {
    fn dialect(&self) -> SqlDialect {
        SqlDialect::MySql
    }

    async fn execute_insert(&self, plan: &InsertPlan) -> Result<u64, SeedError> {
        self.insert(plan)
            .await
            .map_err(|e| e.into_execution_failed(plan.table_name()))
    }
}
