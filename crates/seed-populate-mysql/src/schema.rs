//! MySQL schema introspection.

use crate::error::MySQLSeedError;
use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::Pool;
use seed_core::{
    classify, ColumnDescriptor, TypeCategory, DEFAULT_UNBOUNDED_TEXT_LENGTH, UNBOUNDED_LENGTH,
};
use seed_populate::{SchemaProvider, SeedError};
use tracing::debug;

/// Columns of one table, foreign keys to auto-increment columns of the same
/// name flagged in the last column.
const TABLE_COLUMNS_QUERY: &str = "
    SELECT c.COLUMN_NAME, c.DATA_TYPE, c.CHARACTER_MAXIMUM_LENGTH, c.NUMERIC_PRECISION,
           c.IS_NULLABLE, c.EXTRA,
           CASE WHEN EXISTS (
               SELECT 1
               FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE k
               INNER JOIN INFORMATION_SCHEMA.COLUMNS rc
                   ON rc.TABLE_SCHEMA = k.REFERENCED_TABLE_SCHEMA
                   AND rc.TABLE_NAME = k.REFERENCED_TABLE_NAME
                   AND rc.COLUMN_NAME = k.REFERENCED_COLUMN_NAME
               WHERE k.TABLE_SCHEMA = c.TABLE_SCHEMA
                   AND k.TABLE_NAME = c.TABLE_NAME
                   AND k.COLUMN_NAME = c.COLUMN_NAME
                   AND k.REFERENCED_COLUMN_NAME = c.COLUMN_NAME
                   AND rc.EXTRA LIKE '%auto_increment%'
           ) THEN 1 ELSE 0 END AS REFERENCES_IDENTITY
    FROM INFORMATION_SCHEMA.COLUMNS c
    WHERE c.TABLE_SCHEMA = COALESCE(?, DATABASE())
        AND c.TABLE_NAME = ?
    ORDER BY c.ORDINAL_POSITION";

type ColumnRow = (
    String,
    String,
    Option<u64>,
    Option<u64>,
    String,
    String,
    i64,
);

/// Schema provider reading `INFORMATION_SCHEMA.COLUMNS`.
#[derive(Debug, Clone)]
pub struct MySQLSchemaProvider {
    pool: Pool,
    unbounded_text_length: usize,
}

impl MySQLSchemaProvider {
    /// Create a provider on an existing pool.
    pub fn new(pool: Pool) -> Self {
        Self {
            pool,
            unbounded_text_length: DEFAULT_UNBOUNDED_TEXT_LENGTH,
        }
    }

    /// Text columns longer than this are reported as unbounded.
    pub fn with_unbounded_text_length(mut self, length: usize) -> Self {
        self.unbounded_text_length = length;
        self
    }

    async fn query_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, MySQLSeedError> {
        let (database, table_name) = split_table_name(table);
        let mut conn = self.pool.get_conn().await?;
        let rows: Vec<ColumnRow> = conn
            .exec(TABLE_COLUMNS_QUERY, (database, table_name))
            .await?;

        let columns = rows
            .into_iter()
            .map(
                |(name, data_type, char_length, precision, is_nullable, extra, references_identity)| {
                    let max_length = size_bound(
                        &data_type,
                        char_length,
                        precision,
                        self.unbounded_text_length,
                    );
                    ColumnDescriptor {
                        name,
                        system_type_name: data_type,
                        max_length,
                        is_nullable: is_nullable.eq_ignore_ascii_case("YES"),
                        is_identity: extra.to_lowercase().contains("auto_increment"),
                        references_identity: references_identity != 0,
                    }
                },
            )
            .collect();
        Ok(columns)
    }
}

#[async_trait]
impl SchemaProvider for MySQLSchemaProvider {
    async fn table_schema(&self, table: &str) -> Result<Vec<ColumnDescriptor>, SeedError> {
        let columns = self
            .query_columns(table)
            .await
            .map_err(|e| e.into_schema_unavailable(table))?;
        debug!("Read {} column(s) for table '{}'", columns.len(), table);
        Ok(columns)
    }
}

/// Split `database.table` into its parts; unqualified names use the connection's database.
pub fn split_table_name(table: &str) -> (Option<&str>, &str) {
    match table.split_once('.') {
        Some((database, name)) => (Some(database), name),
        None => (None, table),
    }
}

/// Size bound for a MySQL column, following SQL Server's `max_length`.
///
/// Text columns report their character length (long text types become
/// [`UNBOUNDED_LENGTH`]); numeric columns report their storage size in
/// bytes, with decimals mapped to the storage SQL Server uses for the same
/// precision.
pub fn size_bound(
    data_type: &str,
    char_length: Option<u64>,
    precision: Option<u64>,
    unbounded_text_length: usize,
) -> i64 {
    let data_type = data_type.to_lowercase();
    match classify(&data_type) {
        Some(TypeCategory::Text) => match char_length {
            Some(length) if length <= unbounded_text_length as u64 => length as i64,
            _ => UNBOUNDED_LENGTH,
        },
        Some(TypeCategory::Integer) => match data_type.as_str() {
            "tinyint" => 1,
            "smallint" => 2,
            "mediumint" => 3,
            "bigint" => 8,
            _ => 4,
        },
        Some(TypeCategory::Decimal) => match data_type.as_str() {
            "float" => 4,
            "double" | "real" => 8,
            _ => match precision.unwrap_or(10) {
                0..=9 => 5,
                10..=19 => 9,
                20..=28 => 13,
                _ => 17,
            },
        },
        Some(TypeCategory::Boolean) => 1,
        None => char_length
            .and_then(|length| i64::try_from(length).ok())
            .unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_table_name() {
        assert_eq!(split_table_name("orders"), (None, "orders"));
        assert_eq!(split_table_name("shop.orders"), (Some("shop"), "orders"));
    }

    #[test]
    fn test_size_bound_text() {
        assert_eq!(size_bound("varchar", Some(255), None, 30_000), 255);
        assert_eq!(size_bound("CHAR", Some(2), None, 30_000), 2);
        assert_eq!(size_bound("text", Some(65_535), None, 30_000), UNBOUNDED_LENGTH);
        assert_eq!(
            size_bound("longtext", Some(4_294_967_295), None, 30_000),
            UNBOUNDED_LENGTH
        );
        assert_eq!(size_bound("text", Some(65_535), None, 70_000), 65_535);
    }

    #[test]
    fn test_size_bound_integers() {
        assert_eq!(size_bound("tinyint", None, Some(3), 30_000), 1);
        assert_eq!(size_bound("smallint", None, Some(5), 30_000), 2);
        assert_eq!(size_bound("int", None, Some(10), 30_000), 4);
        assert_eq!(size_bound("bigint", None, Some(19), 30_000), 8);
    }

    #[test]
    fn test_size_bound_decimals() {
        assert_eq!(size_bound("decimal", None, Some(5), 30_000), 5);
        assert_eq!(size_bound("decimal", None, Some(18), 30_000), 9);
        assert_eq!(size_bound("decimal", None, Some(38), 30_000), 17);
        assert_eq!(size_bound("float", None, Some(12), 30_000), 4);
        assert_eq!(size_bound("double", None, Some(22), 30_000), 8);
    }

    #[test]
    fn test_size_bound_other() {
        assert_eq!(size_bound("bit", None, Some(1), 30_000), 1);
        assert_eq!(size_bound("varbinary", Some(16), None, 30_000), 16);
        assert_eq!(size_bound("datetime", None, None, 30_000), 0);
    }
}
