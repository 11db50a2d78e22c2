//! Assembled INSERT statements.

use crate::values::GeneratedValue;
use std::fmt;

/// SQL dialect used to quote identifiers and number placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlDialect {
    /// Backtick-quoted identifiers, `?` placeholders
    #[default]
    MySql,

    /// Bracket-quoted identifiers, `?` placeholders
    SqlServer,

    /// Double-quoted identifiers, `$n` placeholders
    Postgres,
}

impl SqlDialect {
    /// Quote a single identifier, escaping the closing quote character.
    pub fn quote_identifier(&self, ident: &str) -> String {
        match self {
            SqlDialect::MySql => format!("`{}`", ident.replace('`', "``")),
            SqlDialect::SqlServer => format!("[{}]", ident.replace(']', "]]")),
            SqlDialect::Postgres => format!("\"{}\"", ident.replace('"', "\"\"")),
        }
    }

    /// Quote a possibly schema-qualified table name part by part.
    pub fn quote_table_name(&self, table: &str) -> String {
        table
            .split('.')
            .map(|part| self.quote_identifier(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Placeholder for the parameter at zero-based `position`.
    pub fn placeholder(&self, position: usize) -> String {
        match self {
            SqlDialect::MySql | SqlDialect::SqlServer => "?".to_string(),
            SqlDialect::Postgres => format!("${}", position + 1),
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlDialect::MySql => f.write_str("mysql"),
            SqlDialect::SqlServer => f.write_str("sqlserver"),
            SqlDialect::Postgres => f.write_str("postgres"),
        }
    }
}

/// A fully assembled, ready-to-execute INSERT for one seeding attempt.
///
/// Column names, arguments and placeholders are only ever appended together
/// through [`push`](Self::push), so the three sequences always have the
/// same length and line up positionally.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertPlan {
    table_name: String,
    dialect: SqlDialect,
    column_names: Vec<String>,
    arguments: Vec<GeneratedValue>,
    placeholders: Vec<String>,
}

impl InsertPlan {
    /// Create an empty plan for the given table.
    pub fn new(table_name: impl Into<String>, dialect: SqlDialect) -> Self {
        Self {
            table_name: table_name.into(),
            dialect,
            column_names: Vec::new(),
            arguments: Vec::new(),
            placeholders: Vec::new(),
        }
    }

    /// Append a column and the value bound to it.
    pub fn push(&mut self, column: impl Into<String>, value: GeneratedValue) {
        let placeholder = self.dialect.placeholder(self.placeholders.len());
        self.column_names.push(column.into());
        self.arguments.push(value);
        self.placeholders.push(placeholder);
    }

    /// Target table name as given by the caller.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Dialect the statement is rendered in.
    pub fn dialect(&self) -> SqlDialect {
        self.dialect
    }

    /// Column names in placeholder order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Positional arguments in placeholder order.
    pub fn arguments(&self) -> &[GeneratedValue] {
        &self.arguments
    }

    /// Consume the plan, returning its positional arguments.
    pub fn into_arguments(self) -> Vec<GeneratedValue> {
        self.arguments
    }

    /// Placeholders in order.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Number of columns in the statement.
    pub fn len(&self) -> usize {
        self.column_names.len()
    }

    /// Whether the statement has no columns.
    pub fn is_empty(&self) -> bool {
        self.column_names.is_empty()
    }

    /// Argument bound to the named column.
    pub fn argument_for(&self, column: &str) -> Option<&GeneratedValue> {
        self.column_names
            .iter()
            .position(|c| c == column)
            .map(|idx| &self.arguments[idx])
    }

    /// Render the parameterized INSERT statement.
    pub fn sql(&self) -> String {
        let columns = self
            .column_names
            .iter()
            .map(|c| self.dialect.quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.dialect.quote_table_name(&self.table_name),
            columns,
            self.placeholders.join(", ")
        )
    }
}
