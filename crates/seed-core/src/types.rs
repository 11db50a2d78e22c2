//! Semantic type categories for seeding.
//!
//! A database reports column types by their system type name (`nvarchar`,
//! `bigint`, `money`, ...). The generator only reasons about four semantic
//! categories, so every system type name is first mapped through [`classify`].

use std::fmt;

/// Semantic type category of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    /// Character data (`varchar`, `nvarchar`, `text`, ...)
    Text,

    /// Whole numbers (`bigint`, `int`, `smallint`, `tinyint`)
    Integer,

    /// Fractional numbers (`decimal`, `float`, `money`, ...)
    Decimal,

    /// Single bit flags (`bit`)
    Boolean,
}

impl TypeCategory {
    /// Name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Text => "text",
            TypeCategory::Integer => "integer",
            TypeCategory::Decimal => "decimal",
            TypeCategory::Boolean => "boolean",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a database system type name to its semantic category.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Any name
/// outside the known sets returns `None`, which callers treat as an
/// unsupported type rather than an error.
///
/// The SQL Server names are the canonical set; the MySQL spellings reported
/// by `INFORMATION_SCHEMA.COLUMNS.DATA_TYPE` are folded into the same categories.
pub fn classify(system_type_name: &str) -> Option<TypeCategory> {
    match system_type_name.trim().to_lowercase().as_str() {
        "varchar" | "nvarchar" | "char" | "nchar" | "text" | "ntext" => Some(TypeCategory::Text),
        "tinytext" | "mediumtext" | "longtext" => Some(TypeCategory::Text),

        "bigint" | "int" | "smallint" | "tinyint" => Some(TypeCategory::Integer),
        "integer" | "mediumint" => Some(TypeCategory::Integer),

        "decimal" | "numeric" | "float" | "real" | "money" | "smallmoney" => {
            Some(TypeCategory::Decimal)
        }
        "double" | "dec" => Some(TypeCategory::Decimal),

        "bit" | "bool" | "boolean" => Some(TypeCategory::Boolean),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_text_types() {
        for name in ["varchar", "nvarchar", "char", "nchar", "text", "ntext"] {
            assert_eq!(classify(name), Some(TypeCategory::Text), "{name}");
        }
    }

    #[test]
    fn test_classify_integer_types() {
        for name in ["bigint", "int", "smallint", "tinyint"] {
            assert_eq!(classify(name), Some(TypeCategory::Integer), "{name}");
        }
    }

    #[test]
    fn test_classify_decimal_types() {
        for name in ["decimal", "numeric", "float", "real", "money", "smallmoney"] {
            assert_eq!(classify(name), Some(TypeCategory::Decimal), "{name}");
        }
    }

    #[test]
    fn test_classify_bit() {
        assert_eq!(classify("bit"), Some(TypeCategory::Boolean));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("VARCHAR"), classify("varchar"));
        assert_eq!(classify("NVarChar"), Some(TypeCategory::Text));
        assert_eq!(classify("BIGINT"), Some(TypeCategory::Integer));
        assert_eq!(classify("Money"), Some(TypeCategory::Decimal));
        assert_eq!(classify("BIT"), Some(TypeCategory::Boolean));
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("uniqueidentifier"), None);
        assert_eq!(classify("datetime2"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("varchar(255)"), None);
    }

    #[test]
    fn test_classify_mysql_spellings() {
        assert_eq!(classify("longtext"), Some(TypeCategory::Text));
        assert_eq!(classify("mediumint"), Some(TypeCategory::Integer));
        assert_eq!(classify("double"), Some(TypeCategory::Decimal));
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeCategory::Decimal.to_string(), "decimal");
    }
}
