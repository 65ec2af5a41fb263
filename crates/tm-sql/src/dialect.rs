//! SQL dialect abstraction

use sqlparser::ast::Statement;
use sqlparser::dialect::{
    DatabricksDialect as SqlParserDatabricks, Dialect, DuckDbDialect as SqlParserDuckDb,
    GenericDialect as SqlParserGeneric, HiveDialect as SqlParserHive,
    SnowflakeDialect as SqlParserSnowflake,
};
use sqlparser::parser::Parser;

use crate::error::{SqlError, SqlResult};
use crate::normalize::IdentifierCase;

/// Trait for SQL dialect implementations
pub trait SqlDialect: Send + Sync {
    /// Get the underlying sqlparser dialect
    fn parser_dialect(&self) -> &dyn Dialect;

    /// Parse SQL into AST statements
    fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        Parser::parse_sql(self.parser_dialect(), sql).map_err(|e| {
            let msg = e.to_string();
            // sqlparser appends "at Line: X, Column: Y" to most errors
            let (line, column) = parse_location_from_error(&msg);
            log::debug!("Failed to parse SQL ({}): {}", self.name(), msg);
            SqlError::ParseError {
                message: msg,
                line,
                column,
            }
        })
    }

    /// Get the dialect name
    fn name(&self) -> &'static str;

    /// Case that unquoted identifiers fold to when normalizing
    fn identifier_case(&self) -> IdentifierCase {
        IdentifierCase::Lower
    }
}

/// Parse line and column from sqlparser error message.
///
/// sqlparser's `ParserError` is a simple string wrapper with no structured
/// location data, so we extract "Line: N, Column: M" from the error message text.
fn parse_location_from_error(msg: &str) -> (usize, usize) {
    let Some(line_idx) = msg.find("Line: ") else {
        return (0, 0);
    };
    let line_start = line_idx + 6;
    let Some(comma_idx) = msg[line_start..].find(',') else {
        return (0, 0);
    };
    let Ok(line) = msg[line_start..line_start + comma_idx]
        .trim()
        .parse::<usize>()
    else {
        return (0, 0);
    };
    let Some(col_idx) = msg.find("Column: ") else {
        return (0, 0);
    };
    let col_start = col_idx + 8;
    let col_end = msg[col_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|i| col_start + i)
        .unwrap_or(msg.len());
    let Ok(column) = msg[col_start..col_end].trim().parse::<usize>() else {
        return (0, 0);
    };
    (line, column)
}

/// Define a named wrapper around a sqlparser dialect.
///
/// Generates the struct, `new()`, `Default`, and the `SqlDialect` impl.
macro_rules! define_sql_dialect {
    (
        $(#[$meta:meta])*
        $Name:ident($Inner:ident, $label:literal);
    ) => {
        define_sql_dialect! {
            $(#[$meta])*
            $Name($Inner, $label, IdentifierCase::Lower);
        }
    };
    (
        $(#[$meta:meta])*
        $Name:ident($Inner:ident, $label:literal, $case:expr);
    ) => {
        $(#[$meta])*
        pub struct $Name {
            dialect: $Inner,
        }

        impl $Name {
            #[doc = concat!("Create a new ", $label, " dialect")]
            pub fn new() -> Self {
                Self { dialect: $Inner {} }
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl SqlDialect for $Name {
            fn parser_dialect(&self) -> &dyn Dialect {
                &self.dialect
            }

            fn name(&self) -> &'static str {
                $label
            }

            fn identifier_case(&self) -> IdentifierCase {
                $case
            }
        }
    };
}

define_sql_dialect! {
    /// Spark SQL dialect
    ///
    /// sqlparser has no dedicated Spark dialect; Databricks is the closest
    /// match (Spark grammar, backtick-quoted identifiers).
    SparkDialect(SqlParserDatabricks, "spark");
}

define_sql_dialect! {
    /// Databricks SQL dialect
    DatabricksDialect(SqlParserDatabricks, "databricks");
}

define_sql_dialect! {
    /// Hive SQL dialect
    HiveDialect(SqlParserHive, "hive");
}

define_sql_dialect! {
    /// DuckDB SQL dialect
    DuckDbDialect(SqlParserDuckDb, "duckdb");
}

define_sql_dialect! {
    /// Snowflake SQL dialect
    SnowflakeDialect(SqlParserSnowflake, "snowflake", IdentifierCase::Upper);
}

define_sql_dialect! {
    /// Generic SQL dialect
    GenericDialect(SqlParserGeneric, "generic");
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
