//! SQL parser wrapper

use crate::dialect::{
    DatabricksDialect, DuckDbDialect, GenericDialect, HiveDialect, SnowflakeDialect,
    SparkDialect, SqlDialect,
};
use crate::error::{SqlError, SqlResult};
use crate::normalize::IdentifierCase;
use sqlparser::ast::Statement;
use tm_core::Dialect;

/// SQL parser that wraps sqlparser-rs with dialect support
pub struct SqlParser {
    dialect: Box<dyn SqlDialect>,
}

impl SqlParser {
    /// Create a new parser with Spark dialect
    pub fn spark() -> Self {
        Self {
            dialect: Box::new(SparkDialect::new()),
        }
    }

    /// Create a new parser with DuckDB dialect
    pub fn duckdb() -> Self {
        Self {
            dialect: Box::new(DuckDbDialect::new()),
        }
    }

    /// Create a new parser with Snowflake dialect
    pub fn snowflake() -> Self {
        Self {
            dialect: Box::new(SnowflakeDialect::new()),
        }
    }

    /// Create a parser for a configured dialect
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Spark => Self::spark(),
            Dialect::Databricks => Self {
                dialect: Box::new(DatabricksDialect::new()),
            },
            Dialect::Hive => Self {
                dialect: Box::new(HiveDialect::new()),
            },
            Dialect::DuckDb => Self::duckdb(),
            Dialect::Snowflake => Self::snowflake(),
            Dialect::Generic => Self {
                dialect: Box::new(GenericDialect::new()),
            },
        }
    }

    /// Create a parser from dialect name
    pub fn from_dialect_name(name: &str) -> SqlResult<Self> {
        Dialect::from_name(name)
            .map(Self::for_dialect)
            .ok_or_else(|| SqlError::UnknownDialect(name.to_string()))
    }

    /// Parse SQL into AST statements
    pub fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        let sql = sql.trim();
        if sql.is_empty() {
            return Err(SqlError::EmptySql);
        }

        let statements = self.dialect.parse(sql)?;
        if statements.is_empty() {
            return Err(SqlError::EmptySql);
        }
        Ok(statements)
    }

    /// Get the dialect name
    pub fn dialect_name(&self) -> &'static str {
        self.dialect.name()
    }

    /// Case that unquoted identifiers fold to in this dialect
    pub fn identifier_case(&self) -> IdentifierCase {
        self.dialect.identifier_case()
    }
}

impl Default for SqlParser {
    fn default() -> Self {
        Self::spark()
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
