//! Error types for tm-sql

use thiserror::Error;

/// Error raised by a fallible rewrite policy
pub type PolicyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// SQL parsing and rewriting errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// SQL parse error (S001)
    #[error("[S001] Failed to parse SQL at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// Empty SQL (S002)
    #[error("[S002] Failed to parse SQL: no statement found")]
    EmptySql,

    /// Unknown dialect name (S003)
    #[error("[S003] Unknown SQL dialect: {0}")]
    UnknownDialect(String),

    /// Rewrite policy failed for a table reference (S004)
    #[error("[S004] Rewrite policy failed for table '{table}': {source}")]
    Policy {
        table: String,
        #[source]
        source: PolicyError,
    },
}

impl SqlError {
    /// True when the input SQL could not be turned into a parse tree
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, SqlError::ParseError { .. } | SqlError::EmptySql)
    }
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
