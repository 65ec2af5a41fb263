use super::*;

#[test]
fn test_spark_parse_backtick_identifiers() {
    let dialect = SparkDialect::new();
    let stmts = dialect.parse("SELECT * FROM `sales`.`orders`").unwrap();
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_duckdb_parse() {
    let dialect = DuckDbDialect::new();
    let stmts = dialect.parse("SELECT * FROM users").unwrap();
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_snowflake_parse() {
    let dialect = SnowflakeDialect::new();
    let stmts = dialect.parse("SELECT * FROM analytics.public.users").unwrap();
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_dialect_names() {
    assert_eq!(SparkDialect::new().name(), "spark");
    assert_eq!(DatabricksDialect::new().name(), "databricks");
    assert_eq!(HiveDialect::new().name(), "hive");
    assert_eq!(DuckDbDialect::new().name(), "duckdb");
    assert_eq!(SnowflakeDialect::new().name(), "snowflake");
    assert_eq!(GenericDialect::new().name(), "generic");
}

#[test]
fn test_parse_error_location() {
    let dialect = DuckDbDialect::new();
    // FROM on line 2 with no projection
    let result = dialect.parse("SELECT\nFROM users");
    assert!(result.is_err());
    if let Err(crate::error::SqlError::ParseError {
        line,
        column,
        message,
    }) = result
    {
        assert_eq!(
            line, 2,
            "Expected line 2, got line {} (message: {})",
            line, message
        );
        assert!(
            column > 0,
            "Expected non-zero column, got {} (message: {})",
            column,
            message
        );
    }
}

#[test]
fn test_parse_location_extraction() {
    let (line, col) =
        super::parse_location_from_error("Expected: something at Line: 5, Column: 10");
    assert_eq!(line, 5);
    assert_eq!(col, 10);

    let (line, col) = super::parse_location_from_error("Some error without location");
    assert_eq!(line, 0);
    assert_eq!(col, 0);
}

#[test]
fn test_identifier_case() {
    assert_eq!(SparkDialect::new().identifier_case(), IdentifierCase::Lower);
    assert_eq!(DuckDbDialect::new().identifier_case(), IdentifierCase::Lower);
    assert_eq!(
        SnowflakeDialect::new().identifier_case(),
        IdentifierCase::Upper
    );
}
