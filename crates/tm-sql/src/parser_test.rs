use super::*;

#[test]
fn test_parse_select() {
    let parser = SqlParser::spark();
    let stmts = parser
        .parse("SELECT id, name FROM sales.orders WHERE id = 1")
        .unwrap();
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_parse_multiple_statements() {
    let parser = SqlParser::spark();
    let stmts = parser.parse("SELECT 1; SELECT 2;").unwrap();
    assert_eq!(stmts.len(), 2);
}

#[test]
fn test_parse_empty() {
    let parser = SqlParser::spark();
    assert!(matches!(parser.parse(""), Err(SqlError::EmptySql)));
    assert!(matches!(parser.parse("  \n\t "), Err(SqlError::EmptySql)));
}

#[test]
fn test_parse_only_semicolon() {
    let parser = SqlParser::spark();
    let result = parser.parse(";");
    assert!(result.unwrap_err().is_parse_failure());
}

#[test]
fn test_parse_error() {
    let parser = SqlParser::spark();
    let err = parser.parse("SELECT * FROM sales.orders WHERE").unwrap_err();
    assert!(matches!(err, SqlError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse SQL"));
}

#[test]
fn test_default_is_spark() {
    assert_eq!(SqlParser::default().dialect_name(), "spark");
}

#[test]
fn test_for_dialect() {
    assert_eq!(SqlParser::for_dialect(Dialect::Hive).dialect_name(), "hive");
    assert_eq!(
        SqlParser::for_dialect(Dialect::Databricks).dialect_name(),
        "databricks"
    );
    assert_eq!(
        SqlParser::for_dialect(Dialect::Generic).dialect_name(),
        "generic"
    );
}

#[test]
fn test_from_dialect_name() {
    let parser = SqlParser::from_dialect_name("duckdb").unwrap();
    assert_eq!(parser.dialect_name(), "duckdb");

    let parser = SqlParser::from_dialect_name("Spark").unwrap();
    assert_eq!(parser.dialect_name(), "spark");

    let result = SqlParser::from_dialect_name("unknown");
    assert!(matches!(result, Err(SqlError::UnknownDialect(name)) if name == "unknown"));
}
