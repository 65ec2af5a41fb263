//! tm-sql - SQL layer for Tablemap
//!
//! This crate parses SQL with sqlparser-rs, rewrites catalog- and
//! database-qualified table identifiers through a pluggable policy, and
//! prints the result back with optional case normalization and pretty
//! formatting.

pub mod dialect;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod policy;
pub mod rewriter;
pub mod table_ref;

pub use dialect::SqlDialect;
pub use error::{PolicyError, SqlError, SqlResult};
pub use normalize::{normalize_identifiers, IdentifierCase};
pub use parser::SqlParser;
pub use policy::{FnPolicy, IdentityPolicy, MappingPolicy, RewritePolicy, TryFnPolicy};
pub use rewriter::{RenderOptions, TableIdentifierRewriter};
pub use table_ref::{TableParts, TableReference};
