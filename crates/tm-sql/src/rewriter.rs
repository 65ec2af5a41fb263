//! Table identifier rewriting
//!
//! Parses SQL, hands every qualified table reference to a [`RewritePolicy`],
//! swaps in the rebuilt names via `visit_relations_mut`, and renders the
//! tree back to SQL. Only relation names are touched: column qualifiers such
//! as `db.orders.id` are expressions and keep their original text, and bare
//! names (including CTE references) are never offered to the policy.

use std::ops::ControlFlow;

use sqlparser::ast::{visit_relations_mut, ObjectName, Statement};
use tm_core::{Config, OutputConfig};

use crate::error::{SqlError, SqlResult};
use crate::normalize::normalize_identifiers;
use crate::parser::SqlParser;
use crate::policy::{FnPolicy, MappingPolicy, PartsTuple, RewritePolicy};
use crate::table_ref::TableReference;

/// How rewritten statements are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Multi-line, indented output
    pub pretty: bool,
    /// Fold the case of unquoted identifiers
    pub normalize: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            normalize: true,
        }
    }
}

impl From<&OutputConfig> for RenderOptions {
    fn from(output: &OutputConfig) -> Self {
        Self {
            pretty: output.pretty,
            normalize: output.normalize,
        }
    }
}

/// Rewrites qualified table identifiers in SQL text.
///
/// Holds no state besides the policy, the parser and the render options, so
/// a shared reference can serve concurrent callers.
pub struct TableIdentifierRewriter<P> {
    policy: P,
    parser: SqlParser,
    options: RenderOptions,
}

impl<P: RewritePolicy> TableIdentifierRewriter<P> {
    /// Create a rewriter using the Spark dialect with pretty, normalized output
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            parser: SqlParser::spark(),
            options: RenderOptions::default(),
        }
    }

    /// Create a rewriter with the dialect and output settings from `config`
    pub fn with_config(policy: P, config: &Config) -> Self {
        Self {
            policy,
            parser: SqlParser::for_dialect(config.dialect),
            options: RenderOptions::from(&config.output),
        }
    }

    /// Use a different parser (and therefore dialect)
    pub fn with_parser(mut self, parser: SqlParser) -> Self {
        self.parser = parser;
        self
    }

    /// Use different render options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// The policy this rewriter applies
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Rewrite every qualified table reference in `sql`.
    ///
    /// Fails with a parse error when `sql` cannot be parsed, or with
    /// [`SqlError::Policy`] when the policy rejects a reference. No partial
    /// output is produced in either case.
    pub fn replace(&self, sql: &str) -> SqlResult<String> {
        log::debug!("Input SQL: {}", sql);
        let statements = self.parser.parse(sql)?;
        let statements = self.rewrite_statements(statements)?;
        let output = self.render(statements);
        log::debug!("Rewritten SQL: {}", output);
        Ok(output)
    }

    /// Apply the policy to every table reference in already-parsed statements
    pub fn rewrite_statements(&self, mut statements: Vec<Statement>) -> SqlResult<Vec<Statement>> {
        for stmt in &mut statements {
            let flow = visit_relations_mut(stmt, |relation: &mut ObjectName| {
                match self.rewrite_relation(relation) {
                    Ok(()) => ControlFlow::Continue(()),
                    Err(e) => ControlFlow::Break(e),
                }
            });
            if let ControlFlow::Break(err) = flow {
                return Err(err);
            }
        }
        Ok(statements)
    }

    /// Print statements with this rewriter's dialect and render options
    pub fn render(&self, mut statements: Vec<Statement>) -> String {
        let case = self.parser.identifier_case();
        statements
            .iter_mut()
            .map(|stmt| {
                if self.options.normalize {
                    normalize_identifiers(stmt, case);
                }
                if self.options.pretty {
                    format!("{:#}", stmt)
                } else {
                    stmt.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(";\n")
    }

    fn rewrite_relation(&self, relation: &mut ObjectName) -> SqlResult<()> {
        let Some(table) = TableReference::from_object_name(relation) else {
            log::debug!("Skipping relation '{}': not a table identifier", relation);
            return Ok(());
        };
        if !table.is_rewritable() {
            log::debug!("Skipping table '{}': no database specified", table);
            return Ok(());
        }

        let original = table.parts();
        log::debug!(
            "Processing table: catalog={:?}, db={:?}, name={:?}",
            original.catalog,
            original.database,
            original.name
        );

        let replacement = self
            .policy
            .rewrite(&original)
            .map_err(|source| SqlError::Policy {
                table: table.to_string(),
                source,
            })?;

        let rewritten = table.with_overrides(&replacement);
        if rewritten == table {
            return Ok(());
        }
        log::debug!("Rewrote table '{}' to '{}'", table, rewritten);
        *relation = rewritten.into_object_name();
        Ok(())
    }
}

impl<F> TableIdentifierRewriter<FnPolicy<F>>
where
    F: Fn(Option<&str>, Option<&str>, Option<&str>) -> PartsTuple + Send + Sync,
{
    /// Create a rewriter from a `(catalog, database, name)` closure
    pub fn from_fn(f: F) -> Self {
        Self::new(FnPolicy::new(f))
    }
}

impl TableIdentifierRewriter<MappingPolicy> {
    /// Create a rewriter entirely from config: dialect, output settings and
    /// the rename maps
    pub fn from_config(config: &Config) -> Self {
        Self::with_config(MappingPolicy::from_config(&config.renames), config)
    }
}

#[cfg(test)]
#[path = "rewriter_test.rs"]
mod tests;
