//! Rewrite policies for qualified table references
//!
//! A policy receives the `(catalog, database, name)` text of every table
//! reference that has a database component and answers with the components
//! to replace. Closures are adapted through [`FnPolicy`] and [`TryFnPolicy`];
//! [`MappingPolicy`] applies the rename maps from `tablemap.yml`.

use std::collections::HashMap;
use std::sync::Arc;

use tm_core::RenameConfig;

use crate::error::PolicyError;
use crate::table_ref::TableParts;

/// Decides how a qualified table reference is renamed.
///
/// Implementations must be pure: the same input yields the same output and
/// no state is observed or changed.
pub trait RewritePolicy: Send + Sync {
    /// Return the replacement components for `table`.
    ///
    /// `None` in the result leaves the component unchanged. An error aborts
    /// the whole rewrite.
    fn rewrite(&self, table: &TableParts) -> Result<TableParts, PolicyError>;
}

impl<P: RewritePolicy + ?Sized> RewritePolicy for Box<P> {
    fn rewrite(&self, table: &TableParts) -> Result<TableParts, PolicyError> {
        (**self).rewrite(table)
    }
}

impl<P: RewritePolicy + ?Sized> RewritePolicy for Arc<P> {
    fn rewrite(&self, table: &TableParts) -> Result<TableParts, PolicyError> {
        (**self).rewrite(table)
    }
}

/// Policy that never changes anything
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityPolicy;

impl RewritePolicy for IdentityPolicy {
    fn rewrite(&self, _table: &TableParts) -> Result<TableParts, PolicyError> {
        Ok(TableParts::unchanged())
    }
}

/// The optional-string triple returned by closure policies
pub type PartsTuple = (Option<String>, Option<String>, Option<String>);

/// Adapts an infallible closure into a [`RewritePolicy`]
///
/// ```
/// use tm_sql::policy::FnPolicy;
/// use tm_sql::TableIdentifierRewriter;
///
/// let rewriter = TableIdentifierRewriter::new(FnPolicy::new(|_catalog, db, _name| {
///     (None, db.map(|db| format!("{db}_dev")), None)
/// }));
/// let sql = rewriter.replace("SELECT * FROM sales.orders").unwrap();
/// assert!(sql.contains("sales_dev.orders"));
/// ```
pub struct FnPolicy<F> {
    f: F,
}

impl<F> FnPolicy<F>
where
    F: Fn(Option<&str>, Option<&str>, Option<&str>) -> PartsTuple + Send + Sync,
{
    /// Wrap a closure taking `(catalog, database, name)`
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> RewritePolicy for FnPolicy<F>
where
    F: Fn(Option<&str>, Option<&str>, Option<&str>) -> PartsTuple + Send + Sync,
{
    fn rewrite(&self, table: &TableParts) -> Result<TableParts, PolicyError> {
        let parts = (self.f)(
            table.catalog.as_deref(),
            table.database.as_deref(),
            table.name.as_deref(),
        );
        Ok(parts.into())
    }
}

/// Adapts a fallible closure into a [`RewritePolicy`]
pub struct TryFnPolicy<F> {
    f: F,
}

impl<F, E> TryFnPolicy<F>
where
    F: Fn(Option<&str>, Option<&str>, Option<&str>) -> Result<PartsTuple, E> + Send + Sync,
    E: Into<PolicyError>,
{
    /// Wrap a closure taking `(catalog, database, name)` that may fail
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, E> RewritePolicy for TryFnPolicy<F>
where
    F: Fn(Option<&str>, Option<&str>, Option<&str>) -> Result<PartsTuple, E> + Send + Sync,
    E: Into<PolicyError>,
{
    fn rewrite(&self, table: &TableParts) -> Result<TableParts, PolicyError> {
        (self.f)(
            table.catalog.as_deref(),
            table.database.as_deref(),
            table.name.as_deref(),
        )
        .map(TableParts::from)
        .map_err(Into::into)
    }
}

/// Rename policy driven by lookup maps.
///
/// Lookups are case-insensitive. A reference without a catalog gets
/// `default_catalog` when one is set.
#[derive(Debug, Clone, Default)]
pub struct MappingPolicy {
    catalogs: HashMap<String, String>,
    databases: HashMap<String, String>,
    tables: HashMap<String, String>,
    default_catalog: Option<String>,
}

impl MappingPolicy {
    /// Create an empty mapping policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `renames` section of the config
    pub fn from_config(renames: &RenameConfig) -> Self {
        Self {
            catalogs: lowercase_keys(&renames.catalogs),
            databases: lowercase_keys(&renames.databases),
            tables: lowercase_keys(&renames.tables),
            default_catalog: renames.default_catalog.clone(),
        }
    }

    /// Rename catalog `from` to `to`
    pub fn catalog(mut self, from: &str, to: impl Into<String>) -> Self {
        self.catalogs.insert(from.to_lowercase(), to.into());
        self
    }

    /// Rename database `from` to `to`
    pub fn database(mut self, from: &str, to: impl Into<String>) -> Self {
        self.databases.insert(from.to_lowercase(), to.into());
        self
    }

    /// Rename table `from` to `to`
    pub fn table(mut self, from: &str, to: impl Into<String>) -> Self {
        self.tables.insert(from.to_lowercase(), to.into());
        self
    }

    /// Add `catalog` to qualified references that have none
    pub fn default_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.default_catalog = Some(catalog.into());
        self
    }
}

// Sources that collide after lowercasing keep the first in sorted order
fn lowercase_keys(map: &HashMap<String, String>) -> HashMap<String, String> {
    let mut sources: Vec<(&String, &String)> = map.iter().collect();
    sources.sort();

    let mut folded = HashMap::with_capacity(sources.len());
    for (from, to) in sources {
        folded
            .entry(from.to_lowercase())
            .or_insert_with(|| to.clone());
    }
    folded
}

fn lookup(map: &HashMap<String, String>, key: Option<&str>) -> Option<String> {
    key.and_then(|k| map.get(&k.to_lowercase())).cloned()
}

impl RewritePolicy for MappingPolicy {
    fn rewrite(&self, table: &TableParts) -> Result<TableParts, PolicyError> {
        let catalog = match table.catalog.as_deref() {
            Some(catalog) => lookup(&self.catalogs, Some(catalog)),
            None => self.default_catalog.clone(),
        };
        Ok(TableParts {
            catalog,
            database: lookup(&self.databases, table.database.as_deref()),
            name: lookup(&self.tables, table.name.as_deref()),
        })
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod tests;
