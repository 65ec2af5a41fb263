//! Table reference model over parsed object names
//!
//! A relation name in the parse tree is a dotted list of identifiers. This
//! module views one-, two- and three-part names as optional `catalog`,
//! `database` and `name` slots, and rebuilds names from those slots after a
//! rewrite policy has run.

use sqlparser::ast::{Ident, ObjectName, ObjectNamePart};
use std::fmt;

/// The `(catalog, database, name)` triple exchanged with rewrite policies.
///
/// As policy input, `None` means the component is not present in the
/// reference. As policy output, `None` means "leave this component as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TableParts {
    /// Catalog component
    pub catalog: Option<String>,
    /// Database (schema) component
    pub database: Option<String>,
    /// Table name component
    pub name: Option<String>,
}

impl TableParts {
    /// A triple that requests no change
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// True when every component is `None`
    pub fn is_unchanged(&self) -> bool {
        self.catalog.is_none() && self.database.is_none() && self.name.is_none()
    }
}

impl From<(Option<String>, Option<String>, Option<String>)> for TableParts {
    fn from((catalog, database, name): (Option<String>, Option<String>, Option<String>)) -> Self {
        Self {
            catalog,
            database,
            name,
        }
    }
}

/// A table reference split into its identifier slots.
///
/// Each slot keeps the parsed [`Ident`], so the quote style of every
/// position survives a rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReference {
    /// Catalog identifier (third-from-last part)
    pub catalog: Option<Ident>,
    /// Database identifier (second-from-last part)
    pub database: Option<Ident>,
    /// Table name identifier (last part)
    pub name: Option<Ident>,
}

impl TableReference {
    /// View an object name as a table reference.
    ///
    /// Returns `None` for names that are not one-, two- or three-part
    /// identifier lists.
    pub fn from_object_name(object_name: &ObjectName) -> Option<Self> {
        let mut idents = Vec::with_capacity(object_name.0.len());
        for part in &object_name.0 {
            let ObjectNamePart::Identifier(ident) = part else {
                return None;
            };
            idents.push(ident.clone());
        }

        let mut idents = idents.into_iter();
        match idents.len() {
            1 => Some(Self {
                catalog: None,
                database: None,
                name: idents.next(),
            }),
            2 => Some(Self {
                catalog: None,
                database: idents.next(),
                name: idents.next(),
            }),
            3 => Some(Self {
                catalog: idents.next(),
                database: idents.next(),
                name: idents.next(),
            }),
            _ => None,
        }
    }

    /// Only references with both a database and a name may be rewritten.
    /// Bare names, including CTE references, never are.
    pub fn is_rewritable(&self) -> bool {
        self.database.is_some() && self.name.is_some()
    }

    /// The unquoted text of each component
    pub fn parts(&self) -> TableParts {
        TableParts {
            catalog: self.catalog.as_ref().map(|i| i.value.clone()),
            database: self.database.as_ref().map(|i| i.value.clone()),
            name: self.name.as_ref().map(|i| i.value.clone()),
        }
    }

    /// Build a new reference with the `Some` components of `replacement`
    /// substituted.
    ///
    /// A substituted component keeps the quote style of the component it
    /// replaces. A catalog added where none existed is unquoted.
    pub fn with_overrides(&self, replacement: &TableParts) -> Self {
        Self {
            catalog: override_ident(self.catalog.as_ref(), replacement.catalog.as_deref()),
            database: override_ident(self.database.as_ref(), replacement.database.as_deref()),
            name: override_ident(self.name.as_ref(), replacement.name.as_deref()),
        }
    }

    /// Rebuild the dotted object name
    pub fn into_object_name(self) -> ObjectName {
        ObjectName(
            [self.catalog, self.database, self.name]
                .into_iter()
                .flatten()
                .map(ObjectNamePart::Identifier)
                .collect(),
        )
    }
}

fn override_ident(original: Option<&Ident>, replacement: Option<&str>) -> Option<Ident> {
    match (original, replacement) {
        (Some(ident), Some(value)) => Some(Ident {
            value: value.to_string(),
            ..ident.clone()
        }),
        (None, Some(value)) => Some(Ident::new(value)),
        (original, None) => original.cloned(),
    }
}

impl fmt::Display for TableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for ident in [&self.catalog, &self.database, &self.name]
            .into_iter()
            .flatten()
        {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", ident)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "table_ref_test.rs"]
mod tests;
