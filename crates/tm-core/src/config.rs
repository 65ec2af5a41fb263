//! Configuration types and parsing for tablemap.yml

use crate::error::{CoreError, CoreResult};
use crate::serde_helpers::default_true;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Main configuration from tablemap.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// SQL dialect used for both parsing and rendering
    #[serde(default)]
    pub dialect: Dialect,

    /// Rendering switches for rewritten SQL
    #[serde(default)]
    pub output: OutputConfig,

    /// Rename maps applied to qualified table references
    #[serde(default)]
    pub renames: RenameConfig,
}

/// SQL dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Spark SQL (backtick-quoted identifiers)
    #[default]
    Spark,
    /// Databricks SQL
    Databricks,
    /// Hive SQL
    Hive,
    /// DuckDB SQL
    DuckDb,
    /// Snowflake SQL
    Snowflake,
    /// Dialect-agnostic ANSI-ish SQL
    Generic,
}

impl Dialect {
    /// Look up a dialect by its case-insensitive name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "spark" => Some(Dialect::Spark),
            "databricks" => Some(Dialect::Databricks),
            "hive" => Some(Dialect::Hive),
            "duckdb" => Some(Dialect::DuckDb),
            "snowflake" => Some(Dialect::Snowflake),
            "generic" => Some(Dialect::Generic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Spark => write!(f, "spark"),
            Dialect::Databricks => write!(f, "databricks"),
            Dialect::Hive => write!(f, "hive"),
            Dialect::DuckDb => write!(f, "duckdb"),
            Dialect::Snowflake => write!(f, "snowflake"),
            Dialect::Generic => write!(f, "generic"),
        }
    }
}

/// Rendering switches for rewritten SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Multi-line, indented output
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Lowercase unquoted identifiers
    #[serde(default = "default_true")]
    pub normalize: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            normalize: true,
        }
    }
}

/// Rename maps for qualified table references.
///
/// Keys are matched case-insensitively against the unquoted identifier text.
/// Only references that carry a database component are ever renamed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenameConfig {
    /// Catalog renames (`old -> new`)
    #[serde(default)]
    pub catalogs: HashMap<String, String>,

    /// Database renames (`old -> new`)
    #[serde(default)]
    pub databases: HashMap<String, String>,

    /// Table name renames (`old -> new`)
    #[serde(default)]
    pub tables: HashMap<String, String>,

    /// Catalog added to qualified references that have none
    #[serde(default)]
    pub default_catalog: Option<String>,
}

impl RenameConfig {
    /// True when no rename would ever apply
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
            && self.databases.is_empty()
            && self.tables.is_empty()
            && self.default_catalog.is_none()
    }

    fn validate(&self) -> CoreResult<()> {
        for (kind, map) in [
            ("catalogs", &self.catalogs),
            ("databases", &self.databases),
            ("tables", &self.tables),
        ] {
            validate_rename_map(kind, map)?;
        }

        if let Some(catalog) = &self.default_catalog {
            if catalog.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: "renames.default_catalog cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn validate_rename_map(kind: &str, map: &HashMap<String, String>) -> CoreResult<()> {
    let mut sources: Vec<&String> = map.keys().collect();
    sources.sort();

    let mut seen: HashMap<String, &str> = HashMap::with_capacity(map.len());
    for from in sources {
        let to = &map[from];
        if from.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: format!("renames.{kind} contains an empty source name"),
            });
        }
        if to.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: format!("renames.{kind}.{from} cannot map to an empty name"),
            });
        }
        if let Some(previous) = seen.insert(from.to_lowercase(), from.as_str()) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "renames.{kind} has source names that differ only by case: '{previous}' and '{from}'"
                ),
            });
        }
    }
    Ok(())
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_yaml(&content)?;
        log::debug!(
            "Loaded config from {} (dialect: {})",
            path.display(),
            config.dialect
        );
        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for tablemap.yml or tablemap.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("tablemap.yml");
        let yaml_path = dir.join("tablemap.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> CoreResult<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        self.renames.validate()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
