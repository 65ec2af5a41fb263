//! tm-core - Core library for Tablemap
//!
//! This crate provides the configuration model shared by the Tablemap crates:
//! the SQL dialect selection, output rendering switches, and the rename maps
//! that drive config-based table identifier rewriting.

pub mod config;
pub mod error;
pub mod serde_helpers;

pub use config::{Config, Dialect, OutputConfig, RenameConfig};
pub use error::{CoreError, CoreResult};
