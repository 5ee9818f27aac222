//! CLI functionality for the docquery tool
//!
//! This module contains all CLI-related functionality including:
//! - Criteria normalization
//! - Schema inspection
//! - Logging setup
//! - Output formatting

#[cfg(feature = "cli")]
pub mod inspect;
#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "cli")]
pub mod normalize;
#[cfg(feature = "cli")]
pub mod output;

#[cfg(feature = "cli")]
use crate::{QueryError, SchemaRegistry};
#[cfg(feature = "cli")]
use std::path::Path;

/// Load a schema file, reporting failures as diagnostics naming the file
#[cfg(feature = "cli")]
pub fn load_schema(path: &Path) -> crate::Result<SchemaRegistry> {
    SchemaRegistry::from_file(path)
        .map_err(|err| QueryError::from(err).with_schema(path.display().to_string()))
}
