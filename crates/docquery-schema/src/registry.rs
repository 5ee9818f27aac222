//! Schema registry implementing `Schema`
//!
//! A cloneable handle over a shared `DocumentSchema`. Fields can be declared
//! or removed while selectors hold the registry, and every lookup sees the
//! schema as it is at call time.

use crate::{DocumentSchema, FieldDefinition, Schema, SchemaError};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// Thread-safe, shared document schema
#[derive(Clone, Default)]
pub struct SchemaRegistry {
    schema: Arc<RwLock<DocumentSchema>>,
}

impl SchemaRegistry {
    /// Create a new registry from a document schema
    pub fn new(schema: DocumentSchema) -> Self {
        Self {
            schema: Arc::new(RwLock::new(schema)),
        }
    }

    /// Load a schema from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema = DocumentSchema::parse_json(json)?;
        log::debug!(
            "loaded schema '{}' with {} field(s)",
            schema.name(),
            schema.len()
        );
        Ok(Self::new(schema))
    }

    /// Load a schema from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let json = std::fs::read_to_string(path).map_err(|e| SchemaError::IoError(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Load a schema from file, checking the extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_file(path),
            Some(ext) => Err(SchemaError::UnsupportedFormat(format!(
                "unsupported file extension: .{}. Expected .json",
                ext
            ))),
            None => Err(SchemaError::UnsupportedFormat(
                "no file extension found. Expected .json".to_string(),
            )),
        }
    }

    /// Get the schema name
    pub fn name(&self) -> String {
        self.schema.read().name().to_string()
    }

    /// Get all canonical field names in declaration order
    pub fn field_names(&self) -> Vec<String> {
        self.schema.read().fields().map(|f| f.name.clone()).collect()
    }

    /// Alias table (alias -> canonical field name)
    pub fn aliased_fields(&self) -> IndexMap<String, String> {
        self.schema.read().aliased_fields()
    }

    /// Get a copy of the current schema
    pub fn snapshot(&self) -> DocumentSchema {
        self.schema.read().clone()
    }

    /// Declare a field at runtime
    pub fn add_field(&self, field: FieldDefinition) -> Result<(), SchemaError> {
        let name = field.name.clone();
        self.schema.write().add_field(field)?;
        log::debug!("declared field '{}' on '{}'", name, self.name());
        Ok(())
    }

    /// Remove a field at runtime
    pub fn remove_field(&self, name: &str) -> Option<FieldDefinition> {
        let removed = self.schema.write().remove_field(name);
        if removed.is_some() {
            log::debug!("removed field '{}' from '{}'", name, self.name());
        }
        removed
    }
}

impl Schema for SchemaRegistry {
    fn field(&self, name: &str) -> Option<FieldDefinition> {
        self.schema.read().get(name).cloned()
    }

    fn resolve_alias(&self, alias: &str) -> Option<String> {
        self.schema.read().aliased(alias).map(|field| field.name.clone())
    }

    fn resolve_field(&self, key: &str) -> Option<FieldDefinition> {
        self.schema.read().resolve(key).cloned()
    }
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("schema", &*self.schema.read())
            .finish()
    }
}
