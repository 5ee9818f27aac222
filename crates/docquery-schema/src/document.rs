//! Document schema - the field declarations of one document type

use crate::{FieldDefinition, Schema, SchemaError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field declarations of a document type, keyed by canonical name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDocumentSchema", into = "RawDocumentSchema")]
pub struct DocumentSchema {
    name: String,
    fields: IndexMap<String, FieldDefinition>,
}

/// Serialized form: fields as a list
#[derive(Serialize, Deserialize)]
struct RawDocumentSchema {
    name: String,
    #[serde(default)]
    fields: Vec<FieldDefinition>,
}

impl TryFrom<RawDocumentSchema> for DocumentSchema {
    type Error = SchemaError;

    fn try_from(raw: RawDocumentSchema) -> Result<Self, Self::Error> {
        Self::from_fields(raw.name, raw.fields)
    }
}

impl From<DocumentSchema> for RawDocumentSchema {
    fn from(schema: DocumentSchema) -> Self {
        Self {
            name: schema.name,
            fields: schema.fields.into_values().collect(),
        }
    }
}

impl DocumentSchema {
    /// Create an empty schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Create a schema from a list of fields, validating names and aliases
    pub fn from_fields(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = FieldDefinition>,
    ) -> Result<Self, SchemaError> {
        let mut schema = Self::new(name);
        for field in fields {
            schema.add_field(field)?;
        }
        Ok(schema)
    }

    /// Parse a schema from its JSON form
    pub fn parse_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::ParseError(e.to_string()))
    }

    /// Schema (document type) name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a field by canonical name
    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    /// Iterate over fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.values()
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are declared
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declare a new field
    ///
    /// Field names must be non-empty, must not start with `$` and must not
    /// contain `.`; neither the name nor any alias may collide with an
    /// existing field name or alias.
    pub fn add_field(&mut self, field: FieldDefinition) -> Result<(), SchemaError> {
        validate_name(&field.name)?;

        if self.fields.contains_key(&field.name) {
            return Err(SchemaError::DuplicateField(field.name));
        }

        if let Some(owner) = self.aliased(&field.name) {
            return Err(SchemaError::AliasCollision {
                alias: field.name.clone(),
                field: owner.name.clone(),
                existing: field.name,
            });
        }

        for (i, alias) in field.aliases.iter().enumerate() {
            validate_name(alias)?;

            let existing = if alias == &field.name || self.fields.contains_key(alias) {
                Some(alias.clone())
            } else if let Some(owner) = self.aliased(alias) {
                Some(owner.name.clone())
            } else if field.aliases[..i].contains(alias) {
                Some(field.name.clone())
            } else {
                None
            };

            if let Some(existing) = existing {
                return Err(SchemaError::AliasCollision {
                    alias: alias.clone(),
                    field: field.name.clone(),
                    existing,
                });
            }
        }

        self.fields.insert(field.name.clone(), field);
        Ok(())
    }

    /// Remove a field declaration
    pub fn remove_field(&mut self, name: &str) -> Option<FieldDefinition> {
        self.fields.shift_remove(name)
    }

    /// Field that declares `alias` as one of its aliases
    pub fn aliased(&self, alias: &str) -> Option<&FieldDefinition> {
        self.fields
            .values()
            .find(|field| field.aliases.iter().any(|a| a == alias))
    }

    /// Get a field by canonical name or alias
    pub fn resolve(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.get(key).or_else(|| self.aliased(key))
    }

    /// Alias table (alias -> canonical field name)
    pub fn aliased_fields(&self) -> IndexMap<String, String> {
        self.fields
            .values()
            .flat_map(|field| {
                field
                    .aliases
                    .iter()
                    .map(move |alias| (alias.clone(), field.name.clone()))
            })
            .collect()
    }
}

impl Schema for DocumentSchema {
    fn field(&self, name: &str) -> Option<FieldDefinition> {
        self.get(name).cloned()
    }

    fn resolve_alias(&self, alias: &str) -> Option<String> {
        self.aliased(alias).map(|field| field.name.clone())
    }

    fn resolve_field(&self, key: &str) -> Option<FieldDefinition> {
        self.resolve(key).cloned()
    }
}

fn validate_name(name: &str) -> Result<(), SchemaError> {
    if name.is_empty() || name.starts_with('$') || name.contains('.') {
        return Err(SchemaError::InvalidFieldName(name.to_string()));
    }
    Ok(())
}
