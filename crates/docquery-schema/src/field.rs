//! Field definitions

use docquery_types::FieldType;
use serde::{Deserialize, Serialize};

/// Declaration of a single document field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Canonical field name
    pub name: String,
    /// Declared type
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: FieldType,
    /// Whether the stored value varies per locale
    #[serde(default)]
    pub localized: bool,
    /// Alternate keys resolving to this field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

fn default_field_type() -> FieldType {
    FieldType::Object
}

impl FieldDefinition {
    /// Create a new, non-localized field without aliases
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            localized: false,
            aliases: Vec::new(),
        }
    }

    /// Mark the field as localized
    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    /// Add an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Check if this field declares an array type
    pub fn is_array(&self) -> bool {
        self.field_type.is_array()
    }

    /// Check if this field declares a hash type
    pub fn is_hash(&self) -> bool {
        self.field_type.is_hash()
    }
}
