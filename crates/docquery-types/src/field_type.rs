//! Field type descriptors
//!
//! A `FieldType` is what a schema declares for a field and what the scalar
//! coercer converts raw values into.

use crate::CoercionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a document field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    /// Untyped field - values are stored as given
    Object,
    /// Boolean flag
    Boolean,
    /// 64-bit signed integer
    Integer,
    /// Double precision float
    Float,
    /// Arbitrary precision decimal
    Decimal,
    /// UTF-8 string
    String,
    /// 12-byte document identifier
    ObjectId,
    /// Calendar date
    Date,
    /// UTC timestamp
    DateTime,
    /// Multi-valued field, optionally element-typed
    Array(Option<Box<FieldType>>),
    /// Embedded document
    Hash,
}

impl FieldType {
    /// Create an untyped array type
    pub fn array() -> Self {
        Self::Array(None)
    }

    /// Create an element-typed array type
    pub fn array_of(element: FieldType) -> Self {
        Self::Array(Some(Box::new(element)))
    }

    /// Check if this is an array/list container type
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this is a mapping/document container type
    pub fn is_hash(&self) -> bool {
        matches!(self, Self::Hash)
    }

    /// Get the simple name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Object => "Object",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::ObjectId => "ObjectId",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Array(_) => "Array",
            Self::Hash => "Hash",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(Some(element)) => write!(f, "Array<{}>", element),
            other => write!(f, "{}", other.name()),
        }
    }
}

impl FromStr for FieldType {
    type Err = CoercionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(inner) = s
            .strip_prefix("Array<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return Ok(Self::array_of(inner.parse()?));
        }

        let ty = match s {
            "Object" | "object" | "Any" => Self::Object,
            "Boolean" | "boolean" | "bool" => Self::Boolean,
            "Integer" | "integer" | "int" => Self::Integer,
            "Float" | "float" => Self::Float,
            "Decimal" | "decimal" | "BigDecimal" => Self::Decimal,
            "String" | "string" | "str" | "Symbol" | "symbol" => Self::String,
            "ObjectId" | "objectid" | "ObjectID" => Self::ObjectId,
            "Date" | "date" => Self::Date,
            "DateTime" | "datetime" | "Time" | "time" => Self::DateTime,
            "Array" | "array" => Self::Array(None),
            "Hash" | "hash" => Self::Hash,
            other => {
                return Err(CoercionError::UnknownType {
                    name: other.to_string(),
                });
            }
        };
        Ok(ty)
    }
}

impl TryFrom<String> for FieldType {
    type Error = CoercionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.to_string()
    }
}
