//! Schema trait consumed by the criteria selector

use crate::FieldDefinition;
use docquery_diagnostics::{DQ0100, DQ0101, DQ0102, DQ0103, DQ0104, ErrorCode, QueryError};
use std::borrow::Cow;

/// Read-only view of a document's field declarations
///
/// Implementations are queried on every criteria write, so answers must
/// reflect the schema as it is at call time.
pub trait Schema: Send + Sync {
    /// Get the definition of a field by canonical name
    fn field(&self, name: &str) -> Option<FieldDefinition>;

    /// Canonical field name an alias stands for
    fn resolve_alias(&self, alias: &str) -> Option<String>;

    /// Get the definition of a field by canonical name or alias
    ///
    /// Shared schemas should override this to answer from one consistent
    /// view; the default makes two separate lookups.
    fn resolve_field(&self, key: &str) -> Option<FieldDefinition> {
        self.field(key)
            .or_else(|| self.resolve_alias(key).and_then(|name| self.field(&name)))
    }

    /// Resolve an alias to its canonical name; unknown keys pass through
    fn canonical_name<'a>(&self, key: &'a str) -> Cow<'a, str> {
        match self.resolve_alias(key) {
            Some(name) => Cow::Owned(name),
            None => Cow::Borrowed(key),
        }
    }
}

/// Schema error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    #[error("Alias '{alias}' for field '{field}' collides with '{existing}'")]
    AliasCollision {
        alias: String,
        field: String,
        existing: String,
    },

    #[error("Invalid field name: {0:?}")]
    InvalidFieldName(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unsupported schema format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl SchemaError {
    /// Diagnostic code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateField(_) => DQ0100,
            Self::AliasCollision { .. } => DQ0101,
            Self::InvalidFieldName(_) => DQ0104,
            Self::ParseError(_) | Self::IoError(_) => DQ0102,
            Self::UnsupportedFormat(_) => DQ0103,
        }
    }
}

impl From<SchemaError> for QueryError {
    fn from(err: SchemaError) -> Self {
        QueryError::schema(err.code(), err.to_string())
    }
}
