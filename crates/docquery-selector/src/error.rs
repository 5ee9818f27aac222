//! Selector errors

use docquery_diagnostics::{DQ0200, DQ0201, ErrorCode, QueryError};
use docquery_types::CoercionError;
use thiserror::Error;

/// Result type for selector operations
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Errors raised while building criteria
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectorError {
    /// The coercer rejected a value for the key's field type
    #[error("Cannot typecast '{key}': {source}")]
    Coercion { key: String, source: CoercionError },

    /// Locale identifier that cannot qualify a key
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),
}

impl SelectorError {
    /// Diagnostic code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Coercion { .. } => DQ0200,
            Self::InvalidLocale(_) => DQ0201,
        }
    }

    /// Key whose value failed to typecast
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Coercion { key, .. } => Some(key),
            Self::InvalidLocale(_) => None,
        }
    }
}

impl From<SelectorError> for QueryError {
    fn from(err: SelectorError) -> Self {
        let query_err = QueryError::selector(err.code(), err.to_string());
        match err {
            SelectorError::Coercion { key, .. } => query_err.with_key(key),
            SelectorError::InvalidLocale(_) => query_err,
        }
    }
}
