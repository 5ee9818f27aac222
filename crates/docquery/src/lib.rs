//! Schema-driven typecasting of document-database query criteria
//!
//! This crate ties the docquery pieces together:
//! - Condition values, field types and scalar coercion
//! - Schemas with aliases and localized fields
//! - The criteria selector and its typecast algorithm
//! - A `docquery` command-line tool (with the `cli` feature)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docquery::{Locale, SchemaRegistry, normalize};
//! use serde_json::json;
//!
//! let registry = SchemaRegistry::from_json(r#"{
//!     "name": "Person",
//!     "fields": [{"name": "age", "type": "Integer", "aliases": ["a"]}]
//! }"#)?;
//!
//! let selector = normalize(
//!     Arc::new(registry),
//!     json!({"a": {"$gt": "18", "$exists": "true"}}),
//!     Locale::default(),
//! )?;
//!
//! assert_eq!(
//!     serde_json::to_value(&selector)?,
//!     json!({"age": {"$gt": 18, "$exists": true}})
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::Arc;

// Re-export all public APIs from internal crates
pub use docquery_diagnostics as diagnostics;
pub use docquery_schema as schema;
pub use docquery_selector as selector;
pub use docquery_types as types;

// Convenience re-exports
pub use docquery_diagnostics::{QueryError, Result};
pub use docquery_schema::{DocumentSchema, FieldDefinition, Schema, SchemaRegistry};
pub use docquery_selector::{Locale, Selector};
pub use docquery_types::{FieldType, TypeCoercer, Value};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;

/// Typecast a JSON criteria object against a schema
///
/// Values use the extended-JSON forms (`$oid`, `$date`, `$regex`, `$range`,
/// ...). Either every entry is typecast or an error is returned.
pub fn normalize(
    schema: Arc<dyn Schema>,
    criteria: serde_json::Value,
    locale: Locale,
) -> Result<Selector> {
    let serde_json::Value::Object(entries) = criteria else {
        return Err(QueryError::system(
            diagnostics::DQ0406,
            "criteria must be a JSON object",
        ));
    };

    let mut raw = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        raw.push((key, Value::from_json(value)?));
    }

    let mut selector = Selector::new(schema).with_locale(locale);
    selector.update(raw)?;
    log::debug!("normalized {} condition(s)", selector.len());
    Ok(selector)
}
