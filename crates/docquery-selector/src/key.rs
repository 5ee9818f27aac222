//! Key resolution
//!
//! Turns a raw criteria key into the key the condition is stored under and
//! the field definition its value is typecast against:
//!
//! - aliases resolve to their canonical field name
//! - an unqualified localized field gets the active locale appended
//! - an explicitly qualified localized key (`description.de`, `desc.de`)
//!   keeps its suffix and still resolves its field
//! - anything else passes through untouched, without a field

use crate::Locale;
use docquery_schema::{FieldDefinition, Schema};

/// Storage key and field definition of a raw criteria key
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedKey {
    /// Key the condition is stored under
    pub key: String,
    /// Declared field, if the key names one
    pub field: Option<FieldDefinition>,
}

impl ResolvedKey {
    fn untyped(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            field: None,
        }
    }
}

/// Resolve a raw key against the schema as it is right now
pub fn resolve_key(schema: &dyn Schema, raw: &str, locale: &Locale) -> ResolvedKey {
    if let Some(field) = schema.resolve_field(raw) {
        if field.name != raw {
            log::debug!("alias '{}' resolved to '{}'", raw, field.name);
        }

        let key = if field.localized {
            let key = locale.qualify(&field.name);
            log::debug!("localized field '{}' stored as '{}'", field.name, key);
            key
        } else {
            field.name.clone()
        };
        return ResolvedKey {
            key,
            field: Some(field),
        };
    }

    resolve_qualified(schema, raw).unwrap_or_else(|| ResolvedKey::untyped(raw))
}

fn resolve_qualified(schema: &dyn Schema, raw: &str) -> Option<ResolvedKey> {
    let (base, suffix) = raw.rsplit_once('.')?;
    if !Locale::is_valid(suffix) {
        return None;
    }

    let field = schema.resolve_field(base).filter(|field| field.localized)?;

    Some(ResolvedKey {
        key: format!("{}.{}", field.name, suffix),
        field: Some(field),
    })
}
