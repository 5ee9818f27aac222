//! Criteria selector
//!
//! An ordered mapping from resolved field key to typecast condition. Every
//! write goes through key resolution and the typecast algorithm, with the
//! schema consulted fresh each time.

use crate::{Locale, SelectorError, SelectorResult, Typecaster, resolve_key};
use docquery_schema::Schema;
use docquery_types::{Coercer, TypeCoercer, Value};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::sync::Arc;

/// Typecast criteria for a single query
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use docquery_schema::{DocumentSchema, FieldDefinition};
/// use docquery_selector::Selector;
/// use docquery_types::{FieldType, Value};
///
/// let schema = DocumentSchema::from_fields(
///     "Person",
///     [FieldDefinition::new("age", FieldType::Integer)],
/// )
/// .unwrap();
///
/// let mut selector = Selector::new(Arc::new(schema));
/// selector.assign("age", "45").unwrap();
/// assert_eq!(selector.get("age"), Some(&Value::Integer(45)));
/// ```
#[derive(Clone)]
pub struct Selector {
    schema: Arc<dyn Schema>,
    coercer: Arc<dyn Coercer>,
    locale: Locale,
    conditions: IndexMap<String, Value>,
}

impl Selector {
    /// Create an empty selector using the default coercion rules and locale
    pub fn new(schema: Arc<dyn Schema>) -> Self {
        Self {
            schema,
            coercer: Arc::new(TypeCoercer::new()),
            locale: Locale::default(),
            conditions: IndexMap::new(),
        }
    }

    /// Use a different coercer
    pub fn with_coercer(mut self, coercer: Arc<dyn Coercer>) -> Self {
        self.coercer = coercer;
        self
    }

    /// Set the locale used to qualify localized fields
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Get the schema
    pub fn schema(&self) -> &dyn Schema {
        self.schema.as_ref()
    }

    /// Get the active locale
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Resolve and typecast a condition without storing it
    ///
    /// Returns the storage key and the typecast value.
    pub fn try_to_typecast(&self, key: &str, value: &Value) -> SelectorResult<(String, Value)> {
        let resolved = resolve_key(self.schema.as_ref(), key, &self.locale);
        let typed = Typecaster::new(self.coercer.as_ref())
            .typecast(resolved.field.as_ref(), value)
            .map_err(|source| SelectorError::Coercion {
                key: key.to_string(),
                source,
            })?;
        Ok((resolved.key, typed))
    }

    /// Typecast and store a condition, returning the value it replaced
    pub fn assign(&mut self, key: &str, value: impl Into<Value>) -> SelectorResult<Option<Value>> {
        let (key, typed) = self.try_to_typecast(key, &value.into())?;
        Ok(self.conditions.insert(key, typed))
    }

    /// Typecast and store every entry; nothing is stored if any entry fails
    pub fn update<I, K, V>(&mut self, entries: I) -> SelectorResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let typed = entries
            .into_iter()
            .map(|(key, value)| self.try_to_typecast(key.as_ref(), &value.into()))
            .collect::<SelectorResult<Vec<_>>>()?;

        self.conditions.extend(typed);
        Ok(self)
    }

    /// Merge entries into the selector; colliding keys are overwritten
    ///
    /// Operator documents are replaced as a whole, never merged.
    pub fn merge<I, K, V>(&mut self, entries: I) -> SelectorResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        self.update(entries)
    }

    /// Get a stored condition by its storage key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.conditions.get(key)
    }

    /// Check if a storage key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.conditions.contains_key(key)
    }

    /// Number of stored conditions
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Check if no conditions are stored
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Iterate over stored conditions in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.conditions.iter()
    }

    /// Iterate over storage keys in insertion order
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.conditions.keys()
    }

    /// Get the stored conditions
    pub fn conditions(&self) -> &IndexMap<String, Value> {
        &self.conditions
    }

    /// Take the stored conditions
    pub fn into_conditions(self) -> IndexMap<String, Value> {
        self.conditions
    }
}

impl<'a> IntoIterator for &'a Selector {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.conditions.len()))?;
        for (key, value) in &self.conditions {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("locale", &self.locale)
            .field("conditions", &self.conditions)
            .finish_non_exhaustive()
    }
}
