//! Mock implementations for testing
//!
//! The recording coercer delegates to the default rules and remembers every
//! call, so tests can assert how often (and with what) the coercer ran.

use docquery_schema::{FieldDefinition, Schema};
use docquery_types::{Coercer, CoercionResult, FieldType, TypeCoercer, Value};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Coercer that records each call before applying the default rules
#[derive(Default)]
pub struct RecordingCoercer {
    inner: TypeCoercer,
    calls: RwLock<Vec<(Value, FieldType)>>,
}

impl RecordingCoercer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// All calls made so far, oldest first
    pub fn calls(&self) -> Vec<(Value, FieldType)> {
        self.calls.read().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().len()
    }
}

impl Coercer for RecordingCoercer {
    fn coerce(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        self.calls.write().push((value.clone(), target.clone()));
        self.inner.coerce(value, target)
    }
}

/// In-memory schema whose fields can change between selector writes
#[derive(Default)]
pub struct MockSchema {
    fields: RwLock<IndexMap<String, FieldDefinition>>,
    lookups: RwLock<usize>,
}

impl MockSchema {
    pub fn new(fields: impl IntoIterator<Item = FieldDefinition>) -> Arc<Self> {
        let schema = Self::default();
        for field in fields {
            schema.declare(field);
        }
        Arc::new(schema)
    }

    /// Declare (or redeclare) a field
    pub fn declare(&self, field: FieldDefinition) {
        self.fields.write().insert(field.name.clone(), field);
    }

    pub fn forget(&self, name: &str) {
        self.fields.write().shift_remove(name);
    }

    /// Number of field lookups served
    pub fn lookups(&self) -> usize {
        *self.lookups.read()
    }
}

impl Schema for MockSchema {
    fn field(&self, name: &str) -> Option<FieldDefinition> {
        *self.lookups.write() += 1;
        self.fields.read().get(name).cloned()
    }

    fn resolve_alias(&self, alias: &str) -> Option<String> {
        self.fields
            .read()
            .values()
            .find(|field| field.aliases.iter().any(|a| a == alias))
            .map(|field| field.name.clone())
    }
}
