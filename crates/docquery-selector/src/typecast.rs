//! Typecast algorithm
//!
//! Dispatch is on the shape of the raw value, with the declared field type
//! only consulted where a shape is ambiguous:
//!
//! | Value     | Field type     | Result                                        |
//! |-----------|----------------|-----------------------------------------------|
//! | any       | no field       | unchanged                                     |
//! | regex     | any            | unchanged                                     |
//! | range     | any            | `{"$gte": first, "$lte": last}`, as scalars   |
//! | array     | array          | coerced whole                                 |
//! | array     | other          | each element typecast                         |
//! | document  | hash           | coerced whole                                 |
//! | document  | other          | operator document, see below                  |
//! | scalar    | array          | coerced to the element type                   |
//! | scalar    | other          | coerced to the field type                     |
//!
//! In an operator document, structural operators (`$exists`, `$size`) take
//! their own fixed type; every other key is typecast against the field.

use crate::operators::intrinsic_type;
use docquery_schema::FieldDefinition;
use docquery_types::{Coercer, CoercionResult, Document, FieldType, Value};

/// Applies the typecast rules through a coercer
pub struct Typecaster<'a> {
    coercer: &'a dyn Coercer,
}

impl<'a> Typecaster<'a> {
    /// Create a typecaster over the given coercer
    pub fn new(coercer: &'a dyn Coercer) -> Self {
        Self { coercer }
    }

    /// Typecast a raw value for a field; undeclared keys pass through
    pub fn typecast(
        &self,
        field: Option<&FieldDefinition>,
        value: &Value,
    ) -> CoercionResult<Value> {
        match field {
            Some(field) => self.typecast_value(&field.field_type, value),
            None => Ok(value.clone()),
        }
    }

    /// Typecast a raw value against a declared type
    pub fn typecast_value(&self, field_type: &FieldType, value: &Value) -> CoercionResult<Value> {
        log::trace!("typecast {} as {}", value.type_name(), field_type);

        match value {
            Value::Regex(_) => Ok(value.clone()),
            Value::Range(range) => {
                let mut bounds = Document::with_capacity(2);
                bounds.insert(
                    "$gte".to_string(),
                    self.typecast_scalar(field_type, &range.first)?,
                );
                bounds.insert(
                    "$lte".to_string(),
                    self.typecast_scalar(field_type, &range.last)?,
                );
                Ok(Value::Document(bounds))
            }
            Value::Array(_) if field_type.is_array() => self.coercer.coerce(value, field_type),
            Value::Array(items) => items
                .iter()
                .map(|item| self.typecast_value(field_type, item))
                .collect::<CoercionResult<Vec<_>>>()
                .map(Value::Array),
            Value::Document(_) if field_type.is_hash() => self.coercer.coerce(value, field_type),
            Value::Document(operators) => self.typecast_operators(field_type, operators),
            scalar => self.typecast_scalar(field_type, scalar),
        }
    }

    fn typecast_operators(
        &self,
        field_type: &FieldType,
        operators: &Document,
    ) -> CoercionResult<Value> {
        operators
            .iter()
            .map(|(operator, argument)| {
                let typed = match intrinsic_type(operator) {
                    Some(intrinsic) => self.coercer.coerce(argument, intrinsic)?,
                    None => self.typecast_value(field_type, argument)?,
                };
                Ok((operator.clone(), typed))
            })
            .collect::<CoercionResult<Document>>()
            .map(Value::Document)
    }

    fn typecast_scalar(&self, field_type: &FieldType, value: &Value) -> CoercionResult<Value> {
        match field_type {
            // membership match against a multi-valued field
            FieldType::Array(element) => {
                let target = match element.as_deref() {
                    Some(element) => element.clone(),
                    None => value.natural_type(),
                };
                self.coercer.coerce(value, &target)
            }
            _ => self.coercer.coerce(value, field_type),
        }
    }
}
