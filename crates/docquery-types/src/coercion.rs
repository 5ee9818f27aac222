//! Scalar coercion rules
//!
//! This module converts a raw, usually string-typed value into the
//! representation required by a field's declared type. It provides:
//! - The `Coercer` trait, the seam the selector consults for every value
//! - `TypeCoercer`, the default rule set
//! - Coercion errors, mapped onto diagnostic codes

use crate::{Document, FieldType, ObjectId, Value};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use docquery_diagnostics::{DQ0001, DQ0002, DQ0003, DQ0004, ErrorCode, QueryError};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use thiserror::Error;

/// Coercion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    /// The value's shape cannot become the target type
    #[error("Cannot convert {from} to {to}")]
    CannotConvert { from: String, to: String },

    /// The value has the right shape but its text does not parse
    #[error("Invalid {to} literal: {value:?}")]
    InvalidLiteral { value: String, to: String },

    /// Precision loss would occur
    #[error("Conversion of {value} to {to} would lose precision")]
    PrecisionLoss { value: String, to: String },

    /// A type name that no field type answers to
    #[error("Unknown field type: {name}")]
    UnknownType { name: String },
}

impl CoercionError {
    /// Diagnostic code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CannotConvert { .. } => DQ0001,
            Self::InvalidLiteral { .. } => DQ0002,
            Self::PrecisionLoss { .. } => DQ0003,
            Self::UnknownType { .. } => DQ0004,
        }
    }

    fn cannot_convert(value: &Value, to: &FieldType) -> Self {
        Self::CannotConvert {
            from: value.type_name().to_string(),
            to: to.to_string(),
        }
    }

    fn invalid_literal(value: &str, to: &FieldType) -> Self {
        Self::InvalidLiteral {
            value: value.to_string(),
            to: to.to_string(),
        }
    }

    fn precision_loss(value: &Value, to: &FieldType) -> Self {
        Self::PrecisionLoss {
            value: value.to_string(),
            to: to.to_string(),
        }
    }
}

impl From<CoercionError> for QueryError {
    fn from(err: CoercionError) -> Self {
        QueryError::coercion(err.code(), err.to_string())
    }
}

/// Type coercion result
pub type CoercionResult<T> = Result<T, CoercionError>;

/// Converts a raw value into a field's declared type
///
/// Implementations must be pure: the same value and target always give the
/// same result, and the input is never modified.
pub trait Coercer: Send + Sync {
    /// Coerce `value` into `target`
    fn coerce(&self, value: &Value, target: &FieldType) -> CoercionResult<Value>;
}

/// Default coercion rules
///
/// Null stays null for every target, `Object` is the identity, and blank
/// strings become null for every non-String scalar target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCoercer;

impl TypeCoercer {
    /// Create a new type coercer
    pub fn new() -> Self {
        Self
    }

    fn to_boolean(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        match value {
            Value::Boolean(_) => Ok(value.clone()),
            Value::Integer(1) => Ok(Value::Boolean(true)),
            Value::Integer(0) => Ok(Value::Boolean(false)),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "t" | "yes" | "y" | "1" | "1.0" => Ok(Value::Boolean(true)),
                "false" | "f" | "no" | "n" | "0" | "0.0" => Ok(Value::Boolean(false)),
                _ => Err(CoercionError::invalid_literal(s, target)),
            },
            _ => Err(CoercionError::cannot_convert(value, target)),
        }
    }

    fn to_integer(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        match value {
            Value::Integer(_) => Ok(value.clone()),
            Value::Boolean(b) => Ok(Value::Integer(i64::from(*b))),
            Value::Float(x) => {
                if x.fract() == 0.0 && x.is_finite() {
                    x.to_i64()
                        .map(Value::Integer)
                        .ok_or_else(|| CoercionError::precision_loss(value, target))
                } else {
                    Err(CoercionError::precision_loss(value, target))
                }
            }
            Value::Decimal(d) => {
                if d.fract().is_zero() {
                    d.to_i64()
                        .map(Value::Integer)
                        .ok_or_else(|| CoercionError::precision_loss(value, target))
                } else {
                    Err(CoercionError::precision_loss(value, target))
                }
            }
            Value::String(s) => {
                let text = s.trim();
                if let Ok(i) = text.parse::<i64>() {
                    return Ok(Value::Integer(i));
                }
                // "45.0" is accepted, "45.5" is not
                match text.parse::<Decimal>() {
                    Ok(d) => self.to_integer(&Value::Decimal(d), target),
                    Err(_) => Err(CoercionError::invalid_literal(s, target)),
                }
            }
            _ => Err(CoercionError::cannot_convert(value, target)),
        }
    }

    fn to_float(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        match value {
            Value::Float(_) => Ok(value.clone()),
            Value::Integer(i) => Ok(Value::Float(*i as f64)),
            Value::Decimal(d) => d
                .to_f64()
                .map(Value::Float)
                .ok_or_else(|| CoercionError::precision_loss(value, target)),
            // "NaN" and "inf" parse as f64 but are not usable bounds
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(x) if x.is_finite() => Ok(Value::Float(x)),
                _ => Err(CoercionError::invalid_literal(s, target)),
            },
            _ => Err(CoercionError::cannot_convert(value, target)),
        }
    }

    fn to_decimal(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        match value {
            Value::Decimal(_) => Ok(value.clone()),
            Value::Integer(i) => Ok(Value::Decimal(Decimal::from(*i))),
            Value::Float(x) => Decimal::from_f64(*x)
                .map(Value::Decimal)
                .ok_or_else(|| CoercionError::precision_loss(value, target)),
            Value::String(s) => {
                let text = s.trim();
                text.parse::<Decimal>()
                    .or_else(|_| Decimal::from_scientific(text))
                    .map(Value::Decimal)
                    .map_err(|_| CoercionError::invalid_literal(s, target))
            }
            _ => Err(CoercionError::cannot_convert(value, target)),
        }
    }

    fn to_string_value(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        let text = match value {
            Value::String(_) => return Ok(value.clone()),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(x) => x.to_string(),
            Value::Decimal(d) => d.to_string(),
            Value::ObjectId(id) => id.to_hex(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::DateTime(dt) => dt.to_rfc3339(),
            _ => return Err(CoercionError::cannot_convert(value, target)),
        };
        Ok(Value::String(text))
    }

    fn to_object_id(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        match value {
            Value::ObjectId(_) => Ok(value.clone()),
            Value::String(s) => ObjectId::parse_str(s.trim())
                .map(Value::ObjectId)
                .ok_or_else(|| CoercionError::invalid_literal(s, target)),
            _ => Err(CoercionError::cannot_convert(value, target)),
        }
    }

    fn to_date(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        match value {
            Value::Date(_) => Ok(value.clone()),
            Value::DateTime(dt) => Ok(Value::Date(dt.date_naive())),
            Value::String(s) => parse_date(s.trim())
                .or_else(|| parse_datetime(s.trim()).map(|dt| dt.date_naive()))
                .map(Value::Date)
                .ok_or_else(|| CoercionError::invalid_literal(s, target)),
            _ => Err(CoercionError::cannot_convert(value, target)),
        }
    }

    fn to_datetime(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        match value {
            Value::DateTime(_) => Ok(value.clone()),
            Value::Date(d) => Ok(Value::DateTime(midnight_utc(*d))),
            Value::Integer(secs) => Utc
                .timestamp_opt(*secs, 0)
                .single()
                .map(Value::DateTime)
                .ok_or_else(|| CoercionError::invalid_literal(&secs.to_string(), target)),
            Value::String(s) => {
                let text = s.trim();
                parse_datetime(text)
                    .or_else(|| parse_date(text).map(midnight_utc))
                    .map(Value::DateTime)
                    .ok_or_else(|| CoercionError::invalid_literal(s, target))
            }
            _ => Err(CoercionError::cannot_convert(value, target)),
        }
    }

    fn to_array(
        &self,
        value: &Value,
        element: Option<&FieldType>,
    ) -> CoercionResult<Value> {
        let items: Vec<Value> = match value {
            Value::Array(items) => items.clone(),
            other => vec![other.clone()],
        };

        match element {
            Some(element) => items
                .iter()
                .map(|item| self.coerce(item, element))
                .collect::<CoercionResult<Vec<_>>>()
                .map(Value::Array),
            None => Ok(Value::Array(items)),
        }
    }

    fn to_hash(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        match value {
            Value::Document(doc) => Ok(Value::Document(Document::clone(doc))),
            _ => Err(CoercionError::cannot_convert(value, target)),
        }
    }
}

impl Coercer for TypeCoercer {
    fn coerce(&self, value: &Value, target: &FieldType) -> CoercionResult<Value> {
        if value.is_null() || matches!(target, FieldType::Object) {
            return Ok(value.clone());
        }

        let is_scalar_target = !matches!(
            target,
            FieldType::String | FieldType::Array(_) | FieldType::Hash
        );
        if is_scalar_target && value.is_blank() {
            log::trace!("blank {} value becomes null for {}", value.type_name(), target);
            return Ok(Value::Null);
        }

        match target {
            FieldType::Object => Ok(value.clone()),
            FieldType::Boolean => self.to_boolean(value, target),
            FieldType::Integer => self.to_integer(value, target),
            FieldType::Float => self.to_float(value, target),
            FieldType::Decimal => self.to_decimal(value, target),
            FieldType::String => self.to_string_value(value, target),
            FieldType::ObjectId => self.to_object_id(value, target),
            FieldType::Date => self.to_date(value, target),
            FieldType::DateTime => self.to_datetime(value, target),
            FieldType::Array(element) => self.to_array(value, element.as_deref()),
            FieldType::Hash => self.to_hash(value, target),
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}
