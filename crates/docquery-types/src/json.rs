//! Extended-JSON bridge for condition values
//!
//! Plain JSON cannot tell an ObjectId from a string or a date from a
//! string, so typed values travel as single-key wrapper objects:
//!
//! | Value      | JSON                                         |
//! |------------|----------------------------------------------|
//! | ObjectId   | `{"$oid": "4e4d66343b39b68407000001"}`       |
//! | Date       | `{"$date": "2000-01-01"}`                    |
//! | DateTime   | `{"$date": "2000-01-01T10:00:00Z"}`          |
//! | Decimal    | `{"$numberDecimal": "12.50"}`                |
//! | Float      | `{"$numberDouble": "NaN"}` (non-finite only) |
//! | Regex      | `{"$regex": "^J", "$options": "i"}`          |
//! | Range      | `{"$range": [1, 10]}` (input only)           |
//!
//! A wrapper is recognized only when the object has exactly the wrapper's
//! keys; anything else is an ordinary document. Ranges that survive to
//! output are written in their expanded `$gte`/`$lte` form.

use crate::{CoercionError, CoercionResult, Document, ObjectId, Pattern, Range, Value};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value as Json};

impl Value {
    /// Convert raw JSON input into a condition value
    pub fn from_json(json: Json) -> CoercionResult<Self> {
        match json {
            Json::Null => Ok(Self::Null),
            Json::Bool(b) => Ok(Self::Boolean(b)),
            Json::Number(n) => Ok(number_to_value(&n)),
            Json::String(s) => Ok(Self::String(s)),
            Json::Array(items) => items
                .into_iter()
                .map(Self::from_json)
                .collect::<CoercionResult<Vec<_>>>()
                .map(Self::Array),
            Json::Object(map) => object_to_value(map),
        }
    }

    /// Convert into extended JSON
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null => Json::Null,
            Self::Boolean(b) => Json::Bool(*b),
            Self::Integer(i) => Json::Number(Number::from(*i)),
            Self::Float(x) => match Number::from_f64(*x) {
                Some(n) => Json::Number(n),
                None => wrapper("$numberDouble", Json::String(non_finite_text(*x).to_string())),
            },
            Self::Decimal(d) => wrapper("$numberDecimal", Json::String(d.to_string())),
            Self::String(s) => Json::String(s.clone()),
            Self::ObjectId(id) => wrapper("$oid", Json::String(id.to_hex())),
            Self::Date(d) => wrapper("$date", Json::String(d.format("%Y-%m-%d").to_string())),
            Self::DateTime(dt) => wrapper(
                "$date",
                Json::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            ),
            Self::Array(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            Self::Document(doc) => document_to_json(doc),
            Self::Range(range) => {
                let mut map = Map::new();
                map.insert("$gte".to_string(), range.first.to_json());
                map.insert("$lte".to_string(), range.last.to_json());
                Json::Object(map)
            }
            Self::Regex(pattern) => {
                let mut map = Map::new();
                map.insert("$regex".to_string(), Json::String(pattern.as_str().to_string()));
                map.insert(
                    "$options".to_string(),
                    Json::String(pattern.options().to_string()),
                );
                Json::Object(map)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Convert a document into a JSON object, preserving key order
pub fn document_to_json(doc: &Document) -> Json {
    Json::Object(
        doc.iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect(),
    )
}

fn wrapper(key: &str, value: Json) -> Json {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Json::Object(map)
}

fn non_finite_text(x: f64) -> &'static str {
    if x.is_nan() {
        "NaN"
    } else if x.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

fn parse_double(text: &str) -> Option<f64> {
    match text {
        "NaN" => Some(f64::NAN),
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => text.parse::<f64>().ok().filter(|x| x.is_finite()),
    }
}

fn number_to_value(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Integer(i),
        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn object_to_value(map: Map<String, Json>) -> CoercionResult<Value> {
    if let Some(value) = unwrap_extended(&map)? {
        return Ok(value);
    }

    let mut doc = Document::with_capacity(map.len());
    for (key, value) in map {
        doc.insert(key, Value::from_json(value)?);
    }
    Ok(Value::Document(doc))
}

fn unwrap_extended(map: &Map<String, Json>) -> CoercionResult<Option<Value>> {
    let only = |key: &str| map.len() == 1 && map.contains_key(key);

    if only("$oid") {
        if let Some(Json::String(hex)) = map.get("$oid") {
            return hex.parse::<ObjectId>().map(|id| Some(Value::ObjectId(id)));
        }
    }

    if only("$date") {
        if let Some(Json::String(text)) = map.get("$date") {
            if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                return Ok(Some(Value::Date(date)));
            }
            return DateTime::parse_from_rfc3339(text)
                .map(|dt| Some(Value::DateTime(dt.with_timezone(&Utc))))
                .map_err(|_| CoercionError::InvalidLiteral {
                    value: text.clone(),
                    to: "DateTime".to_string(),
                });
        }
    }

    if only("$numberDecimal") {
        if let Some(Json::String(text)) = map.get("$numberDecimal") {
            return text
                .parse::<Decimal>()
                .map(|d| Some(Value::Decimal(d)))
                .map_err(|_| CoercionError::InvalidLiteral {
                    value: text.clone(),
                    to: "Decimal".to_string(),
                });
        }
    }

    if only("$numberDouble") {
        if let Some(Json::String(text)) = map.get("$numberDouble") {
            return parse_double(text)
                .map(|x| Some(Value::Float(x)))
                .ok_or_else(|| CoercionError::InvalidLiteral {
                    value: text.clone(),
                    to: "Float".to_string(),
                });
        }
    }

    if only("$range") {
        if let Some(Json::Array(bounds)) = map.get("$range") {
            if let [first, last] = bounds.as_slice() {
                let first = Value::from_json(first.clone())?;
                let last = Value::from_json(last.clone())?;
                return Ok(Some(Value::Range(Range::new(first, last))));
            }
        }
    }

    let is_regex = map.contains_key("$regex")
        && map.keys().all(|k| k == "$regex" || k == "$options");
    if is_regex {
        let options = match map.get("$options") {
            None => Some(""),
            Some(options) => options.as_str(),
        };
        if let (Some(Json::String(source)), Some(options)) = (map.get("$regex"), options) {
            return Ok(Some(Value::Regex(Pattern::with_options(source.clone(), options))));
        }
    }

    Ok(None)
}
