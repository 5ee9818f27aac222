//! Condition values - the loosely-typed data model criteria are built from
//!
//! A condition value is whatever application code puts on the right-hand
//! side of a criterion: scalars, arrays, operator documents, inclusive
//! ranges and regular expressions.

use crate::{CoercionError, FieldType};
use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Ordered mapping used for operator documents and embedded documents
pub type Document = IndexMap<String, Value>;

/// A condition value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value
    Null,
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// Double precision float
    Float(f64),
    /// Arbitrary precision decimal
    Decimal(Decimal),
    /// String value
    String(String),
    /// Document identifier
    ObjectId(ObjectId),
    /// Calendar date
    Date(NaiveDate),
    /// UTC timestamp
    DateTime(DateTime<Utc>),
    /// Ordered list of values
    Array(Vec<Value>),
    /// Operator expression or embedded document
    Document(Document),
    /// Inclusive range between two values
    Range(Range),
    /// Regular expression pattern match
    Regex(Pattern),
}

impl Value {
    /// Build a document value from key/value pairs
    pub fn document<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Document(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array value
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build an inclusive range value
    pub fn range(first: impl Into<Value>, last: impl Into<Value>) -> Self {
        Self::Range(Range::new(first, last))
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value is a blank string
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::String(s) if s.trim().is_empty())
    }

    /// Short name of the value's shape, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::Decimal(_) => "Decimal",
            Self::String(_) => "String",
            Self::ObjectId(_) => "ObjectId",
            Self::Date(_) => "Date",
            Self::DateTime(_) => "DateTime",
            Self::Array(_) => "Array",
            Self::Document(_) => "Document",
            Self::Range(_) => "Range",
            Self::Regex(_) => "Regex",
        }
    }

    /// The field type a value already has on its own
    pub fn natural_type(&self) -> FieldType {
        match self {
            Self::Boolean(_) => FieldType::Boolean,
            Self::Integer(_) => FieldType::Integer,
            Self::Float(_) => FieldType::Float,
            Self::Decimal(_) => FieldType::Decimal,
            Self::String(_) => FieldType::String,
            Self::ObjectId(_) => FieldType::ObjectId,
            Self::Date(_) => FieldType::Date,
            Self::DateTime(_) => FieldType::DateTime,
            Self::Array(_) => FieldType::Array(None),
            Self::Document(_) => FieldType::Hash,
            Self::Null | Self::Range(_) | Self::Regex(_) => FieldType::Object,
        }
    }

    /// Try to get as Document
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Document(doc) => Some(doc),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::String(s) => write!(f, "{:?}", s),
            Self::ObjectId(id) => write!(f, "ObjectId({})", id),
            Self::Date(d) => write!(f, "{}", d),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Document(doc) => {
                write!(f, "{{")?;
                for (i, (key, value)) in doc.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Self::Range(range) => write!(f, "{}", range),
            Self::Regex(pattern) => write!(f, "{}", pattern),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ObjectId> for Value {
    fn from(value: ObjectId) -> Self {
        Self::ObjectId(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Self::Document(value)
    }
}

impl From<Range> for Value {
    fn from(value: Range) -> Self {
        Self::Range(value)
    }
}

impl From<Pattern> for Value {
    fn from(value: Pattern) -> Self {
        Self::Regex(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<RangeInclusive<T>> for Value {
    fn from(value: RangeInclusive<T>) -> Self {
        let (first, last) = value.into_inner();
        Self::Range(Range::new(first, last))
    }
}

// ============================================================================
// Range
// ============================================================================

/// Inclusive range between two values
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    /// Lower bound (inclusive)
    pub first: Box<Value>,
    /// Upper bound (inclusive)
    pub last: Box<Value>,
}

impl Range {
    /// Create a new inclusive range
    pub fn new(first: impl Into<Value>, last: impl Into<Value>) -> Self {
        Self {
            first: Box::new(first.into()),
            last: Box::new(last.into()),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}

// ============================================================================
// Pattern
// ============================================================================

/// Regular expression source with its option letters
///
/// Patterns are handed to the document store as written; the store owns the
/// regex dialect, so neither the source nor the options are checked here.
/// Option letters are kept sorted and deduplicated, and two patterns are
/// equal when their source and options are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    source: String,
    options: String,
}

impl Pattern {
    /// Create a pattern without options
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_options(source, "")
    }

    /// Create a pattern with option letters
    pub fn with_options(source: impl Into<String>, options: &str) -> Self {
        let mut flags: Vec<char> = options.chars().collect();
        flags.sort_unstable();
        flags.dedup();

        Self {
            source: source.into(),
            options: flags.into_iter().collect(),
        }
    }

    /// Pattern source text
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Normalized option letters
    pub fn options(&self) -> &str {
        &self.options
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.options)
    }
}

// ============================================================================
// ObjectId
// ============================================================================

/// 12-byte document identifier, written as 24 lowercase hex characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Parse from a 24 character hex string
    pub fn parse_str(s: &str) -> Option<Self> {
        if s.len() != 24 || !s.is_ascii() {
            return None;
        }

        let mut bytes = [0u8; 12];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }

    /// Lowercase hex representation
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = CoercionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s).ok_or_else(|| CoercionError::InvalidLiteral {
            value: s.to_string(),
            to: FieldType::ObjectId.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_hex() {
        let hex = "4e4d66343b39b68407000001";
        let id: ObjectId = hex.parse().unwrap();
        assert_eq!(id.to_hex(), hex);
        assert_eq!(id.to_string(), hex);

        assert!(ObjectId::parse_str("4e4d66343b39b684070000").is_none());
        assert!(ObjectId::parse_str("zz4d66343b39b68407000001").is_none());
    }

    #[test]
    fn test_pattern_equality_ignores_option_order() {
        let a = Pattern::with_options("^jo", "mi");
        let b = Pattern::with_options("^jo", "imm");
        assert_eq!(a, b);
        assert_eq!(a.options(), "im");
        assert_ne!(a, Pattern::new("^jo"));
    }

    #[test]
    fn test_pattern_keeps_store_syntax() {
        let pattern = Pattern::with_options(r"^(?!Re:)(\w)\1", "u");
        assert_eq!(pattern.as_str(), r"^(?!Re:)(\w)\1");
        assert_eq!(pattern.options(), "u");
        assert_eq!(pattern.to_string(), r"/^(?!Re:)(\w)\1/u");
    }

    #[test]
    fn test_range_from_inclusive() {
        let value = Value::from(1..=10);
        assert_eq!(value, Value::range(1, 10));
        assert_eq!(value.to_string(), "1..=10");
    }

    #[test]
    fn test_natural_type() {
        assert_eq!(Value::from("007").natural_type(), FieldType::String);
        assert_eq!(Value::from(45).natural_type(), FieldType::Integer);
        assert_eq!(
            Value::document([("$gt", 1)]).natural_type(),
            FieldType::Hash
        );
    }

    #[test]
    fn test_display_document() {
        let value = Value::document([("$in", Value::array(["a", "b"]))]);
        assert_eq!(value.to_string(), r#"{"$in": ["a", "b"]}"#);
    }
}
