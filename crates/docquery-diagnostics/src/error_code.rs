//! docquery error codes following a structured numbering system
//!
//! Error code ranges:
//! - DQ0001-DQ0099: Coercion errors (scalar typecasting)
//! - DQ0100-DQ0199: Schema errors (field declarations, aliases)
//! - DQ0200-DQ0299: Selector errors (criteria construction)
//! - DQ0400-DQ0499: System errors (malformed input)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DQ{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Coercion errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Cannot convert value")
            .with_help("The value's shape is incompatible with the field's declared type"),
    );
    map.insert(2, ErrorInfo::new("Invalid literal for target type"));
    map.insert(3, ErrorInfo::new("Conversion would lose precision"));
    map.insert(
        4,
        ErrorInfo::new("Unknown field type")
            .with_help("Known types: Object, Boolean, Integer, Float, Decimal, String, ObjectId, Date, DateTime, Array, Hash"),
    );

    // Schema errors (0100-0199)
    map.insert(100, ErrorInfo::new("Duplicate field definition"));
    map.insert(
        101,
        ErrorInfo::new("Alias collision")
            .with_help("An alias may not shadow a field name or another alias"),
    );
    map.insert(102, ErrorInfo::new("Schema load failed"));
    map.insert(103, ErrorInfo::new("Unsupported schema format"));
    map.insert(104, ErrorInfo::new("Invalid field name"));

    // Selector errors (0200-0299)
    map.insert(200, ErrorInfo::new("Typecast failed"));
    map.insert(
        201,
        ErrorInfo::new("Invalid locale")
            .with_help("Locales are made of ASCII letters, digits, '-' and '_' (e.g. en, de, pt-BR)"),
    );

    // System errors (0400-0499)
    map.insert(
        406,
        ErrorInfo::new("Invalid format").with_help("Criteria must be a JSON object of key/condition pairs"),
    );

    map
});

// Coercion errors
pub const DQ0001: ErrorCode = ErrorCode::new(1);
pub const DQ0002: ErrorCode = ErrorCode::new(2);
pub const DQ0003: ErrorCode = ErrorCode::new(3);
pub const DQ0004: ErrorCode = ErrorCode::new(4);

// Schema errors
pub const DQ0100: ErrorCode = ErrorCode::new(100);
pub const DQ0101: ErrorCode = ErrorCode::new(101);
pub const DQ0102: ErrorCode = ErrorCode::new(102);
pub const DQ0103: ErrorCode = ErrorCode::new(103);
pub const DQ0104: ErrorCode = ErrorCode::new(104);

// Selector errors
pub const DQ0200: ErrorCode = ErrorCode::new(200);
pub const DQ0201: ErrorCode = ErrorCode::new(201);

// System errors
pub const DQ0406: ErrorCode = ErrorCode::new(406);
