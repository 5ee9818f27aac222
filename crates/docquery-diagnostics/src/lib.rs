//! docquery diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! docquery crates: structured error codes and the umbrella error type
//! every crate-local error converts into.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for docquery operations
pub type Result<T> = std::result::Result<T, QueryError>;
