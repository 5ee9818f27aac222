//! docquery type system
//!
//! This crate defines the building blocks the criteria selector works on:
//! - Field types (Boolean, Integer, Date, Array, Hash, etc.)
//! - The loosely-typed condition value model
//! - Extended-JSON conversion for condition values
//! - Scalar coercion rules

pub mod coercion;
pub mod field_type;
pub mod json;
pub mod value;

pub use coercion::*;
pub use field_type::*;
pub use value::*;
