//! docquery criteria selector
//!
//! Normalizes loosely-typed query conditions into typed, store-ready ones.
//! This crate provides:
//! - Key resolution (aliases, locale-qualified keys for localized fields)
//! - The typecast algorithm for scalars, arrays, ranges, regexes and
//!   operator documents
//! - `Selector`, the ordered condition mapping built on top of both

pub mod error;
pub mod key;
pub mod locale;
pub mod operators;
pub mod selector;
pub mod typecast;

pub use error::{SelectorError, SelectorResult};
pub use key::{ResolvedKey, resolve_key};
pub use locale::Locale;
pub use operators::{STRUCTURAL_OPERATORS, intrinsic_type};
pub use selector::Selector;
pub use typecast::Typecaster;
