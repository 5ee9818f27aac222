//! docquery schema abstraction
//!
//! This crate provides:
//! - Field definitions (declared type, localization flag, aliases)
//! - Document schemas loaded from JSON
//! - The `Schema` trait the criteria selector consults
//! - A thread-safe registry supporting schema evolution at runtime

pub mod document;
pub mod field;
pub mod provider;
pub mod registry;

pub use document::*;
pub use field::*;
pub use provider::*;
pub use registry::*;
