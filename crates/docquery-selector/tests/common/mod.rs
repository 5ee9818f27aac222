//! Common test utilities for selector testing
//!
//! - Recording coercer and in-memory schema mocks
//! - Model schemas used across the test files

pub mod mocks;
pub mod models;

pub use mocks::*;
pub use models::*;
