//! Data models
//!
//! Immutable catalog reference data shared between the state manager and
//! the API surface. Loaded once at startup, never mutated.

pub mod restaurant;

// Re-exports
pub use restaurant::*;
