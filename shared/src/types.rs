//! Common types for the shared crate

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Who is currently using the terminal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// No session selected yet
    #[default]
    None,
    /// Customer browsing and ordering
    Customer,
    /// Stall operator managing incoming orders
    Vendor,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Customer => write!(f, "CUSTOMER"),
            Self::Vendor => write!(f, "VENDOR"),
        }
    }
}
