//! Shared types for the food-court ordering core
//!
//! Common types used across the workspace: catalog models, cart and
//! order types, session types, and ID/time utilities.

pub mod models;
pub mod order;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{MenuItem, Restaurant};
pub use order::{Cart, CartItem, Order, OrderStatus};
pub use types::{Timestamp, UserRole};
